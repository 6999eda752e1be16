use crate::errors::DataError;
use crate::models::{MovieRecord, MovieTable};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

const REQUIRED_COLUMNS: [&str; 2] = ["title", "day_of_week"];

pub async fn load_table(path: &Path) -> Result<MovieTable, DataError> {
    let bytes = fs::read(path).await.map_err(|source| DataError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_table(&bytes)?;

    info!("loaded {} movies from {}", table.len(), path.display());
    let unrecognized = table.unrecognized_rows();
    if unrecognized > 0 {
        warn!("{unrecognized} movies have an unrecognized day_of_week and will not be counted");
    }

    Ok(table)
}

pub fn parse_table(bytes: &[u8]) -> Result<MovieTable, DataError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers = reader.headers()?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DataError::MissingColumn(column));
        }
    }

    let records = reader
        .deserialize::<MovieRecord>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MovieTable::new(records))
}
