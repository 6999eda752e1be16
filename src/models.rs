use crate::vocabulary::{DayKey, parse_table_day};
use chrono::Weekday;
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

#[derive(Debug, Clone, Deserialize)]
struct RawMovie {
    title: String,
    day_of_week: String,
}

/// One row of the movie dataset. The day column is classified on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(from = "RawMovie")]
pub struct MovieRecord {
    title: String,
    day_of_week: String,
    weekday: Option<Weekday>,
}

impl MovieRecord {
    pub fn new(title: impl Into<String>, day_of_week: impl Into<String>) -> Self {
        let day_of_week = day_of_week.into();
        Self {
            title: title.into(),
            weekday: parse_table_day(&day_of_week),
            day_of_week,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn day_of_week(&self) -> &str {
        &self.day_of_week
    }

    /// `None` when the stored day is not one of the seven table names.
    pub fn weekday(&self) -> Option<Weekday> {
        self.weekday
    }
}

impl From<RawMovie> for MovieRecord {
    fn from(raw: RawMovie) -> Self {
        Self::new(raw.title, raw.day_of_week)
    }
}

/// Immutable snapshot of the dataset, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    records: Vec<MovieRecord>,
}

impl MovieTable {
    pub fn new(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows that no day query will ever count.
    pub fn unrecognized_rows(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.weekday().is_none())
            .count()
    }
}

/// Per-day counts in vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCounts(pub Vec<(DayKey, u64)>);

impl DayCounts {
    pub fn get(&self, key: DayKey) -> Option<u64> {
        self.0
            .iter()
            .find(|(day, _)| *day == key)
            .map(|&(_, count)| count)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for DayCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (day, count) in &self.0 {
            map.serialize_entry(day.as_str(), count)?;
        }
        map.end()
    }
}

#[derive(Debug, Serialize)]
pub struct DayCountResponse {
    pub dia: DayKey,
    #[serde(rename = "cantidad de películas que fueron estrenadas")]
    pub cantidad: u64,
}

#[derive(Debug, Serialize)]
pub struct DayLink {
    pub dia: DayKey,
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: &'static str,
    pub instructions: &'static str,
    pub links: Vec<DayLink>,
}
