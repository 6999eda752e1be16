use crate::models::MovieTable;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub table: Arc<MovieTable>,
    /// Used for links when a request carries no host.
    pub default_host: Arc<str>,
}

impl AppState {
    pub fn new(table: MovieTable, default_host: impl Into<Arc<str>>) -> Self {
        Self {
            table: Arc::new(table),
            default_host: default_host.into(),
        }
    }
}
