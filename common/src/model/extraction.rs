use serde::{Deserialize, Serialize};

/// `data` of a successful `POST /data/extract`.
///
/// `records_inserted` and `table` are required: a success payload without them
/// fails to decode and is handled like any other unreadable response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionSummary {
    pub records_inserted: u64,
    pub table: String,
    #[serde(default)]
    pub client: Option<String>,
    #[serde(default)]
    pub range: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub table_created: Option<bool>,
}
