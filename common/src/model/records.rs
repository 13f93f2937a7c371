use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One stored row. Columns depend on the device, so rows stay untyped.
pub type Record = Map<String, Value>;

/// A page of `GET /clients/{id}/data`, with the client name and table the
/// API reports next to `data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordsPage {
    pub client: Option<String>,
    pub table: Option<String>,
    pub rows: Vec<Record>,
}

impl RecordsPage {
    /// Column names in first-seen order across all rows.
    pub fn columns(&self) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for key in self.rows.iter().flat_map(|row| row.keys()) {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {}", other),
        }
    }

    #[test]
    fn columns_merge_sparse_rows() {
        let page = RecordsPage {
            rows: vec![
                row(json!({"timestamp": "2024-01-01T00:00:00", "grid": 1.5})),
                row(json!({"timestamp": "2024-01-01T01:00:00", "solar": 0.2})),
            ],
            ..RecordsPage::default()
        };

        let columns = page.columns();

        assert_eq!(columns.len(), 3);
        assert!(columns.contains(&"solar".to_string()));
        assert_eq!(columns.iter().filter(|c| *c == "timestamp").count(), 1);
    }
}
