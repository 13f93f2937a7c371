use chrono::NaiveDate;
use serde::Serialize;

use crate::model::client::ClientId;

/// Body of `POST /clients`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub name: String,
    pub url: String,
}

/// Body of `PUT /clients/{id}`. Absent fields are left untouched by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Body of `POST /data/extract`. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionRequest {
    pub client_id: ClientId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub delta_hours: u32,
}

/// Rows per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Query string of `GET /clients/{id}/data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub limit: u32,
    pub offset: u32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Default for RecordsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
            start_date: None,
            end_date: None,
        }
    }
}

impl RecordsQuery {
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(date) = self.start_date {
            pairs.push(("start_date", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("end_date", date.format("%Y-%m-%d").to_string()));
        }
        pairs
    }

    /// The page after this one.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(self.limit),
            ..self.clone()
        }
    }

    /// The page before this one, or `None` on the first page.
    pub fn previous(&self) -> Option<Self> {
        (self.offset > 0).then(|| Self {
            offset: self.offset.saturating_sub(self.limit),
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extraction_request_uses_plain_dates() {
        let request = ExtractionRequest {
            client_id: ClientId::Int(1),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            delta_hours: 1,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            serde_json::json!({
                "client_id": 1,
                "start_date": "2024-01-01",
                "end_date": "2024-01-31",
                "delta_hours": 1
            })
        );
    }

    #[test]
    fn update_omits_untouched_fields() {
        let update = ClientUpdate {
            name: Some("Acme North".to_string()),
            url: None,
        };
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"name":"Acme North"}"#
        );
    }

    #[test]
    fn records_query_pairs_skip_open_dates() {
        let query = RecordsQuery {
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31),
            ..RecordsQuery::default()
        };

        assert_eq!(
            query.pairs(),
            vec![
                ("limit", "100".to_string()),
                ("offset", "0".to_string()),
                ("end_date", "2024-01-31".to_string()),
            ]
        );
    }

    #[test]
    fn records_query_pages_by_limit() {
        let first = RecordsQuery {
            limit: 50,
            ..RecordsQuery::default()
        };
        assert_eq!(first.previous(), None);

        let second = first.next();
        assert_eq!(second.offset, 50);
        assert_eq!(second.previous(), Some(first));
    }
}
