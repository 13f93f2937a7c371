use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a registered client.
///
/// The management API may hand out integer keys or string keys depending on
/// the table it is backed by. The value is echoed back to the API in exactly
/// the JSON shape it arrived in, so `1` stays a number and `"a1"` stays a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClientId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientId::Int(id) => write!(f, "{}", id),
            ClientId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ClientId {
    fn from(value: i64) -> Self {
        ClientId::Int(value)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        ClientId::Text(value.to_string())
    }
}

/// A registered metering device endpoint and the table its readings land in.
///
/// `data_table` is assigned by the backend when the client is created; the
/// panel only displays it and never sends it back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub url: String,
    pub data_table: String,
    /// Timestamp of the last change the backend recorded (ISO-8601), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_and_text_ids_keep_their_json_shape() {
        let int: ClientId = serde_json::from_str("7").unwrap();
        let text: ClientId = serde_json::from_str("\"c-7\"").unwrap();

        assert_eq!(int, ClientId::Int(7));
        assert_eq!(text, ClientId::Text("c-7".to_string()));
        assert_eq!(serde_json::to_string(&int).unwrap(), "7");
        assert_eq!(serde_json::to_string(&text).unwrap(), "\"c-7\"");
        assert_eq!(int.to_string(), "7");
    }

    #[test]
    fn client_ignores_unknown_backend_columns() {
        let client: Client = serde_json::from_str(
            r#"{"id":1,"name":"Acme","url":"https://egauge1.egaug.es","data_table":"t_acme","columns":["a"],"created_at":"2024-01-01"}"#,
        )
        .unwrap();

        assert_eq!(client.name, "Acme");
        assert_eq!(client.data_table, "t_acme");
        assert!(client.updated_at.is_none());
    }
}
