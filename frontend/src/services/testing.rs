//! In-memory `PanelApi` for core tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use common::model::client::{Client, ClientId};
use common::model::envelope::{ApiResponse, HealthReport};
use common::model::extraction::ExtractionSummary;
use common::model::records::{Record, RecordsPage};
use common::requests::{ClientUpdate, ExtractionRequest, NewClient, RecordsQuery};

use super::api::{Ack, PanelApi};
use super::errors::TransportError;

type Scripted<T> = RefCell<VecDeque<Result<T, TransportError>>>;

/// Answers each call with the next scripted response for its endpoint and
/// records the call as `"METHOD /path body"`.
///
/// Unscripted list calls answer with an empty registry; any other unscripted
/// call fails at the transport level.
#[derive(Default)]
pub struct ScriptedApi {
    pub lists: Scripted<ApiResponse<Vec<Client>>>,
    pub creates: Scripted<ApiResponse<Client>>,
    pub updates: Scripted<ApiResponse<Client>>,
    pub deletes: Scripted<Ack>,
    pub extracts: Scripted<ApiResponse<ExtractionSummary>>,
    pub records: Scripted<ApiResponse<RecordsPage>>,
    pub health: Scripted<HealthReport>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls.borrow().iter().filter(|c| c.starts_with(prefix)).count()
    }

    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

fn next<T>(queue: &Scripted<T>) -> Result<T, TransportError> {
    queue
        .borrow_mut()
        .pop_front()
        .unwrap_or_else(|| Err(TransportError("unscripted call".to_string())))
}

fn body<B: serde::Serialize>(value: &B) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

impl PanelApi for ScriptedApi {
    async fn list_clients(&self) -> Result<ApiResponse<Vec<Client>>, TransportError> {
        self.record("GET /clients".to_string());
        self.lists
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::ok(Vec::new())))
    }

    async fn create_client(&self, new: &NewClient) -> Result<ApiResponse<Client>, TransportError> {
        self.record(format!("POST /clients {}", body(new)));
        next(&self.creates)
    }

    async fn update_client(
        &self,
        id: &ClientId,
        update: &ClientUpdate,
    ) -> Result<ApiResponse<Client>, TransportError> {
        self.record(format!("PUT /clients/{} {}", id, body(update)));
        next(&self.updates)
    }

    async fn delete_client(&self, id: &ClientId) -> Result<Ack, TransportError> {
        self.record(format!("DELETE /clients/{}", id));
        next(&self.deletes)
    }

    async fn extract(
        &self,
        request: &ExtractionRequest,
    ) -> Result<ApiResponse<ExtractionSummary>, TransportError> {
        self.record(format!("POST /data/extract {}", body(request)));
        next(&self.extracts)
    }

    async fn client_data(
        &self,
        id: &ClientId,
        query: &RecordsQuery,
    ) -> Result<ApiResponse<RecordsPage>, TransportError> {
        let pairs: Vec<String> = query
            .pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        self.record(format!("GET /clients/{}/data?{}", id, pairs.join("&")));
        next(&self.records)
    }

    async fn health(&self) -> Result<HealthReport, TransportError> {
        self.record("GET /health".to_string());
        next(&self.health)
    }
}

pub fn acme() -> Client {
    Client {
        id: ClientId::Int(1),
        name: "Acme".to_string(),
        url: "https://egauge1.egaug.es".to_string(),
        data_table: "t_acme".to_string(),
        updated_at: None,
    }
}

pub fn summary(records: u64, table: &str) -> ExtractionSummary {
    ExtractionSummary {
        records_inserted: records,
        table: table.to_string(),
        client: None,
        range: None,
        columns: Vec::new(),
        table_created: None,
    }
}

/// A full page of `rows` identical readings for the Acme client.
pub fn page(rows: usize) -> RecordsPage {
    let mut record = Record::new();
    record.insert("timestamp".to_string(), "2024-01-01T00:00:00".into());
    record.insert("grid".to_string(), 1.5.into());
    RecordsPage {
        client: Some("Acme".to_string()),
        table: Some("t_acme".to_string()),
        rows: vec![record; rows],
    }
}
