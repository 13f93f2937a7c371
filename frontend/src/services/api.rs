//! Transport seam between the panel core and the management API.
//!
//! `PanelApi` is what the registry and extraction logic talk to. In the
//! browser it is `HttpApi`, a thin `gloo-net` client; tests substitute a
//! scripted implementation.
//!
//! Decoding rules
//! - A 2xx body must be a valid envelope, otherwise it is a transport failure.
//! - A non-2xx body is accepted only when it is an envelope with
//!   `success: false` (the API reports validation and not-found failures that
//!   way). Anything else is a transport failure.
//!
//! Client ids are percent-encoded as a single path segment.

use gloo_net::http::Request;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use url::{ParseError, Position, Url};

use common::model::client::{Client, ClientId};
use common::model::config::PanelConfig;
use common::model::envelope::{ApiResponse, HealthReport};
use common::model::extraction::ExtractionSummary;
use common::model::records::{Record, RecordsPage};
use common::requests::{ClientUpdate, ExtractionRequest, NewClient, RecordsQuery};

use super::errors::{PanelError, TransportError};

/// Envelope of endpoints whose `data` the panel does not read.
pub type Ack = ApiResponse<IgnoredAny>;

/// Operations of the management API the panel consumes.
#[allow(async_fn_in_trait)]
pub trait PanelApi {
    async fn list_clients(&self) -> Result<ApiResponse<Vec<Client>>, TransportError>;
    async fn create_client(&self, body: &NewClient) -> Result<ApiResponse<Client>, TransportError>;
    async fn update_client(
        &self,
        id: &ClientId,
        body: &ClientUpdate,
    ) -> Result<ApiResponse<Client>, TransportError>;
    async fn delete_client(&self, id: &ClientId) -> Result<Ack, TransportError>;
    async fn extract(
        &self,
        body: &ExtractionRequest,
    ) -> Result<ApiResponse<ExtractionSummary>, TransportError>;
    async fn client_data(
        &self,
        id: &ClientId,
        query: &RecordsQuery,
    ) -> Result<ApiResponse<RecordsPage>, TransportError>;
    async fn health(&self) -> Result<HealthReport, TransportError>;
}

/// Browser implementation backed by `fetch` through `gloo-net`.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpApi {
    config: PanelConfig,
}

impl HttpApi {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    async fn send_envelope<T: DeserializeOwned>(
        &self,
        request: Result<Request, gloo_net::Error>,
    ) -> Result<ApiResponse<T>, TransportError> {
        let (status, body) = send(request).await?;
        decode_envelope(status, &body)
    }
}

impl PanelApi for HttpApi {
    async fn list_clients(&self) -> Result<ApiResponse<Vec<Client>>, TransportError> {
        self.send_envelope(Request::get(&self.config.endpoint("clients")).build())
            .await
    }

    async fn create_client(&self, body: &NewClient) -> Result<ApiResponse<Client>, TransportError> {
        let request = Request::post(&self.config.endpoint("clients")).json(body);
        self.send_envelope(request).await
    }

    async fn update_client(
        &self,
        id: &ClientId,
        body: &ClientUpdate,
    ) -> Result<ApiResponse<Client>, TransportError> {
        let url = client_url(&self.config, id, &[], &[])?;
        self.send_envelope(Request::put(&url).json(body)).await
    }

    async fn delete_client(&self, id: &ClientId) -> Result<Ack, TransportError> {
        let url = client_url(&self.config, id, &[], &[])?;
        self.send_envelope(Request::delete(&url).build()).await
    }

    async fn extract(
        &self,
        body: &ExtractionRequest,
    ) -> Result<ApiResponse<ExtractionSummary>, TransportError> {
        let request = Request::post(&self.config.endpoint("data/extract")).json(body);
        self.send_envelope(request).await
    }

    async fn client_data(
        &self,
        id: &ClientId,
        query: &RecordsQuery,
    ) -> Result<ApiResponse<RecordsPage>, TransportError> {
        let url = client_url(&self.config, id, &["data"], &query.pairs())?;
        let (status, body) = send(Request::get(&url).build()).await?;
        decode_records(status, &body)
    }

    async fn health(&self) -> Result<HealthReport, TransportError> {
        let (status, body) = send(Request::get(&self.config.endpoint("health")).build()).await?;
        decode_report(status, &body)
    }
}

/// Sends a request and reads the whole body as text.
async fn send(request: Result<Request, gloo_net::Error>) -> Result<(u16, String), TransportError> {
    let request = request.map_err(|err| TransportError(format!("building request: {}", err)))?;
    let target = format!("{:?} {}", request.method(), request.url());

    let response = request.send().await.map_err(|err| {
        log::warn!("{} failed: {}", target, err);
        TransportError(format!("{}: {}", target, err))
    })?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| TransportError(format!("reading body of {}: {}", target, err)))?;
    log::debug!("{} -> {}", target, status);
    Ok((status, body))
}

/// Origin used to resolve a same-origin API base such as `/api`.
const RELATIVE_ROOT: &str = "http://panel.invalid";

/// `{api_base}/clients/{id}/{tail..}?{pairs}`.
///
/// A relative API base yields a relative URL.
pub fn client_url(
    config: &PanelConfig,
    id: &ClientId,
    tail: &[&str],
    pairs: &[(&str, String)],
) -> Result<String, TransportError> {
    let base = config.endpoint("clients");
    let invalid = |err: ParseError| TransportError(format!("invalid API base {}: {}", base, err));
    let (mut url, relative) = match Url::parse(&base) {
        Ok(url) => (url, false),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let root = Url::parse(RELATIVE_ROOT).map_err(invalid)?;
            (root.join(&base).map_err(invalid)?, true)
        }
        Err(err) => return Err(invalid(err)),
    };

    url.path_segments_mut()
        .map_err(|()| TransportError(format!("API base {} cannot carry a path", base)))?
        .push(&id.to_string())
        .extend(tail);
    if !pairs.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(pairs.iter().map(|(key, value)| (*key, value.as_str())));
    }

    Ok(if relative {
        url[Position::BeforePath..].to_string()
    } else {
        url.to_string()
    })
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Applies the envelope decoding rules described in the module docs.
pub fn decode_envelope<T: DeserializeOwned>(
    status: u16,
    body: &str,
) -> Result<ApiResponse<T>, TransportError> {
    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(envelope) if is_success(status) || !envelope.success => Ok(envelope),
        Ok(_) => Err(TransportError(format!(
            "status {} with a success payload",
            status
        ))),
        Err(err) if is_success(status) => Err(TransportError(format!(
            "undecodable response: {}",
            err
        ))),
        Err(_) => Err(TransportError(format!("status {}", status))),
    }
}

fn decode_report(status: u16, body: &str) -> Result<HealthReport, TransportError> {
    if !is_success(status) {
        return Err(TransportError(format!("status {}", status)));
    }
    serde_json::from_str(body)
        .map_err(|err| TransportError(format!("undecodable health report: {}", err)))
}

/// `client` and `table` travel next to `data` rather than inside it.
#[derive(Deserialize)]
struct RecordsSource {
    #[serde(default)]
    client: Option<String>,
    #[serde(default)]
    table: Option<String>,
}

/// Decodes `GET /clients/{id}/data` with the envelope rules, then attaches
/// the client name and table to the rows.
pub fn decode_records(status: u16, body: &str) -> Result<ApiResponse<RecordsPage>, TransportError> {
    let envelope: ApiResponse<Vec<Record>> = decode_envelope(status, body)?;
    let source: RecordsSource = serde_json::from_str(body)
        .map_err(|err| TransportError(format!("undecodable records page: {}", err)))?;
    Ok(envelope.map(|rows| RecordsPage {
        client: source.client,
        table: source.table,
        rows,
    }))
}

/// Turns a decoded envelope into the operation result.
///
/// `fallback` is the message used when the server reports a failure without
/// any text of its own.
pub fn into_data<T>(envelope: ApiResponse<T>, fallback: &str) -> Result<T, PanelError> {
    if !envelope.success {
        return Err(business(&envelope, fallback));
    }
    envelope
        .data
        .ok_or_else(|| PanelError::Connection("success payload without data".to_string()))
}

/// Like [`into_data`] for endpoints whose success carries no data.
pub fn into_ack<T>(envelope: ApiResponse<T>, fallback: &str) -> Result<(), PanelError> {
    if envelope.success {
        Ok(())
    } else {
        Err(business(&envelope, fallback))
    }
}

fn business<T>(envelope: &ApiResponse<T>, fallback: &str) -> PanelError {
    PanelError::Business(envelope.error_text().unwrap_or(fallback).to_string())
}
