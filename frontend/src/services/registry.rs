//! Client registry operations: list, add, update and delete, plus reading
//! back the rows stored for a client.
//!
//! Each function validates its input before touching the network, calls the
//! API once, and normalizes the answer into `Result<_, PanelError>`. None of
//! them touch the client cache; the caller decides whether to reload it.

use url::Url;

use common::model::client::{Client, ClientId};
use common::model::records::RecordsPage;
use common::requests::{ClientUpdate, NewClient, RecordsQuery};

use super::api::{into_ack, into_data, PanelApi};
use super::errors::PanelError;

const LIST_FALLBACK: &str = "Failed to load clients";
const ADD_FALLBACK: &str = "Failed to create client";
const UPDATE_FALLBACK: &str = "Failed to update client";
const REMOVE_FALLBACK: &str = "Failed to delete client";
const RECORDS_FALLBACK: &str = "Failed to load client data";

/// Interactive yes/no gate shown before destructive actions.
pub trait ConfirmGate {
    fn confirm(&self, message: &str) -> bool;
}

pub async fn list<A: PanelApi>(api: &A) -> Result<Vec<Client>, PanelError> {
    let envelope = api.list_clients().await?;
    into_data(envelope, LIST_FALLBACK)
}

/// Registers a new client. Both fields are required and `url` must be an
/// absolute http(s) address; otherwise no request is sent.
pub async fn add<A: PanelApi>(api: &A, name: &str, url: &str) -> Result<Client, PanelError> {
    let body = validate_new_client(name, url)?;
    let envelope = api.create_client(&body).await?;
    if let Some(message) = &envelope.message {
        log::info!("{}", message);
    }
    into_data(envelope, ADD_FALLBACK)
}

/// Renames a client and/or points it at another device. Blank fields are
/// left untouched; if both are blank nothing is sent.
pub async fn update<A: PanelApi>(
    api: &A,
    id: &ClientId,
    name: &str,
    url: &str,
) -> Result<Client, PanelError> {
    let body = validate_update(name, url)?;
    let envelope = api.update_client(id, &body).await?;
    into_data(envelope, UPDATE_FALLBACK)
}

/// Deletes a client. Callers must have passed [`confirm_removal`] first.
pub async fn remove<A: PanelApi>(api: &A, id: &ClientId) -> Result<(), PanelError> {
    let envelope = api.delete_client(id).await?;
    into_ack(envelope, REMOVE_FALLBACK)
}

/// Reads one page of the rows stored for a client.
pub async fn records<A: PanelApi>(
    api: &A,
    id: &ClientId,
    query: &RecordsQuery,
) -> Result<RecordsPage, PanelError> {
    if query.limit == 0 {
        return Err(PanelError::validation("Page size must be positive"));
    }
    if let (Some(start), Some(end)) = (query.start_date, query.end_date) {
        if start > end {
            return Err(PanelError::validation("Start date must not be after end date"));
        }
    }
    let envelope = api.client_data(id, query).await?;
    into_data(envelope, RECORDS_FALLBACK)
}

/// Asks the user whether `display_name` should really be deleted.
pub fn confirm_removal(gate: &impl ConfirmGate, display_name: &str) -> bool {
    gate.confirm(&format!(
        "Delete client \"{}\"? Its registry entry will be removed.",
        display_name
    ))
}

pub fn validate_new_client(name: &str, url: &str) -> Result<NewClient, PanelError> {
    let (name, url) = (name.trim(), url.trim());
    if name.is_empty() || url.is_empty() {
        return Err(PanelError::validation("Name and URL are required"));
    }
    check_url(url)?;
    Ok(NewClient {
        name: name.to_string(),
        url: url.to_string(),
    })
}

fn validate_update(name: &str, url: &str) -> Result<ClientUpdate, PanelError> {
    let name = Some(name.trim()).filter(|s| !s.is_empty());
    let url = Some(url.trim()).filter(|s| !s.is_empty());
    if name.is_none() && url.is_none() {
        return Err(PanelError::validation("Nothing to update"));
    }
    if let Some(url) = url {
        check_url(url)?;
    }
    Ok(ClientUpdate {
        name: name.map(str::to_string),
        url: url.map(str::to_string),
    })
}

fn check_url(url: &str) -> Result<(), PanelError> {
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host().is_some() => {
            Ok(())
        }
        _ => Err(PanelError::validation("URL must be a valid http(s) address")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::errors::TransportError;
    use crate::services::testing::{acme, page, ScriptedApi};
    use chrono::NaiveDate;
    use common::model::envelope::ApiResponse;
    use futures::executor::block_on;

    struct Answer(bool);

    impl ConfirmGate for Answer {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    #[test]
    fn list_returns_registry_contents() {
        let api = ScriptedApi::default();
        api.lists.borrow_mut().push_back(Ok(ApiResponse::ok(vec![acme()])));

        let clients = block_on(list(&api)).unwrap();

        assert_eq!(clients.len(), 1);
        assert_eq!(clients[0].name, "Acme");
    }

    #[test]
    fn add_with_empty_name_sends_nothing() {
        let api = ScriptedApi::default();

        let result = block_on(add(&api, "", "https://x"));

        assert_eq!(result, Err(PanelError::validation("Name and URL are required")));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn add_with_malformed_url_sends_nothing() {
        let api = ScriptedApi::default();

        let result = block_on(add(&api, "Acme", "egauge1 dot egaug.es"));

        assert!(matches!(result, Err(PanelError::Validation(_))));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn add_trims_input_and_reports_server_refusal() {
        let api = ScriptedApi::default();
        api.creates.borrow_mut().push_back(Ok(ApiResponse::failed(
            "A client with that name or table already exists",
        )));

        let result = block_on(add(&api, "  Acme ", " https://egauge1.egaug.es "));

        assert_eq!(
            result,
            Err(PanelError::Business(
                "A client with that name or table already exists".to_string()
            ))
        );
        assert_eq!(
            api.calls(),
            vec![r#"POST /clients {"name":"Acme","url":"https://egauge1.egaug.es"}"#]
        );
    }

    #[test]
    fn transport_failure_becomes_connection_error() {
        let api = ScriptedApi::default();
        api.lists
            .borrow_mut()
            .push_back(Err(TransportError("connection refused".to_string())));

        let result = block_on(list(&api));

        assert_eq!(result, Err(PanelError::Connection("connection refused".to_string())));
    }

    #[test]
    fn update_needs_at_least_one_field() {
        let api = ScriptedApi::default();

        let result = block_on(update(&api, &ClientId::Int(1), " ", ""));

        assert_eq!(result, Err(PanelError::validation("Nothing to update")));
        assert!(api.calls().is_empty());
    }

    #[test]
    fn update_sends_only_filled_fields() {
        let api = ScriptedApi::default();
        api.updates.borrow_mut().push_back(Ok(ApiResponse::ok(acme())));

        block_on(update(&api, &ClientId::Int(1), "Acme North", "")).unwrap();

        assert_eq!(api.calls(), vec![r#"PUT /clients/1 {"name":"Acme North"}"#]);
    }

    #[test]
    fn remove_uses_fallback_when_server_is_silent() {
        let api = ScriptedApi::default();
        api.deletes.borrow_mut().push_back(Ok(ApiResponse::failed("")));

        let result = block_on(remove(&api, &ClientId::Int(1)));

        assert_eq!(result, Err(PanelError::Business(REMOVE_FALLBACK.to_string())));
    }

    #[test]
    fn removal_gate_passes_the_user_answer_through() {
        assert!(confirm_removal(&Answer(true), "Acme"));
        assert!(!confirm_removal(&Answer(false), "Acme"));
    }

    #[test]
    fn records_fetch_one_page() {
        let api = ScriptedApi::default();
        api.records.borrow_mut().push_back(Ok(ApiResponse::ok(page(3))));

        let result = block_on(records(&api, &ClientId::Int(1), &RecordsQuery::default())).unwrap();

        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.table.as_deref(), Some("t_acme"));
        assert_eq!(api.calls(), vec!["GET /clients/1/data?limit=100&offset=0"]);
    }

    #[test]
    fn records_of_unknown_client_report_server_text() {
        let api = ScriptedApi::default();
        api.records
            .borrow_mut()
            .push_back(Ok(ApiResponse::failed("Client not found")));

        let result = block_on(records(&api, &ClientId::Int(9), &RecordsQuery::default()));

        assert_eq!(result, Err(PanelError::Business("Client not found".to_string())));
    }

    #[test]
    fn records_transport_failure_is_a_connection_error() {
        let api = ScriptedApi::default();
        api.records
            .borrow_mut()
            .push_back(Err(TransportError("timed out".to_string())));

        let result = block_on(records(&api, &ClientId::Int(1), &RecordsQuery::default()));

        assert_eq!(result, Err(PanelError::Connection("timed out".to_string())));
    }

    #[test]
    fn records_with_inverted_range_send_nothing() {
        let api = ScriptedApi::default();
        let query = RecordsQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            ..RecordsQuery::default()
        };

        let result = block_on(records(&api, &ClientId::Int(1), &query));

        assert!(matches!(result, Err(PanelError::Validation(_))));
        assert!(api.calls().is_empty());
    }
}
