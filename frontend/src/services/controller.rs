//! Panel state and the command/outcome cycle that drives it.
//!
//! A user action becomes a [`Command`]. The component marks the state busy
//! with [`PanelState::begin`], runs [`execute`] off the update loop, and feeds
//! the resulting [`Outcome`] back through [`PanelState::settle`]. `settle`
//! posts exactly one notification per outcome (a successful registry read
//! is silent), clears the loading flag last, and reports whether the client
//! cache went stale so the component can issue a single reload.

use common::model::client::{Client, ClientId};
use common::model::envelope::HealthReport;
use common::model::extraction::ExtractionSummary;
use common::model::records::RecordsPage;
use common::requests::RecordsQuery;

use super::api::PanelApi;
use super::errors::PanelError;
use super::extraction::{self, ExtractionDraft, ExtractionSession};
use super::notifications::{ExpiryScheduler, NotificationId, NotificationKind, NotificationQueue};
use super::records::RecordsBrowser;
use super::registry;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadClients,
    CheckHealth,
    AddClient { name: String, url: String },
    UpdateClient { id: ClientId, name: String, url: String },
    RemoveClient { id: ClientId, name: String },
    Extract(ExtractionDraft),
    LoadRecords { id: ClientId, query: RecordsQuery },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Listed(Result<Vec<Client>, PanelError>),
    Health(Result<HealthReport, PanelError>),
    Added(Result<Client, PanelError>),
    Updated(Result<Client, PanelError>),
    Removed { name: String, result: Result<(), PanelError> },
    Extracted(Result<ExtractionSummary, PanelError>),
    Records {
        id: ClientId,
        query: RecordsQuery,
        result: Result<RecordsPage, PanelError>,
    },
}

impl Outcome {
    /// True when a mutation succeeded and the cached registry no longer
    /// reflects the backend.
    pub fn invalidates_registry(&self) -> bool {
        match self {
            Outcome::Added(result) | Outcome::Updated(result) => result.is_ok(),
            Outcome::Removed { result, .. } => result.is_ok(),
            Outcome::Extracted(result) => result.is_ok(),
            Outcome::Listed(_) | Outcome::Health(_) | Outcome::Records { .. } => false,
        }
    }
}

/// Runs one command against the API. Never touches panel state.
pub async fn execute<A: PanelApi>(api: &A, command: Command) -> Outcome {
    match command {
        Command::LoadClients => Outcome::Listed(registry::list(api).await),
        Command::CheckHealth => {
            Outcome::Health(api.health().await.map_err(PanelError::from))
        }
        Command::AddClient { name, url } => Outcome::Added(registry::add(api, &name, &url).await),
        Command::UpdateClient { id, name, url } => {
            Outcome::Updated(registry::update(api, &id, &name, &url).await)
        }
        Command::RemoveClient { id, name } => Outcome::Removed {
            result: registry::remove(api, &id).await,
            name,
        },
        Command::Extract(draft) => Outcome::Extracted(extraction::submit(api, &draft).await),
        Command::LoadRecords { id, query } => Outcome::Records {
            result: registry::records(api, &id, &query).await,
            id,
            query,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiStatus {
    #[default]
    Unknown,
    Online {
        database: bool,
    },
    Offline,
}

/// Text of the "new client" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientForm {
    pub name: String,
    pub url: String,
}

/// Draft of the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientEdit {
    pub client_id: ClientId,
    pub original_name: String,
    pub name: String,
    pub url: String,
}

impl ClientEdit {
    pub fn of(client: &Client) -> Self {
        Self {
            client_id: client.id.clone(),
            original_name: client.name.clone(),
            name: client.name.clone(),
            url: client.url.clone(),
        }
    }
}

/// What `settle` did, for the caller to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settled {
    pub reload: bool,
    pub notified: Option<NotificationId>,
}

/// All transient state of the panel, owned by the view component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub clients: Vec<Client>,
    pub loading: bool,
    pub notifications: NotificationQueue,
    pub extraction: ExtractionSession,
    pub form: ClientForm,
    pub editing: Option<ClientEdit>,
    /// Stored-rows dialog, when open.
    pub records: Option<RecordsBrowser>,
    pub api_status: ApiStatus,
}

impl PanelState {
    /// Marks an operation in flight. Extraction drafts move to `Submitting`.
    ///
    /// Returns the command to execute; an extraction whose dialog is not open
    /// yields `None` and nothing changes.
    pub fn begin(&mut self, command: Command) -> Option<Command> {
        let command = match command {
            Command::Extract(_) => Command::Extract(self.extraction.begin_submit()?),
            other => other,
        };
        if !matches!(command, Command::CheckHealth) {
            self.loading = true;
        }
        Some(command)
    }

    /// Applies an outcome: updates caches and dialogs, posts the notification,
    /// then clears the loading flag.
    pub fn settle(
        &mut self,
        outcome: Outcome,
        now_ms: f64,
        scheduler: &impl ExpiryScheduler,
    ) -> Settled {
        let reload = outcome.invalidates_registry();
        let report = match outcome {
            Outcome::Listed(Ok(clients)) => {
                log::debug!("registry holds {} clients", clients.len());
                self.clients = clients;
                None
            }
            Outcome::Listed(Err(err)) => Some(Err(err)),
            Outcome::Health(result) => {
                self.api_status = match result {
                    Ok(report) if report.success => ApiStatus::Online {
                        database: report.supabase_connected,
                    },
                    Ok(_) => ApiStatus::Offline,
                    Err(err) => {
                        log::warn!("health check failed: {:?}", err);
                        ApiStatus::Offline
                    }
                };
                return Settled {
                    reload: false,
                    notified: None,
                };
            }
            Outcome::Added(result) => Some(result.map(|client| {
                self.form = ClientForm::default();
                format!(
                    "Client \"{}\" created. Table: {}",
                    client.name, client.data_table
                )
            })),
            Outcome::Updated(result) => Some(result.map(|client| {
                self.editing = None;
                format!("Client \"{}\" updated", client.name)
            })),
            Outcome::Removed { name, result } => {
                Some(result.map(|()| format!("Client \"{}\" deleted", name)))
            }
            Outcome::Extracted(result) => {
                self.extraction.finish(result.is_ok());
                Some(result.map(|summary| extraction::success_message(&summary)))
            }
            Outcome::Records { id, query, result } => match result {
                Ok(page) => {
                    if let Some(browser) = &mut self.records {
                        browser.show(&id, query, page);
                    }
                    None
                }
                Err(err) => Some(Err(err)),
            },
        };

        let notified = report.map(|report| self.report(report, now_ms, scheduler));
        self.loading = false;
        Settled { reload, notified }
    }

    /// Posts a notification for a finished operation.
    pub fn report(
        &mut self,
        report: Result<String, PanelError>,
        now_ms: f64,
        scheduler: &impl ExpiryScheduler,
    ) -> NotificationId {
        let (message, kind) = match report {
            Ok(message) => (message, NotificationKind::Success),
            Err(err) => {
                if let PanelError::Connection(detail) = &err {
                    log::error!("connection error: {}", detail);
                }
                (err.user_message(), NotificationKind::Error)
            }
        };
        self.notifications.post(scheduler, now_ms, message, kind)
    }

    /// First load still running: nothing to show but a spinner.
    pub fn awaiting_first_load(&self) -> bool {
        self.loading && self.clients.is_empty()
    }

    pub fn find_client(&self, id: &ClientId) -> Option<&Client> {
        self.clients.iter().find(|c| &c.id == id)
    }
}
