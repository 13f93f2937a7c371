use common::model::client::ClientId;
use common::model::config::PanelConfig;

use crate::services::controller::{Command, Outcome};
use crate::services::notifications::NotificationId;

pub enum Msg {
    ConfigLoaded(PanelConfig),
    Run(Command),
    Settled(Outcome),
    ExpireNotification(NotificationId),
    SetNewName(String),
    SetNewUrl(String),
    SubmitNewClient,
    RequestDelete(ClientId),
    OpenExtraction(ClientId),
    SetStartDate(String),
    SetEndDate(String),
    SetInterval(String),
    SubmitExtraction,
    CloseExtraction,
    OpenEdit(ClientId),
    SetEditName(String),
    SetEditUrl(String),
    SubmitEdit,
    CloseEdit,
    OpenRecords(ClientId),
    NextRecords,
    PreviousRecords,
    CloseRecords,
}
