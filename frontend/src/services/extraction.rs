//! Extraction dialog state and submission.
//!
//! The session walks `Closed -> Open -> Submitting -> {Open | Closed}`. Field
//! edits never validate; the only checks happen when the draft is turned into
//! an `ExtractionRequest` right before it is sent.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use num_format::{Locale, ToFormattedString};

use common::model::client::Client;
use common::model::extraction::ExtractionSummary;
use common::requests::ExtractionRequest;

use super::api::{into_data, PanelApi};
use super::errors::PanelError;

const EXTRACT_FALLBACK: &str = "Failed to extract data";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Sampling intervals the backend accepts, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleInterval {
    #[default]
    Hourly,
    TwoHours,
    FourHours,
    SixHours,
    TwelveHours,
    Daily,
}

impl SampleInterval {
    pub const ALL: [SampleInterval; 6] = [
        SampleInterval::Hourly,
        SampleInterval::TwoHours,
        SampleInterval::FourHours,
        SampleInterval::SixHours,
        SampleInterval::TwelveHours,
        SampleInterval::Daily,
    ];

    pub fn hours(self) -> u32 {
        match self {
            SampleInterval::Hourly => 1,
            SampleInterval::TwoHours => 2,
            SampleInterval::FourHours => 4,
            SampleInterval::SixHours => 6,
            SampleInterval::TwelveHours => 12,
            SampleInterval::Daily => 24,
        }
    }

    pub fn label(self) -> String {
        match self.hours() {
            1 => "Every hour".to_string(),
            24 => "Every 24 hours (daily)".to_string(),
            n => format!("Every {} hours", n),
        }
    }
}

impl fmt::Display for SampleInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.hours())
    }
}

impl FromStr for SampleInterval {
    type Err = PanelError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let hours: u32 = text
            .trim()
            .parse()
            .map_err(|_| PanelError::validation("Invalid sampling interval"))?;
        SampleInterval::ALL
            .into_iter()
            .find(|interval| interval.hours() == hours)
            .ok_or_else(|| PanelError::validation("Invalid sampling interval"))
    }
}

/// First and last day of the month before `today`.
pub fn previous_month_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first_of_month = today - Days::new(u64::from(today.day0()));
    let last = first_of_month - Days::new(1);
    let first = last - Days::new(u64::from(last.day0()));
    (first, last)
}

/// Parses the value of an `<input type="date">`. Empty or malformed text
/// means "no date".
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionDraft {
    /// Snapshot of the client the dialog was opened for.
    pub target: Option<Client>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Raw value of the interval selector, coerced to hours on submit.
    pub interval: String,
}

impl ExtractionDraft {
    pub fn for_client(client: &Client, today: NaiveDate) -> Self {
        let (start, end) = previous_month_range(today);
        Self {
            target: Some(client.clone()),
            start_date: Some(start),
            end_date: Some(end),
            interval: SampleInterval::default().to_string(),
        }
    }

    /// Checks presence of every field and coerces the interval.
    /// Date ordering is left to the backend.
    pub fn to_request(&self) -> Result<ExtractionRequest, PanelError> {
        let (Some(target), Some(start_date), Some(end_date)) =
            (&self.target, self.start_date, self.end_date)
        else {
            return Err(PanelError::validation(
                "Select a client, a start date and an end date",
            ));
        };
        let interval: SampleInterval = self.interval.parse()?;

        Ok(ExtractionRequest {
            client_id: target.id.clone(),
            start_date,
            end_date,
            delta_hours: interval.hours(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionSession {
    phase: SessionPhase,
    draft: Option<ExtractionDraft>,
}

impl ExtractionSession {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// True while the dialog is shown, including while a submission is in flight.
    pub fn is_visible(&self) -> bool {
        self.phase != SessionPhase::Closed
    }

    pub fn draft(&self) -> Option<&ExtractionDraft> {
        self.draft.as_ref()
    }

    /// Opens the dialog for `client` with fresh defaults derived from `today`.
    ///
    /// Only a closed session opens; otherwise nothing changes and `false` is
    /// returned.
    pub fn open(&mut self, client: &Client, today: NaiveDate) -> bool {
        if self.phase != SessionPhase::Closed {
            return false;
        }
        self.draft = Some(ExtractionDraft::for_client(client, today));
        self.phase = SessionPhase::Open;
        true
    }

    pub fn set_start_date(&mut self, text: &str) {
        if let Some(draft) = self.editable() {
            draft.start_date = parse_date(text);
        }
    }

    pub fn set_end_date(&mut self, text: &str) {
        if let Some(draft) = self.editable() {
            draft.end_date = parse_date(text);
        }
    }

    pub fn set_interval(&mut self, text: &str) {
        if let Some(draft) = self.editable() {
            draft.interval = text.to_string();
        }
    }

    /// Explicit cancel or a click on the backdrop.
    pub fn cancel(&mut self) {
        if self.phase == SessionPhase::Open {
            self.close();
        }
    }

    /// Moves an open session to `Submitting` and hands out the draft to send.
    pub fn begin_submit(&mut self) -> Option<ExtractionDraft> {
        if self.phase != SessionPhase::Open {
            return None;
        }
        self.phase = SessionPhase::Submitting;
        self.draft.clone()
    }

    /// Ends a submission: success closes the dialog, anything else reopens it
    /// with the draft untouched.
    pub fn finish(&mut self, succeeded: bool) {
        if self.phase != SessionPhase::Submitting {
            return;
        }
        if succeeded {
            self.close();
        } else {
            self.phase = SessionPhase::Open;
        }
    }

    fn close(&mut self) {
        self.phase = SessionPhase::Closed;
        self.draft = None;
    }

    fn editable(&mut self) -> Option<&mut ExtractionDraft> {
        match self.phase {
            SessionPhase::Open => self.draft.as_mut(),
            _ => None,
        }
    }
}

/// Validates `draft` and, if complete, asks the backend to run the extraction.
pub async fn submit<A: PanelApi>(
    api: &A,
    draft: &ExtractionDraft,
) -> Result<ExtractionSummary, PanelError> {
    let request = draft.to_request()?;
    log::info!(
        "extracting client {} from {} to {} every {}h",
        request.client_id,
        request.start_date,
        request.end_date,
        request.delta_hours
    );
    let envelope = api.extract(&request).await?;
    into_data(envelope, EXTRACT_FALLBACK)
}

pub fn success_message(summary: &ExtractionSummary) -> String {
    format!(
        "{} records inserted into table {}",
        summary.records_inserted.to_formatted_string(&Locale::en),
        summary.table
    )
}
