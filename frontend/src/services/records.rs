//! Read-only browser over the rows stored for one client, one page at a time.

use serde_json::Value;

use common::model::client::{Client, ClientId};
use common::model::records::RecordsPage;
use common::requests::RecordsQuery;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordsBrowser {
    pub client_id: ClientId,
    pub client_name: String,
    query: RecordsQuery,
    page: Option<RecordsPage>,
}

impl RecordsBrowser {
    /// Browser for `client`, positioned before its first page.
    pub fn for_client(client: &Client) -> Self {
        Self {
            client_id: client.id.clone(),
            client_name: client.name.clone(),
            query: RecordsQuery::default(),
            page: None,
        }
    }

    pub fn query(&self) -> &RecordsQuery {
        &self.query
    }

    /// `None` until the first page arrives.
    pub fn page(&self) -> Option<&RecordsPage> {
        self.page.as_ref()
    }

    /// Shows a fetched page. Pages of another client are ignored.
    pub fn show(&mut self, id: &ClientId, query: RecordsQuery, page: RecordsPage) -> bool {
        if id != &self.client_id {
            return false;
        }
        self.query = query;
        self.page = Some(page);
        true
    }

    /// A short page means the table has nothing further.
    pub fn next_query(&self) -> Option<RecordsQuery> {
        let page = self.page.as_ref()?;
        (page.rows.len() as u64 >= u64::from(self.query.limit)).then(|| self.query.next())
    }

    pub fn previous_query(&self) -> Option<RecordsQuery> {
        self.page.as_ref()?;
        self.query.previous()
    }

    pub fn range_label(&self) -> String {
        match &self.page {
            None => "Loading...".to_string(),
            Some(page) if page.rows.is_empty() => "No rows".to_string(),
            Some(page) => format!(
                "Rows {} to {}",
                self.query.offset + 1,
                self.query.offset as usize + page.rows.len()
            ),
        }
    }
}

/// Cell text for a stored value; null renders empty.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
