//! State of the `ClientPanel` component.

use crate::config;
use crate::services::api::HttpApi;
use crate::services::controller::PanelState;

/// Main state container for the `ClientPanel`.
///
/// Fields are `pub` because they are read by `view` and written by `update`.
pub struct ClientPanel {
    /// Registry cache, loading flag, notifications and dialog drafts.
    pub state: PanelState,

    /// Client for the management API. Rebuilt once the host config arrives.
    pub api: HttpApi,

    /// Guard to run the first-render initialization only once.
    pub loaded: bool,
}

impl ClientPanel {
    pub fn new() -> Self {
        Self {
            state: PanelState::default(),
            api: HttpApi::new(config::fallback()),
            loaded: false,
        }
    }
}
