//! Browser-side glue for the panel: timers, the confirm prompt and clocks.

use chrono::NaiveDate;
use yew::html::Scope;

use crate::services::notifications::{ExpiryScheduler, NotificationId};
use crate::services::registry::ConfirmGate;

use super::messages::Msg;
use super::state::ClientPanel;

/// Schedules notification expiry with `gloo-timers`, one timeout per id.
pub struct TimerScheduler {
    link: Scope<ClientPanel>,
}

impl TimerScheduler {
    pub fn new(link: &Scope<ClientPanel>) -> Self {
        Self { link: link.clone() }
    }
}

impl ExpiryScheduler for TimerScheduler {
    fn schedule(&self, id: NotificationId, after_ms: u32) {
        let link = self.link.clone();
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(after_ms).await;
            link.send_message(Msg::ExpireNotification(id));
        });
    }
}

/// `window.confirm`. Answers "no" when there is no window.
pub struct BrowserConfirm;

impl ConfirmGate for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Milliseconds since the epoch, from the JS clock.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
