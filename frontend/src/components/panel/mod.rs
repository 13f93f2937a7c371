//! Client panel: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, dialogs and helpers.
//!
//! Responsibilities
//! - Re-export `Msg` and `ClientPanel`.
//! - Provide the `Component` implementation that delegates to `update::update`
//!   and `view::view`.
//! - On first render, fetch the host configuration; the registry load and the
//!   health probe follow once it has arrived.

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::ClientPanel;

use crate::config;

impl Component for ClientPanel {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        ClientPanel::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let config = config::load().await;
                link.send_message(Msg::ConfigLoaded(config));
            });
        }
    }
}
