//! Update function for the client panel.
//!
//! Elm-style: receives the component, its `Context` and a `Msg`, mutates the
//! state and returns whether the view should re-render. Network work is
//! always a `Command` run through `run`, whose `Outcome` comes back as
//! `Msg::Settled`.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::RecordsQuery;

use crate::services::api::HttpApi;
use crate::services::controller::{execute, ClientEdit, ClientForm, Command};
use crate::services::records::RecordsBrowser;
use crate::services::registry::confirm_removal;

use super::helpers::{now_ms, today, BrowserConfirm, TimerScheduler};
use super::messages::Msg;
use super::state::ClientPanel;

pub fn update(component: &mut ClientPanel, ctx: &Context<ClientPanel>, msg: Msg) -> bool {
    match msg {
        Msg::ConfigLoaded(config) => {
            component.api = HttpApi::new(config);
            run(component, ctx, Command::LoadClients);
            run(component, ctx, Command::CheckHealth);
            true
        }
        Msg::Run(command) => run(component, ctx, command),
        Msg::Settled(outcome) => {
            let scheduler = TimerScheduler::new(ctx.link());
            let settled = component.state.settle(outcome, now_ms(), &scheduler);
            if settled.reload {
                run(component, ctx, Command::LoadClients);
            }
            true
        }
        Msg::ExpireNotification(id) => {
            let expired = component.state.notifications.expire(id);
            let overdue = component.state.notifications.sweep(now_ms());
            expired || overdue > 0
        }
        Msg::SetNewName(name) => {
            component.state.form.name = name;
            true
        }
        Msg::SetNewUrl(url) => {
            component.state.form.url = url;
            true
        }
        Msg::SubmitNewClient => {
            let ClientForm { name, url } = component.state.form.clone();
            run(component, ctx, Command::AddClient { name, url })
        }
        Msg::RequestDelete(id) => {
            let Some(client) = component.state.find_client(&id).cloned() else {
                return false;
            };
            if !confirm_removal(&BrowserConfirm, &client.name) {
                return false;
            }
            run(
                component,
                ctx,
                Command::RemoveClient {
                    id: client.id,
                    name: client.name,
                },
            )
        }
        Msg::OpenExtraction(id) => match component.state.find_client(&id).cloned() {
            Some(client) => component.state.extraction.open(&client, today()),
            None => false,
        },
        Msg::SetStartDate(value) => {
            component.state.extraction.set_start_date(&value);
            true
        }
        Msg::SetEndDate(value) => {
            component.state.extraction.set_end_date(&value);
            true
        }
        Msg::SetInterval(value) => {
            component.state.extraction.set_interval(&value);
            true
        }
        Msg::SubmitExtraction => match component.state.extraction.draft().cloned() {
            Some(draft) => run(component, ctx, Command::Extract(draft)),
            None => false,
        },
        Msg::CloseExtraction => {
            component.state.extraction.cancel();
            true
        }
        Msg::OpenEdit(id) => match component.state.find_client(&id) {
            Some(client) => {
                component.state.editing = Some(ClientEdit::of(client));
                true
            }
            None => false,
        },
        Msg::SetEditName(name) => {
            if let Some(edit) = &mut component.state.editing {
                edit.name = name;
            }
            true
        }
        Msg::SetEditUrl(url) => {
            if let Some(edit) = &mut component.state.editing {
                edit.url = url;
            }
            true
        }
        Msg::SubmitEdit => match component.state.editing.clone() {
            Some(edit) => run(
                component,
                ctx,
                Command::UpdateClient {
                    id: edit.client_id,
                    name: edit.name,
                    url: edit.url,
                },
            ),
            None => false,
        },
        Msg::CloseEdit => {
            component.state.editing = None;
            true
        }
        Msg::OpenRecords(id) => {
            let Some(client) = component.state.find_client(&id) else {
                return false;
            };
            let browser = RecordsBrowser::for_client(client);
            let query = browser.query().clone();
            component.state.records = Some(browser);
            run(component, ctx, Command::LoadRecords { id, query });
            true
        }
        Msg::NextRecords => {
            let next = component.state.records.as_ref().and_then(RecordsBrowser::next_query);
            page_records(component, ctx, next)
        }
        Msg::PreviousRecords => {
            let previous = component
                .state
                .records
                .as_ref()
                .and_then(RecordsBrowser::previous_query);
            page_records(component, ctx, previous)
        }
        Msg::CloseRecords => {
            component.state.records = None;
            true
        }
    }
}

fn page_records(
    component: &mut ClientPanel,
    ctx: &Context<ClientPanel>,
    query: Option<RecordsQuery>,
) -> bool {
    let (Some(query), Some(browser)) = (query, &component.state.records) else {
        return false;
    };
    let id = browser.client_id.clone();
    run(component, ctx, Command::LoadRecords { id, query })
}

/// Marks the command in flight and executes it off the update loop.
fn run(component: &mut ClientPanel, ctx: &Context<ClientPanel>, command: Command) -> bool {
    let Some(command) = component.state.begin(command) else {
        return false;
    };
    log::debug!("running {:?}", command);

    let api = component.api.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        let outcome = execute(&api, command).await;
        link.send_message(Msg::Settled(outcome));
    });
    true
}
