//! View rendering for the client panel.
//!
//! Layout: a header with the API status badge, the "new client" form, the
//! registry table, the dialogs, and the notification stack. Controls that
//! trigger requests are disabled while the loading flag is set.

use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use common::model::client::Client;

use super::dialogs::{edit_dialog, extraction_dialog, records_dialog};
use super::messages::Msg;
use super::state::ClientPanel;
use crate::services::controller::{ApiStatus, Command};
use crate::services::notifications::NotificationQueue;

pub fn view(component: &ClientPanel, ctx: &Context<ClientPanel>) -> Html {
    let link = ctx.link();

    html! {
        <div class="client-panel">
            { build_header(component, link) }
            { build_new_client_form(component, link) }
            { build_client_list(component, link) }
            { extraction_dialog(component, link) }
            { edit_dialog(component, link) }
            { records_dialog(component, link) }
            { build_notifications(&component.state.notifications) }
        </div>
    }
}

fn build_header(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let (class, label) = match component.state.api_status {
        ApiStatus::Unknown => ("status unknown", "Checking API..."),
        ApiStatus::Online { database: true } => ("status online", "API online"),
        ApiStatus::Online { database: false } => ("status degraded", "API online, database unreachable"),
        ApiStatus::Offline => ("status offline", "API offline"),
    };

    html! {
        <header class="panel-header">
            <h1>{"eGauge Management"}</h1>
            <span
                class={class}
                title={component.api.config().api_base.clone()}
                onclick={link.callback(|_| Msg::Run(Command::CheckHealth))}
            >
                { label }
            </span>
        </header>
    }
}

fn build_new_client_form(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let form = &component.state.form;
    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitNewClient
    });

    html! {
        <section class="card">
            <h2>{"Add client"}</h2>
            <form class="new-client-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Client name"
                    value={form.name.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNewName(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <input
                    type="url"
                    placeholder="https://egauge00000.egaug.es"
                    value={form.url.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::SetNewUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
                <button type="submit" class="primary" disabled={component.state.loading}>
                    { if component.state.loading { "Working..." } else { "Add" } }
                </button>
            </form>
        </section>
    }
}

fn build_client_list(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let state = &component.state;

    let body = if state.awaiting_first_load() {
        html! {
            <div class="loading">
                <div class="spin"></div>
                <span>{"Loading clients..."}</span>
            </div>
        }
    } else if state.clients.is_empty() {
        html! { <p class="empty">{"No clients registered yet."}</p> }
    } else {
        html! {
            <table class="client-table">
                <thead>
                    <tr>
                        <th>{"Name"}</th>
                        <th>{"URL"}</th>
                        <th>{"Table"}</th>
                        <th>{"Updated"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    { for state.clients.iter().map(|client| client_row(client, state.loading, link)) }
                </tbody>
            </table>
        }
    };

    html! {
        <section class="card">
            <h2>
                {"Clients"}
                {
                    if state.loading && !state.clients.is_empty() {
                        html! { <span class="refreshing">{" (refreshing)"}</span> }
                    } else {
                        html! {}
                    }
                }
            </h2>
            <button
                class="refresh"
                disabled={state.loading}
                onclick={link.callback(|_| Msg::Run(Command::LoadClients))}
            >
                {"Refresh"}
            </button>
            { body }
        </section>
    }
}

fn client_row(client: &Client, busy: bool, link: &Scope<ClientPanel>) -> Html {
    let extract_id = client.id.clone();
    let edit_id = client.id.clone();
    let records_id = client.id.clone();
    let delete_id = client.id.clone();

    html! {
        <tr key={client.id.to_string()}>
            <td>{ client.name.clone() }</td>
            <td><a href={client.url.clone()} target="_blank" rel="noopener">{ client.url.clone() }</a></td>
            <td><code>{ client.data_table.clone() }</code></td>
            <td>{ client.updated_at.clone().unwrap_or_else(|| "-".to_string()) }</td>
            <td class="row-actions">
                <button
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::OpenExtraction(extract_id.clone()))}
                >
                    {"Extract"}
                </button>
                <button
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::OpenEdit(edit_id.clone()))}
                >
                    {"Edit"}
                </button>
                <button
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::OpenRecords(records_id.clone()))}
                >
                    {"Data"}
                </button>
                <button
                    class="danger"
                    disabled={busy}
                    onclick={link.callback(move |_| Msg::RequestDelete(delete_id.clone()))}
                >
                    {"Delete"}
                </button>
            </td>
        </tr>
    }
}

fn build_notifications(queue: &NotificationQueue) -> Html {
    html! {
        <div class="notifications" aria-live="polite">
            { for queue.iter().map(|n| html! {
                <div key={n.id.0.to_string()} class={n.kind.css_class()}>{ n.message.clone() }</div>
            }) }
        </div>
    }
}
