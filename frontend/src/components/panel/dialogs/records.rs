use yew::html::Scope;
use yew::prelude::*;

use common::model::records::RecordsPage;

use crate::components::panel::{ClientPanel, Msg};
use crate::services::records::cell_text;
use crate::sheets::modal_sheet::ModalSheet;

/// Read-only view of the rows stored for a client, with paging.
pub fn records_dialog(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let Some(browser) = &component.state.records else {
        return html! {};
    };
    let busy = component.state.loading;
    let table = browser
        .page()
        .and_then(|page| page.table.clone())
        .unwrap_or_default();

    html! {
        <ModalSheet
            open=true
            title={format!("Stored data: {}", browser.client_name)}
            on_dismiss={link.callback(|_| Msg::CloseRecords)}
        >
            <p class="records-meta">
                <code>{ table }</code>
                <span>{ browser.range_label() }</span>
            </p>
            {
                match browser.page() {
                    Some(page) if !page.rows.is_empty() => records_table(page),
                    Some(_) => html! { <p class="empty">{"Nothing stored for this client yet."}</p> },
                    None => html! { <div class="loading"><div class="spin"></div></div> },
                }
            }
            <div class="dialog-actions">
                <button
                    type="button"
                    disabled={busy || browser.previous_query().is_none()}
                    onclick={link.callback(|_| Msg::PreviousRecords)}
                >
                    {"Previous"}
                </button>
                <button
                    type="button"
                    disabled={busy || browser.next_query().is_none()}
                    onclick={link.callback(|_| Msg::NextRecords)}
                >
                    {"Next"}
                </button>
                <button type="button" onclick={link.callback(|_| Msg::CloseRecords)}>{"Close"}</button>
            </div>
        </ModalSheet>
    }
}

fn records_table(page: &RecordsPage) -> Html {
    let columns = page.columns();

    html! {
        <div class="records-scroll">
            <table class="records-table">
                <thead>
                    <tr>{ for columns.iter().map(|c| html! { <th>{ c.clone() }</th> }) }</tr>
                </thead>
                <tbody>
                    { for page.rows.iter().map(|row| html! {
                        <tr>
                            { for columns.iter().map(|c| html! {
                                <td>{ row.get(c).map(cell_text).unwrap_or_default() }</td>
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
