use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::panel::{ClientPanel, Msg};
use crate::services::extraction::{format_date, SampleInterval, SessionPhase};
use crate::sheets::modal_sheet::ModalSheet;

/// Dialog collecting the date range and sampling interval of an extraction.
pub fn extraction_dialog(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let session = &component.state.extraction;
    let Some(draft) = session.draft() else {
        return html! {};
    };
    let submitting = session.phase() == SessionPhase::Submitting;
    let target = draft
        .target
        .as_ref()
        .map(|client| client.name.clone())
        .unwrap_or_default();

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitExtraction
    });

    html! {
        <ModalSheet
            open={session.is_visible()}
            title={format!("Extract data: {}", target)}
            on_dismiss={link.callback(|_| Msg::CloseExtraction)}
        >
            <form class="extraction-form" onsubmit={on_submit}>
                <label>
                    {"Start date"}
                    <input
                        type="date"
                        value={format_date(draft.start_date)}
                        disabled={submitting}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetStartDate(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label>
                    {"End date"}
                    <input
                        type="date"
                        value={format_date(draft.end_date)}
                        disabled={submitting}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEndDate(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label>
                    {"Sampling interval"}
                    <select
                        disabled={submitting}
                        onchange={link.callback(|e: Event| {
                            Msg::SetInterval(e.target_unchecked_into::<HtmlSelectElement>().value())
                        })}
                    >
                        { for SampleInterval::ALL.iter().map(|interval| {
                            let value = interval.to_string();
                            html! {
                                <option value={value.clone()} selected={value == draft.interval}>
                                    { interval.label() }
                                </option>
                            }
                        }) }
                    </select>
                </label>
                <div class="dialog-actions">
                    <button
                        type="button"
                        disabled={submitting}
                        onclick={link.callback(|_| Msg::CloseExtraction)}
                    >
                        {"Cancel"}
                    </button>
                    <button type="submit" class="primary" disabled={submitting || component.state.loading}>
                        { if submitting { "Extracting..." } else { "Extract" } }
                    </button>
                </div>
            </form>
        </ModalSheet>
    }
}
