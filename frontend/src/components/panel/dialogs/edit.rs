use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::panel::{ClientPanel, Msg};
use crate::sheets::modal_sheet::ModalSheet;

/// Dialog renaming a client or pointing it at another device URL.
pub fn edit_dialog(component: &ClientPanel, link: &Scope<ClientPanel>) -> Html {
    let Some(edit) = &component.state.editing else {
        return html! {};
    };
    let busy = component.state.loading;

    let on_submit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::SubmitEdit
    });

    html! {
        <ModalSheet
            open=true
            title={format!("Edit client: {}", edit.original_name)}
            on_dismiss={link.callback(|_| Msg::CloseEdit)}
        >
            <form class="edit-form" onsubmit={on_submit}>
                <label>
                    {"Name"}
                    <input
                        type="text"
                        value={edit.name.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEditName(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <label>
                    {"eGauge URL"}
                    <input
                        type="url"
                        value={edit.url.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            Msg::SetEditUrl(e.target_unchecked_into::<HtmlInputElement>().value())
                        })}
                    />
                </label>
                <div class="dialog-actions">
                    <button type="button" onclick={link.callback(|_| Msg::CloseEdit)}>{"Cancel"}</button>
                    <button type="submit" class="primary" disabled={busy}>{"Save"}</button>
                </div>
            </form>
        </ModalSheet>
    }
}
