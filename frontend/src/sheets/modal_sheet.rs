//! Modal container used by the panel dialogs.
//!
//! A click on the dimmed backdrop dismisses the sheet. Clicks inside the
//! surface stop propagating at the surface, so typing in a field or opening a
//! date picker never reaches the backdrop handler.

use uuid::Uuid;
use yew::{html, AttrValue, Callback, Component, Context, Html, MouseEvent, Properties};

pub struct ModalSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub title: AttrValue,
    /// Fired for backdrop clicks only.
    pub on_dismiss: Callback<()>,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4().simple()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_dismiss = props.on_dismiss.clone();
            Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
        };
        let contain = Callback::from(|e: MouseEvent| e.stop_propagation());
        let title_id = format!("{}-title", self.id);

        html! {
            <div class="sheet-backdrop" onclick={on_backdrop}>
                <div
                    class="sheet-surface"
                    id={self.id.clone()}
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby={title_id.clone()}
                    onclick={contain}
                >
                    <h2 id={title_id}>{ props.title.clone() }</h2>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}
