use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub open: bool,
    pub title: String,
    pub on_close: Callback<MouseEvent>,
    pub children: Children,
}

/// Overlay dialog. Clicking the backdrop closes it; clicks inside the
/// content wrapper stay there.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="modal-overlay" onclick={props.on_close.clone()}>
            <div
                class="modal-content-wrapper"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                <div class="modal-header">
                    <div>
                        <h3>{ &props.title }</h3>
                        <div class="modal-subtitle">{"Fill in the fields below to continue"}</div>
                    </div>
                    <button class="modal-close-btn" onclick={props.on_close.clone()}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    { for props.children.iter() }
                </div>
            </div>
        </div>
    }
}
