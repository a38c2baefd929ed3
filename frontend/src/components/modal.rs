use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub id: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub title_id: Option<AttrValue>,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Overlay + dialog frame; a click on the backdrop or the close button closes it
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    // Clicks inside the dialog must not reach the backdrop
    let on_content_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div id={props.id.clone()} class="modal show" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_content_click}>
                <div class="modal-header">
                    <h3 id={props.title_id.clone()}>{props.title.clone()}</h3>
                    <button type="button" class="close-modal" onclick={on_close_click}>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                <div class="modal-body">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}
