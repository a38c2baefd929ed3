use yew::prelude::*;

use crate::hooks::use_notifications::{NotificationStack, Notifier};

#[derive(Properties, PartialEq)]
pub struct NotificationProviderProps {
    #[prop_or_default]
    pub children: Html,
}

/// Owns the notification stack, shares a [`Notifier`] with its children and
/// renders the toasts on top of them
#[function_component(NotificationProvider)]
pub fn notification_provider(props: &NotificationProviderProps) -> Html {
    let stack = use_reducer(NotificationStack::default);

    let notifier = {
        let dispatcher = stack.dispatcher();
        use_memo((), move |_| Notifier::new(Callback::from(move |action| dispatcher.dispatch(action))))
    };
    let notifier = (*notifier).clone();

    html! {
        <ContextProvider<Notifier> context={notifier.clone()}>
            {props.children.clone()}
            <div class="notifications-container">
                { for stack.items().iter().map(|notification| {
                    let on_close = {
                        let notifier = notifier.clone();
                        let id = notification.id;
                        Callback::from(move |_: MouseEvent| notifier.dismiss(id))
                    };
                    html! {
                        <div key={notification.id} class={notification.class()}>
                            <i class={notification.kind.icon_class()}></i>
                            <span class="notification-message">{notification.message.clone()}</span>
                            <button type="button" class="notification-close" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}
