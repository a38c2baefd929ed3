use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use components::notification_stack::NotificationProvider;
use services::logging::Logger;

#[function_component(App)]
fn app() -> Html {
    use_effect_with((), |_| {
        Logger::info_with_component("app", "Dashboard mounted");
        || ()
    });

    html! {
        <NotificationProvider>
            <Dashboard />
        </NotificationProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
