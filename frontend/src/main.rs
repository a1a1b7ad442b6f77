use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::{DoseHistory, Navbar, ScheduleFormSection, ToastHost};
use hooks::use_toasts::{use_toasts, UseToastsResult};
use services::api::ApiClient;
use services::config::AppConfig;
use services::logging::Logger;
use services::notifications::Notifier;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let UseToastsResult {
        notifier,
        toasts,
        dismiss,
    } = use_toasts();
    let api_client = use_memo(props.config.clone(), ApiClient::from_config);

    use_effect_with((), |_| {
        Logger::info_with_component("app", "Dose reminder started");
        || ()
    });

    html! {
        <ContextProvider<Notifier> context={notifier}>
            <Navbar />
            <main class="main">
                <div class="container">
                    <ScheduleFormSection api_client={(*api_client).clone()} />
                    <DoseHistory api_client={(*api_client).clone()} />
                </div>
            </main>
            <ToastHost toasts={toasts} on_dismiss={dismiss} />
        </ContextProvider<Notifier>>
    }
}

fn main() {
    Logger::init();
    let config = AppConfig::resolve();
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
