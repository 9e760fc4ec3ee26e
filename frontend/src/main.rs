mod api;
mod components;
mod config;
mod pages;
mod route;
mod session;

use api::HttpClient;
use components::layout::Layout;
use components::toast::ToastHost;
use config::AppConfig;
use route::{switch, Route};
use session::{browser_session, Session};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let session = use_memo((), |_| browser_session());
    let client = use_memo((), {
        let session = (*session).clone();
        move |_| {
            let config = AppConfig::load();
            log::info!("API base URL: {}", config.api_url);
            HttpClient::new(&config, session)
        }
    });

    html! {
        <BrowserRouter>
            <ContextProvider<Session> context={(*session).clone()}>
                <ContextProvider<HttpClient> context={(*client).clone()}>
                    <ToastHost>
                        <Layout>
                            <Switch<Route> render={switch} />
                        </Layout>
                    </ToastHost>
                </ContextProvider<HttpClient>>
            </ContextProvider<Session>>
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
