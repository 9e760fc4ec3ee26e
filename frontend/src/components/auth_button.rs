use super::toast::use_toaster;
use crate::route::Route;
use crate::session::use_session;
use shared::Toast;
use yew::prelude::*;
use yew_router::prelude::*;

/// Logout control for the admin shell. Clearing the session is the whole
/// logout; there is no server-side revocation.
#[function_component(AuthButton)]
pub fn auth_button() -> Html {
    let session = use_session();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let handle_logout = {
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            session.clear();
            log::info!("Admin logged out");
            if let Some(toaster) = &toaster {
                toaster.show(Toast::info("ออกจากระบบแล้ว"));
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::AdminLogin);
            }
        })
    };

    if !session.is_authenticated() {
        return html! {};
    }

    html! {
        <div class="auth-button-container">
            <button class="logout-button" onclick={handle_logout} title="ออกจากระบบ">
                <i class="fa-solid fa-sign-out-alt"></i>{" ออกจากระบบ"}
            </button>
        </div>
    }
}
