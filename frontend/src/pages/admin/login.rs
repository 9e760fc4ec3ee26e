use crate::api::use_api;
use crate::components::toast::use_toaster;
use crate::components::utils::{render_error_message, use_title};
use crate::route::Route;
use crate::session::use_session;
use shared::api::{AdminApi, ApiError};
use shared::models::LoginRequest;
use shared::Toast;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

const INVALID_CREDENTIALS_MESSAGE: &str = "ชื่อผู้ใช้หรือรหัสผ่านไม่ถูกต้อง";

#[function_component(AdminLogin)]
pub fn admin_login() -> Html {
    use_title("เข้าสู่ระบบผู้ดูแล".to_string());
    let api = use_api();
    let session = use_session();
    let toaster = use_toaster();
    let navigator = use_navigator();

    let username = use_state(String::new);
    let password = use_state(String::new);
    let submitting = use_state(|| false);
    let error = use_state(|| None::<&'static str>);

    if session.is_authenticated() {
        return html! { <Redirect<Route> to={Route::AdminDashboard} /> };
    }

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            if username.trim().is_empty() || password.is_empty() {
                error.set(Some("กรุณากรอกชื่อผู้ใช้และรหัสผ่าน"));
                return;
            }
            error.set(None);
            submitting.set(true);

            let credentials = LoginRequest {
                username: username.trim().to_string(),
                password: (*password).clone(),
            };
            let api = api.clone();
            let session = session.clone();
            let toaster = toaster.clone();
            let navigator = navigator.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            spawn_local(async move {
                let outcome = api.login(&credentials).await;
                submitting.set(false);
                match outcome {
                    Ok(response) if session.acquire(&response.token) => {
                        log::info!("Admin login succeeded");
                        if let Some(toaster) = &toaster {
                            toaster.show(Toast::success("เข้าสู่ระบบสำเร็จ"));
                        }
                        if let Some(navigator) = &navigator {
                            navigator.push(&Route::AdminDashboard);
                        }
                    }
                    Ok(_) => {
                        log::warn!("Login response carried an empty token");
                        error.set(Some(INVALID_CREDENTIALS_MESSAGE));
                    }
                    Err(ApiError::Forbidden | ApiError::Status { status: 401, .. }) => {
                        error.set(Some(INVALID_CREDENTIALS_MESSAGE));
                    }
                    Err(e) => {
                        log::error!("Login failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
            });
        })
    };

    let busy = *submitting;
    html! {
        <div class="admin-login">
            <form class="login-card" onsubmit={on_submit}>
                <h1><i class="fa-solid fa-user-shield"></i>{" ผู้ดูแลระบบ"}</h1>
                <label for="admin-username">{"ชื่อผู้ใช้"}</label>
                <input
                    id="admin-username"
                    type="text"
                    autocomplete="username"
                    value={(*username).clone()}
                    disabled={busy}
                    oninput={input_setter(username.clone())}
                />
                <label for="admin-password">{"รหัสผ่าน"}</label>
                <input
                    id="admin-password"
                    type="password"
                    autocomplete="current-password"
                    value={(*password).clone()}
                    disabled={busy}
                    oninput={input_setter(password.clone())}
                />
                { render_error_message(*error) }
                <button type="submit" class="analyze-btn" disabled={busy}>
                    if busy {
                        <><i class="fa-solid fa-spinner fa-spin"></i>{" กำลังเข้าสู่ระบบ..."}</>
                    } else {
                        {"เข้าสู่ระบบ"}
                    }
                </button>
            </form>
        </div>
    }
}

fn input_setter(target: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        target.set(input.value());
    })
}
