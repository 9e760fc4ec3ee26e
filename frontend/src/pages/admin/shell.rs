use crate::components::auth_button::AuthButton;
use crate::components::toast::Toaster;
use crate::route::Route;
use crate::session::{use_session, Session};
use shared::admin::AdminResource;
use shared::api::{ApiError, SESSION_EXPIRED_MESSAGE};
use shared::Toast;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminShellProps {
    pub title: AttrValue,
    pub children: Html,
}

/// Sidebar chrome for every admin page. Without a token the page is never
/// rendered; the visitor is sent to the login form instead.
#[function_component(AdminShell)]
pub fn admin_shell(props: &AdminShellProps) -> Html {
    let session = use_session();
    let current = use_route::<Route>();

    if !session.is_authenticated() {
        log::info!("No admin token, redirecting to login");
        return html! { <Redirect<Route> to={Route::AdminLogin} /> };
    }

    let links = std::iter::once((Route::AdminDashboard, "ภาพรวม", "fa-solid fa-chart-line")).chain(
        AdminResource::ALL
            .into_iter()
            .map(|resource| (Route::for_resource(resource), resource.title(), resource_icon(resource))),
    );

    html! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <Link<Route> to={Route::Home} classes="brand">
                    <i class="fa-solid fa-shield-halved"></i>{" ScamCheck Admin"}
                </Link<Route>>
                <nav>
                    { for links.map(|(route, label, icon)| {
                        let active = current.as_ref() == Some(&route);
                        html! {
                            <Link<Route> to={route} classes={classes!("sidebar-link", active.then_some("active"))}>
                                <i class={icon}></i>{" "}{ label }
                            </Link<Route>>
                        }
                    })}
                </nav>
                <AuthButton />
            </aside>
            <section class="admin-content">
                <h1 class="admin-title">{ props.title.clone() }</h1>
                { props.children.clone() }
            </section>
        </div>
    }
}

fn resource_icon(resource: AdminResource) -> &'static str {
    match resource {
        AdminResource::Detections => "fa-solid fa-list-check",
        AdminResource::Feedback => "fa-solid fa-comments",
        AdminResource::Partners => "fa-solid fa-handshake",
        AdminResource::Categories => "fa-solid fa-tags",
    }
}

/// Reacts to a failed admin call. A rejected token clears the session and
/// leaves for the login page; returns whether that happened.
pub fn expire_on_forbidden(
    error: &ApiError,
    session: &Session,
    navigator: Option<&Navigator>,
    toaster: Option<&Toaster>,
) -> bool {
    if session.on_api_error(error).is_none() {
        return false;
    }
    if let Some(toaster) = toaster {
        toaster.show(Toast::warning(SESSION_EXPIRED_MESSAGE));
    }
    if let Some(navigator) = navigator {
        navigator.replace(&Route::AdminLogin);
    }
    true
}
