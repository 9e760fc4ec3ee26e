use crate::route::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn nav_links() -> [(Route, &'static str); 6] {
    [
        (Route::Check, "ตรวจสอบข้อความ"),
        (Route::Batch, "ตรวจหลายรูป"),
        (Route::Report, "แจ้งเบาะแส"),
        (Route::Blog, "บทความ"),
        (Route::Wiki, "คลังความรู้"),
        (Route::About, "เกี่ยวกับเรา"),
    ]
}

/// Site header with the public navigation.
#[function_component(Header)]
pub fn header() -> Html {
    let current = use_route::<Route>();

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes="brand">
                <i class="fa-solid fa-shield-halved"></i>{" ScamCheck"}
            </Link<Route>>
            <nav class="site-nav">
                { for nav_links().into_iter().map(|(route, label)| {
                    let active = current.as_ref() == Some(&route);
                    html! {
                        <Link<Route> to={route} classes={classes!("nav-link", active.then_some("active"))}>
                            { label }
                        </Link<Route>>
                    }
                })}
            </nav>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="app-footer">
            <p>{"ScamCheck | ตรวจสอบก่อนโอน ป้องกันมิจฉาชีพ"}</p>
            <p class="footer-note">
                {"ผลการวิเคราะห์เป็นเพียงข้อมูลประกอบการตัดสินใจ หากสงสัยโปรดติดต่อสายด่วน 1441"}
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Html,
}

/// Public page shell. Admin routes render their own chrome.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let is_admin = use_route::<Route>().is_some_and(|route| route.is_admin());

    if is_admin {
        return html! { <div class="admin-root">{ props.children.clone() }</div> };
    }

    html! {
        <div class="container">
            <Header />
            <main class="main-content">{ props.children.clone() }</main>
            <Footer />
        </div>
    }
}
