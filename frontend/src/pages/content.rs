use crate::api::use_api;
use crate::components::utils::{render_error_message, use_title};
use crate::route::Route;
use shared::api::{ApiError, DetectionApi};
use shared::content::{find_post, POSTS};
use shared::models::WikiEntry;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(BlogIndex)]
pub fn blog_index() -> Html {
    use_title("บทความ".to_string());

    html! {
        <div class="blog-page">
            <header class="page-header">
                <h1>{"บทความเตือนภัย"}</h1>
                <p class="subtitle">{"รู้ทันกลโกงมิจฉาชีพรูปแบบใหม่"}</p>
            </header>
            <div class="blog-grid">
                { for POSTS.iter().map(|post| html! {
                    <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="blog-card">
                        <span class="blog-tag">{ post.tag }</span>
                        <h3 class="blog-title">{ post.title }</h3>
                        <p class="blog-subtitle">{ post.summary }</p>
                        <div class="blog-meta">
                            <span>{ post.date }</span>
                            <span>{ post.read_time }</span>
                        </div>
                    </Link<Route>>
                })}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SlugProps {
    pub slug: String,
}

#[function_component(BlogPostPage)]
pub fn blog_post_page(props: &SlugProps) -> Html {
    let post = find_post(&props.slug);
    use_title(post.map_or("ไม่พบบทความ", |post| post.title).to_string());

    let Some(post) = post else {
        return html! { <NotFound /> };
    };

    html! {
        <article class="blog-post">
            <Link<Route> to={Route::Blog} classes="back-link">
                <i class="fa-solid fa-arrow-left"></i>{" กลับไปหน้าบทความ"}
            </Link<Route>>
            <span class="blog-tag">{ post.tag }</span>
            <h1>{ post.title }</h1>
            <div class="blog-meta">
                <span>{ post.date }</span>
                <span>{ post.read_time }</span>
            </div>
            <p class="lead">{ post.summary }</p>
            { for post.body.iter().map(|paragraph| html! { <p>{ *paragraph }</p> }) }
            <div class="blog-cta">
                <Link<Route> to={Route::Check} classes="analyze-btn">
                    {"ตรวจสอบข้อความที่น่าสงสัย"}
                </Link<Route>>
            </div>
        </article>
    }
}

/// Scam encyclopedia: search box over the backend's wiki index.
#[function_component(WikiPage)]
pub fn wiki_page() -> Html {
    use_title("คลังความรู้".to_string());
    let api = use_api();
    let query = use_state(String::new);
    let entries = use_state(Vec::<WikiEntry>::new);
    let loading = use_state(|| false);
    let error = use_state(|| None::<&'static str>);
    let latest = use_mut_ref(|| 0u64);

    {
        let api = api.clone();
        let entries = entries.clone();
        let loading = loading.clone();
        let error = error.clone();
        let latest = latest.clone();
        use_effect_with((*query).clone(), move |query| {
            let query = query.trim().to_string();
            *latest.borrow_mut() += 1;
            let seq = *latest.borrow();
            loading.set(true);
            spawn_local(async move {
                let result = api.wiki_search(&query).await;
                if *latest.borrow() != seq {
                    return;
                }
                loading.set(false);
                match result {
                    Ok(found) => {
                        error.set(None);
                        entries.set(found);
                    }
                    Err(e) => {
                        log::error!("Wiki search failed: {}", e);
                        error.set(Some(e.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let on_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    html! {
        <div class="wiki-page">
            <header class="page-header">
                <h1><i class="fa-solid fa-book"></i>{" คลังความรู้กลโกง"}</h1>
            </header>
            <div class="wiki-search">
                <i class="fa-solid fa-magnifying-glass"></i>
                <input
                    type="search"
                    placeholder="ค้นหารูปแบบกลโกง เช่น สลิปปลอม"
                    value={(*query).clone()}
                    oninput={on_input}
                />
            </div>
            { render_error_message(*error) }
            if *loading && entries.is_empty() {
                <p class="loading-text">{"กำลังค้นหา..."}</p>
            } else if entries.is_empty() {
                <p class="empty-state">{"ไม่พบหัวข้อที่ค้นหา"}</p>
            } else {
                <div class="wiki-grid">
                    { for entries.iter().map(|entry| html! {
                        <Link<Route>
                            to={Route::WikiEntry { slug: entry.slug.clone() }}
                            classes="wiki-card"
                        >
                            <h3>{ &entry.title }</h3>
                            <p>{ &entry.summary }</p>
                        </Link<Route>>
                    })}
                </div>
            }
        </div>
    }
}

#[function_component(WikiEntryPage)]
pub fn wiki_entry_page(props: &SlugProps) -> Html {
    let api = use_api();
    let entry = use_state(|| None::<Result<WikiEntry, ApiError>>);
    let latest = use_mut_ref(|| 0u64);

    {
        let entry = entry.clone();
        let latest = latest.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            let slug = slug.clone();
            *latest.borrow_mut() += 1;
            let seq = *latest.borrow();
            entry.set(None);
            spawn_local(async move {
                let result = api.wiki_entry(&slug).await;
                if *latest.borrow() != seq {
                    log::debug!("Dropping stale wiki entry for {}", slug);
                    return;
                }
                entry.set(Some(result));
            });
            || ()
        });
    }

    let title = match &*entry {
        Some(Ok(found)) => found.title.clone(),
        _ => "คลังความรู้".to_string(),
    };
    use_title(title);

    let body = match &*entry {
        None => html! { <p class="loading-text">{"กำลังโหลด..."}</p> },
        Some(Err(ApiError::Status { status: 404, .. })) => html! { <NotFound /> },
        Some(Err(e)) => render_error_message(Some(e.user_message())),
        Some(Ok(found)) => html! {
            <article class="wiki-entry">
                <h1>{ &found.title }</h1>
                <p class="lead">{ &found.summary }</p>
                { for found.body.split("\n\n").map(|paragraph| html! { <p>{ paragraph }</p> }) }
                if !found.warning_signs.is_empty() {
                    <section class="warning-signs">
                        <h3><i class="fa-solid fa-triangle-exclamation"></i>{" สัญญาณเตือน"}</h3>
                        <ul>
                            { for found.warning_signs.iter().map(|sign| html! { <li>{ sign }</li> }) }
                        </ul>
                    </section>
                }
            </article>
        },
    };

    html! {
        <div class="wiki-page">
            <Link<Route> to={Route::Wiki} classes="back-link">
                <i class="fa-solid fa-arrow-left"></i>{" กลับไปคลังความรู้"}
            </Link<Route>>
            { body }
        </div>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    use_title("เกี่ยวกับเรา".to_string());

    html! {
        <div class="about-page">
            <header class="page-header">
                <h1>{"เกี่ยวกับ ScamCheck"}</h1>
            </header>
            <p>
                {"ScamCheck ช่วยให้คนไทยตรวจสอบข้อความ ลิงก์ และสลิปโอนเงินก่อนตัดสินใจ \
                  โดยใช้โมเดลวิเคราะห์ภาษาและการตรวจร่องรอยการตัดต่อภาพ"}
            </p>
            <h3>{"ข้อมูลของคุณ"}</h3>
            <p>
                {"ข้อความและรูปภาพที่ส่งตรวจจะถูกใช้เพื่อการวิเคราะห์และปรับปรุงความแม่นยำเท่านั้น"}
            </p>
            <h3>{"ถูกหลอกแล้วทำอย่างไร"}</h3>
            <ul>
                <li>{"ติดต่อธนาคารเพื่ออายัดบัญชีทันที"}</li>
                <li>{"แจ้งความออนไลน์ที่ thaipoliceonline.go.th"}</li>
                <li>{"โทรสายด่วน 1441 ศูนย์ต่อต้านการฉ้อโกงทางออนไลน์"}</li>
            </ul>
        </div>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    use_title("ไม่พบหน้า".to_string());

    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"ไม่พบหน้าที่คุณต้องการ"}</p>
            <Link<Route> to={Route::Home} classes="analyze-btn">{"กลับหน้าแรก"}</Link<Route>>
        </div>
    }
}
