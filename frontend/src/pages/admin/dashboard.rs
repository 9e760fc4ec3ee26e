use super::shell::{expire_on_forbidden, AdminShell};
use crate::api::use_api;
use crate::components::stats_ticker::format_count;
use crate::components::toast::use_toaster;
use crate::components::utils::{render_error_message, use_title};
use crate::session::use_session;
use gloo_timers::callback::Interval;
use shared::admin::{bar_widths, SUMMARY_POLL_INTERVAL_MS};
use shared::api::{AdminApi, ListQuery};
use shared::content::category_label;
use shared::models::{CategoryStats, StatsSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

const CHART_CATEGORIES: u32 = 10;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    use_title("ภาพรวมระบบ".to_string());
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let toaster = use_toaster();

    let summary = use_state(|| None::<StatsSummary>);
    let categories = use_state(Vec::<CategoryStats>::new);
    let error = use_state(|| None::<&'static str>);

    {
        let summary = summary.clone();
        let categories = categories.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            let poll = move || {
                if !session.is_authenticated() {
                    return;
                }
                let api = api.clone();
                let session = session.clone();
                let navigator = navigator.clone();
                let toaster = toaster.clone();
                let summary = summary.clone();
                let categories = categories.clone();
                let error = error.clone();
                spawn_local(async move {
                    let result = match api.summary().await {
                        Ok(stats) => {
                            summary.set(Some(stats));
                            api.categories(ListQuery {
                                page: 1,
                                page_size: CHART_CATEGORIES,
                            })
                            .await
                            .map(|page| categories.set(page.items))
                        }
                        Err(e) => Err(e),
                    };
                    match result {
                        Ok(()) => error.set(None),
                        Err(e) => {
                            if !expire_on_forbidden(&e, &session, navigator.as_ref(), toaster.as_ref()) {
                                log::error!("Dashboard refresh failed: {}", e);
                                error.set(Some(e.user_message()));
                            }
                        }
                    }
                });
            };
            poll();
            let interval = Interval::new(SUMMARY_POLL_INTERVAL_MS, poll);
            move || drop(interval)
        });
    }

    html! {
        <AdminShell title="ภาพรวมระบบ">
            { render_error_message(*error) }
            { render_summary((*summary).as_ref()) }
            <section class="category-chart">
                <h2>{"หมวดหมู่ที่พบบ่อย"}</h2>
                { render_category_bars(&categories) }
            </section>
        </AdminShell>
    }
}

fn render_summary(summary: Option<&StatsSummary>) -> Html {
    let Some(summary) = summary else {
        return html! {
            <div class="stat-grid loading">
                { for (0..6).map(|_| html! { <div class="stat-card"><span class="skeleton-bar"></span></div> }) }
            </div>
        };
    };

    let cards = [
        ("fa-solid fa-magnifying-glass", "การตรวจสอบทั้งหมด", summary.total_detections),
        ("fa-solid fa-triangle-exclamation", "พบมิจฉาชีพ", summary.scam_detected),
        ("fa-solid fa-shield-halved", "ปลอดภัย", summary.safe_detected),
        ("fa-solid fa-calendar-day", "วันนี้", summary.detections_today),
        ("fa-solid fa-comments", "ความคิดเห็น", summary.feedback_count),
        ("fa-solid fa-handshake", "พาร์ทเนอร์ที่ใช้งาน", summary.active_partners),
    ];

    html! {
        <div class="stat-grid">
            { for cards.into_iter().map(|(icon, label, value)| html! {
                <div class="stat-card">
                    <i class={icon}></i>
                    <span class="stat-value">{ format_count(value) }</span>
                    <span class="stat-label">{ label }</span>
                </div>
            })}
        </div>
    }
}

fn render_category_bars(categories: &[CategoryStats]) -> Html {
    if categories.is_empty() {
        return html! { <p class="empty-state">{"ยังไม่มีข้อมูล"}</p> };
    }

    let counts: Vec<u64> = categories.iter().map(|stat| stat.count).collect();
    html! {
        <div class="bar-chart">
            { for categories.iter().zip(bar_widths(&counts)).map(|(stat, width)| html! {
                <div class="bar-row" key={stat.category.clone()}>
                    <span class="bar-label">{ category_label(&stat.category) }</span>
                    <div class="bar-track">
                        <div class="bar-fill" style={format!("width: {:.1}%", width)}></div>
                    </div>
                    <span class="bar-value">{ format_count(stat.count) }</span>
                </div>
            })}
        </div>
    }
}
