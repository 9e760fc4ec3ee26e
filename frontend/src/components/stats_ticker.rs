use crate::api::use_api;
use gloo_timers::callback::Interval;
use shared::admin::SUMMARY_POLL_INTERVAL_MS;
use shared::api::DetectionApi;
use shared::models::PublicStats;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Public counters on the landing page, refreshed every ten seconds while
/// mounted.
#[function_component(PublicStatsTicker)]
pub fn public_stats_ticker() -> Html {
    let api = use_api();
    let stats = use_state(|| None::<PublicStats>);

    {
        let stats = stats.clone();
        use_effect_with((), move |_| {
            let fetch = move || {
                let api = api.clone();
                let stats = stats.clone();
                spawn_local(async move {
                    match api.public_stats().await {
                        Ok(fetched) => stats.set(Some(fetched)),
                        Err(e) => log::warn!("Public stats unavailable: {}", e),
                    }
                });
            };
            fetch();
            let interval = Interval::new(SUMMARY_POLL_INTERVAL_MS, fetch);
            move || drop(interval)
        });
    }

    match &*stats {
        Some(stats) => html! {
            <div class="stats-ticker">
                <div class="ticker-item">
                    <span class="ticker-value">{ format_count(stats.total_checks) }</span>
                    <span class="ticker-label">{"ครั้งที่ตรวจสอบ"}</span>
                </div>
                <div class="ticker-item">
                    <span class="ticker-value">{ format_count(stats.scams_detected) }</span>
                    <span class="ticker-label">{"มิจฉาชีพที่ตรวจพบ"}</span>
                </div>
                <div class="ticker-item">
                    <span class="ticker-value">{ format_count(stats.reports_received) }</span>
                    <span class="ticker-label">{"เบาะแสจากผู้ใช้"}</span>
                </div>
            </div>
        },
        None => html! {
            <div class="stats-ticker loading">
                <span class="skeleton-bar"></span>
            </div>
        },
    }
}

/// Thousands separators for display, e.g. 1234567 -> "1,234,567".
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
