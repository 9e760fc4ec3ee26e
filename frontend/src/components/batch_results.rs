use shared::content::category_label;
use shared::risk::percent;
use shared::{BatchImageResponse, BatchItem, BatchOutcome, RiskTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BatchResultsProps {
    pub response: BatchImageResponse,
}

/// Summary plus one row per submitted image. Rows are never dropped, failed
/// items included.
#[function_component(BatchResults)]
pub fn batch_results(props: &BatchResultsProps) -> Html {
    let response = &props.response;
    let summary = response.summary;

    use_effect_with(response.batch_id.clone(), {
        let consistent = response.is_consistent();
        let received = response.results.len();
        move |batch_id| {
            if !consistent {
                let dumped = serde_json::to_string(&summary).unwrap_or_default();
                gloo_console::warn!(format!(
                    "Batch {} summary disagrees with {} returned rows: {}",
                    batch_id, received, dumped
                ));
            }
            || ()
        }
    });

    html! {
        <div class="results-container batch-results">
            <div class="batch-summary">
                { render_stat("ทั้งหมด", summary.total, "stat-total") }
                { render_stat("เสี่ยง", summary.scam_count, "stat-scam") }
                { render_stat("ปลอดภัย", summary.safe_count, "stat-safe") }
                { render_stat("ถูกตัดต่อ", summary.manipulated_count, "stat-manipulated") }
                { render_stat("ผิดพลาด", response.failed_count(), "stat-error") }
            </div>
            if !response.is_consistent() {
                <p class="batch-inconsistent">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    { format!(
                        " ได้รับผล {} รายการ จากทั้งหมด {} รูป",
                        response.results.len(),
                        summary.total
                    ) }
                </p>
            }
            <table class="batch-table">
                <thead>
                    <tr>
                        <th>{"#"}</th>
                        <th>{"ไฟล์"}</th>
                        <th>{"ผล"}</th>
                        <th>{"ความเสี่ยง"}</th>
                        <th>{"ประเภท"}</th>
                        <th>{"รายละเอียด"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for response.results.iter().enumerate().map(|(i, item)| render_row(i, item)) }
                </tbody>
            </table>
        </div>
    }
}

fn render_stat(label: &str, value: usize, class: &'static str) -> Html {
    html! {
        <div class={classes!("batch-stat", class)}>
            <span class="stat-value">{ value }</span>
            <span class="stat-label">{ label.to_string() }</span>
        </div>
    }
}

fn render_row(index: usize, item: &BatchItem) -> Html {
    match &item.outcome {
        BatchOutcome::Success {
            risk_score,
            category,
            reason,
            is_manipulated,
            ..
        } => {
            let tier = RiskTier::from_score(*risk_score);
            html! {
                <tr class={tier.css_class()} key={index.to_string()}>
                    <td>{ index + 1 }</td>
                    <td class="batch-filename">{ &item.filename }</td>
                    <td>
                        <span class={classes!("tier-badge", tier.css_class())}>
                            <i class={tier.icon()}></i>{" "}{ tier.headline() }
                        </span>
                        if *is_manipulated {
                            <span class="tier-badge manipulated">{"ภาพถูกตัดต่อ"}</span>
                        }
                    </td>
                    <td>{ format!("{}%", percent(*risk_score)) }</td>
                    <td>{ category_label(category) }</td>
                    <td>{ reason }</td>
                </tr>
            }
        }
        BatchOutcome::Error { error } => html! {
            <tr class="row-error" key={index.to_string()}>
                <td>{ index + 1 }</td>
                <td class="batch-filename">{ &item.filename }</td>
                <td><span class="tier-badge error">{"วิเคราะห์ไม่สำเร็จ"}</span></td>
                <td>{"-"}</td>
                <td>{"-"}</td>
                <td>{ if error.is_empty() { "ไม่ทราบสาเหตุ" } else { error.as_str() } }</td>
            </tr>
        },
    }
}
