use super::verification_card::render_risk_meter;
use shared::risk::percent;
use shared::{ForensicsReport, RiskTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ForensicsCardProps {
    pub report: ForensicsReport,
}

/// Image-manipulation checks. The tier is read from the manipulation
/// confidence, independent of the overall verdict.
#[function_component(ForensicsCard)]
pub fn forensics_card(props: &ForensicsCardProps) -> Html {
    let report = &props.report;
    let manipulation = if report.is_manipulated {
        report.confidence
    } else {
        1.0 - report.confidence
    };
    let tier = RiskTier::from_score(manipulation);

    html! {
        <section class={classes!("sub-panel", "forensics-card", tier.css_class())}>
            <h3>
                <i class="fa-solid fa-microscope"></i>
                { if report.is_manipulated { " พบร่องรอยการตัดต่อภาพ" } else { " ไม่พบร่องรอยการตัดต่อ" } }
            </h3>
            { render_risk_meter("โอกาสถูกแก้ไข:", percent(manipulation), tier) }
            <ul class="check-list">
                if let Some(ela) = report.ela_score {
                    <li>{ format!("Error Level Analysis: {:.2}", ela) }</li>
                }
                if let Some(compression) = report.compression_score {
                    <li>{ format!("การบีบอัดซ้ำ: {:.2}", compression) }</li>
                }
                <li>
                    { "การคัดลอกบางส่วนของภาพ: " }
                    { if report.cloning_detected { "พบ" } else { "ไม่พบ" } }
                </li>
                { for report.metadata_flags.iter().map(|flag| html! {
                    <li class="metadata-flag">{ format!("Metadata: {}", flag) }</li>
                })}
            </ul>
            if let Some(summary) = &report.summary {
                <p class="panel-summary">{ summary }</p>
            }
        </section>
    }
}
