use super::feedback::FeedbackButtons;
use super::forensics_card::ForensicsCard;
use super::ocr_display::OcrDisplay;
use super::slip_card::SlipCard;
use crate::config::AppConfig;
use shared::content::category_label;
use shared::risk::percent;
use shared::{AnalysisPanel, DetectionResponse, RiskTier};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VerificationCardProps {
    pub response: DetectionResponse,
}

/// Verdict for one check, tiered by risk score.
#[function_component(VerificationCard)]
pub fn verification_card(props: &VerificationCardProps) -> Html {
    let response = &props.response;
    let tier = RiskTier::from_score(response.risk_score);
    let risk = percent(response.risk_score);
    let variant = if tier == RiskTier::Scam { "scam" } else { "safe" };
    let share_url = AppConfig::load().og_image_url(&format!("Risk {}%", risk), variant);

    html! {
        <div class={classes!("results-container", tier.css_class())}>
            <div class="result-header">
                <h2 style={format!("color: {}", tier.color())}>
                    <i class={tier.icon()}></i>{" "}{ tier.headline() }
                </h2>
                <p class="result-advice">{ tier.advice() }</p>
                { render_risk_meter("ความเสี่ยง:", risk, tier) }
            </div>
            <div class="detailed-results">
                <div class="result-item">
                    <div class="result-label">{"ประเภท"}</div>
                    <div class="result-value">{ category_label(&response.category) }</div>
                </div>
                if !response.reason.is_empty() {
                    <div class="result-reason">
                        <h3>{"เหตุผลจากการวิเคราะห์"}</h3>
                        <p>{ &response.reason }</p>
                    </div>
                }
            </div>
            if let Some(text) = &response.ocr_text {
                <OcrDisplay text={text.clone()} />
            }
            { for response.panels.iter().map(render_panel) }
            <FeedbackButtons request_id={response.request_id.clone()} />
            <a class="share-link" href={share_url} target="_blank" rel="noopener">
                <i class="fa-solid fa-share-nodes"></i>{" ภาพสรุปผลสำหรับแชร์"}
            </a>
        </div>
    }
}

fn render_panel(panel: &AnalysisPanel) -> Html {
    match panel {
        AnalysisPanel::Forensics(report) => html! { <ForensicsCard report={report.clone()} /> },
        AnalysisPanel::Slip(slip) => html! { <SlipCard slip={slip.clone()} /> },
    }
}

/// Horizontal meter shared by the verdict and the sub-panels.
pub fn render_risk_meter(label: &str, value: u8, tier: RiskTier) -> Html {
    html! {
        <div class="confidence-meter">
            <div class="meter-label">{ label.to_string() }</div>
            <div class="meter">
                <div
                    class="meter-fill"
                    style={format!("width: {}%; background-color: {}", value, tier.color())}
                ></div>
            </div>
            <div class="meter-value">{ format!("{}%", value) }</div>
        </div>
    }
}
