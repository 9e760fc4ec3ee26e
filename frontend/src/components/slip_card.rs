use super::verification_card::render_risk_meter;
use shared::risk::percent;
use shared::{RiskTier, SlipVerification};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SlipCardProps {
    pub slip: SlipVerification,
}

/// Bank-transfer slip check. High trust reads as safe.
#[function_component(SlipCard)]
pub fn slip_card(props: &SlipCardProps) -> Html {
    let slip = &props.slip;
    let tier = RiskTier::from_trust(slip.trust_score);

    html! {
        <section class={classes!("sub-panel", "slip-card", tier.css_class())}>
            <h3>
                <i class="fa-solid fa-receipt"></i>
                { if slip.is_authentic { " สลิปน่าจะเป็นของจริง" } else { " สลิปอาจเป็นของปลอม" } }
            </h3>
            { render_risk_meter("ความน่าเชื่อถือ:", percent(slip.trust_score), tier) }
            <dl class="slip-details">
                if let Some(bank) = &slip.bank {
                    <><dt>{"ธนาคาร"}</dt><dd>{ bank }</dd></>
                }
                if let Some(amount) = slip.amount {
                    <><dt>{"จำนวนเงิน"}</dt><dd>{ format!("{:.2} บาท", amount) }</dd></>
                }
                if let Some(reference) = &slip.reference {
                    <><dt>{"เลขอ้างอิง"}</dt><dd>{ reference }</dd></>
                }
                if let Some(at) = &slip.transferred_at {
                    <><dt>{"เวลาโอน"}</dt><dd>{ at }</dd></>
                }
            </dl>
            if !slip.warnings.is_empty() {
                <ul class="slip-warnings">
                    { for slip.warnings.iter().map(|warning| html! {
                        <li><i class="fa-solid fa-circle-exclamation"></i>{" "}{ warning }</li>
                    })}
                </ul>
            }
        </section>
    }
}
