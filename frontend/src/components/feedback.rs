use super::toast::use_toaster;
use crate::api::use_api;
use shared::api::DetectionApi;
use shared::models::FeedbackRequest;
use shared::Toast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum FeedbackState {
    Open,
    Sending,
    Sent,
}

#[derive(Properties, PartialEq)]
pub struct FeedbackButtonsProps {
    pub request_id: String,
}

/// "Was this verdict right?" buttons under a result.
#[function_component(FeedbackButtons)]
pub fn feedback_buttons(props: &FeedbackButtonsProps) -> Html {
    let api = use_api();
    let toaster = use_toaster();
    let state = use_state(|| FeedbackState::Open);

    {
        let state = state.clone();
        use_effect_with(props.request_id.clone(), move |_| {
            state.set(FeedbackState::Open);
            || ()
        });
    }

    let send = {
        let state = state.clone();
        let request_id = props.request_id.clone();
        move |is_correct: bool| {
            let api = api.clone();
            let toaster = toaster.clone();
            let state = state.clone();
            let request = FeedbackRequest {
                request_id: request_id.clone(),
                is_correct,
                comment: None,
            };
            Callback::from(move |_: MouseEvent| {
                if *state != FeedbackState::Open {
                    return;
                }
                state.set(FeedbackState::Sending);
                let api = api.clone();
                let toaster = toaster.clone();
                let state = state.clone();
                let request = request.clone();
                spawn_local(async move {
                    match api.feedback(&request).await {
                        Ok(()) => {
                            state.set(FeedbackState::Sent);
                            if let Some(toaster) = toaster {
                                toaster.show(Toast::success("ขอบคุณสำหรับความคิดเห็น"));
                            }
                        }
                        Err(e) => {
                            log::error!("Feedback submission failed: {}", e);
                            state.set(FeedbackState::Open);
                            if let Some(toaster) = toaster {
                                toaster.show(Toast::error(e.user_message()));
                            }
                        }
                    }
                });
            })
        }
    };

    if *state == FeedbackState::Sent {
        return html! { <p class="feedback-thanks">{"ขอบคุณ! ความคิดเห็นของคุณช่วยให้ระบบแม่นยำขึ้น"}</p> };
    }

    let disabled = *state == FeedbackState::Sending;
    html! {
        <div class="feedback-buttons">
            <span>{"ผลการวิเคราะห์นี้ถูกต้องหรือไม่?"}</span>
            <button class="feedback-btn" {disabled} onclick={send(true)}>
                <i class="fa-solid fa-thumbs-up"></i>{" ถูกต้อง"}
            </button>
            <button class="feedback-btn" {disabled} onclick={send(false)}>
                <i class="fa-solid fa-thumbs-down"></i>{" ไม่ถูกต้อง"}
            </button>
        </div>
    }
}
