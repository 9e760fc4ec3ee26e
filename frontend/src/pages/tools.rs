use crate::api::use_api;
use crate::components::batch_results::BatchResults;
use crate::components::batch_upload::BatchUploader;
use crate::components::toast::use_toaster;
use crate::components::utils::{render_error_message, use_title};
use shared::api::DetectionApi;
use shared::content::CATEGORIES;
use shared::models::ReportRequest;
use shared::validation::validate_report;
use shared::{BatchImageResponse, Toast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Batch image analysis: uploader on top, last batch's results below.
#[function_component(BatchPage)]
pub fn batch_page() -> Html {
    use_title("ตรวจหลายรูป".to_string());
    let result = use_state(|| None::<BatchImageResponse>);

    let on_result = {
        let result = result.clone();
        Callback::from(move |response: BatchImageResponse| result.set(Some(response)))
    };
    let on_submit = {
        let result = result.clone();
        Callback::from(move |_count: usize| result.set(None))
    };

    html! {
        <div class="batch-page">
            <header class="page-header">
                <h1><i class="fa-solid fa-images"></i>{" ตรวจสอบหลายรูปพร้อมกัน"}</h1>
                <p class="subtitle">{"ตรวจสลิปหรือภาพหน้าจอได้สูงสุด 10 รูปต่อครั้ง"}</p>
            </header>
            <BatchUploader {on_result} {on_submit} />
            if let Some(response) = &*result {
                <BatchResults response={response.clone()} />
            }
        </div>
    }
}

#[derive(Clone, PartialEq)]
enum ReportState {
    Editing,
    Sending,
    Sent(String),
}

/// Public scam report form.
#[function_component(ReportPage)]
pub fn report_page() -> Html {
    use_title("แจ้งเบาะแส".to_string());
    let api = use_api();
    let toaster = use_toaster();

    let content = use_state(String::new);
    let category = use_state(|| CATEGORIES[0].0.to_string());
    let description = use_state(String::new);
    let contact = use_state(String::new);
    let inline_error = use_state(|| None::<&'static str>);
    let state = use_state(|| ReportState::Editing);

    let on_submit = {
        let content = content.clone();
        let category = category.clone();
        let description = description.clone();
        let contact = contact.clone();
        let inline_error = inline_error.clone();
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *state == ReportState::Sending {
                return;
            }
            if let Err(error) = validate_report(&content) {
                inline_error.set(Some(error.user_message()));
                return;
            }
            inline_error.set(None);
            state.set(ReportState::Sending);

            let request = ReportRequest {
                content: content.trim().to_string(),
                category: (*category).clone(),
                description: Some(description.trim().to_string()).filter(|d| !d.is_empty()),
                contact: Some(contact.trim().to_string()).filter(|c| !c.is_empty()),
            };
            let api = api.clone();
            let toaster = toaster.clone();
            let state = state.clone();
            spawn_local(async move {
                match api.report(&request).await {
                    Ok(receipt) => {
                        state.set(ReportState::Sent(receipt.report_id));
                        if let Some(toaster) = toaster {
                            toaster.show(Toast::success("ได้รับเบาะแสของคุณแล้ว ขอบคุณที่ช่วยกันเตือนภัย"));
                        }
                    }
                    Err(e) => {
                        log::error!("Report submission failed: {}", e);
                        state.set(ReportState::Editing);
                        if let Some(toaster) = toaster {
                            toaster.show(Toast::error(e.user_message()));
                        }
                    }
                }
            });
        })
    };

    if let ReportState::Sent(report_id) = &*state {
        let reset = {
            let state = state.clone();
            let content = content.clone();
            Callback::from(move |_: MouseEvent| {
                content.set(String::new());
                state.set(ReportState::Editing);
            })
        };
        return html! {
            <div class="report-page">
                <div class="results-container tier-safe">
                    <h2><i class="fa-solid fa-circle-check"></i>{" ส่งเบาะแสเรียบร้อย"}</h2>
                    <p>{ format!("หมายเลขอ้างอิง: {}", report_id) }</p>
                    <button class="analyze-btn" onclick={reset}>{"แจ้งเบาะแสเพิ่มเติม"}</button>
                </div>
            </div>
        };
    }

    let sending = *state == ReportState::Sending;
    html! {
        <div class="report-page">
            <header class="page-header">
                <h1><i class="fa-solid fa-flag"></i>{" แจ้งเบาะแสมิจฉาชีพ"}</h1>
                <p class="subtitle">{"ข้อมูลของคุณช่วยเตือนภัยผู้อื่นได้"}</p>
            </header>
            <form class="report-form" onsubmit={on_submit}>
                <label>{"ข้อความ ลิงก์ เบอร์โทร หรือเลขบัญชีที่ต้องสงสัย"}</label>
                <textarea
                    rows="5"
                    value={(*content).clone()}
                    disabled={sending}
                    oninput={text_area_setter(content.clone())}
                />
                { render_error_message(*inline_error) }
                <label>{"ประเภท"}</label>
                <select
                    disabled={sending}
                    onchange={{
                        let category = category.clone();
                        Callback::from(move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            category.set(select.value());
                        })
                    }}
                >
                    { for CATEGORIES.iter().map(|(key, label)| html! {
                        <option value={*key} selected={*category == *key}>{ *label }</option>
                    })}
                </select>
                <label>{"รายละเอียดเพิ่มเติม (ไม่บังคับ)"}</label>
                <textarea
                    rows="3"
                    value={(*description).clone()}
                    disabled={sending}
                    oninput={text_area_setter(description.clone())}
                />
                <label>{"ช่องทางติดต่อกลับ (ไม่บังคับ)"}</label>
                <input
                    type="text"
                    value={(*contact).clone()}
                    disabled={sending}
                    oninput={{
                        let contact = contact.clone();
                        Callback::from(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            contact.set(input.value());
                        })
                    }}
                />
                <button type="submit" class="analyze-btn" disabled={sending}>
                    if sending {
                        <><i class="fa-solid fa-spinner fa-spin"></i>{" กำลังส่ง..."}</>
                    } else {
                        <><i class="fa-solid fa-paper-plane"></i>{" ส่งเบาะแส"}</>
                    }
                </button>
            </form>
        </div>
    }
}

fn text_area_setter(target: UseStateHandle<String>) -> Callback<InputEvent> {
    Callback::from(move |e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        target.set(area.value());
    })
}
