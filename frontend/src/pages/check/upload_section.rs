use super::{CheckPage, Msg};
use crate::components::utils::{collect_files, debounce, format_bytes, truncate_name};
use shared::validation::MIN_TEXT_CHARS;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INPUT_ID: &str = "check-file-input";

pub fn render_input_section(model: &CheckPage, ctx: &Context<CheckPage>) -> Html {
    let link = ctx.link();
    let loading = model.flow.is_loading();

    let handle_input = link.callback(|e: InputEvent| {
        let area: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetText(area.value())
    });

    let inline_error = model.flow.inline_error().map(|error| {
        html! {
            <p class="inline-error">
                <i class="fa-solid fa-circle-exclamation"></i>{" "}{ error.user_message() }
            </p>
        }
    });

    html! {
        <div class="upload-section">
            <textarea
                class={classes!("check-input", inline_error.is_some().then_some("invalid"))}
                rows="6"
                placeholder="เช่น: บัญชีของคุณถูกระงับ กรุณายืนยันตัวตนที่ bit.ly/xxxx"
                value={model.text.clone()}
                oninput={handle_input}
                disabled={loading}
            />
            <p class="char-count">
                { format!("{} ตัวอักษร (ขั้นต่ำ {} ตัวอักษร หากไม่แนบรูป)", model.text.trim().chars().count(), MIN_TEXT_CHARS) }
            </p>
            { inline_error.unwrap_or_default() }
            { render_attachment(model, ctx) }
            <div class="button-container">
                <button
                    class="analyze-btn"
                    disabled={loading}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    if loading {
                        <><i class="fa-solid fa-spinner fa-spin"></i>{" กำลังตรวจสอบ..."}</>
                    } else {
                        <><i class="fa-solid fa-shield-halved"></i>{" ตรวจสอบเลย"}</>
                    }
                </button>
            </div>
        </div>
    }
}

fn render_attachment(model: &CheckPage, ctx: &Context<CheckPage>) -> Html {
    let link = ctx.link();

    if let Some(preview) = &model.file {
        let name = preview.file.name();
        return html! {
            <div class="attachment-preview">
                <img id="actual-image-preview" src={preview.preview_url.to_string()} alt={name.clone()} />
                <div class="attachment-meta">
                    <span title={name.clone()}>{ truncate_name(&name, 28) }</span>
                    <span class="attachment-size">{ format_bytes(preview.file.size()) }</span>
                </div>
                <button
                    class="remove-btn"
                    title="นำรูปออก"
                    disabled={model.flow.is_loading()}
                    onclick={link.callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::ClearFile
                    })}
                >
                    <i class="fa-solid fa-times" style="font-size: 10px;"></i>
                </button>
            </div>
        };
    }

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input
            .files()
            .and_then(|list| collect_files(&list).into_iter().next());
        input.set_value("");
        file.map(Msg::FilePicked)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(INPUT_ID))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id={INPUT_ID}
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <div
                id="drop-zone"
                class={classes!("upload-area", "compact", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={link.callback(Msg::HandleDrop)}
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-image"></i>
                    <p>{"แนบภาพหน้าจอหรือสลิป: ลากมาวาง วาง หรือคลิก"}</p>
                    <p class="file-types">{"รูปภาพไม่เกิน 10MB"}</p>
                </div>
            </div>
        </>
    }
}
