use super::{BatchUploader, Msg};
use crate::components::utils::{collect_files, debounce, format_bytes, truncate_name};
use shared::batch::BatchEntry;
use shared::validation::MAX_BATCH_FILES;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

const INPUT_ID: &str = "batch-file-input";

pub fn render_drop_zone(model: &BatchUploader, ctx: &Context<BatchUploader>) -> Html {
    if model.limit_reached() {
        return html! {
            <p class="limit-reached">{ format!("เลือกรูปครบ {} รูปแล้ว", MAX_BATCH_FILES) }</p>
        };
    }

    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files().map(|list| collect_files(&list)).unwrap_or_default();
        input.set_value("");
        Msg::FilesPicked(files)
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
                multiple=true
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />
            <div
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={link.callback(Msg::HandleDrop)}
                onclick={debounce(300, move || trigger_file_input.emit(()))}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"ลากรูปมาวาง วาง (Ctrl+V) หรือคลิกเพื่อเลือกรูป"}</p>
                    <p class="file-types">
                        { format!("สูงสุด {} รูป ไม่เกินรูปละ 10MB (JPG, PNG, WEBP)", MAX_BATCH_FILES) }
                    </p>
                </div>
            </div>
        </>
    }
}

pub fn render_preview_area(model: &BatchUploader, ctx: &Context<BatchUploader>) -> Html {
    if model.selection.is_empty() {
        return html! {};
    }

    let link = ctx.link().clone();

    html! {
        <div id="preview-container">
            <h2>
                { format!("รูปที่เลือก: {} / {}", model.selection.len(), MAX_BATCH_FILES) }
                <span class="preview-size">{ format!(" ({})", format_bytes(model.selection.total_bytes())) }</span>
            </h2>
            <div id="image-previews">
                { for model.selection.entries().iter().map(|entry| render_preview_item(model, ctx, entry)) }
            </div>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    style="background-color: var(--clear-color);"
                    disabled={model.requests.is_loading()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::ClearAll)
                    })}
                >
                    <i class="fa-solid fa-trash"></i>{" ล้างทั้งหมด"}
                </button>
                <button
                    class="analyze-btn"
                    disabled={model.requests.is_loading()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    { render_submit_content(model) }
                </button>
            </div>
        </div>
    }
}

fn render_preview_item(
    model: &BatchUploader,
    ctx: &Context<BatchUploader>,
    entry: &BatchEntry<super::FileData>,
) -> Html {
    let id = entry.id;
    let name = entry.meta.name.clone();

    html! {
        <div class="preview-item" key={id.to_string()} title={name.clone()}>
            <img src={entry.handle.preview_url.to_string()} alt={name.clone()} />
            <span class="preview-name">{ truncate_name(&name, 20) }</span>
            <button
                class="remove-btn"
                title="นำรูปนี้ออก"
                disabled={model.requests.is_loading()}
                onclick={ctx.link().callback(move |e: MouseEvent| {
                    e.stop_propagation();
                    Msg::RemoveFile(id)
                })}
            >
                <i class="fa-solid fa-times" style="font-size: 10px;"></i>
            </button>
        </div>
    }
}

fn render_submit_content(model: &BatchUploader) -> Html {
    if model.requests.is_loading() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" กำลังวิเคราะห์..."}</> }
    } else {
        html! {
            <>
                <i class="fa-solid fa-magnifying-glass"></i>
                { format!(" ตรวจสอบ {} รูป", model.selection.len()) }
            </>
        }
    }
}
