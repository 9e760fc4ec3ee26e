use super::{BatchUploader, FileData, Msg};
use crate::components::utils::{collect_files, file_meta};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::api::{ApiResult, DetectionApi, CONNECTION_ERROR_MESSAGE};
use shared::{BatchImageResponse, Toast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_files_picked(model: &mut BatchUploader, files: Vec<GlooFile>) -> bool {
    if model.requests.is_loading() {
        return false;
    }

    let candidates = files.into_iter().map(|file| {
        let meta = file_meta(&file);
        let preview_url = ObjectUrl::from(file.clone());
        (meta, FileData { file, preview_url })
    });
    let report = model.selection.admit(candidates);

    for rejection in &report.rejected {
        model.toast(Toast::warning(rejection.user_message()));
    }
    if report.truncated > 0 {
        log::info!("Dropped {} file(s) over the batch limit", report.truncated);
    }

    !report.added.is_empty() || !report.rejected.is_empty()
}

pub fn handle_remove_file(model: &mut BatchUploader, id: u64) -> bool {
    model.selection.remove(id).is_some()
}

pub fn handle_clear_all(model: &mut BatchUploader) -> bool {
    drop(model.selection.clear());
    true
}

pub fn handle_submit(model: &mut BatchUploader, ctx: &Context<BatchUploader>) -> bool {
    if model.selection.is_empty() {
        model.toast(Toast::warning("กรุณาเลือกรูปภาพอย่างน้อย 1 รูป"));
        return false;
    }
    let Some(api) = model.api.clone() else {
        log::error!("No API client in context");
        model.toast(Toast::error(CONNECTION_ERROR_MESSAGE));
        return false;
    };

    let request = model.requests.begin();
    let files: Vec<GlooFile> = model
        .selection
        .entries()
        .iter()
        .map(|entry| entry.handle.file.clone())
        .collect();
    ctx.props().on_submit.emit(files.len());

    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.check_batch(&files).await;
        link.send_message(Msg::Resolved(request, result));
    });

    true
}

pub fn handle_resolved(
    model: &mut BatchUploader,
    ctx: &Context<BatchUploader>,
    request: u64,
    result: ApiResult<BatchImageResponse>,
) -> bool {
    let Some(resolution) = model.requests.resolve(request, result) else {
        return false;
    };

    model.toast(resolution.toast);
    if let Some(response) = resolution.response {
        ctx.props().on_result.emit(response);
    }

    true
}

pub fn handle_drop(model: &mut BatchUploader, ctx: &Context<BatchUploader>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file_list) = event.data_transfer().and_then(|dt| dt.files()) {
        ctx.link()
            .send_message(Msg::FilesPicked(collect_files(&file_list)));
    }

    true
}

pub fn handle_paste(ctx: &Context<BatchUploader>, event: ClipboardEvent) -> bool {
    if let Some(file_list) = event.clipboard_data().and_then(|dt| dt.files()) {
        if file_list.length() > 0 {
            event.prevent_default();
            ctx.link()
                .send_message(Msg::FilesPicked(collect_files(&file_list)));
        }
    }
    false
}
