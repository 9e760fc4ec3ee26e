use super::{CheckPage, Msg, PreviewFile};
use crate::components::utils::{collect_files, file_meta, vibrate};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::api::{ApiResult, DetectionApi, CONNECTION_ERROR_MESSAGE};
use shared::check_flow::{Ticket, LOADING_STAGE_DELAY_MS, VIBRATION_PATTERN};
use shared::validation::validate_image_file;
use shared::{DetectionResponse, Toast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

pub fn handle_file_picked(model: &mut CheckPage, file: GlooFile) -> bool {
    if model.flow.is_loading() {
        return false;
    }
    if let Err(rejection) = validate_image_file(&file_meta(&file)) {
        log::warn!("Rejected attachment: {}", rejection);
        model.toast(Toast::warning(rejection.user_message()));
        return false;
    }

    let preview_url = ObjectUrl::from(file.clone());
    // Replacing the attachment drops (and revokes) the previous preview.
    model.file = Some(PreviewFile { file, preview_url });
    model.flow.clear_inline_error();
    true
}

pub fn handle_clear_file(model: &mut CheckPage) -> bool {
    model.file.take().is_some()
}

pub fn handle_submit(model: &mut CheckPage, ctx: &Context<CheckPage>) -> bool {
    if model.flow.is_loading() {
        log::debug!("Submission while another check is in flight");
    }

    let ticket = match model.flow.submit(&model.text, model.file.is_some()) {
        Ok(ticket) => ticket,
        Err(error) => {
            log::debug!("Check input rejected: {}", error);
            return true;
        }
    };

    let Some(api) = model.api.clone() else {
        log::error!("No API client in context");
        return handle_resolved(
            model,
            ticket,
            Err(shared::ApiError::Request(CONNECTION_ERROR_MESSAGE.into())),
        );
    };

    let link = ctx.link().clone();
    model.stage_timer = Some(Timeout::new(LOADING_STAGE_DELAY_MS, move || {
        link.send_message(Msg::AdvanceStage(ticket));
    }));

    let text = model.text.clone();
    let file = model.file.as_ref().map(|preview| preview.file.clone());
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = api.check(&text, file.as_ref()).await;
        link.send_message(Msg::Resolved(ticket, result));
    });

    true
}

pub fn handle_resolved(
    model: &mut CheckPage,
    ticket: Ticket,
    result: ApiResult<DetectionResponse>,
) -> bool {
    let Some(resolution) = model.flow.resolve(ticket, result) else {
        return false;
    };

    model.stage_timer = None;
    if resolution.vibrate {
        vibrate(&VIBRATION_PATTERN);
    }
    model.toast(resolution.toast);
    true
}

pub fn handle_reset(model: &mut CheckPage) -> bool {
    model.flow.reset();
    model.text.clear();
    model.file = None;
    model.stage_timer = None;
    true
}

pub fn handle_drop(model: &mut CheckPage, ctx: &Context<CheckPage>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(file) = event
        .data_transfer()
        .and_then(|dt| dt.files())
        .and_then(|list| collect_files(&list).into_iter().next())
    {
        ctx.link().send_message(Msg::FilePicked(file));
    }

    true
}

pub fn handle_paste(ctx: &Context<CheckPage>, event: ClipboardEvent) -> bool {
    if let Some(file) = event
        .clipboard_data()
        .and_then(|dt| dt.files())
        .and_then(|list| collect_files(&list).into_iter().next())
    {
        event.prevent_default();
        ctx.link().send_message(Msg::FilePicked(file));
    }
    false
}
