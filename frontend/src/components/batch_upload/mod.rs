mod handlers;
mod preview_area;

use super::toast::Toaster;
use crate::api::HttpClient;
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::api::ApiResult;
use shared::batch::{BatchRequests, BatchSelection};
use shared::validation::MAX_BATCH_FILES;
use shared::BatchImageResponse;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// A picked image and the object URL backing its thumbnail. Dropping it
/// revokes the URL.
pub struct FileData {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    FilesPicked(Vec<GlooFile>),
    RemoveFile(u64),
    ClearAll,
    Submit,
    Resolved(u64, ApiResult<BatchImageResponse>),
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

#[derive(Properties, PartialEq)]
pub struct BatchUploaderProps {
    pub on_result: Callback<BatchImageResponse>,
    #[prop_or_default]
    pub on_submit: Callback<usize>,
}

pub struct BatchUploader {
    selection: BatchSelection<FileData>,
    requests: BatchRequests,
    is_dragging: bool,
    api: Option<HttpClient>,
    toaster: Option<Toaster>,
    _paste_listener: Option<EventListener>,
}

impl Component for BatchUploader {
    type Message = Msg;
    type Properties = BatchUploaderProps;

    fn create(ctx: &Context<Self>) -> Self {
        let api = ctx
            .link()
            .context::<HttpClient>(Callback::noop())
            .map(|(api, _)| api);
        let toaster = ctx
            .link()
            .context::<Toaster>(Callback::noop())
            .map(|(toaster, _)| toaster);

        let paste_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            })
        });

        Self {
            selection: BatchSelection::new(),
            requests: BatchRequests::new(),
            is_dragging: false,
            api,
            toaster,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FilesPicked(files) => handlers::handle_files_picked(self, files),
            Msg::RemoveFile(id) => handlers::handle_remove_file(self, id),
            Msg::ClearAll => handlers::handle_clear_all(self),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::Resolved(request, result) => handlers::handle_resolved(self, ctx, request, result),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="upload-section batch-upload">
                { preview_area::render_drop_zone(self, ctx) }
                { preview_area::render_preview_area(self, ctx) }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        drop(self.selection.clear());
    }
}

impl BatchUploader {
    fn limit_reached(&self) -> bool {
        self.selection.len() >= MAX_BATCH_FILES
    }

    fn toast(&self, toast: shared::Toast) {
        match &self.toaster {
            Some(toaster) => toaster.show(toast),
            None => log::warn!("{}", toast.message),
        }
    }
}
