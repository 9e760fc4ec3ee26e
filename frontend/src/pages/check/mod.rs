mod handlers;
mod upload_section;

use crate::api::HttpClient;
use crate::components::verification_card::VerificationCard;
use crate::components::toast::Toaster;
use crate::components::utils::{render_error_message, set_title};
use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::api::ApiResult;
use shared::check_flow::{CheckFlow, Ticket};
use shared::DetectionResponse;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// Attached image with its preview URL; dropping it revokes the URL.
pub struct PreviewFile {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

pub enum Msg {
    SetText(String),
    FilePicked(GlooFile),
    ClearFile,
    Submit,
    AdvanceStage(Ticket),
    Resolved(Ticket, ApiResult<DetectionResponse>),
    Reset,
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

/// Single text/image scam check.
pub struct CheckPage {
    text: String,
    file: Option<PreviewFile>,
    flow: CheckFlow,
    stage_timer: Option<Timeout>,
    is_dragging: bool,
    api: Option<HttpClient>,
    toaster: Option<Toaster>,
    _paste_listener: Option<EventListener>,
}

impl Component for CheckPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        set_title("ตรวจสอบข้อความ");

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
            text: String::new(),
            file: None,
            flow: CheckFlow::new(),
            stage_timer: None,
            is_dragging: false,
            api,
            toaster,
            _paste_listener: paste_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetText(text) => {
                self.text = text;
                self.flow.clear_inline_error();
                true
            }
            Msg::FilePicked(file) => handlers::handle_file_picked(self, file),
            Msg::ClearFile => handlers::handle_clear_file(self),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::AdvanceStage(ticket) => self.flow.advance_stage(ticket),
            Msg::Resolved(ticket, result) => handlers::handle_resolved(self, ticket, result),
            Msg::Reset => handlers::handle_reset(self),
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
            <div class="check-page">
                <header class="page-header">
                    <h1><i class="fa-solid fa-magnifying-glass"></i>{" ตรวจสอบข้อความ ลิงก์ หรือรูปภาพ"}</h1>
                    <p class="subtitle">
                        {"วางข้อความ SMS แชท ลิงก์ หรือแนบภาพหน้าจอ/สลิปโอนเงินที่น่าสงสัย"}
                    </p>
                </header>
                { upload_section::render_input_section(self, ctx) }
                { self.render_loading() }
                { render_error_message(self.flow.error_message()) }
                { self.render_result(ctx) }
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.file = None;
        self.stage_timer = None;
    }
}

impl CheckPage {
    fn toast(&self, toast: shared::Toast) {
        match &self.toaster {
            Some(toaster) => toaster.show(toast),
            None => log::warn!("{}", toast.message),
        }
    }

    fn render_loading(&self) -> Html {
        match self.flow.loading_message() {
            Some(message) => html! {
                <div class="loading-indicator">
                    <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
                    <p>{ message }</p>
                </div>
            },
            None => html! {},
        }
    }

    fn render_result(&self, ctx: &Context<Self>) -> Html {
        match self.flow.result() {
            Some(response) => html! {
                <>
                    <VerificationCard response={response.clone()} />
                    <div class="button-container">
                        <button class="analyze-btn secondary" onclick={ctx.link().callback(|_| Msg::Reset)}>
                            <i class="fa-solid fa-rotate-left"></i>{" ตรวจสอบรายการใหม่"}
                        </button>
                    </div>
                </>
            },
            None => html! {},
        }
    }
}
