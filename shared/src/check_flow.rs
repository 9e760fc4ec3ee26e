//! Lifecycle of one scam check: validate, submit, resolve.
//!
//! Every accepted submission gets a sequence number. Responses, and the
//! loading-message timer, only land if they carry the latest number, so a
//! slow first request can never overwrite the answer to a second one.

use crate::api::ApiResult;
use crate::models::DetectionResponse;
use crate::notify::Toast;
use crate::risk::RiskTier;
use crate::validation::{validate_check_input, ValidationError};

pub const LOADING_STAGE_DELAY_MS: u32 = 1_500;
pub const VIBRATION_PATTERN: [u32; 3] = [200, 100, 200];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingStage {
    Analyzing,
    CrossChecking,
}

impl LoadingStage {
    pub fn message(self) -> &'static str {
        match self {
            LoadingStage::Analyzing => "กำลังวิเคราะห์ข้อความและรูปภาพ...",
            LoadingStage::CrossChecking => "กำลังตรวจสอบกับฐานข้อมูลมิจฉาชีพ...",
        }
    }
}

/// Handle for one in-flight submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CheckState {
    Idle,
    Submitting { ticket: Ticket, stage: LoadingStage },
    Success(DetectionResponse),
    Failed(String),
}

/// Side effects the view must perform once a response is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub toast: Toast,
    pub vibrate: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckFlow {
    state: CheckState,
    inline_error: Option<ValidationError>,
    latest: u64,
}

impl Default for CheckFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl CheckFlow {
    pub fn new() -> Self {
        Self {
            state: CheckState::Idle,
            inline_error: None,
            latest: 0,
        }
    }

    /// Returns a ticket when the input may be sent. On a validation failure
    /// the inline error is set and no request must be made.
    pub fn submit(&mut self, text: &str, has_file: bool) -> Result<Ticket, ValidationError> {
        if let Err(error) = validate_check_input(text, has_file) {
            self.inline_error = Some(error.clone());
            return Err(error);
        }

        self.latest += 1;
        let ticket = Ticket(self.latest);
        self.inline_error = None;
        self.state = CheckState::Submitting {
            ticket,
            stage: LoadingStage::Analyzing,
        };
        Ok(ticket)
    }

    /// Timer tick for the second loading message.
    pub fn advance_stage(&mut self, ticket: Ticket) -> bool {
        match &mut self.state {
            CheckState::Submitting {
                ticket: current,
                stage,
            } if *current == ticket && *stage == LoadingStage::Analyzing => {
                *stage = LoadingStage::CrossChecking;
                true
            }
            _ => false,
        }
    }

    /// Applies a response. `None` means the ticket was superseded and the
    /// response was dropped.
    pub fn resolve(
        &mut self,
        ticket: Ticket,
        result: ApiResult<DetectionResponse>,
    ) -> Option<Resolution> {
        if ticket.0 != self.latest || !self.is_loading() {
            log::debug!(
                "Dropping stale check response #{} (latest #{})",
                ticket.0,
                self.latest
            );
            return None;
        }

        match result {
            Ok(response) => {
                let tier = RiskTier::from_score(response.risk_score);
                let resolution = Resolution {
                    toast: Toast::new(tier.toast_kind(), tier.toast_message()),
                    vibrate: response.is_scam,
                };
                self.state = CheckState::Success(response);
                Some(resolution)
            }
            Err(error) => {
                log::error!("Check request failed: {}", error);
                let message = error.user_message().to_string();
                self.state = CheckState::Failed(message.clone());
                Some(Resolution {
                    toast: Toast::error(message),
                    vibrate: false,
                })
            }
        }
    }

    /// Back to idle. Anything still in flight becomes stale.
    pub fn reset(&mut self) {
        self.latest += 1;
        self.state = CheckState::Idle;
        self.inline_error = None;
    }

    pub fn clear_inline_error(&mut self) {
        self.inline_error = None;
    }

    pub fn state(&self) -> &CheckState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CheckState::Submitting { .. })
    }

    pub fn loading_message(&self) -> Option<&'static str> {
        match self.state {
            CheckState::Submitting { stage, .. } => Some(stage.message()),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&DetectionResponse> {
        match &self.state {
            CheckState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            CheckState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn inline_error(&self) -> Option<&ValidationError> {
        self.inline_error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, ApiResult, DetectionApi, CONNECTION_ERROR_MESSAGE};
    use crate::models::{
        BatchImageResponse, FeedbackRequest, PublicStats, ReportReceipt, ReportRequest, WikiEntry,
    };
    use crate::notify::ToastKind;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    fn response(score: f32, is_scam: bool, category: &str) -> DetectionResponse {
        DetectionResponse {
            request_id: "req-1".into(),
            is_scam,
            risk_score: score,
            category: category.into(),
            reason: "test".into(),
            ocr_text: None,
            panels: Vec::new(),
        }
    }

    /// Detection API double that answers every check with a canned result.
    struct MockApi {
        reply: ApiResult<DetectionResponse>,
        calls: Cell<usize>,
        last_text: RefCell<String>,
    }

    impl MockApi {
        fn replying(reply: ApiResult<DetectionResponse>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
                last_text: RefCell::new(String::new()),
            }
        }
    }

    impl DetectionApi for MockApi {
        type File = ();

        async fn check(&self, text: &str, _file: Option<&()>) -> ApiResult<DetectionResponse> {
            self.calls.set(self.calls.get() + 1);
            *self.last_text.borrow_mut() = text.to_string();
            self.reply.clone()
        }

        async fn check_batch(&self, _files: &[()]) -> ApiResult<BatchImageResponse> {
            Err(ApiError::Network("unused".into()))
        }

        async fn report(&self, _report: &ReportRequest) -> ApiResult<ReportReceipt> {
            Err(ApiError::Network("unused".into()))
        }

        async fn feedback(&self, _feedback: &FeedbackRequest) -> ApiResult<()> {
            Ok(())
        }

        async fn public_stats(&self) -> ApiResult<PublicStats> {
            Ok(PublicStats::default())
        }

        async fn wiki_search(&self, _query: &str) -> ApiResult<Vec<WikiEntry>> {
            Ok(Vec::new())
        }

        async fn wiki_entry(&self, _slug: &str) -> ApiResult<WikiEntry> {
            Err(ApiError::from_status(404, String::new()))
        }
    }

    /// Drives the flow the way the check page does.
    fn run(flow: &mut CheckFlow, api: &MockApi, text: &str) -> Option<Resolution> {
        let ticket = flow.submit(text, false).ok()?;
        let result = block_on(api.check(text, None));
        flow.resolve(ticket, result)
    }

    #[test]
    fn short_text_never_reaches_the_api() {
        let api = MockApi::replying(Ok(response(0.1, false, "safe")));
        let mut flow = CheckFlow::new();

        for text in ["", "  ", "abcd", "  ab  "] {
            assert!(run(&mut flow, &api, text).is_none());
            assert!(flow.inline_error().is_some());
        }
        assert_eq!(api.calls.get(), 0);
        assert_eq!(flow.state(), &CheckState::Idle);
    }

    #[test]
    fn high_risk_text_shows_warning_header_toast_and_vibrates() {
        let api = MockApi::replying(Ok(response(0.85, true, "banking_scam")));
        let mut flow = CheckFlow::new();

        let resolution = run(&mut flow, &api, "โอนเงินด่วน bit.ly/x").unwrap();

        assert_eq!(api.calls.get(), 1);
        assert_eq!(api.last_text.borrow().as_str(), "โอนเงินด่วน bit.ly/x");
        assert_eq!(resolution.toast.kind, ToastKind::Error);
        assert!(resolution.vibrate);
        let result = flow.result().unwrap();
        assert_eq!(result.category, "banking_scam");
        assert_eq!(
            RiskTier::from_score(result.risk_score).headline(),
            "ระวัง! ความเสี่ยงสูง"
        );
    }

    #[test]
    fn toast_tier_follows_score() {
        for (score, kind) in [
            (0.7, ToastKind::Error),
            (0.4, ToastKind::Warning),
            (0.39, ToastKind::Success),
        ] {
            let api = MockApi::replying(Ok(response(score, false, "x")));
            let mut flow = CheckFlow::new();
            let resolution = run(&mut flow, &api, "hello world").unwrap();
            assert_eq!(resolution.toast.kind, kind);
            assert!(!resolution.vibrate);
        }
    }

    #[test]
    fn failures_collapse_to_generic_message() {
        let api = MockApi::replying(Err(ApiError::from_status(502, "bad gateway".into())));
        let mut flow = CheckFlow::new();

        let resolution = run(&mut flow, &api, "hello world").unwrap();

        assert_eq!(resolution.toast.kind, ToastKind::Error);
        assert_eq!(flow.error_message(), Some(CONNECTION_ERROR_MESSAGE));
        assert!(flow.result().is_none());
    }

    #[test]
    fn forbidden_on_public_check_is_a_connection_failure() {
        let mut flow = CheckFlow::new();
        let ticket = flow.submit("hello world", false).unwrap();

        let resolution = flow
            .resolve(ticket, Err(ApiError::from_status(403, "waf".into())))
            .unwrap();

        assert_eq!(resolution.toast.message, CONNECTION_ERROR_MESSAGE);
        assert_eq!(flow.error_message(), Some(CONNECTION_ERROR_MESSAGE));
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut flow = CheckFlow::new();
        let first = flow.submit("first message", false).unwrap();
        let second = flow.submit("second message", false).unwrap();

        assert!(flow.resolve(second, Ok(response(0.1, false, "safe"))).is_some());
        assert!(flow.resolve(first, Ok(response(0.9, true, "scam"))).is_none());
        assert_eq!(flow.result().unwrap().risk_score, 0.1);
    }

    #[test]
    fn stale_response_after_reset_is_discarded() {
        let mut flow = CheckFlow::new();
        let ticket = flow.submit("some message", false).unwrap();
        flow.reset();
        assert!(flow.resolve(ticket, Ok(response(0.9, true, "scam"))).is_none());
        assert_eq!(flow.state(), &CheckState::Idle);
    }

    #[test]
    fn loading_stage_advances_once_for_current_ticket() {
        let mut flow = CheckFlow::new();
        let old = flow.submit("first message", false).unwrap();
        let current = flow.submit("", true).unwrap();

        assert!(!flow.advance_stage(old));
        assert_eq!(flow.loading_message(), Some(LoadingStage::Analyzing.message()));
        assert!(flow.advance_stage(current));
        assert!(!flow.advance_stage(current));
        assert_eq!(
            flow.loading_message(),
            Some(LoadingStage::CrossChecking.message())
        );
    }

    #[test]
    fn resubmit_clears_previous_result() {
        let mut flow = CheckFlow::new();
        let ticket = flow.submit("first message", false).unwrap();
        flow.resolve(ticket, Ok(response(0.1, false, "safe")));
        assert!(flow.result().is_some());

        flow.submit("second message", false).unwrap();
        assert!(flow.result().is_none());
        assert!(flow.is_loading());
    }
}
