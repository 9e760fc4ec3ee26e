use crate::models::{
    BatchImageResponse, CategoryStats, DetectionLog, DetectionResponse, FeedbackLog,
    FeedbackRequest, LoginRequest, LoginResponse, Page, PartnerStats, PublicStats, ReportReceipt,
    ReportRequest, StatsSummary, WikiEntry,
};
use thiserror::Error;

pub const CONNECTION_ERROR_MESSAGE: &str =
    "ไม่สามารถเชื่อมต่อกับระบบตรวจสอบได้ กรุณาลองใหม่อีกครั้ง";
pub const SESSION_EXPIRED_MESSAGE: &str = "เซสชันหมดอายุ กรุณาเข้าสู่ระบบใหม่";

/// Every way a single backend call can fail. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("forbidden")]
    Forbidden,
    #[error("server error: {status} - {body}")]
    Status { status: u16, body: String },
    #[error("failed to parse response: {0}")]
    Decode(String),
    #[error("failed to build request: {0}")]
    Request(String),
}

impl ApiError {
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 403 {
            ApiError::Forbidden
        } else {
            ApiError::Status { status, body }
        }
    }

    /// The admin backend answers 403 once a bearer token is no longer valid.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ApiError::Forbidden)
    }

    /// All transport and server failures collapse into one message. Session
    /// expiry is decided by the admin callers, not here: a 403 from a public
    /// endpoint is a connection failure like any other.
    pub fn user_message(&self) -> &'static str {
        CONNECTION_ERROR_MESSAGE
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

pub mod endpoints {
    pub const DETECT: &str = "/api/v1/detect";
    pub const DETECT_BATCH_IMAGES: &str = "/api/v1/detect/batch-images";
    pub const REPORT: &str = "/api/v1/report";
    pub const FEEDBACK: &str = "/api/v1/feedback";
    pub const PUBLIC_STATS: &str = "/api/v1/stats/public";
    pub const WIKI: &str = "/api/v1/wiki";
    pub const LOGIN: &str = "/api/v1/auth/login";
    pub const ADMIN_SUMMARY: &str = "/api/v1/admin/stats/summary";

    pub fn wiki_entry(slug: &str) -> String {
        format!("{}/{}", WIKI, urlencoding::encode(slug))
    }

    pub fn wiki_search(query: &str) -> String {
        format!("{}?q={}", WIKI, urlencoding::encode(query))
    }
}

/// Page request for the admin listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
}

impl ListQuery {
    pub fn to_query_string(self) -> String {
        format!("page={}&page_size={}", self.page, self.page_size)
    }
}

/// Public-facing calls. The text/file payload of a check is owned by the
/// transport, so the file handle is a type parameter.
#[allow(async_fn_in_trait)]
pub trait DetectionApi {
    type File;

    async fn check(&self, text: &str, file: Option<&Self::File>) -> ApiResult<DetectionResponse>;
    async fn check_batch(&self, files: &[Self::File]) -> ApiResult<BatchImageResponse>;
    async fn report(&self, report: &ReportRequest) -> ApiResult<ReportReceipt>;
    async fn feedback(&self, feedback: &FeedbackRequest) -> ApiResult<()>;
    async fn public_stats(&self) -> ApiResult<PublicStats>;
    async fn wiki_search(&self, query: &str) -> ApiResult<Vec<WikiEntry>>;
    async fn wiki_entry(&self, slug: &str) -> ApiResult<WikiEntry>;
}

/// Bearer-authenticated admin calls.
#[allow(async_fn_in_trait)]
pub trait AdminApi {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse>;
    async fn summary(&self) -> ApiResult<StatsSummary>;
    async fn detections(&self, query: ListQuery) -> ApiResult<Page<DetectionLog>>;
    async fn feedback_logs(&self, query: ListQuery) -> ApiResult<Page<FeedbackLog>>;
    async fn partners(&self, query: ListQuery) -> ApiResult<Page<PartnerStats>>;
    async fn categories(&self, query: ListQuery) -> ApiResult<Page<CategoryStats>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forbidden_is_the_only_session_error() {
        assert_eq!(ApiError::from_status(403, String::new()), ApiError::Forbidden);
        assert!(ApiError::Forbidden.is_session_expired());
        assert!(!ApiError::from_status(401, String::new()).is_session_expired());
        assert!(!ApiError::Network("offline".into()).is_session_expired());
    }

    #[test]
    fn failures_collapse_to_one_message() {
        let errors = [
            ApiError::Network("timeout".into()),
            ApiError::from_status(500, "boom".into()),
            ApiError::from_status(404, String::new()),
            ApiError::Decode("eof".into()),
            ApiError::from_status(403, "waf".into()),
        ];
        for error in errors {
            assert_eq!(error.user_message(), CONNECTION_ERROR_MESSAGE);
        }
    }

    #[test]
    fn query_encoding() {
        assert_eq!(
            ListQuery { page: 2, page_size: 20 }.to_query_string(),
            "page=2&page_size=20"
        );
        assert_eq!(endpoints::wiki_search("a b&c"), "/api/v1/wiki?q=a%20b%26c");
        assert_eq!(endpoints::wiki_entry("call-center"), "/api/v1/wiki/call-center");
        assert_eq!(endpoints::wiki_entry("sms/otp"), "/api/v1/wiki/sms%2Fotp");
    }
}
