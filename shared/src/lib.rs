pub mod admin;
pub mod api;
pub mod batch;
pub mod check_flow;
pub mod content;
pub mod models;
pub mod notify;
pub mod pagination;
pub mod risk;
pub mod session;
pub mod validation;

pub use api::ApiError;
pub use models::{
    AnalysisPanel, BatchImageResponse, BatchItem, BatchOutcome, BatchSummary, DetectionResponse,
    ForensicsReport, Page, SlipVerification,
};
pub use notify::{Toast, ToastKind};
pub use risk::RiskTier;
