pub mod auth_button;
pub mod batch_results;
pub mod batch_upload;
pub mod feedback;
pub mod forensics_card;
pub mod layout;
pub mod ocr_display;
pub mod pager;
pub mod slip_card;
pub mod stats_ticker;
pub mod toast;
pub mod utils;
pub mod verification_card;
