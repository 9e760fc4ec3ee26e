pub mod admin;
mod check;
mod content;
mod home;
mod tools;

pub use check::CheckPage;
pub use content::{AboutPage, BlogIndex, BlogPostPage, NotFound, WikiEntryPage, WikiPage};
pub use home::HomePage;
pub use tools::{BatchPage, ReportPage};
