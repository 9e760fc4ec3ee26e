mod dashboard;
mod list;
mod login;
mod shell;

pub use dashboard::AdminDashboard;
pub use list::AdminListPage;
pub use login::AdminLogin;
