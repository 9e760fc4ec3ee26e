use gloo_storage::{SessionStorage, Storage};
use shared::session::{AdminSession, TokenStore};
use yew::prelude::*;

const TOKEN_KEY: &str = "admin_token";

/// Token store backed by the tab's sessionStorage.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        SessionStorage::get::<String>(TOKEN_KEY).ok()
    }

    fn save(&self, token: &str) {
        if let Err(e) = SessionStorage::set(TOKEN_KEY, token) {
            log::error!("Failed to persist admin token: {:?}", e);
        }
    }

    fn clear(&self) {
        SessionStorage::delete(TOKEN_KEY);
    }
}

pub type Session = AdminSession<BrowserTokenStore>;

pub fn browser_session() -> Session {
    AdminSession::new(BrowserTokenStore)
}

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().unwrap_or_else(browser_session)
}
