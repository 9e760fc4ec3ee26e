use crate::api::ApiError;

pub const LOGIN_ROUTE: &str = "/admin/login";

/// Where the admin bearer token lives between page loads.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Admin session handed to every admin page and API call. The token is read
/// from the store on each call, so a clear on one page is seen everywhere.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminSession<S> {
    store: S,
}

impl<S: TokenStore> AdminSession<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn acquire(&self, token: &str) -> bool {
        let token = token.trim();
        if token.is_empty() {
            return false;
        }
        self.store.save(token);
        true
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|token| !token.is_empty())
    }

    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {}", token))
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    /// Clears the token when the backend reports it as expired and returns
    /// the route the caller must navigate to.
    pub fn on_api_error(&self, error: &ApiError) -> Option<&'static str> {
        if error.is_session_expired() {
            log::warn!("Admin token rejected, clearing session");
            self.clear();
            Some(LOGIN_ROUTE)
        } else {
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::TokenStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct MemoryStore(pub Rc<RefCell<Option<String>>>);

    impl TokenStore for MemoryStore {
        fn load(&self) -> Option<String> {
            self.0.borrow().clone()
        }

        fn save(&self, token: &str) {
            *self.0.borrow_mut() = Some(token.to_string());
        }

        fn clear(&self) {
            *self.0.borrow_mut() = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::MemoryStore;
    use super::*;

    #[test]
    fn acquire_and_clear() {
        let session = AdminSession::new(MemoryStore::default());
        assert!(!session.is_authenticated());
        assert!(!session.acquire("   "));

        assert!(session.acquire(" tok-123 "));
        assert_eq!(session.bearer().as_deref(), Some("Bearer tok-123"));

        session.clear();
        assert_eq!(session.token(), None);
    }

    #[test]
    fn forbidden_clears_and_redirects() {
        let session = AdminSession::new(MemoryStore::default());
        session.acquire("tok");

        assert_eq!(session.on_api_error(&ApiError::Network("x".into())), None);
        assert!(session.is_authenticated());

        assert_eq!(session.on_api_error(&ApiError::Forbidden), Some(LOGIN_ROUTE));
        assert!(!session.is_authenticated());
    }

    #[test]
    fn clones_share_the_store() {
        let session = AdminSession::new(MemoryStore::default());
        let other = session.clone();
        session.acquire("tok");
        other.clear();
        assert!(!session.is_authenticated());
    }
}
