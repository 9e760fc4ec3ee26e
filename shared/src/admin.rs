use crate::api::{ApiError, ApiResult, ListQuery};
use crate::models::Page;
use crate::pagination::Pagination;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

pub const SUMMARY_POLL_INTERVAL_MS: u32 = 10_000;

/// The paged admin listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum AdminResource {
    Detections,
    Feedback,
    Partners,
    Categories,
}

impl AdminResource {
    pub const ALL: [AdminResource; 4] = [
        AdminResource::Detections,
        AdminResource::Feedback,
        AdminResource::Partners,
        AdminResource::Categories,
    ];

    pub fn api_path(self) -> &'static str {
        match self {
            AdminResource::Detections => "/api/v1/admin/detections",
            AdminResource::Feedback => "/api/v1/admin/feedback",
            AdminResource::Partners => "/api/v1/admin/stats/partners",
            AdminResource::Categories => "/api/v1/admin/stats/categories",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AdminResource::Detections => "ประวัติการตรวจสอบ",
            AdminResource::Feedback => "ความคิดเห็นจากผู้ใช้",
            AdminResource::Partners => "พาร์ทเนอร์",
            AdminResource::Categories => "หมวดหมู่มิจฉาชีพ",
        }
    }

    pub fn route(self) -> &'static str {
        match self {
            AdminResource::Detections => "/admin/detections",
            AdminResource::Feedback => "/admin/feedback",
            AdminResource::Partners => "/admin/partners",
            AdminResource::Categories => "/admin/categories",
        }
    }

    pub fn url(self, query: ListQuery) -> String {
        format!("{}?{}", self.api_path(), query.to_query_string())
    }
}

/// Outcome of applying one page response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListUpdate {
    Updated,
    Stale,
    SessionExpired,
    Failed(String),
}

/// State of one paged admin table. Each fetch gets a generation number and
/// only the newest generation may write items.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminList<T> {
    pagination: Pagination,
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    generation: u64,
}

impl<T> Default for AdminList<T> {
    fn default() -> Self {
        Self::new(Pagination::default())
    }
}

impl<T> AdminList<T> {
    pub fn new(pagination: Pagination) -> Self {
        Self {
            pagination,
            items: Vec::new(),
            loading: false,
            error: None,
            generation: 0,
        }
    }

    /// Starts a fetch of `page` and returns the generation and query to send.
    pub fn request(&mut self, page: u32) -> (u64, ListQuery) {
        self.pagination.page = page.max(1);
        self.generation += 1;
        self.loading = true;
        self.error = None;
        (self.generation, self.pagination.query())
    }

    pub fn apply(&mut self, generation: u64, result: ApiResult<Page<T>>) -> ListUpdate {
        if generation != self.generation {
            return ListUpdate::Stale;
        }
        self.loading = false;

        match result {
            Ok(page) => {
                self.pagination.set_total(page.total);
                self.items = page.items;
                ListUpdate::Updated
            }
            Err(ApiError::Forbidden) => {
                self.items.clear();
                ListUpdate::SessionExpired
            }
            Err(error) => {
                log::error!("Admin list request failed: {}", error);
                let message = error.user_message().to_string();
                self.error = Some(message.clone());
                ListUpdate::Failed(message)
            }
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Bars for the category chart: each count as a share of the largest one.
pub fn bar_widths(counts: &[u64]) -> Vec<f32> {
    let max = counts.iter().copied().max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; counts.len()];
    }
    counts
        .iter()
        .map(|&count| count as f32 / max as f32 * 100.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::testing::MemoryStore;
    use crate::session::{AdminSession, LOGIN_ROUTE};
    use strum::IntoEnumIterator;

    fn page(items: Vec<u32>, total: u64) -> ApiResult<Page<u32>> {
        Ok(Page { items, total })
    }

    #[test]
    fn page_response_updates_items_and_total() {
        let mut list = AdminList::new(Pagination::new(2));
        let (generation, query) = list.request(1);
        assert_eq!(query, ListQuery { page: 1, page_size: 2 });
        assert!(list.is_loading());

        assert_eq!(list.apply(generation, page(vec![1, 2], 5)), ListUpdate::Updated);
        assert!(!list.is_loading());
        assert_eq!(list.items(), &[1, 2]);
        assert_eq!(list.pagination().total_pages(), 3);
        assert!(list.pagination().has_next());
        assert!(!list.pagination().has_previous());
    }

    #[test]
    fn superseded_page_is_ignored() {
        let mut list = AdminList::new(Pagination::new(2));
        let (first, _) = list.request(1);
        let (second, _) = list.request(2);

        assert_eq!(list.apply(second, page(vec![3, 4], 5)), ListUpdate::Updated);
        assert_eq!(list.apply(first, page(vec![1, 2], 5)), ListUpdate::Stale);
        assert_eq!(list.items(), &[3, 4]);
        assert_eq!(list.pagination().page, 2);
    }

    #[test]
    fn forbidden_on_page_two_clears_token_and_redirects() {
        let session = AdminSession::new(MemoryStore::default());
        session.acquire("admin-token");
        let mut list: AdminList<u32> = AdminList::new(Pagination::new(10));

        let (generation, _) = list.request(1);
        list.apply(generation, page(vec![1; 10], 25));
        let (generation, query) = list.request(2);
        assert_eq!(query.page, 2);

        let error = ApiError::from_status(403, "expired".into());
        let redirect = session.on_api_error(&error);
        assert_eq!(list.apply(generation, Err(error)), ListUpdate::SessionExpired);
        assert_eq!(redirect, Some(LOGIN_ROUTE));
        assert!(!session.is_authenticated());
        assert!(list.items().is_empty());
    }

    #[test]
    fn other_failures_keep_session() {
        let mut list: AdminList<u32> = AdminList::default();
        let (generation, _) = list.request(1);
        let update = list.apply(generation, Err(ApiError::Network("down".into())));
        assert!(matches!(update, ListUpdate::Failed(_)));
        assert!(list.error().is_some());
    }

    #[test]
    fn resource_urls() {
        let query = ListQuery { page: 3, page_size: 20 };
        assert_eq!(
            AdminResource::Detections.url(query),
            "/api/v1/admin/detections?page=3&page_size=20"
        );
        assert!(AdminResource::iter().eq(AdminResource::ALL));
        assert_eq!(AdminResource::Categories.to_string(), "categories");
    }

    #[test]
    fn bar_widths_scale_to_max() {
        assert_eq!(bar_widths(&[5, 10, 0]), vec![50.0, 100.0, 0.0]);
        assert_eq!(bar_widths(&[0, 0]), vec![0.0, 0.0]);
        assert!(bar_widths(&[]).is_empty());
    }
}
