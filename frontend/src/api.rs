use crate::config::AppConfig;
use crate::session::Session;
use gloo_file::File as GlooFile;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::admin::AdminResource;
use shared::api::{endpoints, AdminApi, ApiError, ApiResult, DetectionApi, ListQuery};
use shared::models::{
    BatchImageResponse, CategoryStats, DetectionLog, DetectionResponse, FeedbackLog,
    FeedbackRequest, LoginRequest, LoginResponse, Page, PartnerStats, PublicStats, ReportReceipt,
    ReportRequest, StatsSummary, WikiEntry,
};
use web_sys::FormData;
use yew::prelude::*;

/// Talks to the detection backend. One attempt per call: no retry, no
/// timeout. Admin calls read the bearer token from the session at call time.
#[derive(Clone, PartialEq)]
pub struct HttpClient {
    base_url: &'static str,
    session: Session,
}

impl HttpClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            base_url: config.api_url.trim_end_matches('/'),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let request = builder.build().map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send(request).await?).await
    }
}

async fn send(request: Request) -> ApiResult<Response> {
    request.send().await.map_err(|e| {
        log::error!("Network error: {}", e);
        ApiError::Network(e.to_string())
    })
}

async fn ensure_ok(response: Response) -> ApiResult<Response> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("Server error: {} - {}", status, body);
    Err(ApiError::from_status(status, body))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let response = ensure_ok(response).await?;
    response.json::<T>().await.map_err(|e| {
        log::error!("Failed to parse response: {}", e);
        ApiError::Decode(e.to_string())
    })
}

fn form_data() -> ApiResult<FormData> {
    FormData::new().map_err(|e| ApiError::Request(format!("{:?}", e)))
}

fn append_file(form: &FormData, field: &str, file: &GlooFile) -> ApiResult<()> {
    let raw: &web_sys::File = file.as_ref();
    form.append_with_blob_and_filename(field, raw, &file.name())
        .map_err(|e| ApiError::Request(format!("{:?}", e)))
}

impl DetectionApi for HttpClient {
    type File = GlooFile;

    async fn check(&self, text: &str, file: Option<&GlooFile>) -> ApiResult<DetectionResponse> {
        let form = form_data()?;
        if !text.trim().is_empty() {
            form.append_with_str("text", text.trim())
                .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        }
        if let Some(file) = file {
            append_file(&form, "file", file)?;
        }

        let request = Request::post(&self.url(endpoints::DETECT))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn check_batch(&self, files: &[GlooFile]) -> ApiResult<BatchImageResponse> {
        let form = form_data()?;
        for file in files {
            append_file(&form, "files", file)?;
        }

        let request = Request::post(&self.url(endpoints::DETECT_BATCH_IMAGES))
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn report(&self, report: &ReportRequest) -> ApiResult<ReportReceipt> {
        let request = Request::post(&self.url(endpoints::REPORT))
            .json(report)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn feedback(&self, feedback: &FeedbackRequest) -> ApiResult<()> {
        let request = Request::post(&self.url(endpoints::FEEDBACK))
            .json(feedback)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        ensure_ok(send(request).await?).await.map(|_| ())
    }

    async fn public_stats(&self) -> ApiResult<PublicStats> {
        self.get_json(Request::get(&self.url(endpoints::PUBLIC_STATS)))
            .await
    }

    async fn wiki_search(&self, query: &str) -> ApiResult<Vec<WikiEntry>> {
        self.get_json(Request::get(&self.url(&endpoints::wiki_search(query))))
            .await
    }

    async fn wiki_entry(&self, slug: &str) -> ApiResult<WikiEntry> {
        self.get_json(Request::get(&self.url(&endpoints::wiki_entry(slug))))
            .await
    }
}

impl AdminApi for HttpClient {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<LoginResponse> {
        let request = Request::post(&self.url(endpoints::LOGIN))
            .json(credentials)
            .map_err(|e| ApiError::Request(e.to_string()))?;
        read_json(send(request).await?).await
    }

    async fn summary(&self) -> ApiResult<StatsSummary> {
        self.get_json(self.authorized(Request::get(&self.url(endpoints::ADMIN_SUMMARY))))
            .await
    }

    async fn detections(&self, query: ListQuery) -> ApiResult<Page<DetectionLog>> {
        self.list(AdminResource::Detections, query).await
    }

    async fn feedback_logs(&self, query: ListQuery) -> ApiResult<Page<FeedbackLog>> {
        self.list(AdminResource::Feedback, query).await
    }

    async fn partners(&self, query: ListQuery) -> ApiResult<Page<PartnerStats>> {
        self.list(AdminResource::Partners, query).await
    }

    async fn categories(&self, query: ListQuery) -> ApiResult<Page<CategoryStats>> {
        self.list(AdminResource::Categories, query).await
    }
}

impl HttpClient {
    async fn list<T: DeserializeOwned>(
        &self,
        resource: AdminResource,
        query: ListQuery,
    ) -> ApiResult<Page<T>> {
        let url = self.url(&resource.url(query));
        self.get_json(self.authorized(Request::get(&url))).await
    }
}

#[hook]
pub fn use_api() -> HttpClient {
    use_context::<HttpClient>().unwrap_or_else(|| {
        HttpClient::new(&AppConfig::load(), crate::session::browser_session())
    })
}
