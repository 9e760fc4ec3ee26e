use super::shell::{expire_on_forbidden, AdminShell};
use crate::api::{use_api, HttpClient};
use crate::components::pager::Pager;
use crate::components::toast::use_toaster;
use crate::components::utils::{render_error_message, render_skeleton_rows, use_title};
use crate::session::use_session;
use shared::admin::{AdminList, AdminResource, ListUpdate};
use shared::api::{AdminApi, ApiError, ApiResult, ListQuery};
use shared::content::category_label;
use shared::models::{CategoryStats, DetectionLog, FeedbackLog, Page, PartnerStats};
use shared::pagination::{Pagination, DEFAULT_PAGE_SIZE};
use shared::risk::{percent, RiskTier};
use shared::Toast;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

/// One row type of a paged admin table.
#[allow(async_fn_in_trait)]
pub trait AdminRow: Clone + PartialEq + 'static {
    const RESOURCE: AdminResource;

    fn headers() -> &'static [&'static str];

    fn cells(&self) -> Vec<Html>;

    async fn fetch(api: &HttpClient, query: ListQuery) -> ApiResult<Page<Self>>;
}

fn risk_badge(score: f32) -> Html {
    let tier = RiskTier::from_score(score);
    html! {
        <span class={classes!("risk-badge", tier.css_class())}>
            { format!("{}%", percent(score)) }
        </span>
    }
}

fn or_dash(value: Option<&str>) -> Html {
    html! { { value.filter(|v| !v.is_empty()).unwrap_or("-").to_string() } }
}

impl AdminRow for DetectionLog {
    const RESOURCE: AdminResource = AdminResource::Detections;

    fn headers() -> &'static [&'static str] {
        &["เวลา", "ข้อมูล", "ประเภท", "ผล", "ความเสี่ยง", "หมวดหมู่", "พาร์ทเนอร์"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.created_at.clone() } },
            html! { <span class="cell-preview" title={self.input_preview.clone()}>{ &self.input_preview }</span> },
            html! { { self.input_type.clone() } },
            if self.is_scam {
                html! { <span class="verdict scam">{"มิจฉาชีพ"}</span> }
            } else {
                html! { <span class="verdict safe">{"ปลอดภัย"}</span> }
            },
            risk_badge(self.risk_score),
            html! { { category_label(&self.category).to_string() } },
            or_dash(self.partner.as_deref()),
        ]
    }

    async fn fetch(api: &HttpClient, query: ListQuery) -> ApiResult<Page<Self>> {
        api.detections(query).await
    }
}

impl AdminRow for FeedbackLog {
    const RESOURCE: AdminResource = AdminResource::Feedback;

    fn headers() -> &'static [&'static str] {
        &["เวลา", "รหัสคำขอ", "ผลถูกต้อง", "ความคิดเห็น"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { self.created_at.clone() } },
            html! { <code>{ &self.request_id }</code> },
            if self.is_correct {
                html! { <i class="fa-solid fa-thumbs-up feedback-up"></i> }
            } else {
                html! { <i class="fa-solid fa-thumbs-down feedback-down"></i> }
            },
            or_dash(self.comment.as_deref()),
        ]
    }

    async fn fetch(api: &HttpClient, query: ListQuery) -> ApiResult<Page<Self>> {
        api.feedback_logs(query).await
    }
}

impl AdminRow for PartnerStats {
    const RESOURCE: AdminResource = AdminResource::Partners;

    fn headers() -> &'static [&'static str] {
        &["พาร์ทเนอร์", "คำขอทั้งหมด", "พบมิจฉาชีพ", "ใช้งานล่าสุด"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { <>{ &self.name }<small class="cell-id">{ &self.partner_id }</small></> },
            html! { { self.total_requests.to_string() } },
            html! { { self.scam_detected.to_string() } },
            or_dash(self.last_active.as_deref()),
        ]
    }

    async fn fetch(api: &HttpClient, query: ListQuery) -> ApiResult<Page<Self>> {
        api.partners(query).await
    }
}

impl AdminRow for CategoryStats {
    const RESOURCE: AdminResource = AdminResource::Categories;

    fn headers() -> &'static [&'static str] {
        &["หมวดหมู่", "จำนวน", "ความเสี่ยงเฉลี่ย"]
    }

    fn cells(&self) -> Vec<Html> {
        vec![
            html! { { category_label(&self.category).to_string() } },
            html! { { self.count.to_string() } },
            risk_badge(self.avg_risk_score),
        ]
    }

    async fn fetch(api: &HttpClient, query: ListQuery) -> ApiResult<Page<Self>> {
        api.categories(query).await
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminListPageProps {
    pub resource: AdminResource,
}

#[function_component(AdminListPage)]
pub fn admin_list_page(props: &AdminListPageProps) -> Html {
    match props.resource {
        AdminResource::Detections => html! { <AdminTable<DetectionLog> /> },
        AdminResource::Feedback => html! { <AdminTable<FeedbackLog> /> },
        AdminResource::Partners => html! { <AdminTable<PartnerStats> /> },
        AdminResource::Categories => html! { <AdminTable<CategoryStats> /> },
    }
}

/// Paged table over one admin resource. Page changes bump the list's
/// generation so an older page arriving late is dropped.
#[function_component(AdminTable)]
pub fn admin_table<T: AdminRow>() -> Html {
    let resource = T::RESOURCE;
    use_title(resource.title().to_string());
    let api = use_api();
    let session = use_session();
    let navigator = use_navigator();
    let toaster = use_toaster();
    let list = use_mut_ref(|| AdminList::<T>::new(Pagination::new(DEFAULT_PAGE_SIZE)));
    let redraw = use_force_update();

    let load = {
        let list = list.clone();
        let redraw = redraw.clone();
        Callback::from(move |page: u32| {
            if !session.is_authenticated() {
                return;
            }
            let (generation, query) = list.borrow_mut().request(page);
            log::debug!("Loading {} page {}", resource, query.page);
            redraw.force_update();

            let api = api.clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let toaster = toaster.clone();
            let list = list.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                let result = T::fetch(&api, query).await;
                let update = list.borrow_mut().apply(generation, result);
                match update {
                    ListUpdate::Stale => return,
                    ListUpdate::Updated => {}
                    ListUpdate::SessionExpired => {
                        expire_on_forbidden(
                            &ApiError::Forbidden,
                            &session,
                            navigator.as_ref(),
                            toaster.as_ref(),
                        );
                    }
                    ListUpdate::Failed(message) => {
                        if let Some(toaster) = &toaster {
                            toaster.show(Toast::error(message));
                        }
                    }
                }
                redraw.force_update();
            });
        })
    };

    {
        let load = load.clone();
        use_effect_with(resource, move |_| {
            load.emit(1);
            || ()
        });
    }

    let state = list.borrow();
    let headers = T::headers();
    let body = if state.is_loading() {
        render_skeleton_rows(state.pagination().page_size.min(8) as usize, headers.len())
    } else if state.items().is_empty() {
        html! {
            <tr><td class="empty-state" colspan={headers.len().to_string()}>{"ไม่มีข้อมูล"}</td></tr>
        }
    } else {
        html! {
            { for state.items().iter().enumerate().map(|(row, item)| html! {
                <tr key={row.to_string()}>
                    { for item.cells().into_iter().map(|cell| html! { <td>{ cell }</td> }) }
                </tr>
            })}
        }
    };

    html! {
        <AdminShell title={resource.title()}>
            { render_error_message(state.error()) }
            <div class="table-wrapper">
                <table class="admin-table">
                    <thead>
                        <tr>{ for headers.iter().map(|header| html! { <th>{ *header }</th> }) }</tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
            <Pager
                pagination={*state.pagination()}
                on_change={load}
                disabled={state.is_loading()}
            />
        </AdminShell>
    }
}
