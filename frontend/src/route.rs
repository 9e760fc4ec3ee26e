use crate::pages::admin::{AdminDashboard, AdminListPage, AdminLogin};
use crate::pages::{
    AboutPage, BatchPage, BlogIndex, BlogPostPage, CheckPage, HomePage, NotFound, ReportPage,
    WikiEntryPage, WikiPage,
};
use shared::admin::AdminResource;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/check")]
    Check,
    #[at("/batch")]
    Batch,
    #[at("/report")]
    Report,
    #[at("/blog")]
    Blog,
    #[at("/blog/:slug")]
    BlogPost { slug: String },
    #[at("/wiki")]
    Wiki,
    #[at("/wiki/:slug")]
    WikiEntry { slug: String },
    #[at("/about")]
    About,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin")]
    AdminDashboard,
    #[at("/admin/detections")]
    AdminDetections,
    #[at("/admin/feedback")]
    AdminFeedback,
    #[at("/admin/partners")]
    AdminPartners,
    #[at("/admin/categories")]
    AdminCategories,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Route::AdminLogin
                | Route::AdminDashboard
                | Route::AdminDetections
                | Route::AdminFeedback
                | Route::AdminPartners
                | Route::AdminCategories
        )
    }

    pub fn for_resource(resource: AdminResource) -> Self {
        match resource {
            AdminResource::Detections => Route::AdminDetections,
            AdminResource::Feedback => Route::AdminFeedback,
            AdminResource::Partners => Route::AdminPartners,
            AdminResource::Categories => Route::AdminCategories,
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Check => html! { <CheckPage /> },
        Route::Batch => html! { <BatchPage /> },
        Route::Report => html! { <ReportPage /> },
        Route::Blog => html! { <BlogIndex /> },
        Route::BlogPost { slug } => html! { <BlogPostPage {slug} /> },
        Route::Wiki => html! { <WikiPage /> },
        Route::WikiEntry { slug } => html! { <WikiEntryPage {slug} /> },
        Route::About => html! { <AboutPage /> },
        Route::AdminLogin => html! { <AdminLogin /> },
        Route::AdminDashboard => html! { <AdminDashboard /> },
        Route::AdminDetections => {
            html! { <AdminListPage resource={AdminResource::Detections} /> }
        }
        Route::AdminFeedback => html! { <AdminListPage resource={AdminResource::Feedback} /> },
        Route::AdminPartners => html! { <AdminListPage resource={AdminResource::Partners} /> },
        Route::AdminCategories => {
            html! { <AdminListPage resource={AdminResource::Categories} /> }
        }
        Route::NotFound => html! { <NotFound /> },
    }
}
