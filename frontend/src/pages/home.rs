use crate::components::stats_ticker::PublicStatsTicker;
use crate::components::utils::use_title;
use crate::route::Route;
use shared::content::POSTS;
use yew::prelude::*;
use yew_router::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "fa-solid fa-comment-sms",
        "ตรวจข้อความและลิงก์",
        "วิเคราะห์ SMS แชท และลิงก์ย่อว่ามีรูปแบบของมิจฉาชีพหรือไม่",
    ),
    (
        "fa-solid fa-receipt",
        "ตรวจสลิปโอนเงิน",
        "ตรวจความน่าเชื่อถือของสลิปและร่องรอยการตัดต่อภาพ",
    ),
    (
        "fa-solid fa-images",
        "ตรวจหลายรูปพร้อมกัน",
        "อัปโหลดได้สูงสุด 10 รูปต่อครั้ง เหมาะกับร้านค้าออนไลน์",
    ),
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_title("ตรวจสอบก่อนโอน".to_string());

    html! {
        <>
            <section class="hero">
                <h1>{"ไม่แน่ใจ? ตรวจสอบก่อนโอน"}</h1>
                <p class="subtitle">
                    {"ระบบ AI ช่วยตรวจข้อความ ลิงก์ และสลิปโอนเงินที่น่าสงสัย ฟรี ภายในไม่กี่วินาที"}
                </p>
                <div class="hero-actions">
                    <Link<Route> to={Route::Check} classes="analyze-btn">
                        <i class="fa-solid fa-magnifying-glass"></i>{" เริ่มตรวจสอบ"}
                    </Link<Route>>
                    <Link<Route> to={Route::Report} classes="analyze-btn secondary">
                        <i class="fa-solid fa-flag"></i>{" แจ้งเบาะแส"}
                    </Link<Route>>
                </div>
            </section>
            <PublicStatsTicker />
            <section class="features">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="feature-card">
                        <i class={*icon}></i>
                        <h3>{ *title }</h3>
                        <p>{ *text }</p>
                    </div>
                })}
            </section>
            <section class="latest-posts">
                <h2>{"บทความล่าสุด"}</h2>
                <div class="blog-grid">
                    { for POSTS.iter().take(3).map(|post| html! {
                        <Link<Route> to={Route::BlogPost { slug: post.slug.to_string() }} classes="blog-card">
                            <span class="blog-tag">{ post.tag }</span>
                            <h3 class="blog-title">{ post.title }</h3>
                            <p class="blog-subtitle">{ post.summary }</p>
                        </Link<Route>>
                    })}
                </div>
            </section>
        </>
    }
}
