//! Static site content: blog posts, category labels and the public route
//! list used for navigation and the sitemap.

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub tag: &'static str,
    pub date: &'static str,
    pub read_time: &'static str,
    pub body: &'static [&'static str],
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "fake-bank-slip",
        title: "5 วิธีสังเกตสลิปโอนเงินปลอม",
        summary: "สลิปปลอมทำได้ง่ายกว่าที่คิด ตรวจสอบตัวอักษร ยอดเงิน และเลขอ้างอิงก่อนส่งของทุกครั้ง",
        tag: "SLIP",
        date: "2024-05-02",
        read_time: "4 นาที",
        body: &[
            "มิจฉาชีพมักใช้สลิปที่ถูกแก้ไขยอดเงินหรือวันที่ เพื่อหลอกร้านค้าออนไลน์ให้ส่งสินค้า",
            "ตรวจสอบยอดเงินในแอปธนาคารของคุณเองทุกครั้ง อย่าเชื่อเพียงภาพหน้าจอ",
            "สังเกตฟอนต์ที่ไม่สม่ำเสมอ ขอบตัวอักษรที่เบลอ และเลขอ้างอิงที่ซ้ำกับรายการก่อนหน้า",
            "ใช้ระบบตรวจสอบรูปภาพของเราเพื่อวิเคราะห์ร่องรอยการตัดต่อ",
        ],
    },
    BlogPost {
        slug: "call-center-gang",
        title: "แก๊งคอลเซ็นเตอร์ อ้างเป็นเจ้าหน้าที่รัฐ",
        summary: "รูปแบบการหลอกลวงทางโทรศัพท์ที่พบบ่อยที่สุด และวิธีรับมือเมื่อถูกข่มขู่",
        tag: "CALL",
        date: "2024-04-18",
        read_time: "6 นาที",
        body: &[
            "มิจฉาชีพจะอ้างว่าเป็นตำรวจ เจ้าหน้าที่ไปรษณีย์ หรือเจ้าหน้าที่สรรพากร",
            "เจ้าหน้าที่รัฐจะไม่ขอให้คุณโอนเงินเพื่อ 'ตรวจสอบบัญชี' ไม่ว่ากรณีใด",
            "วางสายทันทีและโทรกลับไปยังหมายเลขทางการของหน่วยงานนั้น",
        ],
    },
    BlogPost {
        slug: "short-link-sms",
        title: "SMS ลิงก์สั้น: กับดักดูดเงิน",
        summary: "ทำไมลิงก์ bit.ly ใน SMS ถึงอันตราย และจะตรวจสอบปลายทางได้อย่างไร",
        tag: "SMS",
        date: "2024-03-30",
        read_time: "3 นาที",
        body: &[
            "ลิงก์สั้นซ่อนปลายทางจริง มักพาไปยังหน้าเว็บปลอมหรือไฟล์ติดตั้งแอปควบคุมเครื่อง",
            "อย่าติดตั้งแอปจากลิงก์ใน SMS และอย่ากรอกรหัส OTP ในหน้าเว็บที่ไม่รู้จัก",
            "คัดลอกข้อความมาตรวจสอบในระบบของเราก่อนกดลิงก์",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Scam categories the backend reports, with display labels.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("banking_scam", "หลอกโอนเงิน/ธนาคาร"),
    ("fake_slip", "สลิปปลอม"),
    ("call_center", "แก๊งคอลเซ็นเตอร์"),
    ("phishing_link", "ลิงก์ฟิชชิง"),
    ("investment_scam", "หลอกลงทุน"),
    ("online_shopping", "หลอกขายของออนไลน์"),
    ("job_scam", "หลอกทำงาน"),
    ("romance_scam", "หลอกให้รัก"),
    ("loan_scam", "หลอกปล่อยกู้"),
    ("other", "อื่นๆ"),
];

pub fn category_label(category: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(key, _)| *key == category)
        .map(|(_, label)| *label)
        .unwrap_or(category)
}

/// Public page routes: (path, change frequency, priority).
pub const PUBLIC_ROUTES: &[(&str, &str, f32)] = &[
    ("/", "daily", 1.0),
    ("/check", "weekly", 0.9),
    ("/batch", "weekly", 0.8),
    ("/report", "monthly", 0.7),
    ("/blog", "weekly", 0.7),
    ("/wiki", "weekly", 0.6),
    ("/about", "monthly", 0.4),
];

/// Every path that belongs in the sitemap, blog posts included.
pub fn sitemap_paths() -> Vec<(String, &'static str, f32)> {
    PUBLIC_ROUTES
        .iter()
        .map(|(path, freq, priority)| (path.to_string(), *freq, *priority))
        .chain(
            POSTS
                .iter()
                .map(|post| (format!("/blog/{}", post.slug), "monthly", 0.6)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_includes_posts_and_excludes_admin() {
        let paths = sitemap_paths();
        assert_eq!(paths.len(), PUBLIC_ROUTES.len() + POSTS.len());
        assert!(paths.iter().any(|(path, _, _)| path == "/blog/fake-bank-slip"));
        assert!(!paths.iter().any(|(path, _, _)| path.starts_with("/admin")));
    }

    #[test]
    fn unknown_category_falls_back_to_key() {
        assert_eq!(category_label("fake_slip"), "สลิปปลอม");
        assert_eq!(category_label("mystery"), "mystery");
    }

    #[test]
    fn post_lookup() {
        assert!(find_post("short-link-sms").is_some());
        assert!(find_post("nope").is_none());
    }
}
