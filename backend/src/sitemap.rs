use chrono::NaiveDate;
use shared::content::sitemap_paths;

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Sitemap of every public page under `app_url`. Admin pages never appear.
pub fn build_sitemap(app_url: &str, last_modified: NaiveDate) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    let lastmod = last_modified.format("%Y-%m-%d");

    for (path, change_freq, priority) in sitemap_paths() {
        let loc = escape_xml(&format!("{}{}", app_url, path));
        xml.push_str(&format!(
            "  <url>\n    <loc>{loc}</loc>\n    <lastmod>{lastmod}</lastmod>\n    \
             <changefreq>{change_freq}</changefreq>\n    <priority>{priority:.1}</priority>\n  </url>\n"
        ));
    }

    xml.push_str("</urlset>\n");
    xml
}

pub fn build_robots(app_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /admin\nDisallow: /api/\n\nSitemap: {}/sitemap.xml\n",
        app_url
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sitemap_lists_public_pages_and_posts() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 2).unwrap();
        let xml = build_sitemap("https://example.test", date);

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://example.test/</loc>"));
        assert!(xml.contains("<loc>https://example.test/blog/fake-bank-slip</loc>"));
        assert!(xml.contains("<lastmod>2024-05-02</lastmod>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(!xml.contains("/admin"));
        assert_eq!(xml.matches("<url>").count(), sitemap_paths().len());
    }

    #[test]
    fn sitemap_escapes_origin() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let xml = build_sitemap("https://example.test/?a=1&b=2", date);
        assert!(xml.contains("a=1&amp;b=2"));
    }

    #[test]
    fn every_entry_is_closed() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let xml = build_sitemap("https://example.test", date);
        assert_eq!(xml.matches("</url>").count(), sitemap_paths().len());
        assert!(xml.ends_with("  </url>\n</urlset>\n"));
    }

    #[test]
    fn robots_blocks_admin_and_points_at_sitemap() {
        let robots = build_robots("https://example.test");
        assert!(robots.contains("Disallow: /admin"));
        assert!(robots.ends_with("Sitemap: https://example.test/sitemap.xml\n"));
    }
}
