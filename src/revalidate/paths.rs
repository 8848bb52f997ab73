//! Which rendered pages each content collection feeds.
//!
//! Listing pages are refreshed on every write to their collection; entities
//! with detail pages get those added per slug. Media uploads feed no page
//! directly (assets are referenced by URL), so they have no entry here.

pub const BLOG: &[&str] = &["/", "/blog"];
pub const PROJECTS: &[&str] = &["/", "/work"];
pub const SERVICES: &[&str] = &["/", "/services"];
pub const TEAM: &[&str] = &["/about"];
pub const TESTIMONIALS: &[&str] = &["/", "/about"];
pub const SOCIAL: &[&str] = &["/social"];
pub const FAQS: &[&str] = &["/faq"];
pub const AWARDS: &[&str] = &["/about"];
pub const TIMELINE: &[&str] = &["/about"];
pub const SKILLS: &[&str] = &["/about"];
pub const CAREERS: &[&str] = &["/careers"];
pub const SETTINGS: &[&str] = &["/"];

/// Listing pages plus the detail page for one blog post
pub fn blog_post(slug: &str) -> Vec<String> {
    with_detail(BLOG, format!("/blog/{}", slug))
}

/// Listing pages plus the detail page for one project
pub fn project(slug: &str) -> Vec<String> {
    with_detail(PROJECTS, format!("/work/{}", slug))
}

fn with_detail(base: &[&str], detail: String) -> Vec<String> {
    let mut paths: Vec<String> = base.iter().map(|p| p.to_string()).collect();
    paths.push(detail);
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_paths_extend_the_listing_set() {
        assert_eq!(
            blog_post("designing-in-the-open"),
            vec!["/", "/blog", "/blog/designing-in-the-open"]
        );
        assert_eq!(
            project("nordlys-identity"),
            vec!["/", "/work", "/work/nordlys-identity"]
        );
    }
}
