// Host-side tests for the static page content and image fallback helpers.

use std::collections::HashSet;

use site_core::{
    retry_url, BLOG_POSTS, FALLBACK_IMAGE_DATA_URL, NAV_ITEMS, PROJECTS, SECTION_IDS,
    SOCIAL_LINKS, TECH_STACK,
};

#[test]
fn nav_anchors_match_sections_in_order() {
    // The nav targets sections by id; a mismatch leaves a dead link or an
    // unreachable section.
    let anchors: Vec<&str> = NAV_ITEMS.iter().map(|n| n.anchor).collect();
    assert_eq!(anchors, SECTION_IDS);
}

#[test]
fn section_ids_are_unique() {
    let unique: HashSet<&str> = SECTION_IDS.iter().copied().collect();
    assert_eq!(unique.len(), SECTION_IDS.len());
}

#[test]
fn nav_items_are_fully_populated() {
    for item in NAV_ITEMS {
        assert!(!item.name.is_empty());
        assert!(!item.anchor.is_empty());
        assert!(!item.glyph.is_empty());
    }
}

#[test]
fn tech_tiles_reference_bundled_icons() {
    assert_eq!(TECH_STACK.len(), 8);
    for entry in TECH_STACK {
        assert!(entry.icon.starts_with("/Icons/"), "icon {}", entry.icon);
        assert!(entry.icon.ends_with(".png"));
        assert!(!entry.accent.is_empty());
    }
}

#[test]
fn projects_are_fully_described() {
    assert_eq!(PROJECTS.len(), 4);
    for project in &PROJECTS {
        assert!(!project.title.is_empty());
        assert!(!project.description.is_empty());
        assert!(project.tags.iter().all(|t| !t.is_empty()));
        assert!(project.image_url.starts_with("https://"));
        assert_eq!((project.image_width, project.image_height), (1080, 720));
    }
}

#[test]
fn project_terminal_paths_are_slugs() {
    let paths: Vec<String> = PROJECTS.iter().map(|p| p.terminal_path()).collect();
    assert_eq!(paths[0], "~/e-commerce-platform");
    assert_eq!(paths[2], "~/task-management-app");
    for path in &paths {
        assert!(!path.contains(' '));
        assert_eq!(path.to_lowercase(), *path);
    }
}

#[test]
fn blog_posts_carry_their_metadata() {
    assert_eq!(BLOG_POSTS.len(), 4);
    for post in &BLOG_POSTS {
        assert!(!post.title.is_empty());
        assert!(!post.excerpt.is_empty());
        assert!(post.date.contains("2024"));
        assert!(post.read_time.ends_with("min read"));
        assert!(!post.category.is_empty());
    }
}

#[test]
fn social_links_resolve_somewhere_real() {
    assert_eq!(SOCIAL_LINKS.len(), 3);
    for link in &SOCIAL_LINKS {
        assert!(
            link.url.starts_with("https://") || link.url.starts_with("mailto:"),
            "unexpected scheme in {}",
            link.url
        );
        assert!(!link.username.is_empty());
    }
}

#[test]
fn fallback_image_is_an_inline_svg() {
    assert!(FALLBACK_IMAGE_DATA_URL.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn retry_url_leaves_the_first_attempt_alone() {
    assert_eq!(retry_url("https://example.com/a.png", 0), "https://example.com/a.png");
}

#[test]
fn retry_url_appends_a_cache_buster() {
    assert_eq!(
        retry_url("https://example.com/a.png", 1),
        "https://example.com/a.png?retry=1"
    );
    // Sources that already carry a query string extend it instead.
    assert_eq!(
        retry_url("https://example.com/a.png?w=1080", 2),
        "https://example.com/a.png?w=1080&retry=2"
    );
}
