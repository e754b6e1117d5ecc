use super::*;

#[test]
fn nav_link_matches_own_path_and_children() {
    assert!(nav_link_active("/lessons", "/lessons"));
    assert!(nav_link_active("/lessons/l-1", "/lessons"));
    assert!(!nav_link_active("/lessonsx", "/lessons"));
    assert!(!nav_link_active("/dashboard", "/lessons"));
}

#[test]
fn nav_links_cover_signed_in_pages() {
    let hrefs: Vec<&str> = NAV_LINKS.iter().map(|(href, _)| *href).collect();
    assert_eq!(hrefs, ["/dashboard", "/lessons", "/profile"]);
}
