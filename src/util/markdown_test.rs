use super::*;

#[test]
fn headings_and_emphasis_render() {
    let html = render_markdown_html("### Introduction\nShare the **warm-up** prompt.");
    assert!(html.contains("<h3>Introduction</h3>"));
    assert!(html.contains("<strong>warm-up</strong>"));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("Hello <script>alert(1)</script> world");
    assert!(!html.contains("<script>"));
    assert!(html.contains("Hello"));
}

#[test]
fn lists_render() {
    let html = render_markdown_html("- one\n- two\n");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn script_links_are_neutralized() {
    let html = render_markdown_html("[click](javascript:alert(document.domain))");
    assert!(!html.contains("javascript:"));
    assert!(html.contains(r##"<a href="#">click</a>"##));
}

#[test]
fn script_autolinks_and_images_are_neutralized() {
    let html = render_markdown_html("<javascript:alert(1)> ![x](data:text/html;base64,PHNjcmlwdD4=)");
    assert!(!html.contains(r#"href="javascript:"#));
    assert!(!html.contains(r#"src="data:"#));
    assert!(html.contains(r##"href="#""##));
    assert!(html.contains(r##"src="#""##));
}

#[test]
fn web_and_relative_links_are_kept() {
    let html = render_markdown_html("[a](https://example.com/a) [b](/lessons/l-1) [c](mailto:t@example.com)");
    assert!(html.contains(r#"href="https://example.com/a""#));
    assert!(html.contains(r#"href="/lessons/l-1""#));
    assert!(html.contains(r#"href="mailto:t@example.com""#));
}

#[test]
fn url_scheme_check() {
    assert!(is_allowed_url("HTTPS://example.com"));
    assert!(is_allowed_url("notes.md#part-2"));
    assert!(is_allowed_url("/path?q=a:b"));
    assert!(!is_allowed_url(" JavaScript:alert(1)"));
    assert!(!is_allowed_url("vbscript:msgbox"));
    assert!(!is_allowed_url("java\tscript:alert(1)"));
}
