use std::fs;
use std::path::Path;

use mdsite_engine::{SiteConfig, SiteError, site::Site};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css" rel="stylesheet"></head><body>{{ Content }}</body></html>"#;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> (TempDir, SiteConfig) {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, "template.html", TEMPLATE);
    write(root, "content/index.md", "# Home\n\nWelcome to [the blog](/blog/post).");
    write(root, "content/blog/post.md", "# A Post\n\n![pic](/images/pic.png)");
    write(root, "static/index.css", "body { margin: 0; }");
    write(root, "static/images/pic.png", "png");
    write(root, "docs/stale.html", "old");

    let config = SiteConfig {
        content_dir: root.join("content"),
        template_path: root.join("template.html"),
        output_dir: root.join("docs"),
        static_dir: Some(root.join("static")),
        basepath: "/".to_string(),
    };
    (dir, config)
}

#[test]
fn build_writes_pages_and_assets() {
    let (dir, config) = project();
    let docs = dir.path().join("docs");

    let report = Site::new(&config).build().unwrap();

    assert_eq!(
        report.pages,
        vec![docs.join("blog/post.html"), docs.join("index.html")]
    );
    assert_eq!(report.assets.len(), 2);
    assert!(!docs.join("stale.html").exists());
    assert_eq!(
        fs::read_to_string(docs.join("index.css")).unwrap(),
        "body { margin: 0; }"
    );

    let index = fs::read_to_string(docs.join("index.html")).unwrap();
    assert_eq!(
        index,
        r#"<html><head><title>Home</title><link href="/index.css" rel="stylesheet"></head><body><div><h1>Home</h1><p>Welcome to <a href="/blog/post">the blog</a>.</p></div></body></html>"#
    );
}

#[test]
fn build_rewrites_basepath() {
    let (dir, mut config) = project();
    config.basepath = "/repo/".to_string();

    Site::new(&config).build().unwrap();

    let post = fs::read_to_string(dir.path().join("docs/blog/post.html")).unwrap();
    assert!(post.contains(r#"<img src="/repo/images/pic.png" alt="pic"/>"#));
    assert!(post.contains(r#"<link href="/repo/index.css""#));
}

#[test]
fn build_without_static_dir() {
    let (dir, mut config) = project();
    config.static_dir = Some(dir.path().join("missing"));

    let report = Site::new(&config).build().unwrap();

    assert!(report.assets.is_empty());
    assert_eq!(report.pages.len(), 2);
}

#[test]
fn page_without_title_aborts_build() {
    let (dir, config) = project();
    write(dir.path(), "content/untitled.md", "just text");

    let err = Site::new(&config).build().unwrap_err();

    assert!(matches!(err, SiteError::Page { .. }));
    assert!(err.to_string().contains("untitled.md"));
}
