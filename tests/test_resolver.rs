use std::fs;
use std::path::PathBuf;

use staticd::files::resolver::FileResolver;

fn temp_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("staticd-resolver-{name}-{}", std::process::id()));
    fs::create_dir_all(&root).unwrap();
    root
}

#[test]
fn test_resolves_existing_file() {
    let root = temp_root("exists");
    fs::write(root.join("page.html"), "<p>hi</p>").unwrap();

    let resolver = FileResolver::new(&root);
    let file = resolver.resolve("/page.html").unwrap();

    assert_eq!(file.len, 9);
    assert_eq!(file.content_type, "text/html");
    assert!(file.path.starts_with(&root));
    assert!(file.path.ends_with("page.html"));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_root_target_serves_index() {
    let root = temp_root("index");
    fs::write(root.join("index.html"), "<h1>home</h1>").unwrap();

    let resolver = FileResolver::new(&root);
    let file = resolver.resolve("/").unwrap();

    assert_eq!(file.content_type, "text/html");
    assert!(file.path.ends_with("index.html"));

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_nested_target_resolves() {
    let root = temp_root("nested");
    fs::create_dir_all(root.join("assets")).unwrap();
    fs::write(root.join("assets/app.js"), "console.log(1);").unwrap();

    let resolver = FileResolver::new(&root);
    let file = resolver.resolve("/assets/app.js").unwrap();

    assert_eq!(file.content_type, "text/javascript");
    assert_eq!(file.len, 15);

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let root = temp_root("missing");

    let resolver = FileResolver::new(&root);

    assert!(resolver.resolve("/nope.html").is_err());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_target_is_appended_without_normalization() {
    let root = temp_root("dotdot");
    let sub = root.join("sub");
    fs::create_dir_all(&sub).unwrap();
    fs::write(root.join("secret.txt"), "s").unwrap();

    // Targets are raw suffixes, so `..` segments reach the filesystem.
    let resolver = FileResolver::new(&sub);
    let file = resolver.resolve("/../secret.txt").unwrap();

    assert_eq!(file.len, 1);

    fs::remove_dir_all(&root).unwrap();
}
