use std::path::Path;

/// Maps a file path to the MIME type of its extension.
///
/// The lookup is case-sensitive and considers only the suffix after the
/// final `.` of the file name. Unknown and missing extensions fall back to
/// `text/plain`, so every path gets a usable content type.
///
/// # Example
///
/// ```
/// # use staticd::http::mime::content_type;
/// # use std::path::Path;
/// assert_eq!(content_type(Path::new("index.html")), "text/html");
/// assert_eq!(content_type(Path::new("README")), "text/plain");
/// ```
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        _ => "text/plain",
    }
}
