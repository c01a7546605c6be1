use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::http::mime;

/// A request target resolved against the document root.
///
/// Existence and size are captured at resolution time. The file itself is
/// opened separately, so an open failure can be told apart from a missing
/// file.
#[derive(Debug)]
pub struct ResolvedFile {
    /// Path of the file on disk
    pub path: PathBuf,
    /// Byte length at resolution time
    pub len: u64,
    /// MIME type derived from the path's extension
    pub content_type: &'static str,
}

/// Maps request targets to files under a document root.
#[derive(Debug, Clone)]
pub struct FileResolver {
    root: PathBuf,
}

impl FileResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolves a target to an existing file under the root.
    ///
    /// The target is appended to the root as a raw suffix. It is not
    /// canonicalized or contained, so `..` segments are handed to the
    /// filesystem as-is. A target of `/` serves `/index.html`.
    ///
    /// Returns the metadata query's error if the path does not exist or is
    /// not accessible.
    pub fn resolve(&self, target: &str) -> io::Result<ResolvedFile> {
        let path = self.target_path(target);
        let metadata = fs::metadata(&path)?;

        Ok(ResolvedFile {
            content_type: mime::content_type(&path),
            len: metadata.len(),
            path,
        })
    }

    fn target_path(&self, target: &str) -> PathBuf {
        let target = if target == "/" { "/index.html" } else { target };

        // Raw concatenation: the target begins with `/`, and joining an
        // absolute path would replace the root instead of extending it.
        let mut path = OsString::from(self.root.as_os_str());
        path.push(target);
        PathBuf::from(path)
    }
}
