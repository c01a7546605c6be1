//! Document root access
//!
//! This module maps request targets to files on disk and answers the
//! existence and size queries the HTTP layer needs.

pub mod resolver;

pub use resolver::{FileResolver, ResolvedFile};
