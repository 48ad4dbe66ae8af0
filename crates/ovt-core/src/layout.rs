//! # Specification Directory Layout
//!
//! ```text
//! <spec_dir>/
//!   specification.json          <- promoted copy
//!   specification.md            <- promoted copy
//!   <version>/
//!     specification.json        <- source document
//!     specification.header.md   <- prose prefixed to generated markdown
//!     specification.md          <- generated output
//! ```

use std::path::{Path, PathBuf};

use crate::version::BuildVersion;

/// File name of the taxonomy JSON document.
pub const SPECIFICATION_JSON: &str = "specification.json";

/// File name of the hand-written markdown header.
pub const SPECIFICATION_HEADER: &str = "specification.header.md";

/// File name of the generated markdown document.
pub const SPECIFICATION_MARKDOWN: &str = "specification.md";

/// Files copied into the specification root on promotion, in copy order.
pub const PROMOTED_FILES: [&str; 2] = [SPECIFICATION_JSON, SPECIFICATION_MARKDOWN];

/// Resolves paths under a specification root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecLayout {
    spec_dir: PathBuf,
}

impl SpecLayout {
    /// Create a layout rooted at `spec_dir`.
    pub fn new(spec_dir: impl Into<PathBuf>) -> Self {
        Self {
            spec_dir: spec_dir.into(),
        }
    }

    /// The specification root, which also holds the promoted copies.
    pub fn spec_dir(&self) -> &Path {
        &self.spec_dir
    }

    /// Directory holding the sources for `version`.
    pub fn version_dir(&self, version: &BuildVersion) -> PathBuf {
        self.spec_dir.join(version.as_str())
    }

    pub fn json_path(&self, version: &BuildVersion) -> PathBuf {
        self.version_dir(version).join(SPECIFICATION_JSON)
    }

    pub fn header_path(&self, version: &BuildVersion) -> PathBuf {
        self.version_dir(version).join(SPECIFICATION_HEADER)
    }

    pub fn markdown_path(&self, version: &BuildVersion) -> PathBuf {
        self.version_dir(version).join(SPECIFICATION_MARKDOWN)
    }

    /// Destination of a promoted file inside the specification root.
    pub fn current_path(&self, file_name: &str) -> PathBuf {
        self.spec_dir.join(file_name)
    }
}

/// Walk up from `start` to the first ancestor containing a `specification/`
/// directory and return that directory.
pub fn discover_spec_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join("specification"))
        .find(|candidate| candidate.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> BuildVersion {
        BuildVersion::new(s).unwrap()
    }

    #[test]
    fn version_paths() {
        let layout = SpecLayout::new("/repo/specification");
        let version = v("1.1");
        assert_eq!(
            layout.json_path(&version),
            PathBuf::from("/repo/specification/1.1/specification.json")
        );
        assert_eq!(
            layout.header_path(&version),
            PathBuf::from("/repo/specification/1.1/specification.header.md")
        );
        assert_eq!(
            layout.markdown_path(&version),
            PathBuf::from("/repo/specification/1.1/specification.md")
        );
    }

    #[test]
    fn current_paths_live_in_root() {
        let layout = SpecLayout::new("/repo/specification");
        assert_eq!(
            layout.current_path(SPECIFICATION_MARKDOWN),
            PathBuf::from("/repo/specification/specification.md")
        );
    }

    #[test]
    fn discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        let spec = dir.path().join("specification");
        let nested = dir.path().join("tools").join("src");
        std::fs::create_dir_all(&spec).unwrap();
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(discover_spec_dir(&nested), Some(spec));
    }

    #[test]
    fn discover_ignores_plain_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("specification"), b"not a dir").unwrap();
        let found = discover_spec_dir(dir.path());
        assert_ne!(found, Some(dir.path().join("specification")));
    }
}
