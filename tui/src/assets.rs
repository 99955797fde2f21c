//! Static Assets
//!
//! The only local asset is the optional ASCII-art banner shown on the menu
//! screen. A missing file degrades to a plain styled title; the miss is
//! logged, never raised.

use std::path::Path;

use herodex_core::AssetMissingError;

/// Load the banner art from `path`.
///
/// # Errors
///
/// Returns [`AssetMissingError`] when the file cannot be read; callers log
/// and fall back to the plain title.
pub fn load_banner(path: &Path) -> Result<String, AssetMissingError> {
    std::fs::read_to_string(path).map_err(|_| AssetMissingError {
        path: path.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_banner_is_an_asset_miss() {
        let err = load_banner(Path::new("/nonexistent/banner.txt")).unwrap_err();
        assert!(err.to_string().contains("banner.txt"));
    }
}
