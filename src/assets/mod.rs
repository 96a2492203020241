//! Asset manifest and browser image loading
//!
//! The fixed resource list lives in `assets/manifest.json`, embedded into
//! the binary. Image handles are keyed by the file stem of their path, so
//! `assets/img/toy_teddy.png` is looked up as `"toy_teddy"`.

pub mod manifest;
#[cfg(target_arch = "wasm32")]
pub mod registry;

pub use manifest::AssetManifest;
#[cfg(target_arch = "wasm32")]
pub use registry::{ImageRegistry, load_all};

/// Derive the registry key for a resource path: strip directories and the
/// final extension.
pub fn asset_key(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_key_strips_dir_and_extension() {
        assert_eq!(asset_key("assets/img/toy_teddy.png"), "toy_teddy");
        assert_eq!(asset_key("plaza_bg.png"), "plaza_bg");
        assert_eq!(asset_key("assets/audio/festival_theme.mp3"), "festival_theme");
    }

    #[test]
    fn test_asset_key_edge_shapes() {
        assert_eq!(asset_key("noext"), "noext");
        assert_eq!(asset_key("dir/noext"), "noext");
        // Dotfiles keep their name rather than mapping to ""
        assert_eq!(asset_key(".hidden"), ".hidden");
        assert_eq!(asset_key("a/b/name.tar.gz"), "name.tar");
    }
}
