//! Banner asset lookup
//!
//! Maps an [`IdentityRecord`] to a branding image inside a static asset tree:
//! `<root>/banner/{macOS,linux}/<key>.{png,jpg}` with `<root>/banner/default.png`
//! as the catch-all. A missing specific banner is an expected miss and falls
//! back silently; only a tree without a usable default is an error.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::types::{BannerError, BannerResult, BannerSelection, IdentityRecord, OsFamily};

/// Image extensions probed for a specific banner, in priority order
const BANNER_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Locates banner images for resolved host identities
#[derive(Debug, Clone)]
pub struct BannerLocator {
    /// Root of the banner tree (`<asset_root>/banner`)
    base: PathBuf,
}

impl BannerLocator {
    /// Create a locator rooted at `<asset_root>/banner`
    pub fn new(asset_root: impl AsRef<Path>) -> Self {
        Self {
            base: asset_root.as_ref().join("banner"),
        }
    }

    /// Find the banner for `record`, falling back to the default asset
    ///
    /// Returns [`BannerError::AssetTreeCorrupt`] only when neither a specific
    /// banner nor `default.png` exists. Adding support for a new distribution
    /// means dropping a correctly-named file into the tree, not code.
    pub fn locate(&self, record: &IdentityRecord) -> BannerResult<BannerSelection> {
        let subtree = match record.family {
            OsFamily::MacOs => self.base.join("macOS"),
            OsFamily::Linux => self.base.join("linux"),
            // The resolver rejects these families before a record exists.
            family @ (OsFamily::Windows | OsFamily::Unknown) => {
                return Err(BannerError::UnsupportedFamily(family));
            }
        };

        if let Some(key) = Self::lookup_key(record) {
            for ext in BANNER_EXTENSIONS {
                let candidate = subtree.join(format!("{}.{}", key, ext));
                if candidate.is_file() {
                    debug!(path = %candidate.display(), "found specific banner");
                    return Ok(BannerSelection {
                        path: candidate,
                        is_fallback: false,
                    });
                }
            }
            debug!(key = %key, "no specific banner, using default");
        } else {
            warn!(version = %record.version, "could not derive banner key, using default");
        }

        self.default_banner()
    }

    /// Family-specific lookup key: macOS major version or Linux distro id
    ///
    /// A macOS version whose leading dot component is not numeric yields no
    /// key; the caller treats that as an ordinary miss.
    fn lookup_key(record: &IdentityRecord) -> Option<String> {
        match record.family {
            OsFamily::MacOs => record
                .version
                .split('.')
                .next()
                .and_then(|major| major.trim().parse::<u32>().ok())
                .map(|major| major.to_string()),
            OsFamily::Linux => record.distro_id.clone(),
            OsFamily::Windows | OsFamily::Unknown => None,
        }
    }

    fn default_banner(&self) -> BannerResult<BannerSelection> {
        let default = self.base.join("default.png");
        if default.is_file() {
            Ok(BannerSelection {
                path: default,
                is_fallback: true,
            })
        } else {
            Err(BannerError::AssetTreeCorrupt(default))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn linux_record(distro_id: &str) -> IdentityRecord {
        IdentityRecord {
            family: OsFamily::Linux,
            display_name: "Test Linux".to_string(),
            version: "1.0".to_string(),
            build: None,
            distro_id: Some(distro_id.to_string()),
            username: "sam".to_string(),
        }
    }

    fn macos_record(version: &str) -> IdentityRecord {
        IdentityRecord {
            family: OsFamily::MacOs,
            display_name: "macOS".to_string(),
            version: version.to_string(),
            build: Some("23F79".to_string()),
            distro_id: None,
            username: "sam".to_string(),
        }
    }

    /// Build `<root>/banner` with the given relative files and a default
    fn asset_tree(files: &[&str], with_default: bool) -> TempDir {
        let root = TempDir::new().unwrap();
        let base = root.path().join("banner");
        for rel in files {
            let path = base.join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, b"png").unwrap();
        }
        if with_default {
            fs::create_dir_all(&base).unwrap();
            fs::write(base.join("default.png"), b"png").unwrap();
        }
        root
    }

    #[test]
    fn test_specific_linux_banner_wins() {
        let root = asset_tree(&["linux/ubuntu.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&linux_record("ubuntu"))
            .unwrap();
        assert_eq!(selection.path, root.path().join("banner/linux/ubuntu.png"));
        assert!(!selection.is_fallback);
    }

    #[test]
    fn test_png_probed_before_jpg() {
        let root = asset_tree(&["linux/ubuntu.png", "linux/ubuntu.jpg"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&linux_record("ubuntu"))
            .unwrap();
        assert!(selection.path.ends_with("ubuntu.png"));
    }

    #[test]
    fn test_jpg_used_when_no_png() {
        let root = asset_tree(&["linux/ubuntu.jpg"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&linux_record("ubuntu"))
            .unwrap();
        assert!(selection.path.ends_with("ubuntu.jpg"));
        assert!(!selection.is_fallback);
    }

    #[test]
    fn test_miss_falls_back_to_default() {
        let root = asset_tree(&["linux/ubuntu.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&linux_record("fedora"))
            .unwrap();
        assert_eq!(selection.path, root.path().join("banner/default.png"));
        assert!(selection.is_fallback);
    }

    #[test]
    fn test_missing_default_is_corrupt_tree() {
        let root = asset_tree(&["linux/ubuntu.png"], false);
        let err = BannerLocator::new(root.path())
            .locate(&linux_record("fedora"))
            .unwrap_err();
        match err {
            BannerError::AssetTreeCorrupt(path) => {
                assert_eq!(path, root.path().join("banner/default.png"));
            }
            other => panic!("expected AssetTreeCorrupt, got {:?}", other),
        }
    }

    #[test]
    fn test_macos_key_is_major_version() {
        let root = asset_tree(&["macOS/14.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&macos_record("14.5"))
            .unwrap();
        assert_eq!(selection.path, root.path().join("banner/macOS/14.png"));
        assert!(!selection.is_fallback);
    }

    #[test]
    fn test_macos_single_digit_major() {
        let root = asset_tree(&["macOS/9.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&macos_record("9"))
            .unwrap();
        assert!(selection.path.ends_with("9.png"));
    }

    #[test]
    fn test_macos_two_digit_major_not_truncated() {
        // "10.15" keys to 10, not to the first three characters of the string
        let root = asset_tree(&["macOS/10.png", "macOS/1.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&macos_record("10.15"))
            .unwrap();
        assert!(selection.path.ends_with("10.png"));
    }

    #[test]
    fn test_macos_unparseable_version_falls_back() {
        let root = asset_tree(&["macOS/14.png"], true);
        let selection = BannerLocator::new(root.path())
            .locate(&macos_record("beta.5"))
            .unwrap();
        assert!(selection.is_fallback);
    }

    #[test]
    fn test_unsupported_family_is_rejected() {
        let root = asset_tree(&[], true);
        let mut record = linux_record("ubuntu");
        record.family = OsFamily::Windows;
        assert_eq!(
            BannerLocator::new(root.path()).locate(&record),
            Err(BannerError::UnsupportedFamily(OsFamily::Windows))
        );
    }
}
