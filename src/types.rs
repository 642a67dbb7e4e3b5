//! Type definitions for multiver

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Type alias for identity resolution results
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Type alias for banner lookup results
pub type BannerResult<T> = Result<T, BannerError>;

// ============================================================================
// Record Types
// ============================================================================

/// Top-level OS category of the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsFamily {
    MacOs,
    Linux,
    Windows,
    Unknown,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::MacOs => write!(f, "macOS"),
            OsFamily::Linux => write!(f, "Linux"),
            OsFamily::Windows => write!(f, "Windows"),
            OsFamily::Unknown => write!(f, "unknown"),
        }
    }
}

/// Resolved identity of the current host
///
/// Constructed exactly once at startup by [`crate::identity::resolve`] and
/// immutable afterward. `family` is always `MacOs` or `Linux` here; Windows
/// and unknown hosts fail resolution instead of producing a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    /// OS family the host was classified as
    pub family: OsFamily,
    /// Human-readable OS or distribution name (e.g. "macOS", "Ubuntu 24.04 LTS")
    pub display_name: String,
    /// Product/release version. macOS: dotted product version (e.g. "14.5").
    /// Linux: distribution version, or "rolling" when the distro reports none.
    pub version: String,
    /// Kernel release string; populated for macOS only, where it is a separate
    /// version namespace from the product version
    pub build: Option<String>,
    /// Canonical machine-readable distribution id (e.g. "ubuntu"); Linux only
    pub distro_id: Option<String>,
    /// Account name of the invoking user
    pub username: String,
}

impl fmt::Display for IdentityRecord {
    /// One-line summary: `"<name> <version>"`, with ` (Build <build>)`
    /// appended when a build number is present.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.display_name, self.version)?;
        if let Some(build) = &self.build {
            write!(f, " (Build {})", build)?;
        }
        Ok(())
    }
}

/// Outcome of a banner lookup
///
/// `path` refers to a file that existed at lookup time; the locator verifies
/// existence before returning, never after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSelection {
    /// Path to the image file to display
    pub path: PathBuf,
    /// True when no OS/version-specific asset existed and `default.png` was
    /// substituted
    pub is_fallback: bool,
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors from identity resolution
///
/// A closed set so callers branch on kind rather than matching message text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Windows hosts are deliberately redirected to the built-in tool
    #[error("this program is meant for Unix-like systems; please use winver.exe instead")]
    WindowsRedirect,

    /// Host OS is none of macOS, Linux, or Windows
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    /// A supported OS provided malformed or unreadable metadata
    #[error("failed to query platform metadata: {0}")]
    QueryFailure(String),
}

/// Errors from banner lookup
///
/// An ordinary miss is not an error; the locator falls back to the default
/// banner silently. Only a tree with no usable default is reported.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BannerError {
    /// Neither a specific banner nor `default.png` exists under the asset root
    #[error("asset tree corrupt: default banner not found at {}", .0.display())]
    AssetTreeCorrupt(PathBuf),

    /// The record's family has no banner subtree (unreachable for records
    /// produced by the resolver, which rejects these families upstream)
    #[error("no banner subtree for OS family: {0}")]
    UnsupportedFamily(OsFamily),
}
