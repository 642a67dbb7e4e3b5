//! multiver library
//!
//! A "winver" analogue for Unix-like desktops. Resolves the host's OS
//! identity (family, version, build, user) once at startup and locates a
//! matching branding banner in a static asset tree.
//!
//! # Usage
//!
//! ```rust,ignore
//! use multiver::{resolve, BannerLocator, HostProbe};
//!
//! let record = resolve(&HostProbe)?;
//! let banner = BannerLocator::new("/opt/multiver").locate(&record)?;
//! println!("{} -> {}", record, banner.path.display());
//! ```

pub mod banner;
pub mod identity;
pub mod types;

// Re-export the pipeline entry points
pub use banner::BannerLocator;
pub use identity::{resolve, HostProbe, PlatformProbe};

// Re-export record and error types for direct API usage
pub use types::{
    BannerError, BannerResult, BannerSelection, IdentityRecord, OsFamily, ResolveError,
    ResolveResult,
};
