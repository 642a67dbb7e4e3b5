//! Host identity resolution
//!
//! Classifies the host into an [`OsFamily`] and builds the immutable
//! [`IdentityRecord`] the rest of the program consumes. Platform queries go
//! through the [`PlatformProbe`] trait so resolution is deterministic under
//! test; [`HostProbe`] is the production implementation backed by `sysinfo`.

use sysinfo::System;
use tracing::{debug, info};

use crate::types::{IdentityRecord, OsFamily, ResolveError, ResolveResult};

/// Read-only view of the ambient host platform
///
/// Every method is a pure query; `None` means the host did not provide the
/// value, which the resolver surfaces as a [`ResolveError::QueryFailure`]
/// when the value is required for the detected family.
pub trait PlatformProbe {
    /// OS family classification of the host
    fn family(&self) -> OsFamily;
    /// Raw platform token (e.g. "macos", "freebsd"), used in diagnostics
    fn os_token(&self) -> String;
    /// Dotted product version of the OS (macOS: e.g. "14.5")
    fn os_version(&self) -> Option<String>;
    /// Kernel release string (macOS: e.g. "23.5.0")
    fn kernel_version(&self) -> Option<String>;
    /// Distribution display name (Linux)
    fn distro_name(&self) -> Option<String>;
    /// Distribution release version (Linux); empty or absent on rolling distros
    fn distro_version(&self) -> Option<String>;
    /// Canonical machine-readable distribution id (Linux, e.g. "ubuntu")
    fn distro_id(&self) -> Option<String>;
    /// Account name of the invoking user
    fn username(&self) -> Option<String>;
}

/// Production probe backed by `sysinfo` and process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct HostProbe;

impl PlatformProbe for HostProbe {
    fn family(&self) -> OsFamily {
        match std::env::consts::OS {
            "macos" => OsFamily::MacOs,
            "linux" => OsFamily::Linux,
            "windows" => OsFamily::Windows,
            _ => OsFamily::Unknown,
        }
    }

    fn os_token(&self) -> String {
        std::env::consts::OS.to_string()
    }

    fn os_version(&self) -> Option<String> {
        System::os_version()
    }

    fn kernel_version(&self) -> Option<String> {
        System::kernel_version()
    }

    fn distro_name(&self) -> Option<String> {
        System::name()
    }

    fn distro_version(&self) -> Option<String> {
        System::os_version()
    }

    fn distro_id(&self) -> Option<String> {
        let id = System::distribution_id();
        if id.is_empty() {
            None
        } else {
            Some(id)
        }
    }

    fn username(&self) -> Option<String> {
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
    }
}

/// Resolve the current host into an [`IdentityRecord`], or fail explicitly
///
/// Windows hosts get a deliberate [`ResolveError::WindowsRedirect`]; any
/// family outside {macOS, Linux, Windows} is
/// [`ResolveError::UnsupportedPlatform`]. Missing metadata on a supported
/// family is a [`ResolveError::QueryFailure`], never silently defaulted.
pub fn resolve(probe: &dyn PlatformProbe) -> ResolveResult<IdentityRecord> {
    let username = probe
        .username()
        .ok_or_else(|| ResolveError::QueryFailure("invoking user's account name".to_string()))?;

    match probe.family() {
        OsFamily::MacOs => {
            let version = probe
                .os_version()
                .ok_or_else(|| ResolveError::QueryFailure("macOS product version".to_string()))?;
            // Kernel release is a separate version namespace from the product
            // version and is reported as the build number.
            let build = probe
                .kernel_version()
                .ok_or_else(|| ResolveError::QueryFailure("kernel release string".to_string()))?;
            debug!(version = %version, build = %build, "resolved macOS host");
            Ok(IdentityRecord {
                family: OsFamily::MacOs,
                display_name: "macOS".to_string(),
                version,
                build: Some(build),
                distro_id: None,
                username,
            })
        }
        OsFamily::Linux => {
            let display_name = probe
                .distro_name()
                .ok_or_else(|| ResolveError::QueryFailure("distribution name".to_string()))?;
            let distro_id = probe
                .distro_id()
                .ok_or_else(|| ResolveError::QueryFailure("distribution id".to_string()))?;
            // Rolling-release distros report no version attribute.
            let version = probe
                .distro_version()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "rolling".to_string());
            debug!(distro = %display_name, version = %version, "resolved Linux host");
            Ok(IdentityRecord {
                family: OsFamily::Linux,
                display_name,
                version,
                build: None,
                distro_id: Some(distro_id),
                username,
            })
        }
        OsFamily::Windows => {
            info!("Windows detected - this program is meant for Unix-like systems");
            Err(ResolveError::WindowsRedirect)
        }
        OsFamily::Unknown => Err(ResolveError::UnsupportedPlatform(probe.os_token())),
    }
}
