//! multiver binary
//!
//! Presentation orchestrator: resolves the host identity, locates the banner,
//! and renders both as text. Resolution happens once, before anything is
//! shown; unsupported hosts exit with a message instead of a window.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use multiver::{identity, BannerError, BannerLocator, HostProbe, IdentityRecord, ResolveError};

/// Exit code for the deliberate Windows redirect
const EXIT_REDIRECT: i32 = 2;

fn main() {
    if let Err(err) = init_tracing() {
        eprintln!("multiver: failed to initialize logging: {}", err);
        process::exit(1);
    }

    let record = match identity::resolve(&HostProbe) {
        Ok(record) => record,
        Err(err @ ResolveError::WindowsRedirect) => {
            eprintln!("{}", err);
            process::exit(EXIT_REDIRECT);
        }
        Err(err) => {
            eprintln!("multiver: {}", err);
            process::exit(1);
        }
    };

    if let Err(err) = render(&record) {
        eprintln!("multiver: {:#}", err);
        process::exit(1);
    }
}

/// Logging to stderr so rendered output stays clean on stdout
fn init_tracing() -> anyhow::Result<()> {
    let filter = EnvFilter::from_default_env().add_directive("multiver=info".parse()?);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn render(record: &IdentityRecord) -> anyhow::Result<()> {
    let locator = BannerLocator::new(asset_root()?);

    match locator.locate(record) {
        Ok(selection) => {
            if selection.is_fallback {
                info!(path = %selection.path.display(), "no specific banner, showing default");
            }
            println!("[banner: {}]", selection.path.display());
            println!();
            println!("{}", record);
        }
        // Recoverable here only: substitute a text header for the image.
        Err(err @ BannerError::AssetTreeCorrupt(_)) => {
            warn!(%err, "banner tree unusable, rendering text-only header");
            println!("=== {} ===", record);
        }
        Err(err) => return Err(err.into()),
    }

    println!();
    println!("Copyright to respective owners above. All rights reserved.");
    println!();
    println!(
        "The {} operating system may come with a warranty or it may not. \
         Just depends on what it is.",
        record.display_name
    );
    println!();
    println!(
        "This product, be it: the combination of software, hardware, and \
         customizations are from the proud owner of this computer:"
    );
    println!("    {}", record.username);

    Ok(())
}

/// Asset root: the directory holding the executable, which ships `banner/`
fn asset_root() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("could not locate the running executable")?;
    Ok(exe
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(".")))
}
