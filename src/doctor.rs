// src/doctor.rs
//! Engine diagnostic for operators
//!
//! Never invoked by the rendering path; `cvpress-doctor` runs this to tell
//! an operator whether PDF generation can work on this host and how to
//! install the preferred engine if not.

use std::process::Command;

use crate::engines::discover_engines;

/// Version line of a reachable tectonic, or None when it is absent or not
/// runnable.
pub fn tectonic_version() -> Option<String> {
    let output = Command::new("tectonic").arg("--version").output().ok()?;
    if output.status.success() {
        Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
    } else {
        None
    }
}

#[cfg(windows)]
fn print_install_guidance() {
    println!("Install Tectonic manually:");
    println!("  1. Download from: https://github.com/tectonic-typesetting/tectonic/releases");
    println!("  2. Or use: winget install tectonic");
    println!("  3. Or use Chocolatey: choco install tectonic");
}

#[cfg(target_os = "macos")]
fn print_install_guidance() {
    println!("Install Tectonic:");
    println!("  brew install tectonic");
    println!("  Or visit: https://tectonic-typesetting.github.io/");
}

#[cfg(not(any(windows, target_os = "macos")))]
fn print_install_guidance() {
    println!("Install Tectonic:");
    println!("  cargo install tectonic");
    println!("  Or install from GitHub releases / your distribution packages");
    println!("  Or visit: https://tectonic-typesetting.github.io/");
}

/// Run the full check. Returns true when at least one engine is usable.
pub fn run() -> bool {
    match tectonic_version() {
        Some(version) => println!("Tectonic is installed: {}", version),
        None => {
            println!("Tectonic is not installed");
            print_install_guidance();
        }
    }

    let candidates = discover_engines();
    if candidates.is_empty() {
        println!("No usable typesetting engine found; PDF generation will fail on this host.");
        return false;
    }

    println!("Engines in fallback order:");
    for candidate in &candidates {
        println!("  {} ({})", candidate.label, candidate.program.display());
    }
    true
}
