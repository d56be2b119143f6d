// src/engines.rs
//! External engine discovery
//!
//! Discovery is an ordered list of capability probes, each yielding zero or
//! one invocable candidate. The probe order fixes the fallback priority:
//! tectonic on the search path, then pdflatex on the search path, then
//! pdflatex at the platform's well-known install location. Probing only
//! checks that the executable exists; nothing is launched.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Fixed name of the markup file written into the scoped temp directory.
pub const MARKUP_FILE: &str = "resume.tex";
/// Artifact every engine is expected to produce next to the markup file.
pub const ARTIFACT_FILE: &str = "resume.pdf";

#[cfg(target_os = "macos")]
const WELL_KNOWN_PDFLATEX: &str = "/Library/TeX/texbin/pdflatex";
#[cfg(windows)]
const WELL_KNOWN_PDFLATEX: &str = r"C:\Program Files\MiKTeX\miktex\bin\x64\pdflatex.exe";
#[cfg(not(any(windows, target_os = "macos")))]
const WELL_KNOWN_PDFLATEX: &str = "/usr/local/texlive/bin/x86_64-linux/pdflatex";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineKind {
    /// Self-contained engine, fetches what it needs on its own.
    Tectonic,
    /// Traditional TeX distribution binary.
    PdfLatex,
}

impl EngineKind {
    /// Argument list for one invocation, relative to the temp directory the
    /// subprocess runs in.
    pub fn invocation_args(&self) -> Vec<String> {
        match self {
            EngineKind::Tectonic => vec![
                MARKUP_FILE.to_string(),
                "--outdir".to_string(),
                ".".to_string(),
            ],
            EngineKind::PdfLatex => vec![
                "-interaction=nonstopmode".to_string(),
                MARKUP_FILE.to_string(),
            ],
        }
    }
}

/// One available external engine, ready to invoke.
#[derive(Debug, Clone)]
pub struct CompilerCandidate {
    pub label: String,
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CompilerCandidate {
    pub fn new(label: impl Into<String>, program: PathBuf, kind: EngineKind) -> Self {
        Self {
            label: label.into(),
            program,
            args: kind.invocation_args(),
        }
    }
}

/// A single availability check. Yields at most one candidate.
#[derive(Debug, Clone)]
pub enum EngineProbe {
    OnPath {
        program: &'static str,
        kind: EngineKind,
    },
    FixedLocation {
        label: &'static str,
        path: PathBuf,
        kind: EngineKind,
    },
}

impl EngineProbe {
    pub fn locate(&self) -> Option<CompilerCandidate> {
        match self {
            EngineProbe::OnPath { program, kind } => find_in_path(program)
                .map(|resolved| CompilerCandidate::new(*program, resolved, *kind)),
            EngineProbe::FixedLocation { label, path, kind } => {
                if path.is_file() {
                    Some(CompilerCandidate::new(*label, path.clone(), *kind))
                } else {
                    None
                }
            }
        }
    }
}

/// The fixed priority order.
pub fn default_probes() -> Vec<EngineProbe> {
    vec![
        EngineProbe::OnPath {
            program: "tectonic",
            kind: EngineKind::Tectonic,
        },
        EngineProbe::OnPath {
            program: "pdflatex",
            kind: EngineKind::PdfLatex,
        },
        EngineProbe::FixedLocation {
            label: "pdflatex (well-known location)",
            path: PathBuf::from(WELL_KNOWN_PDFLATEX),
            kind: EngineKind::PdfLatex,
        },
    ]
}

/// Run the default probes and collect the candidates in priority order.
pub fn discover_engines() -> Vec<CompilerCandidate> {
    discover_with_probes(&default_probes())
}

/// Run `probes` in order. Absent engines are skipped silently; a probe that
/// resolves to an executable already claimed by an earlier probe is dropped
/// so a failing engine is never attempted twice.
pub fn discover_with_probes(probes: &[EngineProbe]) -> Vec<CompilerCandidate> {
    let mut candidates: Vec<CompilerCandidate> = Vec::new();

    for probe in probes {
        if let Some(candidate) = probe.locate() {
            let resolved = canonical_or_self(&candidate.program);
            let duplicate = candidates
                .iter()
                .any(|existing| canonical_or_self(&existing.program) == resolved);
            if duplicate {
                debug!(
                    "Skipping duplicate engine candidate: {} ({})",
                    candidate.label,
                    candidate.program.display()
                );
                continue;
            }
            debug!(
                "Engine available: {} ({})",
                candidate.label,
                candidate.program.display()
            );
            candidates.push(candidate);
        }
    }

    candidates
}

/// Acceptance gate for one engine attempt: a zero exit status alone is not
/// success, the artifact has to be on disk as well.
pub fn is_success(exit_ok: bool, artifact_exists: bool) -> bool {
    exit_ok && artifact_exists
}

fn canonical_or_self(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn find_in_path(program: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    find_in_path_from(program, &path_var)
}

fn find_in_path_from(program: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .map(|dir| dir.join(executable_name(program)))
        .find(|candidate| candidate.is_file())
}

#[cfg(windows)]
fn executable_name(program: &str) -> String {
    format!("{}.exe", program)
}

#[cfg(not(windows))]
fn executable_name(program: &str) -> String {
    program.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_success_truth_table() {
        assert!(is_success(true, true));
        assert!(!is_success(true, false));
        assert!(!is_success(false, true));
        assert!(!is_success(false, false));
    }

    #[test]
    fn test_find_in_path_from() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(executable_name("fakelatex")), "").unwrap();
        let path_var = env::join_paths([dir.path().to_path_buf()]).unwrap();

        let found = find_in_path_from("fakelatex", &path_var).unwrap();
        assert_eq!(found, dir.path().join(executable_name("fakelatex")));
        assert!(find_in_path_from("missinglatex", &path_var).is_none());
    }

    #[test]
    fn test_fixed_location_probe() {
        let dir = tempfile::tempdir().unwrap();
        let engine = dir.path().join("engine");
        fs::write(&engine, "").unwrap();

        let present = EngineProbe::FixedLocation {
            label: "engine",
            path: engine.clone(),
            kind: EngineKind::PdfLatex,
        };
        let absent = EngineProbe::FixedLocation {
            label: "engine",
            path: dir.path().join("gone"),
            kind: EngineKind::PdfLatex,
        };

        let candidate = present.locate().unwrap();
        assert_eq!(candidate.program, engine);
        assert!(absent.locate().is_none());
    }

    #[test]
    fn test_discovery_skips_absent_and_dedups() {
        let dir = tempfile::tempdir().unwrap();
        let engine = dir.path().join("engine");
        fs::write(&engine, "").unwrap();

        let probes = vec![
            EngineProbe::FixedLocation {
                label: "absent",
                path: dir.path().join("gone"),
                kind: EngineKind::Tectonic,
            },
            EngineProbe::FixedLocation {
                label: "first",
                path: engine.clone(),
                kind: EngineKind::PdfLatex,
            },
            EngineProbe::FixedLocation {
                label: "duplicate",
                path: engine.clone(),
                kind: EngineKind::PdfLatex,
            },
        ];

        let candidates = discover_with_probes(&probes);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].label, "first");
    }

    #[test]
    fn test_invocation_args_reference_markup_file() {
        assert!(EngineKind::Tectonic
            .invocation_args()
            .contains(&MARKUP_FILE.to_string()));
        let pdflatex = EngineKind::PdfLatex.invocation_args();
        assert_eq!(pdflatex[0], "-interaction=nonstopmode");
        assert_eq!(pdflatex[1], MARKUP_FILE);
    }

    #[test]
    fn test_default_probe_order() {
        let probes = default_probes();
        assert_eq!(probes.len(), 3);
        assert!(matches!(
            probes[0],
            EngineProbe::OnPath {
                program: "tectonic",
                ..
            }
        ));
        assert!(matches!(
            probes[1],
            EngineProbe::OnPath {
                program: "pdflatex",
                ..
            }
        ));
        assert!(matches!(probes[2], EngineProbe::FixedLocation { .. }));
    }
}
