//! Repository-level architecture-style inference.
//!
//! One traversal of the repository tree gathers weighted evidence: directory
//! names are matched against a fixed per-style vocabulary, and a bounded
//! prefix of each source file is tested against structural cues. The style
//! with maximal accumulated weight wins; zero evidence falls back to a fixed
//! default at a fixed low confidence.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::ScanConfig;
use crate::types::{IndicatorScores, Style, StyleVerdict};
use crate::util::pattern;

/// Style and confidence when a repository yields no evidence at all.
pub const FALLBACK: StyleVerdict = StyleVerdict {
    style: Style::Layered,
    confidence: 0.3,
};

/// Maximum score distance at which a layered-family winner is reported as
/// mvc: the most common concrete layered codebase in this domain is an MVC
/// variant.
const MVC_BIAS_TOLERANCE: u32 = 2;

/// One directory-name cue: any listed token adds every listed effect once.
struct DirCue {
    tokens: &'static [&'static str],
    effects: &'static [(Style, u32)],
}

/// Directory vocabulary. Layered/mvc cues carry small weights since the
/// tokens are ubiquitous; hexagonal and clean cues are rarer and weigh more.
static DIR_CUES: &[DirCue] = &[
    DirCue {
        tokens: &["controller"],
        effects: &[(Style::Layered, 2), (Style::Mvc, 2)],
    },
    DirCue {
        tokens: &["service"],
        effects: &[(Style::Layered, 2)],
    },
    DirCue {
        tokens: &["repository", "dao"],
        effects: &[(Style::Layered, 2)],
    },
    DirCue {
        tokens: &["entity", "model"],
        effects: &[(Style::Layered, 1)],
    },
    DirCue {
        tokens: &["adapter"],
        effects: &[(Style::Hexagonal, 3)],
    },
    DirCue {
        tokens: &["port"],
        effects: &[(Style::Hexagonal, 3)],
    },
    DirCue {
        tokens: &["infrastructure"],
        effects: &[(Style::Hexagonal, 2)],
    },
    DirCue {
        tokens: &["usecase"],
        effects: &[(Style::CleanArchitecture, 3)],
    },
    DirCue {
        tokens: &["gateway"],
        effects: &[(Style::CleanArchitecture, 2)],
    },
    DirCue {
        tokens: &["presenter"],
        effects: &[(Style::CleanArchitecture, 2)],
    },
    DirCue {
        tokens: &["interface_adapter"],
        effects: &[(Style::CleanArchitecture, 3)],
    },
];

/// Weight added per directory whose path contains `domain` while the
/// repository root has a top-level `adapter` entry.
const DOMAIN_WITH_ADAPTER_WEIGHT: u32 = 2;

static PORT_INTERFACE: Lazy<Regex> = Lazy::new(|| pattern(r"interface\s+\w+Port\s*\{"));
static ADAPTER_IMPLEMENTS: Lazy<Regex> = Lazy::new(|| pattern(r"class\s+\w+Adapter\s+implements"));
static USECASE_CLASS: Lazy<Regex> = Lazy::new(|| pattern(r"class\s+\w+UseCase"));
static GATEWAY_INTERFACE: Lazy<Regex> = Lazy::new(|| pattern(r"interface\s+\w+Gateway"));

/// Structural file cues, each worth the listed weight.
static FILE_CUES: &[(&Lazy<Regex>, Style, u32)] = &[
    (&PORT_INTERFACE, Style::Hexagonal, 2),
    (&ADAPTER_IMPLEMENTS, Style::Hexagonal, 2),
    (&USECASE_CLASS, Style::CleanArchitecture, 2),
    (&GATEWAY_INTERFACE, Style::CleanArchitecture, 2),
];

/// Infers the architecture style of the repository rooted at `repo_root`.
#[must_use]
pub fn classify_repository(repo_root: &Path, config: &ScanConfig) -> StyleVerdict {
    resolve(&collect_evidence(repo_root, config))
}

/// Walks the repository tree once and accumulates indicator scores.
///
/// Unreadable files and unwalkable directories are skipped silently; partial
/// evidence is still evidence.
#[must_use]
pub fn collect_evidence(repo_root: &Path, config: &ScanConfig) -> IndicatorScores {
    let mut scores = IndicatorScores::new();
    let has_top_level_adapter = top_level_adapter(repo_root);

    for entry in WalkDir::new(repo_root).into_iter().filter_map(Result::ok) {
        if entry.file_type().is_dir() {
            let dir_lower = entry.path().to_string_lossy().to_lowercase();

            for cue in DIR_CUES {
                if cue.tokens.iter().any(|t| dir_lower.contains(t)) {
                    for &(style, weight) in cue.effects {
                        scores.add(style, weight);
                    }
                }
            }

            if dir_lower.contains("domain") && has_top_level_adapter {
                scores.add(Style::Hexagonal, DOMAIN_WITH_ADAPTER_WEIGHT);
            }
        } else if entry.file_type().is_file() && has_recognized_extension(entry.path(), config) {
            let Some(prefix) = read_prefix(entry.path(), config.probe_bytes) else {
                tracing::debug!("skipping unreadable file {}", entry.path().display());
                continue;
            };

            for (cue, style, weight) in FILE_CUES {
                if cue.is_match(&prefix) {
                    scores.add(*style, *weight);
                }
            }
        }
    }

    scores
}

/// Resolves accumulated evidence into a style verdict.
///
/// Zero total weight returns the fixed [`FALLBACK`] — a defined outcome, not
/// an error. Otherwise confidence is the winner's share of the total mass;
/// a layered-family winner whose layered and mvc scores sit within
/// [`MVC_BIAS_TOLERANCE`] of each other is reported as mvc.
#[must_use]
pub fn resolve(scores: &IndicatorScores) -> StyleVerdict {
    let total = scores.total();
    if total == 0 {
        return FALLBACK;
    }

    let winner = scores.arg_max();
    let confidence = f64::from(scores.get(winner)) / f64::from(total);

    let layered = scores.get(Style::Layered);
    let mvc = scores.get(Style::Mvc);
    if winner.is_layered_family() && layered.abs_diff(mvc) <= MVC_BIAS_TOLERANCE {
        return StyleVerdict {
            style: Style::Mvc,
            confidence,
        };
    }

    StyleVerdict {
        style: winner,
        confidence,
    }
}

/// True when the repository root directly contains an `adapter` entry.
fn top_level_adapter(repo_root: &Path) -> bool {
    std::fs::read_dir(repo_root)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .any(|e| e.file_name() == "adapter")
        })
        .unwrap_or(false)
}

fn has_recognized_extension(path: &Path, config: &ScanConfig) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|known| known == ext))
}

/// Reads at most `limit` bytes of a file, lossily decoded.
fn read_prefix(path: &Path, limit: usize) -> Option<String> {
    let bytes = std::fs::read(path).ok()?;
    let end = bytes.len().min(limit);
    Some(String::from_utf8_lossy(&bytes[..end]).into_owned())
}
