use std::collections::{HashMap, HashSet};
use std::env;
use std::ffi::OsStr;
use std::fmt;

use kumiko_config::{Action, Config, GroupOp, KeyBinding, Modifiers};

use crate::terminal;

/// A single problem found in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    DuplicateChord { chord: String, count: usize },
    UnreachableGroupKey { chord: String, group: String },
    MissingExecutable { program: String, chord: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::DuplicateChord { chord, count } => {
                write!(f, "{} is bound {} times", chord, count)
            }
            Finding::UnreachableGroupKey { chord, group } => {
                write!(
                    f,
                    "{} targets group {} with a key no keyboard emits",
                    chord, group
                )
            }
            Finding::MissingExecutable { program, chord } => {
                write!(f, "{} not found in PATH (bound to {})", program, chord)
            }
        }
    }
}

#[derive(Debug)]
pub struct LintReport {
    pub findings: Vec<Finding>,
    pub terminal: Option<String>,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Run every check against the document.
pub fn check(config: &Config) -> LintReport {
    let path = env::var_os("PATH").unwrap_or_default();

    let mut findings = duplicate_chords(&config.keys);
    findings.extend(unreachable_group_keys(&config.keys));
    findings.extend(missing_executables(&config.keys, &path));

    LintReport {
        findings,
        terminal: terminal::detect_terminal(),
    }
}

/// Two bindings on the same chord shadow each other; only one fires.
fn duplicate_chords(keys: &[KeyBinding]) -> Vec<Finding> {
    let mut counts: HashMap<(Modifiers, &str), usize> = HashMap::new();
    for binding in keys {
        *counts
            .entry((binding.mods, binding.key.as_str()))
            .or_insert(0) += 1;
    }

    let mut seen = HashSet::new();
    let mut findings = Vec::new();
    for binding in keys {
        let slot = (binding.mods, binding.key.as_str());
        if counts[&slot] > 1 && seen.insert(slot) {
            findings.push(Finding::DuplicateChord {
                chord: binding.chord(),
                count: counts[&slot],
            });
        }
    }
    findings
}

/// Group bindings are generated from decimal positions, so a tenth
/// group ends up on key "10", which no keyboard produces.
fn unreachable_group_keys(keys: &[KeyBinding]) -> Vec<Finding> {
    keys.iter()
        .filter_map(|binding| {
            let group = match &binding.action {
                Action::Group {
                    op: GroupOp::View { group },
                } => group,
                Action::Group {
                    op: GroupOp::MoveWindow { group },
                } => group,
                _ => return None,
            };
            let numeral =
                binding.key.len() > 1 && binding.key.chars().all(|c| c.is_ascii_digit());
            numeral.then(|| Finding::UnreachableGroupKey {
                chord: binding.chord(),
                group: group.clone(),
            })
        })
        .collect()
}

fn missing_executables(keys: &[KeyBinding], path: &OsStr) -> Vec<Finding> {
    let mut reported = HashSet::new();
    let mut findings = Vec::new();
    for binding in keys {
        let command = match &binding.action {
            Action::Spawn { command } => command,
            _ => continue,
        };
        let program = match command.split_whitespace().next() {
            Some(program) => program,
            None => continue,
        };
        if terminal::find_in_path(program, path).is_none() && reported.insert(program.to_string())
        {
            findings.push(Finding::MissingExecutable {
                program: program.to_string(),
                chord: binding.chord(),
            });
        }
    }
    findings
}
