//! Presence and length checks for required environment variables.
//!
//! Pure: takes a snapshot of variables and returns findings. Callers decide
//! whether a finding is fatal.

use std::collections::BTreeMap;
use std::fmt;

/// Values shorter than this are flagged as likely placeholders.
pub const DEFAULT_MIN_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvViolation {
    Missing(String),
    TooShort { name: String, len: usize },
}

impl EnvViolation {
    pub fn name(&self) -> &str {
        match self {
            Self::Missing(name) | Self::TooShort { name, .. } => name,
        }
    }
}

impl fmt::Display for EnvViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "{name} (missing)"),
            Self::TooShort { name, len } => {
                write!(f, "{name} (too short, {len} chars, likely invalid)")
            }
        }
    }
}

/// Check each `required` name against `vars`. Absent and empty values are
/// both `Missing`. Order follows `required`.
pub fn check_env(
    vars: &BTreeMap<String, String>,
    required: &[&str],
    min_len: usize,
) -> Vec<EnvViolation> {
    required
        .iter()
        .filter_map(|&name| match vars.get(name).map(String::as_str) {
            None | Some("") => Some(EnvViolation::Missing(name.to_string())),
            Some(value) if value.chars().count() < min_len => Some(EnvViolation::TooShort {
                name: name.to_string(),
                len: value.chars().count(),
            }),
            Some(_) => None,
        })
        .collect()
}

/// Snapshot of the process environment, skipping non-UTF-8 entries.
pub fn process_env() -> BTreeMap<String, String> {
    std::env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}

/// Human-readable rendering of a set of findings.
pub struct EnvReport<'a>(pub &'a [EnvViolation]);

impl fmt::Display for EnvReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("Environment validation passed");
        }

        writeln!(f, "Environment configuration issues:")?;
        let missing: Vec<_> = self
            .0
            .iter()
            .filter(|v| matches!(v, EnvViolation::Missing(_)))
            .collect();
        let invalid: Vec<_> = self
            .0
            .iter()
            .filter(|v| matches!(v, EnvViolation::TooShort { .. }))
            .collect();

        if !missing.is_empty() {
            writeln!(f, "\nMissing variables:")?;
            for violation in missing {
                writeln!(f, "  - {}", violation.name())?;
            }
        }
        if !invalid.is_empty() {
            writeln!(f, "\nInvalid variables:")?;
            for violation in invalid {
                writeln!(f, "  - {violation}")?;
            }
        }
        Ok(())
    }
}
