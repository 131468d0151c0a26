// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rule-level error taxonomy — diagnostics attached to state, not exceptions.
//!
//! Transport errors (store I/O, webhook dispatch) are a separate concern;
//! see [`crate::AlertLevel`] for the severity these map to in a statement.

use crate::File;
use serde::{Deserialize, Serialize};

/// The kind of issue a rule or a selected file can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleErrorKind {
    /// The rule is due but the project has no artifacts at all.
    /// Attached to `RuleState.error`, never to a file.
    NoFile,
    /// A selected file cannot cover its window: its expiration is
    /// before the cutoff that was active when it was picked.
    Obsolete,
    /// File is at most 50% of the size of the next-older file.
    SizeTooSmall,
}

crate::simple_display! {
    RuleErrorKind {
        NoFile => "no available file",
        Obsolete => "outdated",
        SizeTooSmall => "file is too small",
    }
}

impl RuleErrorKind {
    /// Severity this kind contributes, in isolation, to a statement.
    /// `StatementBuilder` additionally escalates `Obsolete` to `Critic`
    /// when it's the newest selected file (see §4.5).
    pub fn base_level(self) -> crate::AlertLevel {
        match self {
            RuleErrorKind::NoFile => crate::AlertLevel::Critic,
            RuleErrorKind::Obsolete => crate::AlertLevel::Warning,
            RuleErrorKind::SizeTooSmall => crate::AlertLevel::Warning,
        }
    }
}

/// A diagnostic attached to a rule's state or to one of its selected files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleError {
    pub kind: RuleErrorKind,
    /// The offending file, when the error is file-scoped. `None` for
    /// rule-wide errors (currently only `NoFile`).
    pub file: Option<File>,
}

impl RuleError {
    pub fn rule_wide(kind: RuleErrorKind) -> Self {
        Self { kind, file: None }
    }

    pub fn for_file(kind: RuleErrorKind, file: File) -> Self {
        Self {
            kind,
            file: Some(file),
        }
    }
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.file {
            Some(file) => write!(f, "unable to keep file '{}': {}", file.path, self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
