// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn statement(project_name: &str, count: u32, max_level: AlertLevel) -> ProjectErrorStatement {
    let mut reasons = BTreeMap::new();
    reasons.insert(RuleErrorKind::Obsolete, "outdated".to_string());
    ProjectErrorStatement {
        project_name: project_name.to_string(),
        count,
        reasons,
        max_level,
    }
}

#[test]
fn identical_statements_share_a_fingerprint() {
    let a = statement("proj", 2, AlertLevel::Warning);
    let b = statement("proj", 2, AlertLevel::Warning);
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn differing_count_changes_the_fingerprint() {
    let a = statement("proj", 2, AlertLevel::Warning);
    let b = statement("proj", 3, AlertLevel::Warning);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn differing_project_name_changes_the_fingerprint() {
    let a = statement("proj-a", 2, AlertLevel::Warning);
    let b = statement("proj-b", 2, AlertLevel::Warning);
    assert_ne!(a.fingerprint(), b.fingerprint());
}

#[test]
fn differing_level_changes_the_fingerprint() {
    let a = statement("proj", 2, AlertLevel::Warning);
    let b = statement("proj", 2, AlertLevel::Critic);
    assert_ne!(a.fingerprint(), b.fingerprint());
}
