// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::Rule;
use chrono::TimeZone;

fn ref_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2019, 3, 25, 8, 0, 0).unwrap()
}

#[test]
fn fresh_state_is_due() {
    let state = RuleState::fresh(Rule::new(3, 1));
    assert!(state.is_due(ref_date()));
}

#[test]
fn state_with_future_next_is_not_due() {
    let mut state = RuleState::fresh(Rule::new(3, 1));
    state.next = Some(ref_date() + chrono::Duration::days(1));
    assert!(!state.is_due(ref_date()));
}

#[test]
fn state_with_past_or_equal_next_is_due() {
    let mut state = RuleState::fresh(Rule::new(3, 1));
    state.next = Some(ref_date());
    assert!(state.is_due(ref_date()));
    state.next = Some(ref_date() - chrono::Duration::days(1));
    assert!(state.is_due(ref_date()));
}

#[test]
fn file_lookup_finds_by_path() {
    let mut state = RuleState::fresh(Rule::new(3, 1));
    let file = File::new("proj/a", ref_date(), 100);
    state
        .files
        .push(SelectedFile::new(file, ref_date() + chrono::Duration::days(1)));

    assert!(state.file("proj/a").is_some());
    assert!(state.file("proj/b").is_none());
}

#[test]
fn sorted_by_expiration_desc_orders_latest_first() {
    let a = SelectedFile::new(File::new("p/a", ref_date(), 1), ref_date());
    let b = SelectedFile::new(
        File::new("p/b", ref_date(), 1),
        ref_date() + chrono::Duration::days(5),
    );
    let sorted = sorted_by_expiration_desc(&[a, b]);
    assert_eq!(sorted[0].path(), "p/b");
}
