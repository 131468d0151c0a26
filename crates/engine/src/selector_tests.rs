// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use backr_core::{sorted_by_date_desc, Rule};
use chrono::TimeZone;

fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

fn fresh(rule: Rule) -> RuleState {
    RuleState::fresh(rule)
}

#[test]
fn happy_path_selects_one_file_per_window() {
    let rule = Rule::new(3, 1);
    let ref_date = at(2019, 3, 25, 8);
    let files = sorted_by_date_desc(&[
        File::new("proj/f20", at(2019, 3, 20, 5), 300),
        File::new("proj/f23", at(2019, 3, 23, 5), 300),
        File::new("proj/f24", at(2019, 3, 24, 6), 300),
        File::new("proj/f25", at(2019, 3, 25, 5), 300),
    ]);

    let state = select(fresh(rule), ref_date, &files);

    assert!(state.error.is_none());
    assert_eq!(state.files.len(), 3);
    assert!(state.file("proj/f25").is_some());
    assert!(state.file("proj/f24").is_some());
    assert!(state.file("proj/f23").is_some());
    assert!(state.file("proj/f20").is_none());
    assert!(state.files.iter().all(|f| f.error.is_none()));
    assert!(state.next.is_some());
}

#[test]
fn empty_files_sets_no_file_error_and_clears_selection() {
    let rule = Rule::new(3, 1);
    let ref_date = at(2019, 3, 25, 8);
    let mut state = fresh(rule);
    state
        .files
        .push(SelectedFile::new(File::new("proj/stale", at(2019, 3, 1, 0), 10), at(2019, 3, 2, 0)));

    let state = select(state, ref_date, &[]);

    assert!(state.files.is_empty());
    assert_eq!(state.error.as_ref().map(|e| e.kind), Some(RuleErrorKind::NoFile));
    assert!(state.next.is_none(), "next is left unchanged on empty input");
}

#[test]
fn shrunk_file_is_flagged_size_too_small_and_does_not_consume_a_slot() {
    let rule = Rule::new(2, 1);
    let ref_date = at(2019, 3, 25, 8);
    let files = sorted_by_date_desc(&[
        File::new("proj/f23", at(2019, 3, 23, 5), 300),
        File::new("proj/f24", at(2019, 3, 24, 6), 300),
        File::new("proj/f25", at(2019, 3, 25, 5), 5),
    ]);

    let state = select(fresh(rule), ref_date, &files);

    let small = state.file("proj/f25").unwrap();
    assert_eq!(small.error.as_ref().map(|e| e.kind), Some(RuleErrorKind::SizeTooSmall));
    assert!(state.file("proj/f24").is_some());
    assert!(state.file("proj/f23").is_some());
}

#[test]
fn file_older_than_cutoff_window_is_flagged_obsolete() {
    let rule = Rule::new(1, 1);
    let ref_date = at(2019, 4, 25, 8);
    let files = sorted_by_date_desc(&[File::new("proj/old", at(2019, 3, 24, 6), 300)]);

    let state = select(fresh(rule), ref_date, &files);

    let selected = state.file("proj/old").unwrap();
    assert_eq!(selected.error.as_ref().map(|e| e.kind), Some(RuleErrorKind::Obsolete));
}

#[test]
fn adding_a_fresher_correct_file_never_demotes_a_clean_file() {
    let rule = Rule::new(2, 1);
    let ref_date = at(2019, 3, 24, 8);
    let before = sorted_by_date_desc(&[File::new("proj/f23", at(2019, 3, 23, 5), 300)]);
    let state = select(fresh(rule), ref_date, &before);
    assert!(state.file("proj/f23").unwrap().error.is_none());

    let after = sorted_by_date_desc(&[
        File::new("proj/f23", at(2019, 3, 23, 5), 300),
        File::new("proj/f24", at(2019, 3, 24, 5), 300),
    ]);
    let state = select(state, at(2019, 3, 25, 8), &after);

    assert!(state.file("proj/f23").unwrap().error.is_none());
    assert!(state.file("proj/f24").unwrap().error.is_none());
}

#[test]
fn expiration_is_always_date_plus_min_age() {
    let rule = Rule::new(1, 3);
    let ref_date = at(2019, 3, 25, 8);
    let files = sorted_by_date_desc(&[File::new("proj/f", at(2019, 3, 20, 5), 300)]);

    let state = select(fresh(rule), ref_date, &files);

    let selected = state.file("proj/f").unwrap();
    assert_eq!(selected.expiration, at(2019, 3, 20, 5) + rule.min_age_duration());
}
