use super::*;

#[test]
fn parse_rule_reads_count_and_min_age() {
    let rule = parse_rule("3:7").unwrap();
    assert_eq!(rule.count, 3);
    assert_eq!(rule.min_age, 7);
}

#[test]
fn parse_rule_rejects_a_missing_separator() {
    assert!(parse_rule("37").is_err());
}

#[test]
fn parse_rule_rejects_non_numeric_fields() {
    assert!(parse_rule("three:7").is_err());
}

#[test]
fn format_rules_lists_every_rule() {
    let rules = vec![Rule { count: 3, min_age: 7 }, Rule { count: 1, min_age: 30 }];
    assert_eq!(format_rules(&rules), "3:7, 1:30");
}

#[test]
fn format_rules_reports_none_for_an_empty_set() {
    assert_eq!(format_rules(&[]), "(none)");
}
