use frontdoor_types::*;

#[test]
fn test_truncate() {
    let short = "short";
    assert_eq!(truncate(short, 10), "short");

    let long = "Departmental Budget Explore";
    let truncated = truncate(long, 10);
    assert_eq!(truncated.chars().count(), 10);
    assert!(truncated.ends_with('…'));
}

#[test]
fn test_contains_ignore_case() {
    assert!(contains_ignore_case("Sales Performance Dashboard", "sales"));
    assert!(contains_ignore_case("SALES report", "sales"));
    assert!(contains_ignore_case("anything", ""));
    assert!(!contains_ignore_case("Margin Analysis", "sales"));
}
