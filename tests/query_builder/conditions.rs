use folio_query::query_builder::{escape_like, Comparison, Condition, SqlArg};

#[test]
fn test_condition_renders_from_offset() {
    let condition = Condition::compare("d.created_at", Comparison::Gte, SqlArg::from(5_i64));
    let mut next = 7;
    let mut args = Vec::new();

    assert_eq!(condition.render(&mut next, &mut args), "d.created_at >= $7");
    assert_eq!(next, 8);
    assert_eq!(args, vec![SqlArg::BigInt(5)]);
}

#[test]
fn test_in_list_slots() {
    let condition = Condition::in_list(
        "d.tag",
        vec![SqlArg::from("a"), SqlArg::from("b"), SqlArg::from("c")],
    )
    .expect("non-empty list");
    let mut next = 2;
    let mut args = Vec::new();

    assert_eq!(condition.placeholder_count(), 3);
    assert_eq!(
        condition.render(&mut next, &mut args),
        "d.tag IN ($2, $3, $4)"
    );
    assert_eq!(next, 5);
}

#[test]
fn test_empty_in_list_is_none() {
    assert!(Condition::in_list("d.tag", Vec::new()).is_none());
}

#[test]
fn test_any_groups_with_or() {
    let group = Condition::any(vec![
        Condition::contains("d.title", "tax"),
        Condition::is_null("d.tag"),
        Condition::equals("d.status", SqlArg::from("final")),
    ])
    .expect("non-empty group");
    let mut next = 1;
    let mut args = Vec::new();

    assert_eq!(
        group.render(&mut next, &mut args),
        "(d.title ILIKE $1 OR d.tag IS NULL OR d.status = $2)"
    );
    assert_eq!(args, vec![SqlArg::from("%tax%"), SqlArg::from("final")]);
}

#[test]
fn test_is_null_has_no_arguments() {
    let condition = Condition::is_null("c.id");
    assert_eq!(condition.placeholder_count(), 0);
    assert!(condition.args().is_empty());
}

#[test]
fn test_escape_like() {
    assert_eq!(escape_like("plain"), "plain");
    assert_eq!(escape_like("100%"), "100\\%");
    assert_eq!(escape_like("snake_case"), "snake\\_case");
    assert_eq!(escape_like("a\\b"), "a\\\\b");
}

#[test]
fn test_comparison_operators() {
    assert_eq!(Comparison::Eq.to_sql(), "=");
    assert_eq!(Comparison::NotEq.to_sql(), "<>");
    assert_eq!(Comparison::Gt.to_sql(), ">");
    assert_eq!(Comparison::Gte.to_sql(), ">=");
    assert_eq!(Comparison::Lt.to_sql(), "<");
    assert_eq!(Comparison::Lte.to_sql(), "<=");
}
