//! Relational division.

use relalg::prelude::*;
use relalg::row;

fn skills() -> Vec<Row> {
    vec![
        row! { "emp" => "A", "skill" => "x" },
        row! { "emp" => "A", "skill" => "y" },
        row! { "emp" => "B", "skill" => "x" },
    ]
}

#[test]
fn only_groups_covering_the_full_divisor_qualify() {
    let wanted = vec![row! { "skill" => "x" }, row! { "skill" => "y" }];
    let out = Node::relation(skills())
        .divide(wanted, "skill")
        .unwrap()
        .rows()
        .unwrap();

    assert_eq!(out.to_vec(), vec![row! { "emp" => "A" }]);
}

#[test]
fn a_single_row_covering_the_whole_divisor_qualifies() {
    // The representative's own divisor-column value counts; a one-row group
    // must not need a partner to qualify.
    let out = Node::relation(vec![row! { "emp" => "B", "skill" => "x" }])
        .divide(vec![row! { "skill" => "x" }], "skill")
        .unwrap()
        .rows()
        .unwrap();

    assert_eq!(out.to_vec(), vec![row! { "emp" => "B" }]);
}

#[test]
fn divisor_column_may_be_named_differently() {
    let wanted = vec![row! { "required" => "x" }, row! { "required" => "y" }];
    let out = Node::relation(skills())
        .divide_on(wanted, "skill", "required")
        .unwrap()
        .rows()
        .unwrap();

    assert_eq!(out.to_vec(), vec![row! { "emp" => "A" }]);
}

#[test]
fn duplicate_divisor_values_count_once() {
    let wanted = vec![
        row! { "skill" => "x" },
        row! { "skill" => "x" },
        row! { "skill" => "y" },
    ];
    let out = Node::relation(skills())
        .divide(wanted, "skill")
        .unwrap()
        .rows()
        .unwrap();

    assert_eq!(out.to_vec(), vec![row! { "emp" => "A" }]);
}

#[test]
fn groups_match_structurally_across_all_non_divided_fields() {
    // Same emp but different site: two distinct groups, neither covers both
    // skills on its own.
    let rows = vec![
        row! { "emp" => "A", "site" => "hq", "skill" => "x" },
        row! { "emp" => "A", "site" => "lab", "skill" => "y" },
    ];
    let wanted = vec![row! { "skill" => "x" }, row! { "skill" => "y" }];
    let out = Node::relation(rows)
        .divide(wanted, "skill")
        .unwrap()
        .rows()
        .unwrap();

    assert!(out.is_empty());
}

#[test]
fn an_empty_divisor_qualifies_every_row() {
    let out = Node::relation(skills())
        .divide(Vec::<Row>::new(), "skill")
        .unwrap()
        .rows()
        .unwrap();

    // Bag semantics: one output row per input row, divisor vacuously covered.
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], row! { "emp" => "A" });
}

#[test]
fn partial_coverage_does_not_qualify() {
    let wanted = vec![
        row! { "skill" => "x" },
        row! { "skill" => "y" },
        row! { "skill" => "z" },
    ];
    let out = Node::relation(skills())
        .divide(wanted, "skill")
        .unwrap()
        .rows()
        .unwrap();

    assert!(out.is_empty());
}
