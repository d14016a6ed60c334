//! Unary operator and union behavior.

use relalg::prelude::*;
use relalg::row;

fn people() -> Vec<Row> {
    vec![
        row! { "id" => 1, "name" => "ada", "age" => 36 },
        row! { "id" => 2, "name" => "bob", "age" => 17 },
        row! { "id" => 3, "name" => "cyd", "age" => 54 },
    ]
}

#[test]
fn projection_keeps_listed_columns_in_order() {
    let out = Node::relation(people())
        .project(["name", "id"])
        .rows()
        .unwrap();

    assert_eq!(out.len(), 3);
    for row in out.iter() {
        let fields: Vec<&str> = row.field_names().collect();
        assert_eq!(fields, vec!["name", "id"]);
    }
    assert_eq!(out[0], row! { "name" => "ada", "id" => 1 });
}

#[test]
fn projection_of_absent_column_yields_missing() {
    let out = Node::relation(people())
        .project(["name", "salary"])
        .rows()
        .unwrap();

    assert_eq!(out[0].get("salary"), Some(&Value::Missing));
}

#[test]
fn anti_projection_drops_named_set_keeping_input_order() {
    let out = Node::relation(people())
        .drop_columns(["age"])
        .rows()
        .unwrap();

    for (row, src) in out.iter().zip(people()) {
        let fields: Vec<&str> = row.field_names().collect();
        assert_eq!(fields, vec!["id", "name"]);
        assert_eq!(row.get("name"), src.get("name"));
    }
}

#[test]
fn rename_maps_listed_fields_and_passes_the_rest() {
    let out = Node::relation(people())
        .rename([("name", "label")])
        .rows()
        .unwrap();

    let fields: Vec<&str> = out[0].field_names().collect();
    assert_eq!(fields, vec!["id", "label", "age"]);
    assert_eq!(out[0].get("label"), Some(&Value::Str("ada".into())));
}

#[test]
fn select_is_a_conjunctive_identity_filter() {
    let adults = Node::relation(people())
        .select([
            Criterion::matches("age", |v| match v {
                Value::Int(n) => Ok(*n >= 18),
                other => Err(Error::Predicate(format!("age was {}", other.kind()))),
            }),
            Criterion::equals("name", "cyd"),
        ])
        .rows()
        .unwrap();

    assert_eq!(adults.to_vec(), vec![row! { "id" => 3, "name" => "cyd", "age" => 54 }]);
}

#[test]
fn select_with_vacuous_criterion_keeps_everything() {
    let out = Node::relation(people())
        .select([Criterion::any("whatever")])
        .rows()
        .unwrap();
    assert_eq!(out.len(), 3);
}

#[test]
fn select_equality_against_absent_column_drops_all_rows() {
    let out = Node::relation(people())
        .select([Criterion::equals("salary", 1)])
        .rows()
        .unwrap();
    assert!(out.is_empty());
}

#[test]
fn union_concatenates_without_dedup() {
    let a = people();
    let b = vec![row! { "id" => 1, "name" => "ada", "age" => 36 }];
    let out = Node::relation(a.clone()).union(b.clone()).rows().unwrap();

    assert_eq!(out.len(), a.len() + b.len());
    assert_eq!(&out[..a.len()], &a[..]);
    assert_eq!(&out[a.len()..], &b[..]);
}

#[test]
fn unique_drops_structural_duplicates_first_seen_order() {
    let rows = vec![
        row! { "x" => 1, "y" => 2 },
        row! { "y" => 2, "x" => 1 }, // same fields, different order
        row! { "x" => 2, "y" => 2 },
        row! { "x" => 1, "y" => 2 },
    ];
    let out = Node::relation(rows).unique().rows().unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0], row! { "x" => 1, "y" => 2 });
    assert_eq!(out[1], row! { "x" => 2, "y" => 2 });
}

#[test]
fn unique_is_idempotent() {
    let rows = vec![
        row! { "x" => 1 },
        row! { "x" => 1 },
        row! { "x" => 2 },
    ];
    let once = Node::relation(rows.clone()).unique().rows().unwrap();
    let twice = Node::relation(rows).unique().unique().rows().unwrap();
    assert_eq!(once.to_vec(), twice.to_vec());
}

#[test]
fn table_constructors_wrap_bare_rows() {
    let out = table::project(people(), ["id"]).rows().unwrap();
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], row! { "id" => 1 });

    let out = table::unique(vec![row! { "x" => 1 }, row! { "x" => 1 }])
        .rows()
        .unwrap();
    assert_eq!(out.len(), 1);
}

#[test]
fn rows_load_from_json_fixtures() {
    let rows = rows_from_json(serde_json::json!([
        { "id": 1, "tags": { "a": true } },
        { "id": 2.5, "tags": null }
    ]))
    .unwrap();

    assert_eq!(rows[0].get("id"), Some(&Value::Int(1)));
    assert_eq!(
        rows[0].get("tags"),
        Some(&Value::Row(row! { "a" => true }))
    );
    assert_eq!(rows[1].get("id"), Some(&Value::Float(2.5)));

    assert!(rows_from_json(serde_json::json!({ "not": "an array" })).is_err());
    assert!(rows_from_json(serde_json::json!([{ "bad": [1, 2] }])).is_err());
}
