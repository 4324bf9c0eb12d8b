//! Focused unit tests covering sort CLI configuration and execution.

use super::helpers::{FIXED_NOW, Workspace, printed_ids};
use super::*;
use crate::sort::{SortArgs, SortConfig, config_from_layers_for_test, execute_sort};
use larder_core::test_support::{fixed_now, mixed_shelf_constraints};
use larder_core::{Candidate, FilterConstraints, RankingError, SortField, SortOrder};
use ortho_config::MergeComposer;
use rstest::rstest;
use serde_json::json;

#[rstest]
fn converting_without_a_sort_field_errors() {
    let args = SortArgs {
        candidates: Some("candidates.json".into()),
        exclude_expired: Some(false),
        now: Some(fixed_now()),
        ..SortArgs::default()
    };

    let err = SortConfig::try_from(args).expect_err("missing sort field should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_SORT_BY);
            assert_eq!(env, ENV_SORT_BY);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn converting_without_expiry_choice_errors() {
    let args = SortArgs {
        candidates: Some("candidates.json".into()),
        sort_by: Some(SortField::Price),
        now: Some(fixed_now()),
        ..SortArgs::default()
    };

    let err = SortConfig::try_from(args).expect_err("expiry handling must be explicit");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_EXCLUDE_EXPIRED);
            assert_eq!(env, ENV_SORT_EXCLUDE_EXPIRED);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_resolves_field_and_order() {
    let mut composer = MergeComposer::new();
    composer.push_file(json!({ "sort_by": "price", "min_freshness_percent": 50.0 }), None);
    composer.push_environment(json!({
        "sort_by": "freshness",
        "order": "asc",
        "exclude_expired": true,
        "now": FIXED_NOW,
    }));
    composer.push_cli(json!({ "candidates": "shelf.json" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.field, SortField::Freshness);
    assert_eq!(config.order, Some(SortOrder::Ascending));
    assert_eq!(config.constraints.min_freshness_percent, Some(50.0));
    assert_eq!(config.candidates, "shelf.json");
}

#[rstest]
#[case(SortField::Price, None, ["bread", "strawberries", "honey"])]
#[case(SortField::Price, Some(SortOrder::Descending), ["honey", "strawberries", "bread"])]
#[case(SortField::Freshness, None, ["honey", "strawberries", "bread"])]
#[case(SortField::Distance, None, ["strawberries", "bread", "honey"])]
fn execute_sort_prints_sorted_json(
    #[case] field: SortField,
    #[case] order: Option<SortOrder>,
    #[case] expected: [&str; 3],
) {
    let workspace = Workspace::new();
    let config = SortConfig {
        candidates: workspace.write_mixed_shelf(),
        constraints: mixed_shelf_constraints(),
        field,
        order,
    };
    let mut stdout = Vec::new();

    execute_sort(&config, &mut stdout).expect("sort should succeed");

    assert_eq!(printed_ids(&stdout), expected);
    let value: serde_json::Value = serde_json::from_slice(&stdout).expect("json output");
    assert_eq!(value["mode"], "sorted");
    assert_eq!(value["field"], field.as_str());
}

#[rstest]
fn execute_sort_reports_absent_sort_keys() {
    let workspace = Workspace::new();
    let config = SortConfig {
        candidates: workspace.write_candidates(&[Candidate::new("unpriced", 1.0, 50.0)]),
        constraints: FilterConstraints::unconstrained(fixed_now()),
        field: SortField::Price,
        order: None,
    };

    let err = execute_sort(&config, &mut Vec::new()).expect_err("price is absent");
    match err {
        CliError::Ranking(RankingError::MissingField { candidate, field }) => {
            assert_eq!(candidate, "unpriced");
            assert_eq!(field, "price");
        }
        other => panic!("expected MissingField, found {other:?}"),
    }
}
