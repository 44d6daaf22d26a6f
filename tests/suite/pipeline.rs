//! Text in, text out: parser, kernel, renderer and export record together

use adjoint_core::Adjugator;
use adjoint_text::{
    ExportRecord, GridSize, ParseError, RenderOptions, empty_grid, parse_matrix, render_result,
};
use adjoint_types::{DimensionLimit, ShapeError};

fn adjoint_text(input: &str) -> String {
    let rows = parse_matrix(input).expect("parse");
    let adj = Adjugator::default().compute(rows).expect("compute");
    render_result(&adj, &RenderOptions::default())
}

#[test]
fn known_example_end_to_end() {
    assert_eq!(
        adjoint_text("1, 2, 3\n0, 1, 4\n5, 6, 0\n"),
        "Adjoint Matrix:\n-24, 18, 5\n20, -15, -4\n-5, 4, 1"
    );
}

#[test]
fn zero_cofactors_render_without_sign() {
    // Cofactors of zero minors carry a negative sign; they must print as 0.
    assert_eq!(
        adjoint_text("2, 0\n0, 3"),
        "Adjoint Matrix:\n3, 0\n0, 2"
    );
}

#[test]
fn fractional_entries() {
    assert_eq!(
        adjoint_text("0.5, 0.25\n1, 2"),
        "Adjoint Matrix:\n2, -0.25\n-1, 0.5"
    );
}

#[test]
fn template_grid_computes_to_zero_adjugate_for_n_above_one() {
    let size = GridSize::new(3, 3).unwrap();
    assert_eq!(
        adjoint_text(&empty_grid(size)),
        "Adjoint Matrix:\n0, 0, 0\n0, 0, 0\n0, 0, 0"
    );
}

#[test]
fn parse_failure_is_distinct_from_shape_failure() {
    assert!(matches!(
        parse_matrix("1, 2\n3, four"),
        Err(ParseError::InvalidNumber { line: 2, column: 2, .. })
    ));

    let rows = parse_matrix("1, 2, 3\n4, 5").expect("parse");
    assert!(matches!(
        Adjugator::default().compute(rows),
        Err(ShapeError::Ragged { row: 1, .. })
    ));
}

#[test]
fn limit_applies_to_parsed_input() {
    let rows = parse_matrix("1, 0, 0\n0, 1, 0\n0, 0, 1").expect("parse");
    let adjugator = Adjugator::new(DimensionLimit::new(2).unwrap());
    assert_eq!(
        adjugator.compute(rows).unwrap_err(),
        ShapeError::ExceedsLimit { side: 3, limit: 2 }
    );
}

#[test]
fn export_record_carries_raw_input_and_result() {
    let input = "4, 7\n2, 6\n";
    let result = adjoint_text(input);
    let record = ExportRecord {
        rows: 2,
        cols: 2,
        input,
        result: &result,
    };

    insta::assert_snapshot!(record.render(), @r"
Number of Rows: 2
Number of Columns: 2

Matrix Input:
4, 7
2, 6

Result:
Adjoint Matrix:
6, -7
-2, 4
");
}
