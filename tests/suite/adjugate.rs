//! Adjugate kernel tests against known matrices

use adjoint_core::{
    Adjugator, adjugate, cofactor, cofactor_matrix, compute_adjugate, determinant, minor,
    validate,
};
use adjoint_types::{DimensionLimit, ShapeError, SquareMatrix};

use crate::common::{
    assert_identity_close, asymmetric_3x3, int_matrix, known_3x3, satisfies_identity,
};

#[test]
fn known_example_matches_hand_computation() {
    let a = known_3x3();
    assert_eq!(determinant(&a), 1);
    assert_eq!(
        adjugate(&a).to_rows(),
        vec![vec![-24, 18, 5], vec![20, -15, -4], vec![-5, 4, 1]]
    );
    assert_eq!(a.matmul(&adjugate(&a)), Some(SquareMatrix::identity(3)));
}

#[test]
fn identity_is_its_own_adjugate() {
    for n in 1..=6 {
        let id = SquareMatrix::<i64>::identity(n);
        assert_eq!(adjugate(&id).as_matrix(), &id, "n = {n}");
    }
}

#[test]
fn two_by_two_closed_form() {
    let (a, b, c, d) = (3, -7, 2, 5);
    let m = int_matrix(&[&[a, b], &[c, d]]);
    assert_eq!(adjugate(&m).to_rows(), vec![vec![d, -b], vec![-c, a]]);
}

#[test]
fn singular_matrix_annihilates_its_adjugate() {
    let a = int_matrix(&[&[1, 2], &[2, 4]]);
    assert_eq!(determinant(&a), 0);
    assert_eq!(a.matmul(&adjugate(&a)), Some(SquareMatrix::zeros(2)));
}

#[test]
fn one_by_one_adjugate_is_one() {
    let a = int_matrix(&[&[-4]]);
    assert_eq!(adjugate(&a).to_rows(), vec![vec![1]]);
    assert!(satisfies_identity(&a, &adjugate(&a)));
}

#[test]
fn transpose_step_is_required() {
    let a = asymmetric_3x3();
    let cof = cofactor_matrix(&a);
    let adj = adjugate(&a);

    assert_eq!(determinant(&a), 21);
    assert_eq!(
        cof.to_rows(),
        vec![vec![5, -15, 11], vec![4, 9, -8], vec![-1, 3, 2]]
    );
    assert_ne!(cof.as_matrix(), adj.as_matrix());
    assert!(satisfies_identity(&a, &adj));
    assert!(!satisfies_identity(&a, &cof));
}

#[test]
fn identity_holds_for_five_by_five() {
    let a = int_matrix(&[
        &[3, -1, 0, 2, 5],
        &[1, 4, -2, 0, 1],
        &[0, 2, 6, -3, 2],
        &[7, 0, 1, 1, -1],
        &[-2, 3, 0, 4, 2],
    ]);
    let adj = adjugate(&a);
    assert!(satisfies_identity(&a, &adj));
    assert_eq!(adj.determinant_of(&a), determinant(&a));
}

#[test]
fn floating_input_satisfies_identity_within_tolerance() {
    let a = SquareMatrix::from_rows(vec![
        vec![0.5, 1.25, -2.0],
        vec![3.75, 0.1, 4.0],
        vec![-1.5, 2.2, 0.3],
    ])
    .unwrap();
    assert_identity_close(&a, &adjugate(&a), 1e-10);
}

#[test]
fn minors_do_not_alias_source() {
    let a = known_3x3();
    let m = minor(&a, 0, 0).unwrap();
    assert_eq!(m.to_rows(), vec![vec![1, 4], vec![6, 0]]);
    assert_eq!(a, known_3x3());
}

#[test]
fn cofactor_helper_agrees_with_matrix() {
    let a = asymmetric_3x3();
    let cof = cofactor_matrix(&a);
    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(cofactor(&a, row, col).unwrap(), cof[(row, col)]);
        }
    }
    assert!(cofactor(&a, 0, 3).is_err());
}

#[test]
fn shape_errors_surface_before_computation() {
    assert!(matches!(
        compute_adjugate(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]),
        Err(ShapeError::Ragged { .. })
    ));
    assert_eq!(
        compute_adjugate(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap_err(),
        ShapeError::NonSquare { rows: 2, cols: 3 }
    );
    assert_eq!(
        compute_adjugate(Vec::<Vec<f64>>::new()).unwrap_err(),
        ShapeError::Empty
    );
}

#[test]
fn default_limit_rejects_eleven() {
    let rows = vec![vec![0_i64; 11]; 11];
    assert_eq!(
        compute_adjugate(rows).unwrap_err(),
        ShapeError::ExceedsLimit { side: 11, limit: 10 }
    );
}

#[test]
fn ceiling_limit_admits_eleven() {
    let limit = DimensionLimit::ceiling();
    let eleven = validate(vec![vec![0_i64; 11]; 11], limit).expect("within ceiling");
    assert_eq!(eleven.side(), 11);

    assert_eq!(
        validate(vec![vec![0_i64; 13]; 13], limit).unwrap_err(),
        ShapeError::ExceedsLimit { side: 13, limit: 12 }
    );
}

#[test]
fn explicit_limit_is_carried_by_adjugator() {
    let adjugator = Adjugator::new(DimensionLimit::new(7).unwrap());
    assert_eq!(adjugator.limit().get(), 7);

    let id: Vec<Vec<i64>> = SquareMatrix::<i64>::identity(7).to_rows();
    assert_eq!(adjugator.determinant(id).unwrap(), 1);
}
