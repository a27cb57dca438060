use approx::assert_relative_eq;
use linmat::{LinalgError, Matrix, Vector};
use rand::Rng;

// small integer entries keep every product and determinant exact in f64
fn random_matrix(rng: &mut impl Rng, rows: usize, cols: usize, bound: i32) -> Matrix {
    let rows = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| rng.random_range(-bound..=bound) as f64)
                .collect::<Vector>()
        })
        .collect();
    Matrix::new(rows).expect("rows are built with equal length")
}

fn repeated_product(a: &Matrix, exponent: usize) -> Result<Matrix, LinalgError> {
    let mut acc = Matrix::identity(a.column_length());
    for _ in 0..exponent {
        acc = acc.multiply(a)?;
    }
    Ok(acc)
}

#[test]
fn identity_is_neutral_for_multiply() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    for n in 1..=5 {
        let a = random_matrix(&mut rng, n, n, 9);
        let id = Matrix::identity(n);
        assert_eq!(a.multiply(&id)?, a);
        assert_eq!(id.multiply(&a)?, a);
    }
    Ok(())
}

#[test]
fn inverse_multiplies_to_identity() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    let mut checked = 0;
    while checked < 20 {
        let n = rng.random_range(1..=4);
        let a = random_matrix(&mut rng, n, n, 5);
        if a.determinant()? == 0.0 {
            assert_eq!(a.inverse(), Err(LinalgError::Singular { op: "inverse" }));
            continue;
        }
        let inverse = a.inverse()?;
        assert!(a.multiply(&inverse)?.approx_eq(&Matrix::identity(n), 1e-9));
        assert!(inverse.multiply(&a)?.approx_eq(&Matrix::identity(n), 1e-9));
        checked += 1;
    }
    Ok(())
}

#[test]
fn add_then_subtract_round_trips() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    for _ in 0..10 {
        let rows = rng.random_range(1..=5);
        let cols = rng.random_range(1..=5);
        let a = random_matrix(&mut rng, rows, cols, 100);
        let b = random_matrix(&mut rng, rows, cols, 100);
        assert_eq!(a.add(&b)?.subtract(&b)?, a);
    }
    Ok(())
}

#[test]
fn transpose_is_an_involution() {
    let mut rng = rand::rng();
    for _ in 0..10 {
        let rows = rng.random_range(1..=5);
        let cols = rng.random_range(1..=5);
        let a = random_matrix(&mut rng, rows, cols, 100);
        let t = a.transpose();
        assert_eq!(t.row_length(), a.column_length());
        assert_eq!(t.column_length(), a.row_length());
        assert_eq!(t.transpose(), a);
    }
}

#[test]
fn determinant_of_identity_is_one() -> Result<(), LinalgError> {
    for n in 1..=7 {
        assert_eq!(Matrix::identity(n).determinant()?, 1.0);
    }
    Ok(())
}

#[test]
fn determinant_closed_form() -> Result<(), LinalgError> {
    assert_eq!(Matrix::from([[1.0, 2.0], [3.0, 4.0]]).determinant()?, -2.0);
    Ok(())
}

#[test]
fn determinant_is_multiplicative() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    for n in 1..=4 {
        let a = random_matrix(&mut rng, n, n, 3);
        let b = random_matrix(&mut rng, n, n, 3);
        assert_eq!(
            a.multiply(&b)?.determinant()?,
            a.determinant()? * b.determinant()?
        );
        assert_eq!(a.transpose().determinant()?, a.determinant()?);
    }
    Ok(())
}

#[test]
fn adjoint_times_matrix_is_scaled_identity() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    for n in 2..=4 {
        let a = random_matrix(&mut rng, n, n, 4);
        let det = a.determinant()?;
        assert_eq!(a.multiply(&a.adjoint()?)?, Matrix::identity(n).scale(det));
    }
    Ok(())
}

#[test]
fn vector_products() -> Result<(), LinalgError> {
    let x = Vector::from([1.0, 0.0, 0.0]);
    let y = Vector::from([0.0, 1.0, 0.0]);
    assert_eq!(x.dot(&y)?, 0.0);
    assert_eq!(x.cross(&y)?, Vector::from([0.0, 0.0, 1.0]));

    let mut rng = rand::rng();
    for _ in 0..10 {
        let a: Vector = (0..3).map(|_| rng.random_range(-10.0..10.0)).collect();
        let b: Vector = (0..3).map(|_| rng.random_range(-10.0..10.0)).collect();
        let c = a.cross(&b)?;
        assert_relative_eq!(c.dot(&a)?, 0.0, epsilon = 1e-9);
        assert_relative_eq!(c.dot(&b)?, 0.0, epsilon = 1e-9);
    }
    Ok(())
}

#[test]
fn vector_zero_test_is_approximate() {
    assert!(Vector::from([0.0, 0.0, 0.0]).is_zero());
    assert!(!Vector::from([0.1, 0.0, 0.0]).is_zero());
}

#[test]
fn power_matches_repeated_product() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    for n in 1..=3 {
        let a = random_matrix(&mut rng, n, n, 2);
        assert_eq!(a.power(0)?, Matrix::identity(n));
        assert_eq!(a.power(1)?, a);
        assert_eq!(a.power(2)?, a.multiply(&a)?);
        for exponent in 3..=9 {
            assert_eq!(
                a.power(exponent as i32)?,
                repeated_product(&a, exponent)?,
                "exponent {exponent}"
            );
        }
    }
    Ok(())
}

#[test]
fn negative_power_inverts() -> Result<(), LinalgError> {
    let a = Matrix::from([[2.0, 1.0], [1.0, 1.0]]);
    for exponent in 1..=6 {
        let forward = a.power(exponent)?;
        let backward = a.power(-exponent)?;
        assert!(forward
            .multiply(&backward)?
            .approx_eq(&Matrix::identity(2), 1e-9));
    }
    Ok(())
}

#[test]
fn deleting_row_and_column_keeps_remaining_entries() -> Result<(), LinalgError> {
    let mut rng = rand::rng();
    let n = 5;
    let a = random_matrix(&mut rng, n, n, 100);
    for i in 0..n {
        for j in 0..n {
            let reduced = a.delete_row_vector(i)?.delete_column_vector(j)?;
            assert_eq!(reduced.column_length(), n - 1);
            assert_eq!(reduced.row_length(), n - 1);
            for r in 0..n - 1 {
                for c in 0..n - 1 {
                    let src_r = if r < i { r } else { r + 1 };
                    let src_c = if c < j { c } else { c + 1 };
                    assert_eq!(reduced.get(r, c)?, a.get(src_r, src_c)?);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn mismatched_shapes_are_reported() {
    let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert!(matches!(
        a.add(&b),
        Err(LinalgError::DimensionMismatch { op: "add", .. })
    ));
    assert!(matches!(
        a.multiply(&b),
        Err(LinalgError::DimensionMismatch { op: "multiply", .. })
    ));

    let u = Vector::from([1.0, 2.0]);
    let v = Vector::from([1.0, 2.0, 3.0]);
    assert!(matches!(
        u.dot(&v),
        Err(LinalgError::DimensionMismatch { op: "dot", .. })
    ));
    assert!(matches!(
        u.cross(&v),
        Err(LinalgError::InvalidLength { op: "cross", .. })
    ));
}

#[test]
fn errors_name_the_operation() {
    let m = Matrix::from([[1.0, 2.0, 3.0]]);
    let message = m.determinant().unwrap_err().to_string();
    assert_eq!(message, "determinant: matrix is not square (1x3)");

    let message = Vector::from([1.0]).get(4).unwrap_err().to_string();
    assert_eq!(message, "get: index 4 is out of range for length 1");
}
