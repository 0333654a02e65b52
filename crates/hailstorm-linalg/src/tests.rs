//! Integration tests for hailstorm-linalg.

#[cfg(test)]
mod integration_tests {
    use hailstorm_integers::Rational;

    use crate::dense_matrix::DenseMatrix;
    use crate::error::LinalgError;
    use crate::system::{Equation, LinearSystem};

    fn q(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn test_hilbert_inverse_column() {
        // Hilbert matrices are the classic floating-point failure case.
        let n: i64 = 6;
        let rows = (1..=n)
            .map(|i| (1..=n).map(|j| Rational::from_i64(1, i + j - 1)).collect())
            .collect();
        let h = DenseMatrix::from_rows(rows).unwrap();
        let ones = vec![q(1); 6];
        let b = h.mv(&ones).unwrap();

        assert_eq!(h.solve(&b).unwrap(), ones);
    }

    #[test]
    fn test_large_coefficients_exact() {
        // Coefficients around 10^14 with a solution around 10^14.
        let a = [
            [181_274_863_478_376_i64, -104, 3],
            [226_461_907_371_205, 54, -49],
            [347_320_263_466_693, -63, 26],
        ];
        let x = [q(131_246_724_405_205), q(-184), q(277_550_172_142_625)];
        let matrix = DenseMatrix::from_rows(
            a.iter()
                .map(|row| row.iter().map(|&v| q(v)).collect())
                .collect(),
        )
        .unwrap();
        let b = matrix.mv(&x).unwrap();

        assert_eq!(matrix.solve(&b).unwrap(), x.to_vec());
    }

    #[test]
    fn test_system_and_matrix_agree() {
        let mut system = LinearSystem::new(['a', 'b', 'c']);
        system.push(Equation::new(1).with_term('a', 2).with_term('c', 1));
        system.push(Equation::new(4).with_term('b', -1).with_term('a', 1));
        system.push(Equation::new(0).with_term('c', 3).with_term('b', 1));

        let (matrix, rhs) = system.to_matrix().unwrap();
        let via_matrix = matrix.solve(&rhs).unwrap();
        let via_system = system.solve().unwrap();

        for (col, unknown) in system.unknowns().iter().enumerate() {
            assert_eq!(via_system.get(unknown), Some(&via_matrix[col]));
        }
    }

    #[test]
    fn test_singular_system_reports_rank() {
        let mut system = LinearSystem::new(["x", "y", "z"]);
        system.push(Equation::new(1).with_term("x", 1).with_term("y", 1));
        system.push(Equation::new(2).with_term("x", 2).with_term("y", 2));
        system.push(Equation::new(3).with_term("z", 1));

        assert_eq!(
            system.solve(),
            Err(LinalgError::Singular { rank: 2, size: 3 })
        );
    }
}

#[cfg(test)]
mod proptest_tests {
    use hailstorm_integers::Rational;
    use proptest::prelude::*;

    use crate::dense_matrix::DenseMatrix;
    use crate::error::LinalgError;

    fn entries(n: usize) -> impl Strategy<Value = Vec<i64>> {
        prop::collection::vec(-50i64..50i64, n)
    }

    proptest! {
        #[test]
        fn solve_recovers_known_solution(
            a in entries(16),
            x in prop::collection::vec(-1_000_000_000_000i64..1_000_000_000_000i64, 4)
        ) {
            let matrix = DenseMatrix::from_rows(
                a.chunks(4)
                    .map(|row| row.iter().map(|&v| Rational::from(v)).collect())
                    .collect(),
            )
            .unwrap();
            let x: Vec<Rational> = x.into_iter().map(Rational::from).collect();
            let b = matrix.mv(&x).unwrap();

            match matrix.solve(&b) {
                Ok(solved) => {
                    prop_assert_ne!(matrix.det().unwrap(), Rational::from(0));
                    prop_assert_eq!(solved, x);
                }
                Err(LinalgError::Singular { rank, size }) => {
                    prop_assert!(rank < size);
                    prop_assert_eq!(matrix.det().unwrap(), Rational::from(0));
                }
                Err(other) => prop_assert!(false, "unexpected error {other}"),
            }
        }
    }
}
