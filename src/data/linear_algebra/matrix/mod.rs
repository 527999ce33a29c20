//! # Upper-triangular matrix
//!
//! A square matrix storing only its upper triangle, built by composing offset
//! vectors: the matrix is a vector of rows, and row `i` is a vector whose logical
//! window starts at `i`.

pub use upper_triangular::UpperTriangular as UpperTriangularMatrix;

mod upper_triangular;

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::error::{Error, OutOfRange, SizeMismatch};
    use crate::data::linear_algebra::matrix::UpperTriangularMatrix;
    use crate::data::linear_algebra::vector::OffsetVector;
    use crate::data::linear_algebra::MAX_MATRIX_SIZE;

    /// An order-4 matrix with every stored cell `[i][j]` set to its row number.
    fn get_test_matrix() -> UpperTriangularMatrix<i32> {
        let mut m = UpperTriangularMatrix::zeros(4).unwrap();
        for i in 0..4 {
            for j in i..4 {
                m[i][j] = i as i32;
            }
        }
        m
    }

    #[test]
    fn zeros_builds_the_triangular_shape() {
        let m = UpperTriangularMatrix::<i32>::zeros(5).unwrap();

        assert_eq!(m.order(), 5);
        for i in 0..5 {
            let row = m.row(i).unwrap();
            assert_eq!(row.len(), 5 - i);
            assert_eq!(row.start_index(), i);
            assert!(row.iter_values().all(|value| *value == 0));
        }
    }

    #[test]
    fn zeros_can_be_empty() {
        let m = UpperTriangularMatrix::<i32>::zeros(0).unwrap();

        assert!(m.is_empty());
    }

    #[test]
    fn zeros_rejects_excessive_order() {
        let result = UpperTriangularMatrix::<i32>::zeros(MAX_MATRIX_SIZE + 1);

        assert_eq!(
            result.unwrap_err(),
            Error::OutOfRange(OutOfRange::Size {
                requested: MAX_MATRIX_SIZE + 1,
                maximum: MAX_MATRIX_SIZE,
            }),
        );
    }

    #[test]
    fn cells_can_be_set_and_read_back() {
        let mut m = UpperTriangularMatrix::<i32>::zeros(5).unwrap();
        *m.get_mut(1, 3).unwrap() = 4;

        assert_eq!(m.get(1, 3), Ok(&4));
        assert_eq!(m[1][3], 4);
    }

    #[test]
    fn the_lower_triangle_is_not_addressable() {
        let m = UpperTriangularMatrix::<i32>::zeros(4).unwrap();

        // Row 2 starts at logical index 2.
        assert_eq!(
            m.get(2, 1),
            Err(Error::OutOfRange(OutOfRange::Index { index: 1, start: 2, end: 4 })),
        );
        assert_eq!(
            m.get(4, 0),
            Err(Error::OutOfRange(OutOfRange::Index { index: 4, start: 0, end: 4 })),
        );
    }

    #[test]
    #[should_panic]
    fn indexing_the_lower_triangle_panics() {
        let m = get_test_matrix();

        let _ = m[3][0];
    }

    #[test]
    fn copies_are_equal_and_independent() {
        let m = UpperTriangularMatrix::<i32>::zeros(4).unwrap();
        let mut copy = m.clone();
        assert_eq!(m, copy);
        assert_eq!(m, m);

        copy[3][3] = 2;
        assert_ne!(m[3][3], copy[3][3]);
        assert_eq!(m[3][3], 0);
    }

    #[test]
    fn matrices_of_different_order_are_unequal() {
        let m = UpperTriangularMatrix::<i32>::zeros(2).unwrap();
        let w = UpperTriangularMatrix::<i32>::zeros(5).unwrap();

        assert_ne!(m, w);
    }

    #[test]
    fn clone_from_reshapes_the_receiver() {
        let source = UpperTriangularMatrix::<i32>::zeros(5).unwrap();
        let mut receiver = UpperTriangularMatrix::<i32>::zeros(2).unwrap();
        receiver[0][1] = 4;
        receiver.clone_from(&source);

        assert_eq!(receiver.order(), 5);
        assert_eq!(receiver, source);
        for i in 0..5 {
            assert_eq!(receiver.row(i).unwrap().len(), 5 - i);
            assert_eq!(receiver.row(i).unwrap().start_index(), i);
        }
    }

    #[test]
    fn addition_is_cell_wise() {
        let mut m = UpperTriangularMatrix::zeros(4).unwrap();
        let mut w = UpperTriangularMatrix::zeros(4).unwrap();
        for i in 0..4 {
            for j in i..4 {
                m[i][j] = i as i32;
                w[i][j] = j as i32;
            }
        }

        let sum = m.try_add(&w).unwrap();
        assert_eq!(sum.order(), 4);
        for i in 0..4 {
            for j in i..4 {
                assert_eq!(sum[i][j], (i + j) as i32);
            }
        }
    }

    #[test]
    fn subtraction_is_cell_wise() {
        let mut m = UpperTriangularMatrix::zeros(4).unwrap();
        let mut w = UpperTriangularMatrix::zeros(4).unwrap();
        for i in 0..4 {
            for j in i..4 {
                m[i][j] = j as i32;
                w[i][j] = i as i32;
            }
        }

        let difference = m.try_sub(&w).unwrap();
        for i in 0..4 {
            for j in i..4 {
                assert_eq!(difference[i][j], (j - i) as i32);
            }
        }
    }

    #[test]
    fn combining_different_orders_is_rejected() {
        let m = UpperTriangularMatrix::<i32>::zeros(4).unwrap();
        let w = UpperTriangularMatrix::<i32>::zeros(6).unwrap();

        let expected = Error::SizeMismatch(SizeMismatch { left: 4, right: 6 });
        assert_eq!(m.try_add(&w).unwrap_err(), expected);
        assert_eq!(m.try_sub(&w).unwrap_err(), expected);
    }

    #[test]
    fn an_outer_vector_is_adopted_unchecked() {
        let rows = OffsetVector::from_parts(
            vec![
                OffsetVector::from_parts(vec![1, 2], 0).unwrap(),
                OffsetVector::from_parts(vec![3], 1).unwrap(),
            ],
            0,
        ).unwrap();

        let m = UpperTriangularMatrix::from(rows);
        assert_eq!(m.order(), 2);
        assert_eq!(m[0][1], 2);
        assert_eq!(m[1][1], 3);
    }

    #[test]
    fn display_prints_one_row_per_line() {
        let m = get_test_matrix();

        assert_eq!(m.to_string(), "0 0 0 0\n1 1 1\n2 2\n3\n");
    }

    #[test]
    fn read_tokens_fills_row_by_row() {
        let mut m = UpperTriangularMatrix::<i32>::zeros(3).unwrap();
        m.read_tokens(&mut "1 2 3 4 5 6".split_whitespace()).unwrap();

        assert_eq!(m[0][0], 1);
        assert_eq!(m[0][2], 3);
        assert_eq!(m[1][1], 4);
        assert_eq!(m[2][2], 6);
    }

    #[test]
    fn read_tokens_rejects_truncated_input() {
        let mut m = UpperTriangularMatrix::<i32>::zeros(3).unwrap();
        let result = m.read_tokens(&mut "1 2 3 4".split_whitespace());

        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
