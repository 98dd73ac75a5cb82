//! Свойства матричных операций на случайных входах

use dense_mat::{
    concatenate_cols, concatenate_rows, delegated_product, equals, minus, parallel_product, plus,
    product, Matrix,
};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (usize, usize)> {
    (0usize..8, 0usize..8)
}

fn matrix() -> impl Strategy<Value = Matrix> {
    dims().prop_flat_map(|(rows, cols)| {
        prop::collection::vec(-1e3f64..1e3, rows * cols)
            .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
    })
}

/// Целочисленные значения: любой порядок суммирования даёт точный результат
fn integer_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
    (0usize..7, 0usize..7, 0usize..7).prop_flat_map(|(m, k, n)| {
        (
            prop::collection::vec(-50i32..50, m * k),
            prop::collection::vec(-50i32..50, k * n),
        )
            .prop_map(move |(a, b)| {
                let a = a.into_iter().map(f64::from).collect();
                let b = b.into_iter().map(f64::from).collect();
                (
                    Matrix::from_vec(m, k, a).unwrap(),
                    Matrix::from_vec(k, n, b).unwrap(),
                )
            })
    })
}

proptest! {
    #[test]
    fn prop_new_is_zero((rows, cols) in dims()) {
        let m = Matrix::new(rows, cols);
        prop_assert_eq!(m.rows(), rows);
        prop_assert_eq!(m.cols(), cols);
        prop_assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn prop_double_transpose(m in matrix()) {
        prop_assert_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn prop_transpose_moves_cells(m in matrix()) {
        let t = m.transpose();
        prop_assert_eq!(t.shape(), (m.cols(), m.rows()));
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                prop_assert_eq!(t.at(j, i).unwrap(), m.at(i, j).unwrap());
            }
        }
    }

    #[test]
    fn prop_slice_concat_cols_round_trip(m in matrix(), split in 0usize..8) {
        let k = split.min(m.cols());
        let left = m.slice_cols(0, k).unwrap();
        let right = m.slice_cols(k, m.cols()).unwrap();
        prop_assert_eq!(concatenate_cols(&[left, right]).unwrap(), m);
    }

    #[test]
    fn prop_slice_concat_rows_round_trip(m in matrix(), split in 0usize..8) {
        let k = split.min(m.rows());
        let top = m.slice_rows(0, k).unwrap();
        let bottom = m.slice_rows(k, m.rows()).unwrap();
        prop_assert_eq!(concatenate_rows(&[top, bottom]).unwrap(), m);
    }

    #[test]
    fn prop_equals_reflexive_and_symmetric(a in matrix(), b in matrix()) {
        prop_assert!(equals(&a, &a));
        prop_assert_eq!(equals(&a, &b), equals(&b, &a));
        if a.shape() != b.shape() {
            prop_assert!(!equals(&a, &b));
        }
    }

    #[test]
    fn prop_strategies_agree_on_integers((a, b) in integer_pair()) {
        let seq = product(&a, &b).unwrap();
        prop_assert_eq!(seq.shape(), (a.rows(), b.cols()));
        prop_assert_eq!(&parallel_product(&a, &b).unwrap(), &seq);
        prop_assert_eq!(&delegated_product(&a, &b).unwrap(), &seq);
    }

    #[test]
    fn prop_plus_minus_inverse(m in matrix()) {
        let doubled = plus(&m, &m).unwrap();
        prop_assert_eq!(minus(&doubled, &m).unwrap(), m.clone());
        prop_assert_eq!(m.scale(2.0), doubled);
    }

    #[test]
    fn prop_sum_matches_iterator(m in matrix()) {
        let expected = m.as_slice().iter().fold(0.0, |cum, &x| x + cum);
        prop_assert_eq!(m.sum(), expected);
    }
}
