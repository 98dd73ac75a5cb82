//! Последовательное умножение тройным циклом

use tracing::debug;

use super::ProductStrategy;
use crate::ensure_conformant;
use crate::error::Result;
use crate::matrix::Matrix;

/// Наивное умножение: `i` снаружи, `j` в середине, накопление по `k` внутри
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialProduct;

/// Заполняет строку `i` результата
///
/// Порядок накопления одинаков для последовательной и параллельной стратегий,
/// поэтому их результаты совпадают побитово.
#[inline]
pub(super) fn product_row(a: &Matrix, b: &Matrix, i: usize, out: &mut [f64]) {
    let a_row = a.row(i);
    for (j, cell) in out.iter_mut().enumerate() {
        let mut p = 0.0;
        for (k, &x) in a_row.iter().enumerate() {
            p += x * b.cell(k, j);
        }
        *cell = p;
    }
}

impl ProductStrategy for SequentialProduct {
    fn name(&self) -> &'static str {
        "sequential"
    }

    fn product(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        ensure_conformant!(a, b);
        debug!(
            "sequential product {}x{} * {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );

        let (rows, cols) = (a.rows(), b.cols());
        let mut data = vec![0.0; rows * cols];
        for i in 0..rows {
            product_row(a, b, i, &mut data[i * cols..(i + 1) * cols]);
        }
        Matrix::from_vec(rows, cols, data)
    }
}
