//! Умножение через внешнюю процедуру GEMM

use tracing::debug;

use super::ProductStrategy;
use crate::blas::{gemm, General, GeneralMut, Transpose};
use crate::ensure_conformant;
use crate::error::Result;
use crate::matrix::Matrix;

/// Делегирует умножение `gemm` с `alpha = 1`, `beta = 0`
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatedProduct;

impl ProductStrategy for DelegatedProduct {
    fn name(&self) -> &'static str {
        "delegated"
    }

    fn product(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        ensure_conformant!(a, b);
        debug!(
            "delegated product {}x{} * {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );

        let (rows, cols) = (a.rows(), b.cols());
        let mut data = vec![0.0; rows * cols];
        gemm(
            Transpose::NoTrans,
            Transpose::NoTrans,
            1.0,
            General::from(a),
            General::from(b),
            0.0,
            GeneralMut::dense(rows, cols, &mut data),
        )?;
        Matrix::from_vec(rows, cols, data)
    }
}
