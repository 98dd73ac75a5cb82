//! Граница с внешней плотной линейной алгеброй
//!
//! Матрица передаётся как дескриптор `{rows, cols, stride, data}`,
//! умножение выполняет `ndarray::linalg::general_mat_mul`.

pub mod bindings;
pub mod types;

pub use bindings::gemm;
pub use types::{General, GeneralMut, Transpose};
