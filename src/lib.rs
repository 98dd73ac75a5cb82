//! Неизменяемые плотные матрицы с тремя стратегиями умножения

pub mod blas;
pub mod config;
pub mod error;
pub mod matrix;
pub mod product;
pub mod utils;

// Реэкспортируем макросы на уровень крейта
#[macro_use]
mod macros {
    /// Макрос для проверки совпадения размерностей двух матриц
    #[macro_export]
    macro_rules! ensure_shape {
        ($a:expr, $b:expr, $op:expr) => {
            if $a.shape() != $b.shape() {
                return Err($crate::MatError::DimensionMismatch(format!(
                    "can't compute {} of matrices with dimensions {}x{} and {}x{}",
                    $op,
                    $a.rows(),
                    $a.cols(),
                    $b.rows(),
                    $b.cols()
                )));
            }
        };
    }

    /// Макрос для проверки согласованности операндов произведения (`a.cols == b.rows`)
    #[macro_export]
    macro_rules! ensure_conformant {
        ($a:expr, $b:expr) => {
            if $a.cols() != $b.rows() {
                return Err($crate::MatError::product_mismatch($a.shape(), $b.shape()));
            }
        };
    }
}

// Реэкспорт основных типов для удобства
pub use error::{MatError, Result};
pub use matrix::{
    concatenate_cols, concatenate_rows, dot, equals, map, minus, plus, sum, Matrix,
};
pub use product::{
    delegated_product, parallel_product, product, DelegatedProduct, ParallelProduct,
    ProductStrategy, SequentialProduct, Strategy,
};
