//! Ошибки операций над матрицами

use thiserror::Error;

/// Результат операций над матрицами
pub type Result<T> = std::result::Result<T, MatError>;

/// Ошибки, возникающие при нарушении предусловий операций
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatError {
    /// Размерности операндов несовместимы
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Координаты элемента вне матрицы
    #[error("element ({row}, {col}) is out of range for a {rows}x{cols} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Границы среза не удовлетворяют `from <= to <= len`
    #[error("bad slice bounds {from}..{to} for dimension of size {len}")]
    InvalidRange { from: usize, to: usize, len: usize },

    /// Конкатенация пустого списка матриц
    #[error("can't concatenate an empty list of matrices")]
    EmptyInput,

    /// Ошибка на границе GEMM (некорректный дескриптор)
    #[error("gemm backend error: {0}")]
    Backend(String),
}

impl MatError {
    #[doc(hidden)]
    pub fn product_mismatch(a: (usize, usize), b: (usize, usize)) -> Self {
        MatError::DimensionMismatch(format!(
            "can't compute product of matrices with dimensions {}x{} and {}x{}",
            a.0, a.1, b.0, b.1
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_mismatch_reports_all_dimensions() {
        let err = MatError::product_mismatch((2, 3), (2, 2));
        assert_eq!(
            err.to_string(),
            "dimension mismatch: can't compute product of matrices with dimensions 2x3 and 2x2"
        );
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = MatError::IndexOutOfRange {
            row: 4,
            col: 0,
            rows: 2,
            cols: 2,
        };
        assert_eq!(
            err.to_string(),
            "element (4, 0) is out of range for a 2x2 matrix"
        );
    }

    #[test]
    fn test_invalid_range_message() {
        let err = MatError::InvalidRange { from: 3, to: 1, len: 5 };
        assert_eq!(err.to_string(), "bad slice bounds 3..1 for dimension of size 5");
    }

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            MatError::EmptyInput.to_string(),
            "can't concatenate an empty list of matrices"
        );
    }
}
