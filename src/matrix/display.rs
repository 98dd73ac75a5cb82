//! Текстовое представление матрицы

use std::fmt;

use super::types::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for v in self.row(i) {
                write!(f, "{:10.2} ", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
