//! Структурные операции над матрицами

use super::types::Matrix;
use crate::error::{MatError, Result};

/// Возвращает новую матрицу, где каждая ячейка равна `f` от исходной
pub fn map<F>(f: F, m: &Matrix) -> Matrix
where
    F: Fn(f64) -> f64,
{
    let mut r = m.clone();
    for v in r.data.iter_mut() {
        *v = f(*v);
    }
    r
}

/// Склеивает матрицы по столбцам (бок о бок)
///
/// У всех матриц должно быть одинаковое число строк; столбцы результата
/// идут в порядке аргументов.
pub fn concatenate_cols(ms: &[Matrix]) -> Result<Matrix> {
    let first = ms.first().ok_or(MatError::EmptyInput)?;

    let rows = first.rows;
    let mut cols = 0;
    for m in ms {
        if m.rows != rows {
            return Err(MatError::DimensionMismatch(format!(
                "can't concatenate columns on matrices with different number of rows ({} and {})",
                rows, m.rows
            )));
        }
        cols += m.cols;
    }

    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        for m in ms {
            data.extend_from_slice(m.row(i));
        }
    }
    Ok(Matrix { rows, cols, data })
}

/// Склеивает матрицы по строкам (одна под другой)
///
/// У всех матриц должно быть одинаковое число столбцов.
pub fn concatenate_rows(ms: &[Matrix]) -> Result<Matrix> {
    let first = ms.first().ok_or(MatError::EmptyInput)?;

    let cols = first.cols;
    let mut rows = 0;
    for m in ms {
        if m.cols != cols {
            return Err(MatError::DimensionMismatch(format!(
                "can't concatenate rows on matrices with different number of cols ({} and {})",
                cols, m.cols
            )));
        }
        rows += m.rows;
    }

    let mut data = Vec::with_capacity(rows * cols);
    for m in ms {
        data.extend_from_slice(&m.data);
    }
    Ok(Matrix { rows, cols, data })
}

fn check_range(from: usize, to: usize, len: usize) -> Result<()> {
    if to > len || to < from {
        return Err(MatError::InvalidRange { from, to, len });
    }
    Ok(())
}

impl Matrix {
    /// Умножает каждую ячейку на `x`
    pub fn scale(&self, x: f64) -> Matrix {
        map(|v| x * v, self)
    }

    /// Прибавляет `x` к каждой ячейке
    pub fn add_scalar(&self, x: f64) -> Matrix {
        map(|v| x + v, self)
    }

    /// Матрица того же размера, где ячейка `(i, j)` равна `f(i, j)`
    pub fn apply<F>(&self, f: F) -> Matrix
    where
        F: FnMut(usize, usize) -> f64,
    {
        Matrix::from_fn(self.rows, self.cols, f)
    }

    /// Столбцы в полуинтервале `[from, to)`
    pub fn slice_cols(&self, from: usize, to: usize) -> Result<Matrix> {
        check_range(from, to, self.cols)?;

        let mut data = Vec::with_capacity(self.rows * (to - from));
        for i in 0..self.rows {
            data.extend_from_slice(&self.row(i)[from..to]);
        }
        Ok(Matrix {
            rows: self.rows,
            cols: to - from,
            data,
        })
    }

    /// Строки в полуинтервале `[from, to)`
    pub fn slice_rows(&self, from: usize, to: usize) -> Result<Matrix> {
        check_range(from, to, self.rows)?;

        let data = self.data[from * self.cols..to * self.cols].to_vec();
        Ok(Matrix {
            rows: to - from,
            cols: self.cols,
            data,
        })
    }

    /// Оставляет только строки, для индекса которых `f` вернула `true`
    ///
    /// `f` вызывается ровно один раз для каждой строки по возрастанию индекса.
    pub fn filter_rows<F>(&self, mut f: F) -> Matrix
    where
        F: FnMut(usize) -> bool,
    {
        let mut rows = 0;
        let mut data = Vec::new();
        for i in 0..self.rows {
            if f(i) {
                data.extend_from_slice(self.row(i));
                rows += 1;
            }
        }
        Matrix {
            rows,
            cols: self.cols,
            data,
        }
    }

    /// Транспонированная матрица
    pub fn transpose(&self) -> Matrix {
        let mut t = Matrix::new(self.cols, self.rows);
        for i in 0..self.rows {
            let src = self.row(i);
            for (j, &v) in src.iter().enumerate() {
                t.data[j * self.rows + i] = v;
            }
        }
        t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: usize, cols: usize, x: f64) -> Matrix {
        Matrix::new(rows, cols).add_scalar(x)
    }

    #[test]
    fn test_scale_and_add_scalar() {
        let m = Matrix::new(2, 3).add_scalar(1.0);
        assert!(m.as_slice().iter().all(|&x| x == 1.0));

        let s = m.scale(std::f64::consts::PI);
        assert!(s.as_slice().iter().all(|&x| x == std::f64::consts::PI));
        // исходная матрица не изменилась
        assert!(m.as_slice().iter().all(|&x| x == 1.0));
    }

    #[test]
    fn test_apply_uses_indices() {
        let m = Matrix::new(2, 2).apply(|i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m.as_slice(), &[1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_concatenate_cols_layout() {
        let m = concatenate_cols(&[filled(3, 1, 1.0), filled(3, 2, 2.0), filled(3, 3, 3.0)])
            .unwrap();
        assert_eq!(m.shape(), (3, 6));
        for i in 0..3 {
            assert_eq!(m.row(i), &[1.0, 2.0, 2.0, 3.0, 3.0, 3.0]);
        }
    }

    #[test]
    fn test_concatenate_cols_errors() {
        assert_eq!(concatenate_cols(&[]).unwrap_err(), MatError::EmptyInput);
        let err = concatenate_cols(&[filled(3, 1, 1.0), filled(2, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, MatError::DimensionMismatch(_)));
    }

    #[test]
    fn test_concatenate_rows_layout() {
        let m = concatenate_rows(&[filled(1, 3, 1.0), filled(2, 3, 2.0), filled(3, 3, 3.0)])
            .unwrap();
        assert_eq!(m.shape(), (6, 3));
        assert_eq!(m.row(0), &[1.0; 3]);
        assert_eq!(m.row(2), &[2.0; 3]);
        assert_eq!(m.row(5), &[3.0; 3]);
    }

    #[test]
    fn test_concatenate_rows_errors() {
        assert_eq!(concatenate_rows(&[]).unwrap_err(), MatError::EmptyInput);
        let err = concatenate_rows(&[filled(1, 3, 1.0), filled(1, 2, 1.0)]).unwrap_err();
        assert!(matches!(err, MatError::DimensionMismatch(_)));
    }

    #[test]
    fn test_slice_cols() {
        let m = concatenate_cols(&[filled(3, 1, 1.0), filled(3, 2, 2.0), filled(3, 3, 3.0)])
            .unwrap();
        assert_eq!(m.slice_cols(0, 1).unwrap(), filled(3, 1, 1.0));
        assert_eq!(m.slice_cols(1, 3).unwrap(), filled(3, 2, 2.0));
        assert_eq!(m.slice_cols(3, 6).unwrap(), filled(3, 3, 3.0));
        assert_eq!(m.slice_cols(4, 4).unwrap().shape(), (3, 0));
    }

    #[test]
    fn test_slice_rows() {
        let m = concatenate_rows(&[filled(1, 3, 1.0), filled(2, 3, 2.0), filled(3, 3, 3.0)])
            .unwrap();
        assert_eq!(m.slice_rows(0, 1).unwrap(), filled(1, 3, 1.0));
        assert_eq!(m.slice_rows(1, 3).unwrap(), filled(2, 3, 2.0));
        assert_eq!(m.slice_rows(3, 6).unwrap(), filled(3, 3, 3.0));
        assert_eq!(m.slice_rows(6, 6).unwrap().shape(), (0, 3));
    }

    #[test]
    fn test_slice_bad_bounds() {
        let m = filled(2, 4, 1.0);
        assert_eq!(
            m.slice_cols(3, 1).unwrap_err(),
            MatError::InvalidRange { from: 3, to: 1, len: 4 }
        );
        assert_eq!(
            m.slice_rows(0, 3).unwrap_err(),
            MatError::InvalidRange { from: 0, to: 3, len: 2 }
        );
    }

    #[test]
    fn test_filter_rows_keeps_odd() {
        let ms: Vec<Matrix> = (1..=6).map(|x| filled(1, 3, x as f64)).collect();
        let m = concatenate_rows(&ms).unwrap();

        let mut seen = Vec::new();
        let res = m.filter_rows(|i| {
            seen.push(i);
            i % 2 == 1
        });
        assert_eq!(seen, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(res.shape(), (3, 3));
        assert_eq!(res.row(0), &[2.0; 3]);
        assert_eq!(res.row(1), &[4.0; 3]);
        assert_eq!(res.row(2), &[6.0; 3]);

        assert_eq!(m.filter_rows(|_| false).shape(), (0, 3));
    }

    #[test]
    fn test_transpose() {
        let m = Matrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.as_slice(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(t.transpose(), m);
        assert_eq!(Matrix::new(0, 4).transpose().shape(), (4, 0));
    }
}
