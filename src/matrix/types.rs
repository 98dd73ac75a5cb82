//! Представление матрицы и базовые конструкторы

use serde::{Deserialize, Serialize};

use crate::error::{MatError, Result};

/// Плотная матрица `f64`, хранящаяся построчно (row-major)
///
/// Элемент `(i, j)` лежит по смещению `i * cols + j`, длина буфера всегда
/// равна `rows * cols`. Матрица неизменяема: все «изменяющие» операции
/// возвращают новую матрицу со своим буфером.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) data: Vec<f64>,
}

/// Десериализованная, но ещё не проверенная матрица
#[derive(Deserialize)]
struct RawMatrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl TryFrom<RawMatrix> for Matrix {
    type Error = MatError;

    fn try_from(raw: RawMatrix) -> Result<Self> {
        Matrix::from_vec(raw.rows, raw.cols, raw.data)
    }
}

impl Matrix {
    /// Создает матрицу заданного размера, заполненную нулями
    pub fn new(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    /// Создает матрицу из копии среза
    pub fn from_slice(rows: usize, cols: usize, data: &[f64]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// Создает матрицу, забирая владение буфером без копирования
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = rows.checked_mul(cols).ok_or_else(|| {
            MatError::DimensionMismatch(format!("{} x {} overflows the cell count", rows, cols))
        })?;
        if data.len() != len {
            return Err(MatError::DimensionMismatch(format!(
                "mismatched dimensions and data: {} x {} != {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Создает матрицу, вызывая `f(i, j)` для каждой ячейки
    ///
    /// Ячейки обходятся построчно, но полагаться на порядок вызовов
    /// можно только для чистых `f`: генераторы с состоянием не поддерживаются.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Размерность в виде `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Количество ячеек
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn check_pos(&self, i: usize, j: usize) -> Result<()> {
        if i >= self.rows || j >= self.cols {
            return Err(MatError::IndexOutOfRange {
                row: i,
                col: j,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Значение ячейки `(i, j)`
    pub fn at(&self, i: usize, j: usize) -> Result<f64> {
        self.check_pos(i, j)?;
        Ok(self.cell(i, j))
    }

    /// Возвращает копию матрицы, в которой ячейка `(i, j)` равна `x`
    pub fn set(&self, i: usize, j: usize, x: f64) -> Result<Matrix> {
        self.check_pos(i, j)?;
        let mut r = self.clone();
        r.data[i * r.cols + j] = x;
        Ok(r)
    }

    /// Буфер матрицы в построчном порядке
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    pub(crate) fn cell(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.cols + j]
    }

    #[inline]
    pub(crate) fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }
}
