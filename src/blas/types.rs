//! Дескрипторы плотных матриц для GEMM

use crate::matrix::Matrix;

/// Нужно ли транспонировать операнд перед умножением
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    /// Операнд используется как есть
    NoTrans,
    /// Используется транспонированный операнд
    Trans,
}

impl Transpose {
    pub fn is_transpose(&self) -> bool {
        matches!(self, Transpose::Trans)
    }
}

/// Построчная матрица только для чтения: размеры, шаг строки и плоский буфер
#[derive(Debug, Clone, Copy)]
pub struct General<'a> {
    pub rows: usize,
    pub cols: usize,
    pub stride: usize,
    pub data: &'a [f64],
}

/// Изменяемый дескриптор выходной матрицы
#[derive(Debug)]
pub struct GeneralMut<'a> {
    pub rows: usize,
    pub cols: usize,
    pub stride: usize,
    pub data: &'a mut [f64],
}

impl<'a> From<&'a Matrix> for General<'a> {
    fn from(m: &'a Matrix) -> Self {
        // без выравнивания: шаг строки равен числу столбцов
        General {
            rows: m.rows(),
            cols: m.cols(),
            stride: m.cols(),
            data: m.as_slice(),
        }
    }
}

impl<'a> GeneralMut<'a> {
    /// Плотный дескриптор поверх буфера `rows * cols`
    pub fn dense(rows: usize, cols: usize, data: &'a mut [f64]) -> Self {
        GeneralMut {
            rows,
            cols,
            stride: cols,
            data,
        }
    }
}
