//! Поэлементная алгебра, сравнение и свёртка

use super::types::Matrix;
use crate::ensure_shape;
use crate::error::Result;

/// Точное поэлементное сравнение двух матриц
///
/// Матрицы разных размеров никогда не равны. Допуск не используется.
pub fn equals(a: &Matrix, b: &Matrix) -> bool {
    if a.shape() != b.shape() {
        return false;
    }
    a.data.iter().zip(&b.data).all(|(x, y)| x == y)
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        equals(self, other)
    }
}

fn dot_apply<F>(a: &Matrix, b: &Matrix, op: &str, f: F) -> Result<Matrix>
where
    F: Fn(f64, f64) -> f64,
{
    ensure_shape!(a, b, op);

    let data = a.data.iter().zip(&b.data).map(|(&x, &y)| f(x, y)).collect();
    Ok(Matrix {
        rows: a.rows,
        cols: a.cols,
        data,
    })
}

/// Поэлементное произведение
pub fn dot(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    dot_apply(a, b, "dot", |x, y| x * y)
}

/// Поэлементная сумма
pub fn plus(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    dot_apply(a, b, "plus", |x, y| x + y)
}

/// Поэлементная разность
pub fn minus(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    dot_apply(a, b, "minus", |x, y| x - y)
}

/// Сумма всех элементов
pub fn sum(m: &Matrix) -> f64 {
    m.sum()
}

impl Matrix {
    /// Свёртка по всем ячейкам в построчном порядке
    ///
    /// `f` получает текущую ячейку и накопленное значение.
    pub fn reduce<F>(&self, zero: f64, f: F) -> f64
    where
        F: Fn(f64, f64) -> f64,
    {
        self.data.iter().fold(zero, |cum, &x| f(x, cum))
    }

    pub fn sum(&self) -> f64 {
        self.reduce(0.0, |x, cum| x + cum)
    }
}
