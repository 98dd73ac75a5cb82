//! Умножение матриц
//!
//! Три взаимозаменяемые стратегии с общим контрактом:
//! - последовательная (тройной цикл)
//! - параллельная по строкам результата (rayon)
//! - делегированная во внешний GEMM (ndarray)

mod delegated;
mod parallel;
mod sequential;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::matrix::Matrix;

pub use delegated::DelegatedProduct;
pub use parallel::ParallelProduct;
pub use sequential::SequentialProduct;

/// Общий контракт умножения: `a.cols == b.rows`, результат `a.rows x b.cols`
pub trait ProductStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn product(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}

/// Выбор стратегии умножения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Sequential,
    Parallel,
    Delegated,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Sequential, Strategy::Parallel, Strategy::Delegated];

    /// Создает стратегию; для параллельной используется глобальный пул rayon
    pub fn build(self) -> Box<dyn ProductStrategy> {
        match self {
            Strategy::Sequential => Box::new(SequentialProduct),
            Strategy::Parallel => Box::new(ParallelProduct::new()),
            Strategy::Delegated => Box::new(DelegatedProduct),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Sequential => "sequential",
            Strategy::Parallel => "parallel",
            Strategy::Delegated => "delegated",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sequential" => Ok(Strategy::Sequential),
            "parallel" => Ok(Strategy::Parallel),
            "delegated" => Ok(Strategy::Delegated),
            other => Err(format!("unknown product strategy: {}", other)),
        }
    }
}

/// Произведение матриц тройным циклом
pub fn product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    SequentialProduct.product(a, b)
}

/// Произведение матриц, строки результата считаются параллельно
pub fn parallel_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ParallelProduct::new().product(a, b)
}

/// Произведение матриц через `gemm`
pub fn delegated_product(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    DelegatedProduct.product(a, b)
}
