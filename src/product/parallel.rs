//! Параллельное умножение: одна задача на строку результата

use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::debug;

use super::sequential::product_row;
use super::ProductStrategy;
use crate::ensure_conformant;
use crate::error::Result;
use crate::matrix::Matrix;

/// Построчно-параллельное умножение на пуле rayon
///
/// Каждая задача владеет своей строкой выходного буфера, входные матрицы
/// только читаются, поэтому синхронизация не нужна. Вызов блокируется до
/// завершения всех задач.
///
/// «Задача» здесь означает элемент работы rayon: планировщик может выполнить
/// несколько строк в одном задании.
#[derive(Debug, Clone, Default)]
pub struct ParallelProduct {
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelProduct {
    /// Стратегия на глобальном пуле rayon
    pub fn new() -> Self {
        Self::default()
    }

    /// Стратегия на собственном пуле из `threads` потоков
    pub fn with_threads(threads: usize) -> std::result::Result<Self, ThreadPoolBuildError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("dense-mat-{}", i))
            .build()?;
        Ok(ParallelProduct {
            pool: Some(Arc::new(pool)),
        })
    }

    fn fill(a: &Matrix, b: &Matrix, data: &mut [f64]) {
        data.par_chunks_mut(b.cols())
            .enumerate()
            .for_each(|(i, row)| product_row(a, b, i, row));
    }
}

impl ProductStrategy for ParallelProduct {
    fn name(&self) -> &'static str {
        "parallel"
    }

    fn product(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        ensure_conformant!(a, b);
        debug!(
            "parallel product {}x{} * {}x{}",
            a.rows(),
            a.cols(),
            b.rows(),
            b.cols()
        );

        let (rows, cols) = (a.rows(), b.cols());
        let mut data = vec![0.0; rows * cols];
        // пустой результат: задачи не запускаем
        if !data.is_empty() {
            match &self.pool {
                Some(pool) => pool.install(|| Self::fill(a, b, &mut data)),
                None => Self::fill(a, b, &mut data),
            }
        }
        Matrix::from_vec(rows, cols, data)
    }
}
