//! Вспомогательные функции и утилиты

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{info, warn};

use crate::config::MatrixType;
use crate::matrix::Matrix;

/// Измеряет время выполнения функции
pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    (result, duration)
}

/// Инициализирует квадратные матрицы заданного типа и размера
pub fn initialize_matrices(matrix_type: MatrixType, size: usize) -> (Matrix, Matrix) {
    match matrix_type {
        MatrixType::OnesAndTwos => (
            Matrix::new(size, size).add_scalar(1.0),
            Matrix::new(size, size).add_scalar(2.0),
        ),
        MatrixType::ThreesAndFours => (
            Matrix::new(size, size).add_scalar(3.0),
            Matrix::new(size, size).add_scalar(4.0),
        ),
        MatrixType::Random => {
            let mut rng = rand::thread_rng();
            let a = Matrix::from_fn(size, size, |_, _| rng.gen_range(0.0..1.0));
            let b = Matrix::from_fn(size, size, |_, _| rng.gen_range(0.0..1.0));
            (a, b)
        }
    }
}

/// Максимальная поэлементная разница; `None`, если размеры не совпадают
pub fn max_abs_diff(result: &Matrix, reference: &Matrix) -> Option<f64> {
    if result.shape() != reference.shape() {
        return None;
    }
    let diff = result
        .as_slice()
        .iter()
        .zip(reference.as_slice())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max);
    Some(diff)
}

/// Сравнивает результат с эталоном с допуском `epsilon`
pub fn compare_results(result: &Matrix, reference: &Matrix, epsilon: f64) -> bool {
    match max_abs_diff(result, reference) {
        None => {
            warn!(
                "Размеры не совпадают: {:?} и {:?}",
                result.shape(),
                reference.shape()
            );
            false
        }
        Some(diff) if diff > epsilon => {
            let diff_count = result
                .as_slice()
                .iter()
                .zip(reference.as_slice())
                .filter(|(x, y)| (*x - *y).abs() > epsilon)
                .count();
            warn!(
                "Обнаружены расхождения: {} элементов, максимальная разница {}",
                diff_count, diff
            );
            false
        }
        Some(_) => {
            info!("Результаты совпадают");
            true
        }
    }
}
