//! Конфигурация сравнения стратегий умножения

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::product::{ParallelProduct, ProductStrategy, Strategy};

/// Тип матриц для вычислений
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatrixType {
    /// Матрицы заполненные 1 и 2
    OnesAndTwos,
    /// Матрицы заполненные 3 и 4
    ThreesAndFours,
    /// Случайно заполненные матрицы
    Random,
}

/// Параметры запуска сравнения
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    /// Размер квадратных операндов
    pub size: usize,
    pub matrix_type: MatrixType,
    /// Число повторов для каждой стратегии
    pub iterations: u32,
    /// Размер пула для параллельной стратегии; `None` означает глобальный пул rayon
    pub threads: Option<usize>,
    pub strategies: Vec<Strategy>,
    /// Допустимая разница с последовательным результатом
    pub tolerance: f64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            size: 256,
            matrix_type: MatrixType::Random,
            iterations: 3,
            threads: None,
            strategies: Strategy::ALL.to_vec(),
            tolerance: 1e-9,
        }
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid value {:?} for {}", value, name))
}

impl BenchConfig {
    /// Читает конфигурацию из JSON-файла
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Файл (если указан), затем переопределения из окружения
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Применяет `DENSE_MAT_SIZE`, `DENSE_MAT_ITERATIONS`, `DENSE_MAT_THREADS`
    pub fn apply_overrides<F>(&mut self, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = var("DENSE_MAT_SIZE") {
            self.size = parse_var("DENSE_MAT_SIZE", &v)?;
        }
        if let Some(v) = var("DENSE_MAT_ITERATIONS") {
            self.iterations = parse_var("DENSE_MAT_ITERATIONS", &v)?;
        }
        if let Some(v) = var("DENSE_MAT_THREADS") {
            self.threads = Some(parse_var("DENSE_MAT_THREADS", &v)?);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            anyhow::bail!("iterations must be at least 1");
        }
        if self.strategies.is_empty() {
            anyhow::bail!("at least one product strategy is required");
        }
        if self.threads == Some(0) {
            anyhow::bail!("threads must be positive");
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            anyhow::bail!("tolerance must be non-negative, got {}", self.tolerance);
        }
        Ok(())
    }

    /// Создает стратегию с учётом настроек пула
    pub fn strategy(&self, strategy: Strategy) -> Result<Box<dyn ProductStrategy>> {
        match (strategy, self.threads) {
            (Strategy::Parallel, Some(threads)) => {
                let parallel = ParallelProduct::with_threads(threads)
                    .context("failed to build rayon thread pool")?;
                Ok(Box::new(parallel))
            }
            (other, _) => Ok(other.build()),
        }
    }
}
