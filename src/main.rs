//! Сравнение стратегий умножения матриц

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dense_mat::{
    config::BenchConfig,
    utils::{compare_results, initialize_matrices, measure_time},
    Matrix, Strategy,
};
use indicatif::{ProgressBar, ProgressStyle};
use prettytable::{Table, row};
use tracing::info;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Логирование в stdout; уровень задаётся через `RUST_LOG`, по умолчанию `info`
fn init_subscriber() {
    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt::layer().with_target(false))
        .init();
}

/// Итог запуска одной стратегии
struct Run {
    strategy: Strategy,
    mean: Duration,
    matches: bool,
}

fn run_strategy(
    config: &BenchConfig,
    strategy: Strategy,
    a: &Matrix,
    b: &Matrix,
    reference: &Matrix,
) -> Result<Run> {
    let product = config.strategy(strategy)?;

    let pb = ProgressBar::new(config.iterations as u64);
    pb.set_style(
        ProgressStyle::with_template("{prefix:>10} [{bar:40}] {pos}/{len} {elapsed}")?
            .progress_chars("##-"),
    );
    pb.set_prefix(product.name());

    let mut total = Duration::ZERO;
    let mut last = None;
    for _ in 0..config.iterations {
        let (result, elapsed) = measure_time(|| product.product(a, b));
        total += elapsed;
        last = Some(result.with_context(|| format!("{} product failed", strategy))?);
        pb.inc(1);
    }
    pb.finish_and_clear();

    let result = last.context("no iterations were run")?;
    let mean = total / config.iterations;
    info!("{}: среднее время {:?}", strategy, mean);

    Ok(Run {
        strategy,
        mean,
        matches: compare_results(&result, reference, config.tolerance),
    })
}

fn main() -> Result<()> {
    init_subscriber();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = BenchConfig::load(config_path.as_deref())?;

    info!(
        "Размер матриц: {}x{}, тип: {:?}, повторов: {}",
        config.size, config.size, config.matrix_type, config.iterations
    );

    let (a, b) = initialize_matrices(config.matrix_type, config.size);

    info!("Вычисление эталона последовательной стратегией...");
    let (reference, reference_time) = measure_time(|| dense_mat::product(&a, &b));
    let reference = reference?;
    info!("Эталон готов за {:?}", reference_time);

    let mut runs = Vec::with_capacity(config.strategies.len());
    for &strategy in &config.strategies {
        runs.push(run_strategy(&config, strategy, &a, &b, &reference)?);
    }

    let baseline = runs
        .iter()
        .find(|r| r.strategy == Strategy::Sequential)
        .map(|r| r.mean)
        .unwrap_or(reference_time);

    let mut table = Table::new();
    table.add_row(row!["Стратегия", "Среднее время", "Ускорение", "Совпадает"]);
    for run in &runs {
        let speedup = baseline.as_secs_f64() / run.mean.as_secs_f64().max(f64::EPSILON);
        let matches = if run.matches { "да" } else { "нет" };
        table.add_row(row![
            run.strategy,
            format!("{:?}", run.mean),
            format!("{:.2}x", speedup),
            matches
        ]);
    }
    table.printstd();

    if runs.iter().any(|r| !r.matches) {
        anyhow::bail!("product strategies disagree with the sequential reference");
    }
    Ok(())
}
