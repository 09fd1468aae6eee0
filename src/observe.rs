//! observe — terminal diagnostics for verbose Euler-error evaluation.
//!
//! Only compiled with the `obs_slog` feature. A single terminal logger is
//! created on first use and shared for the life of the process. The drain is
//! synchronous: every record is formatted and written to stderr before the
//! logging call returns, so nothing is pending when the process exits.
use crate::og::core::{options::EulerErrorMode, penalty::EulerResidual};
use slog::{Drain, Logger, info, o};
use std::sync::{Mutex, OnceLock};

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Shared terminal logger (stderr, synchronous drain).
pub fn term_logger() -> &'static Logger {
    LOGGER.get_or_init(|| build_logger(slog_term::TermDecorator::new().stderr().build()))
}

/// Log the number of infeasible pairs and the largest feasible |residual|.
pub fn log_euler_summary(residuals: &[EulerResidual], mode: EulerErrorMode) {
    log_euler_summary_to(term_logger(), residuals, mode);
}

// ---- Helper Methods ----

fn build_logger<D>(decorator: D) -> Logger
where
    D: slog_term::Decorator + Send + 'static,
{
    let drain = slog_term::FullFormat::new(decorator).build();
    Logger::root(Mutex::new(drain).fuse(), o!("crate" => "rust_ogmodel"))
}

fn log_euler_summary_to(logger: &Logger, residuals: &[EulerResidual], mode: EulerErrorMode) {
    let (infeasible, max_abs) = summarize(residuals);
    info!(logger, "euler errors";
        "mode" => ?mode,
        "pairs" => residuals.len(),
        "infeasible" => infeasible,
        "max_abs_feasible" => max_abs
    );
}

fn summarize(residuals: &[EulerResidual]) -> (usize, f64) {
    residuals.iter().fold((0, 0.0_f64), |(count, max_abs), res| match res {
        EulerResidual::Feasible(v) => (count, max_abs.max(v.abs())),
        EulerResidual::Infeasible => (count + 1, max_abs),
    })
}
