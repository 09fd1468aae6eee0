//! Euler-error configuration.
//!
//! - [`EulerErrorMode`]: simple difference vs. percent-difference residuals.
//! - [`EulerOptions`]: mode plus the `verbose` diagnostics flag.
//!
//! Notes
//! -----
//! - `verbose` only has an effect when the crate is built with the `obs_slog`
//!   feature; otherwise the Euler-error evaluation never logs.
use crate::og::errors::OGError;
use std::str::FromStr;

/// Form of the Euler-equation residual.
///
/// Variants:
/// - `Difference`: `beta (1+r) u'(c_{s+1}) - u'(c_s)`.
/// - `PercentDifference`: `beta (1+r) u'(c_{s+1}) / u'(c_s) - 1`.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"diff"`, `"difference"`, `"pct"`, `"percent"`, `"percent_difference"`).
/// Unknown names return `OGError::InvalidEulerMode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EulerErrorMode {
    #[default]
    Difference,
    PercentDifference,
}

impl EulerErrorMode {
    /// Map the boolean `diff` flag used by solver drivers onto a mode.
    pub fn from_diff(diff: bool) -> Self {
        if diff { EulerErrorMode::Difference } else { EulerErrorMode::PercentDifference }
    }
}

impl FromStr for EulerErrorMode {
    type Err = OGError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "diff" | "difference" => Ok(EulerErrorMode::Difference),
            "pct" | "percent" | "percent_difference" => Ok(EulerErrorMode::PercentDifference),
            _ => Err(OGError::InvalidEulerMode {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'difference' or 'percent_difference'.",
            }),
        }
    }
}

/// Euler-error evaluation options.
///
/// Fields:
/// - `mode: EulerErrorMode` — residual form (and therefore sentinel magnitude).
/// - `verbose: bool` — if `true`, log infeasibility diagnostics (behind the
///   `obs_slog` feature).
///
/// Default:
/// - `mode`: `Difference`
/// - `verbose`: `false`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EulerOptions {
    pub mode: EulerErrorMode,
    pub verbose: bool,
}

impl EulerOptions {
    pub fn new(mode: EulerErrorMode, verbose: bool) -> Self {
        Self { mode, verbose }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Verify case-insensitive parsing of every accepted mode name.
    //
    // Given
    // -----
    // - Mixed-case aliases for both modes.
    //
    // Expect
    // ------
    // - Each alias maps to the documented variant.
    fn euler_error_mode_parses_aliases() {
        assert_eq!("Diff".parse::<EulerErrorMode>().unwrap(), EulerErrorMode::Difference);
        assert_eq!("DIFFERENCE".parse::<EulerErrorMode>().unwrap(), EulerErrorMode::Difference);
        assert_eq!("pct".parse::<EulerErrorMode>().unwrap(), EulerErrorMode::PercentDifference);
        assert_eq!(
            "Percent_Difference".parse::<EulerErrorMode>().unwrap(),
            EulerErrorMode::PercentDifference
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure unknown mode names are rejected with the offending name.
    //
    // Given
    // -----
    // - The string "log".
    //
    // Expect
    // ------
    // - `OGError::InvalidEulerMode { name: "log", .. }`.
    fn euler_error_mode_rejects_unknown_name() {
        let err = "log".parse::<EulerErrorMode>().unwrap_err();

        match err {
            OGError::InvalidEulerMode { name, .. } => assert_eq!(name, "log"),
            other => panic!("expected InvalidEulerMode, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Check defaults and the boolean `diff` mapping.
    //
    // Given
    // -----
    // - `EulerOptions::default()`, `from_diff(true)`, `from_diff(false)`.
    //
    // Expect
    // ------
    // - Default is quiet difference mode; `true` -> Difference,
    //   `false` -> PercentDifference.
    fn euler_options_defaults_and_diff_flag() {
        let opts = EulerOptions::default();

        assert_eq!(opts.mode, EulerErrorMode::Difference);
        assert!(!opts.verbose);
        assert_eq!(EulerErrorMode::from_diff(true), EulerErrorMode::Difference);
        assert_eq!(EulerErrorMode::from_diff(false), EulerErrorMode::PercentDifference);
    }
}
