//! Chart datasets and display state.
//!
//! The two charts are fixed content: their data ships with the deck
//! subject matter, not computed here. This module owns the numbers,
//! the set of charts already initialized (lazy, once per chart), and
//! the spectrum display mode. Rendering into ratatui widgets happens
//! in the view layer.

use std::collections::BTreeSet;

use crate::types::ChartKind;

// ============================================================================
// FIXED DATASETS
// ============================================================================

/// Oscillator periods (s) for the response spectrum, shared by both series.
pub const SPECTRUM_PERIODS: [f64; 15] = [
    0.01, 0.02, 0.05, 0.075, 0.1, 0.15, 0.2, 0.3, 0.5, 0.75, 1.0, 1.5, 2.0, 3.0, 5.0,
];

/// Spectral acceleration (g), rock site.
pub const SPECTRUM_ROCK: [f64; 15] = [
    0.42, 0.48, 0.72, 0.92, 1.05, 0.98, 0.85, 0.62, 0.38, 0.22, 0.15, 0.08, 0.05, 0.025, 0.01,
];

/// Spectral acceleration (g), soil site.
pub const SPECTRUM_SOIL: [f64; 15] = [
    0.35, 0.40, 0.55, 0.68, 0.82, 0.95, 1.12, 1.05, 0.78, 0.55, 0.42, 0.28, 0.18, 0.10, 0.05,
];

/// Periods (s) for the RotD ratio chart.
pub const ROTD_PERIODS: [f64; 10] = [0.01, 0.05, 0.1, 0.2, 0.5, 1.0, 2.0, 3.0, 5.0, 10.0];

/// RotD100/RotD50 ratio per period.
pub const ROTD_RATIOS: [f64; 10] = [1.19, 1.19, 1.19, 1.21, 1.23, 1.24, 1.24, 1.25, 1.26, 1.29];

/// Pinned y-axis range for the ratio chart.
pub const ROTD_Y_BOUNDS: [f64; 2] = [1.15, 1.35];

/// Y-axis range for the spectrum chart (zero-based).
pub const SPECTRUM_Y_BOUNDS: [f64; 2] = [0.0, 1.2];

/// Dataset as (x, y) points with the x axis as ordered category index.
///
/// Both charts plot against an ordered period axis; the periods are
/// unevenly spaced, so positions are indices and tick labels carry the
/// period values.
pub fn series_points(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i as f64, v))
        .collect()
}

// ============================================================================
// DISPLAY MODE
// ============================================================================

/// Which spectrum series are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpectrumMode {
    /// Rock series only. Initial state — the soil series starts hidden.
    #[default]
    Rock,
    /// Soil series only.
    Soil,
    /// Both series.
    Both,
}

impl SpectrumMode {
    pub fn shows_rock(self) -> bool {
        matches!(self, SpectrumMode::Rock | SpectrumMode::Both)
    }

    pub fn shows_soil(self) -> bool {
        matches!(self, SpectrumMode::Soil | SpectrumMode::Both)
    }
}

// ============================================================================
// CHART BOOK
// ============================================================================

/// Per-chart initialization state and the spectrum display mode.
///
/// Charts initialize lazily, the first time their slide becomes active,
/// and exactly once: the initialized set only grows.
#[derive(Debug, Clone, Default)]
pub struct ChartBook {
    initialized: BTreeSet<ChartKind>,
    spectrum_mode: SpectrumMode,
}

impl ChartBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a chart initialized. Returns true only on the first call
    /// for that chart; repeats are no-ops.
    pub fn activate(&mut self, kind: ChartKind) -> bool {
        self.initialized.insert(kind)
    }

    /// Whether a chart has been initialized.
    pub fn is_initialized(&self, kind: ChartKind) -> bool {
        self.initialized.contains(&kind)
    }

    /// Switch the spectrum display mode.
    ///
    /// No-op (returns false) until the spectrum chart has been
    /// initialized, mirroring a mode control clicked before its chart
    /// exists.
    pub fn set_spectrum_mode(&mut self, mode: SpectrumMode) -> bool {
        if !self.is_initialized(ChartKind::ResponseSpectrum) {
            return false;
        }
        self.spectrum_mode = mode;
        true
    }

    pub fn spectrum_mode(&self) -> SpectrumMode {
        self.spectrum_mode
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spectrum_series_have_fifteen_points() {
        assert_eq!(SPECTRUM_PERIODS.len(), 15);
        assert_eq!(SPECTRUM_ROCK.len(), 15);
        assert_eq!(SPECTRUM_SOIL.len(), 15);
    }

    #[test]
    fn rotd_series_has_ten_points() {
        assert_eq!(ROTD_PERIODS.len(), 10);
        assert_eq!(ROTD_RATIOS.len(), 10);
    }

    #[test]
    fn rotd_values_fit_the_pinned_range() {
        for &r in &ROTD_RATIOS {
            assert!(r >= ROTD_Y_BOUNDS[0] && r <= ROTD_Y_BOUNDS[1]);
        }
    }

    #[test]
    fn series_points_index_the_x_axis() {
        let points = series_points(&[0.5, 0.7, 0.9]);
        assert_eq!(points, vec![(0.0, 0.5), (1.0, 0.7), (2.0, 0.9)]);
    }

    #[test]
    fn default_mode_hides_soil() {
        let mode = SpectrumMode::default();
        assert!(mode.shows_rock());
        assert!(!mode.shows_soil());
    }

    #[test]
    fn mode_visibility_matrix() {
        assert!(SpectrumMode::Rock.shows_rock());
        assert!(!SpectrumMode::Rock.shows_soil());

        assert!(!SpectrumMode::Soil.shows_rock());
        assert!(SpectrumMode::Soil.shows_soil());

        assert!(SpectrumMode::Both.shows_rock());
        assert!(SpectrumMode::Both.shows_soil());
    }

    #[test]
    fn activate_is_idempotent() {
        let mut book = ChartBook::new();
        assert!(book.activate(ChartKind::ResponseSpectrum));
        assert!(!book.activate(ChartKind::ResponseSpectrum));
        assert!(book.is_initialized(ChartKind::ResponseSpectrum));
        assert!(!book.is_initialized(ChartKind::RotdRatio));
    }

    #[test]
    fn mode_switch_is_noop_before_init() {
        let mut book = ChartBook::new();
        assert!(!book.set_spectrum_mode(SpectrumMode::Soil));
        assert_eq!(book.spectrum_mode(), SpectrumMode::Rock);
    }

    #[test]
    fn mode_switch_applies_after_init() {
        let mut book = ChartBook::new();
        book.activate(ChartKind::ResponseSpectrum);

        assert!(book.set_spectrum_mode(SpectrumMode::Soil));
        assert_eq!(book.spectrum_mode(), SpectrumMode::Soil);

        assert!(book.set_spectrum_mode(SpectrumMode::Both));
        assert_eq!(book.spectrum_mode(), SpectrumMode::Both);

        assert!(book.set_spectrum_mode(SpectrumMode::Rock));
        assert_eq!(book.spectrum_mode(), SpectrumMode::Rock);
    }

    #[test]
    fn rotd_init_does_not_unlock_spectrum_mode() {
        let mut book = ChartBook::new();
        book.activate(ChartKind::RotdRatio);
        assert!(!book.set_spectrum_mode(SpectrumMode::Both));
    }
}
