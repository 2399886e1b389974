//! Online chaos diagnostics for a tracked body pair
//!
//! Tracks the separation between two designated bodies relative to their
//! initial separation and estimates a local Lyapunov exponent from the
//! retained window of samples.
//!
//! This is a finite-time, windowed estimate of short-term local divergence,
//! not the rigorous infinite-time Lyapunov exponent: as the bounded window
//! slides, the estimate implicitly resets. A persistently positive value is
//! still good evidence of chaotic dynamics.

use std::collections::VecDeque;

use super::params::DAYS_PER_YEAR;
use super::states::System;

/// Samples required before any estimate is attempted.
const MIN_SAMPLES: usize = 10;
/// Valid (non-degenerate) samples required for a nonzero estimate.
const MIN_VALID: usize = 5;
/// Ratios below this are treated as degenerate to avoid ln(0).
const RATIO_FLOOR: f64 = 1e-10;

/// One retained diagnostic sample.
#[derive(Debug, Clone, Copy)]
pub struct ChaosRecord {
    pub t_years: f64,          // sample time in years
    pub separation_ratio: f64, // current / initial separation of the pair
    pub lyapunov: f64,         // windowed local exponent estimate
}

/// Qualitative divergence classification for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChaosLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone)]
pub struct ChaosAnalyzer {
    pair: (usize, usize),
    initial_separation: f64, // captured once at construction
    capacity: usize,
    records: VecDeque<ChaosRecord>,
}

impl ChaosAnalyzer {
    /// Start tracking the separation of `pair` in `sys`. The separation at
    /// construction time becomes the ratio denominator for all later samples.
    pub fn new(sys: &System, pair: (usize, usize), capacity: usize) -> Self {
        Self {
            pair,
            initial_separation: Self::separation(sys, pair),
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    fn separation(sys: &System, pair: (usize, usize)) -> f64 {
        (sys.bodies[pair.1].x - sys.bodies[pair.0].x).norm()
    }

    /// Append one sample for the current state and refresh the estimate.
    /// Oldest samples are evicted once `capacity` is exceeded.
    pub fn record(&mut self, sys: &System) {
        let ratio = Self::separation(sys, self.pair) / self.initial_separation;
        if self.records.len() == self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(ChaosRecord {
            t_years: sys.t / DAYS_PER_YEAR,
            separation_ratio: ratio,
            lyapunov: 0.0,
        });
        let estimate = self.estimate();
        if let Some(last) = self.records.back_mut() {
            last.lyapunov = estimate;
        }
    }

    /// Mean discrete difference of ln(ratio) across the valid samples in the
    /// window; 0 while the history is too short or too degenerate.
    fn estimate(&self) -> f64 {
        if self.records.len() <= MIN_SAMPLES {
            return 0.0;
        }
        let valid: Vec<f64> = self
            .records
            .iter()
            .map(|r| r.separation_ratio)
            .filter(|&s| s > RATIO_FLOOR)
            .collect();
        if valid.len() <= MIN_VALID {
            return 0.0;
        }
        let sum: f64 = valid.windows(2).map(|w| w[1].ln() - w[0].ln()).sum();
        sum / (valid.len() - 1) as f64
    }

    /// Ordered retained samples, oldest first.
    pub fn series(&self) -> impl Iterator<Item = &ChaosRecord> {
        self.records.iter()
    }

    pub fn latest(&self) -> Option<&ChaosRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Mean of the `window` most recent Lyapunov samples.
    pub fn recent_lyapunov(&self, window: usize) -> f64 {
        let n = self.records.len().min(window);
        if n == 0 {
            return 0.0;
        }
        let sum: f64 = self.records.iter().rev().take(n).map(|r| r.lyapunov).sum();
        sum / n as f64
    }

    /// Classify the recent divergence rate for status reporting.
    pub fn level(&self) -> ChaosLevel {
        let recent = self.recent_lyapunov(10);
        if recent > 0.01 {
            ChaosLevel::High
        } else if recent > 0.001 {
            ChaosLevel::Moderate
        } else {
            ChaosLevel::Low
        }
    }
}
