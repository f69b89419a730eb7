//! Progress reporting for the harmonizer
//!
//! Provides a simple API for reporting pipeline state:
//! - Current phase (Reading, Reshaping, ... Exporting)
//! - Progress (current/total with a label)
//! - Free-form log lines
//!
//! `LogUi` forwards everything to `tracing`; `SilentUi` drops it.

use tracing::{debug, info};

/// Pipeline phases, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Reading,
    Reshaping,
    Normalizing,
    Unifying,
    Filtering,
    Enriching,
    Exporting,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Reading => write!(f, "Reading sources"),
            Phase::Reshaping => write!(f, "Reshaping wide tables"),
            Phase::Normalizing => write!(f, "Normalizing country keys"),
            Phase::Unifying => write!(f, "Unifying schema"),
            Phase::Filtering => write!(f, "Filtering indicators"),
            Phase::Enriching => write!(f, "Attaching labels"),
            Phase::Exporting => write!(f, "Exporting"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Progress information for the current operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Progress {
    pub current: u64,
    pub total: u64,
    pub label: String,
}

impl Progress {
    pub fn new(current: u64, total: u64, label: impl Into<String>) -> Self {
        Self {
            current,
            total,
            label: label.into(),
        }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }
}

/// Trait for progress sinks - allows both logged and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>);
    fn log(&mut self, message: impl Into<String>);
}

/// Reports through `tracing`
#[derive(Debug, Default)]
pub struct LogUi {
    phase: Option<Phase>,
}

impl LogUi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Option<Phase> {
        self.phase
    }
}

impl Ui for LogUi {
    fn set_phase(&mut self, phase: Phase) {
        self.phase = Some(phase);
        info!(phase = %phase, "phase");
    }

    fn set_progress(&mut self, current: u64, total: u64, label: impl Into<String>) {
        let progress = Progress::new(current, total, label);
        debug!(
            label = %progress.label,
            current,
            total,
            pct = progress.ratio() * 100.0,
            "progress"
        );
    }

    fn log(&mut self, message: impl Into<String>) {
        info!("{}", message.into());
    }
}

/// Silent UI implementation for testing and library use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn set_progress(&mut self, _current: u64, _total: u64, _label: impl Into<String>) {}
    fn log(&mut self, _message: impl Into<String>) {}
}
