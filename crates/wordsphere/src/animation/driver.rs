//! Tick-driven rotation of labels around the sphere

use serde::{Deserialize, Serialize};

use crate::error::{CloudError, Result};
use crate::layout::Label;

/// Angular advance applied to every label per tick, in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationStep {
    /// Longitude increment (horizontal spin)
    pub longitude: f64,
    /// Latitude increment (vertical tumble)
    pub latitude: f64,
}

impl Default for RotationStep {
    fn default() -> Self {
        Self {
            longitude: 1.0,
            latitude: 0.0,
        }
    }
}

impl RotationStep {
    /// Horizontal-only rotation
    pub fn horizontal(degrees: f64) -> Self {
        Self {
            longitude: degrees,
            latitude: 0.0,
        }
    }

    /// Reject non-finite steps, which would poison every label on the first tick
    pub fn validate(&self) -> Result<()> {
        for value in [self.longitude, self.latitude] {
            if !value.is_finite() {
                return Err(CloudError::InvalidRotationStep(value));
            }
        }
        Ok(())
    }
}

/// Driver states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Running,
    Paused,
}

/// Advances label angles once per host tick
#[derive(Debug, Clone, Default)]
pub struct AnimationDriver {
    pub step: RotationStep,
    state: DriverState,
    ticks: u64,
}

impl AnimationDriver {
    pub fn new(step: RotationStep) -> Self {
        Self {
            step,
            ..Default::default()
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Number of ticks applied while running
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn pause(&mut self) {
        self.state = DriverState::Paused;
    }

    pub fn resume(&mut self) {
        self.state = DriverState::Running;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            DriverState::Running => DriverState::Paused,
            DriverState::Paused => DriverState::Running,
        };
    }

    /// Advance every label by one step and re-project it
    pub fn tick(&mut self, labels: &mut [Label], radius: f64, min_factor: f64) {
        if self.state == DriverState::Paused {
            return;
        }

        for label in labels.iter_mut() {
            label.advance(radius, self.step.latitude, self.step.longitude, min_factor);
        }
        self.ticks += 1;

        tracing::trace!(tick = self.ticks, labels = labels.len(), "advanced rotation");
    }
}
