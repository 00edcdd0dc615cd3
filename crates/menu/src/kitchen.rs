//! Record of preparation and serving steps.

use serde::{Deserialize, Serialize};

/// Where a kitchen step happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    /// The item was being prepared.
    Prepare,

    /// The item was being served.
    Serve,
}

impl Station {
    /// Returns the station name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Prepare => "prepare",
            Station::Serve => "serve",
        }
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single step performed while preparing or serving an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenStep {
    pub station: Station,
    pub detail: String,
}

/// Ordered log of every physical act performed on orderable items.
///
/// `prepare` and `serve` are not idempotent: each call appends new steps,
/// so the log also shows the order in which composed items delegate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KitchenLog {
    steps: Vec<KitchenStep>,
}

impl KitchenLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn record(&mut self, station: Station, detail: impl Into<String>) {
        let detail = detail.into();
        tracing::debug!(%station, %detail, "kitchen step");
        self.steps.push(KitchenStep { station, detail });
    }

    /// Returns every recorded step in order.
    pub fn steps(&self) -> &[KitchenStep] {
        &self.steps
    }

    /// Returns the step details in order.
    pub fn details(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.detail.as_str()).collect()
    }

    /// Returns the details recorded at one station.
    pub fn details_at(&self, station: Station) -> Vec<&str> {
        self.steps
            .iter()
            .filter(|s| s.station == station)
            .map(|s| s.detail.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Drains all steps, leaving the log empty.
    pub fn take(&mut self) -> Vec<KitchenStep> {
        std::mem::take(&mut self.steps)
    }
}
