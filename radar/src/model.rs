//! Radar model: the ordered axis labels and their current magnitudes.
//!
//! The model is a plain store. It range-checks indices but never clamps;
//! magnitudes arrive pre-clamped from [`crate::geometry`]. Labels and values
//! always have the same length.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use crate::consts::DEFAULT_MAGNITUDE;

/// One labelled dimension of the chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub label: String,
    pub index: usize,
}

/// Error returned by [`RadarModel::set_value`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// The axis index does not name an existing axis.
    #[error("axis index {index} out of range for {count} axes")]
    AxisOutOfRange { index: usize, count: usize },
}

/// Axis labels plus one normalized magnitude per axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RadarModel {
    labels: Vec<String>,
    values: Vec<f64>,
}

impl RadarModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model for `labels` with every magnitude at the default.
    #[must_use]
    pub fn with_labels(labels: Vec<String>) -> Self {
        let mut model = Self::new();
        model.reset(labels);
        model
    }

    /// Replace the axis set and reset every magnitude to `0.5`.
    pub fn reset(&mut self, labels: Vec<String>) {
        self.values = vec![DEFAULT_MAGNITUDE; labels.len()];
        self.labels = labels;
    }

    /// Store `magnitude` for axis `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AxisOutOfRange`] if `index` is not an axis.
    pub fn set_value(&mut self, index: usize, magnitude: f64) -> Result<(), ModelError> {
        let count = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ModelError::AxisOutOfRange { index, count })?;
        *slot = magnitude;
        Ok(())
    }

    /// Read-only snapshot of the current magnitudes.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// The axes in index order.
    #[must_use]
    pub fn axes(&self) -> Vec<Axis> {
        self.labels
            .iter()
            .enumerate()
            .map(|(index, label)| Axis { label: label.clone(), index })
            .collect()
    }

    /// Number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Human-readable caption, e.g. `"50% Conception — 80% Research"`.
    #[must_use]
    pub fn usage_summary(&self) -> String {
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, value)| format!("{}% {label}", percent(*value)))
            .collect::<Vec<_>>()
            .join(" — ")
    }
}

/// Round a magnitude to a whole percentage.
#[allow(clippy::cast_possible_truncation)]
fn percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}
