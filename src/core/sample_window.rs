use crate::core::{PointGeometry, Size};
use crate::error::{ChartError, ChartResult};

/// Largest window the engine accepts, in samples.
pub const MAX_WINDOW_CAPACITY: usize = 1 << 24;

/// Number of samples that fit the drawing width, both edges included.
///
/// Callers validate `size` and `point` first; the result is always >= 1.
/// Geometry needing more than `MAX_WINDOW_CAPACITY` samples is rejected as
/// `InvalidPoint`.
pub fn window_capacity(size: Size, point: PointGeometry) -> ChartResult<usize> {
    let steps = (size.width / point.width).floor();
    if !steps.is_finite() || steps < 0.0 || steps >= MAX_WINDOW_CAPACITY as f64 {
        return Err(ChartError::InvalidPoint {
            width: point.width,
            height: point.height,
        });
    }
    Ok(steps as usize + 1)
}

/// Bounded FIFO window of the most recent samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleWindow {
    samples: Vec<f64>,
    capacity: usize,
}

impl SampleWindow {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::new(),
            capacity,
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Updates the capacity and drops the oldest samples that no longer fit.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.evict_overflow();
    }

    /// Appends `batch` and evicts the oldest samples beyond capacity.
    ///
    /// Returns the number of evicted samples.
    pub fn append(&mut self, batch: &[f64]) -> usize {
        if batch.is_empty() {
            return 0;
        }
        self.samples.extend_from_slice(batch);
        self.evict_overflow()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Drops up to `count` of the oldest samples.
    pub fn truncate_front(&mut self, count: usize) {
        let count = count.min(self.samples.len());
        self.samples.drain(..count);
    }

    /// Drops up to `count` of the newest samples.
    pub fn truncate_back(&mut self, count: usize) {
        let keep = self.samples.len().saturating_sub(count);
        self.samples.truncate(keep);
    }

    /// Empties the window and returns the samples it held.
    pub fn take(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.samples)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    fn evict_overflow(&mut self) -> usize {
        let excess = self.samples.len().saturating_sub(self.capacity);
        if excess > 0 {
            self.samples.drain(..excess);
        }
        excess
    }
}
