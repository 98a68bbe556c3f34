use serde::{Deserialize, Serialize};

/// Tracked extreme value and its age.
///
/// `age` counts samples appended after this value was last seen, so `0`
/// means the newest sample of the window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extreme {
    pub value: f64,
    pub age: usize,
}

impl Extreme {
    #[must_use]
    pub const fn new(value: f64, age: usize) -> Self {
        Self { value, age }
    }
}

/// Extreme value resolved to a window index.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtremePosition {
    pub value: f64,
    pub index: usize,
}

/// Min/max of the visible window with window indices.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowExtremes {
    pub min: ExtremePosition,
    pub max: ExtremePosition,
}

/// How the tracker refreshed itself after an append.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremeRefresh {
    /// Only the appended batch was scanned.
    Incremental,
    /// A tracked extreme aged out (or the batch was empty); the full window was scanned.
    Rescan,
}

/// Running min/max of a sliding window.
///
/// Appends scan only the new batch while both extremes are still inside the
/// window; once either one ages out the whole window is rescanned. Ties
/// always move the extreme to the newest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremeTracker {
    min: Extreme,
    max: Extreme,
}

impl ExtremeTracker {
    /// Creates a tracker holding the empty-window sentinel.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            min: Extreme::new(f64::INFINITY, capacity),
            max: Extreme::new(f64::NEG_INFINITY, capacity),
        }
    }

    pub fn reset(&mut self, capacity: usize) {
        *self = Self::new(capacity);
    }

    #[must_use]
    pub fn min(&self) -> Extreme {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Extreme {
        self.max
    }

    /// Returns `true` while the tracker still holds the empty-window sentinel.
    #[must_use]
    pub fn is_sentinel(&self) -> bool {
        self.min.value == f64::INFINITY && self.max.value == f64::NEG_INFINITY
    }

    /// Refreshes extremes after `batch` was appended and `window` truncated.
    ///
    /// `window` must be the post-truncation window; `capacity` its capacity.
    pub fn observe(&mut self, batch: &[f64], window: &[f64], capacity: usize) -> ExtremeRefresh {
        let appended = batch.len();
        self.min.age = self.min.age.saturating_add(appended);
        self.max.age = self.max.age.saturating_add(appended);

        let aged_out = self.min.age >= capacity || self.max.age >= capacity;
        if aged_out || batch.is_empty() {
            self.rescan(window, capacity);
            return ExtremeRefresh::Rescan;
        }

        scan_into(&mut self.min, &mut self.max, batch);
        ExtremeRefresh::Incremental
    }

    /// Recomputes both extremes from the full window.
    pub fn rescan(&mut self, window: &[f64], capacity: usize) {
        let mut min = Extreme::new(f64::INFINITY, capacity);
        let mut max = Extreme::new(f64::NEG_INFINITY, capacity);
        scan_into(&mut min, &mut max, window);
        self.min = min;
        self.max = max;
    }

    /// Resolves ages to indices of a window holding `window_len` samples.
    ///
    /// Returns `None` for an empty window.
    #[must_use]
    pub fn positions(&self, window_len: usize) -> Option<WindowExtremes> {
        if window_len == 0 || self.is_sentinel() {
            return None;
        }
        let last = window_len - 1;
        Some(WindowExtremes {
            min: ExtremePosition {
                value: self.min.value,
                index: last.saturating_sub(self.min.age),
            },
            max: ExtremePosition {
                value: self.max.value,
                index: last.saturating_sub(self.max.age),
            },
        })
    }
}

fn scan_into(min: &mut Extreme, max: &mut Extreme, samples: &[f64]) {
    let len = samples.len();
    for (i, &value) in samples.iter().enumerate() {
        let age = len - i - 1;
        if value >= max.value {
            *max = Extreme::new(value, age);
        }
        if value <= min.value {
            *min = Extreme::new(value, age);
        }
    }
}
