use tracing::{debug, trace};

use crate::core::{ExtremeRefresh, ScaleState, fit_dynamic_scale};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::validation::validate_samples;
use super::{ChartLifecycle, InvalidationLevel, StreamingChart};

/// What one ingested batch did to the model.
#[derive(Debug, Clone, Copy)]
struct IngestOutcome {
    evicted: usize,
    refresh: ExtremeRefresh,
    scale_changed: bool,
}

impl<R: Renderer> StreamingChart<R> {
    /// Appends samples, scrolling out the oldest ones beyond capacity.
    ///
    /// Without scrolling or a scale change only the new segment is redrawn.
    /// Rejects the whole batch if any sample is not finite.
    pub fn append(&mut self, samples: &[f64]) -> ChartResult<()> {
        if samples.is_empty() {
            return Ok(());
        }
        validate_samples(samples)?;

        let previous_len = self.core.model.window.len();
        let outcome = self.ingest(samples);
        let pending = &mut self.core.runtime.pending;
        if outcome.scale_changed {
            pending.merge(InvalidationLevel::Full);
        } else if outcome.evicted > 0 {
            pending.merge(InvalidationLevel::Series);
        } else {
            pending.merge_segment(previous_len);
        }

        trace!(
            appended = samples.len(),
            evicted = outcome.evicted,
            len = self.core.model.window.len(),
            refresh = ?outcome.refresh,
            scale_changed = outcome.scale_changed,
            "append samples"
        );
        Ok(())
    }

    /// Replaces all samples.
    pub fn set(&mut self, samples: &[f64]) -> ChartResult<()> {
        validate_samples(samples)?;
        self.clear();
        if !samples.is_empty() {
            self.ingest(samples);
            self.invalidate(InvalidationLevel::Series);
        }
        debug!(count = samples.len(), "set samples");
        Ok(())
    }

    /// Replaces the newest `samples.len()` samples with `samples`.
    pub fn replace(&mut self, samples: &[f64]) -> ChartResult<()> {
        if samples.is_empty() {
            return Ok(());
        }
        validate_samples(samples)?;
        let mut retained = self.core.model.window.take();
        let keep = retained.len().saturating_sub(samples.len());
        retained.truncate(keep);
        retained.extend_from_slice(samples);
        self.set(&retained)
    }

    /// Removes `count` samples: the oldest when positive, the newest when negative.
    pub fn remove(&mut self, count: isize) -> ChartResult<()> {
        if count == 0 {
            return Ok(());
        }
        let window = &mut self.core.model.window;
        if count < 0 {
            window.truncate_back(count.unsigned_abs());
        } else {
            window.truncate_front(count.unsigned_abs());
        }
        let retained = window.take();
        self.set(&retained)
    }

    /// Removes all samples and resets extremes and derived scale.
    pub fn clear(&mut self) {
        let settings = &self.core.settings;
        let model = &mut self.core.model;
        model.window.clear();
        model.tracker.reset(model.window.capacity());
        let previous = model.scale;
        model.scale = ScaleState::from_config(settings.point, settings.axis);
        let level = if previous == model.scale {
            InvalidationLevel::Series
        } else {
            InvalidationLevel::Full
        };
        self.invalidate(level);
        trace!("clear samples");
    }

    /// Rebuilds window, extremes and scale from retained samples and
    /// requests a full redraw.
    pub fn redraw(&mut self) {
        self.rebuild(self.core.model.window.capacity());
        self.core.runtime.lifecycle = ChartLifecycle::Styled;
    }

    /// Re-ingests retained samples after a structural change.
    ///
    /// `capacity` comes from the already validated new geometry and is
    /// applied first so truncation uses it.
    pub(super) fn rebuild(&mut self, capacity: usize) {
        let retained = self.core.model.window.take();
        let settings = &self.core.settings;
        let model = &mut self.core.model;
        model.scale = ScaleState::from_config(settings.point, settings.axis);
        model.window.set_capacity(capacity);
        model.tracker.reset(capacity);
        if !retained.is_empty() {
            self.ingest(&retained);
        }
        self.invalidate(InvalidationLevel::Full);
        debug!(
            capacity = self.core.model.window.capacity(),
            len = self.core.model.window.len(),
            "rebuild window"
        );
    }

    fn ingest(&mut self, samples: &[f64]) -> IngestOutcome {
        let settings = &self.core.settings;
        let model = &mut self.core.model;
        let evicted = model.window.append(samples);
        let capacity = model.window.capacity();
        let refresh = model
            .tracker
            .observe(samples, model.window.as_slice(), capacity);

        let mut scale_changed = false;
        if settings.axis.is_dynamic && !model.tracker.is_sentinel() {
            let next = fit_dynamic_scale(
                settings.size,
                settings.axis,
                model.tracker.min(),
                model.tracker.max(),
            );
            scale_changed = model.scale.apply(next);
        }

        IngestOutcome {
            evicted,
            refresh,
            scale_changed,
        }
    }
}
