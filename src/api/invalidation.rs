use serde::{Deserialize, Serialize};

use crate::render::FrameKind;

/// Ordered repaint levels; higher levels include everything below them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    /// New samples were appended without scrolling.
    Segment,
    /// The series scrolled or was cleared.
    Series,
    /// Scale, size, style or grid changed.
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub fn frame_kind(self) -> Option<FrameKind> {
        match self {
            Self::None => None,
            Self::Segment => Some(FrameKind::Segment),
            Self::Series => Some(FrameKind::Series),
            Self::Full => Some(FrameKind::Full),
        }
    }
}

/// Repaint work accumulated since the last successful render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingRedraw {
    level: InvalidationLevel,
    segment_start: Option<usize>,
}

impl PendingRedraw {
    #[must_use]
    pub fn full() -> Self {
        Self {
            level: InvalidationLevel::Full,
            segment_start: None,
        }
    }

    #[must_use]
    pub fn level(self) -> InvalidationLevel {
        self.level
    }

    /// First window index not yet drawn; only meaningful at `Segment` level.
    #[must_use]
    pub fn segment_start(self) -> Option<usize> {
        self.segment_start
    }

    /// Records newly appended samples starting at window index `start`.
    pub fn merge_segment(&mut self, start: usize) {
        match self.level {
            InvalidationLevel::None => {
                self.level = InvalidationLevel::Segment;
                self.segment_start = Some(start);
            }
            InvalidationLevel::Segment => {
                self.segment_start = Some(self.segment_start.map_or(start, |s| s.min(start)));
            }
            InvalidationLevel::Series | InvalidationLevel::Full => {}
        }
    }

    /// Raises the level to `level` (never lowers it).
    pub fn merge(&mut self, level: InvalidationLevel) {
        if level > self.level {
            self.level = level;
        }
        if self.level > InvalidationLevel::Segment {
            self.segment_start = None;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationLevel, PendingRedraw};

    #[test]
    fn merge_preserves_highest_level() {
        let mut pending = PendingRedraw::default();
        pending.merge_segment(4);
        assert_eq!(pending.level(), InvalidationLevel::Segment);
        assert_eq!(pending.segment_start(), Some(4));

        pending.merge_segment(2);
        assert_eq!(pending.segment_start(), Some(2));

        pending.merge(InvalidationLevel::Series);
        pending.merge_segment(7);
        assert_eq!(pending.level(), InvalidationLevel::Series);
        assert_eq!(pending.segment_start(), None);

        pending.merge(InvalidationLevel::Segment);
        assert_eq!(pending.level(), InvalidationLevel::Series);
    }
}
