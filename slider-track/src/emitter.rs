use crate::{IndexRange, SlideIndex};

/// Helper to emit slide indexes into a caller's buffer without allocations.
///
/// It enforces the window contract:
/// - Indexes outside the valid track range are ignored (and debug-asserted).
/// - Duplicates are ignored.
/// - Out-of-order indexes are ignored (and debug-asserted).
pub struct IndexEmitter<'a> {
    range: IndexRange,
    last: Option<SlideIndex>,
    emit: &'a mut dyn FnMut(SlideIndex),
}

impl<'a> IndexEmitter<'a> {
    pub fn new(range: IndexRange, emit: &'a mut dyn FnMut(SlideIndex)) -> Self {
        Self {
            range,
            last: None,
            emit,
        }
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    pub fn emit(&mut self, index: SlideIndex) {
        if !self.range.contains(index) {
            swarn!(
                index,
                start = self.range.start,
                end = self.range.end,
                "IndexEmitter: out-of-bounds index"
            );
            debug_assert!(
                self.range.contains(index),
                "IndexEmitter: out-of-bounds index (i={index}, range={}..{})",
                self.range.start,
                self.range.end
            );
            return;
        }

        if let Some(prev) = self.last {
            if index == prev {
                return;
            }
            if index < prev {
                swarn!(
                    prev,
                    next = index,
                    "IndexEmitter: indexes must be emitted in ascending order"
                );
                debug_assert!(
                    index > prev,
                    "IndexEmitter: indexes must be emitted in ascending order (prev={prev}, next={index})"
                );
                return;
            }
        }

        self.last = Some(index);
        (self.emit)(index);
    }

    /// Emits `start..end`, clipped to the valid range.
    pub fn emit_range(&mut self, start: SlideIndex, end: SlideIndex) {
        let start = start.max(self.range.start);
        let end = end.min(self.range.end);
        for i in start..end {
            self.emit(i);
        }
    }

    pub fn emit_all(&mut self) {
        self.emit_range(self.range.start, self.range.end);
    }
}
