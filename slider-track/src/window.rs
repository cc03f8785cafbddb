use alloc::vec;
use alloc::vec::Vec;

use crate::types::index_span;
use crate::{IndexEmitter, IndexRange, SlideIndex, TransformMap};

/// Calls `f` with every real slide shown by the page starting at `current_slide`.
///
/// On looping tracks, page positions that fall on clones are reported as the real slide they
/// duplicate, so the target of a pending loop reset is covered too. The same real slide may be
/// reported more than once when a page wraps around a short track.
pub fn for_each_page_real_index(
    map: &TransformMap,
    current_slide: SlideIndex,
    mut f: impl FnMut(SlideIndex),
) {
    let real = map.real_range();
    if real.is_empty() {
        return;
    }
    let end = current_slide.saturating_add(index_span(map.slides_per_page()));
    if !map.loops() {
        for position in current_slide.max(real.start)..end.min(real.end) {
            f(position);
        }
        return;
    }
    for position in current_slide..end {
        if let Some(index) = map.real_index(position) {
            f(index);
        }
    }
}

/// Emits the indexes that must be materialized now, in ascending order.
///
/// - Without pagination every valid index is emitted.
/// - With pagination only the current page's real slides, any real slide flagged in
///   `cached_real` (indexed by real slide), and both clone bands are emitted. Clone bands are
///   always materialized so a loop reset never waits on a mount.
pub fn for_each_window_index(
    map: &TransformMap,
    use_pagination: bool,
    current_slide: SlideIndex,
    cached_real: &[bool],
    emit: &mut dyn FnMut(SlideIndex),
) {
    let range = map.index_range();
    let mut emitter = IndexEmitter::new(range, emit);
    if !use_pagination {
        emitter.emit_all();
        return;
    }

    let total = map.total_items();
    let mut wanted = vec![false; total];
    for (slot, &cached) in wanted.iter_mut().zip(cached_real) {
        *slot = cached;
    }
    for_each_page_real_index(map, current_slide, |i| wanted[i as usize] = true);

    for index in range.iter() {
        let keep = match usize::try_from(index) {
            Ok(real) if real < total => wanted[real],
            _ => true, // clone band
        };
        if keep {
            emitter.emit(index);
        }
    }
}

/// The set of slide indexes materialized for one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderWindow {
    range: IndexRange,
    rendered: Vec<bool>, // rendered[i] is the entry for index `range.start + i`
    rendered_count: usize,
    real_rendered_count: usize,
}

impl RenderWindow {
    /// Selects the window for a fresh mount at `current_slide`.
    pub fn select(map: &TransformMap, use_pagination: bool, current_slide: SlideIndex) -> Self {
        Self::select_with_cache(map, use_pagination, current_slide, &[])
    }

    /// Selects the window, keeping every real slide flagged in `cached_real` mounted.
    pub fn select_with_cache(
        map: &TransformMap,
        use_pagination: bool,
        current_slide: SlideIndex,
        cached_real: &[bool],
    ) -> Self {
        let range = map.index_range();
        let real = map.real_range();
        let mut rendered = vec![false; range.len()];
        let mut rendered_count = 0usize;
        let mut real_rendered_count = 0usize;

        for_each_window_index(map, use_pagination, current_slide, cached_real, &mut |i| {
            rendered[(i - range.start) as usize] = true;
            rendered_count += 1;
            if real.contains(i) {
                real_rendered_count += 1;
            }
        });

        strace!(
            current_slide,
            use_pagination,
            rendered_count,
            real_rendered_count,
            "RenderWindow::select"
        );

        Self {
            range,
            rendered,
            rendered_count,
            real_rendered_count,
        }
    }

    pub fn range(&self) -> IndexRange {
        self.range
    }

    pub fn is_rendered(&self, index: SlideIndex) -> bool {
        if !self.range.contains(index) {
            return false;
        }
        self.rendered[(index - self.range.start) as usize]
    }

    /// Number of materialized indexes (real slides and clones).
    pub fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    /// Number of materialized real slides.
    pub fn real_rendered_count(&self) -> usize {
        self.real_rendered_count
    }

    /// Iterates over materialized indexes in ascending order.
    pub fn for_each_index(&self, mut f: impl FnMut(SlideIndex)) {
        for (offset, &rendered) in self.rendered.iter().enumerate() {
            if rendered {
                f(self.range.start + offset as SlideIndex);
            }
        }
    }
}
