use alloc::vec::Vec;

use crate::types::index_span;
use crate::{IndexRange, SlideIndex, SliderOptions};

/// An immutable index → offset table for one track geometry.
///
/// Offsets are percentages of the *track* width, ready to be used as `translate3d(x%, 0, 0)` on
/// the track element. Moving forward by one slide shifts the content left by one slide width.
///
/// The table covers every valid [`SlideIndex`]: `0..total_items` for finite tracks, and
/// `-slides_per_page..total_items + slides_per_page` for looping ones. It is rebuilt wholesale
/// when the geometry changes, never patched.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransformMap {
    total_items: usize,
    slides_per_page: usize,
    infinite: bool,
    clone_count: usize, // per band
    width_percent: f64,
    slide_width_percent: f64,
    offsets: Vec<f64>, // offsets[i] is the entry for index `i - clone_count`
}

impl TransformMap {
    /// Builds the table for `total_items` slides shown `slides_per_page` at a time.
    ///
    /// When `slides_per_page >= total_items` the track occupies exactly one page: the width is
    /// `100%`, clone bands are suppressed and every offset is `0`.
    pub fn build(total_items: usize, slides_per_page: usize, infinite: bool) -> Self {
        let per_page = slides_per_page.max(1);
        let collapsed = per_page >= total_items;
        let clone_count = if infinite && !collapsed { per_page } else { 0 };
        let slide_count = total_items + 2 * clone_count;

        let (width_percent, slide_width_percent) = if collapsed {
            (100.0, 100.0 / per_page as f64)
        } else {
            (
                (slide_count as f64 * 100.0) / per_page as f64,
                100.0 / slide_count as f64,
            )
        };

        let mut offsets = Vec::with_capacity(slide_count);
        for position in 0..slide_count {
            let offset = if collapsed {
                0.0
            } else {
                (position as f64 * 100.0) / slide_count as f64
            };
            offsets.push(negate(offset));
        }

        sdebug!(
            total_items,
            slides_per_page = per_page,
            infinite,
            clone_count,
            width_percent,
            "TransformMap::build"
        );

        Self {
            total_items,
            slides_per_page: per_page,
            infinite,
            clone_count,
            width_percent,
            slide_width_percent,
            offsets,
        }
    }

    pub fn from_options(options: &SliderOptions) -> Self {
        Self::build(options.total_items, options.slides_per_page, options.infinite)
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn slides_per_page(&self) -> usize {
        self.slides_per_page
    }

    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Number of clones in *each* band (`0` when the track does not loop).
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Returns `true` when clone bands exist.
    pub fn loops(&self) -> bool {
        self.clone_count > 0
    }

    /// Track width in percent of the viewport.
    pub fn width_percent(&self) -> f64 {
        self.width_percent
    }

    /// Width of one slide in percent of the track.
    pub fn slide_width_percent(&self) -> f64 {
        self.slide_width_percent
    }

    /// Number of indexes in the table (real slides plus both clone bands).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The valid index range covered by the table.
    pub fn index_range(&self) -> IndexRange {
        let clones = self.clone_count as SlideIndex;
        IndexRange::new(-clones, self.total_items as SlideIndex + clones)
    }

    /// The range of real slide indexes (`0..total_items`).
    pub fn real_range(&self) -> IndexRange {
        IndexRange::new(0, self.total_items as SlideIndex)
    }

    pub fn first_index(&self) -> Option<SlideIndex> {
        let range = self.index_range();
        (!range.is_empty()).then_some(range.start)
    }

    pub fn last_index(&self) -> Option<SlideIndex> {
        let range = self.index_range();
        (!range.is_empty()).then_some(range.end - 1)
    }

    pub fn contains(&self, index: SlideIndex) -> bool {
        self.index_range().contains(index)
    }

    pub fn get(&self, index: SlideIndex) -> Option<f64> {
        if !self.contains(index) {
            return None;
        }
        let position = (index + self.clone_count as SlideIndex) as usize;
        self.offsets.get(position).copied()
    }

    /// Same as [`Self::get`], but yields a zero-effect transform for indexes outside the table
    /// (including every index of an empty track).
    pub fn offset_or_zero(&self, index: SlideIndex) -> f64 {
        self.get(index).unwrap_or(0.0)
    }

    /// Iterates `(index, offset)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (SlideIndex, f64)> + '_ {
        let base = -(self.clone_count as SlideIndex);
        self.offsets
            .iter()
            .enumerate()
            .map(move |(position, &offset)| (base + position as SlideIndex, offset))
    }

    /// Maps any index to the real slide it shows (`0..total_items`).
    ///
    /// Returns `None` for empty tracks.
    pub fn real_index(&self, index: SlideIndex) -> Option<SlideIndex> {
        if self.total_items == 0 {
            return None;
        }
        Some(index.rem_euclid(self.total_items as SlideIndex))
    }

    /// The last index a full page can start on when the track does not loop
    /// (`total_items - slides_per_page`, or `0` when everything fits on one page).
    pub fn last_page_start(&self) -> SlideIndex {
        index_span(self.total_items.saturating_sub(self.slides_per_page))
    }

    /// Normalizes an externally requested index into the valid range.
    ///
    /// Looping tracks accept clone indexes as-is and wrap anything beyond the clone bands to the
    /// real slide it shows. Other tracks clamp into `0..=last_page_start()`, so the visible page
    /// is always full.
    pub fn normalize(&self, index: SlideIndex) -> SlideIndex {
        if self.total_items == 0 {
            return 0;
        }
        let normalized = if !self.loops() {
            index.clamp(0, self.last_page_start())
        } else if self.contains(index) {
            index
        } else {
            index.rem_euclid(self.total_items as SlideIndex)
        };
        if normalized != index {
            swarn!(
                requested = index,
                normalized,
                "TransformMap: slide index outside the valid range"
            );
        }
        normalized
    }
}

fn negate(offset: f64) -> f64 {
    // Keeps `-0.0` out of the table so it formats as `0%`.
    if offset == 0.0 { 0.0 } else { -offset }
}
