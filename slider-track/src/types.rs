use alloc::format;
use alloc::string::String;

/// A logical slide position on the track.
///
/// Real slides live in `0..total_items`. On an infinite track, negative indexes address the tail
/// clone band and indexes `>= total_items` address the head clone band.
pub type SlideIndex = i64;

/// Converts a slide count to a [`SlideIndex`] distance, saturating at `SlideIndex::MAX`.
pub(crate) fn index_span(count: usize) -> SlideIndex {
    SlideIndex::try_from(count).unwrap_or(SlideIndex::MAX)
}

/// A half-open range of slide indexes (`start..end`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexRange {
    pub start: SlideIndex,
    pub end: SlideIndex, // exclusive
}

impl IndexRange {
    pub fn new(start: SlideIndex, end: SlideIndex) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start) as usize
        }
    }

    pub fn contains(&self, index: SlideIndex) -> bool {
        index >= self.start && index < self.end
    }

    pub fn iter(&self) -> core::ops::Range<SlideIndex> {
        self.start..self.end
    }
}

/// The accessible role a slide is exposed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlideRole {
    /// A real slide: announced as "slide {k} of {total}".
    Slide,
    /// A clone: presentational only, never announced.
    Presentation,
}

impl SlideRole {
    /// Value for the `role` attribute.
    pub fn as_role_attr(self) -> &'static str {
        match self {
            Self::Slide => "group",
            Self::Presentation => "none presentation",
        }
    }

    /// Value for the `aria-roledescription` attribute, if any.
    pub fn role_description(self) -> Option<&'static str> {
        match self {
            Self::Slide => Some("slide"),
            Self::Presentation => None,
        }
    }
}

/// Render metadata for one slide position, recomputed on every render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderedSlide {
    pub index: SlideIndex,
    /// Whether the slide content is materialized (as opposed to deferred).
    pub is_rendered: bool,
    pub is_clone: bool,
    /// 1-based ordinal of the real slide this position shows. `None` only for empty tracks.
    pub real_ordinal: Option<usize>,
    pub aria_hidden: bool,
    pub role: SlideRole,
    /// Public per-slide index marker. Clones never carry one.
    pub data_index: Option<usize>,
}

impl RenderedSlide {
    /// Returns the `"{k} of {total}"` label for real slides.
    pub fn aria_label(&self, total_items: usize) -> Option<String> {
        match self.role {
            SlideRole::Slide => self
                .real_ordinal
                .map(|k| format!("{k} of {total_items}")),
            SlideRole::Presentation => None,
        }
    }
}
