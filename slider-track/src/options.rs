use crate::SlideIndex;

/// Configuration for [`crate::SliderTrack`].
///
/// `slides_per_page >= total_items` is valid: the track collapses to a single page and clone
/// bands are suppressed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderOptions {
    pub total_items: usize,
    /// Slides visible at once. `0` is treated as `1`.
    pub slides_per_page: usize,
    /// Surround the real slides with clone bands so navigation can loop seamlessly.
    pub infinite: bool,
    /// Defer slides outside the current page (lazy window). When `false`, every slide is
    /// rendered up front.
    pub use_pagination: bool,

    /// Slide the track starts on. Out-of-range values are normalized like navigation requests.
    pub initial_slide: SlideIndex,
    /// Initial value of `TrackState::transition_enabled`.
    pub transition_enabled: bool,
}

impl SliderOptions {
    pub fn new(total_items: usize, slides_per_page: usize) -> Self {
        Self {
            total_items,
            slides_per_page,
            infinite: false,
            use_pagination: true,
            initial_slide: 0,
            transition_enabled: true,
        }
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_pagination(mut self, use_pagination: bool) -> Self {
        self.use_pagination = use_pagination;
        self
    }

    pub fn with_initial_slide(mut self, initial_slide: SlideIndex) -> Self {
        self.initial_slide = initial_slide;
        self
    }

    pub fn with_transition_enabled(mut self, transition_enabled: bool) -> Self {
        self.transition_enabled = transition_enabled;
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_slides_per_page(mut self, slides_per_page: usize) -> Self {
        self.slides_per_page = slides_per_page;
        self
    }

    /// `slides_per_page`, with `0` normalized to `1`.
    pub fn per_page(&self) -> usize {
        self.slides_per_page.max(1)
    }

    /// Returns `true` when every slide fits on one page.
    pub fn is_collapsed(&self) -> bool {
        self.per_page() >= self.total_items
    }

    /// Returns `true` when clone bands exist (infinite and more slides than fit on a page).
    pub fn loops(&self) -> bool {
        self.infinite && !self.is_collapsed()
    }

    /// Whether a change from `self` to `next` requires a new transform map.
    pub(crate) fn geometry_differs(&self, next: &Self) -> bool {
        self.total_items != next.total_items
            || self.per_page() != next.per_page()
            || self.infinite != next.infinite
    }
}

impl Default for SliderOptions {
    fn default() -> Self {
        Self::new(0, 1)
    }
}
