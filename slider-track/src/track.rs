use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use crate::decorate::{decorate, is_clone};
use crate::window::for_each_page_real_index;
use crate::{
    RenderWindow, RenderedSlide, SlideIndex, SliderAction, SliderOptions, TrackState, TransformMap,
};

/// The positional state machine behind an infinite slider track.
///
/// This type is intentionally UI-agnostic:
/// - It never owns the [`TrackState`]; your state container does.
/// - It reacts to mount, configuration changes, navigation requests and the view's
///   "transition finished" signal by emitting [`SliderAction`]s through a dispatch callback.
/// - Rendering is exposed via [`RenderedSlide`] descriptors (`for_each_slide`).
///
/// For a reference state container, transition tweens and view attributes, see the
/// `slider-track-adapter` crate.
#[derive(Clone, Debug)]
pub struct SliderTrack {
    options: SliderOptions,
    map: Arc<TransformMap>,
    rendered: Vec<bool>, // real slides mounted so far, by real index
}

impl SliderTrack {
    pub fn new(options: SliderOptions) -> Self {
        let map = Arc::new(TransformMap::from_options(&options));
        sdebug!(
            total_items = options.total_items,
            slides_per_page = options.slides_per_page,
            infinite = options.infinite,
            use_pagination = options.use_pagination,
            "SliderTrack::new"
        );
        Self {
            rendered: vec![false; options.total_items],
            options,
            map,
        }
    }

    pub fn options(&self) -> &SliderOptions {
        &self.options
    }

    pub fn transform_map(&self) -> &Arc<TransformMap> {
        &self.map
    }

    pub fn total_items(&self) -> usize {
        self.options.total_items
    }

    pub fn slides_per_page(&self) -> usize {
        self.map.slides_per_page()
    }

    pub fn is_infinite(&self) -> bool {
        self.options.infinite
    }

    /// Returns `true` when slides outside the current page are deferred.
    pub fn uses_pagination(&self) -> bool {
        self.options.use_pagination
    }

    /// Track width in percent of the viewport.
    pub fn track_width_percent(&self) -> f64 {
        self.map.width_percent()
    }

    /// The transform for `index`, or a zero-effect transform when it is outside the track.
    pub fn transform_for(&self, index: SlideIndex) -> f64 {
        self.map.offset_or_zero(index)
    }

    /// The state a freshly mounted track starts in.
    pub fn initial_state(&self) -> TrackState {
        let current_slide = self.map.normalize(self.options.initial_slide);
        TrackState {
            current_slide,
            transform: self.map.offset_or_zero(current_slide),
            transition_enabled: self.options.transition_enabled,
        }
    }

    /// Publishes the transform map and materializes the initial window.
    ///
    /// Returns the state the container should hold after the mount.
    pub fn mount(&mut self, dispatch: &mut dyn FnMut(SliderAction)) -> TrackState {
        let state = self.initial_state();
        self.rendered.iter_mut().for_each(|r| *r = false);
        self.mark_page(state.current_slide);
        sdebug!(current_slide = state.current_slide, "SliderTrack::mount");
        dispatch(SliderAction::SetTransformMap {
            map: Arc::clone(&self.map),
            current_slide: state.current_slide,
            transform: state.transform,
        });
        state
    }

    /// Applies a new configuration.
    ///
    /// The transform map is rebuilt only when the geometry (`total_items`, `slides_per_page`,
    /// `infinite`) changed. The current slide is carried over, normalized into the new range,
    /// and published together with the map.
    pub fn set_options(
        &mut self,
        options: SliderOptions,
        state: &TrackState,
        dispatch: &mut dyn FnMut(SliderAction),
    ) {
        if self.options == options {
            return;
        }
        let rebuild = self.options.geometry_differs(&options);
        self.options = options;
        if rebuild {
            self.map = Arc::new(TransformMap::from_options(&self.options));
        }
        strace!(
            total_items = self.options.total_items,
            slides_per_page = self.options.slides_per_page,
            infinite = self.options.infinite,
            use_pagination = self.options.use_pagination,
            rebuild,
            "SliderTrack::set_options"
        );

        self.rendered = vec![false; self.options.total_items];
        let current_slide = self.map.normalize(state.current_slide);
        self.mark_page(current_slide);
        dispatch(SliderAction::SetTransformMap {
            map: Arc::clone(&self.map),
            current_slide,
            transform: self.map.offset_or_zero(current_slide),
        });
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(
        &mut self,
        state: &TrackState,
        dispatch: &mut dyn FnMut(SliderAction),
        f: impl FnOnce(&mut SliderOptions),
    ) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next, state, dispatch);
    }

    /// Handles an external request to move to `index`.
    ///
    /// On looping tracks `index` may name a clone; that is how moving past either end is
    /// animated. Indexes outside the valid range are normalized, never rejected; other tracks
    /// stop at the last full page.
    pub fn navigate(&mut self, index: SlideIndex, dispatch: &mut dyn FnMut(SliderAction)) {
        let current_slide = self.map.normalize(index);
        let transform = self.map.offset_or_zero(current_slide);
        strace!(requested = index, current_slide, transform, "SliderTrack::navigate");
        self.mark_page(current_slide);
        dispatch(SliderAction::Navigate {
            current_slide,
            transform,
        });
    }

    /// Handles the view's "transition finished" signal.
    ///
    /// When the track came to rest on a clone, emits `DisableTransition` followed by
    /// `AdjustCurrentSlide` to the real slide the clone duplicates. Otherwise does nothing, so
    /// duplicate or late signals are harmless.
    pub fn on_transition_end(
        &mut self,
        state: &TrackState,
        dispatch: &mut dyn FnMut(SliderAction),
    ) {
        if !self.map.loops() {
            return;
        }
        let current = state.current_slide;
        if !is_clone(current, self.map.total_items()) {
            return;
        }
        let Some(real) = self.map.real_index(current) else {
            return;
        };
        let transform = self.map.offset_or_zero(real);
        sdebug!(from = current, to = real, transform, "SliderTrack: loop reset");

        self.mark_page(real);
        dispatch(SliderAction::DisableTransition);
        dispatch(SliderAction::AdjustCurrentSlide {
            current_slide: real,
            transform,
        });
    }

    /// Records the real slides shown at `state` as mounted.
    ///
    /// Call this if your container moves the track through intents the core did not emit.
    pub fn observe(&mut self, state: &TrackState) {
        self.mark_page(state.current_slide);
    }

    fn mark_page(&mut self, current_slide: SlideIndex) {
        let rendered = &mut self.rendered;
        for_each_page_real_index(&self.map, current_slide, |i| {
            if let Some(slot) = rendered.get_mut(i as usize) {
                *slot = true;
            }
        });
    }

    /// Returns `true` when the real slide `real_index` has been mounted since the last
    /// configuration change.
    pub fn is_cached(&self, real_index: usize) -> bool {
        self.rendered.get(real_index).copied().unwrap_or(false)
    }

    /// The render window for `state`: the lazy window (plus previously mounted real slides) with
    /// pagination, everything without.
    pub fn window(&self, state: &TrackState) -> RenderWindow {
        RenderWindow::select_with_cache(
            &self.map,
            self.options.use_pagination,
            state.current_slide,
            &self.rendered,
        )
    }

    /// Iterates over every slide position in track order (tail clones, real slides, head
    /// clones), deferred ones included with `is_rendered = false`.
    pub fn for_each_slide(&self, state: &TrackState, mut f: impl FnMut(RenderedSlide)) {
        let window = self.window(state);
        for index in self.map.index_range().iter() {
            f(decorate(&self.map, &window, state.current_slide, index));
        }
    }

    /// Collects slide descriptors into `out` (clears `out` first).
    pub fn collect_slides(&self, state: &TrackState, out: &mut Vec<RenderedSlide>) {
        out.clear();
        out.reserve(self.map.len());
        self.for_each_slide(state, |slide| out.push(slide));
    }

    /// Number of pages (`ceil(total_items / slides_per_page)`).
    pub fn page_count(&self) -> usize {
        self.total_items().div_ceil(self.slides_per_page())
    }

    /// The page the slide at `index` belongs to (clones report their real slide's page).
    pub fn page_of(&self, index: SlideIndex) -> Option<usize> {
        let real = self.map.real_index(index)?;
        Some(real as usize / self.slides_per_page())
    }

    /// The last index a finite track can start a full page on.
    pub fn max_start(&self) -> SlideIndex {
        self.map.last_page_start()
    }
}
