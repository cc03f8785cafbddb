use slider_track::{SlideIndex, SliderOptions, SliderTrack, TrackState};

use crate::{SliderStore, TrackView, TransitionOptions, Tween};

/// How far `next`/`previous` move the track.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationStep {
    /// One page (`slides_per_page` slides).
    #[default]
    Page,
    /// A fixed number of slides. On looping tracks this is capped at one page so a move never
    /// skips past a clone band.
    Fixed(usize),
}

/// A framework-neutral controller that wires a [`SliderTrack`] to a [`SliderStore`].
///
/// This type does not hold any UI objects. Hosts drive it by calling:
/// - `next` / `previous` / `go_to` for navigation requests
/// - `on_transition_end` when their CSS transition finishes, **or** `tick(now_ms)` each frame
///   when the controller should animate the track itself
///
/// `view()` returns the style and slide attributes for the current state.
#[derive(Clone, Debug)]
pub struct Controller {
    track: SliderTrack,
    store: SliderStore,
    transition: TransitionOptions,
    step: NavigationStep,
    tween: Option<Tween>,
    offset: f64, // offset currently shown by tween-driven hosts
}

impl Controller {
    /// Creates and mounts a track.
    pub fn new(options: SliderOptions) -> Self {
        let mut track = SliderTrack::new(options);
        let mut store = SliderStore::new(track.initial_state());
        track.mount(&mut |a| store.dispatch(a));
        let offset = store.state().transform;
        Self {
            track,
            store,
            transition: TransitionOptions::default(),
            step: NavigationStep::default(),
            tween: None,
            offset,
        }
    }

    pub fn with_transition(mut self, transition: TransitionOptions) -> Self {
        self.transition = transition;
        self
    }

    pub fn with_navigation_step(mut self, step: NavigationStep) -> Self {
        self.step = step;
        self
    }

    pub fn track(&self) -> &SliderTrack {
        &self.track
    }

    pub fn store(&self) -> &SliderStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut SliderStore {
        &mut self.store
    }

    pub fn state(&self) -> TrackState {
        self.store.state()
    }

    pub fn transition(&self) -> &TransitionOptions {
        &self.transition
    }

    /// The offset a tween-driven host should currently display.
    pub fn displayed_offset(&self) -> f64 {
        self.offset
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// The page the current slide belongs to (for pagination dots).
    pub fn current_page(&self) -> Option<usize> {
        self.track.page_of(self.state().current_slide)
    }

    pub fn set_options(&mut self, options: SliderOptions) {
        let state = self.store.state();
        let store = &mut self.store;
        self.track.set_options(options, &state, &mut |a| store.dispatch(a));
        self.tween = None;
        self.offset = self.store.state().transform;
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut SliderOptions)) {
        let mut next = self.track.options().clone();
        f(&mut next);
        self.set_options(next);
    }

    /// Requests a move to `index` (clone indexes allowed on looping tracks).
    pub fn go_to(&mut self, index: SlideIndex, now_ms: u64) {
        self.settle(now_ms);
        self.navigate(index, now_ms);
    }

    /// Moves forward by one navigation step.
    ///
    /// Looping tracks step into the head clone band; finite tracks stop at the last full page.
    pub fn next(&mut self, now_ms: u64) {
        self.settle(now_ms);
        let current = self.state().current_slide;
        let step = self.step_len();
        let target = if self.track.transform_map().loops() {
            current.saturating_add(step)
        } else {
            current.saturating_add(step).min(self.track.max_start())
        };
        self.navigate(target, now_ms);
    }

    /// Moves backward by one navigation step.
    pub fn previous(&mut self, now_ms: u64) {
        self.settle(now_ms);
        let current = self.state().current_slide;
        let step = self.step_len();
        let target = if self.track.transform_map().loops() {
            current.saturating_sub(step)
        } else {
            current.saturating_sub(step).max(0)
        };
        self.navigate(target, now_ms);
    }

    /// Forwards the view's "transition finished" signal.
    ///
    /// Any in-flight tween is dropped: the movement is over.
    pub fn on_transition_end(&mut self) {
        self.tween = None;
        let state = self.store.state();
        let store = &mut self.store;
        self.track.on_transition_end(&state, &mut |a| store.dispatch(a));
        self.offset = self.store.state().transform;
    }

    /// Advances a self-animated transition.
    ///
    /// - If a tween is active, returns the offset to display; when the tween completes this fires
    ///   `on_transition_end` (which may reset the track from a clone without animation).
    /// - Otherwise returns `None`.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        let tween = self.tween?;
        self.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.on_transition_end();
        }
        Some(self.offset)
    }

    /// The view for the current state, as a CSS host would apply it.
    pub fn view(&self) -> TrackView {
        let state = self.store.state();
        TrackView::build(&self.track, &state, state.transform, &self.transition)
    }

    /// The view with the tween-sampled offset, for hosts that animate through `tick`.
    pub fn animated_view(&self) -> TrackView {
        let state = self.store.state();
        TrackView::build(&self.track, &state, self.offset, &self.transition)
    }

    fn step_len(&self) -> SlideIndex {
        let per_page = self.track.slides_per_page();
        let step = match self.step {
            NavigationStep::Page => per_page,
            NavigationStep::Fixed(n) if self.track.transform_map().loops() => {
                n.clamp(1, per_page)
            }
            NavigationStep::Fixed(n) => n.max(1),
        };
        SlideIndex::try_from(step).unwrap_or(SlideIndex::MAX)
    }

    /// Finishes an in-flight move before starting a new one, so the track never steps
    /// from a clone.
    ///
    /// An interrupted tween leaves the displayed offset where it was sampled at `now_ms`,
    /// shifted into the real band when a loop reset moved the track by a whole period.
    fn settle(&mut self, now_ms: u64) {
        let Some(tween) = self.tween else {
            self.on_transition_end();
            return;
        };
        let shown = self.real_band_offset(tween.sample(now_ms));
        self.on_transition_end();
        atrace!(offset = shown, "Controller: settled in-flight tween");
        self.offset = shown;
    }

    /// Maps a displayed offset to the offset showing the same content with the page start in
    /// the real band. Non-looping tracks return `offset` unchanged.
    fn real_band_offset(&self, offset: f64) -> f64 {
        let map = self.track.transform_map();
        let slide = map.slide_width_percent();
        if !map.loops() || slide <= 0.0 {
            return offset;
        }
        let clones = map.clone_count() as f64;
        let total = map.total_items() as f64;
        let position = ((-offset / slide - clones) % total + total) % total;
        -(position + clones) * slide
    }

    fn navigate(&mut self, index: SlideIndex, now_ms: u64) {
        let store = &mut self.store;
        self.track.navigate(index, &mut |a| store.dispatch(a));
        self.start_transition(now_ms);
    }

    fn start_transition(&mut self, now_ms: u64) {
        let state = self.store.state();
        if !state.transition_enabled || state.transform == self.offset {
            self.offset = state.transform;
            return;
        }
        adebug!(
            from = self.offset,
            to = state.transform,
            current_slide = state.current_slide,
            "Controller: starting transition"
        );
        self.tween = Some(Tween::new(
            self.offset,
            state.transform,
            now_ms.saturating_add(self.transition.delay_ms),
            self.transition.speed_ms,
            self.transition.easing,
        ));
    }
}
