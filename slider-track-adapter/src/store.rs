use alloc::sync::Arc;

use slider_track::{SliderAction, TrackState, TransformMap};

/// A callback fired after each action is applied, with the resulting state.
///
/// Hosts that render from this callback get one commit per action, which keeps the
/// `DisableTransition` / `AdjustCurrentSlide` pair in separate frames.
pub type OnCommitCallback = Arc<dyn Fn(&TrackState, &SliderAction) + Send + Sync>;

/// Applies one action to a track state.
///
/// `Navigate` is an animated move and re-enables transitions; `AdjustCurrentSlide` and
/// `SetTransformMap` move without touching the transition flag.
pub fn reduce(state: &TrackState, action: &SliderAction) -> TrackState {
    let mut next = *state;
    match action {
        SliderAction::DisableTransition => next.transition_enabled = false,
        SliderAction::EnableTransition => next.transition_enabled = true,
        SliderAction::Navigate {
            current_slide,
            transform,
        } => {
            next.current_slide = *current_slide;
            next.transform = *transform;
            next.transition_enabled = true;
        }
        SliderAction::AdjustCurrentSlide {
            current_slide,
            transform,
        }
        | SliderAction::SetTransformMap {
            current_slide,
            transform,
            ..
        } => {
            next.current_slide = *current_slide;
            next.transform = *transform;
        }
    }
    next
}

/// A reference state container for [`slider_track::SliderTrack`].
///
/// Actions are applied synchronously, in dispatch order, each producing its own commit.
#[derive(Clone)]
pub struct SliderStore {
    state: TrackState,
    map: Option<Arc<TransformMap>>,
    revision: u64,
    on_commit: Option<OnCommitCallback>,
}

impl SliderStore {
    pub fn new(state: TrackState) -> Self {
        Self {
            state,
            map: None,
            revision: 0,
            on_commit: None,
        }
    }

    pub fn state(&self) -> TrackState {
        self.state
    }

    /// The most recently published transform map.
    pub fn transform_map(&self) -> Option<&Arc<TransformMap>> {
        self.map.as_ref()
    }

    /// Number of actions applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set_on_commit(
        &mut self,
        on_commit: Option<impl Fn(&TrackState, &SliderAction) + Send + Sync + 'static>,
    ) {
        self.on_commit = on_commit.map(|f| Arc::new(f) as _);
    }

    pub fn dispatch(&mut self, action: SliderAction) {
        if let SliderAction::SetTransformMap { map, .. } = &action {
            self.map = Some(Arc::clone(map));
        }
        self.state = reduce(&self.state, &action);
        self.revision = self.revision.saturating_add(1);
        atrace!(
            action = action.kind(),
            current_slide = self.state.current_slide,
            transform = self.state.transform,
            transition_enabled = self.state.transition_enabled,
            revision = self.revision,
            "SliderStore::dispatch"
        );
        if let Some(cb) = &self.on_commit {
            cb(&self.state, &action);
        }
    }
}

impl core::fmt::Debug for SliderStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliderStore")
            .field("state", &self.state)
            .field("map", &self.map)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
