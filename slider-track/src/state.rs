use crate::SlideIndex;

/// A lightweight, serializable snapshot of the track's positional state.
///
/// This value is owned by the host's state container. The core only reads it and requests
/// changes through [`crate::SliderAction`]s; `transform` is always the transform map entry for
/// `current_slide`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackState {
    pub current_slide: SlideIndex,
    /// Horizontal offset in percent of the track width (`translate3d(x%, 0, 0)`).
    pub transform: f64,
    pub transition_enabled: bool,
}

impl TrackState {
    pub fn new(current_slide: SlideIndex, transform: f64, transition_enabled: bool) -> Self {
        Self {
            current_slide,
            transform,
            transition_enabled,
        }
    }
}
