use alloc::sync::Arc;

use crate::{SlideIndex, TransformMap};

/// A state-change request emitted by [`crate::SliderTrack`] to the host's state container.
///
/// Actions must be applied in emission order. In particular `DisableTransition` has to be
/// committed to the view before the `AdjustCurrentSlide` that follows it, or the loop reset
/// becomes visible.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderAction {
    /// The configuration changed: replace the transform map and re-sync the position.
    SetTransformMap {
        map: Arc<TransformMap>,
        current_slide: SlideIndex,
        transform: f64,
    },
    /// Animated move to `current_slide`.
    Navigate {
        current_slide: SlideIndex,
        transform: f64,
    },
    DisableTransition,
    /// Hosts may dispatch this themselves; the track never emits it.
    EnableTransition,
    /// Instant correction from a clone to the real slide it duplicates.
    AdjustCurrentSlide {
        current_slide: SlideIndex,
        transform: f64,
    },
}

impl SliderAction {
    /// A stable name for logs and debugging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetTransformMap { .. } => "SET_TRANSFORM_MAP",
            Self::Navigate { .. } => "NAVIGATE",
            Self::DisableTransition => "DISABLE_TRANSITION",
            Self::EnableTransition => "ENABLE_TRANSITION",
            Self::AdjustCurrentSlide { .. } => "ADJUST_CURRENT_SLIDE",
        }
    }

    /// The `(current_slide, transform)` pair this action moves to, if it moves the track.
    pub fn position(&self) -> Option<(SlideIndex, f64)> {
        match *self {
            Self::SetTransformMap {
                current_slide,
                transform,
                ..
            }
            | Self::Navigate {
                current_slide,
                transform,
            }
            | Self::AdjustCurrentSlide {
                current_slide,
                transform,
            } => Some((current_slide, transform)),
            Self::DisableTransition | Self::EnableTransition => None,
        }
    }
}
