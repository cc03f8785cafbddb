//! A headless state machine for infinite carousel tracks.
//!
//! For adapter-level utilities (reference store, transition tweens, view attributes), see the
//! `slider-track-adapter` crate.
//!
//! This crate focuses on the positional core of a looping slider: mapping slide indexes
//! (including the clone bands that fake an endless track) to `translate3d` offsets, resetting
//! from a clone to its real slide without a visible jump, and choosing which slides have to be
//! materialized right now.
//!
//! It is UI-agnostic. A host layer is expected to provide:
//! - a state container that stores the [`TrackState`] and applies [`SliderAction`]s in order
//! - a "transition finished" signal when the track's movement animation completes
//! - the actual drawing of the [`RenderedSlide`] descriptors
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod action;
pub mod decorate;
mod emitter;
mod options;
mod state;
mod track;
mod transform;
mod types;
pub mod window;


pub use action::SliderAction;
pub use emitter::IndexEmitter;
pub use options::SliderOptions;
pub use state::TrackState;
pub use track::SliderTrack;
pub use transform::TransformMap;
pub use types::{IndexRange, RenderedSlide, SlideIndex, SlideRole};
pub use window::RenderWindow;
