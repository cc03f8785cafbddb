//! Adapter utilities for the `slider-track` crate.
//!
//! The `slider-track` crate is UI-agnostic and focuses on the positional core. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - A reference state container (`reduce` + [`SliderStore`]) that applies actions in order
//! - Tween-driven transitions for hosts without CSS transitions
//! - A [`Controller`] with page navigation and transition-end wiring
//! - View attributes: track style strings and per-slide ARIA attributes
//!
//! This crate is intentionally framework-agnostic (no DOM or widget toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod store;
mod tween;
mod view;

#[cfg(test)]
mod tests;

pub use controller::{Controller, NavigationStep};
pub use store::{OnCommitCallback, SliderStore, reduce};
pub use tween::{Easing, Tween};
pub use view::{
    SlideAttributes, TrackStyle, TrackView, TransitionOptions, format_percent, translate3d,
};
