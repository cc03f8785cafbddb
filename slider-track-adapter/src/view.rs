use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use slider_track::{RenderedSlide, SlideIndex, SliderTrack, TrackState};

use crate::Easing;

/// How the track animates between slides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionOptions {
    pub speed_ms: u64,
    pub delay_ms: u64,
    pub easing: Easing,
}

impl TransitionOptions {
    /// The CSS `transition` value for an enabled transition.
    pub fn css(&self) -> String {
        format!(
            "transform {}ms {} {}ms",
            self.speed_ms,
            self.easing.css_timing(),
            self.delay_ms
        )
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            speed_ms: 400,
            delay_ms: 0,
            easing: Easing::SmoothStep,
        }
    }
}

/// Formats a percentage the way CSS expects it (`-25%`, `400%`, `0%`).
pub fn format_percent(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}%")
}

/// `translate3d(x%, 0, 0)` for a track offset.
pub fn translate3d(offset: f64) -> String {
    format!("translate3d({}, 0, 0)", format_percent(offset))
}

/// Inline style of the track element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackStyle {
    pub width: String,
    pub transform: String,
    pub transition: String,
}

/// Attributes of one slide element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideAttributes {
    pub index: SlideIndex,
    /// `data-index`; absent on clones.
    pub data_index: Option<String>,
    pub role: &'static str,
    pub aria_roledescription: Option<&'static str>,
    pub aria_label: Option<String>,
    pub aria_hidden: bool,
    /// Whether the slide's content is materialized.
    pub rendered: bool,
    pub width: String,
}

impl SlideAttributes {
    pub fn from_slide(slide: &RenderedSlide, total_items: usize, width: &str) -> Self {
        Self {
            index: slide.index,
            data_index: slide.data_index.map(|i| format!("{i}")),
            role: slide.role.as_role_attr(),
            aria_roledescription: slide.role.role_description(),
            aria_label: slide.aria_label(total_items),
            aria_hidden: slide.aria_hidden,
            rendered: slide.is_rendered,
            width: String::from(width),
        }
    }

    /// The DOM attributes in a stable order; absent ones are skipped.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(5);
        if let Some(i) = &self.data_index {
            out.push(("data-index", i.clone()));
        }
        out.push(("role", String::from(self.role)));
        if let Some(d) = self.aria_roledescription {
            out.push(("aria-roledescription", String::from(d)));
        }
        if let Some(label) = &self.aria_label {
            out.push(("aria-label", label.clone()));
        }
        out.push((
            "aria-hidden",
            String::from(if self.aria_hidden { "true" } else { "false" }),
        ));
        out
    }
}

/// Everything a view layer needs to draw the track for one state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackView {
    pub style: TrackStyle,
    pub slides: Vec<SlideAttributes>,
    pub uses_pagination: bool,
}

impl TrackView {
    /// Builds the view for `state`, using `offset` as the applied track transform.
    ///
    /// CSS hosts pass `state.transform` and let the browser animate; hosts that tween pass the
    /// sampled offset.
    pub fn build(
        track: &SliderTrack,
        state: &TrackState,
        offset: f64,
        transition: &TransitionOptions,
    ) -> Self {
        let map = track.transform_map();
        let style = TrackStyle {
            width: format_percent(map.width_percent()),
            transform: translate3d(offset),
            transition: if state.transition_enabled {
                transition.css()
            } else {
                String::from("none")
            },
        };

        let width = format_percent(map.slide_width_percent());
        let total_items = track.total_items();
        let mut slides = Vec::with_capacity(map.len());
        track.for_each_slide(state, |slide| {
            slides.push(SlideAttributes::from_slide(&slide, total_items, &width));
        });

        Self {
            style,
            slides,
            uses_pagination: track.uses_pagination(),
        }
    }

    /// Slides whose content is materialized.
    pub fn rendered_slides(&self) -> impl Iterator<Item = &SlideAttributes> + '_ {
        self.slides.iter().filter(|s| s.rendered)
    }
}
