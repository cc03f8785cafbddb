//! Per-slide display metadata: clone detection, real ordinals and accessibility.

use crate::types::index_span;
use crate::{RenderWindow, RenderedSlide, SlideIndex, SlideRole, TransformMap};

/// Returns `true` when `index` lies outside the real slides (`0..total_items`).
pub fn is_clone(index: SlideIndex, total_items: usize) -> bool {
    index < 0 || index >= total_items as SlideIndex
}

/// The 1-based ordinal of the real slide shown at `index`.
///
/// Clones report the ordinal of the slide they duplicate. Returns `None` when `total_items` is 0.
pub fn real_ordinal(index: SlideIndex, total_items: usize) -> Option<usize> {
    if total_items == 0 {
        return None;
    }
    let total = total_items as SlideIndex;
    Some((((index % total) + total) % total + 1) as usize)
}

/// Returns `true` when `index` is inside the page that starts at `current_slide`.
pub fn is_in_visible_page(
    index: SlideIndex,
    current_slide: SlideIndex,
    slides_per_page: usize,
) -> bool {
    index >= current_slide && index < current_slide.saturating_add(index_span(slides_per_page))
}

/// Computes the render metadata for `index`.
///
/// Real slides inside the visible page are announced; real slides outside it and every clone
/// are `aria-hidden`.
pub fn decorate(
    map: &TransformMap,
    window: &RenderWindow,
    current_slide: SlideIndex,
    index: SlideIndex,
) -> RenderedSlide {
    let total_items = map.total_items();
    let clone = is_clone(index, total_items);
    let ordinal = real_ordinal(index, total_items);
    let visible = is_in_visible_page(index, current_slide, map.slides_per_page());

    RenderedSlide {
        index,
        is_rendered: window.is_rendered(index),
        is_clone: clone,
        real_ordinal: ordinal,
        aria_hidden: clone || !visible,
        role: if clone {
            SlideRole::Presentation
        } else {
            SlideRole::Slide
        },
        data_index: if clone { None } else { ordinal },
    }
}
