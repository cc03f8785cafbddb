use crate::*;

use slider_track::{SlideIndex, SliderAction, SliderOptions, TrackState, TransformMap};

use std::collections::BTreeSet;
use std::string::String;
use std::sync::{Arc, Mutex};
use std::vec::Vec;

fn paginated(total: usize, infinite: bool) -> Controller {
    Controller::new(SliderOptions::new(total, 5).with_infinite(infinite))
}

fn run_to_rest(c: &mut Controller, from_ms: u64) -> Vec<f64> {
    let mut offsets = Vec::new();
    let mut now_ms = from_ms;
    while let Some(off) = c.tick(now_ms) {
        offsets.push(off);
        now_ms += 16;
    }
    offsets
}

#[test]
fn track_style_reflects_width_transform_and_transition() {
    let c = paginated(10, true);
    let view = c.view();
    assert_eq!(view.style.width, "400%");
    assert_eq!(view.style.transform, "translate3d(-25%, 0, 0)");
    assert_eq!(view.style.transition, "transform 400ms ease-in-out 0ms");
    assert!(view.uses_pagination);

    let view = paginated(10, false).view();
    assert_eq!(view.style.width, "200%");
    assert_eq!(view.style.transform, "translate3d(0%, 0, 0)");

    assert_eq!(paginated(5, true).view().style.width, "100%");
    assert_eq!(paginated(3, true).view().style.width, "100%");
}

#[test]
fn slide_index_markers_skip_clones() {
    let view = paginated(10, true).view();
    assert_eq!(view.slides.len(), 20);
    for (idx, slide) in view.slides.iter().enumerate() {
        if idx >= 15 || idx < 5 {
            assert_eq!(slide.data_index, None);
            continue;
        }
        assert_eq!(slide.data_index.as_deref(), Some(std::format!("{}", idx + 1 - 5).as_str()));
    }

    let view = paginated(10, false).view();
    for (idx, slide) in view.slides.iter().enumerate() {
        assert_eq!(slide.data_index, Some(std::format!("{}", idx + 1)));
    }
}

#[test]
fn only_the_visible_page_is_rendered_on_mount() {
    let view = paginated(10, true).view();
    assert_eq!(view.rendered_slides().count(), 15);
    assert_eq!(
        view.rendered_slides().filter(|s| s.data_index.is_some()).count(),
        5
    );

    let view = paginated(10, false).view();
    assert_eq!(view.rendered_slides().count(), 5);

    for infinite in [true, false] {
        let c = Controller::new(
            SliderOptions::new(10, 5)
                .with_infinite(infinite)
                .with_pagination(false),
        );
        let view = c.view();
        assert!(!view.uses_pagination);
        assert_eq!(
            view.rendered_slides().filter(|s| s.data_index.is_some()).count(),
            10
        );
    }
}

#[test]
fn slides_expose_aria_attributes() {
    let view = paginated(10, true).view();

    let clones = view
        .slides
        .iter()
        .filter(|s| s.role == "none presentation")
        .count();
    assert_eq!(clones, 10);

    let visible = view.slides.iter().filter(|s| !s.aria_hidden).count();
    assert_eq!(visible, 5);

    let described = view
        .slides
        .iter()
        .filter(|s| s.aria_roledescription == Some("slide"))
        .count();
    assert_eq!(described, 10);

    let labels: BTreeSet<String> = view
        .slides
        .iter()
        .filter_map(|s| s.aria_label.clone())
        .collect();
    for k in 1..=10 {
        assert!(labels.contains(&std::format!("{k} of 10")));
    }

    let first_real = &view.slides[5];
    assert_eq!(first_real.width, "5%");
    assert_eq!(
        first_real.attributes(),
        [
            ("data-index", String::from("1")),
            ("role", String::from("group")),
            ("aria-roledescription", String::from("slide")),
            ("aria-label", String::from("1 of 10")),
            ("aria-hidden", String::from("false")),
        ]
    );
    assert_eq!(
        view.slides[0].attributes(),
        [
            ("role", String::from("none presentation")),
            ("aria-hidden", String::from("true")),
        ]
    );
}

#[test]
fn reducer_moves_slide_and_transform_together() {
    let state = TrackState::new(0, -25.0, false);

    let next = reduce(
        &state,
        &SliderAction::Navigate {
            current_slide: 5,
            transform: -50.0,
        },
    );
    assert_eq!(next, TrackState::new(5, -50.0, true));

    let next = reduce(&next, &SliderAction::DisableTransition);
    assert!(!next.transition_enabled);
    let next = reduce(
        &next,
        &SliderAction::AdjustCurrentSlide {
            current_slide: 0,
            transform: -25.0,
        },
    );
    assert_eq!(next, TrackState::new(0, -25.0, false));
    assert!(reduce(&next, &SliderAction::EnableTransition).transition_enabled);
}

#[test]
fn store_keeps_the_published_transform_map() {
    let map = Arc::new(TransformMap::build(10, 5, true));
    let mut store = SliderStore::new(TrackState::default());
    assert!(store.transform_map().is_none());
    store.dispatch(SliderAction::SetTransformMap {
        map: Arc::clone(&map),
        current_slide: 2,
        transform: map.get(2).unwrap(),
    });
    assert_eq!(store.revision(), 1);
    assert!(Arc::ptr_eq(store.transform_map().unwrap(), &map));
    assert_eq!(store.state().current_slide, 2);
    assert_eq!(store.state().transform, -35.0);
}

#[test]
fn loop_reset_commits_disable_before_adjust() {
    let mut c = paginated(10, true);
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    c.store_mut()
        .set_on_commit(Some(move |state: &TrackState, action: &SliderAction| {
            sink.lock().unwrap().push((
                action.kind(),
                state.current_slide,
                state.transition_enabled,
            ));
        }));

    c.go_to(10, 0);
    c.on_transition_end();
    // A late duplicate signal changes nothing.
    c.on_transition_end();

    let log = log.lock().unwrap();
    assert_eq!(
        *log,
        [
            ("NAVIGATE", 10, true),
            ("DISABLE_TRANSITION", 10, false),
            ("ADJUST_CURRENT_SLIDE", 0, false),
        ]
    );
    assert_eq!(c.state().transform, -25.0);
    assert_eq!(c.view().style.transition, "none");
}

#[test]
fn tween_drives_the_track_and_resets_past_the_last_page() {
    let mut c = paginated(10, true);

    c.next(0);
    assert!(c.is_animating());
    assert_eq!(c.state().current_slide, 5);
    let offsets = run_to_rest(&mut c, 0);
    assert!(offsets.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(offsets.last().copied(), Some(-50.0));
    assert_eq!(c.current_page(), Some(1));

    // Past the last page: animate onto the head clones, then jump back without a transition.
    c.next(1_000);
    assert_eq!(c.state().current_slide, 10);
    let offsets = run_to_rest(&mut c, 1_000);
    assert!(offsets.iter().any(|&o| o < -50.0));
    assert!(!c.is_animating());
    assert_eq!(c.state(), TrackState::new(0, -25.0, false));
    assert_eq!(c.displayed_offset(), -25.0);
    assert_eq!(c.current_page(), Some(0));

    // Before the first page: animate onto the tail clones, then jump to the last page.
    c.previous(2_000);
    assert_eq!(c.state().current_slide, -5);
    assert!(c.state().transition_enabled);
    run_to_rest(&mut c, 2_000);
    assert_eq!(c.state(), TrackState::new(5, -50.0, false));
}

#[test]
fn navigating_mid_flight_settles_the_pending_reset() {
    let mut c = paginated(10, true);
    c.go_to(10, 0);
    assert!(c.is_animating());
    // Interrupt before the tween completes: the track resets to 0 first, then steps to 5.
    c.next(100);
    assert_eq!(c.state().current_slide, 5);
    // The next tween starts where the interrupted one was, not at the reset target.
    let shown = c.displayed_offset();
    assert!(shown < -25.0 && shown > -50.0, "{shown}");
    assert_eq!(c.tick(100), Some(shown));
    run_to_rest(&mut c, 100);
    assert_eq!(c.animated_view().style.transform, "translate3d(-50%, 0, 0)");
}

#[test]
fn interrupted_tween_inside_a_clone_band_continues_from_the_real_band() {
    let mut c = paginated(10, true).with_transition(TransitionOptions {
        speed_ms: 400,
        delay_ms: 0,
        easing: Easing::Linear,
    });
    // Index 14 is the last head clone (offset -95%); at 300ms the tween shows -77.5%.
    c.go_to(14, 0);
    assert_eq!(c.tick(300), Some(-77.5));

    // Same content one period earlier: -77.5% + 50% (ten slides of 5%).
    c.next(300);
    assert_eq!(c.state().current_slide, 9);
    assert!((c.displayed_offset() + 27.5).abs() < 1e-6);
    let offsets = run_to_rest(&mut c, 300);
    assert!((offsets[0] + 27.5).abs() < 1e-6);
    assert!(offsets.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(c.state(), TrackState::new(9, -70.0, true));
}

#[test]
fn oversized_fixed_step_saturates_instead_of_wrapping() {
    let mut c = paginated(20, false).with_navigation_step(NavigationStep::Fixed(usize::MAX));
    c.go_to(5, 0);
    run_to_rest(&mut c, 0);
    c.next(1_000);
    assert_eq!(c.state().current_slide, 15);
    c.previous(2_000);
    assert_eq!(c.state().current_slide, 0);

    let mut c = paginated(20, false)
        .with_navigation_step(NavigationStep::Fixed(SlideIndex::MAX as usize));
    c.go_to(15, 0);
    c.next(1_000);
    assert_eq!(c.state().current_slide, 15);

    let mut c = paginated(10, true).with_navigation_step(NavigationStep::Fixed(usize::MAX));
    c.next(0);
    assert_eq!(c.state().current_slide, 5);
}

#[test]
fn finite_track_stops_at_the_last_full_page() {
    let mut c = paginated(12, false);
    let mut seen = Vec::new();
    for i in 0..3u64 {
        c.next(i * 1_000);
        run_to_rest(&mut c, i * 1_000);
        seen.push(c.state().current_slide);
    }
    assert_eq!(seen, [5, 7, 7]);

    c.previous(5_000);
    run_to_rest(&mut c, 5_000);
    c.previous(6_000);
    run_to_rest(&mut c, 6_000);
    assert_eq!(c.state().current_slide, 0);
    c.previous(7_000);
    assert!(!c.is_animating());
    assert_eq!(c.state().current_slide, 0);
}

#[test]
fn fixed_navigation_step_is_capped_on_looping_tracks() {
    let mut c = paginated(10, true).with_navigation_step(NavigationStep::Fixed(2));
    c.next(0);
    assert_eq!(c.state().current_slide, 2);

    let mut c = paginated(10, true).with_navigation_step(NavigationStep::Fixed(9));
    c.next(0);
    assert_eq!(c.state().current_slide, 5);

    let mut c = paginated(20, false).with_navigation_step(NavigationStep::Fixed(9));
    c.next(0);
    assert_eq!(c.state().current_slide, 9);
}

#[test]
fn transition_delay_holds_the_starting_offset() {
    let mut c = paginated(10, true).with_transition(TransitionOptions {
        speed_ms: 200,
        delay_ms: 100,
        easing: Easing::Linear,
    });
    assert_eq!(c.view().style.transition, "transform 200ms linear 100ms");
    c.next(0);
    assert_eq!(c.tick(50), Some(-25.0));
    assert_eq!(c.tick(200), Some(-37.5));
    assert_eq!(c.tick(300), Some(-50.0));
    assert_eq!(c.tick(316), None);
}

#[test]
fn configuration_change_renormalizes_the_position() {
    let mut c = paginated(10, true);
    c.go_to(8, 0);
    run_to_rest(&mut c, 0);
    c.update_options(|o| o.total_items = 3);
    assert_eq!(c.state().current_slide, 0);
    assert_eq!(c.state().transform, 0.0);
    let view = c.view();
    assert_eq!(view.style.width, "100%");
    assert_eq!(view.style.transform, "translate3d(0%, 0, 0)");
    assert_eq!(view.slides.len(), 3);
    assert_eq!(view.slides[0].width, "20%");
}

#[test]
fn tween_interpolates_signed_offsets() {
    let t = Tween::new(-25.0, -75.0, 100, 100, Easing::Linear);
    assert_eq!(t.sample(0), -25.0);
    assert_eq!(t.sample(150), -50.0);
    assert_eq!(t.sample(500), -75.0);
    assert!(!t.is_done(199));
    assert!(t.is_done(200));

    let mut t = Tween::new(0.0, -100.0, 0, 100, Easing::Linear);
    t.retarget(50, 0.0, 100);
    assert_eq!(t.from, -50.0);
    assert_eq!(t.sample(150), 0.0);

    assert_eq!(Easing::SmoothStep.sample(0.5), 0.5);
    assert_eq!(Easing::EaseInOutCubic.sample(1.0), 1.0);
}

#[test]
fn percentages_format_like_css() {
    assert_eq!(format_percent(-0.0), "0%");
    assert_eq!(format_percent(400.0), "400%");
    assert_eq!(format_percent(-37.5), "-37.5%");
    assert_eq!(translate3d(-25.0), "translate3d(-25%, 0, 0)");
}
