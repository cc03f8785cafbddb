// Example: mount a looping track, move past the last page and apply the loop reset.
use slider_track::{SliderAction, SliderOptions, SliderTrack, TrackState};

fn apply(state: &mut TrackState, action: &SliderAction) {
    println!("  {}", action.kind());
    match action {
        SliderAction::DisableTransition => state.transition_enabled = false,
        SliderAction::EnableTransition => state.transition_enabled = true,
        _ => {
            if let Some((current_slide, transform)) = action.position() {
                state.current_slide = current_slide;
                state.transform = transform;
            }
            if matches!(action, SliderAction::Navigate { .. }) {
                state.transition_enabled = true;
            }
        }
    }
}

fn main() {
    let mut track = SliderTrack::new(SliderOptions::new(10, 5).with_infinite(true));
    let mut state = track.initial_state();

    println!("mount:");
    track.mount(&mut |a| apply(&mut state, &a));
    println!(
        "width={}% transform={}% window={}",
        track.track_width_percent(),
        state.transform,
        track.window(&state).rendered_count()
    );

    println!("navigate to head clone 10:");
    track.navigate(10, &mut |a| apply(&mut state, &a));
    println!("state={state:?}");

    println!("transition finished:");
    let snapshot = state;
    track.on_transition_end(&snapshot, &mut |a| apply(&mut state, &a));
    println!("state={state:?}");

    let mut slides = Vec::new();
    track.collect_slides(&state, &mut slides);
    for slide in slides.iter().filter(|s| !s.aria_hidden) {
        println!("visible: {:?}", slide.aria_label(track.total_items()));
    }
}
