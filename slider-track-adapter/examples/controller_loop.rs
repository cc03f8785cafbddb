use slider_track::SliderOptions;
use slider_track_adapter::{Controller, Easing, TransitionOptions};

fn main() {
    // Example: a host without CSS transitions animating an infinite track itself.
    //
    // A host would:
    // - call next()/previous() in response to user input
    // - call tick(now_ms) in a frame loop and apply the returned offset
    // - render `animated_view()` (or `view()` if CSS does the animation)
    let mut c = Controller::new(SliderOptions::new(10, 5).with_infinite(true)).with_transition(
        TransitionOptions {
            speed_ms: 240,
            delay_ms: 0,
            easing: Easing::EaseInOutCubic,
        },
    );

    let mut now_ms = 0u64;
    for _ in 0..3 {
        c.next(now_ms);
        println!(
            "next -> slide={} page={:?}",
            c.state().current_slide,
            c.current_page()
        );
        while let Some(off) = c.tick(now_ms) {
            if now_ms % 80 == 0 {
                println!("t={now_ms} off={off}");
            }
            now_ms += 16;
        }
        let view = c.animated_view();
        println!(
            "rest: transform={} transition={} rendered={}",
            view.style.transform,
            view.style.transition,
            view.rendered_slides().count()
        );
    }
}
