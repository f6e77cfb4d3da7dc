use carousel::{CarouselOptions, Viewport};
use carousel_adapter::{Controller, Easing};

fn main() {
    // Example: a controller driving smooth scrolling without holding any UI objects.
    //
    // An adapter would:
    // - forward measurements, scroll and pointer events
    // - call tick(now_ms) in a frame loop / timer
    // - write the returned offset into the real scroll container
    let mut c = Controller::new(CarouselOptions::new(6).with_autoplay(false));
    c.set_easing(Easing::SmoothStep);
    c.on_viewport(Viewport::new(900.0, 1800.0, 1280.0));
    c.mount(0);

    let target = c.click_indicator(4, 0);
    println!("target_offset={target:?} index={}", c.current_index());

    let mut now_ms = 0u64;
    while let Some(off) = c.tick(now_ms) {
        if now_ms % 80 == 0 {
            println!("t={now_ms} off={off:.1} index={}", c.current_index());
        }
        now_ms += 16;
    }

    println!(
        "done: off={} index={}",
        c.carousel().scroll_offset(),
        c.current_index()
    );
}
