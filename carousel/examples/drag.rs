// Example: an adapter forwarding mouse events during a drag.
use carousel::{Carousel, CarouselOptions, ScrollBehavior, Viewport};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(8));
    c.set_viewport(Viewport::new(800.0, 3200.0, 700.0));
    c.mount(0);

    let mut now_ms = 0u64;
    c.pointer_down(600.0);
    println!("drag started, autoplay timer={:?}", c.autoplay_timer());

    for x in [560.0, 500.0, 420.0, 380.0] {
        now_ms += 16;
        if let Some(req) = c.pointer_move(x) {
            debug_assert_eq!(req.behavior, ScrollBehavior::Instant);
            println!("t={now_ms} x={x} offset={} index={}", req.offset, c.current_index());
        }
    }

    now_ms += 16;
    let snap = c.pointer_up(now_ms);
    println!("released: snap={snap:?} index={}", c.current_index());
    println!("autoplay resumed: timer={:?}", c.autoplay_timer());
}
