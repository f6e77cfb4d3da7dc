use carousel::{CarouselOptions, IndexChangeReason, Viewport};
use carousel_adapter::Controller;
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=carousel=trace,carousel_adapter=trace for every scroll event.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("carousel=debug")),
        )
        .init();

    let options = CarouselOptions::new(4)
        .with_interval_ms(1_000)
        .with_on_change(Some(|c: &carousel::Carousel, reason: IndexChangeReason| {
            tracing::info!(index = c.current_index(), ?reason, "index changed");
        }));
    let mut c = Controller::new(options);
    c.on_viewport(Viewport::new(400.0, 1600.0, 390.0));
    c.mount(0);

    // Simulate 60fps for ten seconds with a drag in the middle.
    let mut now_ms = 0u64;
    while now_ms <= 10_000 {
        match now_ms {
            4_000 => c.pointer_down(300.0),
            4_048 => {
                c.pointer_move(200.0);
            }
            4_096 => {
                c.pointer_up(now_ms);
            }
            _ => {}
        }
        c.tick(now_ms);
        now_ms += 16;
    }

    c.teardown();
    tracing::info!(
        index = c.current_index(),
        torn_down = c.carousel().is_torn_down(),
        "simulation finished"
    );
}
