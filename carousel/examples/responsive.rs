// Example: the same strip measured at three window widths.
use carousel::{Carousel, CarouselOptions, ItemsPerView, Viewport};

fn main() {
    let count = 5;
    let mut c = Carousel::new(CarouselOptions::new(count));

    for (container, window) in [(360.0, 375.0), (720.0, 768.0), (1140.0, 1440.0)] {
        let per_view = ItemsPerView::for_window(window, c.options().breakpoints);
        let item = container / f64::from(per_view.get());
        c.set_viewport(Viewport::new(container, item * count as f64, window));

        let offsets: Vec<_> = (0..count).filter_map(|i| c.offset_for_index(i)).collect();
        println!("window={window} per_view={per_view:?} item={item} offsets={offsets:?}");
    }
}
