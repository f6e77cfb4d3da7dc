use carousel::{Carousel, CarouselOptions, Viewport};

fn main() {
    let mut c = Carousel::new(CarouselOptions::new(6));
    // Wide window: three items share a 900px strip.
    c.set_viewport(Viewport::new(900.0, 1800.0, 1280.0));
    c.mount(0);

    println!("item_width={:?}", c.item_width());
    println!("scroll_to_index(3) -> {:?}", c.scroll_to_index(3));
    println!("current_index={}", c.current_index());

    // The UI reports the strip passing through intermediate offsets.
    for offset in [150.0, 300.0, 450.0] {
        c.on_scroll(offset);
        println!("on_scroll({offset}) -> index={}", c.current_index());
    }

    let dots: String = c
        .indicators()
        .iter()
        .map(|d| if d.active { '●' } else { '○' })
        .collect();
    println!("indicators {dots}");
}
