use crate::*;

use carousel::{CarouselOptions, Viewport};

// Two items per view: container 800, item 400.
fn medium(count: usize) -> Viewport {
    Viewport::new(800.0, 400.0 * count as f64, 700.0)
}

fn controller(count: usize) -> Controller {
    let mut c = Controller::new(CarouselOptions::new(count));
    c.on_viewport(medium(count));
    c.mount(0);
    c
}

#[test]
fn easing_curves_are_monotonic_and_pinned() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mut last = 0.0;
        for step in 0..=100 {
            let v = easing.sample(step as f64 / 100.0);
            assert!(v >= last, "{easing:?} not monotonic at {step}");
            last = v;
        }
    }
}

#[test]
fn tween_lands_exactly_on_target() {
    let t = Tween::new(10.0, 733.0, 100, 0, Easing::SmoothStep);
    assert_eq!(t.duration_ms, 1);
    assert_eq!(t.sample(100), 10.0);
    assert_eq!(t.sample(101), 733.0);
    assert!(t.is_done(5_000));
    assert_eq!(t.sample(5_000), 733.0);
}

#[test]
fn controller_tween_drives_scroll_offset() {
    let mut c = controller(5);
    let to = c.scroll_to_index(3, 0).unwrap();
    assert_eq!(to, 1000.0);
    assert!(c.is_animating());
    assert_eq!(c.current_index(), 3);

    let mut last = 0.0;
    for now_ms in [0u64, 50, 100, 200, 300] {
        let off = c.tick(now_ms).unwrap();
        assert!(off >= last);
        last = off;
    }
    assert!(!c.is_animating());
    assert_eq!(c.carousel().scroll_offset(), to);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.tick(350), None);
}

#[test]
fn autoplay_ticks_start_tweens() {
    let mut c = controller(5);
    assert_eq!(c.tick(4_999), None);

    assert_eq!(c.tick(5_000), Some(0.0));
    assert_eq!(c.animation_target(), Some(200.0));
    assert_eq!(c.current_index(), 1);

    assert_eq!(c.tick(5_300), Some(200.0));
    assert!(!c.is_animating());
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.carousel().autoplay_timer().unwrap().due_ms, 10_000);
}

#[test]
fn user_scroll_cancels_tween() {
    let mut c = controller(5);
    c.scroll_to_index(3, 0);
    c.tick(100);
    assert!(c.is_animating());

    c.on_scroll(50.0);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().scroll_offset(), 50.0);
}

#[test]
fn drag_cancels_tween_and_release_animates_snap() {
    let mut c = controller(5);
    c.scroll_to_index(3, 0);
    c.tick(0);

    c.pointer_down(600.0);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().autoplay_timer(), None);

    // Drag left by 150px at 2x speed: offset 300, nearest item 1.
    assert_eq!(c.pointer_move(450.0), Some(300.0));
    assert_eq!(c.current_index(), 1);

    assert_eq!(c.pointer_up(1_000), Some(200.0));
    assert!(c.is_animating());
    assert_eq!(c.tick(1_300), Some(200.0));
    assert!(!c.is_animating());
    assert_eq!(c.current_index(), 1);
    assert_eq!(c.carousel().autoplay_timer().unwrap().due_ms, 6_000);
}

#[test]
fn pointer_leave_snaps_like_pointer_up() {
    let mut c = controller(5);
    c.pointer_down(600.0);
    c.pointer_move(450.0);
    assert_eq!(c.pointer_leave(20), Some(200.0));
    assert!(!c.carousel().is_dragging());
}

#[test]
fn indicator_click_retargets_running_tween() {
    let mut c = controller(5);
    c.set_easing(Easing::Linear);
    c.scroll_to_index(4, 0);
    let mid = c.tick(150).unwrap();
    assert_eq!(mid, 600.0);

    assert_eq!(c.click_indicator(1, 150), Some(200.0));
    assert_eq!(c.animation_target(), Some(200.0));

    // Continues from where the strip is instead of jumping back to the origin.
    assert_eq!(c.tick(150), Some(600.0));
    assert_eq!(c.tick(450), Some(200.0));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn teardown_stops_animation_and_autoplay() {
    let mut c = controller(5);
    c.scroll_to_index(2, 0);
    c.teardown();

    assert!(!c.is_animating());
    assert!(c.carousel().is_torn_down());
    assert_eq!(c.tick(5_000), None);
    assert_eq!(c.tick(1_000_000), None);
    assert_eq!(c.scroll_to_index(3, 0), None);
}

#[test]
fn idle_controller_reports_nothing() {
    let mut c = Controller::new(CarouselOptions::new(5).with_autoplay(false));
    c.on_viewport(medium(5));
    c.mount(0);
    for now_ms in [0u64, 5_000, 50_000] {
        assert_eq!(c.tick(now_ms), None);
    }
    assert_eq!(c.current_index(), 0);
}

#[test]
fn scroll_duration_is_configurable() {
    let mut c = controller(5);
    c.set_scroll_duration_ms(1_000);
    assert_eq!(c.scroll_duration_ms(), 1_000);
    c.scroll_to_index(2, 0);
    c.tick(500);
    assert!(c.is_animating());
    c.tick(1_000);
    assert!(!c.is_animating());
    assert_eq!(c.carousel().scroll_offset(), 600.0);
}

#[test]
fn retarget_picks_up_new_easing() {
    let mut c = controller(5);
    c.scroll_to_index(4, 0);
    // EaseInOutCubic at the halfway point.
    assert_eq!(c.tick(150), Some(600.0));

    c.set_easing(Easing::Linear);
    assert_eq!(c.click_indicator(1, 150), Some(200.0));
    // A quarter of the way from 600 to 200, linearly.
    assert_eq!(c.tick(225), Some(500.0));
}
