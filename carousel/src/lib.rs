//! A headless carousel engine.
//!
//! For adapter-level utilities (tween scrolling, a frame-driven controller), see the
//! `carousel-adapter` crate.
//!
//! This crate holds the state and math behind a horizontally scrolling item strip: responsive
//! item widths, scroll-to-index offsets, passive "closest to centre" index tracking,
//! drag-to-scroll sessions, autoplay with pause-on-interaction, and position indicators.
//!
//! It is UI-agnostic. A TUI/GUI/web layer is expected to provide:
//! - viewport measurements (container, content and window widths)
//! - scroll offsets reported by the real scroll container
//! - pointer positions and a millisecond clock
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod error;
pub mod layout;
mod options;
mod state;
mod types;


pub use autoplay::{AutoplayTimer, TimerId};
pub use carousel::Carousel;
pub use error::OptionsError;
pub use layout::{Breakpoints, ItemsPerView};
pub use options::{
    CarouselConfig, CarouselOptions, DEFAULT_DRAG_SPEED, DEFAULT_INACTIVE_OPACITY,
    DEFAULT_INTERVAL_MS, OnChangeCallback,
};
pub use state::CarouselState;
pub use types::{DragSession, IndexChangeReason, Indicator, ScrollBehavior, ScrollRequest, Viewport};
