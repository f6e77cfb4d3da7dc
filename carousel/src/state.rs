use crate::Viewport;

/// A lightweight, serializable snapshot of the carousel position.
///
/// Useful for restoring the strip across remounts or sessions without coupling the engine to a
/// UI framework. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    pub index: usize,
    pub scroll_offset: f64,
    pub viewport: Viewport,
}
