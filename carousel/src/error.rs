use thiserror::Error;

/// Invalid carousel configuration, reported by [`crate::CarouselOptions::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum OptionsError {
    #[error("autoplay interval must be greater than zero")]
    ZeroInterval,

    #[error("drag speed must be finite and positive, got {0}")]
    InvalidDragSpeed(f64),

    #[error("breakpoints must be positive and increasing, got small={small} medium={medium}")]
    InvalidBreakpoints { small: f64, medium: f64 },

    #[error("inactive opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f32),
}
