//! Color and swatch value types shared by the swatch picker crates.
//!
//! - [`HslColor`]: immutable HSL color with hex conversions
//! - [`Swatch`] / [`InternalSwatch`]: solid or two-stop gradient, in wire and
//!   computation form
//! - [`clamp`], [`random_internal`]: keep swatches inside the wheel's range

pub mod color;
pub mod constants;
pub mod error;
pub mod hue;
pub mod swatch;

// Intentionally curated re-exports for downstream consumers.
pub use color::HslColor;
pub use constants::{
    DEFAULT_HUE_OFFSET, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS,
    DEFAULT_SATURATION, DEFAULT_SAVED_SWATCHES_LIMIT, SAVED_SWATCHES_KEY,
    SWATCH_PICKER_NAME,
};
pub use error::{ColorParseError, ParseSwatchModeError};
pub use hue::{normalize_hue, shortest_hue_delta};
pub use swatch::{
    HueLinkPolicy, InternalSwatch, Swatch, SwatchMode, clamp, clamp_color,
    clamp_with, random_color, random_internal, random_swatch, to_external,
    to_internal,
};
