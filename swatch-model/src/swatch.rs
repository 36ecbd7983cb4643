//! Swatch values
//!
//! A swatch is either a solid color or a two-stop gradient. [`Swatch`] is the
//! wire form handed to integrators and persisted (hex strings);
//! [`InternalSwatch`] carries parsed [`HslColor`]s for computation.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::HslColor;
use crate::constants::{
    DEFAULT_HUE_OFFSET, DEFAULT_MAX_LIGHTNESS, DEFAULT_MIN_LIGHTNESS,
    DEFAULT_SATURATION, HUE_LINK_TOLERANCE,
};
use crate::error::{ColorParseError, ParseSwatchModeError};
use crate::hue::{offsets_match, shortest_hue_delta};

/// Which kind of swatch is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SwatchMode {
    /// A single color
    Solid,
    /// Two color stops
    #[default]
    Gradient,
}

impl SwatchMode {
    /// Both modes, in toggle order
    pub const ALL: [SwatchMode; 2] = [Self::Solid, Self::Gradient];

    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Gradient => "gradient",
        }
    }
}

impl fmt::Display for SwatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SwatchMode {
    type Err = ParseSwatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "gradient" => Ok(Self::Gradient),
            _ => Err(ParseSwatchModeError(s.to_string())),
        }
    }
}

/// Swatch as exposed to integrators and storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "mode", rename_all = "lowercase")
)]
pub enum Swatch {
    /// A single hex color
    Solid {
        /// `#rrggbb`
        color: String,
    },
    /// Two hex color stops, primary first
    Gradient {
        /// `[primary, secondary]`
        colors: [String; 2],
    },
}

impl Swatch {
    /// Convenience constructor for a solid swatch
    pub fn solid(color: impl Into<String>) -> Self {
        Self::Solid {
            color: color.into(),
        }
    }

    /// Convenience constructor for a gradient swatch
    pub fn gradient(
        primary: impl Into<String>,
        secondary: impl Into<String>,
    ) -> Self {
        Self::Gradient {
            colors: [primary.into(), secondary.into()],
        }
    }

    /// Mode tag of this swatch
    pub fn mode(&self) -> SwatchMode {
        match self {
            Self::Solid { .. } => SwatchMode::Solid,
            Self::Gradient { .. } => SwatchMode::Gradient,
        }
    }

    /// Parse into computation form
    pub fn to_internal(&self) -> Result<InternalSwatch, ColorParseError> {
        to_internal(self)
    }

    /// CSS `background` value for a preview of this swatch
    pub fn css_background(&self) -> String {
        match self {
            Self::Solid { color } => color.clone(),
            Self::Gradient { colors: [a, b] } => {
                format!("linear-gradient(135deg, {a}, {b})")
            }
        }
    }

    /// Human readable description, suitable for an accessible label
    pub fn label(&self) -> String {
        match self {
            Self::Solid { color } => format!("solid color {color}"),
            Self::Gradient { colors: [a, b] } => {
                format!("gradient from {a} to {b}")
            }
        }
    }

    /// Stable key for list rendering
    pub fn key(&self) -> String {
        match self {
            Self::Solid { color } => color.clone(),
            Self::Gradient { colors: [a, b] } => format!("{a}-{b}"),
        }
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid { color } => write!(f, "solid {color}"),
            Self::Gradient { colors: [a, b] } => {
                write!(f, "gradient {a} -> {b}")
            }
        }
    }
}

/// Swatch in computation form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InternalSwatch {
    /// A single color
    Solid {
        /// The color
        color: HslColor,
    },
    /// Two color stops, primary first
    Gradient {
        /// `[primary, secondary]`
        colors: [HslColor; 2],
    },
}

impl InternalSwatch {
    /// Mode tag of this swatch
    pub fn mode(&self) -> SwatchMode {
        match self {
            Self::Solid { .. } => SwatchMode::Solid,
            Self::Gradient { .. } => SwatchMode::Gradient,
        }
    }

    /// The solid color, or the first gradient stop
    pub fn primary(&self) -> HslColor {
        match self {
            Self::Solid { color } => *color,
            Self::Gradient { colors } => colors[0],
        }
    }

    /// The second gradient stop, if any
    pub fn secondary(&self) -> Option<HslColor> {
        match self {
            Self::Solid { .. } => None,
            Self::Gradient { colors } => Some(colors[1]),
        }
    }

    /// Serialize to wire form
    pub fn to_external(&self) -> Swatch {
        to_external(self)
    }

    /// Semantic equality: same mode and same hex color(s)
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Solid { color: a }, Self::Solid { color: b }) => {
                a.same_hex(b)
            }
            (
                Self::Gradient { colors: [a1, a2] },
                Self::Gradient { colors: [b1, b2] },
            ) => a1.same_hex(b1) && a2.same_hex(b2),
            _ => false,
        }
    }

    /// Gradient with its stops exchanged; solids are returned unchanged
    pub fn swapped(&self) -> Self {
        match self {
            Self::Solid { .. } => *self,
            Self::Gradient { colors: [a, b] } => Self::Gradient {
                colors: [*b, *a],
            },
        }
    }

    /// Convert to another mode.
    ///
    /// Solid to gradient adds a secondary stop rotated by
    /// [`DEFAULT_HUE_OFFSET`]. Gradient to solid keeps the primary stop.
    pub fn with_mode(&self, mode: SwatchMode) -> Self {
        match (self, mode) {
            (Self::Solid { color }, SwatchMode::Gradient) => Self::Gradient {
                colors: [*color, color.rotate_hue(DEFAULT_HUE_OFFSET)],
            },
            (Self::Gradient { colors }, SwatchMode::Solid) => Self::Solid {
                color: colors[0],
            },
            _ => *self,
        }
    }
}

/// How [`clamp_with`] treats the hue distance between gradient stops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HueLinkPolicy {
    /// Keep an existing offset of +/-[`DEFAULT_HUE_OFFSET`] (e.g. a swapped
    /// gradient), reset any other offset to +[`DEFAULT_HUE_OFFSET`]
    #[default]
    Preserve,
    /// Always reset the offset to +[`DEFAULT_HUE_OFFSET`]
    Reset,
}

/// Parse every hex string of a wire swatch
pub fn to_internal(swatch: &Swatch) -> Result<InternalSwatch, ColorParseError> {
    match swatch {
        Swatch::Solid { color } => Ok(InternalSwatch::Solid {
            color: HslColor::from_hex(color)?,
        }),
        Swatch::Gradient { colors: [a, b] } => Ok(InternalSwatch::Gradient {
            colors: [HslColor::from_hex(a)?, HslColor::from_hex(b)?],
        }),
    }
}

/// Serialize every color to `#rrggbb`
pub fn to_external(swatch: &InternalSwatch) -> Swatch {
    match swatch {
        InternalSwatch::Solid { color } => Swatch::Solid {
            color: color.to_hex(),
        },
        InternalSwatch::Gradient { colors: [a, b] } => Swatch::Gradient {
            colors: [a.to_hex(), b.to_hex()],
        },
    }
}

/// Pin saturation and bound lightness to the wheel's range
pub fn clamp_color(color: &HslColor) -> HslColor {
    let lightness = color
        .lightness()
        .clamp(DEFAULT_MIN_LIGHTNESS, DEFAULT_MAX_LIGHTNESS);
    color
        .with_saturation(DEFAULT_SATURATION)
        .with_lightness(lightness)
}

/// [`clamp_with`] using [`HueLinkPolicy::Preserve`]
pub fn clamp(swatch: &InternalSwatch) -> InternalSwatch {
    clamp_with(swatch, HueLinkPolicy::Preserve)
}

/// Force a swatch into the picker's reachable color range.
///
/// A gradient whose stops are hex-identical after clamping collapses to a
/// solid. Otherwise the secondary stop is rebuilt from the clamped primary
/// according to `policy`.
pub fn clamp_with(
    swatch: &InternalSwatch,
    policy: HueLinkPolicy,
) -> InternalSwatch {
    match swatch {
        InternalSwatch::Solid { color } => InternalSwatch::Solid {
            color: clamp_color(color),
        },
        InternalSwatch::Gradient { colors: [primary, secondary] } => {
            let clamped_primary = clamp_color(primary);
            if clamped_primary.same_hex(&clamp_color(secondary)) {
                return InternalSwatch::Solid {
                    color: clamped_primary,
                };
            }

            let delta = shortest_hue_delta(primary.hue(), secondary.hue());
            let offset = match policy {
                HueLinkPolicy::Preserve
                    if offsets_match(
                        delta.abs(),
                        DEFAULT_HUE_OFFSET,
                        HUE_LINK_TOLERANCE,
                    ) =>
                {
                    delta
                }
                _ => DEFAULT_HUE_OFFSET,
            };

            InternalSwatch::Gradient {
                colors: [clamped_primary, clamped_primary.rotate_hue(offset)],
            }
        }
    }
}

/// A random color on the wheel: any hue, fixed saturation, lightness within
/// the wheel's range
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> HslColor {
    HslColor::new(
        rng.random_range(0.0..360.0),
        DEFAULT_SATURATION,
        rng.random_range(DEFAULT_MIN_LIGHTNESS..=DEFAULT_MAX_LIGHTNESS),
    )
}

/// A random swatch of the given mode; gradients are hue-linked
pub fn random_internal<R: Rng + ?Sized>(
    mode: SwatchMode,
    rng: &mut R,
) -> InternalSwatch {
    let primary = random_color(rng);
    match mode {
        SwatchMode::Solid => InternalSwatch::Solid { color: primary },
        SwatchMode::Gradient => InternalSwatch::Gradient {
            colors: [primary, primary.rotate_hue(DEFAULT_HUE_OFFSET)],
        },
    }
}

/// A random wire swatch using the thread-local generator
pub fn random_swatch(mode: SwatchMode) -> Swatch {
    to_external(&random_internal(mode, &mut rand::rng()))
}
