//! Picker-wide constants shared by the model and the controller.

/// Name of the component, used in log fields and diagnostics.
pub const SWATCH_PICKER_NAME: &str = "SwatchPicker";

/// Name of the design system the picker ships with.
pub const DESIGN_SYSTEM_NAME: &str = "MostDesignSystem";

/// Storage key holding the saved swatch list.
pub const SAVED_SWATCHES_KEY: &str =
    "MostDesignSystemSwatchPickerSavedSwatches";

/// Saturation every active swatch color is pinned to (percent).
pub const DEFAULT_SATURATION: f32 = 100.0;

/// Darkest lightness reachable on the wheel (percent, at the rim).
pub const DEFAULT_MIN_LIGHTNESS: f32 = 50.0;

/// Lightest lightness reachable on the wheel (percent, at the center).
pub const DEFAULT_MAX_LIGHTNESS: f32 = 90.0;

/// Hue distance between the two stops of a freshly linked gradient.
pub const DEFAULT_HUE_OFFSET: f32 = 120.0;

/// How far (degrees) a stored hue offset may drift from
/// [`DEFAULT_HUE_OFFSET`] and still count as linked. Covers 8-bit hex
/// quantization.
pub const HUE_LINK_TOLERANCE: f32 = 0.5;

/// Default bound on the saved swatch list.
pub const DEFAULT_SAVED_SWATCHES_LIMIT: usize = 12;
