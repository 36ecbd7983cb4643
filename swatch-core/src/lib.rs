//! State controller and color-wheel engine for the swatch picker.
//!
//! A [`SwatchPicker`] holds the current swatch and the saved swatch list.
//! A [`WheelEngine`] translates pointer gestures into swatch updates on the
//! picker it was created for. Saved swatches go through a
//! [`SavedSwatchStore`] backed by any [`KeyValueStore`].

pub mod error;
pub mod events;
pub mod picker;
pub mod saved;
pub mod store;
pub mod throttle;
pub mod wheel;

pub use error::{PickerId, Result, StoreError, SwatchError};
pub use events::{EventRecorder, NoopEvents, SwatchEvent, SwatchEvents};
pub use picker::{PickerMessage, PickerOptions, SwatchPicker};
pub use saved::SavedSwatches;
pub use store::{JsonFileStore, KeyValueStore, MemoryStore, SavedSwatchStore};
pub use throttle::{DEFAULT_THROTTLE_WINDOW, Throttle};
pub use wheel::{
    CaptureFlag, NoCapture, Point, PointerCapture, PointerInput, Rect,
    VisualHue, WheelEngine, WheelGeometry,
};

pub use swatch_model;
