//! Picker messages

use swatch_model::{Swatch, SwatchMode};

/// Messages understood by [`SwatchPicker::update`](super::SwatchPicker::update)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerMessage {
    /// Switch between solid and gradient (mode toggle)
    SetMode(SwatchMode),
    /// Save the current swatch
    SaveCurrent,
    /// Pick an entry from the saved list
    SelectSaved(usize),
    /// Return to the default snapshot
    ResetToDefault,
    /// The controlled value changed
    ExternalChanged(Swatch),
    /// Enable or disable interaction
    SetDisabled(bool),
}

impl PickerMessage {
    /// Stable name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::SetMode(_) => "Picker::SetMode",
            Self::SaveCurrent => "Picker::SaveCurrent",
            Self::SelectSaved(_) => "Picker::SelectSaved",
            Self::ResetToDefault => "Picker::ResetToDefault",
            Self::ExternalChanged(_) => "Picker::ExternalChanged",
            Self::SetDisabled(_) => "Picker::SetDisabled",
        }
    }
}
