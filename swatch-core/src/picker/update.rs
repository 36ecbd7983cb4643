//! Picker message handlers

use tracing::trace;

use super::SwatchPicker;
use super::messages::PickerMessage;
use crate::error::Result;

/// Main message handler for the picker
pub fn handle_message(
    picker: &mut SwatchPicker,
    message: PickerMessage,
) -> Result<()> {
    trace!(picker = %picker.id(), message = message.name(), "handling picker message");
    match message {
        PickerMessage::SetMode(mode) => {
            picker.set_mode(mode);
        }
        PickerMessage::SaveCurrent => {
            picker.save_current();
        }
        PickerMessage::SelectSaved(index) => {
            picker.select_saved(index);
        }
        PickerMessage::ResetToDefault => {
            picker.reset_to_default();
        }
        PickerMessage::ExternalChanged(swatch) => {
            picker.apply_external_change(&swatch)?;
        }
        PickerMessage::SetDisabled(disabled) => picker.set_disabled(disabled),
    }
    Ok(())
}
