//! Swatch state controller
//!
//! [`SwatchPicker`] owns the current swatch, the saved swatch history and the
//! default snapshot used for resets. Sub-components (the wheel, a mode
//! toggle, a saved swatch grid) receive it by reference and request changes
//! through it.
//!
//! A picker is *controlled* when it is created with an external swatch. A
//! controlled picker reports changes through
//! [`SwatchEvents::on_swatch_change`] but keeps the external value as its
//! baseline until the owner pushes a new one with
//! [`SwatchPicker::apply_external_change`]. An uncontrolled picker adopts its
//! own changes as the new baseline.

pub mod messages;
pub mod update;

pub use messages::PickerMessage;

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use rand::Rng;
use swatch_model::{
    DEFAULT_SAVED_SWATCHES_LIMIT, HueLinkPolicy, InternalSwatch, Swatch,
    SwatchMode, clamp_with, random_internal, to_external, to_internal,
};
use tracing::debug;

use crate::error::{PickerId, Result};
use crate::events::{NoopEvents, SwatchEvents};
use crate::saved::SavedSwatches;
use crate::store::SavedSwatchStore;

// Global counter for generating unique IDs
static SWATCH_PICKER_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Recognized picker options
#[derive(Debug, Clone)]
pub struct PickerOptions {
    /// Controlled value; its presence makes the picker controlled
    pub swatch: Option<Swatch>,
    /// Initial value of an uncontrolled picker
    pub default_swatch: Option<Swatch>,
    /// Bound on the saved swatch list
    pub saved_swatches_limit: usize,
    /// Ignore user interaction while still exposing state
    pub disabled: bool,
    /// How external gradients keep their hue offset when clamped
    pub hue_link: HueLinkPolicy,
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            swatch: None,
            default_swatch: None,
            saved_swatches_limit: DEFAULT_SAVED_SWATCHES_LIMIT,
            disabled: false,
            hue_link: HueLinkPolicy::default(),
        }
    }
}

impl PickerOptions {
    /// Options for a controlled picker showing `swatch`
    pub fn controlled(swatch: Swatch) -> Self {
        Self {
            swatch: Some(swatch),
            ..Self::default()
        }
    }

    /// Set the uncontrolled initial value
    pub fn with_default_swatch(mut self, swatch: Swatch) -> Self {
        self.default_swatch = Some(swatch);
        self
    }

    /// Set the saved list bound
    pub fn with_saved_swatches_limit(mut self, limit: usize) -> Self {
        self.saved_swatches_limit = limit;
        self
    }

    /// Start disabled
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the hue link policy
    pub fn with_hue_link(mut self, policy: HueLinkPolicy) -> Self {
        self.hue_link = policy;
        self
    }
}

/// State controller for one swatch picker
pub struct SwatchPicker {
    id: PickerId,
    controlled: bool,
    disabled: bool,
    hue_link: HueLinkPolicy,
    internal: InternalSwatch,
    swatch: Swatch,
    default_internal: InternalSwatch,
    saved: SavedSwatches,
    store: SavedSwatchStore,
    events: Box<dyn SwatchEvents>,
}

impl fmt::Debug for SwatchPicker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwatchPicker")
            .field("id", &self.id)
            .field("controlled", &self.controlled)
            .field("disabled", &self.disabled)
            .field("swatch", &self.swatch)
            .field("internal", &self.internal)
            .field("saved", &self.saved.len())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl SwatchPicker {
    /// Build a picker, loading saved swatches from `store`
    pub fn new(
        options: PickerOptions,
        store: SavedSwatchStore,
        events: Box<dyn SwatchEvents>,
    ) -> Result<Self> {
        Self::with_rng(options, store, events, &mut rand::rng())
    }

    /// Uncontrolled picker with no persistence and no listeners
    pub fn ephemeral() -> Result<Self> {
        Self::new(
            PickerOptions::default(),
            SavedSwatchStore::unavailable(),
            Box::new(NoopEvents),
        )
    }

    /// Like [`SwatchPicker::new`], drawing the random default from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        options: PickerOptions,
        store: SavedSwatchStore,
        events: Box<dyn SwatchEvents>,
        rng: &mut R,
    ) -> Result<Self> {
        let saved =
            SavedSwatches::new(store.load(), options.saved_swatches_limit);
        let policy = options.hue_link;

        let external = match &options.swatch {
            Some(swatch) => Some(clamp_with(&to_internal(swatch)?, policy)),
            None => None,
        };

        let initial_mode = match (&options.swatch, saved.first()) {
            (Some(swatch), _) => swatch.mode(),
            (None, Some(last_saved)) => last_saved.mode(),
            (None, None) => SwatchMode::Gradient,
        };

        let default_internal = match &options.default_swatch {
            Some(swatch) => clamp_with(&to_internal(swatch)?, policy),
            None => random_internal(initial_mode, rng),
        };

        let internal = external.unwrap_or(default_internal);
        let swatch = match options.swatch {
            Some(swatch) => swatch,
            None => to_external(&default_internal),
        };

        let id = PickerId(SWATCH_PICKER_ID_COUNTER.fetch_add(1, Ordering::Relaxed));
        debug!(
            picker = %id,
            controlled = external.is_some(),
            mode = %internal.mode(),
            saved = saved.len(),
            "swatch picker initialized"
        );

        Ok(Self {
            id,
            controlled: external.is_some(),
            disabled: options.disabled,
            hue_link: policy,
            internal,
            swatch,
            default_internal,
            saved,
            store,
            events,
        })
    }

    /// Unique id of this picker
    pub fn id(&self) -> PickerId {
        self.id
    }

    /// Whether an external value drives this picker
    pub fn is_controlled(&self) -> bool {
        self.controlled
    }

    /// Whether user interaction is suppressed
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable user interaction
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Hue link policy applied to external values
    pub fn hue_link(&self) -> HueLinkPolicy {
        self.hue_link
    }

    /// Externally visible swatch (the controlled value, or the last
    /// committed one when uncontrolled)
    pub fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// Current swatch in computation form
    pub fn internal_swatch(&self) -> &InternalSwatch {
        &self.internal
    }

    /// Current mode
    pub fn mode(&self) -> SwatchMode {
        self.internal.mode()
    }

    /// Snapshot taken at construction, used by [`Self::reset_to_default`]
    pub fn default_internal_swatch(&self) -> &InternalSwatch {
        &self.default_internal
    }

    /// Saved swatches, newest first
    pub fn saved_swatches(&self) -> &SavedSwatches {
        &self.saved
    }

    /// Replace the current swatch and notify listeners
    pub(crate) fn commit(&mut self, value: InternalSwatch) {
        self.internal = value;
        let external = to_external(&value);
        self.events.on_swatch_change(&external);
        if !self.controlled {
            self.swatch = external;
        }
    }

    /// Replace the current swatch with a clamped copy of `value`
    pub fn set_swatch(&mut self, value: &InternalSwatch) {
        self.commit(clamp_with(value, self.hue_link));
    }

    /// Switch between solid and gradient.
    ///
    /// Returns whether anything changed.
    pub fn set_mode(&mut self, mode: SwatchMode) -> bool {
        if self.disabled || mode == self.internal.mode() {
            return false;
        }
        debug!(picker = %self.id, from = %self.internal.mode(), to = %mode, "mode changed");
        self.commit(self.internal.with_mode(mode));
        true
    }

    /// Reconcile a new controlled value with the current state.
    ///
    /// Values that match the current swatch (same mode and hex colors) are
    /// ignored so edits in progress are not disturbed. Returns whether the
    /// current swatch changed.
    pub fn apply_external_change(&mut self, swatch: &Swatch) -> Result<bool> {
        let incoming = clamp_with(&to_internal(swatch)?, self.hue_link);
        if self.controlled {
            self.swatch = swatch.clone();
        }
        if incoming.same_as(&self.internal) {
            debug!(picker = %self.id, "external swatch unchanged, keeping current state");
            return Ok(false);
        }
        self.commit(incoming);
        Ok(true)
    }

    /// Save the current swatch. Returns `false` when disabled.
    pub fn save_current(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        let current = self.internal;
        self.save(&current);
        true
    }

    /// Add `swatch` to the front of the saved list, persist it and notify
    pub fn save(&mut self, swatch: &InternalSwatch) {
        self.saved.push(*swatch);
        self.store.persist(self.saved.as_slice());
        debug!(picker = %self.id, saved = self.saved.len(), "swatch saved");
        self.events.on_swatch_save(&to_external(swatch));
    }

    /// Make the saved swatch at `index` current.
    ///
    /// Returns the selected swatch, or `None` when disabled or out of range.
    pub fn select_saved(&mut self, index: usize) -> Option<Swatch> {
        if self.disabled {
            return None;
        }
        // saved stops already carry the user's link (a swap included), so
        // only the color range is enforced here
        let value =
            clamp_with(self.saved.get(index)?, HueLinkPolicy::Preserve);
        self.commit(value);
        let selected = to_external(&value);
        self.events.on_saved_swatch_select(&selected);
        Some(selected)
    }

    /// Return to the snapshot taken at construction
    pub fn reset_to_default(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.commit(self.default_internal);
        true
    }

    /// Dispatch a [`PickerMessage`]
    pub fn update(&mut self, message: PickerMessage) -> Result<()> {
        update::handle_message(self, message)
    }
}
