//! Color wheel interaction engine
//!
//! Turns pointer gestures over a circular control into swatch updates:
//! - hue around the circumference, lightness from the center (lightest) to
//!   the rim (darkest)
//! - pointer moves rate-limited through a trailing-edge [`Throttle`]
//! - optional hue lock, where only the distance along the current hue moves
//! - double click swaps the stops of a gradient
//!
//! The engine never owns the picker. Every operation takes the
//! [`SwatchPicker`] it was created for and fails with
//! [`SwatchError::Misuse`] when handed another one.

pub mod capture;
pub mod state;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

pub use capture::{CaptureFlag, CaptureGuard, NoCapture, PointerCapture};
pub use state::{
    Point, Rect, VisualHue, WheelGeometry, WheelSample, apply_wheel_color,
};

use crate::error::{PickerId, Result, SwatchError};
use crate::picker::SwatchPicker;
use crate::throttle::{DEFAULT_THROTTLE_WINDOW, Throttle};

/// A pointer press on the wheel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerInput {
    /// Position in host coordinates
    pub position: Point,
    /// Modifier held (shift): keep the current hue and move only lightness
    pub hue_lock: bool,
}

impl PointerInput {
    /// Plain press at `position`
    pub fn at(position: Point) -> Self {
        Self {
            position,
            hue_lock: false,
        }
    }

    /// Press at `position` with the hue lock modifier
    pub fn locked(position: Point) -> Self {
        Self {
            position,
            hue_lock: true,
        }
    }
}

#[derive(Debug)]
struct DragSession {
    locked_hue: Option<f32>,
    last_pointer: Point,
    has_moved: bool,
    _capture: CaptureGuard,
}

#[derive(Debug, Default)]
enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Gesture state machine for one picker's wheel
pub struct WheelEngine {
    picker: PickerId,
    geometry: WheelGeometry,
    drag: DragState,
    throttle: Throttle<Point>,
    visual_hue: VisualHue,
    capture: Arc<dyn PointerCapture>,
}

impl std::fmt::Debug for WheelEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelEngine")
            .field("picker", &self.picker)
            .field("geometry", &self.geometry)
            .field("drag", &self.drag)
            .field("throttle", &self.throttle)
            .field("visual_hue", &self.visual_hue)
            .finish_non_exhaustive()
    }
}

impl WheelEngine {
    /// Engine for `picker` with the default throttle window
    pub fn new(
        picker: &SwatchPicker,
        geometry: WheelGeometry,
        capture: Arc<dyn PointerCapture>,
    ) -> Self {
        Self::with_window(picker, geometry, capture, DEFAULT_THROTTLE_WINDOW)
    }

    /// Engine for `picker` throttling moves to one per `window`
    pub fn with_window(
        picker: &SwatchPicker,
        geometry: WheelGeometry,
        capture: Arc<dyn PointerCapture>,
        window: Duration,
    ) -> Self {
        Self {
            picker: picker.id(),
            geometry,
            drag: DragState::Idle,
            throttle: Throttle::new(window),
            visual_hue: VisualHue::new(VisualHue::target_for(
                picker.internal_swatch(),
            )),
            capture,
        }
    }

    /// Id of the picker this engine drives
    pub fn picker_id(&self) -> PickerId {
        self.picker
    }

    /// Current wheel geometry
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    /// Update the geometry after the control is resized
    pub fn set_geometry(&mut self, geometry: WheelGeometry) {
        self.geometry = geometry;
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging(_))
    }

    /// Whether the current drag has seen a move since the press
    pub fn has_moved(&self) -> bool {
        match &self.drag {
            DragState::Dragging(session) => session.has_moved,
            DragState::Idle => false,
        }
    }

    /// Hue the current drag is locked to
    pub fn locked_hue(&self) -> Option<f32> {
        match &self.drag {
            DragState::Dragging(session) => session.locked_hue,
            DragState::Idle => None,
        }
    }

    /// Last pointer position seen while dragging
    pub fn last_pointer(&self) -> Option<Point> {
        match &self.drag {
            DragState::Dragging(session) => Some(session.last_pointer),
            DragState::Idle => None,
        }
    }

    /// Unwrapped angle for the secondary knob
    pub fn visual_hue(&self) -> f32 {
        self.visual_hue.value()
    }

    /// When [`Self::tick`] should be called next
    pub fn deadline(&self) -> Option<Instant> {
        self.throttle.deadline()
    }

    fn ensure_bound(&self, picker: &SwatchPicker) -> Result<()> {
        if picker.id() == self.picker {
            Ok(())
        } else {
            Err(SwatchError::Misuse {
                component: "WheelEngine",
                expected: self.picker,
                found: picker.id(),
            })
        }
    }

    fn apply(&mut self, picker: &mut SwatchPicker, pos: Point) {
        let locked_hue = self.locked_hue();
        let sample = self.geometry.sample(pos, locked_hue);
        let next =
            apply_wheel_color(picker.internal_swatch(), sample.hue, sample.lightness);
        trace!(
            picker = %self.picker,
            hue = sample.hue,
            lightness = sample.lightness,
            "wheel color applied"
        );
        picker.commit(next);
        self.visual_hue.track(VisualHue::target_for(&next));
    }

    /// Start a drag. Ignored (returns `false`) when the picker is disabled.
    pub fn pointer_down(
        &mut self,
        picker: &mut SwatchPicker,
        input: PointerInput,
        now: Instant,
    ) -> Result<bool> {
        self.ensure_bound(picker)?;
        if picker.is_disabled() {
            return Ok(false);
        }

        let locked_hue = input
            .hue_lock
            .then(|| picker.internal_swatch().primary().hue());
        debug!(picker = %self.picker, ?locked_hue, "wheel drag started");

        // a press without a release replaces the stale session; it must
        // release its capture before the new one is taken
        self.drag = DragState::Idle;
        self.drag = DragState::Dragging(DragSession {
            locked_hue,
            last_pointer: input.position,
            has_moved: false,
            _capture: CaptureGuard::acquire(Arc::clone(&self.capture)),
        });

        if let Some(pos) = self.throttle.call(now, input.position) {
            self.apply(picker, pos);
        }
        Ok(true)
    }

    /// Follow the pointer. Returns whether a color update ran now.
    pub fn pointer_move(
        &mut self,
        picker: &mut SwatchPicker,
        position: Point,
        now: Instant,
    ) -> Result<bool> {
        self.ensure_bound(picker)?;
        let DragState::Dragging(session) = &mut self.drag else {
            return Ok(false);
        };
        session.has_moved = true;
        session.last_pointer = position;

        let mut applied = false;
        if let Some(pos) = self.throttle.poll(now) {
            self.apply(picker, pos);
            applied = true;
        }
        if let Some(pos) = self.throttle.call(now, position) {
            self.apply(picker, pos);
            applied = true;
        }
        Ok(applied)
    }

    /// Run a trailing update whose window has expired
    pub fn tick(
        &mut self,
        picker: &mut SwatchPicker,
        now: Instant,
    ) -> Result<bool> {
        self.ensure_bound(picker)?;
        match self.throttle.poll(now) {
            Some(pos) => {
                self.apply(picker, pos);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Finish the drag: apply the pending move, save the result and release
    /// the pointer. Returns `false` when no drag was in progress.
    pub fn pointer_up(
        &mut self,
        picker: &mut SwatchPicker,
        now: Instant,
    ) -> Result<bool> {
        self.ensure_bound(picker)?;
        if !self.is_dragging() {
            return Ok(false);
        }

        if let Some(pos) = self.throttle.flush() {
            self.apply(picker, pos);
        }
        picker.save_current();
        self.drag = DragState::Idle;
        debug!(picker = %self.picker, at = ?now, "wheel drag finished");
        Ok(true)
    }

    /// Abort the drag without saving; pending moves are dropped
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            debug!(picker = %self.picker, "wheel drag cancelled");
        }
        self.throttle.cancel();
        self.drag = DragState::Idle;
    }

    /// Swap the stops of a gradient and save it. Returns `false` for solids
    /// and when the picker is disabled.
    pub fn double_click(&mut self, picker: &mut SwatchPicker) -> Result<bool> {
        self.ensure_bound(picker)?;
        let current = *picker.internal_swatch();
        if picker.is_disabled() || current.secondary().is_none() {
            return Ok(false);
        }
        let swapped = current.swapped();
        picker.commit(swapped);
        picker.save(&swapped);
        self.visual_hue.track(VisualHue::target_for(&swapped));
        debug!(picker = %self.picker, "gradient stops swapped");
        Ok(true)
    }

    /// Re-align the visual hue with the picker after changes made elsewhere
    pub fn sync(&mut self, picker: &SwatchPicker) -> Result<()> {
        self.ensure_bound(picker)?;
        self.visual_hue
            .track(VisualHue::target_for(picker.internal_swatch()));
        Ok(())
    }

    /// Where the primary knob sits, in host coordinates
    pub fn primary_knob(&self, picker: &SwatchPicker) -> Result<Point> {
        self.ensure_bound(picker)?;
        Ok(self
            .geometry
            .knob_position(&picker.internal_swatch().primary()))
    }
}
