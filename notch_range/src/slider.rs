// Copyright 2025 the Notch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public control: model, drag controller and observers behind one API.

use alloc::string::String;

use crate::config::{ConfigPatch, RangeConfig};
use crate::drag::{DragController, DragState, NoCapture, PointerCapture, PointerInput};
use crate::error::RangeError;
use crate::model::RangeModel;
use crate::observer::{ListenerId, Observers};
use crate::types::{DragEvent, DragEventKind};

/// A single or dual handle range slider.
///
/// ## Usage
///
/// - Construct with [`RangeSlider::new`], or [`RangeSlider::with_capture`] to tie
///   the drag session to the host's document-level listeners.
/// - Register observers with [`RangeSlider::on`].
/// - Feed pointer input through [`RangeSlider::handle_pointer`]; each call returns
///   the lifecycle event it emitted, if any.
/// - Render from [`RangeSlider::model`].
///
/// After [`RangeSlider::destroy`] pointer input is ignored until [`RangeSlider::reset`].
pub struct RangeSlider<C: PointerCapture = NoCapture> {
    model: RangeModel,
    drag: DragController<C>,
    observers: Observers,
    attached: bool,
}

impl<C: PointerCapture> core::fmt::Debug for RangeSlider<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RangeSlider")
            .field("model", &self.model)
            .field("drag", &self.drag)
            .field("attached", &self.attached)
            .finish_non_exhaustive()
    }
}

impl RangeSlider {
    /// Create a slider without pointer capture.
    pub fn new(config: RangeConfig) -> Result<Self, RangeError> {
        Self::with_capture(config, NoCapture)
    }
}

impl<C: PointerCapture> RangeSlider<C> {
    /// Create a slider whose drag sessions hold `capture`.
    pub fn with_capture(config: RangeConfig, capture: C) -> Result<Self, RangeError> {
        Ok(Self {
            model: RangeModel::new(config)?,
            drag: DragController::new(capture),
            observers: Observers::new(),
            attached: true,
        })
    }

    /// Current state, for rendering.
    pub fn model(&self) -> &RangeModel {
        &self.model
    }

    /// Drag state.
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Whether pointer input is currently accepted.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// The pointer capture provider.
    pub fn capture(&self) -> &C {
        self.drag.capture()
    }

    /// Apply a partial configuration.
    ///
    /// Rejected while dragging or when the result violates an invariant; the
    /// slider is unchanged in both cases.
    pub fn set_config(&mut self, patch: &ConfigPatch) -> Result<(), RangeError> {
        if self.drag.session().is_some() {
            return Err(RangeError::DragInProgress);
        }
        self.model.set_config(patch)
    }

    /// Current value(s): `"v"` or `"low,high"`.
    ///
    /// Numbers use their shortest rendering, so a configured `"0.50"` reads back as `"0.5"`.
    pub fn get_value(&self) -> String {
        self.model.value_text()
    }

    /// Register an observer for `kind`.
    pub fn on(
        &mut self,
        kind: DragEventKind,
        handler: impl FnMut(&DragEvent) + 'static,
    ) -> ListenerId {
        self.observers.on(kind, handler)
    }

    /// Deregister an observer.
    pub fn off(&mut self, kind: DragEventKind, id: ListenerId) -> bool {
        self.observers.off(kind, id)
    }

    /// Deregister all observers for `kind`.
    pub fn off_all(&mut self, kind: DragEventKind) -> usize {
        self.observers.off_all(kind)
    }

    /// Deliver an event with `value` to the observers of `kind`.
    pub fn trigger(&mut self, kind: DragEventKind, value: impl Into<String>) {
        self.observers.trigger(&DragEvent::new(kind, value));
    }

    /// Process one pointer message.
    ///
    /// The emitted event, if any, is delivered to observers and returned.
    pub fn handle_pointer(&mut self, input: PointerInput) -> Result<Option<DragEvent>, RangeError> {
        if !self.attached {
            log::trace!(target: "notch_range::drag", "detached, ignoring {input:?}");
            return Ok(None);
        }
        let event = match input {
            PointerInput::Down { handle, geometry } => {
                Some(self.drag.start(&mut self.model, handle, &geometry)?)
            }
            PointerInput::Move { x } => self.drag.drag_to(&mut self.model, x)?,
            PointerInput::Up | PointerInput::Cancel => self.drag.end(&mut self.model),
        };
        if let Some(event) = &event {
            self.observers.trigger(event);
        }
        Ok(event)
    }

    /// Release the pointer capture and stop accepting pointer input.
    ///
    /// An open session is dropped without a `dragend`. Observers stay registered.
    pub fn destroy(&mut self) {
        self.drag.abort(&mut self.model);
        self.attached = false;
    }

    /// [`destroy`](Self::destroy), then re-derive positions from the current
    /// configuration and accept pointer input again.
    pub fn reset(&mut self) -> Result<(), RangeError> {
        self.destroy();
        self.model.reapply()?;
        self.attached = true;
        Ok(())
    }
}
