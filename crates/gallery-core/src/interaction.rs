//! Pointer gesture classification: drag-to-rotate versus click-to-open.
//!
//! A press starts a [`Gesture::PossibleClick`]. Moves are measured against the
//! last *accepted* position, so sub-threshold jitter accumulates until it
//! crosses the threshold on either axis. The first accepted move turns the
//! gesture into a drag for good; a release that never got there is a click.

use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    PossibleClick { last: Vec2 },
    Dragging { last: Vec2 },
}

/// What a single pointer event means for the gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerOutcome {
    /// No gesture in progress, or the primary button is not held.
    Ignored,
    /// Movement below the threshold; nothing changes.
    Pending,
    /// Rotation delta in radians to apply to the group.
    Rotate { yaw: f32, pitch: f32 },
    /// Release without any accepted drag; hit-test at this position.
    Click(Vec2),
    DragEnded,
}

#[derive(Clone, Debug)]
pub struct InteractionState {
    gesture: Gesture,
    threshold_px: f32,
    sensitivity: f32,
}

impl InteractionState {
    pub fn new(threshold_px: f32, sensitivity: f32) -> Self {
        Self {
            gesture: Gesture::Idle,
            threshold_px,
            sensitivity,
        }
    }

    #[inline]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self.gesture, Gesture::Dragging { .. })
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.gesture == Gesture::Idle
    }

    pub fn press(&mut self, pos: Vec2) {
        self.gesture = Gesture::PossibleClick { last: pos };
    }

    pub fn move_to(&mut self, pos: Vec2, primary_held: bool) -> PointerOutcome {
        if !primary_held {
            return PointerOutcome::Ignored;
        }
        let last = match self.gesture {
            Gesture::Idle => return PointerOutcome::Ignored,
            Gesture::PossibleClick { last } | Gesture::Dragging { last } => last,
        };
        let delta = pos - last;
        if delta.x.abs() > self.threshold_px || delta.y.abs() > self.threshold_px {
            self.gesture = Gesture::Dragging { last: pos };
            PointerOutcome::Rotate {
                yaw: delta.x * self.sensitivity,
                pitch: delta.y * self.sensitivity,
            }
        } else {
            PointerOutcome::Pending
        }
    }

    pub fn release(&mut self, pos: Vec2) -> PointerOutcome {
        let outcome = match self.gesture {
            Gesture::Idle => PointerOutcome::Ignored,
            Gesture::PossibleClick { .. } => PointerOutcome::Click(pos),
            Gesture::Dragging { .. } => PointerOutcome::DragEnded,
        };
        self.gesture = Gesture::Idle;
        outcome
    }

    /// Abandon the current gesture; the next release is ignored.
    pub fn cancel(&mut self) {
        self.gesture = Gesture::Idle;
    }
}
