use glam::{EulerRot, Mat4};

/// Orientation of the rotating group: yaw about Y, pitch about X.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationTransform {
    pub yaw: f32,
    pub pitch: f32,
}

impl RotationTransform {
    /// Group matrix, pitch applied outermost (`Rx(pitch) * Ry(yaw)`).
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.pitch, self.yaw, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Auto-spin advanced the yaw; render.
    Spun,
    /// Transform untouched (drag or modal); still render.
    Held,
    /// Loop stopped; neither update nor render.
    Stopped,
}

impl Tick {
    #[inline]
    pub fn should_render(self) -> bool {
        self != Tick::Stopped
    }
}

/// Owns the group transform and the per-frame auto-spin step.
#[derive(Clone, Debug)]
pub struct RotationDriver {
    transform: RotationTransform,
    spin_step: f32,
    running: bool,
}

impl RotationDriver {
    pub fn new(spin_step: f32) -> Self {
        Self {
            transform: RotationTransform::default(),
            spin_step,
            running: true,
        }
    }

    #[inline]
    pub fn transform(&self) -> RotationTransform {
        self.transform
    }

    pub fn rotate_by(&mut self, yaw: f32, pitch: f32) {
        self.transform.yaw += yaw;
        self.transform.pitch += pitch;
    }

    pub fn tick(&mut self, auto_spin: bool) -> Tick {
        if !self.running {
            return Tick::Stopped;
        }
        if auto_spin {
            self.transform.yaw += self.spin_step;
            Tick::Spun
        } else {
            Tick::Held
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }
}
