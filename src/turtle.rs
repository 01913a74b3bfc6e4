//! Turtle state, interpretation parameters, and the emitted segment type.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A generic material identifier referencing an external palette.
pub type MaterialId = u8;

/// Parameters for one interpretation run. Never mutated by the interpreter.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TurtleConfig {
    /// Default rotation angle (in degrees) for yaw/pitch/roll symbols that
    /// carry no parameter.
    pub angle: f32,
    /// Factor applied to the current width by `!` (and divided out by `?`).
    pub width_scale: f32,
    /// Factor applied to the current step length by `"` (and divided out by `_`).
    pub length_scale: f32,
    /// Ordered material palette indexed by the `M(i)` symbol.
    pub materials: Vec<MaterialId>,
    /// Material used until the grammar selects one, if any.
    pub default_material: Option<MaterialId>,
    /// Initial heading; normalized before use, falling back to `+Y` if zero.
    pub initial_heading: Vec3,
    /// Initial step length for unparameterized `F`.
    pub initial_length: f32,
    /// Initial line width.
    pub initial_width: f32,
}

impl Default for TurtleConfig {
    fn default() -> Self {
        Self {
            angle: 25.0,
            width_scale: 2.0,
            length_scale: 1.5,
            materials: Vec::new(),
            default_material: None,
            initial_heading: Vec3::Y,
            initial_length: 1.0,
            initial_width: 0.1,
        }
    }
}

/// The state of the drawing turtle.
///
/// This is the unit of save/restore on the branch stack: `[` pushes a copy,
/// `]` replaces the current state with the popped one. It is owned by one
/// interpretation run and never aliased.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the "pen".
    pub position: Vec3,
    /// Current heading, kept unit length.
    pub heading: Vec3,
    /// Current step length for unparameterized `F`.
    pub length: f32,
    /// Current line width.
    pub width: f32,
    /// Current material for emitted segments, if one is set.
    pub material: Option<MaterialId>,
}

impl TurtleState {
    /// Rotates the heading by `degrees` around the world Z axis (`+`/`-`).
    pub fn yaw(&mut self, degrees: f32) {
        self.rotate_about(Vec3::Z, degrees);
    }

    /// Rotates the heading by `degrees` around the world X axis (`&`/`^`).
    pub fn pitch(&mut self, degrees: f32) {
        self.rotate_about(Vec3::X, degrees);
    }

    /// Rotates the heading by `degrees` around the world Y axis (`/`/`\`).
    pub fn roll(&mut self, degrees: f32) {
        self.rotate_about(Vec3::Y, degrees);
    }

    // Rotations are single-axis in the fixed world frame, composed onto the
    // heading vector. The heading is re-normalized after every rotation to
    // bound accumulated floating-point drift.
    fn rotate_about(&mut self, axis: Vec3, degrees: f32) {
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.heading = (rotation * self.heading).normalize_or_zero();
    }
}

/// One emitted straight-line primitive.
///
/// The rendering collaborator's only contract with this crate: draw a
/// primitive spanning `start` to `end` with the given `width` and `material`,
/// falling back to its own default visual material when `material` is `None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// World-space start point.
    pub start: Vec3,
    /// World-space end point.
    pub end: Vec3,
    /// Line width at emission time.
    pub width: f32,
    /// Material at emission time, if the grammar selected one.
    pub material: Option<MaterialId>,
}
