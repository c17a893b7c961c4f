//! Turtle state and operations for curve interpretation.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// The state of the drawing turtle.
///
/// Orientation is kept as three accumulated Euler angles, not a running quaternion.
/// The state is `Copy`; branch frames are saved by value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current world-space position of the pen.
    pub position: Vec3,

    /// Accumulated rotation (radians) about the X, Y and Z axes.
    pub angles: Vec3,
}

impl TurtleState {
    /// Returns the current orientation (intrinsic XYZ composition of the accumulators).
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.angles.x)
            * Quat::from_rotation_y(self.angles.y)
            * Quat::from_rotation_z(self.angles.z)
    }

    /// Returns the turtle's local forward direction (Y-axis) in world space.
    pub fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// Moves the turtle `distance` units along its forward direction.
    pub fn advance(&mut self, distance: f32) {
        self.position += self.forward() * distance;
    }

    /// Adds `angle` radians to the X accumulator (Pitch).
    pub fn pitch(&mut self, angle: f32) {
        self.angles.x += angle;
    }

    /// Adds `angle` radians to the Y accumulator (Roll).
    pub fn roll(&mut self, angle: f32) {
        self.angles.y += angle;
    }

    /// Adds `angle` radians to the Z accumulator (Yaw, the in-plane turn).
    pub fn yaw(&mut self, angle: f32) {
        self.angles.z += angle;
    }
}

/// Operations that can be performed by the turtle.
///
/// Rotation variants carry a sign (or multiplier) applied to the grammar angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward and emit the new position (`F`, `G`, `H`, `I`).
    Draw,
    /// Rotate around Z (`+`/`-`).
    Yaw(f32),
    /// Rotate around X (`<`/`>`).
    Pitch(f32),
    /// Rotate around Y (`^`/`&`).
    Roll(f32),
    /// Pitch back by twice the angle (`|`).
    TurnAround,
    /// Save position and orientation onto the stack (`[`).
    Push,
    /// Restore the most recently pushed state and break the path (`]`).
    Pop,
    /// No-op. Symbol only matters to the rewriting rules.
    Ignore,
}

impl TurtleOp {
    /// Applies a non-structural op to `turtle` with the given angle.
    ///
    /// `Draw`, `Push`, `Pop` and `Ignore` leave the turtle untouched here; the
    /// interpreters handle them since they involve output or the branch stack.
    pub fn rotate(self, turtle: &mut TurtleState, angle: f32) {
        match self {
            TurtleOp::Yaw(s) => turtle.yaw(angle * s),
            TurtleOp::Pitch(s) => turtle.pitch(angle * s),
            TurtleOp::Roll(s) => turtle.roll(angle * s),
            TurtleOp::TurnAround => turtle.pitch(-2.0 * angle),
            TurtleOp::Draw | TurtleOp::Push | TurtleOp::Pop | TurtleOp::Ignore => {}
        }
    }
}

/// Conventional symbol-to-operation mappings.
pub const STANDARD_SYMBOLS: [(char, TurtleOp); 13] = [
    // Drawing moves
    ('F', TurtleOp::Draw),
    ('G', TurtleOp::Draw),
    ('H', TurtleOp::Draw),
    ('I', TurtleOp::Draw),
    // Spatial
    ('+', TurtleOp::Yaw(1.0)),
    ('-', TurtleOp::Yaw(-1.0)),
    ('<', TurtleOp::Pitch(1.0)),
    ('>', TurtleOp::Pitch(-1.0)),
    ('|', TurtleOp::TurnAround),
    ('^', TurtleOp::Roll(1.0)),
    ('&', TurtleOp::Roll(-1.0)),
    // Flow
    ('[', TurtleOp::Push),
    (']', TurtleOp::Pop),
];
