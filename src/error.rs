//! Error type shared by every stage of curve generation.

use glam::Vec3;

/// Precondition violations detected while expanding, interpreting or fitting a curve.
///
/// All variants are raised before any geometry is produced, so a returned error never
/// comes with a partially generated path.
#[derive(thiserror::Error, Debug)]
pub enum CurveError {
    /// The turtle step length was zero, negative or not finite.
    #[error("step length must be a positive finite number, got {0}")]
    InvalidStepLength(f32),

    /// The normalization target box is inverted or flat on at least one axis.
    #[error("target box min {min} must be strictly less than max {max} on every axis")]
    InvalidTargetBox { min: Vec3, max: Vec3 },

    /// A branch-close symbol was found with no matching branch-open.
    #[error("unbalanced branch close at symbol index {index}")]
    UnbalancedBranch { index: usize },

    /// Branch nesting went past the configured stack limit.
    #[error("branch nesting exceeds the maximum stack depth of {limit}")]
    StackOverflow { limit: usize },

    /// Rule text that is not of the form `X => production`.
    #[error("malformed rule: {0:?}")]
    RuleSyntax(String),

    /// Catalog JSON that could not be read or written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
