//! Output representation of an interpreted curve.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One element of a generated curve.
///
/// A run of `Point`s between two `Break`s (or a `Break` and either end of the
/// sequence) forms one polyline.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    /// A turtle position, continuing the current polyline.
    Point(Vec3),
    /// End of the current polyline; the next point starts a new one.
    Break,
}

impl PathElement {
    /// Returns the position if this is a point.
    pub fn point(&self) -> Option<Vec3> {
        match self {
            PathElement::Point(p) => Some(*p),
            PathElement::Break => None,
        }
    }

    /// True for [`PathElement::Break`].
    pub fn is_break(&self) -> bool {
        matches!(self, PathElement::Break)
    }
}

/// Splits a curve into its polylines, dropping empty runs.
///
/// This is the shape a line-drawing backend consumes: one vertex list per line strip.
pub fn polylines<'a, I>(elements: I) -> Vec<Vec<Vec3>>
where
    I: IntoIterator<Item = &'a PathElement>,
{
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for element in elements {
        match element {
            PathElement::Point(p) => current.push(*p),
            PathElement::Break => {
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Total drawn length of all polylines; breaks contribute nothing.
pub fn path_length<'a, I>(elements: I) -> f32
where
    I: IntoIterator<Item = &'a PathElement>,
{
    polylines(elements)
        .iter()
        .flat_map(|line| line.windows(2))
        .map(|pair| pair[0].distance(pair[1]))
        .sum()
}
