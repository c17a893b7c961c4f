//! Bounding-box fitting of generated curves.

use crate::error::CurveError;
use crate::path::PathElement;
use bevy_math::Isometry3d;
use bevy_math::bounding::Aabb3d;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned target box a curve is fitted into.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitBox {
    /// Lower corner; must be strictly below `max` on every axis.
    pub min: Vec3,
    /// Upper corner.
    pub max: Vec3,
}

impl Default for FitBox {
    /// The cube spanning `-100..100` on every axis.
    fn default() -> Self {
        Self {
            min: Vec3::splat(-100.0),
            max: Vec3::splat(100.0),
        }
    }
}

impl FitBox {
    /// Creates a box from its corners. Validity is checked when fitting.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Fits `points` into this box. See [`fit`].
    pub fn fit(&self, points: &[PathElement]) -> Result<Vec<PathElement>, CurveError> {
        fit(points, self.min, self.max)
    }
}

/// Uniformly scales and translates every point so the curve is centered in the target box.
///
/// The scale is the smallest ratio of target extent to curve extent over the three
/// axes, so the aspect ratio is preserved. An axis on which the curve is flat does not
/// constrain the scale; a single point (flat on all axes) keeps scale `1`.
/// [`PathElement::Break`]s are passed through untouched, and input without any points
/// is returned as is.
///
/// # Errors
///
/// [`CurveError::InvalidTargetBox`] unless `target_min < target_max` on every axis.
pub fn fit(
    points: &[PathElement],
    target_min: Vec3,
    target_max: Vec3,
) -> Result<Vec<PathElement>, CurveError> {
    if !target_min.cmplt(target_max).all() {
        log::warn!("rejecting target box {target_min}..{target_max}");
        return Err(CurveError::InvalidTargetBox {
            min: target_min,
            max: target_max,
        });
    }

    let mut cloud = points.iter().filter_map(PathElement::point).peekable();
    if cloud.peek().is_none() {
        return Ok(points.to_vec());
    }
    let bounds = Aabb3d::from_point_cloud(Isometry3d::IDENTITY, cloud);
    let cloud_min = Vec3::from(bounds.min);
    let cloud_extent = Vec3::from(bounds.max) - cloud_min;
    let target_extent = target_max - target_min;

    let scale = (0..3)
        .filter(|&axis| cloud_extent[axis] > 0.0)
        .map(|axis| target_extent[axis] / cloud_extent[axis])
        .reduce(f32::min)
        .unwrap_or(1.0);

    // Offset that places the scaled box in the middle of the target.
    let offset = target_min - cloud_min * scale + (target_extent - cloud_extent * scale) / 2.0;

    log::debug!("fitting curve with extent {cloud_extent} using scale {scale}");

    Ok(points
        .iter()
        .map(|element| match element {
            PathElement::Point(p) => PathElement::Point(*p * scale + offset),
            PathElement::Break => PathElement::Break,
        })
        .collect())
}
