//! Carousel Transform Module
//! Computes the rotation, scale, stacking and blur of a single pager page
//! from the pager's scroll state. Recomputed from scratch every frame.

use serde::{Deserialize, Serialize};

/// Tunables for the fanned-card effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformParams {
    /// Tilt of a fully offset page, in degrees.
    pub max_rotation_degrees: f32,
    /// Scale of a fully offset page.
    pub min_scale: f32,
    /// Blur radius of every page that is not the current one, in points.
    pub blur_radius: f32,
}

impl Default for TransformParams {
    fn default() -> Self {
        Self {
            max_rotation_degrees: 10.0,
            min_scale: 0.70,
            blur_radius: 5.0,
        }
    }
}

/// Visual transform of one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageTransform {
    /// Clockwise rotation around the card centre, in degrees.
    pub rotation_degrees: f32,
    /// Uniform scale factor for both axes.
    pub scale: f32,
    /// Stacking layer: 1 for the current page, 0 for the rest.
    pub z_index: u8,
    pub blur_radius: f32,
}

impl PageTransform {
    pub fn rotation_radians(&self) -> f32 {
        self.rotation_degrees.to_radians()
    }

    pub fn is_focused(&self) -> bool {
        self.z_index > 0
    }
}

/// Linear interpolation between `start` and `stop`.
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    start + (stop - start) * fraction
}

/// Transform of `page` given the page closest to centre and the scroll
/// progress toward its neighbour.
///
/// Pages left of centre tilt counter-clockwise, pages at or right of centre
/// tilt clockwise. Offsets beyond one page clamp to the fully offset pose.
pub fn page_transform(
    current_page: usize,
    current_offset_fraction: f32,
    page: usize,
    params: &TransformParams,
) -> PageTransform {
    let page_offset = ((current_page as f32 - page as f32) + current_offset_fraction).abs();
    let t = 1.0 - page_offset.clamp(0.0, 1.0);

    let start_rotation = if page < current_page {
        -params.max_rotation_degrees
    } else {
        params.max_rotation_degrees
    };

    let focused = page == current_page;

    PageTransform {
        rotation_degrees: lerp(start_rotation, 0.0, t),
        scale: lerp(params.min_scale, 1.0, t),
        z_index: u8::from(focused),
        blur_radius: if focused { 0.0 } else { params.blur_radius },
    }
}
