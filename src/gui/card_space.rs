//! Card coordinate space: maps points laid out on an untransformed card
//! onto the screen through the page's scale and rotation.

use crate::carousel::PageTransform;
use egui::emath::Rot2;
use egui::{Pos2, Rect, Vec2};
use std::f32::consts::{FRAC_PI_2, PI};

const CORNER_SEGMENTS: usize = 8;

/// Local coordinates have their origin at the card's top-left corner and
/// span `size`. Scale and rotation pivot on the card centre.
#[derive(Debug, Clone, Copy)]
pub struct CardSpace {
    center: Pos2,
    size: Vec2,
    scale: f32,
    rotation: Rot2,
}

impl CardSpace {
    pub fn new(center: Pos2, size: Vec2, transform: &PageTransform) -> Self {
        Self {
            center,
            size,
            scale: transform.scale,
            rotation: Rot2::from_angle(transform.rotation_radians()),
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn angle(&self) -> f32 {
        self.rotation.angle()
    }

    pub fn local_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    pub fn to_screen(&self, local: Pos2) -> Pos2 {
        let from_center = (local - self.local_rect().center()) * self.scale;
        self.center + self.rotation * from_center
    }

    pub fn to_local(&self, screen: Pos2) -> Pos2 {
        let from_center = self.rotation.inverse() * (screen - self.center);
        self.local_rect().center() + from_center / self.scale
    }

    /// Whether a screen position falls inside a local rectangle.
    pub fn hit(&self, local: Rect, screen: Pos2) -> bool {
        local.contains(self.to_local(screen))
    }

    /// Screen-space outline of a rounded local rectangle, clockwise.
    pub fn rounded_rect(&self, local: Rect, radius: f32) -> Vec<Pos2> {
        rounded_rect_outline(local, radius)
            .into_iter()
            .map(|p| self.to_screen(p))
            .collect()
    }

    /// Screen-space corners of a local rectangle: top-left, top-right,
    /// bottom-right, bottom-left.
    pub fn quad(&self, local: Rect) -> [Pos2; 4] {
        [
            self.to_screen(local.left_top()),
            self.to_screen(local.right_top()),
            self.to_screen(local.right_bottom()),
            self.to_screen(local.left_bottom()),
        ]
    }
}

/// Outline of a rounded rectangle, clockwise in screen orientation.
pub fn rounded_rect_outline(rect: Rect, radius: f32) -> Vec<Pos2> {
    let r = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let corners = [
        (Pos2::new(rect.left() + r, rect.top() + r), PI),
        (Pos2::new(rect.right() - r, rect.top() + r), PI + FRAC_PI_2),
        (Pos2::new(rect.right() - r, rect.bottom() - r), 0.0),
        (Pos2::new(rect.left() + r, rect.bottom() - r), FRAC_PI_2),
    ];

    let mut points = Vec::with_capacity(4 * (CORNER_SEGMENTS + 1));
    for (center, start) in corners {
        for i in 0..=CORNER_SEGMENTS {
            let angle = start + FRAC_PI_2 * i as f32 / CORNER_SEGMENTS as f32;
            points.push(center + r * Vec2::angled(angle));
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transform(rotation_degrees: f32, scale: f32) -> PageTransform {
        PageTransform {
            rotation_degrees,
            scale,
            z_index: 0,
            blur_radius: 0.0,
        }
    }

    #[test]
    fn identity_maps_card_onto_center() {
        let space = CardSpace::new(
            Pos2::new(200.0, 300.0),
            Vec2::new(100.0, 50.0),
            &transform(0.0, 1.0),
        );
        let top_left = space.to_screen(Pos2::ZERO);
        assert!((top_left - Pos2::new(150.0, 275.0)).length() < 1e-4);
    }

    #[test]
    fn to_local_inverts_to_screen() {
        let space = CardSpace::new(
            Pos2::new(180.0, 320.0),
            Vec2::new(325.0, 464.0),
            &transform(-7.5, 0.8),
        );
        for p in [
            Pos2::new(0.0, 0.0),
            Pos2::new(325.0, 464.0),
            Pos2::new(40.0, 400.0),
        ] {
            let round_trip = space.to_local(space.to_screen(p));
            assert!((round_trip - p).length() < 1e-3);
        }
    }

    #[test]
    fn scale_shrinks_around_center() {
        let space = CardSpace::new(
            Pos2::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            &transform(0.0, 0.5),
        );
        let corner = space.to_screen(Pos2::new(100.0, 100.0));
        assert!((corner - Pos2::new(25.0, 25.0)).length() < 1e-4);
    }

    #[test]
    fn hit_test_follows_rotation() {
        let space = CardSpace::new(
            Pos2::new(0.0, 0.0),
            Vec2::new(200.0, 20.0),
            &transform(90.0, 1.0),
        );
        let band = space.local_rect();
        // Rotated a quarter turn the wide band now stands upright.
        assert!(space.hit(band, Pos2::new(0.0, 90.0)));
        assert!(!space.hit(band, Pos2::new(90.0, 0.0)));
    }

    #[test]
    fn outline_stays_inside_rect() {
        let rect = Rect::from_min_size(Pos2::ZERO, Vec2::new(90.0, 46.0));
        let outline = rounded_rect_outline(rect, 60.0);
        assert_eq!(outline.len(), 4 * (CORNER_SEGMENTS + 1));
        for p in outline {
            assert!(rect.expand(1e-3).contains(p));
        }
    }
}
