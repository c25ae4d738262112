//! Procedural card artwork
//! Draws the potted plant shown on every product card, plus the blurred
//! copy used by cards that are out of focus.

use image::{ImageBuffer, Rgba, RgbaImage};

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const POT: Rgba<u8> = Rgba([196, 106, 72, 255]);
const POT_RIM: Rgba<u8> = Rgba([172, 90, 60, 255]);
const POT_SHADOW: Rgba<u8> = Rgba([0, 0, 0, 40]);
const LEAF_DARK: Rgba<u8> = Rgba([62, 128, 70, 255]);
const LEAF_LIGHT: Rgba<u8> = Rgba([98, 168, 88, 255]);

/// Leaf as a rotated ellipse in units of image height:
/// (center x, center y, half width, half length, tilt in degrees, color).
const LEAVES: [(f32, f32, f32, f32, f32, Rgba<u8>); 7] = [
    (0.30, 0.48, 0.05, 0.15, -62.0, LEAF_DARK),
    (0.70, 0.48, 0.05, 0.15, 62.0, LEAF_DARK),
    (0.37, 0.37, 0.06, 0.18, -35.0, LEAF_LIGHT),
    (0.63, 0.37, 0.06, 0.18, 35.0, LEAF_LIGHT),
    (0.44, 0.30, 0.06, 0.20, -12.0, LEAF_DARK),
    (0.56, 0.30, 0.06, 0.20, 12.0, LEAF_DARK),
    (0.50, 0.26, 0.05, 0.21, 0.0, LEAF_LIGHT),
];

/// Potted plant on a transparent background.
pub fn plant_artwork(width: u32, height: u32) -> RgbaImage {
    let mut img = ImageBuffer::from_pixel(width.max(1), height.max(1), TRANSPARENT);
    let (w, h) = (img.width() as f32, img.height() as f32);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Sample at the pixel centre, x in image-height units around the middle.
        let px = (x as f32 + 0.5 - w / 2.0) / h + 0.5;
        let py = (y as f32 + 0.5) / h;

        if let Some(color) = shade(px, py) {
            *pixel = color;
        }
    }

    img
}

fn shade(x: f32, y: f32) -> Option<Rgba<u8>> {
    // Pot body: trapezoid narrowing toward the bottom.
    if (0.62..=0.94).contains(&y) {
        let t = (y - 0.62) / 0.32;
        let half = 0.17 - 0.04 * t;
        if (x - 0.5).abs() <= half {
            // Darker right flank fakes a light source on the left.
            return Some(if x - 0.5 > half * 0.55 { POT_RIM } else { POT });
        }
    }

    // Rim sits on top of the body and over the leaf bases.
    if (0.57..0.62).contains(&y) && (x - 0.5).abs() <= 0.20 {
        return Some(POT_RIM);
    }

    for &(cx, cy, a, b, tilt, color) in LEAVES.iter().rev() {
        if in_ellipse(x - cx, y - cy, a, b, tilt.to_radians()) {
            return Some(color);
        }
    }

    // Soft contact shadow under the pot.
    if in_ellipse(x - 0.5, y - 0.955, 0.19, 0.02, 0.0) {
        return Some(POT_SHADOW);
    }

    None
}

fn in_ellipse(dx: f32, dy: f32, a: f32, b: f32, angle: f32) -> bool {
    let (sin, cos) = angle.sin_cos();
    let u = dx * cos + dy * sin;
    let v = -dx * sin + dy * cos;
    (u / a).powi(2) + (v / b).powi(2) <= 1.0
}

/// Gaussian-blurred copy; a non-positive sigma returns the image unchanged.
pub fn blurred(img: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        return img.clone();
    }
    image::imageops::blur(img, sigma)
}

pub fn to_color_image(img: &RgbaImage) -> egui::ColorImage {
    egui::ColorImage::from_rgba_unmultiplied(
        [img.width() as usize, img.height() as usize],
        img.as_raw(),
    )
}

/// Sharp and blurred artwork uploaded to the GPU.
pub struct ArtworkTextures {
    pub sharp: egui::TextureHandle,
    pub blurred: egui::TextureHandle,
}

impl ArtworkTextures {
    /// Render the artwork at `size` points and upload both variants.
    /// `blur_radius` is in points and is converted to pixels.
    pub fn load(ctx: &egui::Context, size: [f32; 2], blur_radius: f32) -> Self {
        let ppp = ctx.pixels_per_point();
        let width = (size[0] * ppp).round() as u32;
        let height = (size[1] * ppp).round() as u32;

        let sharp = plant_artwork(width, height);
        let soft = blurred(&sharp, blur_radius * ppp);
        log::debug!(
            "Generated card artwork {}x{} px, blur sigma {:.1}",
            width,
            height,
            blur_radius * ppp
        );

        Self {
            sharp: ctx.load_texture("plant_artwork", to_color_image(&sharp), Default::default()),
            blurred: ctx.load_texture(
                "plant_artwork_blurred",
                to_color_image(&soft),
                Default::default(),
            ),
        }
    }

    pub fn for_blur(&self, blur_radius: f32) -> egui::TextureId {
        if blur_radius > 0.0 {
            self.blurred.id()
        } else {
            self.sharp.id()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_has_requested_size() {
        let img = plant_artwork(285, 243);
        assert_eq!(img.dimensions(), (285, 243));
    }

    #[test]
    fn artwork_draws_pot_and_leaves() {
        let img = plant_artwork(300, 300);
        // Centre of the pot body.
        assert_eq!(*img.get_pixel(150, 230), POT);
        // Top central leaf.
        assert_eq!(*img.get_pixel(150, 80), LEAF_LIGHT);
        // Corners stay empty.
        assert_eq!(*img.get_pixel(0, 0), TRANSPARENT);
        assert_eq!(*img.get_pixel(299, 0), TRANSPARENT);
    }

    #[test]
    fn zero_size_is_padded_to_one_pixel() {
        let img = plant_artwork(0, 0);
        assert_eq!(img.dimensions(), (1, 1));
    }

    #[test]
    fn blur_softens_edges() {
        let sharp = plant_artwork(120, 120);
        let soft = blurred(&sharp, 4.0);
        assert_eq!(soft.dimensions(), sharp.dimensions());
        assert_ne!(soft, sharp);

        let unchanged = blurred(&sharp, 0.0);
        assert_eq!(unchanged, sharp);
    }

    #[test]
    fn color_image_keeps_dimensions() {
        let img = plant_artwork(40, 30);
        let color = to_color_image(&img);
        assert_eq!(color.size, [40, 30]);
    }
}
