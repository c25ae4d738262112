//! Product Card Painter
//! Paints one product card through its `CardSpace`, so the whole card
//! (body, artwork, copy and button) rotates and scales as a unit.

use crate::carousel::PageTransform;
use crate::content::*;
use crate::gui::artwork::ArtworkTextures;
use crate::gui::card_space::CardSpace;
use egui::epaint::{Mesh, TextShape, Vertex};
use egui::{pos2, vec2, Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

const BAG_ICON_SIZE: f32 = 20.0;
const BAG_LABEL_GAP: f32 = 10.0;
const LABEL_PRICE_GAP: f32 = 35.0;
const DESCRIPTION_PADDING_TOP: f32 = 10.0;
const DESCRIPTION_PADDING_BOTTOM: f32 = 20.0;

/// Local rectangle of the artwork well.
pub fn artwork_rect() -> Rect {
    Rect::from_min_size(
        pos2(ARTWORK_INSET, ARTWORK_INSET),
        vec2(ARTWORK_SIZE[0], ARTWORK_SIZE[1]),
    )
}

/// Local rectangle of the Add to Cart button.
pub fn button_rect() -> Rect {
    let size = vec2(
        BUTTON_SIZE[0] + 2.0 * BUTTON_PADDING[0],
        BUTTON_SIZE[1] + 2.0 * BUTTON_PADDING[1],
    );
    let bottom = CARD_SIZE[1] - BUTTON_BOTTOM_GAP;
    Rect::from_min_size(pos2((CARD_SIZE[0] - size.x) / 2.0, bottom - size.y), size)
}

/// Paint a card. Unfocused cards use the blurred artwork and a light veil.
pub fn paint_card(
    painter: &Painter,
    space: &CardSpace,
    transform: &PageTransform,
    textures: &ArtworkTextures,
) {
    let card = space.local_rect();

    painter.add(Shape::convex_polygon(
        space.rounded_rect(card, CARD_RADIUS),
        SURFACE,
        Stroke::NONE,
    ));

    let well = artwork_rect();
    painter.add(Shape::convex_polygon(
        space.rounded_rect(well, ARTWORK_RADIUS),
        ARTWORK_WELL,
        Stroke::NONE,
    ));
    paint_texture(painter, space, well, textures.for_blur(transform.blur_radius));

    let button = button_rect();
    let center_x = card.center().x;

    // Copy is stacked upward from the button.
    let mut bottom = button.top() - DESCRIPTION_PADDING_BOTTOM;
    let lines: Vec<&str> = PRODUCT_DESCRIPTION.lines().collect();
    for line in lines.iter().rev() {
        let height = measure(painter, line, DESCRIPTION_FONT_SIZE).y;
        bottom -= height;
        paint_text(
            painter,
            space,
            line,
            DESCRIPTION_FONT_SIZE,
            TEXT_SECONDARY,
            pos2(center_x, bottom),
        );
    }
    let title_height = measure(painter, PRODUCT_TITLE, TITLE_FONT_SIZE).y;
    paint_text(
        painter,
        space,
        PRODUCT_TITLE,
        TITLE_FONT_SIZE,
        TEXT_PRIMARY,
        pos2(center_x, bottom - DESCRIPTION_PADDING_TOP - title_height),
    );

    paint_button(painter, space, button);

    if transform.blur_radius > 0.0 {
        let alpha = (transform.blur_radius * 16.0).clamp(0.0, 120.0) as u8;
        painter.add(Shape::convex_polygon(
            space.rounded_rect(card, CARD_RADIUS),
            Color32::from_white_alpha(alpha),
            Stroke::NONE,
        ));
    }
}

/// Whether `screen` lands on the card's Add to Cart button.
pub fn hits_button(space: &CardSpace, screen: Pos2) -> bool {
    space.hit(button_rect(), screen)
}

fn paint_button(painter: &Painter, space: &CardSpace, button: Rect) {
    painter.add(Shape::convex_polygon(
        space.rounded_rect(button, button.height() / 2.0),
        BUTTON,
        Stroke::NONE,
    ));

    let label = measure(painter, ADD_TO_CART, BUTTON_FONT_SIZE);
    let price = measure(painter, PRODUCT_PRICE, BUTTON_FONT_SIZE);
    let row_width = BAG_ICON_SIZE + BAG_LABEL_GAP + label.x + LABEL_PRICE_GAP + price.x;

    let mut x = button.center().x - row_width / 2.0;
    let mid_y = button.center().y;

    paint_bag_icon(
        painter,
        space,
        Rect::from_min_size(
            pos2(x, mid_y - BAG_ICON_SIZE / 2.0),
            vec2(BAG_ICON_SIZE, BAG_ICON_SIZE),
        ),
    );
    x += BAG_ICON_SIZE + BAG_LABEL_GAP;

    paint_text(
        painter,
        space,
        ADD_TO_CART,
        BUTTON_FONT_SIZE,
        BUTTON_TEXT,
        pos2(x + label.x / 2.0, mid_y - label.y / 2.0),
    );
    x += label.x + LABEL_PRICE_GAP;

    paint_text(
        painter,
        space,
        PRODUCT_PRICE,
        BUTTON_FONT_SIZE,
        BUTTON_TEXT,
        pos2(x + price.x / 2.0, mid_y - price.y / 2.0),
    );
}

fn paint_bag_icon(painter: &Painter, space: &CardSpace, icon: Rect) {
    let stroke = Stroke::new(1.6 * space.scale(), BUTTON_TEXT);
    let body = Rect::from_min_max(pos2(icon.left(), icon.top() + icon.height() * 0.3), icon.max);
    painter.add(Shape::closed_line(space.rounded_rect(body, 3.0), stroke));

    // Handle: half circle above the body.
    let center = pos2(icon.center().x, body.top());
    let radius = icon.width() * 0.25;
    let handle: Vec<Pos2> = (0..=8)
        .map(|i| {
            let angle = std::f32::consts::PI * (1.0 + i as f32 / 8.0);
            space.to_screen(center + radius * egui::Vec2::angled(angle))
        })
        .collect();
    painter.add(Shape::line(handle, stroke));
}

fn paint_texture(painter: &Painter, space: &CardSpace, local: Rect, texture: egui::TextureId) {
    let uvs = [pos2(0.0, 0.0), pos2(1.0, 0.0), pos2(1.0, 1.0), pos2(0.0, 1.0)];
    let mut mesh = Mesh::with_texture(texture);
    for (pos, uv) in space.quad(local).into_iter().zip(uvs) {
        mesh.vertices.push(Vertex {
            pos,
            uv,
            color: Color32::WHITE,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    painter.add(Shape::mesh(mesh));
}

/// Unscaled size of a single text line in card units.
fn measure(painter: &Painter, text: &str, size: f32) -> egui::Vec2 {
    painter
        .layout_no_wrap(text.to_owned(), FontId::proportional(size), TEXT_PRIMARY)
        .size()
}

/// Paint a single line horizontally centred on `top_center` (card units).
fn paint_text(
    painter: &Painter,
    space: &CardSpace,
    text: &str,
    size: f32,
    color: Color32,
    top_center: Pos2,
) {
    let local = measure(painter, text, size);
    let top_left = pos2(top_center.x - local.x / 2.0, top_center.y);
    let galley = painter.layout_no_wrap(
        text.to_owned(),
        FontId::proportional(size * space.scale()),
        color,
    );
    painter.add(
        TextShape::new(space.to_screen(top_left), galley, color).with_angle(space.angle()),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_sits_centred_above_bottom_gap() {
        let button = button_rect();
        assert!((button.center().x - CARD_SIZE[0] / 2.0).abs() < 1e-4);
        assert!((button.bottom() - (CARD_SIZE[1] - BUTTON_BOTTOM_GAP)).abs() < 1e-4);
        assert!(button.width() < CARD_SIZE[0]);
    }

    #[test]
    fn artwork_well_is_inset_from_top() {
        let well = artwork_rect();
        assert_eq!(well.min, pos2(20.0, 20.0));
        assert_eq!(well.size(), vec2(285.0, 243.0));
        assert!(well.bottom() < button_rect().top());
    }

    #[test]
    fn button_hit_uses_card_transform() {
        let transform = PageTransform {
            rotation_degrees: 0.0,
            scale: 0.5,
            z_index: 0,
            blur_radius: 5.0,
        };
        let space = CardSpace::new(
            pos2(0.0, 0.0),
            vec2(CARD_SIZE[0], CARD_SIZE[1]),
            &transform,
        );
        let on_button = space.to_screen(button_rect().center());
        assert!(hits_button(&space, on_button));
        assert!(!hits_button(&space, space.to_screen(artwork_rect().center())));
    }
}
