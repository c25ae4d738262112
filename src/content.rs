//! Fixed content of the storefront screen: copy, colors and layout sizes.
//!
//! Sizes are in egui points, which play the role of density-independent units.

use egui::Color32;

// =============================================================================
// COPY
// =============================================================================

pub const CATEGORIES: [&str; 6] = ["Plants", "Flowers", "Cacti", "Herbs", "Bonsai", "Hercai"];

pub const HEADLINE: &str = "Let's make\nyour home greener";
pub const COLLECTIONS_TITLE: &str = "Plant Collections";

pub const PRODUCT_TITLE: &str = "The Potted Head";
pub const PRODUCT_DESCRIPTION: &str =
    "Perfect for beginners or anyone looking\nfor an easy-to-care-for plant";
pub const PRODUCT_PRICE: &str = "$50.00";
pub const ADD_TO_CART: &str = "Add to Cart";

// =============================================================================
// COLORS
// =============================================================================

pub const BACKGROUND: Color32 = Color32::from_rgb(236, 236, 236);
pub const SURFACE: Color32 = Color32::WHITE;
pub const CHIP_SELECTED: Color32 = Color32::from_rgb(196, 236, 120);
pub const ARTWORK_WELL: Color32 = Color32::from_rgb(226, 226, 226);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(24, 24, 24);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8B, 0x8B, 0x8B);
pub const BUTTON: Color32 = Color32::BLACK;
pub const BUTTON_TEXT: Color32 = Color32::WHITE;

// =============================================================================
// LAYOUT
// =============================================================================

/// Left inset of the header blocks and the chip row.
pub const SCREEN_PADDING: f32 = 20.0;
/// Gap above each header block and the chip row.
pub const SECTION_GAP: f32 = 30.0;

pub const CHIP_SIZE: [f32; 2] = [90.0, 46.0];
pub const CHIP_INNER_SIZE: [f32; 2] = [74.0, 30.0];
pub const CHIP_SPACING: f32 = 4.0;
pub const CHIP_FONT_SIZE: f32 = 14.0;

/// Horizontal padding of the pager viewport on each side.
pub const PAGER_CONTENT_PADDING: f32 = 54.0;
pub const PAGER_TOP_PADDING: f32 = 30.0;
/// Gap between adjacent pages; negative so neighbours overlap the centre card.
pub const PAGE_SPACING: f32 = -100.0;

pub const CARD_SIZE: [f32; 2] = [325.0, 464.0];
pub const CARD_RADIUS: f32 = 42.0;
pub const ARTWORK_SIZE: [f32; 2] = [285.0, 243.0];
pub const ARTWORK_RADIUS: f32 = 23.0;
pub const ARTWORK_INSET: f32 = 20.0;
pub const TITLE_FONT_SIZE: f32 = 24.0;
pub const DESCRIPTION_FONT_SIZE: f32 = 14.0;
pub const BUTTON_SIZE: [f32; 2] = [215.0, 40.0];
pub const BUTTON_PADDING: [f32; 2] = [24.0, 8.0];
pub const BUTTON_FONT_SIZE: f32 = 17.0;
pub const BUTTON_BOTTOM_GAP: f32 = 20.0;

pub const NAV_BAR_HEIGHT: f32 = 80.0;
pub const NAV_BAR_TOP_GAP: f32 = 15.0;
pub const NAV_PILL_SIZE: [f32; 2] = [109.0, 48.0];
