//! GUI module - Screen layout and widgets

mod app;
pub mod artwork;
pub mod card;
pub mod card_space;
mod chip_selector;
pub mod header;
pub mod nav_bar;
mod pager;

pub use app::PlantStoreApp;
pub use chip_selector::{ChipSelector, ChipSelectorAction};
pub use pager::{Pager, PagerAction};
