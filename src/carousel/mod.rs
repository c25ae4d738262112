//! Carousel module - Pager scroll state, settle animation and per-page transforms

mod animator;
mod position;
mod transform;

pub use animator::SnapAnimator;
pub use position::CarouselPosition;
pub use transform::{lerp, page_transform, PageTransform, TransformParams};
