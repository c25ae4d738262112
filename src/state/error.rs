use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StateError {
    #[error("Category index {index} out of range (have {count} categories)")]
    CategoryOutOfRange { index: usize, count: usize },
    #[error("Page {page} out of range (pager has {count} pages)")]
    PageOutOfRange { page: usize, count: usize },
    #[error("Page offset fraction {0} outside [-1, 1]")]
    OffsetOutOfRange(f32),
}
