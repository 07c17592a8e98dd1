pub mod media;
pub mod rendering;
