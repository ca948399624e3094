pub mod batch;
pub mod rendering;
