pub mod color;
pub mod filter;
pub mod geo;
pub mod sort;
pub mod timestamp;
