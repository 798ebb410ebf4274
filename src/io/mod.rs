//! I/O layer: decoding input sheets and writing normalized ones.
pub mod reader;
pub use reader::read_image;

pub mod writers;
