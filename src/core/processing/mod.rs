pub mod convert;
pub mod pipeline;
pub mod resize;
