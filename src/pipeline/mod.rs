//! Pipeline module - the read, transform, write steps

pub mod reader;
pub mod transform;
pub mod writer;

pub use reader::*;
pub use transform::*;
pub use writer::*;
