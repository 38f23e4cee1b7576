//! Concatenate data segments, decompress, defilter, and the reverse path.

pub mod filter;
pub mod pipeline;
pub mod writer;

pub use filter::{paeth_predictor, FilterType};
pub use pipeline::defilter;
pub use writer::encode_raster_bytes;
