//! The chunk codec: framing, type dispatch, and per-type interpreters.

pub mod attrs;
pub mod kind;
pub mod raw;
pub mod segment;

pub use attrs::Attributes;
pub use kind::SegmentTag;
pub use raw::{read_segment, SegmentStream};
pub use segment::Segment;
