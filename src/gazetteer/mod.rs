//! Gazetteer index and location resolution.

pub mod index;
pub mod resolver;

pub use index::{GazetteerIndex, GazetteerRecord};
pub use resolver::{GazetteerCandidate, LocationResolver};
