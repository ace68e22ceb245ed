//! Graph representation, preparation and statistics

pub mod compressed;
pub mod builder;
pub mod ordering;
pub mod algorithms;

pub use compressed::CompressedGraph;
pub use ordering::DegreeOrderedDag;
