//! Exact counting of 3, 4 and 5-vertex patterns
//!
//! All counters expect a rank-labelled graph and its degree-ordered DAG, as
//! produced by `graph::ordering::prepare`.

pub mod patterns;
pub mod scratch;
pub mod triangles;
pub mod three;
pub mod four;
pub mod five;
pub mod conversion;
pub mod orchestrator;

pub use orchestrator::{run_census, CensusReport, PatternSize};
pub use scratch::VertexScratch;
pub use triangles::{Triangle, TriangleInfo, TriangleIter, TriangleList, Traversal};

/// Integer type for exact pattern counts.
///
/// Binomials of hub degrees and the degree products in the 5-vertex formulas
/// exceed 63 bits long before the final counts do, so every tally and
/// accumulator is 128-bit.
pub type Count = i128;

/// `max(x - k, 0)`
#[inline]
pub fn czsub(x: Count, k: Count) -> Count {
    (x - k).max(0)
}

#[inline]
pub fn choose2(x: Count) -> Count {
    x * (x - 1) / 2
}

#[inline]
pub fn choose3(x: Count) -> Count {
    x * (x - 1) * (x - 2) / 6
}

#[inline]
pub fn choose4(x: Count) -> Count {
    x * (x - 1) * (x - 2) * (x - 3) / 24
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomials_vanish_below_k() {
        for x in 0..2 {
            assert_eq!(choose2(x), 0);
        }
        for x in 0..3 {
            assert_eq!(choose3(x), 0);
        }
        for x in 0..4 {
            assert_eq!(choose4(x), 0);
        }
        assert_eq!(choose2(5), 10);
        assert_eq!(choose3(5), 10);
        assert_eq!(choose4(6), 15);
    }

    #[test]
    fn test_binomials_of_hub_degrees() {
        // The unreduced product 60000·59999·59998·59997 needs more than 63 bits
        assert_eq!(choose4(60_000), 539_946_001_649_985_000);
        assert_eq!(choose3(60_000), 35_998_200_020_000);
        assert_eq!(choose4(1 << 31), ((1i128 << 31) * ((1 << 31) - 1) * ((1 << 31) - 2) * ((1 << 31) - 3)) / 24);
    }

    #[test]
    fn test_czsub_clamps() {
        assert_eq!(czsub(1, 3), 0);
        assert_eq!(czsub(7, 3), 4);
    }
}
