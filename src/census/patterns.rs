//! Stable slot layout of the count vectors.
//!
//! Slot order is part of the output format: JSON reports, the plain-text
//! writer and the conversion matrices all index by these positions.

pub const THREE_VERTEX_PATTERNS: [&str; 4] = ["independent", "edge", "wedge", "triangle"];

pub const FOUR_VERTEX_PATTERNS: [&str; 11] = [
    "independent",
    "edge",
    "matching",
    "wedge",
    "triangle",
    "three_star",
    "three_path",
    "tailed_triangle",
    "four_cycle",
    "chordal_four_cycle",
    "four_clique",
];

pub const FIVE_VERTEX_PATTERNS: [&str; 34] = [
    "independent",
    "edge",
    "matching",
    "wedge",
    "triangle",
    "three_star",
    "three_path",
    "tailed_triangle",
    "four_cycle",
    "chordal_four_cycle",
    "four_clique",
    "wedge_plus_edge",
    "triangle_plus_edge",
    "four_star",
    "prong",
    "four_path",
    "fork_tailed_triangle",
    "long_tailed_triangle",
    "double_tailed_triangle",
    "tailed_four_cycle",
    "five_cycle",
    "hourglass",
    "cobra",
    "stingray",
    "hatted_four_cycle",
    "three_wedge_collision",
    "stellate_trident",
    "tailed_four_clique",
    "triangle_strip",
    "chordal_wedge_collision",
    "wheel",
    "hatted_four_clique",
    "almost_five_clique",
    "five_clique",
];

/// First connected slot of the 4-vertex vector
pub const FOUR_CONNECTED_START: usize = 5;

/// First connected slot of the 5-vertex vector
pub const FIVE_CONNECTED_START: usize = 13;

/// Edge list of a representative of each 4-vertex slot
pub const FOUR_VERTEX_EDGES: [&[(u8, u8)]; 11] = [
    &[],
    &[(0, 1)],
    &[(0, 1), (2, 3)],
    &[(0, 1), (1, 2)],
    &[(0, 1), (1, 2), (0, 2)],
    &[(0, 1), (0, 2), (0, 3)],
    &[(0, 1), (1, 2), (2, 3)],
    &[(0, 1), (1, 2), (0, 2), (0, 3)],
    &[(0, 1), (1, 2), (2, 3), (3, 0)],
    &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
    &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
];

/// Edge list of a representative of each 5-vertex slot
pub const FIVE_VERTEX_EDGES: [&[(u8, u8)]; 34] = [
    &[],
    &[(0, 1)],
    &[(0, 1), (2, 3)],
    &[(0, 1), (1, 2)],
    &[(0, 1), (1, 2), (0, 2)],
    &[(0, 1), (0, 2), (0, 3)],
    &[(0, 1), (1, 2), (2, 3)],
    &[(0, 1), (1, 2), (0, 2), (0, 3)],
    &[(0, 1), (1, 2), (2, 3), (3, 0)],
    &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)],
    &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)],
    &[(0, 1), (1, 2), (3, 4)],
    &[(0, 1), (1, 2), (0, 2), (3, 4)],
    &[(0, 1), (0, 2), (0, 3), (0, 4)],
    &[(0, 1), (0, 2), (0, 3), (3, 4)],
    &[(0, 1), (1, 2), (2, 3), (3, 4)],
    &[(0, 1), (1, 2), (0, 2), (0, 3), (0, 4)],
    &[(0, 1), (1, 2), (0, 2), (0, 3), (3, 4)],
    &[(0, 1), (1, 2), (0, 2), (0, 3), (1, 4)],
    &[(0, 1), (1, 2), (2, 3), (3, 0), (0, 4)],
    &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 0)],
    &[(0, 1), (1, 2), (0, 2), (0, 3), (0, 4), (3, 4)],
    &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (3, 4)],
    &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4)],
    &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 0), (4, 1)],
    &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4)],
    &[(0, 1), (0, 2), (1, 2), (0, 3), (1, 3), (0, 4), (1, 4)],
    &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (0, 4)],
    &[(0, 1), (0, 2), (1, 2), (1, 3), (2, 3), (2, 4), (3, 4)],
    &[(0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3)],
    &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (2, 3), (3, 4), (4, 1)],
    &[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3), (4, 0), (4, 1)],
    &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4)],
    &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let five: HashSet<_> = FIVE_VERTEX_PATTERNS.iter().collect();
        assert_eq!(five.len(), FIVE_VERTEX_PATTERNS.len());
        let four: HashSet<_> = FOUR_VERTEX_PATTERNS.iter().collect();
        assert_eq!(four.len(), FOUR_VERTEX_PATTERNS.len());
    }

    #[test]
    fn test_low_five_slots_repeat_four_names() {
        assert_eq!(&FIVE_VERTEX_PATTERNS[..11], &FOUR_VERTEX_PATTERNS[..]);
    }

    #[test]
    fn test_edge_counts_never_decrease_within_connected_block() {
        let sizes: Vec<usize> = FIVE_VERTEX_EDGES[FIVE_CONNECTED_START..]
            .iter()
            .map(|edges| edges.len())
            .collect();
        assert!(sizes.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(sizes.first(), Some(&4));
        assert_eq!(sizes.last(), Some(&10));
    }
}
