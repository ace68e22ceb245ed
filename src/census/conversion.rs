//! Conversion between non-induced and induced pattern counts
//!
//! A non-induced count of pattern H is the sum, over every pattern G on the
//! same vertex count, of (copies of H inside G) times the induced count of G.
//! The `*_IND_TO_NON` tables hold those copy numbers. They are upper
//! triangular with a unit diagonal, and the `*_NON_TO_IND` tables are their
//! exact inverses.

use crate::error::CensusError;

pub const THREE_IND_TO_NON: [[i32; 4]; 4] = [
    [1, 1, 1, 1],
    [0, 1, 2, 3],
    [0, 0, 1, 3],
    [0, 0, 0, 1],
];

pub const THREE_NON_TO_IND: [[i32; 4]; 4] = [
    [1, -1, 1, -1],
    [0, 1, -2, 3],
    [0, 0, 1, -3],
    [0, 0, 0, 1],
];

pub const FOUR_IND_TO_NON: [[i32; 11]; 11] = [
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 2, 2, 3, 3, 3, 4, 4, 5, 6],
    [0, 0, 1, 0, 0, 0, 1, 1, 2, 2, 3],
    [0, 0, 0, 1, 3, 3, 2, 5, 4, 8, 12],
    [0, 0, 0, 0, 1, 0, 0, 1, 0, 2, 4],
    [0, 0, 0, 0, 0, 1, 0, 1, 0, 2, 4],
    [0, 0, 0, 0, 0, 0, 1, 2, 4, 6, 12],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 4, 12],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 3],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 6],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
];

pub const FOUR_NON_TO_IND: [[i32; 11]; 11] = [
    [1, -1, 1, 1, -1, -1, -1, 1, 1, -1, 1],
    [0, 1, -2, -2, 3, 3, 3, -4, -4, 5, -6],
    [0, 0, 1, 0, 0, 0, -1, 1, 2, -2, 3],
    [0, 0, 0, 1, -3, -3, -2, 5, 4, -8, 12],
    [0, 0, 0, 0, 1, 0, 0, -1, 0, 2, -4],
    [0, 0, 0, 0, 0, 1, 0, -1, 0, 2, -4],
    [0, 0, 0, 0, 0, 0, 1, -2, -4, 6, -12],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, -4, 12],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 3],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -6],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
];

/// Induced to non-induced over the 21 connected 5-vertex patterns (slots
/// 13..34 of the 5-vertex vector)
pub const FIVE_IND_TO_NON: [[i32; 21]; 21] = [
    [1, 0, 0, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 2, 1, 1, 0, 1, 2, 3, 5],
    [0, 1, 0, 2, 1, 2, 2, 0, 4, 4, 5, 4, 6, 12, 9, 10, 10, 20, 20, 36, 60],
    [0, 0, 1, 0, 2, 1, 2, 5, 4, 4, 2, 7, 6, 6, 6, 10, 14, 24, 18, 36, 60],
    [0, 0, 0, 1, 0, 0, 0, 0, 2, 0, 2, 0, 0, 6, 3, 3, 0, 4, 8, 15, 30],
    [0, 0, 0, 0, 1, 0, 0, 0, 4, 2, 0, 2, 0, 0, 3, 6, 6, 16, 12, 30, 60],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 2, 1, 0, 6, 6, 5, 4, 12, 14, 30, 60],
    [0, 0, 0, 0, 0, 0, 1, 0, 0, 1, 1, 2, 6, 6, 3, 4, 8, 16, 12, 30, 60],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 2, 4, 2, 6, 12],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 1, 0, 2, 2, 6, 15],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 3, 2, 2, 8, 8, 24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 6, 3, 2, 0, 4, 10, 24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 4, 12, 6, 24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 1, 2, 1, 4, 10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 3, 10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 2, 6, 20],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 4, 4, 18, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 4, 1, 9, 30],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 3, 15],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 6, 30],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
];

pub const FIVE_NON_TO_IND: [[i32; 21]; 21] = [
    [1, 0, 0, -1, 0, 0, 0, 0, 1, 0, 1, 0, 0, -2, -1, -1, 0, 1, 2, -3, 5],
    [0, 1, 0, -2, -1, -2, -2, 0, 4, 4, 5, 4, 6, -12, -9, -10, -10, 20, 20, -36, 60],
    [0, 0, 1, 0, -2, -1, -2, -5, 4, 4, 2, 7, 6, -6, -6, -10, -14, 24, 18, -36, 60],
    [0, 0, 0, 1, 0, 0, 0, 0, -2, 0, -2, 0, 0, 6, 3, 3, 0, -4, -8, 15, -30],
    [0, 0, 0, 0, 1, 0, 0, 0, -4, -2, 0, -2, 0, 0, 3, 6, 6, -16, -12, 30, -60],
    [0, 0, 0, 0, 0, 1, 0, 0, 0, -2, -2, -1, 0, 6, 6, 5, 4, -12, -14, 30, -60],
    [0, 0, 0, 0, 0, 0, 1, 0, 0, -1, -1, -2, -6, 6, 3, 4, 8, -16, -12, 30, -60],
    [0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, -1, 0, 0, 0, 1, 2, -4, -2, 6, -12],
    [0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, -1, 0, 2, 2, -6, 15],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, -3, -2, -2, 8, 8, -24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, -6, -3, -2, 0, 4, 10, -24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, -2, -4, 12, 6, -24, 60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -1, 0, 0, -1, 2, 1, -4, 10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, -1, 3, -10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, -2, 6, -20],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, -4, -4, 18, -60],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -4, -1, 9, -30],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, -3, 15],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -6, 30],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, -10],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
];

/// Dense product `matrix · v`
pub fn apply<const N: usize>(matrix: &[[i32; N]; N], v: &[f64; N]) -> [f64; N] {
    let mut out = [0.0; N];
    for (row, slot) in matrix.iter().zip(out.iter_mut()) {
        *slot = row.iter().zip(v).map(|(&a, &x)| a as f64 * x).sum();
    }
    out
}

/// `apply` for a vector whose length is only known at runtime
pub fn try_apply<const N: usize>(matrix: &[[i32; N]; N], v: &[f64]) -> Result<[f64; N], CensusError> {
    let fixed: &[f64; N] = v.try_into().map_err(|_| CensusError::DimensionMismatch {
        expected: N,
        actual: v.len(),
    })?;
    Ok(apply(matrix, fixed))
}

pub fn three_non_to_induced(non: &[f64; 4]) -> [f64; 4] {
    apply(&THREE_NON_TO_IND, non)
}

pub fn three_induced_to_non(induced: &[f64; 4]) -> [f64; 4] {
    apply(&THREE_IND_TO_NON, induced)
}

pub fn four_non_to_induced(non: &[f64; 11]) -> [f64; 11] {
    apply(&FOUR_NON_TO_IND, non)
}

pub fn four_induced_to_non(induced: &[f64; 11]) -> [f64; 11] {
    apply(&FOUR_IND_TO_NON, induced)
}

/// Induced counts of the six connected 4-vertex patterns, peeled off from
/// the densest pattern down
pub fn four_connected_non_to_induced(non: &[f64; 11]) -> [f64; 6] {
    let [stars, paths, tailed, cycles, chordal, cliques] =
        [non[5], non[6], non[7], non[8], non[9], non[10]];

    let cliques_ind = cliques;
    let chordal_ind = chordal - 6.0 * cliques_ind;
    let cycles_ind = cycles - 3.0 * cliques_ind - chordal_ind;
    let tailed_ind = tailed - 4.0 * chordal_ind - 12.0 * cliques_ind;
    let paths_ind = paths - 2.0 * tailed_ind - 4.0 * cycles_ind - 6.0 * chordal_ind - 12.0 * cliques_ind;
    let stars_ind = stars - tailed_ind - 2.0 * chordal_ind - 4.0 * cliques_ind;

    [stars_ind, paths_ind, tailed_ind, cycles_ind, chordal_ind, cliques_ind]
}

/// Induced counts of the 21 connected 5-vertex patterns
pub fn five_non_to_induced(non: &[f64; 34]) -> [f64; 21] {
    let mut connected = [0.0; 21];
    connected.copy_from_slice(&non[13..]);
    apply(&FIVE_NON_TO_IND, &connected)
}

pub fn five_induced_to_non(induced: &[f64; 21]) -> [f64; 21] {
    apply(&FIVE_IND_TO_NON, induced)
}

fn closure<const N: usize>(conversion: &[[i32; N]; N], induced: &[f64; N], non: &[f64; N]) -> [[f64; N]; N] {
    let mut matrix = [[0.0; N]; N];
    for i in 0..N {
        if non[i] == 0.0 {
            // An empty pattern class has no closure fractions to report
            continue;
        }
        for j in 0..N {
            matrix[i][j] = conversion[i][j] as f64 * induced[j] / non[i];
        }
    }
    matrix
}

/// For each connected 4-vertex pattern i, the share of its non-induced
/// copies that sit inside an induced copy of pattern j. Rows of non-empty
/// patterns sum to 1.
pub fn closure_matrix(non: &[f64; 11]) -> [[f64; 6]; 6] {
    let induced = four_connected_non_to_induced(non);
    let mut connected = [0.0; 6];
    connected.copy_from_slice(&non[5..]);

    let mut conversion = [[0i32; 6]; 6];
    for (i, row) in conversion.iter_mut().enumerate() {
        row.copy_from_slice(&FOUR_IND_TO_NON[5 + i][5..]);
    }

    closure(&conversion, &induced, &connected)
}

/// The 5-vertex analogue of `closure_matrix` over the 21 connected patterns
pub fn closure_matrix_five(non: &[f64; 34]) -> [[f64; 21]; 21] {
    let induced = five_non_to_induced(non);
    let mut connected = [0.0; 21];
    connected.copy_from_slice(&non[13..]);
    closure(&FIVE_IND_TO_NON, &induced, &connected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn multiply<const N: usize>(a: &[[i32; N]; N], b: &[[i32; N]; N]) -> [[i64; N]; N] {
        let mut out = [[0i64; N]; N];
        for i in 0..N {
            for j in 0..N {
                out[i][j] = (0..N).map(|k| a[i][k] as i64 * b[k][j] as i64).sum();
            }
        }
        out
    }

    fn assert_identity<const N: usize>(m: [[i64; N]; N]) {
        for i in 0..N {
            for j in 0..N {
                assert_eq!(m[i][j], (i == j) as i64, "entry ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_tables_are_inverse_pairs() {
        assert_identity(multiply(&THREE_NON_TO_IND, &THREE_IND_TO_NON));
        assert_identity(multiply(&THREE_IND_TO_NON, &THREE_NON_TO_IND));
        assert_identity(multiply(&FOUR_NON_TO_IND, &FOUR_IND_TO_NON));
        assert_identity(multiply(&FOUR_IND_TO_NON, &FOUR_NON_TO_IND));
        assert_identity(multiply(&FIVE_NON_TO_IND, &FIVE_IND_TO_NON));
        assert_identity(multiply(&FIVE_IND_TO_NON, &FIVE_NON_TO_IND));
    }

    #[test]
    fn test_round_trip_on_vectors() {
        let induced = [3.0, 0.0, 7.0, 2.0, 1.0, 0.0, 4.0, 9.0, 0.0, 5.0, 1.0];
        assert_eq!(four_non_to_induced(&four_induced_to_non(&induced)), induced);

        let three = [10.0, 4.0, 2.0, 1.0];
        assert_eq!(three_induced_to_non(&three_non_to_induced(&three)), three);
    }

    #[test]
    fn test_closed_form_matches_table() {
        // Non-induced counts of K4
        let non = [1.0, 6.0, 3.0, 12.0, 4.0, 4.0, 12.0, 12.0, 3.0, 6.0, 1.0];
        let full = four_non_to_induced(&non);
        assert_eq!(&full[5..], &four_connected_non_to_induced(&non)[..]);
        assert_eq!(full, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_try_apply_checks_length() {
        let err = try_apply(&THREE_NON_TO_IND, &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, CensusError::DimensionMismatch { expected: 4, actual: 2 }));
        assert_eq!(try_apply(&THREE_NON_TO_IND, &[1.0, 0.0, 0.0, 0.0]).unwrap(), [1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_closure_rows_sum_to_one_and_zero_rows_stay_zero() {
        // Non-induced counts of C4: only paths and the cycle are present
        let non = [1.0, 4.0, 2.0, 4.0, 0.0, 0.0, 4.0, 0.0, 1.0, 0.0, 0.0];
        let matrix = closure_matrix(&non);

        assert_eq!(matrix[1].iter().sum::<f64>(), 1.0);
        assert_eq!(matrix[1][3], 1.0);
        assert_eq!(matrix[3][3], 1.0);
        assert!(matrix[0].iter().all(|&x| x == 0.0));
        assert!(matrix.iter().flatten().all(|x| x.is_finite()));
    }
}
