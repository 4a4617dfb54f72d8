//! The 13-point discrete Laplacian.
//!
//! The kernel is a 7×7 grid with 13 non-zero weights: reach-3 arms
//! along each axis weighted `1.0`, `0.25`, `0.125` from the center
//! outward, and center weight `-5.5`. The weights sum to zero
//! (`4·1 + 4·0.25 + 4·0.125 − 5.5 = 0`), so a uniform field has zero
//! Laplacian away from edges.
//!
//! Cells outside the slab contribute zero (implicit zero padding). For
//! a partitioned run the halo rows must already hold the peer's
//! current boundary when this is called, so that cells near the
//! partition edge see real neighbour data rather than padding.

/// Non-zero kernel entries as `(row offset, col offset, weight)`.
const STENCIL: [(isize, isize, f32); 13] = [
    (-3, 0, 0.125),
    (-2, 0, 0.25),
    (-1, 0, 1.0),
    (0, -3, 0.125),
    (0, -2, 0.25),
    (0, -1, 1.0),
    (0, 0, -5.5),
    (0, 1, 1.0),
    (0, 2, 0.25),
    (0, 3, 0.125),
    (1, 0, 1.0),
    (2, 0, 0.25),
    (3, 0, 0.125),
];

/// Evaluate the Laplacian of a `rows × cols` row-major slab into `out`.
///
/// Pure function of its input: O(rows·cols) time, no allocation, no
/// other side effects. `out` must be the same shape as `input`.
pub fn laplacian(input: &[f32], rows: usize, cols: usize, out: &mut [f32]) {
    debug_assert_eq!(input.len(), rows * cols);
    debug_assert_eq!(out.len(), rows * cols);

    for r in 0..rows {
        for c in 0..cols {
            let mut acc = 0.0f32;
            for (dr, dc, w) in STENCIL {
                let nr = r as isize + dr;
                let nc = c as isize + dc;
                if nr >= 0 && nr < rows as isize && nc >= 0 && nc < cols as isize {
                    acc += w * input[nr as usize * cols + nc as usize];
                }
            }
            out[r * cols + c] = acc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn laplacian_of(input: &[f32], rows: usize, cols: usize) -> Vec<f32> {
        let mut out = vec![0.0; rows * cols];
        laplacian(input, rows, cols, &mut out);
        out
    }

    #[test]
    fn zero_field_has_zero_laplacian() {
        let input = vec![0.0f32; 10 * 10];
        let out = laplacian_of(&input, 10, 10);
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn uniform_interior_is_zero() {
        // Weights sum to zero, so cells at least 3 away from every
        // edge see the constant exactly cancelled. v = 2.0 keeps every
        // product and partial sum exact in f32.
        let (rows, cols) = (9, 9);
        let input = vec![2.0f32; rows * cols];
        let out = laplacian_of(&input, rows, cols);
        assert_eq!(out[4 * cols + 4], 0.0);

        // A non-dyadic value cancels to within rounding.
        let input = vec![0.3f32; rows * cols];
        let out = laplacian_of(&input, rows, cols);
        assert!(out[4 * cols + 4].abs() < 1e-6);
    }

    #[test]
    fn impulse_response_matches_kernel_weights() {
        let (rows, cols) = (9, 9);
        let mut input = vec![0.0f32; rows * cols];
        input[4 * cols + 4] = 1.0;
        let out = laplacian_of(&input, rows, cols);

        let at = |r: usize, c: usize| out[r * cols + c];
        assert_eq!(at(4, 4), -5.5);
        for (near, mid, far) in [((3, 4), (2, 4), (1, 4)), ((4, 5), (4, 6), (4, 7))] {
            assert_eq!(at(near.0, near.1), 1.0);
            assert_eq!(at(mid.0, mid.1), 0.25);
            assert_eq!(at(far.0, far.1), 0.125);
        }
        // Diagonals carry no weight.
        assert_eq!(at(3, 3), 0.0);
        assert_eq!(at(5, 5), 0.0);
    }

    #[test]
    fn edges_are_zero_padded() {
        // An impulse in the corner: out-of-bounds arms contribute
        // nothing, in-bounds arms keep their weights.
        let (rows, cols) = (6, 6);
        let mut input = vec![0.0f32; rows * cols];
        input[0] = 1.0;
        let out = laplacian_of(&input, rows, cols);
        assert_eq!(out[0], -5.5);
        assert_eq!(out[1], 1.0);
        assert_eq!(out[3], 0.125);
        assert_eq!(out[3 * cols], 0.125);
    }

    proptest! {
        #[test]
        fn zero_field_fixed_point_any_shape(rows in 1usize..24, cols in 1usize..24) {
            let input = vec![0.0f32; rows * cols];
            let out = laplacian_of(&input, rows, cols);
            prop_assert!(out.iter().all(|&v| v == 0.0));
        }

        // The operator is linear: L(a·x) == a·L(x) for dyadic a.
        #[test]
        fn scaling_commutes(seed in proptest::collection::vec(-8i8..8, 36)) {
            let input: Vec<f32> = seed.iter().map(|&v| v as f32).collect();
            let scaled: Vec<f32> = input.iter().map(|&v| 4.0 * v).collect();
            let base = laplacian_of(&input, 6, 6);
            let out = laplacian_of(&scaled, 6, 6);
            for (b, o) in base.iter().zip(&out) {
                prop_assert_eq!(4.0 * b, *o);
            }
        }
    }
}
