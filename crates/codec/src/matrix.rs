// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{CodecError, CodecResult};
use grs_field::Field;

/// Dense row-major matrix over a field.
pub type Matrix<E> = Vec<Vec<E>>;

fn check_dimension(n: usize, k: usize) -> CodecResult<()> {
    if k == 0 || k > n {
        return Err(CodecError::InvalidDimension { n, k });
    }
    Ok(())
}

/// Build the generator matrix G of size k × n
/// G[j][i] = α_i^j
/// Row j holds the evaluations of x^j, so `message · G` is the codeword
pub fn generator_matrix<F: Field>(
    field: &F,
    alphas: &[F::Elem],
    k: usize,
) -> CodecResult<Matrix<F::Elem>> {
    check_dimension(alphas.len(), k)?;

    let mut g = vec![alphas.iter().map(|_| field.one()).collect::<Vec<_>>()];
    for j in 1..k {
        let row = g[j - 1]
            .iter()
            .zip(alphas)
            .map(|(prev, alpha)| field.mul(prev, alpha))
            .collect();
        g.push(row);
    }

    Ok(g)
}

/// Build the parity-check matrix H of size (n−k) × n
/// H[j][i] = w_i · α_i^j
/// Row j dotted with the received word is the syndrome S_j
pub fn parity_check_matrix<F: Field>(
    field: &F,
    alphas: &[F::Elem],
    weights: &[F::Elem],
    k: usize,
) -> CodecResult<Matrix<F::Elem>> {
    let n = alphas.len();
    check_dimension(n, k)?;
    if weights.len() != n {
        return Err(CodecError::length_mismatch("weights", n, weights.len()));
    }

    let mut h: Matrix<F::Elem> = Vec::with_capacity(n - k);
    let mut row = weights.to_vec();
    for _ in 0..n - k {
        let next = row
            .iter()
            .zip(alphas)
            .map(|(cell, alpha)| field.mul(cell, alpha))
            .collect();
        h.push(std::mem::replace(&mut row, next));
    }

    Ok(h)
}

/// Compute M · v
pub fn mat_vec<F: Field>(
    field: &F,
    matrix: &[Vec<F::Elem>],
    v: &[F::Elem],
) -> CodecResult<Vec<F::Elem>> {
    matrix
        .iter()
        .map(|row| {
            if row.len() != v.len() {
                return Err(CodecError::length_mismatch("matrix row", v.len(), row.len()));
            }
            Ok(row
                .iter()
                .zip(v)
                .fold(field.zero(), |acc, (m, x)| field.add(&acc, &field.mul(m, x))))
        })
        .collect()
}

/// Compute the null space of a matrix using Gaussian elimination
/// Returns a basis for the right null space {v : M · v = 0} (each vector is a row)
pub fn null_space<F: Field>(field: &F, matrix: &[Vec<F::Elem>]) -> CodecResult<Matrix<F::Elem>> {
    if matrix.is_empty() {
        return Ok(vec![]);
    }

    let rows = matrix.len();
    let cols = matrix[0].len();
    if let Some(row) = matrix.iter().find(|row| row.len() != cols) {
        return Err(CodecError::length_mismatch("matrix row", cols, row.len()));
    }

    // Row-reduce [M^T | I]; a row whose left part vanishes carries, in its
    // right part, a combination of the columns of M that sums to zero
    let mut aug: Matrix<F::Elem> = vec![vec![field.zero(); rows + cols]; cols];
    for (i, aug_row) in aug.iter_mut().enumerate() {
        for (j, aug_cell) in aug_row.iter_mut().enumerate().take(rows) {
            *aug_cell = matrix[j][i].clone();
        }
        aug_row[rows + i] = field.one();
    }

    let mut pivot_row = 0;

    for col in 0..rows {
        let Some(found) = (pivot_row..cols).find(|&row| !field.is_zero(&aug[row][col])) else {
            continue;
        };
        aug.swap(pivot_row, found);

        // Make pivot = 1
        let inv = field.inverse(&aug[pivot_row][col])?;
        for cell in aug[pivot_row].iter_mut() {
            *cell = field.mul(cell, &inv);
        }

        // Eliminate other entries in this column
        let pivot = aug[pivot_row].clone();
        for (row, aug_row) in aug.iter_mut().enumerate() {
            if row == pivot_row || field.is_zero(&aug_row[col]) {
                continue;
            }
            let factor = aug_row[col].clone();
            for (cell, p) in aug_row.iter_mut().zip(&pivot) {
                *cell = field.sub(cell, &field.mul(&factor, p));
            }
        }

        pivot_row += 1;
        if pivot_row >= cols {
            break;
        }
    }

    let null_basis = aug
        .into_iter()
        .filter(|row| row[..rows].iter().all(|x| field.is_zero(x)))
        .map(|row| row[rows..].to_vec())
        .filter(|v| v.iter().any(|x| !field.is_zero(x)))
        .collect();

    Ok(null_basis)
}

/// Verify that H · G^T = 0
pub fn verify_parity<F: Field>(
    field: &F,
    g: &[Vec<F::Elem>],
    h: &[Vec<F::Elem>],
) -> CodecResult<()> {
    for (i, h_row) in h.iter().enumerate() {
        for (j, g_row) in g.iter().enumerate() {
            if h_row.len() != g_row.len() {
                return Err(CodecError::length_mismatch(
                    "parity-check row",
                    g_row.len(),
                    h_row.len(),
                ));
            }
            let sum = h_row
                .iter()
                .zip(g_row)
                .fold(field.zero(), |acc, (a, b)| field.add(&acc, &field.mul(a, b)));
            if !field.is_zero(&sum) {
                return Err(CodecError::verification(format!(
                    "H · G^T ≠ 0: entry at position ({}, {}) is {}",
                    i, j, sum
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syndrome::{syndromes, weights};
    use grs_field::{BinaryField, PrimeField};
    use grs_polynomial::Polynomial;
    use num_bigint::BigUint;

    fn elems(field: &PrimeField, values: &[u64]) -> Vec<BigUint> {
        values.iter().map(|&v| field.element(v)).collect()
    }

    /// Check H · G^T = 0, the dimensions, and that codewords have zero syndrome
    fn check_matrices_for_params(q: u64, n: usize, k: usize) {
        let field = PrimeField::from_u64(q).unwrap();
        let alphas: Vec<BigUint> = (1..=n as u64).map(|i| field.element(i)).collect();
        let w = weights(&field, &alphas).unwrap();

        let g = generator_matrix(&field, &alphas, k).unwrap();
        let h = parity_check_matrix(&field, &alphas, &w, k).unwrap();

        assert_eq!(g.len(), k, "G should have k rows");
        assert_eq!(g[0].len(), n, "G should have n columns");
        assert_eq!(h.len(), n - k, "H should have n-k rows");
        verify_parity(&field, &g, &h).unwrap();

        let message: Vec<BigUint> = (0..k as u64).map(|i| field.element(i * 7 + 1)).collect();
        let codeword = Polynomial::new(message).evaluate_many(&field, &alphas);
        let product = mat_vec(&field, &h, &codeword).unwrap();
        assert!(product.iter().all(|x| field.is_zero(x)), "q={}, n={}, k={}", q, n, k);
    }

    #[test]
    fn test_q7_n5_k3() {
        check_matrices_for_params(7, 5, 3);
    }

    #[test]
    fn test_q13_n12_k1() {
        check_matrices_for_params(13, 12, 1);
    }

    #[test]
    fn test_q31_n10_k4() {
        check_matrices_for_params(31, 10, 4);
    }

    #[test]
    fn test_q101_n20_k20() {
        check_matrices_for_params(101, 20, 20);
    }

    #[test]
    fn test_generator_rows_are_powers() {
        let field = PrimeField::from_u64(31).unwrap();
        let alphas = elems(&field, &[2, 3, 5]);
        let g = generator_matrix(&field, &alphas, 3).unwrap();
        assert_eq!(g[0], elems(&field, &[1, 1, 1]));
        assert_eq!(g[1], elems(&field, &[2, 3, 5]));
        assert_eq!(g[2], elems(&field, &[4, 9, 25]));
    }

    #[test]
    fn test_parity_rows_give_syndromes() {
        let field = PrimeField::from_u64(31).unwrap();
        let alphas: Vec<BigUint> = (1..=10).map(|i| field.element(i)).collect();
        let w = weights(&field, &alphas).unwrap();
        let h = parity_check_matrix(&field, &alphas, &w, 4).unwrap();
        let received = elems(&field, &[3, 1, 4, 1, 5, 9, 2, 6, 5, 3]);

        let expected = syndromes(&field, &received, &alphas, &w, 6).unwrap();
        assert_eq!(mat_vec(&field, &h, &received).unwrap(), expected);
    }

    #[test]
    fn test_null_space_of_generator_is_parity_space() {
        let field = BinaryField::with_default_modulus(6).unwrap();
        let alphas: Vec<u32> = (1..=15).collect();
        let g = generator_matrix(&field, &alphas, 7).unwrap();

        let basis = null_space(&field, &g).unwrap();
        assert_eq!(basis.len(), 8);
        verify_parity(&field, &g, &basis).unwrap();
    }

    #[test]
    fn test_null_space_full_rank_is_empty() {
        let field = PrimeField::from_u64(31).unwrap();
        let m = vec![elems(&field, &[1, 0]), elems(&field, &[0, 1])];
        assert!(null_space(&field, &m).unwrap().is_empty());
        assert!(null_space::<PrimeField>(&field, &[]).unwrap().is_empty());
    }

    #[test]
    fn test_null_space_simple() {
        let field = PrimeField::from_u64(31).unwrap();
        // x + y + z = 0 has a two-dimensional solution space
        let m = vec![elems(&field, &[1, 1, 1])];
        let basis = null_space(&field, &m).unwrap();
        assert_eq!(basis.len(), 2);
        for v in &basis {
            assert!(field.is_zero(&mat_vec(&field, &m, v).unwrap()[0]));
        }
    }

    #[test]
    fn test_verify_parity_reports_entry() {
        let field = PrimeField::from_u64(31).unwrap();
        let g = vec![elems(&field, &[1, 1])];
        let h = vec![elems(&field, &[1, 0])];
        assert_eq!(
            verify_parity(&field, &g, &h),
            Err(CodecError::verification(
                "H · G^T ≠ 0: entry at position (0, 0) is 1"
            ))
        );
    }

    #[test]
    fn test_matrix_dimension_checks() {
        let field = PrimeField::from_u64(31).unwrap();
        let alphas = elems(&field, &[1, 2, 3]);
        assert_eq!(
            generator_matrix(&field, &alphas, 4),
            Err(CodecError::InvalidDimension { n: 3, k: 4 })
        );
        assert_eq!(
            parity_check_matrix(&field, &alphas, &alphas[..2], 1),
            Err(CodecError::length_mismatch("weights", 3, 2))
        );
    }
}
