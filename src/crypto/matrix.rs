//! 2x2 matrix arithmetic modulo the alphabet size
//!
//! Entries are plain `i64`. Callers keep them small (the cipher reduces its
//! key into `[0, 26)`), so the unreduced products below cannot overflow.

use crate::codec::{CipherError, MODULUS, reduce};

pub type Matrix2 = [[i64; 2]; 2];
pub type Vector2 = [i64; 2];

/// Unreduced determinant, may be negative
pub fn determinant(m: &Matrix2) -> i64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Finds `x` in `[1, m)` with `(a mod m) * x ≡ 1 (mod m)`
///
/// Linear search; only sensible for a small modulus like 26.
///
/// # Arguments
/// * `a` - Value to invert, any sign
/// * `m` - Modulus, at least 2
///
/// # Returns
/// * `Ok(x)` with `x` in `[1, m)`
/// * `Err(CipherError::InvalidModulus)` if `m < 2`
/// * `Err(CipherError::NoInverseExists)` when `gcd(a mod m, m) != 1`
pub fn modular_inverse(a: i64, m: i64) -> Result<i64, CipherError> {
    if m < 2 {
        return Err(CipherError::InvalidModulus(m));
    }
    let a_mod = a.rem_euclid(m);
    (1..m)
        .find(|x| (a_mod * x) % m == 1)
        .ok_or(CipherError::NoInverseExists { value: a, modulus: m })
}

/// Inverse of `k` modulo `m`: the adjugate scaled by the inverse determinant
pub fn invert_mod(k: &Matrix2, m: i64) -> Result<Matrix2, CipherError> {
    let inv_det = modular_inverse(determinant(k), m)?;
    let entry = |x: i64| (x * inv_det).rem_euclid(m);
    Ok([
        [entry(k[1][1]), entry(-k[0][1])],
        [entry(-k[1][0]), entry(k[0][0])],
    ])
}

/// Checks whether `k` can be inverted modulo `m`
///
/// # Arguments
/// * `k` - Key matrix
/// * `m` - Modulus, normally `MODULUS`
///
/// # Returns
/// * `true` if `det(k)` is coprime with `m`, so decoding with `k` works
pub fn is_invertible(k: &Matrix2, m: i64) -> bool {
    modular_inverse(determinant(k), m).is_ok()
}

/// Matrix-vector product with each component reduced modulo 26
pub fn apply(k: &Matrix2, v: &Vector2) -> Vector2 {
    [
        reduce(k[0][0] * v[0] + k[0][1] * v[1]),
        reduce(k[1][0] * v[0] + k[1][1] * v[1]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: Matrix2 = [[3, 3], [2, 5]];
    const IDENTITY: Matrix2 = [[1, 0], [0, 1]];

    fn multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
        let mut out = [[0; 2]; 2];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = reduce(a[i][0] * b[0][j] + a[i][1] * b[1][j]);
            }
        }
        out
    }

    #[test]
    fn test_determinant() {
        assert_eq!(determinant(&KEY), 9);
        assert_eq!(determinant(&[[1, 2], [3, 4]]), -2);
    }

    #[test]
    fn test_modular_inverse() {
        assert_eq!(modular_inverse(3, 26), Ok(9));
        assert_eq!(modular_inverse(9, 26), Ok(3));
        assert_eq!(modular_inverse(1, 26), Ok(1));
        assert_eq!(modular_inverse(29, 26), Ok(9));
        // -1 ≡ 25, and 25 * 25 = 625 = 24 * 26 + 1
        assert_eq!(modular_inverse(-1, 26), Ok(25));
    }

    #[test]
    fn test_modular_inverse_missing() {
        assert_eq!(
            modular_inverse(2, 26),
            Err(CipherError::NoInverseExists { value: 2, modulus: 26 })
        );
        assert!(modular_inverse(13, 26).is_err());
        assert!(modular_inverse(0, 26).is_err());
    }

    #[test]
    fn test_modular_inverse_bad_modulus() {
        assert_eq!(modular_inverse(3, 0), Err(CipherError::InvalidModulus(0)));
        assert_eq!(modular_inverse(3, 1), Err(CipherError::InvalidModulus(1)));
        assert_eq!(modular_inverse(3, -26), Err(CipherError::InvalidModulus(-26)));
        assert!(!is_invertible(&KEY, 0));
    }

    #[test]
    fn test_invert_mod() {
        let inv = invert_mod(&KEY, MODULUS).unwrap();
        assert_eq!(inv, [[15, 17], [20, 9]]);
        assert_eq!(multiply(&KEY, &inv), IDENTITY);
        assert_eq!(multiply(&inv, &KEY), IDENTITY);
    }

    #[test]
    fn test_invert_mod_negative_determinant() {
        // det = 7*3 - 8*10 = -59 ≡ 19 (mod 26)
        let key = [[7, 8], [10, 3]];
        let inv = invert_mod(&key, MODULUS).unwrap();
        assert!(inv.iter().flatten().all(|x| (0..MODULUS).contains(x)));
        assert_eq!(multiply(&key, &inv), IDENTITY);
    }

    #[test]
    fn test_invert_mod_singular() {
        let key = [[2, 4], [1, 3]];
        assert_eq!(
            invert_mod(&key, MODULUS),
            Err(CipherError::NoInverseExists { value: 2, modulus: 26 })
        );
        assert!(!is_invertible(&key, MODULUS));
        assert!(is_invertible(&KEY, MODULUS));
    }

    #[test]
    fn test_apply() {
        assert_eq!(apply(&KEY, &[7, 8]), [19, 2]);
        let inv = invert_mod(&KEY, MODULUS).unwrap();
        assert_eq!(apply(&inv, &[19, 2]), [7, 8]);
    }
}
