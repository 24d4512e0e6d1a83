//! The parameters that stack 𝔽ₚ⁶ and 𝔽ₚ¹² on top of 𝔽ₚ².
//!
//! The tower is
//!
//! ```text
//! 𝔽ₚ²  = 𝔽ₚ[u]  / (u² + 1)
//! 𝔽ₚ⁶  = 𝔽ₚ²[v] / (v³ - ξ)
//! 𝔽ₚ¹² = 𝔽ₚ⁶[w] / (w² - v)
//! ```
//!
//! so that `w⁶ = ξ`. Both upper steps need ξ to be neither a square nor a cube in 𝔽ₚ²,
//! and the Frobenius map on 𝔽ₚ¹² needs the constants `γᵢ = ξ^(i(p-1)/6)`. Rather than
//! hardcoding those for one curve, they are computed once here from the modulus and ξ.

use crate::fields::fp::{CurveField, FieldElement, FieldError, PrimeField};
use crate::fields::fp2::Fp2;
use crate::utils::div_rem_small;
use crypto_bigint::U256;

#[derive(Clone, Debug)]
pub struct Tower {
    field: PrimeField,
    nonresidue: Fp2,
    frobenius: [Fp2; 6],
}

impl Tower {
    /// Builds the tower over `field` with sextic non-residue `nonresidue`.
    ///
    /// Squareness and cubicity are decided on the norm, since for ξ ∈ 𝔽ₚ²
    /// `ξ^((p²-1)/k) = N(ξ)^((p-1)/k)` whenever `k | p - 1`, which avoids any arithmetic
    /// on `p²`.
    ///
    /// # Errors
    /// [`FieldError::InvalidModulus`] unless `p ≡ 1 (mod 6)`, and
    /// [`FieldError::InvalidNonResidue`] if ξ is zero, a square, or a cube.
    pub fn new(field: PrimeField, nonresidue: Fp2) -> Result<Self, FieldError> {
        let p_minus_one = field.modulus().wrapping_sub(&U256::ONE);
        let (sixth, rem) =
            div_rem_small(&p_minus_one, 6).ok_or(FieldError::InvalidModulus("p - 1"))?;
        if rem != 0 {
            return Err(FieldError::InvalidModulus("modulus must be 1 mod 6"));
        }
        if nonresidue.is_zero() {
            return Err(FieldError::InvalidNonResidue("non-residue is zero"));
        }
        let norm = nonresidue.norm(&field);
        if norm.is_square(&field) {
            return Err(FieldError::InvalidNonResidue("non-residue is a square"));
        }
        // (p - 1) / 3 = 2 (p - 1) / 6
        let third = sixth.wrapping_add(&sixth);
        if norm.pow(&third, &field) == field.one() {
            return Err(FieldError::InvalidNonResidue("non-residue is a cube"));
        }

        let gamma = nonresidue.exp(&sixth, &field);
        let mut frobenius = [Fp2::one(&field); 6];
        for i in 1..6 {
            frobenius[i] = frobenius[i - 1].mul(&gamma, &field);
        }
        tracing::debug!(?nonresidue, ?gamma, "Tower::new");
        Ok(Self {
            field,
            nonresidue,
            frobenius,
        })
    }

    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// ξ, the sextic non-residue
    pub fn nonresidue(&self) -> &Fp2 {
        &self.nonresidue
    }

    /// `γᵢ = ξ^(i(p-1)/6)`, with `i` taken modulo 6
    pub fn frobenius_coefficient(&self, power: usize) -> &Fp2 {
        &self.frobenius[power % 6]
    }
}

impl AsRef<PrimeField> for Tower {
    fn as_ref(&self) -> &PrimeField {
        &self.field
    }
}

impl AsRef<Tower> for Tower {
    fn as_ref(&self) -> &Tower {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(p: u64) -> PrimeField {
        PrimeField::new(U256::from_u64(p)).unwrap()
    }

    fn xi(f: &PrimeField, a: u64, b: u64) -> Fp2 {
        Fp2::new([f.from_u64(a), f.from_u64(b)])
    }

    #[test]
    fn test_rejects_modulus_not_one_mod_six() {
        // 23 = 5 mod 6
        let f = field(23);
        let nr = xi(&f, 1, 1);
        assert!(matches!(Tower::new(f, nr), Err(FieldError::InvalidModulus(_))));
    }

    #[test]
    fn test_rejects_bad_nonresidues() {
        // p = 19 is 3 mod 4 and 1 mod 6
        let f = field(19);
        assert!(matches!(
            Tower::new(f.clone(), Fp2::ZERO),
            Err(FieldError::InvalidNonResidue(_))
        ));
        // N(2 + u) = 5, which is a square mod 19 (9² = 81 = 5)
        assert!(matches!(
            Tower::new(f.clone(), xi(&f, 2, 1)),
            Err(FieldError::InvalidNonResidue(_))
        ));
        // N(1 + u) = 2, a non-square and a non-cube mod 19
        assert!(Tower::new(f.clone(), xi(&f, 1, 1)).is_ok());
    }

    #[test]
    fn test_frobenius_constants_are_powers() {
        let f = field(19);
        let nr = xi(&f, 1, 1);
        let t = Tower::new(f.clone(), nr).unwrap();
        // γ₁⁶ = ξ^(p-1)
        let g1 = *t.frobenius_coefficient(1);
        let mut acc = Fp2::one(&f);
        for _ in 0..6 {
            acc = acc.mul(&g1, &f);
        }
        assert_eq!(acc, nr.exp(&U256::from_u64(18), &f));
        assert_eq!(*t.frobenius_coefficient(0), Fp2::one(&f));
        assert_eq!(
            *t.frobenius_coefficient(2),
            g1.square(&f),
            "Constants are not consecutive powers"
        );
    }
}
