//! The quadratic extension 𝔽ₚ² = 𝔽ₚ[u] / (u² + 1). Elements are `a₀ + a₁u`.
//!
//! The defining polynomial is fixed, which is why [`PrimeField`] insists on `p ≡ 3 (mod 4)`.
//! The sextic non-residue ξ and the Frobenius constants are not properties of this level,
//! they belong to the [`Tower`], so the two operations that need them take it as context.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{CurveField, FieldElement, FieldError, Fp, PrimeField};
use crate::fields::tower::Tower;
use crate::utils::div_rem_small;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{Uint, U256};

pub type Fp2 = FieldExtension<2, Fp>;

impl Fp2 {
    /// The conjugate `a₀ - a₁u`, which is also the Frobenius map `a ↦ aᵖ` at this level.
    pub fn conjugate<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Self::new([self.0[0], self.0[1].neg(ctx)])
    }

    /// Multiplies by the adjoined root `u`: `(a₀ + a₁u)u = -a₁ + a₀u`.
    pub fn mul_by_u<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Self::new([self.0[1].neg(ctx), self.0[0]])
    }

    /// Multiplies by the sextic non-residue ξ, which lifts an 𝔽ₚ² coefficient across the
    /// `v³ = ξ` reduction of the level above.
    pub fn mul_by_nonresidue<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let tower: &Tower = ctx.as_ref();
        self.mul(tower.nonresidue(), tower)
    }

    /// Multiplies by the cached Frobenius constant `γᵢ = ξ^(i(p-1)/6)`. The index is taken
    /// modulo six, the order of the constants.
    pub fn mul_by_frobenius<C: AsRef<Tower>>(&self, power: usize, ctx: &C) -> Self {
        let tower: &Tower = ctx.as_ref();
        self.mul(tower.frobenius_coefficient(power), tower)
    }

    /// Square-and-multiply exponentiation, scanning from the most significant bit.
    pub fn exp<const L: usize, C: AsRef<PrimeField>>(&self, exp: &Uint<L>, ctx: &C) -> Self {
        let mut res = Self::one(ctx);
        for i in (0..exp.bits_vartime()).rev() {
            res = res.square(ctx);
            if exp.bit_vartime(i) {
                res = res.mul(self, ctx);
            }
        }
        res
    }

    /// A square root, if one exists.
    ///
    /// Algorithm 9 of <https://eprint.iacr.org/2012/685.pdf>, which needs `p ≡ 3 (mod 4)`:
    /// with `a₁ = a^((p-3)/4)` and `α = a₁²a = a^((p-1)/2)`, `a` is a non-square exactly
    /// when `αᵖα = -1`.
    pub fn sqrt<C: AsRef<PrimeField>>(&self, ctx: &C) -> Option<Self> {
        let modulus = ctx.as_ref().modulus();
        let (p_minus_3_over_4, _) = div_rem_small(&modulus.wrapping_sub(&U256::from_u64(3)), 4)?;
        let (p_minus_1_over_2, _) = div_rem_small(&modulus.wrapping_sub(&U256::ONE), 2)?;
        let minus_one = Self::one(ctx).neg(ctx);

        let a1 = self.exp(&p_minus_3_over_4, ctx);
        let alpha = a1.mul(&a1.mul(self, ctx), ctx);
        if alpha.conjugate(ctx).mul(&alpha, ctx) == minus_one {
            return None;
        }
        let x0 = a1.mul(self, ctx);
        let root = match alpha == minus_one {
            true => x0.mul_by_u(ctx),
            false => alpha
                .add(&Self::one(ctx), ctx)
                .exp(&p_minus_1_over_2, ctx)
                .mul(&x0, ctx),
        };
        (root.square(ctx) == *self).then_some(root)
    }

    /// The norm `a₀² + a₁²` down to 𝔽ₚ.
    pub fn norm<C: AsRef<PrimeField>>(&self, ctx: &C) -> Fp {
        self.0[0].square(ctx).add(&self.0[1].square(ctx), ctx)
    }

    pub fn rand<R: CryptoRngCore, C: AsRef<PrimeField>>(rng: &mut R, ctx: &C) -> Self {
        let f = ctx.as_ref();
        Self::new([f.rand(rng), f.rand(rng)])
    }
}

impl CurveField for Fp2 {
    fn mul<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        // This requires a bit more consideration. In Fp2,
        // in order to multiply, we must implement complex Karatsuba
        // multiplication.
        // See https://eprint.iacr.org/2006/471.pdf, Sec 3
        // We create the addition chain from Algo 1 of https://eprint.iacr.org/2022/367.pdf
        let t0 = self.0[0].mul(&rhs.0[0], ctx);
        let t1 = self.0[1].mul(&rhs.0[1], ctx);
        let t2 = self.0[0].add(&self.0[1], ctx);
        let t3 = rhs.0[0].add(&rhs.0[1], ctx);
        // u² = -1, so the cross term folds back with a minus sign
        let c0 = t0.sub(&t1, ctx);
        let c1 = t2.mul(&t3, ctx).sub(&t0, ctx).sub(&t1, ctx);
        Self::new([c0, c1])
    }

    fn square<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        // complex squaring, (a₀ + a₁)(a₀ - a₁) + 2a₀a₁u
        let t0 = self.0[0].add(&self.0[1], ctx);
        let t1 = self.0[0].sub(&self.0[1], ctx);
        let c1 = self.0[0].mul(&self.0[1], ctx).double(ctx);
        Self::new([t0.mul(&t1, ctx), c1])
    }

    fn inv<C: AsRef<PrimeField>>(&self, ctx: &C) -> Result<Self, FieldError> {
        // (a₀ + a₁u)⁻¹ = (a₀ - a₁u) / (a₀² + a₁²)
        if self.is_zero() {
            return Err(FieldError::ZeroInversion);
        }
        let t = self.norm(ctx).inv(ctx)?;
        Ok(Self::new([
            self.0[0].mul(&t, ctx),
            self.0[1].mul(&t, ctx).neg(ctx),
        ]))
    }
}
