//! 𝔾ₜ, the multiplicative target group. Elements are stored as 𝔽ₚ¹² values in the
//! cyclotomic subgroup, and only the group operations are exposed, so there is no way to
//! add two pairing outputs by accident. Group inversion is conjugation, and squaring
//! uses the cyclotomic formula.

use crate::fields::fp::FieldElement;
use crate::fields::fp12::Fp12;
use crate::fields::tower::Tower;
use crate::groups::group::GroupError;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::Uint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

#[derive(Copy, Clone, Debug)]
pub struct Gt(pub(crate) Fp12);

impl Gt {
    pub fn identity<C: AsRef<Tower>>(ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        Self(Fp12::one(t))
    }

    /// Wraps an 𝔽ₚ¹² value after checking it lies in the cyclotomic subgroup.
    pub fn from_fp12<C: AsRef<Tower>>(value: Fp12, ctx: &C) -> Result<Self, GroupError> {
        match value.is_cyclotomic(ctx) {
            true => Ok(Self(value)),
            false => Err(GroupError::NotCyclotomic),
        }
    }

    pub fn inner(&self) -> &Fp12 {
        &self.0
    }

    pub fn is_identity<C: AsRef<Tower>>(&self, ctx: &C) -> bool {
        self.0.is_one(ctx)
    }

    pub fn mul<C: AsRef<Tower>>(&self, rhs: &Self, ctx: &C) -> Self {
        Self(self.0.mul(&rhs.0, ctx))
    }

    pub fn square<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        Self(self.0.cyclotomic_square(ctx))
    }

    pub fn inverse<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        Self(self.0.conjugate(ctx))
    }

    pub fn exp<const L: usize, C: AsRef<Tower>>(&self, exp: &Uint<L>, ctx: &C) -> Self {
        Self(self.0.exp_cyc(exp, ctx))
    }

    /// Exponentiation through the compressed representation.
    pub fn exp_packed<const L: usize, C: AsRef<Tower>>(
        &self,
        exp: &Uint<L>,
        ctx: &C,
    ) -> Result<Self, GroupError> {
        Ok(Self(self.0.exp_pck(exp, ctx)?))
    }

    /// A random element, obtained by projecting a random 𝔽ₚ¹² value into the
    /// cyclotomic subgroup.
    pub fn rand<R: CryptoRngCore, C: AsRef<Tower>>(rng: &mut R, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        loop {
            // only the zero element fails to project
            if let Ok(f) = Fp12::rand(rng, t).to_cyclotomic(t) {
                return Self(f);
            }
        }
    }
}

impl ConstantTimeEq for Gt {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl ConditionallySelectable for Gt {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Fp12::conditional_select(&a.0, &b.0, choice))
    }
}

impl PartialEq for Gt {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Gt {}
