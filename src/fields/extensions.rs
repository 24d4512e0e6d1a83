//! The coefficient vector shared by every level of the tower. An element of a degree-`N`
//! extension over `F` is `N` coefficients over `F`, and the additive structure works
//! coefficient-wise regardless of the defining polynomial. Multiplication, squaring and
//! inversion depend on the polynomial, so each level supplies its own.

use crate::fields::fp::{CurveField, FieldElement, PrimeField};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// `N` coefficients over `F`, held by value, so a whole tower element is one flat
/// block of limbs with no indirection.
#[derive(Copy, Clone, Debug)]
pub struct FieldExtension<const N: usize, F: FieldElement>(pub(crate) [F; N]);

impl<const N: usize, F: FieldElement> FieldExtension<N, F> {
    pub const fn new(c: [F; N]) -> Self {
        Self(c)
    }

    /// The coefficients, lowest power first.
    pub fn coefficients(&self) -> &[F; N] {
        &self.0
    }
}

impl<const N: usize, F: CurveField> FieldExtension<N, F> {
    /// Multiplies every coefficient by an element of the base of this extension.
    pub fn scale<C: AsRef<PrimeField>>(&self, factor: &F, ctx: &C) -> Self {
        Self(std::array::from_fn(|i| self.0[i].mul(factor, ctx)))
    }
}

impl<const N: usize, F: FieldElement> FieldElement for FieldExtension<N, F> {
    const ZERO: Self = Self([F::ZERO; N]);

    fn one<C: AsRef<PrimeField>>(ctx: &C) -> Self {
        let mut retval = [F::ZERO; N];
        retval[0] = F::one(ctx);
        Self(retval)
    }

    fn is_zero(&self) -> bool {
        self.0.iter().all(|c| c.is_zero())
    }

    fn add<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        Self(std::array::from_fn(|i| self.0[i].add(&rhs.0[i], ctx)))
    }

    fn sub<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        Self(std::array::from_fn(|i| self.0[i].sub(&rhs.0[i], ctx)))
    }

    fn neg<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Self(std::array::from_fn(|i| self.0[i].neg(ctx)))
    }

    fn double<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Self(std::array::from_fn(|i| self.0[i].double(ctx)))
    }
}

impl<const N: usize, F: FieldElement> ConstantTimeEq for FieldExtension<N, F> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0
            .iter()
            .zip(&other.0)
            .fold(Choice::from(1u8), |acc, (a, b)| acc & a.ct_eq(b))
    }
}

impl<const N: usize, F: FieldElement> ConditionallySelectable for FieldExtension<N, F> {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(std::array::from_fn(|i| {
            F::conditional_select(&a.0[i], &b.0[i], choice)
        }))
    }
}

impl<const N: usize, F: FieldElement> PartialEq for FieldExtension<N, F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl<const N: usize, F: FieldElement> Eq for FieldExtension<N, F> {}

impl<const N: usize, F: FieldElement> Default for FieldExtension<N, F> {
    fn default() -> Self {
        Self::ZERO
    }
}
