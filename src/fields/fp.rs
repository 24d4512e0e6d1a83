//! This module implements the base prime field that the whole tower is built on.
//!
//! Unlike a curve-specific implementation, the modulus here is not baked in at compile
//! time: a [`PrimeField`] is constructed at runtime from any odd prime `p ≡ 3 (mod 4)`,
//! and every operation on an [`Fp`] receives the field it lives in as an explicit context
//! argument. This is what lets the same tower code run over the 254-bit BN modulus and over
//! toy moduli such as `p = 23` in tests.
//!
//! 1. Montgomery arithmetic:
//!     elements are stored in Montgomery form and all multiplications
//!     are carried out with Montgomery reduction through `crypto_bigint`'s
//!     `MontyForm`. Values are always fully reduced, so the representation
//!     is unique and equality can be checked on the raw limbs.
//! 2. Context passing:
//!     the modulus, the Montgomery parameters and the cached "one" live in
//!     the [`PrimeField`]. Any type that implements `AsRef<PrimeField>`
//!     (the tower, the pairing group) can be handed to an operation in its place.
//!
//! References
//! ----------
//! 1. <https://cacr.uwaterloo.ca/hac/about/chap14.pdf>

use crypto_bigint::modular::{MontyForm, MontyParams};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{NonZero, Odd, RandomMod, Uint, U256};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};
use thiserror::Error;

use crate::utils::div_rem_small;

type Monty = MontyForm<{ U256::LIMBS }>;

/// Failures of the field tower.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The zero element has no multiplicative inverse
    #[error("attempted to invert zero")]
    ZeroInversion,
    /// A batch inversion received a zero element at the given position
    #[error("batch inversion input {0} is zero")]
    ZeroInBatch(usize),
    /// A packed cyclotomic element at the given position cannot be decompressed
    #[error("packed element {0} does not satisfy the decompression precondition")]
    DegenerateCompression(usize),
    /// The modulus cannot carry the tower
    #[error("invalid modulus: {0}")]
    InvalidModulus(&'static str),
    /// The chosen non-residue does not define the sextic extension
    #[error("invalid non-residue: {0}")]
    InvalidNonResidue(&'static str),
    /// A textual encoding of a number could not be parsed
    #[error("invalid numeric encoding")]
    InvalidEncoding,
}

/// The arithmetic every level of the tower shares: the additive group and the unit.
///
/// Operations take the field context as their final argument. Anything that can lend out
/// a [`PrimeField`] works, which is why the context is generic over `AsRef<PrimeField>`.
pub trait FieldElement:
    Sized + Copy + Clone + std::fmt::Debug + Default + PartialEq + ConstantTimeEq + ConditionallySelectable
{
    /// The additive identity
    const ZERO: Self;

    /// The multiplicative identity, which depends on the Montgomery parameters
    fn one<C: AsRef<PrimeField>>(ctx: &C) -> Self;

    fn is_zero(&self) -> bool;

    fn add<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self;

    fn sub<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self;

    fn neg<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self;

    fn double<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        self.add(self, ctx)
    }
}

/// Fields that elliptic curves in this crate are defined over, namely 𝔽ₚ for 𝔾₁ and 𝔽ₚ²
/// for 𝔾₂. Their multiplication needs nothing beyond the prime field.
pub trait CurveField: FieldElement {
    fn mul<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self;

    fn square<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self;

    fn inv<C: AsRef<PrimeField>>(&self, ctx: &C) -> Result<Self, FieldError>;

    /// Inverts every element of `elems` with a single field inversion.
    ///
    /// This is Montgomery's trick: the running products `a₀, a₀a₁, …, a₀⋯aₙ₋₁` are stored,
    /// the last one is inverted, and the individual inverses are peeled off walking backwards,
    /// at the cost of three multiplications per element.
    ///
    /// # Errors
    /// The whole batch is rejected with [`FieldError::ZeroInBatch`] naming the first zero
    /// element, since a zero poisons every running product after it.
    fn batch_invert<C: AsRef<PrimeField>>(elems: &[Self], ctx: &C) -> Result<Vec<Self>, FieldError> {
        if let Some(index) = elems.iter().position(|e| e.is_zero()) {
            tracing::trace!(index, len = elems.len(), "CurveField::batch_invert rejected");
            return Err(FieldError::ZeroInBatch(index));
        }
        let Some(first) = elems.first() else {
            return Ok(Vec::new());
        };
        let mut prefix = Vec::with_capacity(elems.len());
        let mut acc = *first;
        prefix.push(acc);
        for e in &elems[1..] {
            acc = acc.mul(e, ctx);
            prefix.push(acc);
        }
        let mut inv = acc.inv(ctx)?;
        let mut out = vec![Self::ZERO; elems.len()];
        for i in (1..elems.len()).rev() {
            out[i] = inv.mul(&prefix[i - 1], ctx);
            inv = inv.mul(&elems[i], ctx);
        }
        out[0] = inv;
        Ok(out)
    }
}

/// The runtime description of a prime field 𝔽ₚ.
#[derive(Clone, Debug)]
pub struct PrimeField {
    modulus: NonZero<U256>,
    params: MontyParams<{ U256::LIMBS }>,
    one: Fp,
    // (p - 1) / 2
    half: U256,
}

impl PrimeField {
    /// Builds the field for `modulus`.
    ///
    /// The quadratic extension above this field is defined by `u² = -1`, which is only an
    /// irreducible polynomial when `-1` is a non-square, i.e. when `p ≡ 3 (mod 4)`.
    ///
    /// # Errors
    /// [`FieldError::InvalidModulus`] for even moduli, moduli below 5, and moduli with
    /// `p ≢ 3 (mod 4)`. Primality itself is not checked.
    pub fn new(modulus: U256) -> Result<Self, FieldError> {
        let odd: Option<Odd<U256>> = Odd::new(modulus).into();
        let odd = odd.ok_or(FieldError::InvalidModulus("modulus must be odd"))?;
        if modulus < U256::from_u64(5) {
            return Err(FieldError::InvalidModulus("modulus is too small"));
        }
        if modulus.as_words()[0] & 3 != 3 {
            return Err(FieldError::InvalidModulus("modulus must be 3 mod 4"));
        }
        let nz: Option<NonZero<U256>> = NonZero::new(modulus).into();
        let nz = nz.ok_or(FieldError::InvalidModulus("modulus must be non-zero"))?;
        let (half, _) = div_rem_small(&modulus.wrapping_sub(&U256::ONE), 2)
            .ok_or(FieldError::InvalidModulus("modulus must be non-zero"))?;
        let params = MontyParams::new(odd);
        let one = Fp(Monty::one(params).to_montgomery());
        tracing::debug!(?modulus, "PrimeField::new");
        Ok(Self {
            modulus: nz,
            params,
            one,
            half,
        })
    }

    pub fn modulus(&self) -> &U256 {
        &self.modulus
    }

    pub fn one(&self) -> Fp {
        self.one
    }

    /// Maps an integer into the field, reducing it modulo `p`.
    pub fn from_uint(&self, value: &U256) -> Fp {
        Fp(Monty::new(value, self.params).to_montgomery())
    }

    pub fn from_u64(&self, value: u64) -> Fp {
        self.from_uint(&U256::from_u64(value))
    }

    /// Parses a base-10 string into the field, reducing modulo `p` as it goes.
    ///
    /// # Errors
    /// [`FieldError::InvalidEncoding`] on an empty string or any non-digit character.
    pub fn from_dec_str(&self, value: &str) -> Result<Fp, FieldError> {
        if value.is_empty() {
            return Err(FieldError::InvalidEncoding);
        }
        let ten = self.from_u64(10);
        let mut res = Fp::ZERO;
        for c in value.chars() {
            match c.to_digit(10) {
                Some(d) => {
                    res = res.mul(&ten, self).add(&self.from_u64(d as u64), self);
                }
                None => return Err(FieldError::InvalidEncoding),
            }
        }
        Ok(res)
    }

    /// Takes an element out of Montgomery form.
    pub fn to_uint(&self, value: &Fp) -> U256 {
        self.lift(value).retrieve()
    }

    /// Samples a uniformly random element.
    pub fn rand<R: CryptoRngCore>(&self, rng: &mut R) -> Fp {
        self.from_uint(&U256::random_mod(rng, &self.modulus))
    }

    #[inline]
    fn lift(&self, value: &Fp) -> Monty {
        Monty::from_montgomery(value.0, self.params)
    }

    #[inline]
    fn lower(&self, value: Monty) -> Fp {
        Fp(value.to_montgomery())
    }
}

impl AsRef<PrimeField> for PrimeField {
    fn as_ref(&self) -> &PrimeField {
        self
    }
}

/// An element of 𝔽ₚ in Montgomery form. Only meaningful together with the
/// [`PrimeField`] it was created by.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fp(pub(crate) U256);

impl Fp {
    pub const ZERO: Self = Self(U256::ZERO);

    pub fn mul<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(f.lift(self) * f.lift(rhs))
    }

    pub fn square<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(f.lift(self).square())
    }

    /// Inversion by Fermat's little theorem, `a⁻¹ = a^(p-2)`.
    pub fn inv<C: AsRef<PrimeField>>(&self, ctx: &C) -> Result<Self, FieldError> {
        if self.is_zero() {
            return Err(FieldError::ZeroInversion);
        }
        let f = ctx.as_ref();
        let exp = f.modulus.wrapping_sub(&U256::from_u64(2));
        Ok(self.pow(&exp, ctx))
    }

    pub fn pow<const L: usize, C: AsRef<PrimeField>>(&self, exp: &Uint<L>, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(f.lift(self).pow(exp))
    }

    /// Euler's criterion. Zero counts as a square.
    pub fn is_square<C: AsRef<PrimeField>>(&self, ctx: &C) -> bool {
        let f = ctx.as_ref();
        let legendre = self.pow(&f.half, ctx);
        self.is_zero() || legendre == f.one
    }
}

impl FieldElement for Fp {
    const ZERO: Self = Fp::ZERO;

    fn one<C: AsRef<PrimeField>>(ctx: &C) -> Self {
        ctx.as_ref().one
    }

    fn is_zero(&self) -> bool {
        bool::from(self.0.ct_eq(&U256::ZERO))
    }

    fn add<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(f.lift(self) + f.lift(rhs))
    }

    fn sub<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(f.lift(self) - f.lift(rhs))
    }

    fn neg<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        let f = ctx.as_ref();
        f.lower(-f.lift(self))
    }
}

impl CurveField for Fp {
    fn mul<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        Fp::mul(self, rhs, ctx)
    }
    fn square<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Fp::square(self, ctx)
    }
    fn inv<C: AsRef<PrimeField>>(&self, ctx: &C) -> Result<Self, FieldError> {
        Fp::inv(self, ctx)
    }
}

impl ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl PartialEq for Fp {
    fn eq(&self, other: &Self) -> bool {
        bool::from(self.ct_eq(other))
    }
}

impl Eq for Fp {}

impl ConditionallySelectable for Fp {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U256::conditional_select(&a.0, &b.0, choice))
    }
}
