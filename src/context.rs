//! The pairing group context: everything the tower and the groups need to know about a
//! curve, built once and then shared read-only.
//!
//! The context is assembled bottom-up from a [`CurveParams`] description. The prime field
//! comes first, then the tower over it (which derives the Frobenius constants from ξ), then
//! the curve coefficients and the generators, which are validated against their curves.
//! The 𝔾₂ precomputed table is optional and is built on request, since it costs a few
//! hundred point operations.

use crate::fields::fp::{CurveField, Fp, FieldError, PrimeField};
use crate::fields::fp2::Fp2;
use crate::fields::tower::Tower;
use crate::groups::g1::G1;
use crate::groups::g2::G2;
use crate::groups::group::{GroupError, GroupProjective};
use crate::groups::precomp::{PrecomputedTable, DEFAULT_BLOCK_SIZE, DEFAULT_WINDOW};
use crate::utils::{parse_hex_u256, parse_signed_hex};
use crypto_bigint::{NonZero, U256};
use serde::{Deserialize, Serialize};

/// The precomputed table for the 𝔾₂ generator
pub type G2PreComputed = PrecomputedTable<Fp2>;

/// A serializable description of a pairing-friendly curve with a D-type sextic twist.
///
/// The modulus and the group order are big-endian hex, coordinates are decimal, and the
/// non-residue is `ξ = xi[0] + xi[1]·u`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurveParams {
    pub name: String,
    pub modulus: String,
    pub order: String,
    /// the curve family parameter, `x` for BN curves, as signed hex
    pub param: String,
    /// `b` in `y² = x³ + b`
    pub b: u64,
    pub xi: [u64; 2],
    /// affine `(x, y)` of the 𝔾₁ generator
    pub g1: [String; 2],
    /// affine `(x₀, x₁, y₀, y₁)` of the 𝔾₂ generator
    pub g2: [String; 4],
}

impl CurveParams {
    /// BN254, also known as alt-bn128, with the generators used by Ethereum.
    pub fn bn254() -> Self {
        Self {
            name: "bn254".to_string(),
            modulus: "30644e72e131a029b85045b68181585d97816a916871ca8d3c208c16d87cfd47"
                .to_string(),
            order: "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001".to_string(),
            param: "0x44e992b44a6909f1".to_string(),
            b: 3,
            xi: [9, 1],
            g1: ["1".to_string(), "2".to_string()],
            g2: [
                "10857046999023057135944570762232829481370756359578518086990519993285655852781"
                    .to_string(),
                "11559732032986387107991004021392285783925812861821192530917403151452391805634"
                    .to_string(),
                "8495653923123431417604973247489272438418190587263600148770280649306958101930"
                    .to_string(),
                "4082367875863433681332203403145435568316851327593401208105741076214120093531"
                    .to_string(),
            ],
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::bn254()
    }
}

#[derive(Clone, Debug)]
pub struct PairingGroup {
    name: String,
    tower: Tower,
    order: NonZero<U256>,
    param: i128,
    g1_coefficient: Fp,
    g2_coefficient: Fp2,
    g1_generator: G1,
    g2_generator: G2,
    g2_precomputed: Option<G2PreComputed>,
}

impl PairingGroup {
    /// Builds the context for `params` without a precomputed table.
    ///
    /// # Errors
    /// [`FieldError::InvalidEncoding`] for unparsable numbers, the tower's errors for an
    /// unsuitable modulus or non-residue, and [`GroupError::NotOnCurve`] for generators that
    /// do not satisfy their curve equations.
    pub fn new(params: &CurveParams) -> Result<Self, GroupError> {
        let modulus = parse_hex_u256(&params.modulus).ok_or(FieldError::InvalidEncoding)?;
        let order = parse_hex_u256(&params.order).ok_or(FieldError::InvalidEncoding)?;
        let order: Option<NonZero<U256>> = NonZero::new(order).into();
        let order = order.ok_or(FieldError::InvalidEncoding)?;
        let param = parse_signed_hex(&params.param).ok_or(FieldError::InvalidEncoding)?;

        let field = PrimeField::new(modulus)?;
        let xi = Fp2::new([field.from_u64(params.xi[0]), field.from_u64(params.xi[1])]);
        let tower = Tower::new(field, xi)?;
        let f = tower.field();

        let b = f.from_u64(params.b);
        // D-type twist, b' = b / ξ
        let b2 = Fp2::new([b, Fp::ZERO]).mul(&xi.inv(&tower)?, &tower);

        let [g1x, g1y] = &params.g1;
        let g1_generator = GroupProjective::from_affine(
            f.from_dec_str(g1x)?,
            f.from_dec_str(g1y)?,
            &b,
            &tower,
        )?;
        let [x0, x1, y0, y1] = &params.g2;
        let g2_generator = GroupProjective::from_affine(
            Fp2::new([f.from_dec_str(x0)?, f.from_dec_str(x1)?]),
            Fp2::new([f.from_dec_str(y0)?, f.from_dec_str(y1)?]),
            &b2,
            &tower,
        )?;
        tracing::debug!(name = %params.name, ?modulus, param, "PairingGroup::new");
        Ok(Self {
            name: params.name.clone(),
            tower,
            order,
            param,
            g1_coefficient: b,
            g2_coefficient: b2,
            g1_generator,
            g2_generator,
            g2_precomputed: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field(&self) -> &PrimeField {
        self.tower.field()
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    /// `r`, the order of 𝔾₁, 𝔾₂ and 𝔾ₜ
    pub fn order(&self) -> &U256 {
        &self.order
    }

    pub(crate) fn order_nz(&self) -> &NonZero<U256> {
        &self.order
    }

    /// The curve family parameter
    pub fn param(&self) -> i128 {
        self.param
    }

    /// `b` of the 𝔾₁ curve
    pub fn g1_coefficient(&self) -> &Fp {
        &self.g1_coefficient
    }

    /// `b/ξ` of the twist
    pub fn g2_coefficient(&self) -> &Fp2 {
        &self.g2_coefficient
    }

    pub fn g1_generator(&self) -> &G1 {
        &self.g1_generator
    }

    pub fn g2_generator(&self) -> &G2 {
        &self.g2_generator
    }

    /// Replaces the 𝔾₁ generator after checking it is a finite point on the curve.
    pub fn set_g1_generator(&mut self, generator: G1) -> Result<(), GroupError> {
        if generator.is_infinity() {
            return Err(GroupError::PointAtInfinity);
        }
        if !generator.is_on_curve(&self.g1_coefficient, &*self) {
            return Err(GroupError::NotOnCurve);
        }
        self.g1_generator = generator.normalize(&*self);
        Ok(())
    }

    /// Replaces the 𝔾₂ generator after checking it is a finite point on the twist.
    /// Any precomputed table belongs to the old generator and is dropped.
    pub fn set_g2_generator(&mut self, generator: G2) -> Result<(), GroupError> {
        if generator.is_infinity() {
            return Err(GroupError::PointAtInfinity);
        }
        if !generator.is_on_curve(&self.g2_coefficient, &*self) {
            return Err(GroupError::NotOnCurve);
        }
        self.g2_generator = generator.normalize(&*self);
        if self.g2_precomputed.take().is_some() {
            tracing::debug!("PairingGroup::set_g2_generator dropped precomputed table");
        }
        Ok(())
    }

    /// Builds the windowed-NAF table for the 𝔾₂ generator with the default window and
    /// block size.
    pub fn precompute_g2_mult(&mut self) -> Result<(), GroupError> {
        self.precompute_g2_mult_with(DEFAULT_WINDOW, DEFAULT_BLOCK_SIZE)
    }

    /// Builds the table with an explicit window width and block size. On failure the
    /// context is left without a table.
    pub fn precompute_g2_mult_with(
        &mut self,
        window: usize,
        block_size: usize,
    ) -> Result<(), GroupError> {
        self.g2_precomputed = None;
        let table = G2PreComputed::new(&self.g2_generator, window, block_size, &*self)?;
        self.g2_precomputed = Some(table);
        Ok(())
    }

    pub fn have_g2_precompute(&self) -> bool {
        self.g2_precomputed.is_some()
    }

    pub fn g2_precomputed(&self) -> Option<&G2PreComputed> {
        self.g2_precomputed.as_ref()
    }

    /// `scalar · G₂` through the precomputed table.
    ///
    /// # Errors
    /// [`GroupError::MissingPrecomputation`] if the table has not been built.
    pub fn g2_mul_generator(&self, scalar: &U256) -> Result<G2, GroupError> {
        let table = self
            .g2_precomputed
            .as_ref()
            .ok_or(GroupError::MissingPrecomputation)?;
        Ok(table.mul(scalar, self))
    }

    /// `generator_scalar · G₂ + Σ scalarsᵢ · pointsᵢ`. The generator term uses the table
    /// when it exists and double-and-add otherwise.
    pub fn g2_mul(
        &self,
        generator_scalar: Option<&U256>,
        points: &[G2],
        scalars: &[U256],
    ) -> Result<G2, GroupError> {
        if points.len() != scalars.len() {
            return Err(GroupError::LengthMismatch {
                points: points.len(),
                scalars: scalars.len(),
            });
        }
        let mut acc = match (generator_scalar, &self.g2_precomputed) {
            (None, _) => G2::infinity(self),
            (Some(k), Some(table)) => table.mul(k, self),
            (Some(k), None) => self.g2_generator.mul(k, self),
        };
        for (p, k) in points.iter().zip(scalars) {
            acc = acc.add(&p.mul(k, self), self);
        }
        Ok(acc)
    }
}

impl AsRef<PrimeField> for PairingGroup {
    fn as_ref(&self) -> &PrimeField {
        self.tower.field()
    }
}

impl AsRef<Tower> for PairingGroup {
    fn as_ref(&self) -> &Tower {
        &self.tower
    }
}
