//! Short Weierstrass curves `y² = x³ + b` in Jacobian coordinates, generic over the
//! coordinate field so that 𝔾₁ (over 𝔽ₚ) and 𝔾₂ (over 𝔽ₚ²) share one implementation.
//!
//! A point `(X, Y, Z)` stands for the affine point `(X/Z², Y/Z³)`, and `Z = 0` is the
//! point at infinity. The `z_is_one` flag records that a point is known to be in affine
//! form, which lets addition switch to the cheaper mixed formulas. The formulas are the
//! `a = 0` entries of the explicit-formulas database:
//! <https://hyperelliptic.org/EFD/g1p/auto-shortw-jacobian-0.html>

use crate::fields::fp::{CurveField, FieldElement, FieldError, PrimeField};
use crypto_bigint::Uint;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GroupError {
    /// The point is not on the curve
    #[error("point is not on the curve")]
    NotOnCurve,
    /// The point is not in the prime-order subgroup
    #[error("point is not in the prime-order subgroup")]
    NotInSubgroup,
    /// The target-group candidate is not in the cyclotomic subgroup
    #[error("element is not in the cyclotomic subgroup")]
    NotCyclotomic,
    /// The operation has no answer at the point at infinity
    #[error("point at infinity")]
    PointAtInfinity,
    /// A precomputed-table operation was invoked before the table was built
    #[error("no precomputed table for the current generator")]
    MissingPrecomputation,
    /// The window width for a precomputed table is out of range
    #[error("window width {0} is out of range")]
    InvalidWindow(usize),
    /// The number of digit positions per table block is out of range
    #[error("block size {0} is out of range")]
    InvalidBlockSize(usize),
    /// Points and scalars given to a multi-scalar multiplication differ in length
    #[error("got {points} points but {scalars} scalars")]
    LengthMismatch { points: usize, scalars: usize },
    #[error(transparent)]
    Field(#[from] FieldError),
}

#[derive(Copy, Clone, Debug)]
pub struct GroupProjective<F: CurveField> {
    pub(crate) x: F,
    pub(crate) y: F,
    pub(crate) z: F,
    pub(crate) z_is_one: bool,
}

impl<F: CurveField> GroupProjective<F> {
    /// The point at infinity, `(0, 1, 0)`
    pub fn infinity<C: AsRef<PrimeField>>(ctx: &C) -> Self {
        Self {
            x: F::ZERO,
            y: F::one(ctx),
            z: F::ZERO,
            z_is_one: false,
        }
    }

    /// Builds a point from affine coordinates after checking `y² = x³ + b`.
    pub fn from_affine<C: AsRef<PrimeField>>(
        x: F,
        y: F,
        b: &F,
        ctx: &C,
    ) -> Result<Self, GroupError> {
        let point = Self {
            x,
            y,
            z: F::one(ctx),
            z_is_one: true,
        };
        match point.is_on_curve(b, ctx) {
            true => Ok(point),
            false => {
                tracing::debug!(?x, ?y, "GroupProjective::from_affine not on curve");
                Err(GroupError::NotOnCurve)
            }
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn z_is_one(&self) -> bool {
        self.z_is_one
    }

    /// The Jacobian form of the curve equation, `Y² = X³ + b Z⁶`. Infinity is on every
    /// curve.
    pub fn is_on_curve<C: AsRef<PrimeField>>(&self, b: &F, ctx: &C) -> bool {
        if self.is_infinity() {
            return true;
        }
        let lhs = self.y.square(ctx);
        let rhs = match self.z_is_one {
            true => self.x.square(ctx).mul(&self.x, ctx).add(b, ctx),
            false => {
                let z2 = self.z.square(ctx);
                let z6 = z2.square(ctx).mul(&z2, ctx);
                self.x
                    .square(ctx)
                    .mul(&self.x, ctx)
                    .add(&b.mul(&z6, ctx), ctx)
            }
        };
        lhs == rhs
    }

    /// The affine coordinates `(X/Z², Y/Z³)`.
    pub fn affine_coordinates<C: AsRef<PrimeField>>(&self, ctx: &C) -> Result<(F, F), GroupError> {
        if self.is_infinity() {
            return Err(GroupError::PointAtInfinity);
        }
        if self.z_is_one {
            return Ok((self.x, self.y));
        }
        let zinv = self.z.inv(ctx)?;
        let zinv2 = zinv.square(ctx);
        Ok((
            self.x.mul(&zinv2, ctx),
            self.y.mul(&zinv2.mul(&zinv, ctx), ctx),
        ))
    }

    /// Rescales the point so that `Z = 1`. Infinity is returned unchanged.
    pub fn normalize<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        match self.affine_coordinates(ctx) {
            Ok((x, y)) => Self {
                x,
                y,
                z: F::one(ctx),
                z_is_one: true,
            },
            Err(_) => *self,
        }
    }

    /// Normalizes all points with one shared field inversion. Points at infinity are
    /// passed through.
    pub fn batch_normalize<C: AsRef<PrimeField>>(
        points: &[Self],
        ctx: &C,
    ) -> Result<Vec<Self>, GroupError> {
        let zs: Vec<F> = points
            .iter()
            .filter(|p| !p.is_infinity())
            .map(|p| p.z)
            .collect();
        let mut inverses = F::batch_invert(&zs, ctx)?.into_iter();
        let one = F::one(ctx);
        let mut out = Vec::with_capacity(points.len());
        for p in points {
            if p.is_infinity() {
                out.push(*p);
                continue;
            }
            let zinv = inverses.next().ok_or(FieldError::ZeroInversion)?;
            let zinv2 = zinv.square(ctx);
            out.push(Self {
                x: p.x.mul(&zinv2, ctx),
                y: p.y.mul(&zinv2.mul(&zinv, ctx), ctx),
                z: one,
                z_is_one: true,
            });
        }
        Ok(out)
    }

    pub fn neg<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        Self {
            y: self.y.neg(ctx),
            ..*self
        }
    }

    /// dbl-2009-l
    pub fn double<C: AsRef<PrimeField>>(&self, ctx: &C) -> Self {
        if self.is_infinity() {
            return *self;
        }
        let a = self.x.square(ctx);
        let b = self.y.square(ctx);
        let c = b.square(ctx);
        let d = self
            .x
            .add(&b, ctx)
            .square(ctx)
            .sub(&a, ctx)
            .sub(&c, ctx)
            .double(ctx);
        let e = a.double(ctx).add(&a, ctx);
        let f = e.square(ctx);
        let x3 = f.sub(&d.double(ctx), ctx);
        let c8 = c.double(ctx).double(ctx).double(ctx);
        let y3 = e.mul(&d.sub(&x3, ctx), ctx).sub(&c8, ctx);
        let z3 = match self.z_is_one {
            true => self.y.double(ctx),
            false => self.y.mul(&self.z, ctx).double(ctx),
        };
        Self {
            x: x3,
            y: y3,
            z: z3,
            z_is_one: false,
        }
    }

    /// Point addition. Uses madd-2007-bl when either operand is affine, add-2007-bl
    /// otherwise, and falls back to doubling when both operands are the same point.
    pub fn add<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        if self.is_infinity() {
            return *rhs;
        }
        if rhs.is_infinity() {
            return *self;
        }
        match (self.z_is_one, rhs.z_is_one) {
            (_, true) => self.add_mixed(rhs, ctx),
            (true, false) => rhs.add_mixed(self, ctx),
            (false, false) => self.add_general(rhs, ctx),
        }
    }

    pub fn sub<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        self.add(&rhs.neg(ctx), ctx)
    }

    // rhs has Z = 1
    fn add_mixed<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        let z1z1 = self.z.square(ctx);
        let u2 = rhs.x.mul(&z1z1, ctx);
        let s2 = rhs.y.mul(&self.z, ctx).mul(&z1z1, ctx);
        let h = u2.sub(&self.x, ctx);
        let r = s2.sub(&self.y, ctx).double(ctx);
        if h.is_zero() {
            return match r.is_zero() {
                true => self.double(ctx),
                false => Self::infinity(ctx),
            };
        }
        let hh = h.square(ctx);
        let i = hh.double(ctx).double(ctx);
        let j = h.mul(&i, ctx);
        let v = self.x.mul(&i, ctx);
        let x3 = r.square(ctx).sub(&j, ctx).sub(&v.double(ctx), ctx);
        let y3 = r
            .mul(&v.sub(&x3, ctx), ctx)
            .sub(&self.y.mul(&j, ctx).double(ctx), ctx);
        let z3 = self.z.add(&h, ctx).square(ctx).sub(&z1z1, ctx).sub(&hh, ctx);
        Self {
            x: x3,
            y: y3,
            z: z3,
            z_is_one: false,
        }
    }

    fn add_general<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> Self {
        let z1z1 = self.z.square(ctx);
        let z2z2 = rhs.z.square(ctx);
        let u1 = self.x.mul(&z2z2, ctx);
        let u2 = rhs.x.mul(&z1z1, ctx);
        let s1 = self.y.mul(&rhs.z, ctx).mul(&z2z2, ctx);
        let s2 = rhs.y.mul(&self.z, ctx).mul(&z1z1, ctx);
        let h = u2.sub(&u1, ctx);
        let r = s2.sub(&s1, ctx).double(ctx);
        if h.is_zero() {
            return match r.is_zero() {
                true => self.double(ctx),
                false => Self::infinity(ctx),
            };
        }
        let i = h.double(ctx).square(ctx);
        let j = h.mul(&i, ctx);
        let v = u1.mul(&i, ctx);
        let x3 = r.square(ctx).sub(&j, ctx).sub(&v.double(ctx), ctx);
        let y3 = r
            .mul(&v.sub(&x3, ctx), ctx)
            .sub(&s1.mul(&j, ctx).double(ctx), ctx);
        let z3 = self
            .z
            .add(&rhs.z, ctx)
            .square(ctx)
            .sub(&z1z1, ctx)
            .sub(&z2z2, ctx)
            .mul(&h, ctx);
        Self {
            x: x3,
            y: y3,
            z: z3,
            z_is_one: false,
        }
    }

    /// Equality of the represented points, comparing `X₁Z₂² = X₂Z₁²` and `Y₁Z₂³ = Y₂Z₁³`.
    pub fn equals<C: AsRef<PrimeField>>(&self, rhs: &Self, ctx: &C) -> bool {
        match (self.is_infinity(), rhs.is_infinity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            _ => {}
        }
        let z1z1 = self.z.square(ctx);
        let z2z2 = rhs.z.square(ctx);
        let x0 = self.x.mul(&z2z2, ctx);
        let x1 = rhs.x.mul(&z1z1, ctx);
        let y0 = self.y.mul(&z2z2.mul(&rhs.z, ctx), ctx);
        let y1 = rhs.y.mul(&z1z1.mul(&self.z, ctx), ctx);
        x0 == x1 && y0 == y1
    }

    /// Double-and-add from the most significant bit.
    pub fn mul<const L: usize, C: AsRef<PrimeField>>(&self, scalar: &Uint<L>, ctx: &C) -> Self {
        let mut res = Self::infinity(ctx);
        for i in (0..scalar.bits_vartime()).rev() {
            res = res.double(ctx);
            if scalar.bit_vartime(i) {
                res = res.add(self, ctx);
            }
        }
        res
    }

    /// The raw Jacobian coordinates `(X, Y, Z)`
    pub fn coordinates(&self) -> (&F, &F, &F) {
        (&self.x, &self.y, &self.z)
    }
}
