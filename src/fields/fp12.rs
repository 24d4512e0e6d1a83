//! The top of the tower, F_{p^{12}} = F_{p^6}(w) / (w^2 - v). An element can be held
//! as 2 elements of F_{p^6}, as the tower gives us, or as 6 elements of F_{p^2}, with
//! F_{p^{12}} = F_{p^2}(w) / (w^6 - ξ). We store the (F_{p^6}, F_{p^6})
//! form, and switch to the six-coefficient view where the formulas are written for it (Frobenius, cyclotomic squaring, compression):
//!
//! ```text
//! (g0 + g1 v + g2 v²) + (h0 + h1 v + h2 v²) w
//!  = g0 + h0 w + g1 w² + h1 w³ + g2 w⁴ + h2 w⁵
//! ```
//!
//! Pairing values live in the cyclotomic subgroup of order `Φ₁₂(p) = p⁴ - p² + 1`.
//! Elements of that subgroup are unitary (their inverse is their conjugate), admit a
//! cheaper squaring, and can be compressed to four of their six coefficients. The
//! routines that rely on this state it in their names and do not check membership;
//! use [`Fp12::is_cyclotomic`] when the origin of an element is not trusted.

use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{CurveField, FieldElement, FieldError};
use crate::fields::fp2::Fp2;
use crate::fields::fp6::Fp6;
use crate::fields::tower::Tower;
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::Uint;

pub type Fp12 = FieldExtension<2, Fp6>;

/// The compressed form `[h0, g2, g1, h2]` of a cyclotomic element, from
/// <https://eprint.iacr.org/2010/542.pdf>. The two missing coefficients are recovered
/// by [`PackedFp12::unpack`] or, for many elements at once, [`Fp12::unpack_batch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PackedFp12(pub(crate) [Fp2; 4]);

impl Fp12 {
    pub fn mul<C: AsRef<Tower>>(&self, rhs: &Self, ctx: &C) -> Self {
        // Karatsuba over w² = v, see Alg. 20 of https://eprint.iacr.org/2010/354.pdf
        let t: &Tower = ctx.as_ref();
        let t0 = self.0[0].mul(&rhs.0[0], t);
        let t1 = self.0[1].mul(&rhs.0[1], t);
        let c1 = self.0[0]
            .add(&self.0[1], t)
            .mul(&rhs.0[0].add(&rhs.0[1], t), t)
            .sub(&t0, t)
            .sub(&t1, t);
        Self::new([t0.add(&t1.mul_by_v(t), t), c1])
    }

    /// Multiplication by an element of the shape `(b0 + 0v + 0v²) + (b1 + b2 v + 0v²)w`,
    /// the line-function shape for a D-type twist. Only those three coefficients of `rhs`
    /// are read.
    pub fn mul_sparse<C: AsRef<Tower>>(&self, rhs: &Self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let b0 = rhs.0[0].0[0];
        let b1 = Fp6::new([rhs.0[1].0[0], rhs.0[1].0[1], Fp2::ZERO]);
        let t0 = self.0[0].scale(&b0, t);
        let t1 = self.0[1].mul_sparse(&b1, t);
        let sum = Fp6::new([b0.add(&b1.0[0], t), b1.0[1], Fp2::ZERO]);
        let c1 = self.0[0]
            .add(&self.0[1], t)
            .mul_sparse(&sum, t)
            .sub(&t0, t)
            .sub(&t1, t);
        Self::new([t0.add(&t1.mul_by_v(t), t), c1])
    }

    pub fn square<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        // For F_{p^{12}} = F_{p^6}(w)/(w^2-\gamma), and A=a_0 + a_1*w \in F_{p^{12}},
        // we determine C=c_0+c_1*w = A^2\in F_{p^{12}}
        // Alg. 22 from https://eprint.iacr.org/2010/354.pdf
        let t: &Tower = ctx.as_ref();
        let c0 = self.0[0].sub(&self.0[1], t);
        let c3 = self.0[0].sub(&self.0[1].mul_by_v(t), t);
        let c2 = self.0[0].mul(&self.0[1], t);
        let c0 = c0.mul(&c3, t).add(&c2, t).add(&c2.mul_by_v(t), t);
        Self::new([c0, c2.double(t)])
    }

    pub fn inv<C: AsRef<Tower>>(&self, ctx: &C) -> Result<Self, FieldError> {
        // Implements Alg. 23 of https://eprint.iacr.org/2010/354.pdf
        if self.is_zero() {
            return Err(FieldError::ZeroInversion);
        }
        let t: &Tower = ctx.as_ref();
        let norm = self.0[0]
            .square(t)
            .sub(&self.0[1].square(t).mul_by_v(t), t)
            .inv(t)?;
        Ok(Self::new([
            self.0[0].mul(&norm, t),
            self.0[1].mul(&norm, t).neg(t),
        ]))
    }

    /// `a0 - a1 w`, which is `a^(p⁶)`, and the inverse of any unitary element
    pub fn conjugate<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        Self::new([self.0[0], self.0[1].neg(t)])
    }

    /// One application of `a ↦ aᵖ`. On the slot `cᵢ wⁱ` this is `conj(cᵢ) γᵢ wⁱ`.
    pub fn frobenius<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let slot = |c: &Fp2, power: usize| c.conjugate(t).mul_by_frobenius(power, t);
        Self::new([
            Fp6::new([
                slot(&self.0[0].0[0], 0),
                slot(&self.0[0].0[1], 2),
                slot(&self.0[0].0[2], 4),
            ]),
            Fp6::new([
                slot(&self.0[1].0[0], 1),
                slot(&self.0[1].0[1], 3),
                slot(&self.0[1].0[2], 5),
            ]),
        ])
    }

    /// `a^(pⁿ)`
    pub fn frobenius_pow<C: AsRef<Tower>>(&self, n: usize, ctx: &C) -> Self {
        (0..n).fold(*self, |acc, _| acc.frobenius(ctx))
    }

    /// Square-and-multiply exponentiation valid for any element.
    pub fn exp<const L: usize, C: AsRef<Tower>>(&self, exp: &Uint<L>, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let mut res = Self::one(t);
        for i in (0..exp.bits_vartime()).rev() {
            res = res.square(t);
            if exp.bit_vartime(i) {
                res = res.mul(self, t);
            }
        }
        res
    }

    /// Granger-Scott squaring, <https://eprint.iacr.org/2009/565.pdf>, Sec. 3.2.
    ///
    /// Only valid for elements of the cyclotomic subgroup; for anything else the output
    /// is not the square.
    pub fn cyclotomic_square<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        // squaring in F_{p^4} = F_{p^2}(w^3) / ((w^3)^2 - ξ)
        let fp4_square = |a: &Fp2, b: &Fp2| {
            let t0 = a.square(t);
            let t1 = b.square(t);
            let c0 = t1.mul_by_nonresidue(t).add(&t0, t);
            let c1 = a.add(b, t).square(t).sub(&t0, t).sub(&t1, t);
            (c0, c1)
        };
        // z₀ + z₁w³ pairs up the coefficients of w⁰, w³ and so on
        let (z0, z4, z3) = (self.0[0].0[0], self.0[0].0[1], self.0[0].0[2]);
        let (z2, z1, z5) = (self.0[1].0[0], self.0[1].0[1], self.0[1].0[2]);

        let (t0, t1) = fp4_square(&z0, &z1);
        let z0 = t0.sub(&z0, t).double(t).add(&t0, t);
        let z1 = t1.add(&z1, t).double(t).add(&t1, t);

        let (t0, t1) = fp4_square(&z2, &z3);
        let (t2, t3) = fp4_square(&z4, &z5);

        let z4 = t0.sub(&z4, t).double(t).add(&t0, t);
        let z5 = t1.add(&z5, t).double(t).add(&t1, t);

        let t0 = t3.mul_by_nonresidue(t);
        let z2 = t0.add(&z2, t).double(t).add(&t0, t);
        let z3 = t2.sub(&z3, t).double(t).add(&t2, t);

        Self::new([Fp6::new([z0, z4, z3]), Fp6::new([z2, z1, z5])])
    }

    /// Exponentiation in the cyclotomic subgroup using [`Fp12::cyclotomic_square`].
    pub fn exp_cyc<const L: usize, C: AsRef<Tower>>(&self, exp: &Uint<L>, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let mut res = Self::one(t);
        for i in (0..exp.bits_vartime()).rev() {
            res = res.cyclotomic_square(t);
            if exp.bit_vartime(i) {
                res = res.mul(self, t);
            }
        }
        res
    }

    /// Membership in the subgroup of order `p⁴ - p² + 1`, tested as `a^(p⁴) · a = a^(p²)`.
    pub fn is_cyclotomic<C: AsRef<Tower>>(&self, ctx: &C) -> bool {
        if self.is_zero() {
            return false;
        }
        let t: &Tower = ctx.as_ref();
        let p2 = self.frobenius_pow(2, t);
        let p4 = p2.frobenius_pow(2, t);
        p4.mul(self, t) == p2
    }

    /// Maps any non-zero element into the cyclotomic subgroup by raising it to
    /// `(p⁶ - 1)(p² + 1)`, the easy part of a final exponentiation.
    pub fn to_cyclotomic<C: AsRef<Tower>>(&self, ctx: &C) -> Result<Self, FieldError> {
        let t: &Tower = ctx.as_ref();
        let f = self.conjugate(t).mul(&self.inv(t)?, t);
        Ok(f.frobenius_pow(2, t).mul(&f, t))
    }

    /// Compresses a cyclotomic element to `[h0, g2, g1, h2]`.
    pub fn pack(&self) -> PackedFp12 {
        PackedFp12([self.0[1].0[0], self.0[0].0[2], self.0[0].0[1], self.0[1].0[2]])
    }

    /// Decompresses many packed elements with one shared inversion.
    ///
    /// # Errors
    /// [`FieldError::DegenerateCompression`] with the position of the first element whose
    /// `h0` and `g2` both vanish while it is not the identity; nothing is returned for
    /// the rest of the batch in that case.
    pub fn unpack_batch<C: AsRef<Tower>>(
        packed: &[PackedFp12],
        ctx: &C,
    ) -> Result<Vec<Self>, FieldError> {
        let t: &Tower = ctx.as_ref();
        let three = |x: &Fp2| x.double(t).add(x, t);

        // numerators and denominators of the missing h1, None for the identity
        let mut fractions = Vec::with_capacity(packed.len());
        for (i, p) in packed.iter().enumerate() {
            let [a2, a3, a4, a5] = &p.0;
            if !a2.is_zero() {
                let num = a5
                    .square(t)
                    .mul_by_nonresidue(t)
                    .add(&three(&a4.square(t)), t)
                    .sub(&a3.double(t), t);
                fractions.push(Some((num, a2.double(t).double(t))));
            } else if !a3.is_zero() {
                // h0 = 0 branch, as in zisk's decompress_cyclo_bls12_381
                fractions.push(Some((a4.mul(a5, t).double(t), *a3)));
            } else if a4.is_zero() && a5.is_zero() {
                fractions.push(None);
            } else {
                tracing::trace!(index = i, "Fp12::unpack_batch degenerate element");
                return Err(FieldError::DegenerateCompression(i));
            }
        }

        let denominators: Vec<Fp2> = fractions.iter().flatten().map(|(_, d)| *d).collect();
        let mut inverses = Fp2::batch_invert(&denominators, t)?.into_iter();

        let mut out = Vec::with_capacity(packed.len());
        for (p, fraction) in packed.iter().zip(fractions) {
            let Some((num, _)) = fraction else {
                out.push(Self::one(t));
                continue;
            };
            let Some(inv) = inverses.next() else {
                return Err(FieldError::ZeroInversion);
            };
            let [a2, a3, a4, a5] = &p.0;
            let a1 = num.mul(&inv, t);
            // a0 = (2 a1² + a2 a5 - 3 a3 a4) ξ + 1
            let a0 = a1
                .square(t)
                .double(t)
                .add(&a2.mul(a5, t), t)
                .sub(&three(&a3.mul(a4, t)), t)
                .mul_by_nonresidue(t)
                .add(&Fp2::one(t), t);
            out.push(Self::new([
                Fp6::new([a0, *a4, *a3]),
                Fp6::new([*a2, a1, *a5]),
            ]));
        }
        Ok(out)
    }

    /// Exponentiation in the cyclotomic subgroup through the compressed form: every
    /// squaring happens on four coefficients, and the squares needed for the product are
    /// decompressed together at the end.
    pub fn exp_pck<const L: usize, C: AsRef<Tower>>(
        &self,
        exp: &Uint<L>,
        ctx: &C,
    ) -> Result<Self, FieldError> {
        let t: &Tower = ctx.as_ref();
        let bits = exp.bits_vartime();
        let mut squares = Vec::new();
        let mut comp = self.pack();
        for i in 0..bits {
            if exp.bit_vartime(i) {
                squares.push(comp);
            }
            if i + 1 < bits {
                comp = comp.square(t);
            }
        }
        Ok(Self::unpack_batch(&squares, t)?
            .iter()
            .fold(Self::one(t), |acc, s| acc.mul(s, t)))
    }

    pub fn is_one<C: AsRef<Tower>>(&self, ctx: &C) -> bool {
        let t: &Tower = ctx.as_ref();
        *self == Self::one(t)
    }

    pub fn rand<R: CryptoRngCore, C: AsRef<Tower>>(rng: &mut R, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        Self::new([Fp6::rand(rng, t), Fp6::rand(rng, t)])
    }
}

impl PackedFp12 {
    /// Karabina's squaring on the compressed form:
    ///
    /// ```text
    /// h0' = 2(h0 + 3ξ B45)
    /// g2' = 3(A45 - (ξ + 1) B45) - 2 g2
    /// g1' = 3(A23 - (ξ + 1) B23) - 2 g1
    /// h2' = 2(h2 + 3 B23)
    /// ```
    ///
    /// with `Bij = ai aj` and `Aij = (ai + aj)(ai + ξ aj)` over `[a2, a3, a4, a5]`.
    pub fn square<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let three = |x: &Fp2| x.double(t).add(x, t);
        let [a2, a3, a4, a5] = &self.0;

        let b23 = a2.mul(a3, t);
        let b45 = a4.mul(a5, t);
        let a23 = a2.add(a3, t).mul(&a2.add(&a3.mul_by_nonresidue(t), t), t);
        let a45 = a4.add(a5, t).mul(&a4.add(&a5.mul_by_nonresidue(t), t), t);
        // (ξ + 1) B
        let xi1_b23 = b23.mul_by_nonresidue(t).add(&b23, t);
        let xi1_b45 = b45.mul_by_nonresidue(t).add(&b45, t);

        let b2 = a2.add(&three(&b45.mul_by_nonresidue(t)), t).double(t);
        let b3 = three(&a45.sub(&xi1_b45, t)).sub(&a3.double(t), t);
        let b4 = three(&a23.sub(&xi1_b23, t)).sub(&a4.double(t), t);
        let b5 = a5.add(&three(&b23), t).double(t);
        Self([b2, b3, b4, b5])
    }

    pub fn unpack<C: AsRef<Tower>>(&self, ctx: &C) -> Result<Fp12, FieldError> {
        Fp12::unpack_batch(std::slice::from_ref(self), ctx)?
            .pop()
            .ok_or(FieldError::DegenerateCompression(0))
    }

    pub fn coefficients(&self) -> &[Fp2; 4] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::BN254;
    use crypto_bigint::rand_core::OsRng;
    use crypto_bigint::{Random, U256};
    use quickcheck_macros::quickcheck;

    fn random_cyclotomic(t: &Tower) -> Fp12 {
        Fp12::rand(&mut OsRng, t).to_cyclotomic(t).unwrap()
    }

    mod multiplication_tests {
        use super::*;

        #[test]
        fn test_multiplication_associativity_commutativity_distributivity() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            let b = Fp12::rand(&mut OsRng, t);
            let c = Fp12::rand(&mut OsRng, t);

            assert_eq!(a.mul(&b, t), b.mul(&a, t), "Multiplication is not commutative");
            assert_eq!(
                a.mul(&b, t).mul(&c, t),
                a.mul(&b.mul(&c, t), t),
                "Multiplication is not associative"
            );
            assert_eq!(
                a.mul(&b.add(&c, t), t),
                a.mul(&b, t).add(&a.mul(&c, t), t),
                "Multiplication is not distributive"
            );
        }

        #[test]
        fn test_w_squares_to_v() {
            let t = BN254.tower();
            let w = Fp12::new([Fp6::ZERO, Fp6::one(t)]);
            let v = Fp12::new([Fp6::new([Fp2::ZERO, Fp2::one(t), Fp2::ZERO]), Fp6::ZERO]);
            assert_eq!(w.square(t), v);
        }

        #[test]
        fn test_squaring() {
            let t = BN254.tower();
            for _ in 0..5 {
                let a = Fp12::rand(&mut OsRng, t);
                assert_eq!(a.square(t), a.mul(&a, t), "Squaring is not self multiplication");
            }
        }

        #[test]
        fn test_sparse_multiplication() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            let line = Fp12::new([
                Fp6::new([Fp2::rand(&mut OsRng, t), Fp2::ZERO, Fp2::ZERO]),
                Fp6::new([Fp2::rand(&mut OsRng, t), Fp2::rand(&mut OsRng, t), Fp2::ZERO]),
            ]);
            assert_eq!(a.mul_sparse(&line, t), a.mul(&line, t));
        }
    }

    mod division_tests {
        use super::*;

        #[test]
        fn test_inversion() {
            let t = BN254.tower();
            for _ in 0..5 {
                let a = Fp12::rand(&mut OsRng, t);
                assert!(a.mul(&a.inv(t).unwrap(), t).is_one(t), "Inversion failed");
            }
            assert_eq!(Fp12::ZERO.inv(t), Err(FieldError::ZeroInversion));
        }

        #[test]
        fn test_unitary_inverse() {
            let t = BN254.tower();
            let g = random_cyclotomic(t);
            assert_eq!(g.conjugate(t), g.inv(t).unwrap());
        }
    }

    mod frobenius_tests {
        use super::*;

        #[test]
        fn test_frobenius_order() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            assert_eq!(a.frobenius_pow(12, t), a, "Frobenius does not have order 12");
            assert_ne!(a.frobenius_pow(6, t), a);
            assert_eq!(a.frobenius_pow(6, t), a.conjugate(t));
        }

        #[test]
        fn test_frobenius_is_pth_power() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            assert_eq!(a.frobenius(t), a.exp(t.field().modulus(), t));
        }

        #[test]
        fn test_frobenius_is_multiplicative() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            let b = Fp12::rand(&mut OsRng, t);
            assert_eq!(
                a.mul(&b, t).frobenius(t),
                a.frobenius(t).mul(&b.frobenius(t), t)
            );
        }
    }

    mod cyclotomic_tests {
        use super::*;

        #[test]
        fn test_membership() {
            let t = BN254.tower();
            let a = Fp12::rand(&mut OsRng, t);
            assert!(!a.is_cyclotomic(t));
            assert!(a.to_cyclotomic(t).unwrap().is_cyclotomic(t));
            assert!(Fp12::one(t).is_cyclotomic(t));
            assert!(!Fp12::ZERO.is_cyclotomic(t));
            assert_eq!(Fp12::ZERO.to_cyclotomic(t), Err(FieldError::ZeroInversion));
        }

        #[test]
        fn test_cyclotomic_squaring() {
            let t = BN254.tower();
            for _ in 0..5 {
                let g = random_cyclotomic(t);
                assert_eq!(g.cyclotomic_square(t), g.square(t));
            }
            assert!(Fp12::one(t).cyclotomic_square(t).is_one(t));
        }

        #[test]
        fn test_cyclotomic_exponentiation() {
            let t = BN254.tower();
            let g = random_cyclotomic(t);
            let e = U256::random(&mut OsRng);
            assert_eq!(g.exp_cyc(&e, t), g.exp(&e, t));
            assert!(g.exp_cyc(&U256::ZERO, t).is_one(t));
            assert_eq!(g.exp_cyc(&U256::ONE, t), g);
        }

        #[quickcheck]
        fn exp_cyc_is_homomorphic(a: u32, b: u32) -> bool {
            let t = BN254.tower();
            let g = random_cyclotomic(t);
            let ab = U256::from_u64(a as u64 * b as u64);
            g.exp_cyc(&U256::from_u32(a), t).exp_cyc(&U256::from_u32(b), t) == g.exp_cyc(&ab, t)
        }
    }

    mod compression_tests {
        use super::*;

        #[test]
        fn test_round_trip() {
            let t = BN254.tower();
            for _ in 0..5 {
                let g = random_cyclotomic(t);
                assert_eq!(g.pack().unpack(t).unwrap(), g, "Decompression failed");
            }
            let one = Fp12::one(t);
            assert_eq!(one.pack().unpack(t).unwrap(), one);
        }

        #[test]
        fn test_packed_squaring() {
            let t = BN254.tower();
            let g = random_cyclotomic(t);
            assert_eq!(g.pack().square(t), g.square(t).pack());
            assert_eq!(g.pack().square(t).unpack(t).unwrap(), g.square(t));
        }

        #[test]
        fn test_batch_matches_single() {
            let t = BN254.tower();
            let elems: Vec<Fp12> = (0..4).map(|_| random_cyclotomic(t)).collect();
            let mut packed: Vec<PackedFp12> = elems.iter().map(|g| g.pack()).collect();
            packed.push(Fp12::one(t).pack());
            let unpacked = Fp12::unpack_batch(&packed, t).unwrap();
            assert_eq!(&unpacked[..4], &elems[..]);
            assert!(unpacked[4].is_one(t));
            assert!(Fp12::unpack_batch(&[], t).unwrap().is_empty());
        }

        #[test]
        fn test_batch_with_vanishing_h0() {
            // a1 = 2 a4 a5 / a3 and a0 = (2 a1² - 3 a3 a4) ξ + 1 when h0 = 0
            let t = BN254.tower();
            let a3 = Fp2::rand(&mut OsRng, t);
            let a4 = Fp2::rand(&mut OsRng, t);
            let a5 = Fp2::rand(&mut OsRng, t);
            let sparse = PackedFp12([Fp2::ZERO, a3, a4, a5]);
            let a1 = a4.mul(&a5, t).double(t).mul(&a3.inv(t).unwrap(), t);
            let a3a4 = a3.mul(&a4, t);
            let a0 = a1
                .square(t)
                .double(t)
                .sub(&a3a4.double(t).add(&a3a4, t), t)
                .mul_by_nonresidue(t)
                .add(&Fp2::one(t), t);
            let expected = Fp12::new([Fp6::new([a0, a4, a3]), Fp6::new([Fp2::ZERO, a1, a5])]);
            assert_eq!(sparse.unpack(t).unwrap(), expected);

            // both branches and the identity in one batch share the inversion in order
            let (x, y) = (random_cyclotomic(t), random_cyclotomic(t));
            let packed = [x.pack(), sparse, Fp12::one(t).pack(), y.pack(), sparse];
            let unpacked = Fp12::unpack_batch(&packed, t).unwrap();
            assert_eq!(unpacked, vec![x, expected, Fp12::one(t), y, expected]);
        }

        #[test]
        fn test_degenerate_rejected() {
            let t = BN254.tower();
            let good = random_cyclotomic(t).pack();
            let bad = PackedFp12([Fp2::ZERO, Fp2::ZERO, Fp2::one(t), Fp2::ZERO]);
            assert_eq!(
                Fp12::unpack_batch(&[good, bad], t),
                Err(FieldError::DegenerateCompression(1))
            );
        }

        #[test]
        fn test_packed_exponentiation() {
            let t = BN254.tower();
            let g = random_cyclotomic(t);
            let e = U256::random(&mut OsRng);
            assert_eq!(g.exp_pck(&e, t).unwrap(), g.exp_cyc(&e, t));
            assert!(g.exp_pck(&U256::ZERO, t).unwrap().is_one(t));
            assert_eq!(g.exp_pck(&U256::ONE, t).unwrap(), g);
        }
    }
}
