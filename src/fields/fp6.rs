// The sextic level of the tower, F_{p^6} = F_{p^2}(v) / (v^3 - ξ). An
// element is c0 + c1 v + c2 v^2 and every product that overflows past v^2
// folds back in multiplied by ξ.
use crate::fields::extensions::FieldExtension;
use crate::fields::fp::{CurveField, FieldElement, FieldError};
use crate::fields::fp2::Fp2;
use crate::fields::tower::Tower;
use crypto_bigint::rand_core::CryptoRngCore;

pub type Fp6 = FieldExtension<3, Fp2>;

impl Fp6 {
    /// Multiplies by `v`: `(c0 + c1 v + c2 v²) v = ξ c2 + c0 v + c1 v²`.
    pub fn mul_by_v<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        Self::new([self.0[2].mul_by_nonresidue(ctx), self.0[0], self.0[1]])
    }

    pub fn mul<C: AsRef<Tower>>(&self, rhs: &Self, ctx: &C) -> Self {
        // This is the exact same strategy as multiplication in Fp2
        // see the doc string there for more details
        let t: &Tower = ctx.as_ref();
        let t0 = self.0[0].mul(&rhs.0[0], t);
        let t1 = self.0[1].mul(&rhs.0[1], t);
        let t2 = self.0[2].mul(&rhs.0[2], t);

        let c0 = self.0[1]
            .add(&self.0[2], t)
            .mul(&rhs.0[1].add(&rhs.0[2], t), t)
            .sub(&t1, t)
            .sub(&t2, t)
            .mul_by_nonresidue(t)
            .add(&t0, t);
        let c1 = self.0[0]
            .add(&self.0[1], t)
            .mul(&rhs.0[0].add(&rhs.0[1], t), t)
            .sub(&t0, t)
            .sub(&t1, t)
            .add(&t2.mul_by_nonresidue(t), t);
        let c2 = self.0[0]
            .add(&self.0[2], t)
            .mul(&rhs.0[0].add(&rhs.0[2], t), t)
            .sub(&t0, t)
            .add(&t1, t)
            .sub(&t2, t);
        Self::new([c0, c1, c2])
    }

    /// Multiplication by an element whose `v²` coefficient is known to be zero, which is
    /// the shape line evaluations take. Five 𝔽ₚ² products instead of six.
    pub fn mul_sparse<C: AsRef<Tower>>(&self, rhs: &Self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let (b0, b1) = (&rhs.0[0], &rhs.0[1]);
        let t0 = self.0[0].mul(b0, t);
        let t1 = self.0[1].mul(b1, t);
        let c0 = self.0[2].mul(b1, t).mul_by_nonresidue(t).add(&t0, t);
        let c1 = self.0[0]
            .add(&self.0[1], t)
            .mul(&b0.add(b1, t), t)
            .sub(&t0, t)
            .sub(&t1, t);
        let c2 = self.0[2].mul(b0, t).add(&t1, t);
        Self::new([c0, c1, c2])
    }

    // this is simply the same as the multiplication above
    // however, there are some simple algebraic reductions
    // you can do with squaring. this just implements that,
    // but functionally it is the same as `mul`
    pub fn square<C: AsRef<Tower>>(&self, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        let s0 = self.0[0].square(t);
        let s1 = self.0[0].mul(&self.0[1], t).double(t);
        let s2 = self.0[0].sub(&self.0[1], t).add(&self.0[2], t).square(t);
        let s3 = self.0[1].mul(&self.0[2], t).double(t);
        let s4 = self.0[2].square(t);
        Self::new([
            s3.mul_by_nonresidue(t).add(&s0, t),
            s4.mul_by_nonresidue(t).add(&s1, t),
            s1.add(&s2, t).add(&s3, t).sub(&s0, t).sub(&s4, t),
        ])
    }

    pub fn inv<C: AsRef<Tower>>(&self, ctx: &C) -> Result<Self, FieldError> {
        // Implements a low-overhead version of Algorithm 17 of https://eprint.iacr.org/2010/354.pdf,
        // the only 𝔽ₚ² inversion is of the norm-like scalar t
        if self.is_zero() {
            return Err(FieldError::ZeroInversion);
        }
        let t: &Tower = ctx.as_ref();
        let t0 = self.0[0]
            .square(t)
            .sub(&self.0[1].mul(&self.0[2], t).mul_by_nonresidue(t), t);
        let t1 = self.0[2]
            .square(t)
            .mul_by_nonresidue(t)
            .sub(&self.0[0].mul(&self.0[1], t), t);
        let t2 = self.0[1].square(t).sub(&self.0[0].mul(&self.0[2], t), t);
        let d = self.0[2]
            .mul(&t1, t)
            .add(&self.0[1].mul(&t2, t), t)
            .mul_by_nonresidue(t)
            .add(&self.0[0].mul(&t0, t), t)
            .inv(t)?;
        Ok(Self::new([t0.mul(&d, t), t1.mul(&d, t), t2.mul(&d, t)]))
    }

    pub fn rand<R: CryptoRngCore, C: AsRef<Tower>>(rng: &mut R, ctx: &C) -> Self {
        let t: &Tower = ctx.as_ref();
        Self::new([Fp2::rand(rng, t), Fp2::rand(rng, t), Fp2::rand(rng, t)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::BN254;
    use crypto_bigint::rand_core::OsRng;

    // schoolbook product with the v³ = ξ reduction written out
    fn schoolbook(a: &Fp6, b: &Fp6, t: &Tower) -> Fp6 {
        let mut prod = [Fp2::ZERO; 5];
        for i in 0..3 {
            for j in 0..3 {
                prod[i + j] = prod[i + j].add(&a.0[i].mul(&b.0[j], t), t);
            }
        }
        Fp6::new([
            prod[0].add(&prod[3].mul_by_nonresidue(t), t),
            prod[1].add(&prod[4].mul_by_nonresidue(t), t),
            prod[2],
        ])
    }

    mod addition_tests {
        use super::*;

        #[test]
        fn test_addition_is_componentwise() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            let b = Fp6::rand(&mut OsRng, t);
            let c = a.add(&b, t);
            for i in 0..3 {
                assert_eq!(c.0[i], a.0[i].add(&b.0[i], t));
            }
            assert_eq!(c.sub(&b, t), a, "Subtraction is not inverse of addition");
            assert_eq!(a.add(&a.neg(t), t), Fp6::ZERO);
        }
    }

    mod multiplication_tests {
        use super::*;

        #[test]
        fn test_multiplication_matches_schoolbook() {
            let t = BN254.tower();
            for _ in 0..5 {
                let a = Fp6::rand(&mut OsRng, t);
                let b = Fp6::rand(&mut OsRng, t);
                assert_eq!(a.mul(&b, t), schoolbook(&a, &b, t));
            }
        }

        #[test]
        fn test_multiplication_associativity_commutativity_distributivity() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            let b = Fp6::rand(&mut OsRng, t);
            let c = Fp6::rand(&mut OsRng, t);
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
            assert_eq!(a.mul(&Fp6::one(t), t), a);
        }

        #[test]
        fn test_sparse_multiplication() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            let mut b = Fp6::rand(&mut OsRng, t);
            b.0[2] = Fp2::ZERO;
            assert_eq!(a.mul_sparse(&b, t), a.mul(&b, t));
        }

        #[test]
        fn test_mul_by_v() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            let v = Fp6::new([Fp2::ZERO, Fp2::one(t), Fp2::ZERO]);
            assert_eq!(a.mul_by_v(t), a.mul(&v, t));
            // v³ = ξ
            let xi = Fp6::new([*t.nonresidue(), Fp2::ZERO, Fp2::ZERO]);
            assert_eq!(v.mul(&v, t).mul(&v, t), xi);
        }

        #[test]
        fn test_squaring() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            assert_eq!(a.square(t), a.mul(&a, t), "Squaring is not self multiplication");
        }

        #[test]
        fn test_scaling() {
            let t = BN254.tower();
            let a = Fp6::rand(&mut OsRng, t);
            let s = Fp2::rand(&mut OsRng, t);
            let lifted = Fp6::new([s, Fp2::ZERO, Fp2::ZERO]);
            assert_eq!(a.scale(&s, t), a.mul(&lifted, t));
        }
    }

    mod inversion_tests {
        use super::*;

        #[test]
        fn test_inversion() {
            let t = BN254.tower();
            for _ in 0..5 {
                let a = Fp6::rand(&mut OsRng, t);
                assert_eq!(a.mul(&a.inv(t).unwrap(), t), Fp6::one(t), "Inversion failed");
            }
            let sparse = Fp6::new([Fp2::ZERO, Fp2::ZERO, Fp2::one(t)]);
            assert_eq!(sparse.mul(&sparse.inv(t).unwrap(), t), Fp6::one(t));
        }

        #[test]
        fn test_zero_inversion() {
            let t = BN254.tower();
            assert_eq!(Fp6::ZERO.inv(t), Err(FieldError::ZeroInversion));
        }
    }
}
