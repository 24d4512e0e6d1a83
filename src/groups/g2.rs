//! 𝔾₂, the sextic twist `y² = x³ + b/ξ` over 𝔽ₚ² (a D-type twist).
//!
//! Beyond the shared Jacobian arithmetic, the twist carries the endomorphism
//! ψ = twist ∘ Frobenius ∘ untwist, which on coordinates is
//!
//! ```text
//! ψ(x, y) = (conj(x) γ₂, conj(y) γ₃),   γᵢ = ξ^(i(p-1)/6)
//! ```
//!
//! and acts on the prime-order subgroup as multiplication by `p`.

use crate::context::PairingGroup;
use crate::fields::fp2::Fp2;
use crate::groups::group::{GroupError, GroupProjective};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{RandomMod, U256};

pub type G2 = GroupProjective<Fp2>;

impl G2 {
    /// Builds a point from affine coordinates on the twist, the analogue of setting
    /// affine coordinates on a fresh point.
    pub fn new(x: Fp2, y: Fp2, group: &PairingGroup) -> Result<Self, GroupError> {
        Self::from_affine(x, y, group.g2_coefficient(), group)
    }

    pub fn generator(group: &PairingGroup) -> Self {
        *group.g2_generator()
    }

    /// A uniformly random element of the prime-order subgroup.
    pub fn rand<R: CryptoRngCore>(rng: &mut R, group: &PairingGroup) -> Self {
        let k = U256::random_mod(rng, group.order_nz());
        Self::generator(group).mul(&k, group)
    }

    /// ψ, applied directly to Jacobian coordinates. Conjugation fixes `Z = 1`, so
    /// affine points stay affine.
    pub fn endomorphism(&self, group: &PairingGroup) -> Self {
        Self {
            x: self.x.conjugate(group).mul_by_frobenius(2, group),
            y: self.y.conjugate(group).mul_by_frobenius(3, group),
            z: self.z.conjugate(group),
            z_is_one: self.z_is_one,
        }
    }

    /// `[r]Q = ∞`. The twist has a large cofactor, so points built from coordinates
    /// need this before they are trusted as pairing inputs.
    pub fn is_torsion_free(&self, group: &PairingGroup) -> bool {
        self.mul(group.order(), group).is_infinity()
    }

    /// Subgroup membership through ψ. On a BN curve `p - r = 6x²`, and a twist point is in
    /// the prime-order subgroup exactly when `ψ(Q) = [6x²]Q`
    /// (<https://eprint.iacr.org/2022/352.pdf>). The scalar is half the width of `r`,
    /// which makes this the cheap check; [`G2::is_torsion_free`] is the direct one.
    pub fn check_subgroup(&self, group: &PairingGroup) -> Result<(), GroupError> {
        // [6x²]Q as [x²]([6]Q), so no product exceeds 256 bits for any i128 parameter
        let x = U256::from_u128(group.param().unsigned_abs());
        let rhs = self
            .mul(&U256::from_u8(6), group)
            .mul(&x.wrapping_mul(&x), group);
        match self.endomorphism(group).equals(&rhs, group) {
            true => Ok(()),
            false => Err(GroupError::NotInSubgroup),
        }
    }
}
