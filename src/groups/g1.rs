//! 𝔾₁, the curve `y² = x³ + b` over 𝔽ₚ. All arithmetic is the shared Jacobian code in
//! [`GroupProjective`]; this module only ties it to the curve constant and generator held
//! by the [`PairingGroup`].

use crate::context::PairingGroup;
use crate::fields::fp::Fp;
use crate::groups::group::{GroupError, GroupProjective};
use crypto_bigint::rand_core::CryptoRngCore;
use crypto_bigint::{RandomMod, U256};

pub type G1 = GroupProjective<Fp>;

impl G1 {
    /// Builds a point from affine coordinates on the group's 𝔾₁ curve.
    pub fn new(x: Fp, y: Fp, group: &PairingGroup) -> Result<Self, GroupError> {
        Self::from_affine(x, y, group.g1_coefficient(), group)
    }

    pub fn generator(group: &PairingGroup) -> Self {
        *group.g1_generator()
    }

    /// A uniformly random element of the prime-order subgroup.
    pub fn rand<R: CryptoRngCore>(rng: &mut R, group: &PairingGroup) -> Self {
        let k = U256::random_mod(rng, group.order_nz());
        Self::generator(group).mul(&k, group)
    }

    /// `[r]P = ∞`
    pub fn is_torsion_free(&self, group: &PairingGroup) -> bool {
        self.mul(group.order(), group).is_infinity()
    }
}
