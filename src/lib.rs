//! # Frobenius: Pairing Group Arithmetic over Runtime Parameters
//!
//! Frobenius implements the algebra underneath a pairing-friendly curve: the extension
//! field tower 𝔽ₚ² ⊂ 𝔽ₚ⁶ ⊂ 𝔽ₚ¹², the groups 𝔾₁, 𝔾₂ and 𝔾ₜ, and fixed-base scalar
//! multiplication in 𝔾₂ through a precomputed windowed-NAF table. Curve parameters are
//! data rather than code, so one build serves any BN-style curve whose base field satisfies
//! `p ≡ 3 (mod 4)` and `p ≡ 1 (mod 6)`. BN254 ships as the default.
//!
//! ## Quick Start
//!
//! Add Frobenius to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! frobenius = "0.1.0"
//! ```
//!
//! ## Key Features
//!
//! - Montgomery-form prime field arithmetic backed by `crypto-bigint`
//! - Extension fields (𝔽ₚ², 𝔽ₚ⁶, 𝔽ₚ¹²) with Frobenius maps derived from the non-residue
//! - Cyclotomic squaring, Karabina compression and batched decompression in 𝔽ₚ¹²
//! - Jacobian arithmetic shared by 𝔾₁ and 𝔾₂, with batch normalization
//! - Precomputed fixed-base multiplication of the 𝔾₂ generator
//!
//! ## Basic Usage
//!
//! ```rust
//! use frobenius::{CurveParams, PairingGroup, G2};
//! use crypto_bigint::U256;
//!
//! let mut group = PairingGroup::new(&CurveParams::bn254()).expect("valid parameters");
//! group.precompute_g2_mult().expect("table construction failed");
//!
//! let k = U256::from_u64(0xdead_beef);
//! let fast = group.g2_mul_generator(&k).expect("table is present");
//! let slow = G2::generator(&group).mul(&k, &group);
//! assert!(fast.equals(&slow, &group));
//! ```
//!
//! ## Core Components
//!
//! - [`PrimeField`], [`Tower`]: runtime field descriptions every operation is handed
//! - [`Fp`], [`Fp2`], [`Fp6`], [`Fp12`], [`PackedFp12`]: field elements
//! - [`G1`], [`G2`], [`Gt`]: group elements
//! - [`PrecomputedTable`]: fixed-base scalar multiplication
//! - [`PairingGroup`], [`CurveParams`]: the assembled context and its serializable description

mod context;
mod fields;
mod groups;
pub(crate) mod utils;

pub use crate::context::{CurveParams, G2PreComputed, PairingGroup};
pub use crate::fields::extensions::FieldExtension;
pub use crate::fields::fp::{CurveField, FieldElement, FieldError, Fp, PrimeField};
pub use crate::fields::fp12::{Fp12, PackedFp12};
pub use crate::fields::fp2::Fp2;
pub use crate::fields::fp6::Fp6;
pub use crate::fields::tower::Tower;
pub use crate::groups::g1::G1;
pub use crate::groups::g2::G2;
pub use crate::groups::group::{GroupError, GroupProjective};
pub use crate::groups::gt::Gt;
pub use crate::groups::precomp::{PrecomputedTable, DEFAULT_BLOCK_SIZE, DEFAULT_WINDOW};

#[cfg(test)]
pub(crate) mod test_support {
    use crate::context::{CurveParams, PairingGroup};
    use lazy_static::lazy_static;

    lazy_static! {
        pub(crate) static ref BN254: PairingGroup =
            PairingGroup::new(&CurveParams::bn254()).expect("BN254 parameters are valid");
    }
}
