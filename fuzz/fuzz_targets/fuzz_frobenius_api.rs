#![no_main]
use crypto_bigint::U256;
use frobenius::{CurveField, CurveParams, FieldElement, Fp12, Fp2, Fp6, Gt, PairingGroup, G2};
use lazy_static::lazy_static;
use libfuzzer_sys::fuzz_target;

lazy_static! {
    static ref GROUP: PairingGroup = {
        let mut group =
            PairingGroup::new(&CurveParams::bn254()).expect("BN254 parameters are valid");
        group
            .precompute_g2_mult()
            .expect("failed to precompute the generator table");
        group
    };
}

fn scalar(bytes: &[u8]) -> U256 {
    let mut buf = [0u8; 32];
    buf.copy_from_slice(&bytes[..32]);
    U256::from_be_slice(&buf)
}

fn fp2(group: &PairingGroup, bytes: &[u8]) -> Fp2 {
    let field = group.field();
    Fp2::new([
        field.from_uint(&scalar(&bytes[..32])),
        field.from_uint(&scalar(&bytes[32..64])),
    ])
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 192 {
        return;
    }
    let g = &*GROUP;

    // the table and double-and-add must agree on every scalar
    let k = scalar(&data[..32]);
    let fast = g.g2_mul_generator(&k).expect("table is present");
    let slow = G2::generator(g).mul(&k, g);
    assert!(fast.equals(&slow, g), "precomputed multiplication failed");

    // Fp2 inversion and batch inversion
    let a = fp2(g, &data[..64]);
    let b = fp2(g, &data[64..128]);
    if let Ok(inv) = a.inv(g) {
        assert_eq!(inv.mul(&a, g), Fp2::one(g), "Fp2 inversion failed");
    }
    match Fp2::batch_invert(&[a, b], g) {
        Ok(inverses) => {
            assert_eq!(inverses[0].mul(&a, g), Fp2::one(g));
            assert_eq!(inverses[1].mul(&b, g), Fp2::one(g));
        }
        Err(_) => assert!(a.is_zero() || b.is_zero(), "batch inversion rejected non-zero input"),
    }

    // cyclotomic arithmetic on a projected Fp12 element
    let c = fp2(g, &data[128..192]);
    let f = Fp12::new([Fp6::new([a, b, c]), Fp6::new([c, a, b])]);
    if let Ok(h) = f.to_cyclotomic(g) {
        assert!(h.is_cyclotomic(g));
        assert_eq!(h.cyclotomic_square(g), h.square(g), "cyclotomic squaring failed");
        let gt = Gt::from_fp12(h, g).expect("projection lands in the cyclotomic subgroup");
        if let Ok(packed) = gt.exp_packed(&k, g) {
            assert_eq!(packed, gt.exp(&k, g), "compressed exponentiation failed");
        }
    }
});
