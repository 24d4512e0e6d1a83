use crypto_bigint::rand_core::OsRng;
use crypto_bigint::U256;
use frobenius::{CurveField, CurveParams, FieldElement, Fp12, Fp2, Gt, PairingGroup};
use tracing::{info, warn};

fn fp_example(group: &PairingGroup) {
    info!("Examples with Fp...");
    let field = group.field();
    let two = field.from_u64(2);
    let three = field.from_u64(3);
    info!("2 + 3 = {:?}", field.to_uint(&two.add(&three, group)));
    info!("2 * 3 = {:?}", field.to_uint(&two.mul(&three, group)));
    match three.inv(group) {
        Ok(third) => info!("3 * (1/3) = {:?}", field.to_uint(&third.mul(&three, group))),
        Err(e) => warn!("inversion failed: {}", e),
    }
    let ten = field.from_u64(10);
    info!("10.is_square() = {:?}", ten.is_square(group));
    info!("100.is_square() = {:?}", ten.square(group).is_square(group));
    info!("");
}

fn fp2_example(group: &PairingGroup) {
    info!("Examples with Fp2...");
    let field = group.field();
    let f = Fp2::new([field.from_u64(1), field.from_u64(1)]);
    info!("(1,1) * (1,1) = {:?}", f.square(group));
    info!("conj(1,1) = {:?}", f.conjugate(group));
    info!("norm(1,1) = {:?}", field.to_uint(&f.norm(group)));
    info!("(1,1)^3 = {:?}", f.exp(&U256::from_u64(3), group));
    info!("ξ = {:?}", group.tower().nonresidue());
    info!("");
}

fn fp12_example(group: &PairingGroup) {
    info!("Examples with Fp12...");
    let f = Fp12::rand(&mut OsRng, group);
    info!("f.frobenius_pow(12) == f: {}", f.frobenius_pow(12, group) == f);
    info!("f is cyclotomic: {}", f.is_cyclotomic(group));

    let g = Gt::rand(&mut OsRng, group);
    let e = U256::from_u64(0xc0ffee);
    let packed = g.inner().pack();
    info!("compressed g = {:?}", packed);
    match g.exp_packed(&e, group) {
        Ok(h) => info!("g^e via compressed squaring agrees: {}", h == g.exp(&e, group)),
        Err(e) => warn!("compressed exponentiation failed: {}", e),
    }
}

fn main() {
    tracing_subscriber::fmt().init();

    let group = match PairingGroup::new(&CurveParams::bn254()) {
        Ok(group) => group,
        Err(e) => {
            warn!("failed to build the BN254 context: {}", e);
            return;
        }
    };
    fp_example(&group);
    fp2_example(&group);
    fp12_example(&group);
}
