use crypto_bigint::rand_core::OsRng;
use crypto_bigint::{Random, U256};
use frobenius::{CurveParams, PairingGroup, G2};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().init();
    info!("Begin precomputation demo");

    let config_path = PathBuf::from("demos/bn254.toml");
    let params: CurveParams = confy::load_path(config_path)?;
    debug!("Loaded curve parameters: {:?}", params);

    let mut group = PairingGroup::new(&params)?;
    let start = Instant::now();
    group.precompute_g2_mult()?;
    info!(
        "Built table for {} in {:?}",
        group.name(),
        start.elapsed()
    );

    let generator = G2::generator(&group);
    for round in 0..4 {
        let k = U256::random(&mut OsRng);

        let start = Instant::now();
        let fast = group.g2_mul_generator(&k)?;
        let fast_time = start.elapsed();

        let start = Instant::now();
        let slow = generator.mul(&k, &group);
        let slow_time = start.elapsed();

        if fast.equals(&slow, &group) {
            info!(
                "Round {}: table {:?}, double-and-add {:?}",
                round, fast_time, slow_time
            );
        } else {
            error!("Round {}: precomputed result disagrees", round);
        }
    }

    info!("Precomputation demo completed");
    Ok(())
}
