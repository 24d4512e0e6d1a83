use criterion::{criterion_group, criterion_main};

use group::g1::*;
use group::g2::*;
use group::precomp::*;

use field::fp::*;
use field::fp12::*;
use field::fp2::*;
use field::fp6::*;

criterion_group!(
    g1_benches,
    test_g1_generation,
    test_g1_addition,
    test_g1_multiplication,
    test_g1_normalization
);
criterion_group!(
    g2_benches,
    test_g2_generation,
    test_g2_addition,
    test_g2_multiplication,
    test_g2_endomorphism
);
criterion_group!(
    precomp_benches,
    test_g2_precomputation,
    test_g2_precomputed_multiplication,
    test_g2_batch_normalization
);

criterion_group!(
    fp_benches,
    test_fp_multiplication,
    test_fp_addition,
    test_fp_inversion,
    test_fp_batch_inversion,
    test_fp_random
);
criterion_group!(
    fp2_benches,
    test_fp2_multiplication,
    test_fp2_squaring,
    test_fp2_inversion,
    test_fp2_random
);
criterion_group!(
    fp6_benches,
    test_fp6_multiplication,
    test_fp6_sparse_multiplication,
    test_fp6_squaring,
    test_fp6_inversion
);
criterion_group!(
    fp12_benches,
    test_fp12_multiplication,
    test_fp12_squaring,
    test_fp12_cyclotomic_squaring,
    test_fp12_frobenius,
    test_fp12_exponentiation,
    test_fp12_packed_exponentiation
);

criterion_main!(
    g1_benches,
    g2_benches,
    precomp_benches,
    fp_benches,
    fp2_benches,
    fp6_benches,
    fp12_benches
);
