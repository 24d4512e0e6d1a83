//! Fixed-base scalar multiplication with a windowed non-adjacent-form table.
//!
//! A scalar `k` is recoded into width-`w` NAF digits `dᵢ ∈ {0, ±1, ±3, …, ±(2^(w-1) - 1)}`
//! with `k = Σ dᵢ 2ⁱ`. Digit positions are grouped into blocks of `s` bits; for block `j`
//! the table holds the odd multiples `1, 3, …, 2^(w-1) - 1` of `2^(js) G` in affine form.
//! Then
//!
//! ```text
//! kG = Σ_{t < s} 2ᵗ Σ_j d_{js + t} · (2^(js) G)
//! ```
//!
//! which Horner's rule evaluates with `s` doublings and one mixed addition per non-zero
//! digit, instead of one doubling per bit of `k`.

use crate::fields::fp::{CurveField, PrimeField};
use crate::groups::group::{GroupError, GroupProjective};
use crate::utils::u256_to_u512;
use crypto_bigint::U256;

/// Default window width
pub const DEFAULT_WINDOW: usize = 4;
/// Default number of digit positions per block
pub const DEFAULT_BLOCK_SIZE: usize = 8;
// a NAF is at most one digit longer than the binary expansion
const MAX_DIGITS: usize = U256::BITS as usize + 1;

#[derive(Clone, Debug)]
pub struct PrecomputedTable<F: CurveField> {
    window: usize,
    block_size: usize,
    num_blocks: usize,
    // block-major, 2^(window - 2) entries per block
    points: Vec<GroupProjective<F>>,
}

impl<F: CurveField> PrecomputedTable<F> {
    /// Precomputes the table for `base` covering scalars below `2^256`.
    ///
    /// # Errors
    /// [`GroupError::PointAtInfinity`] for the point at infinity,
    /// [`GroupError::InvalidWindow`] unless `2 <= window <= 8`, and
    /// [`GroupError::InvalidBlockSize`] unless `1 <= block_size <= 257`, the NAF length of a
    /// 256-bit scalar.
    pub fn new<C: AsRef<PrimeField>>(
        base: &GroupProjective<F>,
        window: usize,
        block_size: usize,
        ctx: &C,
    ) -> Result<Self, GroupError> {
        if !(2..=8).contains(&window) {
            return Err(GroupError::InvalidWindow(window));
        }
        if !(1..=MAX_DIGITS).contains(&block_size) {
            return Err(GroupError::InvalidBlockSize(block_size));
        }
        if base.is_infinity() {
            return Err(GroupError::PointAtInfinity);
        }
        let num_blocks = MAX_DIGITS.div_ceil(block_size);
        let per_block = 1 << (window - 2);

        let mut points = Vec::with_capacity(num_blocks * per_block);
        let mut block_base = *base;
        for block in 0..num_blocks {
            let twice = block_base.double(ctx);
            let mut odd = block_base;
            points.push(odd);
            for _ in 1..per_block {
                odd = odd.add(&twice, ctx);
                points.push(odd);
            }
            if block + 1 < num_blocks {
                for _ in 0..block_size {
                    block_base = block_base.double(ctx);
                }
            }
        }
        let points = GroupProjective::batch_normalize(&points, ctx)?;
        tracing::debug!(window, block_size, num_blocks, len = points.len(), "PrecomputedTable::new");
        Ok(Self {
            window,
            block_size,
            num_blocks,
            points,
        })
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of precomputed points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The precomputed base point of the table, `G`.
    pub fn base(&self) -> Option<&GroupProjective<F>> {
        self.points.first()
    }

    /// Computes `scalar · G`.
    pub fn mul<C: AsRef<PrimeField>>(&self, scalar: &U256, ctx: &C) -> GroupProjective<F> {
        let digits = wnaf_form(scalar, self.window);
        let per_block = 1 << (self.window - 2);
        let mut acc = GroupProjective::infinity(ctx);
        for t in (0..self.block_size).rev() {
            acc = acc.double(ctx);
            for j in 0..self.num_blocks {
                let Some(&d) = digits.get(j * self.block_size + t) else {
                    break;
                };
                if d == 0 {
                    continue;
                }
                let p = &self.points[j * per_block + (d.unsigned_abs() as usize - 1) / 2];
                acc = match d > 0 {
                    true => acc.add(p, ctx),
                    false => acc.add(&p.neg(ctx), ctx),
                };
            }
        }
        acc
    }
}

/// Recodes `scalar` into width-`window` NAF digits, least significant first, with trailing
/// zeros removed. Every non-zero digit is odd and below `2^(window-1)` in absolute value,
/// and any `window` consecutive digits contain at most one non-zero digit.
pub(crate) fn wnaf_form(scalar: &U256, window: usize) -> Vec<i64> {
    // read through a wider integer so windows past the top bit stay in range
    let wide = u256_to_u512(scalar);
    let width = 1i64 << window;
    let bit_len = scalar.bits_vartime();

    let mut wnaf = Vec::with_capacity(bit_len as usize + window);
    let mut carry = 0i64;
    let mut pos = 0u32;
    while pos < bit_len || carry != 0 {
        let bits = (0..window as u32).fold(0i64, |acc, j| {
            acc | ((wide.bit_vartime(pos + j) as i64) << j)
        });
        let window_val = carry + bits;
        if window_val & 1 == 0 {
            // an even window means the digit here is zero, so just shift
            wnaf.push(0);
            pos += 1;
        } else {
            wnaf.push(if window_val < width / 2 {
                carry = 0;
                window_val
            } else {
                carry = 1;
                window_val - width
            });
            wnaf.extend(std::iter::repeat(0).take(window - 1));
            pos += window as u32;
        }
    }
    while wnaf.last() == Some(&0) {
        wnaf.pop();
    }
    wnaf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::rand_core::{OsRng, RngCore};
    use crypto_bigint::Random;

    fn evaluate(digits: &[i64]) -> i128 {
        digits
            .iter()
            .rev()
            .fold(0i128, |acc, d| acc * 2 + *d as i128)
    }

    #[test]
    fn test_wnaf_small_values() {
        assert!(wnaf_form(&U256::ZERO, 4).is_empty());
        assert_eq!(wnaf_form(&U256::ONE, 4), vec![1]);
        // 7 = 8 - 1 in width 3
        assert_eq!(wnaf_form(&U256::from_u64(7), 3), vec![-1, 0, 0, 1]);
        for k in 0u64..2000 {
            for w in 2..=6 {
                let digits = wnaf_form(&U256::from_u64(k), w);
                assert_eq!(evaluate(&digits), k as i128, "wNAF of {} with w = {}", k, w);
            }
        }
    }

    // digit-at-a-time recoding: take the signed residue mod 2^w whenever k is odd
    fn reference_wnaf(mut k: i128, window: usize) -> Vec<i64> {
        let radix = 1i128 << window;
        let mut digits = Vec::new();
        while k != 0 {
            let mut digit = 0;
            if k & 1 == 1 {
                digit = k.rem_euclid(radix);
                if digit > radix / 2 {
                    digit -= radix;
                }
                k -= digit;
            }
            digits.push(digit as i64);
            k >>= 1;
        }
        digits
    }

    #[test]
    fn test_wnaf_matches_reference_recoding() {
        for w in 2..=8 {
            for k in (0u64..500).chain([u64::MAX, 0xdead_beef_f00d, 1 << 63]) {
                assert_eq!(
                    wnaf_form(&U256::from_u64(k), w),
                    reference_wnaf(k as i128, w),
                    "wNAF of {} with w = {}",
                    k,
                    w
                );
            }
            let k = ((OsRng.next_u64() as u128) << 64 | OsRng.next_u64() as u128) >> 2;
            assert_eq!(wnaf_form(&U256::from_u128(k), w), reference_wnaf(k as i128, w));
        }
    }

    #[test]
    fn test_wnaf_shape() {
        let w = 5;
        let k = U256::random(&mut OsRng);
        let digits = wnaf_form(&k, w);
        assert!(digits.len() <= U256::BITS as usize + 1);
        for (i, d) in digits.iter().enumerate() {
            if *d != 0 {
                assert_eq!(d & 1, 1, "digit {} is even", d);
                assert!(d.abs() < 1 << (w - 1));
                for next in digits.iter().skip(i + 1).take(w - 1) {
                    assert_eq!(*next, 0, "non-zero digits are too close");
                }
            }
        }
    }

    #[test]
    fn test_wnaf_top_bit() {
        let k = U256::MAX;
        let digits = wnaf_form(&k, 4);
        // 2^256 - 1 = 2^256 - 1·2^0
        assert_eq!(digits.len(), 257);
        assert_eq!(digits[0], -1);
        assert_eq!(digits[256], 1);
        assert!(digits[1..256].iter().all(|d| *d == 0));
    }
}
