/*
 * Copyright (c) Radzivon Bartoshyk. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use crate::filter_scalar::{filter_fixed_impl, filter_ref_impl};

pub(crate) type FilterLine<T> = fn(&mut [T], &[T], &[T]);

#[allow(unreachable_code)]
pub(crate) fn make_fixed_handler_f32<const M: usize>() -> FilterLine<f32> {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return crate::avx2::filter_fixed_avx_f32::<M>;
        }
    }
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            return crate::sse::filter_fixed_sse_f32::<M>;
        }
    }
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        return crate::neon::filter_fixed_neon_f32::<M>;
    }
    filter_fixed_impl::<f32, M>
}

#[allow(unreachable_code)]
pub(crate) fn make_fixed_handler_f64<const M: usize>() -> FilterLine<f64> {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return crate::avx2::filter_fixed_avx_f64::<M>;
        }
    }
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            return crate::sse::filter_fixed_sse_f64::<M>;
        }
    }
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    {
        return crate::neon::filter_fixed_neon_f64::<M>;
    }
    filter_fixed_impl::<f64, M>
}

/// Applies a compact stationary filter `dst[i] = Σ ker[k]·src[i + k]`.
///
/// Kernel lengths 1 to 5 are routed to unrolled, vectorized routines when
/// the host supports them, any other length takes the reference path.
/// `src` must hold at least `ker.len() + dst.len() - 1` values; sizes are
/// only checked by debug assertions.
///
/// Unrolled routines at lengths 4 and 5 pair partial sums, so results may
/// differ from [`filter_ref_f32`] within rounding error.
pub fn filter_f32(dst: &mut [f32], ker: &[f32], src: &[f32]) {
    match ker.len() {
        1 => make_fixed_handler_f32::<1>()(dst, ker, src),
        2 => make_fixed_handler_f32::<2>()(dst, ker, src),
        3 => make_fixed_handler_f32::<3>()(dst, ker, src),
        4 => make_fixed_handler_f32::<4>()(dst, ker, src),
        5 => make_fixed_handler_f32::<5>()(dst, ker, src),
        _ => filter_ref_impl(dst, ker, src),
    }
}

/// See [`filter_f32`].
pub fn filter_f64(dst: &mut [f64], ker: &[f64], src: &[f64]) {
    match ker.len() {
        1 => make_fixed_handler_f64::<1>()(dst, ker, src),
        2 => make_fixed_handler_f64::<2>()(dst, ker, src),
        3 => make_fixed_handler_f64::<3>()(dst, ker, src),
        4 => make_fixed_handler_f64::<4>()(dst, ker, src),
        5 => make_fixed_handler_f64::<5>()(dst, ker, src),
        _ => filter_ref_impl(dst, ker, src),
    }
}

/// Reference filter for any kernel length, strict left-to-right
/// accumulation, never vectorized.
pub fn filter_ref_f32(dst: &mut [f32], ker: &[f32], src: &[f32]) {
    filter_ref_impl(dst, ker, src);
}

/// See [`filter_ref_f32`].
pub fn filter_ref_f64(dst: &mut [f64], ker: &[f64], src: &[f64]) {
    filter_ref_impl(dst, ker, src);
}

macro_rules! fixed_size_entry {
    ($name: ident, $target: ty, $handler: ident, $size: literal) => {
        #[doc = concat!("Filter with a fixed kernel of ", stringify!($size), " tap(s); only the first ", stringify!($size), " kernel value(s) are read.")]
        pub fn $name(dst: &mut [$target], ker: &[$target], src: &[$target]) {
            $handler::<$size>()(dst, ker, src)
        }
    };
}

fixed_size_entry!(filter_x1_f32, f32, make_fixed_handler_f32, 1);
fixed_size_entry!(filter_x2_f32, f32, make_fixed_handler_f32, 2);
fixed_size_entry!(filter_x3_f32, f32, make_fixed_handler_f32, 3);
fixed_size_entry!(filter_x4_f32, f32, make_fixed_handler_f32, 4);
fixed_size_entry!(filter_x5_f32, f32, make_fixed_handler_f32, 5);
fixed_size_entry!(filter_x1_f64, f64, make_fixed_handler_f64, 1);
fixed_size_entry!(filter_x2_f64, f64, make_fixed_handler_f64, 2);
fixed_size_entry!(filter_x3_f64, f64, make_fixed_handler_f64, 3);
fixed_size_entry!(filter_x4_f64, f64, make_fixed_handler_f64, 4);
fixed_size_entry!(filter_x5_f64, f64, make_fixed_handler_f64, 5);

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_random(seed: &mut u64) -> f64 {
        *seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((*seed >> 33) as f64) / ((1u64 << 31) as f64) - 0.5
    }

    #[test]
    fn dispatch_matches_reference_f32() {
        let mut seed = 42u64;
        for m in 1usize..=8 {
            for n in [0usize, 1, 3, 4, 7, 8, 9, 16, 17, 31] {
                let ker: Vec<f32> = (0..m).map(|_| pseudo_random(&mut seed) as f32).collect();
                let src: Vec<f32> = (0..(n + m - 1).max(1))
                    .map(|_| pseudo_random(&mut seed) as f32)
                    .collect();
                let mut expected = vec![0f32; n];
                let mut received = vec![0f32; n];
                filter_ref_f32(&mut expected, &ker, &src);
                filter_f32(&mut received, &ker, &src);
                for (i, (e, r)) in expected.iter().zip(received.iter()).enumerate() {
                    assert!(
                        (e - r).abs() <= 1e-5 * (1. + e.abs()),
                        "m={m}, n={n}, i={i}: {e} vs {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn dispatch_matches_reference_f64() {
        let mut seed = 1234u64;
        for m in 1usize..=8 {
            for n in [0usize, 1, 2, 3, 5, 8, 9, 13, 16, 29] {
                let ker: Vec<f64> = (0..m).map(|_| pseudo_random(&mut seed)).collect();
                let src: Vec<f64> = (0..(n + m - 1).max(1))
                    .map(|_| pseudo_random(&mut seed))
                    .collect();
                let mut expected = vec![0f64; n];
                let mut received = vec![0f64; n];
                filter_ref_f64(&mut expected, &ker, &src);
                filter_f64(&mut received, &ker, &src);
                for (i, (e, r)) in expected.iter().zip(received.iter()).enumerate() {
                    assert!(
                        (e - r).abs() <= 1e-13 * (1. + e.abs()),
                        "m={m}, n={n}, i={i}: {e} vs {r}"
                    );
                }
            }
        }
    }

    #[test]
    fn fixed_entries_only_read_leading_taps() {
        let src = [1f32, 2., 3., 4., 5., 6.];
        let ker = [0.5f32, 0.25, 0.125, 9999., 9999.];
        let mut expected = vec![0f32; 4];
        let mut received = vec![0f32; 4];
        filter_ref_f32(&mut expected, &ker[..3], &src);
        filter_x3_f32(&mut received, &ker, &src);
        for (e, r) in expected.iter().zip(received.iter()) {
            assert!((e - r).abs() <= 1e-6);
        }
    }

    #[test]
    fn degenerate_single_sample() {
        let mut dst = [0f64];
        filter_f64(&mut dst, &[-2.5], &[4.]);
        assert_eq!(dst[0], -10.);
    }
}
