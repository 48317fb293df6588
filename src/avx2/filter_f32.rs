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
use crate::avx2::utils::MASK_LANES_F32;
use crate::avx2::_mm256_prefer_fma_ps;
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Unrolled convolution for a kernel of length `M` in `1..=5`, 8 lanes at a
/// time, the tail finished with masked loads/stores that never touch memory
/// past the destination length.
pub(crate) fn filter_fixed_avx_f32<const M: usize>(dst: &mut [f32], ker: &[f32], src: &[f32]) {
    unsafe {
        if std::arch::is_x86_feature_detected!("fma") {
            filter_fixed_avx_f32_fma::<M>(dst, ker, src);
        } else {
            filter_fixed_avx_f32_regular::<M>(dst, ker, src);
        }
    }
}

#[target_feature(enable = "avx2")]
unsafe fn filter_fixed_avx_f32_regular<const M: usize>(dst: &mut [f32], ker: &[f32], src: &[f32]) {
    unsafe {
        filter_fixed_avx_f32_impl::<M, false>(dst, ker, src);
    }
}

#[target_feature(enable = "avx2,fma")]
unsafe fn filter_fixed_avx_f32_fma<const M: usize>(dst: &mut [f32], ker: &[f32], src: &[f32]) {
    unsafe {
        filter_fixed_avx_f32_impl::<M, true>(dst, ker, src);
    }
}

#[inline(always)]
unsafe fn filter_fixed_avx_f32_impl<const M: usize, const FMA: bool>(
    dst: &mut [f32],
    ker: &[f32],
    src: &[f32],
) {
    unsafe {
        let n = dst.len();
        debug_assert!((1..=5).contains(&M));
        debug_assert!(ker.len() >= M);
        debug_assert!(n == 0 || src.len() >= M + n - 1);

        let mut w = [_mm256_setzero_ps(); M];
        for (w_v, k_v) in w.iter_mut().zip(ker.iter()) {
            *w_v = _mm256_set1_ps(*k_v);
        }

        let src_ptr = src.as_ptr();
        let dst_ptr = dst.as_mut_ptr();

        let full = n - n % 8;
        let mut cx = 0usize;
        while cx < full {
            let mut acc = _mm256_mul_ps(_mm256_loadu_ps(src_ptr.add(cx)), w[0]);
            if M > 1 {
                acc = _mm256_prefer_fma_ps::<FMA>(acc, _mm256_loadu_ps(src_ptr.add(cx + 1)), w[1]);
            }
            if M > 2 {
                acc = _mm256_prefer_fma_ps::<FMA>(acc, _mm256_loadu_ps(src_ptr.add(cx + 2)), w[2]);
            }
            if M > 3 {
                acc = _mm256_prefer_fma_ps::<FMA>(acc, _mm256_loadu_ps(src_ptr.add(cx + 3)), w[3]);
            }
            if M > 4 {
                acc = _mm256_prefer_fma_ps::<FMA>(acc, _mm256_loadu_ps(src_ptr.add(cx + 4)), w[4]);
            }
            _mm256_storeu_ps(dst_ptr.add(cx), acc);
            cx += 8;
        }

        let rem = n - full;
        if rem > 0 {
            let mask = _mm256_loadu_si256(MASK_LANES_F32[rem].as_ptr() as *const __m256i);
            let mut acc = _mm256_mul_ps(_mm256_maskload_ps(src_ptr.add(cx), mask), w[0]);
            if M > 1 {
                acc = _mm256_prefer_fma_ps::<FMA>(
                    acc,
                    _mm256_maskload_ps(src_ptr.add(cx + 1), mask),
                    w[1],
                );
            }
            if M > 2 {
                acc = _mm256_prefer_fma_ps::<FMA>(
                    acc,
                    _mm256_maskload_ps(src_ptr.add(cx + 2), mask),
                    w[2],
                );
            }
            if M > 3 {
                acc = _mm256_prefer_fma_ps::<FMA>(
                    acc,
                    _mm256_maskload_ps(src_ptr.add(cx + 3), mask),
                    w[3],
                );
            }
            if M > 4 {
                acc = _mm256_prefer_fma_ps::<FMA>(
                    acc,
                    _mm256_maskload_ps(src_ptr.add(cx + 4), mask),
                    w[4],
                );
            }
            _mm256_maskstore_ps(dst_ptr.add(cx), mask, acc);
        }
    }
}
