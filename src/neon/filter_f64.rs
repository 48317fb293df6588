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
use crate::mlaf::mlaf;
use crate::neon::prefer_vfmaq_f64;
use std::arch::aarch64::*;

/// Unrolled convolution for a kernel of length `M` in `1..=5`, 2 lanes at a
/// time.
pub(crate) fn filter_fixed_neon_f64<const M: usize>(dst: &mut [f64], ker: &[f64], src: &[f64]) {
    unsafe {
        filter_fixed_neon_f64_impl::<M>(dst, ker, src);
    }
}

#[inline(always)]
unsafe fn filter_fixed_neon_f64_impl<const M: usize>(dst: &mut [f64], ker: &[f64], src: &[f64]) {
    unsafe {
        let n = dst.len();
        debug_assert!((1..=5).contains(&M));
        debug_assert!(ker.len() >= M);
        debug_assert!(n == 0 || src.len() >= M + n - 1);

        let mut w = [vdupq_n_f64(0f64); M];
        for (w_v, k_v) in w.iter_mut().zip(ker.iter()) {
            *w_v = vdupq_n_f64(*k_v);
        }

        let src_ptr = src.as_ptr();
        let dst_ptr = dst.as_mut_ptr();

        let full = n - n % 2;
        let mut cx = 0usize;
        while cx < full {
            let mut acc = vmulq_f64(vld1q_f64(src_ptr.add(cx)), w[0]);
            if M > 1 {
                acc = prefer_vfmaq_f64(acc, vld1q_f64(src_ptr.add(cx + 1)), w[1]);
            }
            if M > 2 {
                acc = prefer_vfmaq_f64(acc, vld1q_f64(src_ptr.add(cx + 2)), w[2]);
            }
            if M > 3 {
                acc = prefer_vfmaq_f64(acc, vld1q_f64(src_ptr.add(cx + 3)), w[3]);
            }
            if M > 4 {
                acc = prefer_vfmaq_f64(acc, vld1q_f64(src_ptr.add(cx + 4)), w[4]);
            }
            vst1q_f64(dst_ptr.add(cx), acc);
            cx += 2;
        }

        if cx < n {
            let mut sum = *ker.get_unchecked(0) * *src.get_unchecked(cx);
            for j in 1..M {
                sum = mlaf(sum, *ker.get_unchecked(j), *src.get_unchecked(cx + j));
            }
            *dst.get_unchecked_mut(cx) = sum;
        }
    }
}
