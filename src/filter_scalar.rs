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
use num_traits::MulAdd;
use std::ops::{Add, Mul};

/// Reference convolution `dst[i] = Σ ker[k]·src[i + k]` for any kernel
/// length, accumulating strictly left to right in working precision.
///
/// `src` must hold at least `ker.len() + dst.len() - 1` values.
pub(crate) fn filter_ref_impl<V>(dst: &mut [V], ker: &[V], src: &[V])
where
    V: Copy + Default + Mul<Output = V> + Add<Output = V>,
{
    let m = ker.len();
    debug_assert!(m >= 1);
    debug_assert!(dst.is_empty() || src.len() >= m + dst.len() - 1);
    for (dst_v, window) in dst.iter_mut().zip(src.windows(m)) {
        let mut sum = V::default();
        for (&w, &s) in ker.iter().zip(window.iter()) {
            sum = sum + w * s;
        }
        *dst_v = sum;
    }
}

/// Unrolled convolution for a kernel of compile-time length `M` in `1..=5`.
///
/// Sizes 4 and 5 pair terms as `((t0 + t1) + (t2 + t3)) + t4`, so results
/// may differ from [`filter_ref_impl`] by rounding only.
pub(crate) fn filter_fixed_impl<V, const M: usize>(dst: &mut [V], ker: &[V], src: &[V])
where
    V: Copy + Default + Mul<Output = V> + Add<Output = V> + MulAdd<V, Output = V> + 'static,
{
    debug_assert!((1..=5).contains(&M));
    debug_assert!(ker.len() >= M);
    debug_assert!(dst.is_empty() || src.len() >= M + dst.len() - 1);
    let w = &ker[..M];
    for (dst_v, s) in dst.iter_mut().zip(src.windows(M)) {
        *dst_v = match M {
            1 => w[0] * s[0],
            2 => mlaf(w[0] * s[0], w[1], s[1]),
            3 => mlaf(mlaf(w[0] * s[0], w[1], s[1]), w[2], s[2]),
            4 => (w[0] * s[0] + w[1] * s[1]) + (w[2] * s[2] + w[3] * s[3]),
            _ => (w[0] * s[0] + w[1] * s[1]) + (w[2] * s[2] + w[3] * s[3]) + w[4] * s[4],
        };
    }
}
