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

/// Copy `len` consecutive contiguous values from `src` to `dst`.
#[inline]
pub fn copy_contiguous<T: Copy>(len: usize, dst: &mut [T], src: &[T]) {
    dst[..len].copy_from_slice(&src[..len]);
}

/// Copy `len` values between two strided lines of the same buffer, the
/// shared stride being `inc`. The lines start at `dst_start` and
/// `src_start` and must not overlap.
#[inline]
pub fn copy_strided_within<T: Copy>(
    len: usize,
    inc: usize,
    buf: &mut [T],
    dst_start: usize,
    src_start: usize,
) {
    debug_assert!(inc >= 1);
    debug_assert!(dst_start != src_start || len == 0);
    if len == 0 {
        return;
    }
    debug_assert!(buf.len() > (len - 1) * inc + dst_start.max(src_start));
    for i in 0..len {
        let j = i * inc;
        buf[dst_start + j] = buf[src_start + j];
    }
}

/// Gather `len` values with stride `inc` from `src` into contiguous `dst`.
#[inline]
pub fn load_strided<T: Copy>(len: usize, dst: &mut [T], src: &[T], inc: usize) {
    debug_assert!(inc >= 1);
    debug_assert!(len == 0 || src.len() > (len - 1) * inc);
    for (dst_v, src_v) in dst[..len].iter_mut().zip(src.iter().step_by(inc)) {
        *dst_v = *src_v;
    }
}

/// Scatter `len` contiguous values from `src` into `dst` with stride `inc`.
#[inline]
pub fn store_strided<T: Copy>(len: usize, dst: &mut [T], inc: usize, src: &[T]) {
    debug_assert!(inc >= 1);
    debug_assert!(len == 0 || dst.len() > (len - 1) * inc);
    for (dst_v, src_v) in dst.iter_mut().step_by(inc).zip(src[..len].iter()) {
        *dst_v = *src_v;
    }
}

/// Load `m` contiguous values from a logical source of `n` valid elements at
/// index offset `k`, assuming *flat* boundary conditions:
///
/// `dst[i] = src[clamp(i + k, 0, n - 1)]` for `i` in `0..m`
///
/// Indices below zero repeat the first element, indices at or past `n`
/// repeat the last one, the interior is a shifted copy. `n` must be at
/// least 1.
pub fn load_contiguous_flat<T: Copy>(m: usize, dst: &mut [T], n: usize, src: &[T], k: isize) {
    debug_assert!(n >= 1);
    debug_assert!(dst.len() >= m);
    debug_assert!(src.len() >= n);
    let i1 = (-k).clamp(0, m as isize) as usize;
    let i2 = (n as isize - k).clamp(i1 as isize, m as isize) as usize;
    if i1 > 0 {
        dst[..i1].fill(src[0]);
    }
    if i2 > i1 {
        let j0 = (i1 as isize + k) as usize;
        dst[i1..i2].copy_from_slice(&src[j0..j0 + (i2 - i1)]);
    }
    if i2 < m {
        dst[i2..m].fill(src[n - 1]);
    }
}

/// Strided counterpart of [`load_contiguous_flat`]: the logical source has
/// `n` valid elements spaced `s` apart, the destination is contiguous.
pub fn load_strided_flat<T: Copy>(
    m: usize,
    dst: &mut [T],
    n: usize,
    src: &[T],
    k: isize,
    s: usize,
) {
    debug_assert!(n >= 1);
    debug_assert!(s >= 1);
    debug_assert!(dst.len() >= m);
    debug_assert!(src.len() > (n - 1) * s);
    let i1 = (-k).clamp(0, m as isize) as usize;
    let i2 = (n as isize - k).clamp(i1 as isize, m as isize) as usize;
    if i1 > 0 {
        dst[..i1].fill(src[0]);
    }
    if i2 > i1 {
        let base = (i1 as isize + k) as usize;
        for (i, dst_v) in dst[i1..i2].iter_mut().enumerate() {
            *dst_v = src[(base + i) * s];
        }
    }
    if i2 < m {
        dst[i2..m].fill(src[(n - 1) * s]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_load_clamps_left_edge() {
        let x = [1f32, 2., 3., 4., 5.];
        let mut y = [0f32; 4];
        load_contiguous_flat(4, &mut y, 5, &x, -2);
        assert_eq!(y, [1., 1., 2., 3.]);
    }

    #[test]
    fn flat_load_clamps_right_edge() {
        let x = [1f32, 2., 3., 4., 5.];
        let mut y = [0f32; 4];
        load_contiguous_flat(4, &mut y, 5, &x, 3);
        assert_eq!(y, [4., 5., 5., 5.]);
    }

    #[test]
    fn flat_load_fully_outside() {
        let x = [7f64, 8., 9.];
        let mut y = [0f64; 3];
        load_contiguous_flat(3, &mut y, 3, &x, -10);
        assert_eq!(y, [7., 7., 7.]);
        load_contiguous_flat(3, &mut y, 3, &x, 10);
        assert_eq!(y, [9., 9., 9.]);
    }

    #[test]
    fn flat_load_interior_is_shifted_copy() {
        let x = [1f32, 2., 3., 4., 5., 6.];
        let mut y = [0f32; 3];
        load_contiguous_flat(3, &mut y, 6, &x, 2);
        assert_eq!(y, [3., 4., 5.]);
    }

    #[test]
    fn strided_flat_load_matches_contiguous_on_gathered_line() {
        let stride = 4usize;
        let n = 5usize;
        let mut plane = vec![0f32; n * stride];
        for (i, chunk) in plane.chunks_exact_mut(stride).enumerate() {
            chunk[1] = (i + 1) as f32;
        }
        let line = [1f32, 2., 3., 4., 5.];
        for k in -3isize..=7 {
            let mut strided = [0f32; 6];
            let mut contiguous = [0f32; 6];
            load_strided_flat(6, &mut strided, n, &plane[1..], k, stride);
            load_contiguous_flat(6, &mut contiguous, n, &line, k);
            assert_eq!(strided, contiguous, "offset {k}");
        }
    }

    #[test]
    fn strided_store_then_load_preserves_values() {
        let values = [1f64, 2., 3., 4.];
        let mut plane = [0f64; 12];
        store_strided(4, &mut plane, 3, &values);
        let mut back = [0f64; 4];
        load_strided(4, &mut back, &plane, 3);
        assert_eq!(back, values);
        assert_eq!(plane[1], 0.);
        assert_eq!(plane[2], 0.);
    }

    #[test]
    fn copy_strided_within_duplicates_line() {
        let mut plane = vec![0f32; 12];
        for (i, v) in plane.iter_mut().enumerate() {
            *v = i as f32;
        }
        // duplicate column 1 into column 2 of a 3x4 column-major plane
        copy_strided_within(4, 3, &mut plane, 2, 1);
        for j in 0..4 {
            assert_eq!(plane[2 + j * 3], plane[1 + j * 3]);
        }
    }
}
