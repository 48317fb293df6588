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
use crate::filter::{filter_f32, filter_f64, filter_ref_f32, filter_ref_f64};
use crate::movers::{
    copy_contiguous, copy_strided_within, load_contiguous_flat, load_strided_flat, store_strided,
};

/// Axis of a column-major 2D array along which a separable pass runs.
///
/// Element `(i1, i2)` of a `len1 × len2` array lives at offset
/// `i1 + len1·i2`, so [`Axis::Leading`] filters inside contiguous columns
/// and [`Axis::Trailing`] filters across them with stride `len1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Leading,
    Trailing,
}

#[inline(always)]
fn filter_2d_exec<V, F>(
    axis: Axis,
    dst: &mut [V],
    dst_len1: usize,
    dst_len2: usize,
    ker: &[V],
    src: &[V],
    src_len1: usize,
    src_len2: usize,
    k1: isize,
    k2: isize,
    wrk1: &mut [V],
    wrk2: &mut [V],
    line_filter: F,
    reuse_previous_line: bool,
) where
    V: Copy,
    F: Fn(&mut [V], &[V], &[V]),
{
    let ker_len = ker.len();
    debug_assert!(ker_len >= 1);
    debug_assert!(src_len1 >= 1 && src_len2 >= 1);
    debug_assert!(dst.len() >= dst_len1 * dst_len2);
    debug_assert!(src.len() >= src_len1 * src_len2);
    match axis {
        Axis::Leading => {
            let wrk_len = dst_len1 + ker_len - 1;
            debug_assert!(wrk1.len() >= wrk_len);
            let mut previous: Option<usize> = None;
            for dst_i2 in 0..dst_len2 {
                let src_i2 = (dst_i2 as isize + k2).clamp(0, src_len2 as isize - 1) as usize;
                let dst_offset = dst_len1 * dst_i2;
                if reuse_previous_line && previous == Some(src_i2) {
                    let (head, tail) = dst.split_at_mut(dst_offset);
                    copy_contiguous(dst_len1, tail, &head[dst_offset - dst_len1..]);
                } else {
                    let src_offset = src_len1 * src_i2;
                    load_contiguous_flat(
                        wrk_len,
                        wrk1,
                        src_len1,
                        &src[src_offset..src_offset + src_len1],
                        k1,
                    );
                    line_filter(
                        &mut dst[dst_offset..dst_offset + dst_len1],
                        ker,
                        &wrk1[..wrk_len],
                    );
                    previous = Some(src_i2);
                }
            }
        }
        Axis::Trailing => {
            let wrk_len = dst_len2 + ker_len - 1;
            debug_assert!(wrk1.len() >= wrk_len);
            debug_assert!(wrk2.len() >= dst_len2);
            let mut previous: Option<usize> = None;
            for dst_i1 in 0..dst_len1 {
                let src_i1 = (dst_i1 as isize + k1).clamp(0, src_len1 as isize - 1) as usize;
                if reuse_previous_line && previous == Some(src_i1) {
                    copy_strided_within(dst_len2, dst_len1, dst, dst_i1, dst_i1 - 1);
                } else {
                    load_strided_flat(wrk_len, wrk1, src_len2, &src[src_i1..], k2, src_len1);
                    line_filter(&mut wrk2[..dst_len2], ker, &wrk1[..wrk_len]);
                    store_strided(dst_len2, &mut dst[dst_i1..], dst_len1, &wrk2[..dst_len2]);
                    previous = Some(src_i1);
                }
            }
        }
    }
}

/// Filters one axis of a column-major `src_len1 × src_len2` array into a
/// `dst_len1 × dst_len2` destination with per-axis offsets `(k1, k2)` and
/// flat boundary extension.
///
/// Under flat boundaries every out-of-range line collapses onto an edge
/// line, so consecutive destination lines that clamp to the same source
/// line are forwarded with a plain copy instead of being recomputed.
///
/// `wrk1` needs `dst_len1 + ker.len() - 1` values for [`Axis::Leading`],
/// `dst_len2 + ker.len() - 1` for [`Axis::Trailing`]; `wrk2` needs
/// `dst_len2` values for [`Axis::Trailing`] and is untouched otherwise.
/// Sizes are only checked by debug assertions.
pub fn filter_2d_f32(
    axis: Axis,
    dst: &mut [f32],
    dst_len1: usize,
    dst_len2: usize,
    ker: &[f32],
    src: &[f32],
    src_len1: usize,
    src_len2: usize,
    k1: isize,
    k2: isize,
    wrk1: &mut [f32],
    wrk2: &mut [f32],
) {
    filter_2d_exec(
        axis, dst, dst_len1, dst_len2, ker, src, src_len1, src_len2, k1, k2, wrk1, wrk2,
        filter_f32, true,
    );
}

/// See [`filter_2d_f32`].
pub fn filter_2d_f64(
    axis: Axis,
    dst: &mut [f64],
    dst_len1: usize,
    dst_len2: usize,
    ker: &[f64],
    src: &[f64],
    src_len1: usize,
    src_len2: usize,
    k1: isize,
    k2: isize,
    wrk1: &mut [f64],
    wrk2: &mut [f64],
) {
    filter_2d_exec(
        axis, dst, dst_len1, dst_len2, ker, src, src_len1, src_len2, k1, k2, wrk1, wrk2,
        filter_f64, true,
    );
}

/// Reference counterpart of [`filter_2d_f32`]: identical contract and
/// workspace sizing, no duplicate-line forwarding, no vectorization.
pub fn filter_2d_ref_f32(
    axis: Axis,
    dst: &mut [f32],
    dst_len1: usize,
    dst_len2: usize,
    ker: &[f32],
    src: &[f32],
    src_len1: usize,
    src_len2: usize,
    k1: isize,
    k2: isize,
    wrk1: &mut [f32],
    wrk2: &mut [f32],
) {
    filter_2d_exec(
        axis, dst, dst_len1, dst_len2, ker, src, src_len1, src_len2, k1, k2, wrk1, wrk2,
        filter_ref_f32, false,
    );
}

/// See [`filter_2d_ref_f32`].
pub fn filter_2d_ref_f64(
    axis: Axis,
    dst: &mut [f64],
    dst_len1: usize,
    dst_len2: usize,
    ker: &[f64],
    src: &[f64],
    src_len1: usize,
    src_len2: usize,
    k1: isize,
    k2: isize,
    wrk1: &mut [f64],
    wrk2: &mut [f64],
) {
    filter_2d_exec(
        axis, dst, dst_len1, dst_len2, ker, src, src_len1, src_len2, k1, k2, wrk1, wrk2,
        filter_ref_f64, false,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_random(seed: &mut u64) -> f64 {
        *seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((*seed >> 33) as f64) / ((1u64 << 31) as f64) - 0.5
    }

    fn make_plane_f32(len1: usize, len2: usize, seed: u64) -> Vec<f32> {
        let mut seed = seed;
        (0..len1 * len2)
            .map(|_| pseudo_random(&mut seed) as f32)
            .collect()
    }

    fn run_case_f32(
        axis: Axis,
        (dst_len1, dst_len2): (usize, usize),
        (src_len1, src_len2): (usize, usize),
        ker: &[f32],
        k1: isize,
        k2: isize,
        seed: u64,
    ) {
        let src = make_plane_f32(src_len1, src_len2, seed);
        let wrk_len = dst_len1.max(dst_len2) + ker.len() - 1;
        let mut expected = vec![0f32; dst_len1 * dst_len2];
        let mut received = vec![0f32; dst_len1 * dst_len2];
        let mut wrk1 = vec![0f32; wrk_len];
        let mut wrk2 = vec![0f32; dst_len2];
        filter_2d_ref_f32(
            axis,
            &mut expected,
            dst_len1,
            dst_len2,
            ker,
            &src,
            src_len1,
            src_len2,
            k1,
            k2,
            &mut wrk1,
            &mut wrk2,
        );
        filter_2d_f32(
            axis,
            &mut received,
            dst_len1,
            dst_len2,
            ker,
            &src,
            src_len1,
            src_len2,
            k1,
            k2,
            &mut wrk1,
            &mut wrk2,
        );
        for (i, (e, r)) in expected.iter().zip(received.iter()).enumerate() {
            assert!(
                (e - r).abs() <= 1e-5 * (1. + e.abs()),
                "axis {axis:?}, offsets ({k1}, {k2}), index {i}: {e} vs {r}"
            );
        }
    }

    #[test]
    fn optimized_matches_reference_over_offsets_f32() {
        let ker = [0.25f32, 0.5, 0.125, 0.0625, 0.0625];
        for axis in [Axis::Leading, Axis::Trailing] {
            for taps in 1..=5usize {
                for k2 in [-7isize, -2, -1, 0, 1, 3, 9] {
                    run_case_f32(axis, (5, 6), (5, 6), &ker[..taps], -1, k2, 77);
                }
                for k1 in [-6isize, -1, 0, 2, 8] {
                    run_case_f32(axis, (5, 6), (5, 6), &ker[..taps], k1, 1, 78);
                }
            }
        }
    }

    #[test]
    fn optimized_matches_reference_with_resized_extents() {
        let ker = [0.2f32, 0.6, 0.2];
        for axis in [Axis::Leading, Axis::Trailing] {
            run_case_f32(axis, (4, 9), (6, 5), &ker, -1, -2, 101);
            run_case_f32(axis, (7, 3), (3, 8), &ker, 0, 4, 102);
        }
    }

    #[test]
    fn optimized_matches_reference_f64() {
        let mut seed = 5u64;
        let src: Vec<f64> = (0..30).map(|_| pseudo_random(&mut seed)).collect();
        let ker = [0.25f64, 0.5, 0.25];
        for axis in [Axis::Leading, Axis::Trailing] {
            let mut expected = vec![0f64; 30];
            let mut received = vec![0f64; 30];
            let mut wrk1 = vec![0f64; 8 + ker.len() - 1];
            let mut wrk2 = vec![0f64; 6];
            filter_2d_ref_f64(
                axis,
                &mut expected,
                5,
                6,
                &ker,
                &src,
                5,
                6,
                -1,
                -1,
                &mut wrk1,
                &mut wrk2,
            );
            filter_2d_f64(
                axis,
                &mut received,
                5,
                6,
                &ker,
                &src,
                5,
                6,
                -1,
                -1,
                &mut wrk1,
                &mut wrk2,
            );
            for (e, r) in expected.iter().zip(received.iter()) {
                assert!((e - r).abs() <= 1e-13 * (1. + e.abs()));
            }
        }
    }

    #[test]
    fn disabled_line_reuse_is_bit_identical() {
        let ker = [0.3f32, 0.4, 0.2, 0.1];
        let src = make_plane_f32(4, 5, 9);
        for axis in [Axis::Leading, Axis::Trailing] {
            for (k1, k2) in [(-3isize, -4isize), (0, 0), (2, 6), (-1, 3)] {
                let mut cached = vec![0f32; 4 * 8];
                let mut plain = vec![0f32; 4 * 8];
                let mut wrk1 = vec![0f32; 8 + ker.len() - 1];
                let mut wrk2 = vec![0f32; 8];
                filter_2d_f32(
                    axis,
                    &mut cached,
                    4,
                    8,
                    &ker,
                    &src,
                    4,
                    5,
                    k1,
                    k2,
                    &mut wrk1,
                    &mut wrk2,
                );
                filter_2d_exec(
                    axis,
                    &mut plain[..],
                    4,
                    8,
                    &ker,
                    &src,
                    4,
                    5,
                    k1,
                    k2,
                    &mut wrk1,
                    &mut wrk2,
                    crate::filter::filter_f32,
                    false,
                );
                for (c, p) in cached.iter().zip(plain.iter()) {
                    assert_eq!(c.to_bits(), p.to_bits());
                }
            }
        }
    }

    #[test]
    fn wide_destination_clamps_to_edge_lines() {
        // a 1-tap identity kernel turns the driver into pure flat sampling
        let src = [1f32, 2., 3., 4., 5., 6.];
        let mut dst = vec![0f32; 2 * 7];
        let mut wrk1 = vec![0f32; 8];
        let mut wrk2 = vec![0f32; 7];
        filter_2d_f32(
            Axis::Leading,
            &mut dst,
            2,
            7,
            &[1.0],
            &src,
            2,
            3,
            0,
            -2,
            &mut wrk1,
            &mut wrk2,
        );
        let expected = [1f32, 2., 1., 2., 1., 2., 3., 4., 5., 6., 5., 6., 5., 6.];
        assert_eq!(dst, expected);
    }
}
