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
use crate::filter_2d::{Axis, filter_2d_f32, filter_2d_f64};
use std::error::Error;
use std::fmt::Display;

/// Dimensions of a column-major 2D plane, `len1` being the fastest-varying
/// extent.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PlaneSize {
    pub len1: usize,
    pub len2: usize,
}

impl PlaneSize {
    pub fn new(len1: usize, len2: usize) -> Self {
        Self { len1, len2 }
    }

    /// Total number of elements in the plane.
    pub fn elements(&self) -> usize {
        self.len1 * self.len2
    }
}

/// Buffer mismatch error description
#[derive(Copy, Clone, Debug)]
pub struct SepConvBufferMismatch {
    pub expected: usize,
    pub len1: usize,
    pub len2: usize,
    pub slice_len: usize,
}

/// Error enumeration type
#[derive(Debug)]
pub enum SepConvError {
    ZeroPlaneDimensions,
    EmptyKernel,
    BufferMismatch(SepConvBufferMismatch),
}

impl Display for SepConvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SepConvError::ZeroPlaneDimensions => {
                f.write_str("One of plane dimensions is 0, this should not happen")
            }
            SepConvError::EmptyKernel => {
                f.write_str("Filter kernel must have at least one coefficient")
            }
            SepConvError::BufferMismatch(buffer_mismatch) => f.write_fmt(format_args!(
                "Plane buffer len expected to be {} [len1({})*len2({})] but received {}",
                buffer_mismatch.expected,
                buffer_mismatch.len1,
                buffer_mismatch.len2,
                buffer_mismatch.slice_len,
            )),
        }
    }
}

impl Error for SepConvError {}

fn check_plane(len: usize, size: PlaneSize) -> Result<(), SepConvError> {
    if size.len1 == 0 || size.len2 == 0 {
        return Err(SepConvError::ZeroPlaneDimensions);
    }
    if len != size.elements() {
        return Err(SepConvError::BufferMismatch(SepConvBufferMismatch {
            expected: size.elements(),
            len1: size.len1,
            len2: size.len2,
            slice_len: len,
        }));
    }
    Ok(())
}

macro_rules! define_convolve_separable_2d {
    ($name: ident, $target: ty, $filter_2d: ident) => {
        /// Convolves a column-major plane with the separable kernel
        /// `ker1 ⊗ ker2` under flat boundary extension, `ker1` running
        /// along the leading axis with offset `k1` and `ker2` along the
        /// trailing axis with offset `k2`.
        ///
        /// This is the checked, allocating entry: plane buffers are
        /// validated against their declared sizes and the intermediate
        /// plane and workspaces are provided internally. The unchecked
        /// single-axis drivers remain available for callers managing their
        /// own buffers.
        pub fn $name(
            dst: &mut [$target],
            dst_size: PlaneSize,
            src: &[$target],
            src_size: PlaneSize,
            ker1: &[$target],
            ker2: &[$target],
            k1: isize,
            k2: isize,
        ) -> Result<(), SepConvError> {
            if ker1.is_empty() || ker2.is_empty() {
                return Err(SepConvError::EmptyKernel);
            }
            check_plane(src.len(), src_size)?;
            check_plane(dst.len(), dst_size)?;
            let mid_size = PlaneSize::new(dst_size.len1, src_size.len2);
            let mut mid = vec![0 as $target; mid_size.elements()];
            let wrk_len =
                dst_size.len1.max(dst_size.len2) + ker1.len().max(ker2.len()) - 1;
            let mut wrk1 = vec![0 as $target; wrk_len];
            let mut wrk2 = vec![0 as $target; dst_size.len2];
            $filter_2d(
                Axis::Leading,
                &mut mid,
                mid_size.len1,
                mid_size.len2,
                ker1,
                src,
                src_size.len1,
                src_size.len2,
                k1,
                0,
                &mut wrk1,
                &mut wrk2,
            );
            $filter_2d(
                Axis::Trailing,
                dst,
                dst_size.len1,
                dst_size.len2,
                ker2,
                &mid,
                mid_size.len1,
                mid_size.len2,
                0,
                k2,
                &mut wrk1,
                &mut wrk2,
            );
            Ok(())
        }
    };
}

define_convolve_separable_2d!(convolve_separable_2d_f32, f32, filter_2d_f32);
define_convolve_separable_2d!(convolve_separable_2d_f64, f64, filter_2d_f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_2d::{filter_2d_ref_f32, filter_2d_ref_f64};

    #[test]
    fn rejects_zero_dimensions() {
        let mut dst = [0f32; 4];
        let src = [0f32; 4];
        let result = convolve_separable_2d_f32(
            &mut dst,
            PlaneSize::new(2, 2),
            &src,
            PlaneSize::new(0, 4),
            &[1.],
            &[1.],
            0,
            0,
        );
        assert!(matches!(result, Err(SepConvError::ZeroPlaneDimensions)));
    }

    #[test]
    fn rejects_empty_kernel() {
        let mut dst = [0f32; 4];
        let src = [0f32; 4];
        let result = convolve_separable_2d_f32(
            &mut dst,
            PlaneSize::new(2, 2),
            &src,
            PlaneSize::new(2, 2),
            &[],
            &[1.],
            0,
            0,
        );
        assert!(matches!(result, Err(SepConvError::EmptyKernel)));
    }

    #[test]
    fn rejects_mismatched_buffer() {
        let mut dst = [0f64; 4];
        let src = [0f64; 5];
        let result = convolve_separable_2d_f64(
            &mut dst,
            PlaneSize::new(2, 2),
            &src,
            PlaneSize::new(2, 3),
            &[1.],
            &[1.],
            0,
            0,
        );
        match result {
            Err(SepConvError::BufferMismatch(mismatch)) => {
                assert_eq!(mismatch.expected, 6);
                assert_eq!(mismatch.slice_len, 5);
            }
            other => panic!("expected buffer mismatch, got {other:?}"),
        }
    }

    #[test]
    fn matches_two_reference_passes_f32() {
        let src: Vec<f32> = (0..20).map(|v| (v as f32 * 0.37).sin()).collect();
        let src_size = PlaneSize::new(4, 5);
        let dst_size = PlaneSize::new(5, 4);
        let ker1 = [0.25f32, 0.5, 0.25];
        let ker2 = [0.4f32, 0.6];
        let (k1, k2) = (-1isize, 0isize);

        let mut received = vec![0f32; dst_size.elements()];
        convolve_separable_2d_f32(
            &mut received,
            dst_size,
            &src,
            src_size,
            &ker1,
            &ker2,
            k1,
            k2,
        )
        .unwrap();

        let mut mid = vec![0f32; dst_size.len1 * src_size.len2];
        let mut expected = vec![0f32; dst_size.elements()];
        let mut wrk1 = vec![0f32; 16];
        let mut wrk2 = vec![0f32; dst_size.len2];
        filter_2d_ref_f32(
            Axis::Leading,
            &mut mid,
            dst_size.len1,
            src_size.len2,
            &ker1,
            &src,
            src_size.len1,
            src_size.len2,
            k1,
            0,
            &mut wrk1,
            &mut wrk2,
        );
        filter_2d_ref_f32(
            Axis::Trailing,
            &mut expected,
            dst_size.len1,
            dst_size.len2,
            &ker2,
            &mid,
            dst_size.len1,
            src_size.len2,
            0,
            k2,
            &mut wrk1,
            &mut wrk2,
        );
        for (e, r) in expected.iter().zip(received.iter()) {
            assert!((e - r).abs() <= 1e-5 * (1. + e.abs()));
        }
    }

    #[test]
    fn matches_two_reference_passes_f64() {
        let src: Vec<f64> = (0..12).map(|v| (v as f64 * 0.7).cos()).collect();
        let size = PlaneSize::new(3, 4);
        let ker1 = [0.2f64, 0.6, 0.2];
        let ker2 = [0.1f64, 0.8, 0.1];

        let mut received = vec![0f64; size.elements()];
        convolve_separable_2d_f64(&mut received, size, &src, size, &ker1, &ker2, -1, -1).unwrap();

        let mut mid = vec![0f64; size.elements()];
        let mut expected = vec![0f64; size.elements()];
        let mut wrk1 = vec![0f64; 8];
        let mut wrk2 = vec![0f64; size.len2];
        filter_2d_ref_f64(
            Axis::Leading,
            &mut mid,
            size.len1,
            size.len2,
            &ker1,
            &src,
            size.len1,
            size.len2,
            -1,
            0,
            &mut wrk1,
            &mut wrk2,
        );
        filter_2d_ref_f64(
            Axis::Trailing,
            &mut expected,
            size.len1,
            size.len2,
            &ker2,
            &mid,
            size.len1,
            size.len2,
            0,
            -1,
            &mut wrk1,
            &mut wrk2,
        );
        for (e, r) in expected.iter().zip(received.iter()) {
            assert!((e - r).abs() <= 1e-13 * (1. + e.abs()));
        }
    }
}
