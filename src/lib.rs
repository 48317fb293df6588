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
#![deny(deprecated)]
#![allow(clippy::too_many_arguments)]

#[cfg(all(
    any(target_arch = "x86_64", target_arch = "x86"),
    feature = "avx"
))]
mod avx2;
mod cardinal_spline;
mod filter;
mod filter_2d;
mod filter_scalar;
mod interpolation;
mod mlaf;
mod movers;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod neon;
mod separable;
#[cfg(all(
    any(target_arch = "x86_64", target_arch = "x86"),
    feature = "sse"
))]
mod sse;

pub use cardinal_spline::CardinalCubicSpline;
pub use filter::{
    filter_f32, filter_f64, filter_ref_f32, filter_ref_f64, filter_x1_f32, filter_x1_f64,
    filter_x2_f32, filter_x2_f64, filter_x3_f32, filter_x3_f64, filter_x4_f32, filter_x4_f64,
    filter_x5_f32, filter_x5_f64,
};
pub use filter_2d::{
    Axis, filter_2d_f32, filter_2d_f64, filter_2d_ref_f32, filter_2d_ref_f64,
};
pub use interpolation::InterpolationFunction;
pub use movers::{
    copy_contiguous, copy_strided_within, load_contiguous_flat, load_strided, load_strided_flat,
    store_strided,
};
pub use separable::{
    PlaneSize, SepConvBufferMismatch, SepConvError, convolve_separable_2d_f32,
    convolve_separable_2d_f64,
};
