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
use crate::cardinal_spline::CardinalCubicSpline;
use num_traits::{AsPrimitive, Float, MulAdd};

/// Capability set of a compact interpolation kernel used as a resampling
/// filter: point evaluation of the kernel and its derivative, plus weight
/// generation for a fractional sample offset.
pub trait InterpolationFunction<V> {
    /// Number of samples in the kernel support.
    fn support(&self) -> usize;

    /// Kernel value at coordinate `x`.
    fn value(&self, x: V) -> V;

    /// First derivative of the kernel at coordinate `x`.
    fn derivative(&self, x: V) -> V;

    /// Writes [`InterpolationFunction::support`] interpolation weights for
    /// the fractional offset `t` in `[0, 1)` into `weights`.
    fn value_weights(&self, t: V, weights: &mut [V]);

    /// Writes [`InterpolationFunction::support`] derivative weights for the
    /// fractional offset `t` in `[0, 1)` into `weights`.
    fn derivative_weights(&self, t: V, weights: &mut [V]);
}

impl<V> InterpolationFunction<V> for CardinalCubicSpline<V>
where
    V: Copy + Float + MulAdd<V, Output = V> + 'static,
    f64: AsPrimitive<V>,
{
    fn support(&self) -> usize {
        4
    }

    fn value(&self, x: V) -> V {
        CardinalCubicSpline::value(self, x)
    }

    fn derivative(&self, x: V) -> V {
        CardinalCubicSpline::derivative(self, x)
    }

    fn value_weights(&self, t: V, weights: &mut [V]) {
        weights[..4].copy_from_slice(&CardinalCubicSpline::value_weights(self, t));
    }

    fn derivative_weights(&self, t: V, weights: &mut [V]) {
        weights[..4].copy_from_slice(&CardinalCubicSpline::derivative_weights(self, t));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spline_exposes_four_tap_capabilities() {
        let phi: &dyn InterpolationFunction<f64> = &CardinalCubicSpline::<f64>::catmull_rom();
        assert_eq!(phi.support(), 4);
        let mut weights = [0f64; 4];
        phi.value_weights(0.25, &mut weights);
        for (j, w) in weights.iter().enumerate() {
            assert!((w - phi.value(0.25 + 1. - j as f64)).abs() < 1e-14);
        }
        phi.derivative_weights(0.25, &mut weights);
        for (j, w) in weights.iter().enumerate() {
            assert!((w - phi.derivative(0.25 + 1. - j as f64)).abs() < 1e-13);
        }
    }
}
