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
use num_traits::{AsPrimitive, Float, MulAdd};

/// Tension-parametrized piecewise-cubic interpolation kernel with a support
/// of 4 samples.
///
/// The slope at `x = ±1` is `±(c - 1)/2`. Usually `c ≤ 1`: `c = 0` yields a
/// Catmull-Rom spline, `c = 1` all-zero tangents, `c = -1` a truncated
/// approximation of a cardinal sine and `c = -1/2` an interpolating cubic
/// spline with continuous second derivatives inside its support.
///
/// All coefficients are derived once by [`CardinalCubicSpline::new`]; the
/// value is immutable afterwards and freely shareable between threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardinalCubicSpline<V> {
    c: V,
    f1: V,
    f2: V,
    f3: V,
    d1: V,
    d2: V,
    d3: V,
    d4: V,
}

impl<V> CardinalCubicSpline<V>
where
    V: Copy + Float + MulAdd<V, Output = V> + 'static,
    f64: AsPrimitive<V>,
{
    pub fn new(c: V) -> Self {
        let q = (c + V::one()) * 0.5f64.as_();
        let t = mlaf(9f64.as_(), 3f64.as_(), c);
        Self {
            c,
            f1: q - V::one(),
            f2: q,
            f3: q + V::one(),
            d1: (c - V::one()) * 1.5f64.as_(),
            d2: t * 0.5f64.as_(),
            d3: mlaf(10f64.as_(), 2f64.as_(), c) / t,
            d4: (c - V::one()) / t,
        }
    }

    /// Catmull-Rom spline, `c = 0`.
    pub fn catmull_rom() -> Self {
        Self::new(V::zero())
    }

    /// Spline with all-zero tangents, `c = 1`.
    pub fn zero_tangents() -> Self {
        Self::new(V::one())
    }

    /// Truncated cardinal-sine approximation, `c = -1`.
    pub fn truncated_sinc() -> Self {
        Self::new(-V::one())
    }

    /// Interpolating spline with continuous second derivatives, `c = -1/2`.
    pub fn c2_continuous() -> Self {
        Self::new((-0.5f64).as_())
    }

    /// The tension parameter the kernel was built from.
    pub fn tension(&self) -> V {
        self.c
    }

    /// Evaluates the kernel; zero for `|x| ≥ 2`.
    pub fn value(&self, x: V) -> V {
        let two = 2f64.as_();
        let ax = x.abs();
        if ax >= two {
            V::zero()
        } else if ax >= V::one() {
            let u = two - ax;
            self.f1 * (ax - V::one()) * u * u
        } else {
            ((self.f3 * ax - V::one()) * ax - V::one()) * (ax - V::one())
        }
    }

    /// Evaluates the first derivative of the kernel.
    pub fn derivative(&self, x: V) -> V {
        let two = 2f64.as_();
        let four_thirds = (4f64 / 3f64).as_();
        if x < V::zero() {
            if x <= -two {
                V::zero()
            } else if x < -V::one() {
                -(x + two) * (x + four_thirds) * self.d1
            } else {
                -(x + self.d3) * x * self.d2
            }
        } else if x >= two {
            V::zero()
        } else if x > V::one() {
            (x - two) * (x - four_thirds) * self.d1
        } else {
            (x - self.d3) * x * self.d2
        }
    }

    /// Returns the 4 interpolation weights for the fractional offset `t` in
    /// `[0, 1)`: weight `j` multiplies the sample at relative position
    /// `j - 1`, so the weights reproduce `value` at `t + 1`, `t`, `t - 1`
    /// and `t - 2`.
    pub fn value_weights(&self, t: V) -> [V; 4] {
        /*
         * w1 = f1 t u²
         * w2 = u + t u² - f2 t² u
         * w3 = t + t² u - f2 t u²
         * w4 = f1 t² u
         * with u = 1 - t, in 13 operations.
         */
        let u = V::one() - t;
        let tu = t * u;
        let ptu = self.f1 * tu;
        [
            ptu * u,
            mlaf(u, u - self.f2 * t, tu),
            mlaf(t, t - self.f2 * u, tu),
            ptu * t,
        ]
    }

    /// Weight generator matching [`CardinalCubicSpline::derivative`], same
    /// layout as [`CardinalCubicSpline::value_weights`].
    pub fn derivative_weights(&self, t: V) -> [V; 4] {
        /*
         * w1 = d1 (t - 1)(t - 1/3)
         * w2 = d2 (t - d3) t
         * w3 = d2 (t - 1)(d4 - t)
         * w4 = d1 t (2/3 - t)
         * in 13 operations.
         */
        let u = t - V::one();
        [
            self.d1 * u * (t - (1f64 / 3f64).as_()),
            self.d2 * (t - self.d3) * t,
            self.d2 * u * (self.d4 - t),
            self.d1 * t * ((2f64 / 3f64).as_() - t),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_edges_are_zero() {
        for c in [-1f64, -0.5, 0., 0.5, 1.] {
            let phi = CardinalCubicSpline::new(c);
            assert_eq!(phi.value(2.), 0.);
            assert_eq!(phi.value(-2.), 0.);
            assert_eq!(phi.value(3.7), 0.);
            assert_eq!(phi.derivative(2.), 0.);
            assert_eq!(phi.derivative(-2.), 0.);
        }
    }

    #[test]
    fn catmull_rom_interpolates_samples() {
        let phi = CardinalCubicSpline::<f64>::catmull_rom();
        assert!((phi.value(0.) - 1.).abs() < 1e-15);
        assert!(phi.value(1.).abs() < 1e-15);
        assert!(phi.value(-1.).abs() < 1e-15);
    }

    #[test]
    fn slope_at_unit_offset_follows_tension() {
        for c in [-1f64, -0.5, 0., 0.25, 1.] {
            let phi = CardinalCubicSpline::new(c);
            assert!(
                (phi.derivative(1.) - (c - 1.) / 2.).abs() < 1e-14,
                "tension {c}"
            );
            assert!(
                (phi.derivative(-1.) + (c - 1.) / 2.).abs() < 1e-14,
                "tension {c}"
            );
        }
    }

    #[test]
    fn derivative_matches_finite_differences() {
        let eps = 1e-7f64;
        for c in [-1f64, -0.5, 0., 1.] {
            let phi = CardinalCubicSpline::new(c);
            let mut x = -2.01f64;
            while x <= 2.1 {
                let estimated = (phi.value(x + eps) - phi.value(x - eps)) / (2. * eps);
                let exact = phi.derivative(x);
                let near_breakpoint = [-2f64, -1., 0., 1., 2.]
                    .iter()
                    .any(|b| (x - b).abs() < 2. * eps);
                if !near_breakpoint {
                    assert!(
                        (exact - estimated).abs() < 1e-6,
                        "tension {c}, x = {x}: {exact} vs {estimated}"
                    );
                }
                x += 0.0003;
            }
        }
    }

    #[test]
    fn value_weights_reproduce_kernel_samples() {
        for c in [-1f64, -0.5, 0., 0.75] {
            let phi = CardinalCubicSpline::new(c);
            let mut t = 0f64;
            while t < 1. {
                let w = phi.value_weights(t);
                for (j, w_v) in w.iter().enumerate() {
                    let direct = phi.value(t + 1. - j as f64);
                    assert!(
                        (w_v - direct).abs() < 1e-14,
                        "tension {c}, t = {t}, tap {j}: {w_v} vs {direct}"
                    );
                }
                t += 0.0625;
            }
        }
    }

    #[test]
    fn derivative_weights_reproduce_kernel_samples() {
        for c in [-1f64, -0.5, 0., 0.75] {
            let phi = CardinalCubicSpline::new(c);
            let mut t = 0f64;
            while t < 1. {
                let w = phi.derivative_weights(t);
                for (j, w_v) in w.iter().enumerate() {
                    let direct = phi.derivative(t + 1. - j as f64);
                    assert!(
                        (w_v - direct).abs() < 1e-13,
                        "tension {c}, t = {t}, tap {j}: {w_v} vs {direct}"
                    );
                }
                t += 0.0625;
            }
        }
    }

    #[test]
    fn interpolating_spline_weights_are_partition_of_unity() {
        let phi = CardinalCubicSpline::<f64>::c2_continuous();
        let mut t = 0f64;
        while t < 1. {
            let w = phi.value_weights(t);
            let sum: f64 = w.iter().sum();
            assert!((sum - 1.).abs() < 1e-14, "t = {t}: {sum}");
            let dw = phi.derivative_weights(t);
            let dsum: f64 = dw.iter().sum();
            assert!(dsum.abs() < 1e-13, "t = {t}: {dsum}");
            t += 0.03125;
        }
    }

    #[test]
    fn single_precision_mirrors_double_precision() {
        let phi32 = CardinalCubicSpline::<f32>::catmull_rom();
        let phi64 = CardinalCubicSpline::<f64>::catmull_rom();
        let mut x = -2f32;
        while x <= 2. {
            assert!((phi32.value(x) as f64 - phi64.value(x as f64)).abs() < 1e-6);
            assert!((phi32.derivative(x) as f64 - phi64.derivative(x as f64)).abs() < 1e-5);
            x += 0.125;
        }
    }
}
