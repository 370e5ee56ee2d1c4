//! Per-pixel Gabor kernel evaluation.
//!
//! ```text
//! x' =  x·cos θ + y·sin θ
//! y' = −x·sin θ + y·cos θ
//! a  = exp((x² + γ²·y'²) / (−2σ²))
//! b  = cos(2π·x'/λ + φ)
//! g  = a·b
//! ```
//!
//! The envelope pairs the *unrotated* `x` with the rotated `y'`. Existing
//! matrices depend on this form; do not replace `x` with `x'`.

use std::f64::consts::PI;

use crate::domain::WaveletParameters;

/// Evaluate the kernel at plane coordinate `(x, y)` (offsets from the grid origin).
///
/// Intermediate arithmetic is `f64`; only the result is narrowed to `f32`.
#[inline]
pub fn gabor(params: &WaveletParameters, sigma: f32, x: i64, y: i64) -> f32 {
    let gamma = f64::from(params.gamma);
    let theta = f64::from(params.theta);
    let lambda = f64::from(params.lambda);
    let phi = f64::from(params.phi);
    let sigma = f64::from(sigma);
    let x = x as f64;
    let y = y as f64;

    let (sin_t, cos_t) = theta.sin_cos();
    let x_prime = x * cos_t + y * sin_t;
    let y_prime = -x * sin_t + y * cos_t;

    let envelope = ((x * x + gamma * gamma * y_prime * y_prime) / (-2.0 * sigma * sigma)).exp();
    let carrier = ((2.0 * PI * x_prime) / lambda + phi).cos();

    (envelope * carrier) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::sigma_from_bandwidth;

    fn params(theta: f32, phi: f32) -> WaveletParameters {
        WaveletParameters {
            theta,
            phi,
            ..WaveletParameters::default()
        }
    }

    #[test]
    fn origin_is_cos_phi() {
        let sigma = sigma_from_bandwidth(2.0, 50.0);
        assert_eq!(gabor(&params(0.0, 0.0), sigma, 0, 0), 1.0);
        assert!(gabor(&params(0.0, std::f32::consts::FRAC_PI_2), sigma, 0, 0).abs() < 1e-6);
        let phi = 0.7f32;
        let expected = f64::from(phi).cos() as f32;
        assert_eq!(gabor(&params(0.3, phi), sigma, 0, 0), expected);
    }

    #[test]
    fn origin_ignores_gamma_and_lambda() {
        for &(gamma, lambda) in &[(0.5f32, 8.0f32), (1.0, 50.0), (3.0, 120.0)] {
            let p = WaveletParameters {
                gamma,
                lambda,
                ..WaveletParameters::default()
            };
            let sigma = sigma_from_bandwidth(p.beta, lambda);
            assert_eq!(gabor(&p, sigma, 0, 0), 1.0);
        }
    }

    #[test]
    fn envelope_uses_unrotated_x() {
        // With θ = π/2, x' = y and y' = −x. The envelope is then
        // exp((x² + γ²x²)/(−2σ²)); a rotated-x envelope would give exp((y² + γ²x²)/(−2σ²)).
        let theta = std::f32::consts::FRAC_PI_2;
        let p = WaveletParameters {
            theta,
            gamma: 1.0,
            ..WaveletParameters::default()
        };
        let sigma = 10.0f32;
        let (x, y) = (0i64, 5i64);

        let theta64 = f64::from(theta);
        let xp = (x as f64) * theta64.cos() + (y as f64) * theta64.sin();
        let yp = -(x as f64) * theta64.sin() + (y as f64) * theta64.cos();
        let s = f64::from(sigma);
        let a = (((x * x) as f64 + yp * yp) / (-2.0 * s * s)).exp();
        let b = ((2.0 * PI * xp) / 50.0).cos();
        assert_eq!(gabor(&p, sigma, x, y), (a * b) as f32);

        // Envelope is 1 along this column since x = 0 and y' ≈ 0.
        assert!((a - 1.0).abs() < 1e-12);
    }

    #[test]
    fn horizontal_kernel_is_even_in_x_for_zero_phase() {
        let p = params(0.0, 0.0);
        let sigma = sigma_from_bandwidth(2.0, 50.0);
        for x in 1..40 {
            assert_eq!(gabor(&p, sigma, x, 3), gabor(&p, sigma, -x, 3));
        }
    }

    #[test]
    fn envelope_decays_away_from_origin() {
        let p = WaveletParameters {
            lambda: 1.0e9,
            ..WaveletParameters::default()
        };
        let sigma = 5.0;
        let near = gabor(&p, sigma, 1, 0);
        let far = gabor(&p, sigma, 30, 0);
        assert!(near > far && far >= 0.0);
    }

    #[test]
    fn infinite_sigma_flattens_envelope() {
        // 0.0 / −inf is −0.0, so the envelope is exactly 1 everywhere.
        let p = params(0.0, 0.0);
        let v = gabor(&p, f32::INFINITY, 25, 10);
        let expected = ((2.0 * PI * 25.0) / 50.0).cos() as f32;
        assert_eq!(v, expected);
    }

    #[test]
    fn zero_wavelength_is_nan() {
        let p = WaveletParameters {
            lambda: 0.0,
            ..WaveletParameters::default()
        };
        assert!(gabor(&p, 0.0, 0, 0).is_nan());
        assert!(gabor(&p, 0.0, 3, 2).is_nan());
    }
}
