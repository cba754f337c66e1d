//! Miscellaneous tools.

use ndarray::{ self as nd, Ix1, concatenate };
use ndarray_linalg::{ Lapack, Norm, Scalar };
use num_traits::{ One, Zero };
use rustfft as fft;
use num_complex::Complex64 as C64;

/// Estimate the first derivative of a uniformly sampled function via
/// second-order central differences, with one-sided differences at the two
/// boundary samples.
///
/// Arrays shorter than 2 elements admit no difference stencil; the gradient
/// there is taken to be zero.
pub fn gradient<S, A>(y: &nd::ArrayBase<S, Ix1>, dx: A::Real) -> nd::Array1<A>
where
    S: nd::Data<Elem = A>,
    A: Scalar,
{
    let n: usize = y.len();
    let mut g: nd::Array1<A> = nd::Array1::zeros(n);
    if n < 2 { return g; }
    let h = A::from_real(dx);
    let two = A::one() + A::one();
    g[0] = (y[1] - y[0]) / h;
    g[n - 1] = (y[n - 1] - y[n - 2]) / h;
    nd::Zip::from(g.slice_mut(nd::s![1..n - 1]))
        .and(y.slice(nd::s![2..]))
        .and(y.slice(nd::s![..n - 2]))
        .for_each(|gk, &ykp1, &ykm1| { *gk = (ykp1 - ykm1) / (two * h); });
    g
}

/// Rescale a vector to unit Euclidean norm in place.
///
/// A vector of exactly zero norm is left unchanged.
pub fn renormalize<S, A>(q: &mut nd::ArrayBase<S, Ix1>)
where
    S: nd::DataMut<Elem = A>,
    A: Scalar + Lapack,
{
    let norm = q.norm_l2();
    if norm > <A as Scalar>::Real::zero() {
        let norm = A::from_real(norm);
        q.iter_mut().for_each(|qk| { *qk /= norm; });
    }
}

/// Generate an array of frequency-space coordinates to accompany a FFT of `n`
/// points for sampling interval `dt`.
pub fn fft_freq(n: usize, dt: f64) -> nd::Array1<f64> {
    if n % 2 == 0 {
        let fp: nd::Array1<f64>
            = (0..n / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..n / 2 + 1).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    } else {
        let fp: nd::Array1<f64>
            = (0..(n + 1) / 2)
            .map(|k| k as f64 / (n as f64 * dt))
            .collect();
        let fm: nd::Array1<f64>
            = (1..(n + 1) / 2).rev()
            .map(|k| -(k as f64) / (n as f64 * dt))
            .collect();
        concatenate!(nd::Axis(0), fp, fm)
    }
}

/// Perform the one-dimensional, complex-valued FFT.
pub fn fft<S>(x: &nd::ArrayBase<S, Ix1>) -> nd::Array1<C64>
where S: nd::Data<Elem = C64>
{
    let n: usize = x.len();
    let mut f = x.to_owned();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(f.as_slice_mut().unwrap());
    f
}

/// Perform the one-dimensional, complex-valued FFT in place.
pub fn fft_inplace<S>(f: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = C64>
{
    let n: usize = f.len();
    let mut plan = fft::FftPlanner::new();
    let fft_plan = plan.plan_fft_forward(n);
    fft_plan.process(f.as_slice_mut().unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_of_line_is_constant() {
        let y: nd::Array1<f64>
            = nd::Array1::linspace(0.0, 9.0, 10).mapv(|yk| 3.0 * yk + 1.0);
        let g: nd::Array1<f64> = gradient(&y, 1.0);
        assert!(
            g.iter().all(|gk| (gk - 3.0).abs() < 1e-12),
            "gradient of a line should be its slope everywhere; got {:?}",
            g,
        );
    }

    #[test]
    fn gradient_scales_with_spacing() {
        let y: nd::Array1<f64> = nd::Array1::linspace(0.0, 4.0, 5);
        let g: nd::Array1<f64> = gradient(&y, 0.5);
        assert!(g.iter().all(|gk| (gk - 2.0).abs() < 1e-12));
    }

    #[test]
    fn gradient_of_short_arrays_is_zero() {
        let y: nd::Array1<C64> = nd::Array1::from_vec(vec![C64::new(1.0, -2.0)]);
        let g: nd::Array1<C64> = gradient(&y, 0.1);
        assert_eq!(g.len(), 1);
        assert_eq!(g[0], C64::new(0.0, 0.0));
    }

    #[test]
    fn renormalize_produces_unit_norm() {
        let mut q: nd::Array1<C64>
            = (0..8).map(|k| C64::new(k as f64, -(k as f64) / 2.0)).collect();
        renormalize(&mut q);
        let norm: f64 = q.iter().map(|qk| qk.norm_sqr()).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12, "got norm {}", norm);
    }

    #[test]
    fn renormalize_leaves_zero_vector_unchanged() {
        let mut q: nd::Array1<C64> = nd::Array1::zeros(16);
        renormalize(&mut q);
        assert!(q.iter().all(|qk| *qk == C64::new(0.0, 0.0)));
    }

    #[test]
    fn fft_concentrates_a_pure_tone() {
        const N: usize = 64;
        let x: nd::Array1<C64>
            = (0..N)
            .map(|k| C64::cis(std::f64::consts::TAU * 4.0 * k as f64 / N as f64))
            .collect();
        let f = fft(&x);
        let freqs = fft_freq(N, 1.0);
        let (kmax, _) = f.iter().enumerate()
            .max_by(|(_, l), (_, r)| {
                l.norm_sqr().partial_cmp(&r.norm_sqr()).unwrap()
            })
            .unwrap();
        assert!((freqs[kmax] - 4.0 / N as f64).abs() < 1e-12);
    }
}
