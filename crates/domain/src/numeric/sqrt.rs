use numtext_shared_kernel::{DomainError, DomainResult};

/// Number of Newton-Raphson refinements applied by [`sqrt_newton`].
pub const NEWTON_ITERATIONS: usize = 20;

/// Square root by a fixed number of Newton-Raphson steps.
///
/// The estimate starts at `x` and is refined exactly [`NEWTON_ITERATIONS`]
/// times with `e = (e + x / e) / 2`; there is no convergence check, so the
/// output is bit-for-bit reproducible for a given input. Zero short-circuits
/// to `0.0`.
///
/// Starting at `x`, the estimate roughly halves per step until it nears the
/// root, so 20 steps reach full `f64` precision only for about
/// `1e-9 <= x <= 1e9`. Outside that range the result is still an overestimate
/// that has not converged: `sqrt_newton(5e11)` squares to about `6.1e11`.
///
/// # Errors
/// Returns [`DomainError::NegativeDomain`] when `x < 0`.
pub fn sqrt_newton(x: f64) -> DomainResult<f64> {
    if x < 0.0 {
        return Err(DomainError::NegativeDomain { value: x });
    }
    if x == 0.0 {
        return Ok(0.0);
    }

    let mut estimate = x;
    for _ in 0..NEWTON_ITERATIONS {
        estimate = (estimate + x / estimate) / 2.0;
    }
    Ok(estimate)
}
