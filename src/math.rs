use crate::Float;
use nalgebra as na;

/// Lagrange basis polynomials of the nodes `times` evaluated at `at`.
///
/// Nodes have to be pairwise distinct, equal nodes divide by zero.
pub fn lagrange_basis<T: Float>(times: &[T], at: T) -> na::DVector<T> {
    na::DVector::from_fn(times.len(), |i, _| {
        times
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(T::one(), |acc, (_, &tj)| acc * (at - tj) / (times[i] - tj))
    })
}

/// Evaluates the polynomial through `(times[i], values[i])` at `at`.
pub fn lagrange<T: Float>(times: &[T], values: &[T], at: T) -> T {
    let basis = lagrange_basis(times, at);

    basis.dot(&na::DVector::from_vec(values.to_vec()))
}
