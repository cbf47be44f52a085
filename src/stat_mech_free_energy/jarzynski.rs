/*
Jarzynski estimator along a reaction coordinate.

For M work series sampled on the same grid the free energy at sample i is

    F[i] = -(1/beta) ln( (1/M) sum_j exp(-beta W[j][i]) ),   beta = 1 / (R T)

with R in kcal/(mol K). The exponential average is evaluated as a
log-sum-exp, shifted by the largest exponent, so work values of thousands of
kcal/mol do not overflow.
 */
use ndarray::{ArrayView1, ArrayView2, Axis};

use crate::constants::BOLTZMANN_KCAL_MOL_K;
use crate::error::{AsmdError, Result};

/// Inverse thermal energy in mol/kcal.
pub fn beta(temperature_k: f64) -> Result<f64> {
    if !temperature_k.is_finite() || temperature_k <= 0.0 {
        return Err(AsmdError::InvalidTemperature(temperature_k));
    }
    Ok(1.0 / (temperature_k * BOLTZMANN_KCAL_MOL_K))
}

fn exponential_average(work: ArrayView1<f64>, beta: f64) -> f64 {
    let max_exponent = work
        .iter()
        .map(|w| -beta * w)
        .fold(f64::NEG_INFINITY, f64::max);
    let shifted_sum: f64 = work
        .iter()
        .map(|w| (-beta * w - max_exponent).exp())
        .sum();
    let log_sum = max_exponent + shifted_sum.ln();
    ((work.len() as f64).ln() - log_sum) / beta
}

/// Free-energy estimate at every reaction-coordinate sample.
///
/// `work` has one row per trajectory and one column per sample. A single
/// trajectory is returned as is.
pub fn jarzynski_average(work: ArrayView2<f64>, temperature_k: f64) -> Result<Vec<f64>> {
    let beta = beta(temperature_k)?;
    let (n_trajectories, n_samples) = work.dim();
    if n_trajectories == 0 {
        return Err(AsmdError::EmptyWorkVector);
    }
    log::info!(
        "Jarzynski average over {n_trajectories} trajectories, {n_samples} samples, T = {temperature_k} K (beta = {beta:.4})"
    );

    if n_trajectories == 1 {
        log::warn!("only one trajectory given, the Jarzynski average is its own work");
        return Ok(work.row(0).to_vec());
    }

    Ok(work
        .axis_iter(Axis(1))
        .map(|column| exponential_average(column, beta))
        .collect())
}
