//! Forward-Euler streamline tracing.

use nalgebra::Vector3;

use super::nearfield::total_velocity;
use super::Freestream;
use crate::vortex::Horseshoe;

/// Trace one streamline per seed through the induced + freestream +
/// rotational field: `num_steps` unit-velocity steps of length
/// `length / num_steps`, giving `num_steps + 1` points. There is no
/// collision detection against panels; tracing stops early only if the
/// local velocity vanishes.
pub fn streamlines(
    freestream: &Freestream,
    seeds: &[Vector3<f64>],
    horseshoes: &[Horseshoe],
    circulations: &[f64],
    length: f64,
    num_steps: usize,
) -> Vec<Vec<Vector3<f64>>> {
    seeds
        .iter()
        .map(|&seed| streamline(freestream, seed, horseshoes, circulations, length, num_steps))
        .collect()
}

fn streamline(
    freestream: &Freestream,
    seed: Vector3<f64>,
    horseshoes: &[Horseshoe],
    circulations: &[f64],
    length: f64,
    num_steps: usize,
) -> Vec<Vector3<f64>> {
    let step = length / num_steps as f64;
    let u = freestream.velocity();
    let u_hat = freestream.direction();
    let mut points = Vec::with_capacity(num_steps + 1);
    let mut r = seed;
    points.push(r);
    for _ in 0..num_steps {
        let v = total_velocity(r, horseshoes, circulations, u_hat, u, freestream.omega);
        let speed = v.norm();
        if speed < 1e-12 {
            break;
        }
        r += v / speed * step;
        points.push(r);
    }
    points
}
