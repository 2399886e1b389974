//! Fixed-step time integrator for the three-body system
//!
//! Implements the classical 4th-order Runge–Kutta scheme for the first-order
//! ODE system dx/dt = v, dv/dt = a(x). Every stage evaluates accelerations
//! against an explicit trial system, so the authoritative state is never
//! mutated mid-step; the caller observes the update as atomic.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one fixed step `dt = params.h0` using RK4.
///
/// Stage weights follow the classical tableau:
/// x' = x + (dt/6)(k1 + 2k2 + 2k3 + k4), likewise for v.
/// Numerical blow-up (NaN/inf) for aggressive `dt` is not caught here;
/// callers detect it through energy drift or a finiteness sweep.
pub fn rk4_integrator(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 {
        return;
    }

    let dt = params.h0;
    let half_dt = 0.5 * dt;

    let x0: Vec<NVec2> = sys.bodies.iter().map(|b| b.x).collect();
    let v0: Vec<NVec2> = sys.bodies.iter().map(|b| b.v).collect();

    // Trial system for the intermediate stage evaluations; the real `sys`
    // stays untouched until the final combination below.
    let mut trial = sys.clone();
    let mut accel = vec![NVec2::zeros(); n];

    // k1: derivatives at the current state
    forces.accumulate_accels(sys.t, sys, &mut accel);
    let k1x = v0.clone();
    let k1v = accel.clone();

    // k2: derivatives at t + dt/2 using the k1 half-step trial state
    set_trial(&mut trial, &x0, &v0, &k1x, &k1v, half_dt, sys.t + half_dt);
    forces.accumulate_accels(trial.t, &trial, &mut accel);
    let k2x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v).collect();
    let k2v = accel.clone();

    // k3: derivatives at t + dt/2 using the k2 half-step trial state
    set_trial(&mut trial, &x0, &v0, &k2x, &k2v, half_dt, sys.t + half_dt);
    forces.accumulate_accels(trial.t, &trial, &mut accel);
    let k3x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v).collect();
    let k3v = accel.clone();

    // k4: derivatives at t + dt using the k3 full-step trial state
    set_trial(&mut trial, &x0, &v0, &k3x, &k3v, dt, sys.t + dt);
    forces.accumulate_accels(trial.t, &trial, &mut accel);
    let k4x: Vec<NVec2> = trial.bodies.iter().map(|b| b.v).collect();
    let k4v = accel;

    // Combine the four stages and commit the update in one pass
    let sixth = dt / 6.0;
    for (i, b) in sys.bodies.iter_mut().enumerate() {
        b.x = x0[i] + sixth * (k1x[i] + 2.0 * k2x[i] + 2.0 * k3x[i] + k4x[i]);
        b.v = v0[i] + sixth * (k1v[i] + 2.0 * k2v[i] + 2.0 * k3v[i] + k4v[i]);
    }

    // Time advances by a full step unconditionally
    sys.t += dt;
}

/// Load `trial` with the stage state x0 + h*kx, v0 + h*kv at time `t`.
fn set_trial(
    trial: &mut System,
    x0: &[NVec2],
    v0: &[NVec2],
    kx: &[NVec2],
    kv: &[NVec2],
    h: f64,
    t: f64,
) {
    for (i, b) in trial.bodies.iter_mut().enumerate() {
        b.x = x0[i] + h * kx[i];
        b.v = v0[i] + h * kv[i];
    }
    trial.t = t;
}
