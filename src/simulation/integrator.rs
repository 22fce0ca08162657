//! Fixed-step time integrator
//!
//! Semi-implicit (symplectic) Euler: the velocity kick uses the acceleration
//! of the force pass, the drift uses the freshly kicked velocity

use super::states::System;
use crate::error::{Result, SimError};

/// Advance every body of `sys` by `dt` and bump `sys.t`
/// Expects `Body::a` to hold the accelerations for the current positions
pub fn symplectic_euler(sys: &mut System, dt: f64) {
    // Kick: v_n+1 = v_n + dt * a_n
    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies.iter_mut() {
        b.v += b.a * dt;
        b.x += b.v * dt;
    }

    sys.t += dt;
}

/// Fail with a state error naming the first body whose position or
/// velocity is no longer finite
pub fn check_finite(sys: &System) -> Result<()> {
    match sys.bodies.iter().position(|b| !b.is_finite()) {
        Some(i) => Err(SimError::State(format!(
            "body {i} has non-finite state at t = {} (x = {:?}, v = {:?})",
            sys.t, sys.bodies[i].x, sys.bodies[i].v
        ))),
        None => Ok(()),
    }
}
