//! Force / contact contributors for the simulation
//!
//! Defines the `Acceleration` trait, the `AccelSet` that runs every
//! registered term once per tick, and `GravityField`: pairwise Newtonian
//! gravity with a velocity-exchange response for overlapping discs

use log::debug;

use crate::error::{Result, SimError};
use crate::simulation::states::{Body, NVec2};

/// Collection of interaction terms
/// Accelerations are zeroed once, then every term adds its contribution
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration>>,
}

impl AccelSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Recompute `a` for every body from the current positions
    /// Terms may also adjust velocities in place (contact response)
    pub fn accumulate_accels(&self, bodies: &mut [Body]) -> Result<()> {
        // Nothing carries over from the previous tick
        for b in bodies.iter_mut() {
            b.a = NVec2::zeros();
        }
        for term in &self.terms {
            term.apply(bodies)?;
        }
        Ok(())
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// An interaction acting on the whole body list
/// Implementations add into `Body::a` and never touch positions
pub trait Acceleration {
    fn apply(&self, bodies: &mut [Body]) -> Result<()>;
}

/// Newtonian gravity between separated bodies, contact response between
/// overlapping ones
///
/// Each unordered pair is visited exactly once per tick (`i < j`). A contact
/// pair gets no gravity term; its velocities are changed in place, so pairs
/// visited later in the same pass see the updated velocities.
#[allow(non_snake_case)]
pub struct GravityField {
    pub G: f64, // gravitational constant
}

impl GravityField {
    pub fn new(g: f64) -> Self {
        Self { G: g }
    }
}

impl Acceleration for GravityField {
    fn apply(&self, bodies: &mut [Body]) -> Result<()> {
        let n = bodies.len();

        for i in 0..n {
            for j in (i + 1)..n {
                // split so both bodies of the pair can be mutated
                let (left, right) = bodies.split_at_mut(j);
                let bi = &mut left[i];
                let bj = &mut right[0];

                // r points from j to i
                let r = bi.x - bj.x;
                let l = r.norm();

                if l < bi.radius + bj.radius {
                    if resolve_contact(bi, bj) {
                        debug!("contact between bodies {i} and {j} at distance {l:e}");
                    }
                    continue;
                }

                // only two zero-radius bodies can get here with l == 0
                if l == 0.0 {
                    return Err(SimError::State(format!(
                        "bodies {i} and {j} coincide with zero radius"
                    )));
                }

                // F / mi = G * mj / l^2 along the line of centers;
                // the mass product is never formed so it cannot overflow
                let k = self.G / (l * l);
                let dir = r / l;

                // i is pulled toward j (-r), j toward i (+r)
                bi.a -= dir * (k * bj.m);
                bj.a += dir * (k * bi.m);
            }
        }
        Ok(())
    }
}

/// Reflect the line-of-centers velocity components of an overlapping pair.
///
/// The basis is the angle `alpha` of the line from `bj` to `bi`:
/// normal `(cos, sin)`, tangent `(sin, -cos)`. When the normal components
/// have opposite signs both are negated; tangential components are kept.
/// Masses are ignored. Returns whether velocities changed.
fn resolve_contact(bi: &mut Body, bj: &mut Body) -> bool {
    let alpha = (bi.x.y - bj.x.y).atan2(bi.x.x - bj.x.x);
    let (sin, cos) = alpha.sin_cos();
    let normal = NVec2::new(cos, sin);
    let tangent = NVec2::new(sin, -cos);

    let vn_i = bi.v.dot(&normal);
    let vn_j = bj.v.dot(&normal);
    if vn_i * vn_j >= 0.0 {
        return false;
    }

    let vt_i = bi.v.dot(&tangent);
    let vt_j = bj.v.dot(&tangent);

    bi.v = tangent * vt_i - normal * vn_i;
    bj.v = tangent * vt_j - normal * vn_j;
    true
}
