//! Scaled model clock that feeds `dt` to the simulation
//!
//! The engine never knows about frame rates or time scales: the driver
//! measures real elapsed time, passes it to [`Stopwatch::update`], and steps
//! the simulation with [`Stopwatch::tick`].

use crate::error::{Result, SimError};

const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;
const SECONDS_PER_YEAR: f64 = 365.0 * SECONDS_PER_DAY;
const SECONDS_PER_MONTH: f64 = 30.0 * SECONDS_PER_DAY;

#[derive(Debug, Clone)]
pub struct Stopwatch {
    scale: f64, // model seconds per real second
    running: bool,
    current_time: f64, // model time since restart
    tick: f64, // model time covered by the last update
}

impl Stopwatch {
    /// A stopped stopwatch at time zero
    pub fn new(scale: f64) -> Result<Self> {
        check_scale(scale)?;
        Ok(Self {
            scale,
            running: false,
            current_time: 0.0,
            tick: 0.0,
        })
    }

    pub fn play(&mut self) {
        self.running = true;
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Account for `real_dt` seconds of wall-clock time
    pub fn update(&mut self, real_dt: f64) {
        if self.running {
            self.tick = self.scale * real_dt;
            self.current_time += self.tick;
        } else {
            self.tick = 0.0;
        }
    }

    /// Model time covered by the last update; the `dt` for the next step
    pub fn tick(&self) -> f64 {
        self.tick
    }

    pub fn time(&self) -> f64 {
        self.current_time
    }

    pub fn restart(&mut self, init_time: f64) {
        self.current_time = init_time;
    }

    /// Change the time-flow scale. With `adjust_time` the elapsed time is
    /// rescaled as if the new scale had been in effect from the start.
    pub fn change_flow(&mut self, scale: f64, adjust_time: bool) -> Result<()> {
        check_scale(scale)?;
        if adjust_time {
            self.current_time *= scale / self.scale;
        }
        self.scale = scale;
        Ok(())
    }

    /// "Model time: 1y 3m", with 365-day years and 30-day months
    pub fn model_time_label(&self) -> String {
        let time = self.current_time.max(0.0).trunc();
        let years = (time / SECONDS_PER_YEAR) as u64;
        let months = ((time % SECONDS_PER_YEAR) / SECONDS_PER_MONTH) as u64;
        format!("Model time: {years}y {months}m")
    }
}

fn check_scale(scale: f64) -> Result<()> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(SimError::config(format!("time scale must be a positive number, got {scale}")))
    }
}
