//! Closed-form damped harmonic oscillator.
//!
//! Positions are solved analytically from the initial displacement and
//! velocity, so the result at any play time is independent of frame rate.

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
const ESTIMATE_STEP_NANOS: u64 = 1_000_000;
const MAX_DURATION_NANOS: u64 = 60 * 1_000_000_000;

/// Position and velocity (units per second) of a spring at some instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub value: f32,
    pub velocity: f32,
}

/// Spring pulling a single scalar towards `final_position`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSimulation {
    final_position: f32,
    natural_freq: f64,
    damping_ratio: f64,
}

impl SpringSimulation {
    pub fn new(final_position: f32, damping_ratio: f32, stiffness: f32) -> Self {
        Self {
            final_position,
            natural_freq: (stiffness.max(f32::EPSILON) as f64).sqrt(),
            damping_ratio: damping_ratio.max(0.0) as f64,
        }
    }

    pub fn final_position(&self) -> f32 {
        self.final_position
    }

    /// Motion `elapsed_nanos` after leaving `start` with `start_velocity`.
    pub fn motion_at(&self, start: f32, start_velocity: f32, elapsed_nanos: u64) -> Motion {
        let t = elapsed_nanos as f64 / NANOS_PER_SECOND;
        let x0 = (start - self.final_position) as f64;
        let v0 = start_velocity as f64;
        let omega = self.natural_freq;
        let zeta = self.damping_ratio;

        let (displacement, velocity) = if (zeta - 1.0).abs() < 1e-6 {
            let a = x0;
            let b = v0 + omega * x0;
            let decay = (-omega * t).exp();
            ((a + b * t) * decay, (b - omega * (a + b * t)) * decay)
        } else if zeta > 1.0 {
            let root = omega * (zeta * zeta - 1.0).sqrt();
            let gamma_plus = -zeta * omega + root;
            let gamma_minus = -zeta * omega - root;
            let a = (v0 - x0 * gamma_plus) / (gamma_minus - gamma_plus);
            let b = x0 - a;
            let ea = (gamma_minus * t).exp();
            let eb = (gamma_plus * t).exp();
            (a * ea + b * eb, a * gamma_minus * ea + b * gamma_plus * eb)
        } else {
            let r = -zeta * omega;
            let damped_freq = omega * (1.0 - zeta * zeta).sqrt();
            let cos_coeff = x0;
            let sin_coeff = (v0 - r * x0) / damped_freq;
            let (sin, cos) = (damped_freq * t).sin_cos();
            let decay = (r * t).exp();
            let position = cos_coeff * cos + sin_coeff * sin;
            let slope = -cos_coeff * damped_freq * sin + sin_coeff * damped_freq * cos;
            (decay * position, decay * (r * position + slope))
        };

        Motion {
            value: self.final_position + displacement as f32,
            velocity: velocity as f32,
        }
    }

    /// Whether `motion` is within `threshold` of rest.
    ///
    /// Velocity is compared as the distance it would carry the value over one
    /// radian of natural oscillation.
    pub fn is_at_rest(&self, motion: Motion, threshold: f32) -> bool {
        let displacement = (motion.value - self.final_position).abs() as f64;
        let reach = (motion.velocity as f64).abs() / self.natural_freq;
        displacement < threshold as f64 && reach < threshold as f64
    }

    /// Time until the spring settles within `threshold`, sampled at 1ms.
    pub fn settle_duration_nanos(&self, start: f32, start_velocity: f32, threshold: f32) -> u64 {
        let mut elapsed = 0;
        while elapsed < MAX_DURATION_NANOS {
            let motion = self.motion_at(start, start_velocity, elapsed);
            if self.is_at_rest(motion, threshold) {
                return elapsed;
            }
            elapsed += ESTIMATE_STEP_NANOS;
        }
        MAX_DURATION_NANOS
    }
}

#[cfg(test)]
#[path = "tests/spring_tests.rs"]
mod tests;
