// WallSit - Pitch Estimator
//
// Complementary filter: the integrated gyro rate tracks fast motion, the
// accelerometer tilt pulls the estimate back and cancels gyro drift.

use crate::config::TrainerConfig;
use crate::error::TrainerError;
use crate::events::SensorData;

/// Tilt from gravity alone, in degrees.
pub fn accel_pitch_deg(accel_x: f32, accel_z: f32) -> f32 {
    accel_x.atan2(accel_z).to_degrees()
}

/// Fold an angle into [-180, 180]. Rounding can land exactly on 180.
pub fn wrap_deg(angle: f32) -> f32 {
    (angle + 180.0).rem_euclid(360.0) - 180.0
}

#[derive(Debug, Clone)]
pub struct AngleEstimator {
    alpha: f32,
    interval_ms: u64,
    pitch: Option<f32>,
    last_sample_ms: Option<u64>,
    last_attempt_ms: Option<u64>,
}

impl AngleEstimator {
    pub fn new(alpha: f32, interval_ms: u64) -> Self {
        Self {
            alpha,
            interval_ms,
            pitch: None,
            last_sample_ms: None,
            last_attempt_ms: None,
        }
    }

    pub fn from_config(config: &TrainerConfig) -> Self {
        Self::new(config.filter_alpha, config.sample_interval_ms)
    }

    /// Current estimate; `None` until the first accepted sample.
    pub fn pitch(&self) -> Option<f32> {
        self.pitch
    }

    /// True once the sampling interval has elapsed since the last attempt,
    /// successful or not.
    pub fn is_due(&self, now_ms: u64) -> bool {
        match self.last_attempt_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Start a sampling slot at `now_ms`. A failed read still uses up the slot.
    pub fn record_attempt(&mut self, now_ms: u64) {
        self.last_attempt_ms = Some(now_ms.max(self.last_attempt_ms.unwrap_or(0)));
    }

    /// Fuse one IMU reading taken at `now_ms` and return the new pitch.
    ///
    /// A rejected sample keeps the previous pitch. The gyro step of the next
    /// accepted sample spans the whole gap since the last good one.
    pub fn sample(&mut self, data: &SensorData, now_ms: u64) -> Result<f32, TrainerError> {
        self.record_attempt(now_ms);
        if !data.is_finite() {
            return Err(TrainerError::InvalidSample);
        }

        let accel_pitch = accel_pitch_deg(data.accel_x, data.accel_z);

        let pitch = match (self.pitch, self.last_sample_ms) {
            (Some(prev), Some(last)) => {
                // Clock going backwards counts as no elapsed time.
                let dt = now_ms.saturating_sub(last) as f32 / 1000.0;
                let predicted = prev + data.gyro_y * dt;
                // α·pred + (1-α)·accel, taken along the shortest arc.
                wrap_deg(predicted + (1.0 - self.alpha) * wrap_deg(accel_pitch - predicted))
            }
            // Seed with gravity so the first blend has a real previous value.
            _ => accel_pitch,
        };

        if !pitch.is_finite() {
            return Err(TrainerError::InvalidSample);
        }

        self.pitch = Some(pitch);
        self.last_sample_ms = Some(now_ms.max(self.last_sample_ms.unwrap_or(0)));
        Ok(pitch)
    }
}
