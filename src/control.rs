// WallSit - Control Loop Step
//
// One iteration of the firmware loop: drain clicks, fuse a new IMU sample if
// the interval elapsed, advance the state machine, refresh every output.
// Nothing here can fail the loop; errors are logged and the step completes.

use crate::angle::AngleEstimator;
use crate::config::TrainerConfig;
use crate::controller::SessionController;
use crate::error::TrainerError;
use crate::events::{ButtonEvent, SensorData};
use crate::indicator::IndicatorSink;
use crate::reporter::Reporter;

/// Anything that can produce one IMU reading on demand.
pub trait SensorSource {
    fn read(&mut self) -> Result<SensorData, TrainerError>;
}

pub struct ControlLoop {
    controller: SessionController,
    estimator: AngleEstimator,
}

impl ControlLoop {
    pub fn new(config: TrainerConfig) -> Self {
        Self {
            controller: SessionController::new(config),
            estimator: AngleEstimator::from_config(&config),
        }
    }

    pub fn step<I, S, K, R>(
        &mut self,
        now_ms: u64,
        events: I,
        sensor: &mut S,
        sink: &mut K,
        reporter: &mut R,
    ) where
        I: IntoIterator<Item = ButtonEvent>,
        S: SensorSource + ?Sized,
        K: IndicatorSink + ?Sized,
        R: Reporter + ?Sized,
    {
        // 1. Every queued click gets exactly one handler call.
        for event in events {
            if let Some(report) = self.controller.handle_event(event, now_ms) {
                log::info!(
                    "Reporting session {} at {}%",
                    report.session_number,
                    report.session_percentage
                );
                match reporter.report(&report) {
                    Ok(()) => log::info!("Session report delivered"),
                    Err(e) => log::warn!("Session report dropped: {}", e),
                }
            }
        }

        // 2. Sensor fusion at the fixed cadence; failures keep the last angle.
        if self.estimator.is_due(now_ms) {
            self.estimator.record_attempt(now_ms);
            match sensor.read().and_then(|data| self.estimator.sample(&data, now_ms)) {
                Ok(pitch) => log::trace!("pitch {:.2}°", pitch),
                Err(e) => log::warn!("IMU sample skipped: {}", e),
            }
        }

        // 3. Timers and scoring.
        self.controller.tick(now_ms, self.estimator.pitch());

        // 4. Outputs follow state.
        self.controller.indicator_frame().apply(sink);
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn estimator(&self) -> &AngleEstimator {
        &self.estimator
    }
}
