// WallSit - Wall-sit posture trainer core
//
// Board-agnostic logic: pitch fusion, session scoring, the workout state
// machine and the indicator mapping. The ESP-IDF firmware in `main.rs`
// supplies the sensor, outputs, buttons and network reporter.

pub mod angle;
pub mod buzzer;
pub mod config;
pub mod control;
pub mod controller;
pub mod error;
pub mod events;
pub mod indicator;
pub mod input;
pub mod reporter;
pub mod session;

pub use control::{ControlLoop, SensorSource};
pub use controller::SessionController;
pub use error::TrainerError;
pub use indicator::IndicatorSink;
pub use reporter::Reporter;
