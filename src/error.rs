// WallSit - Error Types
//
// None of these stop the control loop; the loop logs them and carries on.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrainerError {
    /// The IMU could not be read (bus error, device absent).
    #[error("sensor read failed: {0}")]
    SensorRead(String),

    /// The IMU answered with NaN/inf values.
    #[error("sensor returned a non-finite sample")]
    InvalidSample,

    /// The endpoint was unreachable or answered with a failure status.
    #[error("session report failed: {0}")]
    Report(String),

    /// No network link; reports are dropped.
    #[error("network unavailable, report dropped")]
    Offline,

    /// A provisioning value is absent from NVS.
    #[error("configuration value `{0}` is missing")]
    ConfigMissing(&'static str),
}
