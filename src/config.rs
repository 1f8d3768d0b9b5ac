// WallSit - Hardware & System Configuration
// Target: ESP32 DevKit (Xtensa) with SparkFun LSM6DSO breakout

// ---------------------------------------------------------------------------
// GPIO Pin Definitions
// ---------------------------------------------------------------------------
pub const PIN_CALIBRATION_LED: i32 = 2; // Blue on-board LED
pub const PIN_RED_LED: i32 = 32;
pub const PIN_YELLOW_LED: i32 = 33;
pub const PIN_GREEN_LED: i32 = 25;
pub const PIN_LEFT_BUTTON: i32 = 4;   // INPUT_PULLUP, active LOW
pub const PIN_RIGHT_BUTTON: i32 = 5;  // INPUT_PULLUP, active LOW
pub const PIN_BUZZER: i32 = 26;       // Piezo, LEDC channel 0
pub const PIN_I2C_SDA: i32 = 21;
pub const PIN_I2C_SCL: i32 = 22;

// ---------------------------------------------------------------------------
// I2C Bus
// ---------------------------------------------------------------------------
pub const I2C_ADDR_LSM6DSO: u8 = 0x6B;
pub const I2C_TIMEOUT_TICKS: u32 = 1000; // FreeRTOS ticks

// ---------------------------------------------------------------------------
// Task Stack Sizes (bytes)
// ---------------------------------------------------------------------------
pub const STACK_CONTROL: usize = 8192; // HTTP client runs on this stack too

// ---------------------------------------------------------------------------
// Timing (milliseconds)
// ---------------------------------------------------------------------------
pub const CONTROL_LOOP_INTERVAL_MS: u64 = 10;      // 100 Hz poll / refresh
pub const SAMPLE_INTERVAL_MS: u64 = 100;           // 10 Hz angle fusion
pub const CALIBRATION_MS: u64 = 10_000;
pub const CALIBRATION_BLINK_MS: u64 = 500;         // 1 Hz blink
pub const DEFAULT_SESSION_MS: i64 = 15_000;
pub const SESSION_STEP_MS: i64 = 5_000;
pub const YELLOW_WINDOW_MS: u64 = 10_000;
pub const RED_YELLOW_WINDOW_MS: u64 = 5_000;
pub const BUZZER_MS: u64 = 1_000;
pub const DEBOUNCE_MS: u64 = 50;
pub const LONG_PRESS_MS: u64 = 1_000;
pub const DOUBLE_CLICK_WINDOW_MS: u64 = 300;

// ---------------------------------------------------------------------------
// Workout scoring / sensor fusion
// ---------------------------------------------------------------------------
pub const ANGLE_TOLERANCE_DEG: f32 = 5.0;
pub const FILTER_ALPHA: f32 = 0.98;    // Trust gyro 98 %, accelerometer 2 %
pub const BUZZER_TONE_HZ: u32 = 417;

// ---------------------------------------------------------------------------
// LSM6DSO Sensor Scale Factors
// ---------------------------------------------------------------------------
pub const ACCEL_SCALE_2G: f32 = 0.061 / 1000.0;  // g/LSB    at ±2 g
pub const GYRO_SCALE_500: f32 = 17.5 / 1000.0;   // °/s/LSB  at ±500 °/s

// ---------------------------------------------------------------------------
// Network / credentials (NVS)
// ---------------------------------------------------------------------------
pub const NVS_NAMESPACE: &str = "storage";
pub const NVS_KEY_SSID: &str = "ssid";
pub const NVS_KEY_PASS: &str = "pass";
pub const NVS_KEY_ENDPOINT: &str = "endpoint";
pub const DEFAULT_REPORT_ENDPOINT: &str = "http://52.53.184.67:5000";

/// Tunables consumed by the workout core.
///
/// `Default` mirrors the constants above; tests shorten or tweak individual
/// fields instead of redefining the whole table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainerConfig {
    pub calibration_ms: u64,
    pub calibration_blink_ms: u64,
    pub default_session_ms: i64,
    pub session_step_ms: i64,
    pub yellow_window_ms: u64,
    pub red_yellow_window_ms: u64,
    pub buzzer_ms: u64,
    pub sample_interval_ms: u64,
    pub angle_tolerance_deg: f32,
    pub filter_alpha: f32,
    /// Reopen the confirm gate when a workout is skipped by hand. Off by
    /// default: a skipped session leaves Rest locked until a long-press.
    pub reopen_gate_on_skip: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            calibration_ms: CALIBRATION_MS,
            calibration_blink_ms: CALIBRATION_BLINK_MS,
            default_session_ms: DEFAULT_SESSION_MS,
            session_step_ms: SESSION_STEP_MS,
            yellow_window_ms: YELLOW_WINDOW_MS,
            red_yellow_window_ms: RED_YELLOW_WINDOW_MS,
            buzzer_ms: BUZZER_MS,
            sample_interval_ms: SAMPLE_INTERVAL_MS,
            angle_tolerance_deg: ANGLE_TOLERANCE_DEG,
            filter_alpha: FILTER_ALPHA,
            reopen_gate_on_skip: false,
        }
    }
}

/// Click classification timings for one button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTiming {
    pub debounce_ms: u64,
    pub long_press_ms: u64,
    pub double_click_window_ms: u64,
}

impl Default for ClickTiming {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            long_press_ms: LONG_PRESS_MS,
            double_click_window_ms: DOUBLE_CLICK_WINDOW_MS,
        }
    }
}
