// WallSit - System Events & Data Types

// ---------------------------------------------------------------------------
// Sensor Data (the three IMU channels the pitch filter needs)
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SensorData {
    /// Angular rate around Y in °/s.
    pub gyro_y: f32,
    /// Acceleration along X in g.
    pub accel_x: f32,
    /// Acceleration along Z in g.
    pub accel_z: f32,
}

impl SensorData {
    pub fn is_finite(&self) -> bool {
        self.gyro_y.is_finite() && self.accel_x.is_finite() && self.accel_z.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Buttons
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonId {
    /// Adjust / report button.
    Left,
    /// Confirm button.
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    SingleClick,
    DoubleClick,
    LongPress,
}

/// One classified click, sent from the input manager to the control loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: ButtonId,
    pub kind: ClickKind,
}

impl ButtonEvent {
    pub const fn new(button: ButtonId, kind: ClickKind) -> Self {
        Self { button, kind }
    }
}

// ---------------------------------------------------------------------------
// Session phases & traffic light
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkoutState {
    #[default]
    Idle,
    Calibration,
    Workout,
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightState {
    Red,
    RedYellow,
    Yellow,
    Green,
    #[default]
    Off,
}

impl LightState {
    /// Lamp levels as `(red, yellow, green)`.
    pub fn lamps(&self) -> (bool, bool, bool) {
        match self {
            Self::Red => (true, false, false),
            Self::RedYellow => (true, true, false),
            Self::Yellow => (false, true, false),
            Self::Green => (false, false, true),
            Self::Off => (false, false, false),
        }
    }
}

// ---------------------------------------------------------------------------
// Report request - emitted by the state machine, sent by the reporter
// ---------------------------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Share of on-target ticks in the last session, 0–100.
    pub session_percentage: u32,
    /// Number of workout sessions started since boot.
    pub session_number: u32,
}
