#![allow(dead_code)]

use wallsit::config::TrainerConfig;
use wallsit::events::{ButtonEvent, ButtonId, ClickKind, SensorData, SessionReport};
use wallsit::indicator::IndicatorFrame;
use wallsit::{ControlLoop, IndicatorSink, Reporter, SensorSource, TrainerError};

pub const RIGHT: ButtonEvent = ButtonEvent::new(ButtonId::Right, ClickKind::SingleClick);
pub const RIGHT_HOLD: ButtonEvent = ButtonEvent::new(ButtonId::Right, ClickKind::LongPress);
pub const LEFT: ButtonEvent = ButtonEvent::new(ButtonId::Left, ClickKind::SingleClick);
pub const LEFT_DOUBLE: ButtonEvent = ButtonEvent::new(ButtonId::Left, ClickKind::DoubleClick);

/// IMU held at a fixed tilt; `failing` makes every read error out.
pub struct FakeSensor {
    pub pitch_deg: f32,
    pub gyro_y: f32,
    pub failing: bool,
    pub reads: usize,
}

impl FakeSensor {
    pub fn at(pitch_deg: f32) -> Self {
        Self {
            pitch_deg,
            gyro_y: 0.0,
            failing: false,
            reads: 0,
        }
    }
}

impl SensorSource for FakeSensor {
    fn read(&mut self) -> Result<SensorData, TrainerError> {
        self.reads += 1;
        if self.failing {
            return Err(TrainerError::SensorRead("bus timeout".into()));
        }
        let rad = self.pitch_deg.to_radians();
        Ok(SensorData {
            gyro_y: self.gyro_y,
            accel_x: rad.sin(),
            accel_z: rad.cos(),
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub frame: IndicatorFrame,
    pub frames: usize,
}

impl IndicatorSink for RecordingSink {
    fn set_lights(&mut self, red: bool, yellow: bool, green: bool) {
        self.frames += 1;
        self.frame.red = red;
        self.frame.yellow = yellow;
        self.frame.green = green;
    }
    fn set_calibration_indicator(&mut self, on: bool) {
        self.frame.calibration = on;
    }
    fn set_buzzer(&mut self, on: bool) {
        self.frame.buzzer = on;
    }
}

#[derive(Default)]
pub struct RecordingReporter {
    pub sent: Vec<SessionReport>,
    pub fail: bool,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, report: &SessionReport) -> Result<(), TrainerError> {
        if self.fail {
            return Err(TrainerError::Report("connection refused".into()));
        }
        self.sent.push(*report);
        Ok(())
    }
}

/// A control loop with fake hardware and a virtual millisecond clock.
pub struct Rig {
    pub control: ControlLoop,
    pub sensor: FakeSensor,
    pub sink: RecordingSink,
    pub reporter: RecordingReporter,
    pub now: u64,
    pub period: u64,
}

impl Rig {
    pub fn new(pitch_deg: f32) -> Self {
        Self {
            control: ControlLoop::new(TrainerConfig::default()),
            sensor: FakeSensor::at(pitch_deg),
            sink: RecordingSink::default(),
            reporter: RecordingReporter::default(),
            now: 0,
            period: 100,
        }
    }

    /// One loop iteration at the current time with the given clicks queued.
    pub fn step(&mut self, events: &[ButtonEvent]) {
        self.control.step(
            self.now,
            events.iter().copied(),
            &mut self.sensor,
            &mut self.sink,
            &mut self.reporter,
        );
    }

    /// Click, then advance one period.
    pub fn click(&mut self, event: ButtonEvent) {
        self.step(&[event]);
        self.now += self.period;
    }

    /// Idle ticks until the clock reaches `until_ms`.
    pub fn run_until(&mut self, until_ms: u64) {
        while self.now < until_ms {
            self.step(&[]);
            self.now += self.period;
        }
    }
}
