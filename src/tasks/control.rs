// WallSit - Control Task
//
// The single loop that owns all session state. Polls both buttons, then runs
// one `ControlLoop` step and sleeps out the rest of the 10 ms period.

use std::sync::mpsc::Receiver;
use std::thread;
use std::time::{Duration, Instant};

use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver};

use wallsit::config::*;
use wallsit::events::ButtonEvent;
use wallsit::input::InputManager;
use wallsit::{ControlLoop, Reporter};

use crate::drivers::imu::Lsm6dso;
use crate::drivers::lights::Indicators;

pub type ButtonPin = PinDriver<'static, AnyIOPin, Input>;

pub struct Buttons {
    pub left: InputManager<ButtonPin>,
    pub right: InputManager<ButtonPin>,
    pub events: Receiver<ButtonEvent>,
}

pub fn control_task(
    mut imu: Lsm6dso,
    mut outputs: Indicators,
    mut buttons: Buttons,
    mut reporter: Box<dyn Reporter + Send>,
) {
    log::info!("Control task started");

    let mut control = ControlLoop::new(TrainerConfig::default());
    let interval = Duration::from_millis(CONTROL_LOOP_INTERVAL_MS);

    loop {
        let tick_start = Instant::now();
        let now = crate::now_ms();

        // 1. Poll the buttons (debounce + click detection internally).
        buttons.left.update(now);
        buttons.right.update(now);

        // 2. Drain clicks, fuse the IMU, advance the session, refresh outputs.
        control.step(now, buttons.events.try_iter(), &mut imu, &mut outputs, reporter.as_mut());

        // Sleep for the remainder of the loop period.
        let elapsed = tick_start.elapsed();
        if elapsed < interval {
            thread::sleep(interval - elapsed);
        }
    }
}
