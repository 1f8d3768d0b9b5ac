// WallSit - Button Input Manager
//
// Debounced button handler with single-click, double-click, and long-press
// detection.  Designed to be polled from the control loop (~100 Hz); one
// `InputManager` per physical button.

use std::sync::mpsc::Sender;

use embedded_hal::digital::InputPin;

use crate::config::ClickTiming;
use crate::events::{ButtonEvent, ButtonId, ClickKind};

/// Click classifier for one button, fed with the raw "pressed" level.
#[derive(Debug, Clone)]
pub struct ClickDetector {
    timing: ClickTiming,

    // Debounce state
    last_raw: bool,
    last_debounce_ms: u64,

    // Press tracking
    press_start_ms: Option<u64>,
    button_down: bool,

    // Double-click state machine
    waiting_for_second_click: bool,
    first_click_ms: u64,
}

impl ClickDetector {
    pub fn new(timing: ClickTiming, now_ms: u64) -> Self {
        Self {
            timing,
            last_raw: false,
            last_debounce_ms: now_ms,
            press_start_ms: None,
            button_down: false,
            waiting_for_second_click: false,
            first_click_ms: now_ms,
        }
    }

    /// Feed one raw sample. Returns a click once it is fully classified.
    pub fn update(&mut self, pressed_raw: bool, now_ms: u64) -> Option<ClickKind> {
        // ---- debounce filter ----
        if pressed_raw != self.last_raw {
            self.last_debounce_ms = now_ms;
        }
        self.last_raw = pressed_raw;

        if now_ms.saturating_sub(self.last_debounce_ms) < self.timing.debounce_ms {
            // Signal still bouncing, wait.
            return self.check_double_click_timeout(now_ms);
        }

        let pressed = pressed_raw;

        // ---- button pressed edge ----
        if pressed && !self.button_down {
            self.button_down = true;
            self.press_start_ms = Some(now_ms);
        }

        // ---- button released edge ----
        if !pressed && self.button_down {
            self.button_down = false;
            let hold_ms = self
                .press_start_ms
                .map(|t| now_ms.saturating_sub(t))
                .unwrap_or(0);

            if hold_ms >= self.timing.long_press_ms {
                self.waiting_for_second_click = false;
                return Some(ClickKind::LongPress);
            } else if self.waiting_for_second_click {
                // Second click within window → double-click
                self.waiting_for_second_click = false;
                return Some(ClickKind::DoubleClick);
            } else {
                // First short click: open the double-click window
                self.waiting_for_second_click = true;
                self.first_click_ms = now_ms;
            }
        }

        self.check_double_click_timeout(now_ms)
    }

    /// If the double-click window expires, emit a single-click.
    fn check_double_click_timeout(&mut self, now_ms: u64) -> Option<ClickKind> {
        if self.waiting_for_second_click
            && now_ms.saturating_sub(self.first_click_ms) > self.timing.double_click_window_ms
        {
            self.waiting_for_second_click = false;
            return Some(ClickKind::SingleClick);
        }
        None
    }
}

/// Polls an active-LOW button pin and queues classified clicks.
pub struct InputManager<P: InputPin> {
    pin: P,
    button: ButtonId,
    detector: ClickDetector,
    tx: Sender<ButtonEvent>,
}

impl<P: InputPin> InputManager<P> {
    pub fn new(
        pin: P,
        button: ButtonId,
        timing: ClickTiming,
        tx: Sender<ButtonEvent>,
        now_ms: u64,
    ) -> Self {
        Self {
            pin,
            button,
            detector: ClickDetector::new(timing, now_ms),
            tx,
        }
    }

    /// Call every loop tick.
    pub fn update(&mut self, now_ms: u64) {
        // A failed pin read counts as released (pull-up idle level).
        let pressed = self.pin.is_low().unwrap_or(false);

        if let Some(kind) = self.detector.update(pressed, now_ms) {
            log::debug!("{:?} button: {:?}", self.button, kind);
            let _ = self.tx.send(ButtonEvent::new(self.button, kind));
        }
    }
}
