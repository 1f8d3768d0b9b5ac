// WallSit - Workout State Machine
//
// Owns every piece of session state: phase, traffic light, confirm gate,
// deadline, counters, calibration target, workout length and buzzer.
// Driven by `handle_event` for clicks and `tick` once per loop iteration.

use crate::buzzer::Buzzer;
use crate::config::TrainerConfig;
use crate::events::{ButtonEvent, ButtonId, ClickKind, LightState, SessionReport, WorkoutState};
use crate::indicator::IndicatorFrame;
use crate::session::{CalibrationTarget, SessionCounters, SessionThreshold};

#[derive(Debug, Clone)]
pub struct SessionController {
    config: TrainerConfig,
    workout_state: WorkoutState,
    light_state: LightState,
    /// Confirm gate: while false, right single-clicks outside Workout are ignored.
    button_reactive: bool,
    /// Calibration end or workout end, depending on `workout_state`.
    deadline_ms: u64,
    calibration_led: bool,
    counters: SessionCounters,
    target: CalibrationTarget,
    threshold: SessionThreshold,
    buzzer: Buzzer,
}

impl SessionController {
    pub fn new(config: TrainerConfig) -> Self {
        Self {
            workout_state: WorkoutState::Idle,
            light_state: LightState::Off,
            button_reactive: true,
            deadline_ms: 0,
            calibration_led: false,
            counters: SessionCounters::new(),
            target: CalibrationTarget::default(),
            threshold: SessionThreshold::new(config.default_session_ms),
            buzzer: Buzzer::new(config.buzzer_ms),
            config,
        }
    }

    // ------------------------------------------------------------------
    // Button dispatch
    // ------------------------------------------------------------------

    /// React to one classified click. Returns a report request when the user
    /// asks for the last session to be uploaded.
    pub fn handle_event(&mut self, event: ButtonEvent, now_ms: u64) -> Option<SessionReport> {
        log::debug!("{:?} {:?} in {:?}", event.button, event.kind, self.workout_state);

        match (event.button, event.kind) {
            (ButtonId::Right, ClickKind::SingleClick) => self.confirm(now_ms),
            (ButtonId::Right, ClickKind::LongPress) => self.end_run(),
            (ButtonId::Left, ClickKind::SingleClick) => match self.workout_state {
                WorkoutState::Calibration => self.adjust_threshold(self.config.session_step_ms),
                WorkoutState::Rest => return Some(self.report()),
                _ => {}
            },
            (ButtonId::Left, ClickKind::DoubleClick) => {
                if self.workout_state == WorkoutState::Calibration {
                    self.adjust_threshold(-self.config.session_step_ms);
                }
            }
            _ => {}
        }
        None
    }

    fn confirm(&mut self, now_ms: u64) {
        match self.workout_state {
            // Skipping is always allowed; it is the only way out of a running set.
            WorkoutState::Workout => self.finish_workout(now_ms, true),
            _ if !self.button_reactive => {
                log::debug!("Confirm ignored, waiting on {:?}", self.workout_state);
            }
            WorkoutState::Idle => self.start_calibration(now_ms),
            WorkoutState::Calibration => {
                let length_ms = self.threshold.clamp_to_default();
                log::info!("Session length: {} ms", length_ms);
                self.start_workout(now_ms, length_ms);
            }
            WorkoutState::Rest => {
                let length_ms = self.threshold.current_ms().max(0) as u64;
                self.start_workout(now_ms, length_ms);
            }
        }
    }

    fn adjust_threshold(&mut self, delta_ms: i64) {
        self.threshold.adjust(delta_ms);
        log::info!("Session length set to {} ms", self.threshold.current_ms());
    }

    fn report(&self) -> SessionReport {
        SessionReport {
            session_percentage: self.counters.percentage(),
            session_number: self.counters.session_total(),
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn start_calibration(&mut self, now_ms: u64) {
        self.workout_state = WorkoutState::Calibration;
        self.deadline_ms = now_ms + self.config.calibration_ms;
        self.button_reactive = false;
        self.target.reset();
        log::info!("Calibration started, hold position for {} ms", self.config.calibration_ms);
    }

    fn start_workout(&mut self, now_ms: u64, length_ms: u64) {
        self.workout_state = WorkoutState::Workout;
        self.deadline_ms = now_ms + length_ms;
        self.light_state = LightState::Green;
        self.calibration_led = false;
        self.button_reactive = false;
        self.counters.begin_session();
        self.buzzer.start(now_ms);
        log::info!("Session {} started", self.counters.session_total());
    }

    fn finish_workout(&mut self, now_ms: u64, skipped: bool) {
        self.workout_state = WorkoutState::Rest;
        self.light_state = LightState::Red;
        if !skipped || self.config.reopen_gate_on_skip {
            self.button_reactive = true;
        }
        self.buzzer.start(now_ms);

        let ratio = self.counters.finish_session();
        log::info!(
            "Session {}: score {}/{} ({:.1}%)",
            if skipped { "skipped" } else { "finished" },
            self.counters.score(),
            self.counters.max_score(),
            ratio * 100.0
        );
    }

    fn end_run(&mut self) {
        if self.workout_state != WorkoutState::Rest {
            return;
        }
        self.workout_state = WorkoutState::Idle;
        self.light_state = LightState::Off;
        self.calibration_led = false;
        self.button_reactive = true;
        self.buzzer.stop();

        log::info!(
            "Run complete: {} sessions, average {:.1}%",
            self.counters.session_total(),
            self.counters.average_ratio() * 100.0
        );
    }

    // ------------------------------------------------------------------
    // Periodic work
    // ------------------------------------------------------------------

    /// Advance timers and scoring. `pitch` is the latest fused estimate.
    pub fn tick(&mut self, now_ms: u64, pitch: Option<f32>) {
        match self.workout_state {
            WorkoutState::Idle | WorkoutState::Rest => {}
            WorkoutState::Calibration => self.tick_calibration(now_ms, pitch),
            WorkoutState::Workout => self.tick_workout(now_ms, pitch),
        }
        self.buzzer.tick(now_ms);
    }

    fn tick_calibration(&mut self, now_ms: u64, pitch: Option<f32>) {
        if now_ms <= self.deadline_ms {
            self.calibration_led = (now_ms / self.config.calibration_blink_ms) % 2 == 0;
            return;
        }

        if !self.target.is_locked() {
            let locked = pitch.unwrap_or_else(|| {
                log::warn!("No pitch estimate at calibration end, locking 0°");
                0.0
            });
            self.target.lock(locked);
            log::info!("Calibration done, target locked at {:.1}°", locked);
        }
        self.calibration_led = false;
        self.button_reactive = true;
    }

    fn tick_workout(&mut self, now_ms: u64, pitch: Option<f32>) {
        let on_target = pitch
            .map(|p| self.target.is_on_target(p, self.config.angle_tolerance_deg))
            .unwrap_or(false);
        self.counters.record_tick(on_target);

        if now_ms > self.deadline_ms {
            self.finish_workout(now_ms, false);
            return;
        }

        let remaining_ms = self.deadline_ms - now_ms;
        if remaining_ms < self.config.red_yellow_window_ms {
            self.light_state = LightState::RedYellow;
        } else if remaining_ms < self.config.yellow_window_ms {
            self.light_state = LightState::Yellow;
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Output levels for the current state.
    pub fn indicator_frame(&self) -> IndicatorFrame {
        IndicatorFrame::compose(self.light_state, self.calibration_led, self.buzzer.is_active())
    }

    pub fn workout_state(&self) -> WorkoutState {
        self.workout_state
    }

    pub fn light_state(&self) -> LightState {
        self.light_state
    }

    pub fn is_button_reactive(&self) -> bool {
        self.button_reactive
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }

    pub fn calibration_led(&self) -> bool {
        self.calibration_led
    }

    pub fn buzzer_active(&self) -> bool {
        self.buzzer.is_active()
    }

    pub fn counters(&self) -> &SessionCounters {
        &self.counters
    }

    pub fn target(&self) -> &CalibrationTarget {
        &self.target
    }

    pub fn threshold(&self) -> &SessionThreshold {
        &self.threshold
    }

    #[cfg(test)]
    pub(crate) fn counters_mut(&mut self) -> &mut SessionCounters {
        &mut self.counters
    }
}
