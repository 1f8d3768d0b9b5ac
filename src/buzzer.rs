// WallSit - Buzzer Pulse Controller
//
// Tracks whether the tone should be sounding. The firmware's tone driver
// follows `is_active()` every loop tick.

#[derive(Debug, Clone)]
pub struct Buzzer {
    pulse_ms: u64,
    active: bool,
    stop_at_ms: u64,
}

impl Buzzer {
    pub fn new(pulse_ms: u64) -> Self {
        Self {
            pulse_ms,
            active: false,
            stop_at_ms: 0,
        }
    }

    /// Begin (or extend) a pulse ending `pulse_ms` after `now_ms`.
    pub fn start(&mut self, now_ms: u64) {
        self.active = true;
        self.stop_at_ms = now_ms + self.pulse_ms;
    }

    /// Auto-stop once the pulse deadline has passed.
    pub fn tick(&mut self, now_ms: u64) {
        if self.active && now_ms > self.stop_at_ms {
            self.active = false;
        }
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulse_auto_stops_after_deadline() {
        let mut buzzer = Buzzer::new(1000);
        buzzer.start(500);
        buzzer.tick(1500);
        assert!(buzzer.is_active());
        buzzer.tick(1501);
        assert!(!buzzer.is_active());
    }

    #[test]
    fn test_restart_extends_deadline() {
        let mut buzzer = Buzzer::new(1000);
        buzzer.start(0);
        buzzer.start(800);
        buzzer.tick(1200);
        assert!(buzzer.is_active());
        buzzer.tick(1801);
        assert!(!buzzer.is_active());
    }

    #[test]
    fn test_manual_stop() {
        let mut buzzer = Buzzer::new(1000);
        buzzer.start(0);
        buzzer.stop();
        assert!(!buzzer.is_active());
        // Idempotent when already silent.
        buzzer.stop();
        buzzer.tick(5000);
        assert!(!buzzer.is_active());
    }
}
