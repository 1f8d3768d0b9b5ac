// WallSit - Indicator Driver
//
// Pure mapping from controller state to output levels. The whole frame is
// written every loop tick, so sinks must tolerate repeated identical writes.

use crate::events::LightState;

/// Physical outputs: traffic light, calibration LED and buzzer.
pub trait IndicatorSink {
    fn set_lights(&mut self, red: bool, yellow: bool, green: bool);
    fn set_calibration_indicator(&mut self, on: bool);
    fn set_buzzer(&mut self, on: bool);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndicatorFrame {
    pub red: bool,
    pub yellow: bool,
    pub green: bool,
    pub calibration: bool,
    pub buzzer: bool,
}

impl IndicatorFrame {
    pub fn compose(light: LightState, calibration: bool, buzzer: bool) -> Self {
        let (red, yellow, green) = light.lamps();
        Self {
            red,
            yellow,
            green,
            calibration,
            buzzer,
        }
    }

    pub fn apply<S: IndicatorSink + ?Sized>(&self, sink: &mut S) {
        sink.set_lights(self.red, self.yellow, self.green);
        sink.set_calibration_indicator(self.calibration);
        sink.set_buzzer(self.buzzer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        writes: usize,
        last: IndicatorFrame,
    }

    impl IndicatorSink for Recorder {
        fn set_lights(&mut self, red: bool, yellow: bool, green: bool) {
            self.writes += 1;
            self.last.red = red;
            self.last.yellow = yellow;
            self.last.green = green;
        }
        fn set_calibration_indicator(&mut self, on: bool) {
            self.writes += 1;
            self.last.calibration = on;
        }
        fn set_buzzer(&mut self, on: bool) {
            self.writes += 1;
            self.last.buzzer = on;
        }
    }

    #[test]
    fn test_light_mapping() {
        let cases = [
            (LightState::Red, (true, false, false)),
            (LightState::RedYellow, (true, true, false)),
            (LightState::Yellow, (false, true, false)),
            (LightState::Green, (false, false, true)),
            (LightState::Off, (false, false, false)),
        ];

        for (light, (r, y, g)) in cases {
            let frame = IndicatorFrame::compose(light, false, false);
            assert_eq!((frame.red, frame.yellow, frame.green), (r, y, g), "{light:?}");
        }
    }

    #[test]
    fn test_apply_is_idempotent() {
        let frame = IndicatorFrame::compose(LightState::RedYellow, true, true);
        let mut sink = Recorder::default();
        frame.apply(&mut sink);
        let first = sink.last;
        frame.apply(&mut sink);

        assert_eq!(sink.last, first);
        assert_eq!(sink.last, frame);
        assert_eq!(sink.writes, 6);
    }
}
