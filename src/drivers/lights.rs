// WallSit - LED & Buzzer Outputs
//
// GPIO traffic light plus the blue calibration LED, and the piezo behind the
// same sink so the control loop writes one frame per tick.

use esp_idf_hal::gpio::{AnyOutputPin, Output, PinDriver};

use wallsit::IndicatorSink;

use super::tone::ToneDriver;

type Led = PinDriver<'static, AnyOutputPin, Output>;

pub struct Indicators {
    red: Led,
    yellow: Led,
    green: Led,
    calibration: Led,
    tone: ToneDriver<'static>,
}

impl Indicators {
    pub fn new(
        red: Led,
        yellow: Led,
        green: Led,
        calibration: Led,
        tone: ToneDriver<'static>,
    ) -> Self {
        let mut this = Self {
            red,
            yellow,
            green,
            calibration,
            tone,
        };
        // Start dark and silent.
        this.set_lights(false, false, false);
        this.set_calibration_indicator(false);
        this.set_buzzer(false);
        this
    }
}

impl IndicatorSink for Indicators {
    fn set_lights(&mut self, red: bool, yellow: bool, green: bool) {
        let _ = self.red.set_level(red.into());
        let _ = self.yellow.set_level(yellow.into());
        let _ = self.green.set_level(green.into());
    }

    fn set_calibration_indicator(&mut self, on: bool) {
        let _ = self.calibration.set_level(on.into());
    }

    fn set_buzzer(&mut self, on: bool) {
        if let Err(e) = self.tone.set(on) {
            log::warn!("Buzzer write failed: {}", e);
        }
    }
}
