// WallSit - Piezo Tone Driver
//
// LEDC square wave at a fixed pitch; 50 % duty sounds, 0 % is silent.

use esp_idf_hal::ledc::LedcDriver;

pub struct ToneDriver<'d> {
    channel: LedcDriver<'d>,
    sounding: bool,
}

impl<'d> ToneDriver<'d> {
    pub fn new(mut channel: LedcDriver<'d>) -> anyhow::Result<Self> {
        channel.set_duty(0)?;
        Ok(Self {
            channel,
            sounding: false,
        })
    }

    /// Switch the tone on or off. Repeated calls with the same level are free.
    pub fn set(&mut self, on: bool) -> anyhow::Result<()> {
        if on == self.sounding {
            return Ok(());
        }
        let duty = if on { self.channel.get_max_duty() / 2 } else { 0 };
        self.channel.set_duty(duty)?;
        self.sounding = on;
        Ok(())
    }
}
