// WallSit - Firmware Entry Point
//
// Boot sequence:
//   1. Read WiFi credentials from NVS and try to join the network.
//   2. Configure the traffic-light LEDs, calibration LED and piezo buzzer.
//   3. Bring up the LSM6DSO on I2C.
//   4. Configure both buttons (pull-up, active LOW).
//   5. Spawn the control task that runs the workout state machine.
//
// Without credentials or a network link the trainer still runs; session
// reports are simply dropped.

#[cfg(target_os = "espidf")]
mod drivers;
#[cfg(target_os = "espidf")]
mod net;
#[cfg(target_os = "espidf")]
mod tasks;

#[cfg(target_os = "espidf")]
mod firmware {
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use esp_idf_hal::gpio::{AnyIOPin, IOPin, OutputPin, PinDriver, Pull};
    use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
    use esp_idf_hal::ledc::config::TimerConfig;
    use esp_idf_hal::ledc::{LedcDriver, LedcTimerDriver};
    use esp_idf_hal::prelude::*;
    use esp_idf_svc::eventloop::EspSystemEventLoop;
    use esp_idf_svc::nvs::EspDefaultNvsPartition;

    use wallsit::config::*;
    use wallsit::events::ButtonId;
    use wallsit::input::InputManager;
    use wallsit::reporter::OfflineReporter;
    use wallsit::Reporter;

    use crate::drivers::imu::Lsm6dso;
    use crate::drivers::lights::Indicators;
    use crate::drivers::tone::ToneDriver;
    use crate::net::http::HttpReporter;
    use crate::tasks::control::{control_task, ButtonPin, Buttons};

    // -----------------------------------------------------------------------
    // Utility: milliseconds since boot
    // -----------------------------------------------------------------------
    pub fn now_ms() -> u64 {
        (unsafe { esp_idf_sys::esp_timer_get_time() } / 1000) as u64
    }

    pub fn run() -> anyhow::Result<()> {
        // Link esp-idf-sys runtime patches and initialise logging.
        esp_idf_svc::sys::link_patches();
        esp_idf_svc::log::EspLogger::initialize_default();
        log::info!("WallSit firmware starting…");

        // ---- Peripherals ------------------------------------------------------
        let peripherals = Peripherals::take()?;
        let sysloop = EspSystemEventLoop::take()?;
        let nvs = EspDefaultNvsPartition::take()?;

        // ---- Network (optional) -----------------------------------------------
        let mut _wifi = None;
        let reporter: Box<dyn Reporter + Send> = match crate::net::credentials::load(nvs.clone()) {
            Ok(credentials) => {
                match crate::net::wifi::connect(peripherals.modem, sysloop, nvs, &credentials) {
                    Ok(wifi) => {
                        _wifi = Some(wifi);
                        Box::new(HttpReporter::new(credentials.endpoint))
                    }
                    Err(e) => {
                        log::error!("WiFi connection failed: {}, running offline", e);
                        Box::new(OfflineReporter)
                    }
                }
            }
            Err(e) => {
                log::error!("No WiFi credentials: {}, running offline", e);
                Box::new(OfflineReporter)
            }
        };

        // ---- Outputs ----------------------------------------------------------
        let red = PinDriver::output(peripherals.pins.gpio32.downgrade_output())?;
        let yellow = PinDriver::output(peripherals.pins.gpio33.downgrade_output())?;
        let green = PinDriver::output(peripherals.pins.gpio25.downgrade_output())?;
        let blue = PinDriver::output(peripherals.pins.gpio2.downgrade_output())?;

        // The LEDC timer must outlive the channel; it lives for the whole programme.
        let ledc_timer = Box::leak(Box::new(LedcTimerDriver::new(
            peripherals.ledc.timer0,
            &TimerConfig::default().frequency(BUZZER_TONE_HZ.Hz()),
        )?));
        let buzzer = LedcDriver::new(
            peripherals.ledc.channel0,
            &*ledc_timer,
            peripherals.pins.gpio26,
        )?;
        let tone = ToneDriver::new(buzzer)?;

        let outputs = Indicators::new(red, yellow, green, blue, tone);
        log::info!(
            "Outputs ready (R{} Y{} G{} cal{} buzzer{})",
            PIN_RED_LED, PIN_YELLOW_LED, PIN_GREEN_LED, PIN_CALIBRATION_LED, PIN_BUZZER
        );

        // ---- IMU --------------------------------------------------------------
        let i2c_config = I2cConfig::new().baudrate(400u32.kHz().into());
        let i2c = I2cDriver::new(
            peripherals.i2c0,
            peripherals.pins.gpio21, // SDA
            peripherals.pins.gpio22, // SCL
            &i2c_config,
        )?;
        let mut imu = Lsm6dso::new(i2c);
        if !imu.is_connected() {
            // Keep going: the loop reuses the last angle on every failed read.
            log::error!("LSM6DSO not found at 0x{:02X}", I2C_ADDR_LSM6DSO);
        } else if let Err(e) = imu.init() {
            log::error!("LSM6DSO init failed: {}", e);
        }

        // ---- Buttons ----------------------------------------------------------
        let (events_tx, events_rx) = mpsc::channel();
        let now = now_ms();
        let left = InputManager::new(
            button(peripherals.pins.gpio4.downgrade())?,
            ButtonId::Left,
            ClickTiming::default(),
            events_tx.clone(),
            now,
        );
        let right = InputManager::new(
            button(peripherals.pins.gpio5.downgrade())?,
            ButtonId::Right,
            ClickTiming::default(),
            events_tx,
            now,
        );
        let buttons = Buttons {
            left,
            right,
            events: events_rx,
        };
        log::info!("Buttons ready (left GPIO{}, right GPIO{})", PIN_LEFT_BUTTON, PIN_RIGHT_BUTTON);

        // ---- Control task -----------------------------------------------------
        thread::Builder::new()
            .name("control".into())
            .stack_size(STACK_CONTROL)
            .spawn(move || control_task(imu, outputs, buttons, reporter))?;

        log::info!("Boot complete, entering normal operation");

        // Main thread has nothing left to do, but it keeps the WiFi driver alive.
        loop {
            thread::sleep(Duration::from_secs(60));
        }
    }

    /// Input with the internal pull-up enabled (buttons pull the line LOW).
    fn button(pin: AnyIOPin) -> anyhow::Result<ButtonPin> {
        let mut driver = PinDriver::input(pin)?;
        driver.set_pull(Pull::Up)?;
        Ok(driver)
    }
}

#[cfg(target_os = "espidf")]
pub use firmware::now_ms;

#[cfg(target_os = "espidf")]
fn main() -> anyhow::Result<()> {
    firmware::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!(
        "wallsit: the firmware binary only runs on an ESP-IDF target; \
         the core library is host-testable with `cargo test --lib --tests`"
    );
}
