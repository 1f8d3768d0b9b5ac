// WallSit - LSM6DSO IMU Driver
//
// Register-level driver over the I2C bus. Only the channels the pitch filter
// needs are converted: gyro Y, accel X, accel Z.

use esp_idf_hal::i2c::I2cDriver;

use wallsit::config::*;
use wallsit::events::SensorData;
use wallsit::{SensorSource, TrainerError};

// LSM6DSO register addresses
const REG_WHO_AM_I: u8 = 0x0F;
const REG_CTRL1_XL: u8 = 0x10;
const REG_CTRL2_G: u8 = 0x11;
const REG_CTRL3_C: u8 = 0x12;
const REG_OUTX_L_G: u8 = 0x22; // Start of 12-byte gyro + accel burst
const WHO_AM_I_EXPECTED: u8 = 0x6C;

pub struct Lsm6dso {
    bus: I2cDriver<'static>,
}

impl Lsm6dso {
    pub fn new(bus: I2cDriver<'static>) -> Self {
        Self { bus }
    }

    /// Verify the device is reachable on the I2C bus.
    pub fn is_connected(&mut self) -> bool {
        let mut buf = [0u8; 1];
        match self.bus.write_read(I2C_ADDR_LSM6DSO, &[REG_WHO_AM_I], &mut buf, I2C_TIMEOUT_TICKS) {
            Ok(()) => buf[0] == WHO_AM_I_EXPECTED,
            Err(_) => false,
        }
    }

    /// Configure accel (±2 g, 104 Hz) and gyro (±500 °/s, 104 Hz).
    pub fn init(&mut self) -> anyhow::Result<()> {
        // Block data update + register auto-increment for burst reads
        self.bus.write(I2C_ADDR_LSM6DSO, &[REG_CTRL3_C, 0x44], I2C_TIMEOUT_TICKS)?;

        // Accelerometer: 104 Hz, ±2 g
        self.bus.write(I2C_ADDR_LSM6DSO, &[REG_CTRL1_XL, 0x40], I2C_TIMEOUT_TICKS)?;

        // Gyroscope: 104 Hz, ±500 °/s
        self.bus.write(I2C_ADDR_LSM6DSO, &[REG_CTRL2_G, 0x44], I2C_TIMEOUT_TICKS)?;

        log::info!("LSM6DSO initialised (±2g, ±500°/s, 104Hz)");
        Ok(())
    }

    /// Burst-read gyro and accel and convert to physical units.
    pub fn read_data(&mut self) -> anyhow::Result<SensorData> {
        let mut raw = [0u8; 12];
        self.bus.write_read(
            I2C_ADDR_LSM6DSO,
            &[REG_OUTX_L_G],
            &mut raw,
            I2C_TIMEOUT_TICKS,
        )?;

        // raw[0..6] = gyro X/Y/Z, raw[6..12] = accel X/Y/Z, little-endian
        Ok(SensorData {
            gyro_y: i16::from_le_bytes([raw[2], raw[3]]) as f32 * GYRO_SCALE_500,
            accel_x: i16::from_le_bytes([raw[6], raw[7]]) as f32 * ACCEL_SCALE_2G,
            accel_z: i16::from_le_bytes([raw[10], raw[11]]) as f32 * ACCEL_SCALE_2G,
        })
    }
}

impl SensorSource for Lsm6dso {
    fn read(&mut self) -> Result<SensorData, TrainerError> {
        self.read_data().map_err(|e| TrainerError::SensorRead(e.to_string()))
    }
}
