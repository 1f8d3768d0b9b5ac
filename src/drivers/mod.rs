pub mod imu;
pub mod lights;
pub mod tone;
