//! LSM9DS0 9-DOF inertial measurement unit
//!
//! Register facade over the bus engine for the gyroscope and the
//! combined accelerometer/magnetometer, plus conversion of raw 16-bit
//! samples to scaled physical units.

mod lsm9ds0;
pub mod regs;

pub use lsm9ds0::{
    Lsm9ds0, ACCEL_SCALE_G, GYRO_SCALE_DPS, MAG_SCALE_GAUSS, UNIT_FACTOR,
};

/// One three-axis sample in scaled physical units
///
/// Values are physical-unit readings multiplied by 100: degrees per
/// second for the gyroscope, g for the accelerometer, gauss for the
/// magnetometer. Created fresh on every read, never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisReading {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}
