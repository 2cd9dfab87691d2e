//! LSM9DS0 driver
//!
//! Each measurement read is six single-byte register transactions (low
//! then high byte per axis); the chip's register auto-increment is not
//! used. Init sequences fix the full-scale ranges the scale constants
//! below assume, so changing one means changing the other.

use ninedof_hal::diag::DiagnosticSink;
use ninedof_hal::i2c::I2cPeripheral;

use super::regs;
use super::AxisReading;
use crate::bus::{BusTimeout, I2cMaster};

/// Gyroscope sensitivity at the configured ±245 dps full scale,
/// degrees per second per ADC count
pub const GYRO_SCALE_DPS: f32 = 245.0 / 32768.0;

/// Accelerometer sensitivity at the configured ±2 g full scale,
/// g per ADC count
pub const ACCEL_SCALE_G: f32 = 2.0 / 32768.0;

/// Magnetometer sensitivity at the configured ±2 gauss full scale,
/// gauss per ADC count
pub const MAG_SCALE_GAUSS: f32 = 2.0 / 32768.0;

/// Readings are reported as physical units times this factor
pub const UNIT_FACTOR: f32 = 100.0;

/// LSM9DS0 register facade over the bus engine
pub struct Lsm9ds0<P, D> {
    bus: I2cMaster<P, D>,
}

impl<P: I2cPeripheral, D: DiagnosticSink> Lsm9ds0<P, D> {
    /// Wrap an already-initialized bus engine
    pub fn new(bus: I2cMaster<P, D>) -> Self {
        Self { bus }
    }

    /// Hand the bus engine back
    pub fn release(self) -> I2cMaster<P, D> {
        self.bus
    }

    /// Write a gyroscope register
    pub fn write_gyro_register(&mut self, register: u8, value: u8) -> Result<(), BusTimeout> {
        self.bus.write_register(regs::GYRO_ADDRESS, register, value)
    }

    /// Read a gyroscope register
    pub fn read_gyro_register(&mut self, register: u8) -> Result<u8, BusTimeout> {
        self.bus.read_register(regs::GYRO_ADDRESS, register)
    }

    /// Write an accelerometer/magnetometer register
    pub fn write_xm_register(&mut self, register: u8, value: u8) -> Result<(), BusTimeout> {
        self.bus.write_register(regs::XM_ADDRESS, register, value)
    }

    /// Read an accelerometer/magnetometer register
    pub fn read_xm_register(&mut self, register: u8) -> Result<u8, BusTimeout> {
        self.bus.read_register(regs::XM_ADDRESS, register)
    }

    /// Check the gyroscope identity register
    pub fn gyro_present(&mut self) -> Result<bool, BusTimeout> {
        Ok(self.read_gyro_register(regs::WHO_AM_I_G)? == regs::WHO_AM_I_G_VALUE)
    }

    /// Check the accelerometer/magnetometer identity register
    pub fn xm_present(&mut self) -> Result<bool, BusTimeout> {
        Ok(self.read_xm_register(regs::WHO_AM_I_XM)? == regs::WHO_AM_I_XM_VALUE)
    }

    /// Configure the gyroscope: normal mode, all axes, ±245 dps, no
    /// interrupts, no FIFO
    pub fn init_gyro(&mut self) -> Result<(), BusTimeout> {
        self.write_gyro_register(regs::CTRL_REG1_G, 0x0F)?; // Normal mode, enable all axes
        self.write_gyro_register(regs::CTRL_REG2_G, 0x00)?; // Normal mode, high cutoff frequency
        self.write_gyro_register(regs::CTRL_REG3_G, 0x00)?; // Disable interrupts
        self.write_gyro_register(regs::CTRL_REG4_G, 0x00)?; // Set scale to 245 dps
        self.write_gyro_register(regs::CTRL_REG5_G, 0x00)?; // Disable fifo mode
        Ok(())
    }

    /// Configure the accelerometer: 100 Hz, all axes, ±2 g, no FIFO
    pub fn init_accel(&mut self) -> Result<(), BusTimeout> {
        self.write_xm_register(regs::CTRL_REG0_XM, 0x00)?; // Disable fifo mode
        self.write_xm_register(regs::CTRL_REG1_XM, 0x57)?; // 100Hz data rate, x/y/z all enabled
        self.write_xm_register(regs::CTRL_REG2_XM, 0x00)?; // Set scale to 2g
        self.write_xm_register(regs::CTRL_REG3_XM, 0x00)?;
        Ok(())
    }

    /// Configure the magnetometer: 100 Hz, ±2 gauss, continuous
    /// conversion, no interrupts
    pub fn init_mag(&mut self) -> Result<(), BusTimeout> {
        self.write_xm_register(regs::CTRL_REG5_XM, 0x14)?; // Mag data rate - 100 Hz
        self.write_xm_register(regs::CTRL_REG6_XM, 0x00)?; // Mag scale to +/- 2GS
        self.write_xm_register(regs::CTRL_REG7_XM, 0x00)?; // Continuous conversion mode
        self.write_xm_register(regs::CTRL_REG4_XM, 0x00)?;
        self.write_xm_register(regs::INT_CTRL_REG_M, 0x00)?; // Disable interrupts for mag
        Ok(())
    }

    /// Read angular rate, degrees per second x100
    pub fn read_gyro(&mut self) -> Result<AxisReading, BusTimeout> {
        self.read_sample(regs::GYRO_ADDRESS, regs::OUT_X_L_G, GYRO_SCALE_DPS)
    }

    /// Read acceleration, g x100
    pub fn read_accel(&mut self) -> Result<AxisReading, BusTimeout> {
        self.read_sample(regs::XM_ADDRESS, regs::OUT_X_L_A, ACCEL_SCALE_G)
    }

    /// Read magnetic field, gauss x100
    pub fn read_mag(&mut self) -> Result<AxisReading, BusTimeout> {
        self.read_sample(regs::XM_ADDRESS, regs::OUT_X_L_M, MAG_SCALE_GAUSS)
    }

    /// Six consecutive output registers, low byte first per axis
    fn read_sample(
        &mut self,
        address: u8,
        first_register: u8,
        scale: f32,
    ) -> Result<AxisReading, BusTimeout> {
        let mut raw = [0u8; 6];
        for (offset, byte) in raw.iter_mut().enumerate() {
            *byte = self.bus.read_register(address, first_register + offset as u8)?;
        }

        Ok(AxisReading {
            x: scale_axis(raw[0], raw[1], scale),
            y: scale_axis(raw[2], raw[3], scale),
            z: scale_axis(raw[4], raw[5], scale),
        })
    }
}

/// Assemble a little-endian byte pair into a signed sample and scale
/// it to physical units x100, truncating toward zero
fn scale_axis(low: u8, high: u8, scale: f32) -> i32 {
    let raw = i16::from_le_bytes([low, high]);
    (f32::from(raw) * scale * UNIT_FACTOR) as i32
}
