//! Driver implementations for the ninedof IMU stack
//!
//! This crate provides the concrete drivers built on the traits defined
//! in ninedof-hal:
//!
//! - Bus engine: polled master-mode I2C register transactions with a
//!   bounded iteration budget at every wait point
//! - IMU facade: LSM9DS0 gyroscope + accelerometer/magnetometer
//!   register access and unit conversion

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod imu;

#[cfg(test)]
pub(crate) mod sim;
