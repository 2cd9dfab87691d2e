//! ninedof Hardware Abstraction Layer
//!
//! This crate defines the traits that sit between the driver logic and
//! the actual bus controller hardware. The drivers only ever talk to
//! these traits, so the same transaction engine runs against a real
//! STM32-style I2C peripheral on target and against a software model
//! in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Sensor facade (ninedof-drivers::imu)   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  Bus engine (ninedof-drivers::bus)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ninedof-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip-specific│       │  simulated    │
//! │  peripheral   │       │  peripheral   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`i2c::I2cPeripheral`] - Flag-level I2C master controller access
//! - [`diag::DiagnosticSink`] - Text output for fault reporting

#![no_std]
#![deny(unsafe_code)]

pub mod diag;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use diag::{DiagnosticSink, NullDiagnostics};
pub use i2c::I2cPeripheral;
