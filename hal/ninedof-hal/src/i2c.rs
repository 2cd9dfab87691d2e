//! I2C bus controller abstractions
//!
//! Provides the flag-level view of a master-mode I2C peripheral that
//! the transaction engine needs: status queries on one side, control
//! strobes on the other. Implementations map these onto the real
//! status/control registers of a specific chip, or onto a software
//! model for host testing.

/// Transfer direction encoded into the address phase (the R/W̄ bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusDirection {
    /// Master transmits to the addressed device
    Transmitter,
    /// Master receives from the addressed device
    Receiver,
}

/// Composite status events the protocol sequences on.
///
/// Each one is a combination of status bits the hardware asserts at a
/// well-defined point in a transaction (the STM32 reference manual
/// calls these EV5, EV6 and EV8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusEvent {
    /// START condition sent, controller owns the bus (EV5)
    MasterModeSelect,
    /// Address acknowledged in transmitter direction (EV6)
    MasterTransmitterModeSelected,
    /// Data register empty, next byte may be queued while the previous
    /// one is still clocking out (EV8)
    MasterByteTransmitting,
}

/// Single status flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusFlag {
    /// The bus is occupied by a transaction
    Busy,
    /// A data byte has been fully clocked onto the wire (not merely
    /// queued for transmission)
    ByteTransferFinished,
    /// Address phase acknowledged; stays set until explicitly cleared
    AddressSent,
    /// Receive buffer holds an unread byte
    RxNotEmpty,
    /// Acknowledge failure (NACK received)
    AckFailure,
}

/// I2C master configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// SCL frequency in Hz
    pub frequency: u32,
    /// Acknowledge generation enabled
    pub ack: bool,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz), acknowledge generation on
    pub const STANDARD: Self = Self {
        frequency: 100_000,
        ack: true,
    };

    /// Fast mode (400 kHz), acknowledge generation on
    pub const FAST: Self = Self {
        frequency: 400_000,
        ack: true,
    };
}

/// Flag-level access to a master-mode I2C controller
///
/// This is deliberately narrow: exactly the primitives a polled master
/// transaction needs, nothing more. All methods are non-blocking; any
/// waiting on flags or events is the caller's job.
pub trait I2cPeripheral {
    /// Configure the controller as bus master (clock rate, acknowledge
    /// generation). Pin muxing and peripheral clock enablement must
    /// already have happened.
    fn configure(&mut self, config: &I2cConfig);

    /// Query a single status flag
    fn flag(&self, flag: BusFlag) -> bool;

    /// Query a composite status event
    fn event(&self, event: BusEvent) -> bool;

    /// Generate a START (or repeated START) condition
    fn start(&mut self);

    /// Generate a STOP condition
    fn stop(&mut self);

    /// True while a requested STOP is still pending in the control
    /// register, i.e. the controller has not finished emitting it
    fn stop_pending(&self) -> bool;

    /// Transmit the 7-bit device address with the direction bit
    fn send_address(&mut self, address: u8, direction: BusDirection);

    /// Queue a data byte for transmission
    fn write_data(&mut self, byte: u8);

    /// Take the received byte out of the data register
    fn read_data(&mut self) -> u8;

    /// Enable or disable acknowledge generation for received bytes
    fn set_acknowledge(&mut self, enable: bool);

    /// Clear the [`BusFlag::AddressSent`] condition (on STM32-style
    /// controllers this is the SR1-then-SR2 read sequence)
    fn clear_address_flag(&mut self);

    /// Clear a sticky status flag
    fn clear_flag(&mut self, flag: BusFlag);
}
