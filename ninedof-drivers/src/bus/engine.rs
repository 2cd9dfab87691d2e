//! The transaction engine
//!
//! Drives complete single-byte register transactions against an
//! [`I2cPeripheral`]: bus-idle wait, START, address phase, data phase,
//! repeated START plus NACK handling for reads, STOP. The sequencing
//! reproduces the STM32F4 standard-peripheral flag protocol, so the
//! ordering constraints here (most importantly where acknowledge
//! generation is switched off during a read) are load-bearing.

use core::fmt::Write as _;

use heapless::String;
use ninedof_hal::diag::DiagnosticSink;
use ninedof_hal::i2c::{BusDirection, BusEvent, BusFlag, I2cConfig, I2cPeripheral};

use super::{BusOperation, BusTimeout, TimeoutBudget};

/// Polled single-master I2C register engine
///
/// Owns the peripheral and a diagnostic sink. Exactly one transaction
/// is in flight per call and no transaction state survives between
/// calls. Not safe for concurrent callers; the engine assumes it is
/// the only bus master and the only user of the controller.
pub struct I2cMaster<P, D> {
    periph: P,
    diag: D,
    timeout: TimeoutBudget,
}

impl<P: I2cPeripheral, D: DiagnosticSink> I2cMaster<P, D> {
    /// Create an engine with the default per-phase poll budget
    pub fn new(periph: P, diag: D) -> Self {
        Self::with_timeout(periph, diag, TimeoutBudget::default())
    }

    /// Create an engine with an explicit per-phase poll budget
    ///
    /// Small budgets make stall behavior deterministic in tests; a
    /// budget of zero fails every wait immediately.
    pub fn with_timeout(periph: P, diag: D, timeout: TimeoutBudget) -> Self {
        Self {
            periph,
            diag,
            timeout,
        }
    }

    /// Configure the controller for master operation: 100 kHz standard
    /// mode, acknowledge generation enabled.
    ///
    /// Pin muxing (open drain, pull-ups) and peripheral clocking are
    /// the board bring-up's job and must already be done. Call once
    /// before the first transaction; repeated calls are not specified.
    pub fn init(&mut self) {
        self.periph.configure(&I2cConfig::STANDARD);
    }

    /// The configured per-phase poll budget
    pub fn timeout(&self) -> TimeoutBudget {
        self.timeout
    }

    /// Give the peripheral and sink back
    pub fn release(self) -> (P, D) {
        (self.periph, self.diag)
    }

    /// Read one byte from `register` of the device at 7-bit `address`
    ///
    /// Performs a complete write-register-address / repeated-START /
    /// read-one-byte transaction. Acknowledge generation is switched
    /// off between the address-acknowledge and the data byte so the
    /// single incoming byte is NACKed, and switched back on before
    /// returning so the next transaction starts from steady state.
    pub fn read_register(&mut self, address: u8, register: u8) -> Result<u8, BusTimeout> {
        const OP: BusOperation = BusOperation::Read;

        // Phase 0: the bus must be free before claiming it.
        self.wait_until(OP, 0, |p| !p.flag(BusFlag::Busy))?;

        self.periph.start();
        self.wait_until(OP, 1, |p| p.event(BusEvent::MasterModeSelect))?;

        self.periph.send_address(address, BusDirection::Transmitter);
        self.wait_until(OP, 2, |p| p.event(BusEvent::MasterTransmitterModeSelected))?;

        // Select the register, and wait for the byte to be fully
        // clocked out rather than merely queued: the repeated START
        // must not cut it short.
        self.periph.write_data(register);
        self.wait_until(OP, 3, |p| p.flag(BusFlag::ByteTransferFinished))?;

        // Repeated START switches direction without releasing the bus.
        self.periph.start();
        self.wait_until(OP, 4, |p| p.event(BusEvent::MasterModeSelect))?;

        self.periph.send_address(address, BusDirection::Receiver);
        self.wait_until(OP, 5, |p| p.flag(BusFlag::AddressSent))?;

        // Single-byte read: acknowledge must go low while the address
        // flag is still set, then the flag is cleared and STOP queued,
        // so the controller NACKs the one incoming byte and ends the
        // transaction behind it.
        self.periph.set_acknowledge(false);
        self.periph.clear_address_flag();
        self.periph.stop();

        self.wait_until(OP, 6, |p| p.flag(BusFlag::RxNotEmpty))?;
        let value = self.periph.read_data();

        // Phase 7: the controller is still emitting STOP until the
        // control bit drops.
        self.wait_until(OP, 7, |p| !p.stop_pending())?;

        // Restore steady state for the next reception.
        self.periph.set_acknowledge(true);
        self.periph.clear_flag(BusFlag::AckFailure);

        Ok(value)
    }

    /// Write `value` to `register` of the device at 7-bit `address`
    ///
    /// Single START, register address and value back to back, STOP.
    /// Unlike the read path there is no wait for the STOP to finish
    /// emitting; the next transaction's bus-idle wait covers it.
    pub fn write_register(
        &mut self,
        address: u8,
        register: u8,
        value: u8,
    ) -> Result<(), BusTimeout> {
        const OP: BusOperation = BusOperation::Write;

        self.wait_until(OP, 0, |p| !p.flag(BusFlag::Busy))?;

        self.periph.start();
        self.wait_until(OP, 1, |p| p.event(BusEvent::MasterModeSelect))?;

        self.periph.send_address(address, BusDirection::Transmitter);
        self.wait_until(OP, 2, |p| p.event(BusEvent::MasterTransmitterModeSelected))?;

        // The register-address byte only has to clear the data
        // register; the value byte may be queued while it is still
        // clocking out.
        self.periph.write_data(register);
        self.wait_until(OP, 3, |p| p.event(BusEvent::MasterByteTransmitting))?;

        self.periph.write_data(value);
        self.wait_until(OP, 4, |p| p.flag(BusFlag::ByteTransferFinished))?;

        self.periph.stop();
        Ok(())
    }

    /// Legacy read contract: the byte value, or 0 on timeout
    ///
    /// Bit-exact with the original firmware interface. A timeout is
    /// indistinguishable from a register that legitimately reads zero;
    /// new callers should use [`read_register`](Self::read_register).
    pub fn read_register_compat(&mut self, address: u8, register: u8) -> u32 {
        match self.read_register(address, register) {
            Ok(value) => u32::from(value),
            Err(_) => 0,
        }
    }

    /// Legacy write contract: always 0
    ///
    /// The original interface returned 0 both on completion and on
    /// timeout, so this shim cannot signal failure at all. Callers
    /// that care use [`write_register`](Self::write_register).
    pub fn write_register_compat(&mut self, address: u8, register: u8, value: u8) -> u32 {
        let _ = self.write_register(address, register, value);
        0
    }

    /// Poll `ready` until it holds, up to the configured budget
    ///
    /// Every call starts from a full budget. On exhaustion, emits one
    /// diagnostic line naming the operation and phase and returns the
    /// timeout error; the caller aborts the transaction via `?`.
    fn wait_until<F>(&mut self, operation: BusOperation, phase: u8, mut ready: F) -> Result<(), BusTimeout>
    where
        F: FnMut(&P) -> bool,
    {
        for _ in 0..self.timeout.0 {
            if ready(&self.periph) {
                return Ok(());
            }
        }
        Err(self.give_up(operation, phase))
    }

    fn give_up(&mut self, operation: BusOperation, phase: u8) -> BusTimeout {
        let mut line: String<40> = String::new();
        let _ = write!(line, "i2c {} timeout - phase {}", operation.tag(), phase);
        self.diag.write_line(&line);
        BusTimeout { operation, phase }
    }
}
