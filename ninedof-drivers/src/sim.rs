//! Simulated I2C peripheral for host tests
//!
//! A software model of an STM32-style master-mode controller plus a
//! bank of addressable device registers that echoes writes back on
//! reads. Every control strobe the engine issues is recorded in an
//! event trace so tests can assert on protocol ordering, and single
//! wait conditions can be held stalled to exercise each timeout phase.

use core::cell::Cell;
use std::string::String;
use std::vec::Vec;

use ninedof_hal::diag::DiagnosticSink;
use ninedof_hal::i2c::{BusDirection, BusEvent, BusFlag, I2cConfig, I2cPeripheral};

/// One recorded control action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimEvent {
    Start,
    Stop,
    Address { address: u8, direction: BusDirection },
    AckEnable(bool),
    DataWrite(u8),
    DataRead,
    AddrCleared,
    FlagCleared(BusFlag),
}

/// A wait condition that never becomes ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stall {
    /// Bus-busy flag never clears
    BusIdle,
    /// START never completes
    StartEvent,
    /// Transmitter address phase never acknowledged
    TxModeEvent,
    /// Data register never reports ready for the next byte
    ByteTransmitting,
    /// Byte never finishes clocking out
    ByteTransferFinished,
    /// Receiver address phase never acknowledged
    AddressFlag,
    /// Received byte never arrives
    RxNotEmpty,
    /// STOP never finishes emitting
    StopClear,
}

/// Simulated controller + device register bank
pub struct SimBus {
    /// 128 devices x 256 registers, zero-initialized
    registers: Vec<u8>,
    /// Everything the engine did, in order
    pub trace: Vec<SimEvent>,
    /// Last configuration handed to `configure`
    pub config: Option<I2cConfig>,

    stall: Option<Stall>,
    started: bool,
    transaction_open: bool,
    addressed: Option<BusDirection>,
    addr_cleared: bool,
    byte_done: bool,
    device: u8,
    selected_register: Option<u8>,
    pending_rx: Option<u8>,
    ack_enabled: bool,

    busy_polls: Cell<u32>,
    stop_linger: Cell<u32>,
    stop_linger_polls: u32,
}

impl SimBus {
    pub fn new() -> Self {
        Self {
            registers: std::vec![0; 128 * 256],
            trace: Vec::new(),
            config: None,
            stall: None,
            started: false,
            transaction_open: false,
            addressed: None,
            addr_cleared: false,
            byte_done: false,
            device: 0,
            selected_register: None,
            pending_rx: None,
            ack_enabled: true,
            busy_polls: Cell::new(0),
            stop_linger: Cell::new(0),
            stop_linger_polls: 1,
        }
    }

    pub fn with_stall(stall: Stall) -> Self {
        let mut sim = Self::new();
        sim.stall = Some(stall);
        sim
    }

    /// How many polls a queued STOP stays visible in the control
    /// register before it reads back as cleared
    pub fn set_stop_linger(&mut self, polls: u32) {
        self.stop_linger_polls = polls;
    }

    /// How often the engine polled the bus-busy flag
    pub fn busy_polls(&self) -> u32 {
        self.busy_polls.get()
    }

    /// Current acknowledge-generation state
    pub fn ack_enabled(&self) -> bool {
        self.ack_enabled
    }

    /// Seed a device register directly, bypassing the bus
    pub fn load_register(&mut self, address: u8, register: u8, value: u8) {
        self.registers[Self::index(address, register)] = value;
    }

    /// Peek a device register directly, bypassing the bus
    pub fn peek_register(&self, address: u8, register: u8) -> u8 {
        self.registers[Self::index(address, register)]
    }

    fn index(address: u8, register: u8) -> usize {
        usize::from(address & 0x7F) * 256 + usize::from(register)
    }

    fn stalled(&self, stall: Stall) -> bool {
        self.stall == Some(stall)
    }
}

impl I2cPeripheral for SimBus {
    fn configure(&mut self, config: &I2cConfig) {
        self.config = Some(*config);
        self.ack_enabled = config.ack;
    }

    fn flag(&self, flag: BusFlag) -> bool {
        match flag {
            BusFlag::Busy => {
                self.busy_polls.set(self.busy_polls.get() + 1);
                self.stalled(Stall::BusIdle)
            }
            BusFlag::ByteTransferFinished => {
                !self.stalled(Stall::ByteTransferFinished) && self.byte_done
            }
            BusFlag::AddressSent => {
                !self.stalled(Stall::AddressFlag)
                    && self.addressed == Some(BusDirection::Receiver)
                    && !self.addr_cleared
            }
            BusFlag::RxNotEmpty => !self.stalled(Stall::RxNotEmpty) && self.pending_rx.is_some(),
            BusFlag::AckFailure => false,
        }
    }

    fn event(&self, event: BusEvent) -> bool {
        match event {
            BusEvent::MasterModeSelect => !self.stalled(Stall::StartEvent) && self.started,
            BusEvent::MasterTransmitterModeSelected => {
                !self.stalled(Stall::TxModeEvent)
                    && self.addressed == Some(BusDirection::Transmitter)
            }
            BusEvent::MasterByteTransmitting => {
                !self.stalled(Stall::ByteTransmitting)
                    && self.addressed == Some(BusDirection::Transmitter)
            }
        }
    }

    fn start(&mut self) {
        self.trace.push(SimEvent::Start);
        self.started = true;
        self.byte_done = false;
        if !self.transaction_open {
            // Fresh transaction; a repeated START keeps the selected
            // register from the write half.
            self.transaction_open = true;
            self.selected_register = None;
        }
    }

    fn stop(&mut self) {
        self.trace.push(SimEvent::Stop);
        self.transaction_open = false;
        self.started = false;
        self.addressed = None;
        self.stop_linger.set(self.stop_linger_polls);
    }

    fn stop_pending(&self) -> bool {
        if self.stalled(Stall::StopClear) {
            return true;
        }
        let remaining = self.stop_linger.get();
        if remaining > 0 {
            self.stop_linger.set(remaining - 1);
            return true;
        }
        false
    }

    fn send_address(&mut self, address: u8, direction: BusDirection) {
        self.trace.push(SimEvent::Address { address, direction });
        self.started = false;
        self.addressed = Some(direction);
        self.addr_cleared = false;
        self.byte_done = false;
        self.device = address;
    }

    fn write_data(&mut self, byte: u8) {
        self.trace.push(SimEvent::DataWrite(byte));
        self.byte_done = true;
        match self.selected_register {
            None => self.selected_register = Some(byte),
            Some(register) => {
                self.registers[Self::index(self.device, register)] = byte;
            }
        }
    }

    fn read_data(&mut self) -> u8 {
        self.trace.push(SimEvent::DataRead);
        self.pending_rx.take().unwrap_or(0)
    }

    fn set_acknowledge(&mut self, enable: bool) {
        self.trace.push(SimEvent::AckEnable(enable));
        self.ack_enabled = enable;
    }

    fn clear_address_flag(&mut self) {
        self.trace.push(SimEvent::AddrCleared);
        self.addr_cleared = true;
        if self.addressed == Some(BusDirection::Receiver) {
            if let Some(register) = self.selected_register {
                self.pending_rx = Some(self.registers[Self::index(self.device, register)]);
            }
        }
    }

    fn clear_flag(&mut self, flag: BusFlag) {
        self.trace.push(SimEvent::FlagCleared(flag));
    }
}

/// Diagnostic sink that captures every line
pub struct RecordingSink {
    pub lines: Vec<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }
}

impl DiagnosticSink for RecordingSink {
    fn write_line(&mut self, line: &str) {
        self.lines.push(String::from(line));
    }
}
