//! Polled I2C master bus engine
//!
//! One register transaction per call, no state carried between calls.
//! Every point where the protocol waits on a hardware flag counts down
//! a fresh iteration budget, so a stalled or disconnected device can
//! never hang the caller.

mod engine;

pub use engine::I2cMaster;

/// Iteration budget for a single wait point
///
/// Each distinct wait inside a transaction gets its own countdown from
/// this value; budgets are never shared between phases. The bound is a
/// poll count, not wall-clock time, so the worst-case latency of a
/// transaction is the sum of the per-phase budgets times the loop body
/// cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeoutBudget(pub u32);

impl Default for TimeoutBudget {
    fn default() -> Self {
        // Matches the poll budget the board has always shipped with.
        Self(1_000_000)
    }
}

/// Which transaction an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusOperation {
    /// Register read
    Read,
    /// Register write
    Write,
}

impl BusOperation {
    /// Tag used in diagnostic lines
    pub fn tag(self) -> &'static str {
        match self {
            BusOperation::Read => "read",
            BusOperation::Write => "write",
        }
    }
}

/// A wait point exhausted its iteration budget
///
/// The only error the engine produces. `phase` is the ordinal of the
/// wait point within the transaction: reads have phases 0..=7, writes
/// 0..=4, numbered in protocol order starting at the bus-idle wait.
/// The transaction is aborted on the spot; the bus may be left
/// mid-transaction until the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusTimeout {
    /// Transaction kind that stalled
    pub operation: BusOperation,
    /// Wait point ordinal within the transaction
    pub phase: u8,
}
