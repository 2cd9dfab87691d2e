//! LSM9DS0 register map
//!
//! Two physical chips share the bus: the gyroscope (G) and the
//! combined accelerometer/magnetometer (XM). Register addresses below
//! are per-chip; the device address picks the chip.

/// 7-bit bus address of the gyroscope
pub const GYRO_ADDRESS: u8 = 0x6A;

/// 7-bit bus address of the accelerometer/magnetometer
pub const XM_ADDRESS: u8 = 0x1E;

// --- Gyroscope ---

/// Identity register, reads [`WHO_AM_I_G_VALUE`]
pub const WHO_AM_I_G: u8 = 0x0F;
/// Power mode, output data rate, axis enables
pub const CTRL_REG1_G: u8 = 0x20;
/// High-pass filter configuration
pub const CTRL_REG2_G: u8 = 0x21;
/// Interrupt configuration
pub const CTRL_REG3_G: u8 = 0x22;
/// Full-scale selection
pub const CTRL_REG4_G: u8 = 0x23;
/// FIFO and high-pass enable
pub const CTRL_REG5_G: u8 = 0x24;
pub const OUT_X_L_G: u8 = 0x28;
pub const OUT_X_H_G: u8 = 0x29;
pub const OUT_Y_L_G: u8 = 0x2A;
pub const OUT_Y_H_G: u8 = 0x2B;
pub const OUT_Z_L_G: u8 = 0x2C;
pub const OUT_Z_H_G: u8 = 0x2D;

/// Expected gyroscope identity
pub const WHO_AM_I_G_VALUE: u8 = 0xD4;

// --- Accelerometer / magnetometer ---

/// Identity register, reads [`WHO_AM_I_XM_VALUE`]
pub const WHO_AM_I_XM: u8 = 0x0F;
/// Magnetometer interrupt configuration
pub const INT_CTRL_REG_M: u8 = 0x12;
/// FIFO configuration
pub const CTRL_REG0_XM: u8 = 0x1F;
/// Accelerometer data rate and axis enables
pub const CTRL_REG1_XM: u8 = 0x20;
/// Accelerometer full-scale selection
pub const CTRL_REG2_XM: u8 = 0x21;
/// Interrupt generator configuration
pub const CTRL_REG3_XM: u8 = 0x22;
pub const CTRL_REG4_XM: u8 = 0x23;
/// Temperature enable, magnetometer resolution and data rate
pub const CTRL_REG5_XM: u8 = 0x24;
/// Magnetometer full-scale selection
pub const CTRL_REG6_XM: u8 = 0x25;
/// Magnetometer sensor mode
pub const CTRL_REG7_XM: u8 = 0x26;

pub const OUT_X_L_M: u8 = 0x08;
pub const OUT_X_H_M: u8 = 0x09;
pub const OUT_Y_L_M: u8 = 0x0A;
pub const OUT_Y_H_M: u8 = 0x0B;
pub const OUT_Z_L_M: u8 = 0x0C;
pub const OUT_Z_H_M: u8 = 0x0D;

pub const OUT_X_L_A: u8 = 0x28;
pub const OUT_X_H_A: u8 = 0x29;
pub const OUT_Y_L_A: u8 = 0x2A;
pub const OUT_Y_H_A: u8 = 0x2B;
pub const OUT_Z_L_A: u8 = 0x2C;
pub const OUT_Z_H_A: u8 = 0x2D;

/// Expected accelerometer/magnetometer identity
pub const WHO_AM_I_XM_VALUE: u8 = 0x49;
