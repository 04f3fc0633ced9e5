#![cfg_attr(not(test), no_std)]

mod fmt;

mod aht10;
pub mod comfort;
pub mod decode;
mod readout;

pub use aht10::{
    AHT10Sensor, AHT10_ADDRESS, INIT_COMMAND, INIT_SETTLE_US, MEASUREMENT_SETTLE_MS,
    READ_SETTLE_US, TRIGGER_COMMAND,
};
pub use comfort::{heat_index, round_heat_index, ComfortBand};
pub use decode::{decode, CentiReading, RawFrame, SensorStatus};
pub use readout::{Measurement, OneDecimal, Readout};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AHT10Error {
    I2CError,
    /// Status byte other than 0x19; the reading should not be trusted.
    InvalidStatus(u8),
}
