use core::fmt;

use crate::comfort::{reading_heat_index, round_heat_index, ComfortBand};
use crate::decode::{CentiReading, SensorStatus};
use crate::AHT10Error;

/// One decoded measurement cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Measurement {
    pub status: SensorStatus,
    pub reading: CentiReading,
}

impl Measurement {
    /// The reading if the status says it can be trusted.
    pub fn checked(&self) -> Result<CentiReading, AHT10Error> {
        if self.status.is_valid() {
            Ok(self.reading)
        } else {
            Err(AHT10Error::InvalidStatus(self.status.0))
        }
    }

    pub fn readout(&self) -> Readout {
        Readout::from(*self)
    }
}

/// Everything a display needs from one measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    pub status: SensorStatus,
    pub temperature: i16,
    pub humidity: i16,
    /// Heat index rounded half away from zero.
    pub feels_like: i32,
    pub comfort: ComfortBand,
}

impl From<Measurement> for Readout {
    fn from(measurement: Measurement) -> Self {
        let feels_like = round_heat_index(reading_heat_index(&measurement.reading));
        Readout {
            status: measurement.status,
            temperature: measurement.reading.temperature,
            humidity: measurement.reading.humidity,
            feels_like,
            comfort: ComfortBand::classify(feels_like),
        }
    }
}

/// Formats a centi value with one decimal place, rounded half away from zero
/// (2753 -> `27.5`, 2755 -> `27.6`, -5 -> `-0.1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OneDecimal(pub i16);

impl fmt::Display for OneDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let centi = self.0 as i32;
        let tenths = if centi < 0 { (centi - 5) / 10 } else { (centi + 5) / 10 };
        let sign = if tenths < 0 { "-" } else { "" };
        let tenths = tenths.unsigned_abs();
        write!(f, "{}{}.{}", sign, tenths / 10, tenths % 10)
    }
}
