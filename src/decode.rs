/// Number of bytes the AHT10 returns after a measurement: status, 20 bits
/// humidity, 20 bits temperature.
pub const FRAME_LEN: usize = 6;

/// Status byte of a calibrated sensor that finished its conversion.
pub const STATUS_OK: u8 = 0x19;
/// Status byte reported when the frame was read before the conversion ended.
pub const STATUS_BUSY: u8 = 0x99;

/// HD44780 centre dot, shown while the sensor reports a good status.
pub const HEARTBEAT_GLYPH: u8 = 0xA5;
pub const ERROR_GLYPH: u8 = b'E';

/// The six bytes read from the sensor, exactly as they came off the bus.
///
/// ```text
/// byte 0      status
/// byte 1      humidity [19:12]
/// byte 2      humidity [11:4]
/// byte 3      humidity [3:0] | temperature [19:16]
/// byte 4      temperature [15:8]
/// byte 5      temperature [7:0]
/// ```
///
/// There is no checksum. A dropped or duplicated byte on the bus still
/// decodes, so the status byte is the only integrity signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame(pub [u8; FRAME_LEN]);

impl RawFrame {
    pub fn new(bytes: [u8; FRAME_LEN]) -> Self {
        RawFrame(bytes)
    }

    pub fn status(&self) -> SensorStatus {
        SensorStatus(self.0[0])
    }

    /// 20-bit humidity field, the low nibble of byte 3 dropped.
    pub fn humidity_raw(&self) -> u32 {
        ((self.0[1] as u32) << 16 | (self.0[2] as u32) << 8 | self.0[3] as u32) >> 4
    }

    /// 20-bit temperature field, starting at the low nibble of byte 3.
    pub fn temperature_raw(&self) -> u32 {
        ((self.0[3] & 0x0F) as u32) << 16 | (self.0[4] as u32) << 8 | self.0[5] as u32
    }
}

/// Status byte reported in the first byte of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorStatus(pub u8);

impl SensorStatus {
    /// Only `0x19` (calibrated, conversion complete) means the reading can be trusted.
    pub fn is_valid(self) -> bool {
        self.0 == STATUS_OK
    }

    /// `0x99`: the frame was read before the sensor finished converting.
    pub fn is_busy(self) -> bool {
        self.0 == STATUS_BUSY
    }

    /// Glyph a character display shows to mark the health of the last reading.
    pub fn indicator(self) -> u8 {
        if self.is_valid() {
            HEARTBEAT_GLYPH
        } else {
            ERROR_GLYPH
        }
    }
}

/// Temperature and humidity in integer units, decoded without floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CentiReading {
    /// Hundredths of a degree Celsius, -5000..=14999.
    pub temperature: i16,
    /// `humidity_raw / 10486`. The divisor is 2^20 / 100, so the value lands in
    /// whole percent relative humidity, 0..=99.
    pub humidity: i16,
}

/// Splits a frame into its status byte and the scaled integer reading.
///
/// Total over every input: what the numbers are worth is decided by the
/// status, which the caller has to check.
pub fn decode(frame: &RawFrame) -> (SensorStatus, CentiReading) {
    (frame.status(), CentiReading {
        temperature: centi_temperature(frame.temperature_raw()),
        humidity: centi_humidity(frame.humidity_raw()),
    })
}

/// tempC = raw / 2^20 * 200 - 50. Times 100 and with 20000 / 2^20 reduced to
/// 625 / 32768. Division truncates.
pub fn centi_temperature(raw: u32) -> i16 {
    let raw = raw & 0x000F_FFFF;
    ((raw * 625 / 32768) as i32 - 5000) as i16
}

/// Truncating division of the 20-bit humidity field by 10486.
pub fn centi_humidity(raw: u32) -> i16 {
    let raw = raw & 0x000F_FFFF;
    (raw / 10486) as i16
}
