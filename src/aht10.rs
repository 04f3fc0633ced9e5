use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use crate::decode::{decode, RawFrame, FRAME_LEN};
use crate::readout::Measurement;
use crate::AHT10Error;

/// Default 7-bit I2C address of the AHT10.
pub const AHT10_ADDRESS: u8 = 0x38;

/// Init opcode, calibration enable, terminator.
pub const INIT_COMMAND: [u8; 3] = [0xE1, 0x08, 0x00];
/// Trigger opcode and its two parameter bytes.
pub const TRIGGER_COMMAND: [u8; 3] = [0xAC, 0x33, 0x00];

pub const INIT_SETTLE_US: u32 = 40;
/// Conversion time after a trigger. Reading earlier yields status 0x99.
pub const MEASUREMENT_SETTLE_MS: u32 = 75;
pub const READ_SETTLE_US: u32 = 420;

pub struct AHT10Sensor<'a, T: I2c, D: DelayNs> {
    i2c: &'a mut T,
    delay: D,
    address: u8,
}

impl<'a, T: I2c> AHT10Sensor<'a, T, embassy_time::Delay> {
    /// Initializes the sensor at `address` using the embassy time driver for delays.
    pub async fn new(i2c: &'a mut T, address: u8) -> Result<Self, AHT10Error> {
        Self::with_delay(i2c, address, embassy_time::Delay).await
    }
}

impl<'a, T: I2c, D: DelayNs> AHT10Sensor<'a, T, D> {
    /// Sends the init handshake and returns a sensor ready to measure.
    ///
    /// Must run once after power-up. The device does not acknowledge a failed
    /// init, so only bus errors are reported.
    pub async fn with_delay(i2c: &'a mut T, address: u8, delay: D) -> Result<Self, AHT10Error> {
        let mut sensor = Self { i2c, delay, address };
        info!("AHT10 init at {:#x}", address);
        sensor.i2c_write(&INIT_COMMAND).await?;
        sensor.delay.delay_us(INIT_SETTLE_US).await;
        Ok(sensor)
    }

    /// Triggers a conversion, waits for it and returns the six frame bytes verbatim.
    ///
    /// Runs to completion as one operation; the exclusive borrow keeps any other
    /// transaction off the bus between the trigger and the read.
    pub async fn read_raw(&mut self) -> Result<RawFrame, AHT10Error> {
        let mut step = MeasurementStep::Idle;
        loop {
            step = match step {
                MeasurementStep::Idle => {
                    debug!("Measurement Step: Idle -> Triggered");
                    self.i2c_write(&TRIGGER_COMMAND).await?;
                    MeasurementStep::Triggered
                }
                MeasurementStep::Triggered => {
                    debug!("Measurement Step: Triggered -> Settled");
                    self.delay.delay_ms(MEASUREMENT_SETTLE_MS).await;
                    MeasurementStep::Settled
                }
                MeasurementStep::Settled => {
                    debug!("Measurement Step: Settled -> Idle");
                    let mut buf = [0u8; FRAME_LEN];
                    self.i2c_read(&mut buf).await?;
                    self.delay.delay_us(READ_SETTLE_US).await;
                    return Ok(RawFrame::new(buf));
                }
            }
        }
    }

    /// One measurement cycle, decoded. The status is passed through; check
    /// `Measurement::status` (or use `Measurement::checked`) before trusting the values.
    pub async fn read(&mut self) -> Result<Measurement, AHT10Error> {
        let frame = self.read_raw().await?;
        let (status, reading) = decode(&frame);
        if !status.is_valid() {
            warn!("AHT10 status {:#x}, reading incomplete", status.0);
        }
        Ok(Measurement { status, reading })
    }

    async fn i2c_read(&mut self, read: &mut [u8]) -> Result<(), AHT10Error> {
        match self.i2c.read(self.address, read).await {
            Ok(_) => Ok(()),
            Err(_) => Err(AHT10Error::I2CError),
        }
    }

    async fn i2c_write(&mut self, write: &[u8]) -> Result<(), AHT10Error> {
        match self.i2c.write(self.address, write).await {
            Ok(_) => Ok(()),
            Err(_) => Err(AHT10Error::I2CError),
        }
    }
}

enum MeasurementStep {
    Idle,
    Triggered,
    Settled,
}
