#![no_std]
#![no_main]

use defmt::{error, info, warn};
use defmt_rtt as _;
use embassy_aht10_sensor::{AHT10Error, AHT10Sensor, OneDecimal, AHT10_ADDRESS};
use embassy_executor::Spawner;
use embassy_rp::peripherals::I2C1;
use embassy_rp::{bind_interrupts, i2c};
use embassy_time::{Duration, Timer};
use panic_probe as _;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) -> ! {
    let p = embassy_rp::init(Default::default());

    let sda = p.PIN_2;
    let scl = p.PIN_3;

    // Configure I2C
    let mut config = i2c::Config::default();
    config.frequency = 100_000;
    let mut i2c = i2c::I2c::new_async(p.I2C1, scl, sda, Irqs, config);

    // Initialize the sensor once after power-up
    let mut sensor = match AHT10Sensor::new(&mut i2c, AHT10_ADDRESS).await {
        Ok(sensor) => sensor,
        Err(e) => defmt::panic!("AHT10 init failed: {:?}", e),
    };

    loop {
        match sensor.read().await {
            Ok(measurement) => {
                let readout = measurement.readout();
                if !readout.status.is_valid() {
                    warn!("Sensor status {:#x}, showing error marker", readout.status.0);
                }
                info!(
                    "[{}] {}°C {}%  Feels like {}°",
                    readout.status.indicator() as char,
                    defmt::Display2Format(&OneDecimal(readout.temperature)),
                    readout.humidity,
                    readout.feels_like,
                );
                info!("{}", readout.comfort.phrase());
            }
            Err(e) => match e {
                AHT10Error::I2CError => error!("I2C communication error"),
                AHT10Error::InvalidStatus(status) => error!("Invalid status {:#x}", status),
            },
        }

        // Frequent measurements self-heat the sensor
        Timer::after(Duration::from_secs(5)).await;
    }
}
