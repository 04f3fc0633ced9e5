use embassy_aht10_sensor::{
    AHT10Sensor, ComfortBand, OneDecimal, Readout, SensorStatus, AHT10_ADDRESS,
};
use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction};

struct NoopDelay;

impl DelayNs for NoopDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

fn measurement_transactions(frame: [u8; 6]) -> [Transaction; 2] {
    [
        Transaction::write(AHT10_ADDRESS, vec![0xAC, 0x33, 0x00]),
        Transaction::read(AHT10_ADDRESS, frame.to_vec()),
    ]
}

#[test]
fn init_then_two_cycles() {
    let mut expectations = vec![Transaction::write(AHT10_ADDRESS, vec![0xE1, 0x08, 0x00])];
    // A read taken too early, then a complete one.
    expectations.extend(measurement_transactions([0x99, 0x33, 0x33, 0x35, 0x66, 0x66]));
    expectations.extend(measurement_transactions([0x19, 0x33, 0x33, 0x35, 0x66, 0x66]));
    let mut i2c = I2cMock::new(&expectations);

    let mut sensor = block_on(AHT10Sensor::with_delay(&mut i2c, AHT10_ADDRESS, NoopDelay)).unwrap();

    let early = block_on(sensor.read()).unwrap().readout();
    assert_eq!(early.status, SensorStatus(0x99));
    assert_eq!(early.status.indicator(), b'E');
    assert!(block_on(sensor.read()).unwrap().checked().is_ok());
    drop(sensor);
    i2c.done();

    // The busy frame decodes to the same numbers; only the status differs.
    assert_eq!(
        early,
        Readout {
            status: SensorStatus(0x99),
            temperature: 1749,
            humidity: 19,
            feels_like: 23,
            comfort: ComfortBand::Nice,
        }
    );
    assert_eq!(OneDecimal(early.temperature).to_string(), "17.5");
}

#[test]
fn warm_and_humid_room() {
    // humidity 0x80000 -> 49 %, temperature 0x6CCCC -> 3499 centi-degrees
    let frame = [0x19, 0x80, 0x00, 0x06, 0xCC, 0xCC];
    let mut expectations = vec![Transaction::write(AHT10_ADDRESS, vec![0xE1, 0x08, 0x00])];
    expectations.extend(measurement_transactions(frame));
    let mut i2c = I2cMock::new(&expectations);

    let mut sensor = block_on(AHT10Sensor::with_delay(&mut i2c, AHT10_ADDRESS, NoopDelay)).unwrap();
    let readout = block_on(sensor.read()).unwrap().readout();
    drop(sensor);
    i2c.done();

    assert_eq!(readout.temperature, 3499);
    assert_eq!(readout.humidity, 49);
    // heat index(34 °C, 49 %) = 38.06
    assert_eq!(readout.feels_like, 38);
    assert_eq!(readout.comfort, ComfortBand::Hot);
    assert_eq!(readout.comfort.phrase(), "Too hot!!!");
}
