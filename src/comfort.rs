use crate::decode::CentiReading;

// Celsius regression, https://en.wikipedia.org/wiki/Heat_index
const C1: f32 = -8.78470;
const C2: f32 = 1.61139;
const C3: f32 = 2.33855;
const C4: f32 = -1.46116e-1;
const C5: f32 = -1.23081e-2;
const C6: f32 = -1.64248e-2;
const C7: f32 = 2.21173e-3;
const C8: f32 = 7.25460e-4;
const C9: f32 = -3.58200e-6;

/// Apparent temperature in °C for `t` °C and `r` % relative humidity (67% is `67.0`).
///
/// Only meaningful above roughly 20 °C and 40 %; outside that range the
/// polynomial drifts, which is acceptable for an advisory value.
pub fn heat_index(t: f32, r: f32) -> f32 {
    C1 + C2 * t
        + C3 * r
        + C4 * t * r
        + C5 * t * t
        + C6 * r * r
        + C7 * t * t * r
        + C8 * t * r * r
        + C9 * t * t * r * r
}

/// Heat index of a decoded reading. The temperature goes in as whole degrees
/// (centi-degrees divided by 100, truncated).
pub fn reading_heat_index(reading: &CentiReading) -> f32 {
    let t = (reading.temperature / 100) as f32;
    let r = reading.humidity as f32;
    heat_index(t, r)
}

/// Rounds half away from zero: 17.4 -> 17, -0.6 -> -1, 2.5 -> 3, -2.5 -> -3.
pub fn round_heat_index(value: f32) -> i32 {
    if value < 0.0 {
        (value - 0.5) as i32
    } else {
        (value + 0.5) as i32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComfortBand {
    Freezing,
    VeryCold,
    Cold,
    Nice,
    VeryWarm,
    Hot,
}

impl ComfortBand {
    /// Maps a rounded heat index onto the half-open bands
    /// `< 1`, `< 11`, `< 18`, `< 28`, `< 35`, and everything above.
    pub fn classify(heat_index: i32) -> Self {
        match heat_index {
            i32::MIN..=0 => ComfortBand::Freezing,
            1..=10 => ComfortBand::VeryCold,
            11..=17 => ComfortBand::Cold,
            18..=27 => ComfortBand::Nice,
            28..=34 => ComfortBand::VeryWarm,
            _ => ComfortBand::Hot,
        }
    }

    /// Ten-character phrase, sized for one half of a 16x2 display line.
    pub fn phrase(self) -> &'static str {
        match self {
            ComfortBand::Freezing => "Freezing!!",
            ComfortBand::VeryCold => "Very cold!",
            ComfortBand::Cold => "It's cold.",
            ComfortBand::Nice => "It's nice!",
            ComfortBand::VeryWarm => "Very warm!",
            ComfortBand::Hot => "Too hot!!!",
        }
    }
}
