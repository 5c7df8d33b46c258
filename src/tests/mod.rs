mod iono;

use log::LevelFilter;
use std::{str::FromStr, sync::Once};

use crate::prelude::{Duration, Epoch, Station, SV};

static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        env_logger::builder()
            .is_test(true)
            .filter_level(LevelFilter::Debug)
            .init();
    });
}

/// Reference epoch of all tests
pub const REFERENCE_EPOCH: &str = "2020-06-25T00:00:00 GPST";

pub fn reference_epoch() -> Epoch {
    Epoch::from_str(REFERENCE_EPOCH).unwrap()
}

/// [Epoch] located `offset_s` seconds after the reference epoch
pub fn epoch(offset_s: f64) -> Epoch {
    reference_epoch() + Duration::from_seconds(offset_s)
}

pub fn sv(name: &str) -> SV {
    SV::from_str(name).unwrap()
}

pub fn station(name: &str) -> Station {
    Station::new(name)
}

/// Floating point comparison, relative to the expected value
pub fn assert_close(value: f64, expected: f64) {
    let tolerance = 1.0E-9 * expected.abs().max(1.0E-12);
    assert!(
        (value - expected).abs() <= tolerance,
        "{} differs from expected {}",
        value,
        expected
    );
}
