use log::warn;

use crate::{
    constants::DEFAULT_RANDOM_WALK_QPRIME,
    model::{
        entity::{Elapsed, EpochRecord},
        StochasticModel,
    },
    prelude::{Epoch, EpochData, Station, SV},
};

/// [RandomWalkModel] describes a single state that wanders away from its previous value,
/// its uncertainty growing linearly with time: q = qprime * dt.
///
/// Unlike the per entity models ([TropoRandomWalkModel] for example), this model
/// tracks one unique stream of epochs. The very first epoch returns
/// the initial variance (no prior knowledge).
///
/// [TropoRandomWalkModel]: crate::prelude::TropoRandomWalkModel
#[derive(Debug, Clone, PartialEq)]
pub struct RandomWalkModel {
    /// Spectral density (m².s⁻¹)
    qprime: f64,
    /// Variance returned on first epoch (m²)
    initial_variance: f64,
    /// Epochs record
    record: EpochRecord,
    /// Latest variance
    variance: f64,
}

impl Default for RandomWalkModel {
    fn default() -> Self {
        Self::new(DEFAULT_RANDOM_WALK_QPRIME)
    }
}

impl RandomWalkModel {
    /// Builds a new [RandomWalkModel] with given spectral density in m².s⁻¹.
    pub fn new(qprime: f64) -> Self {
        Self {
            qprime,
            initial_variance: DEFAULT_RANDOM_WALK_QPRIME,
            record: EpochRecord::default(),
            variance: 0.0,
        }
    }

    /// Copies and returns [RandomWalkModel] with a preset previous [Epoch].
    /// The first [StochasticModel::prepare] will then accumulate variance from this instant.
    pub fn with_previous_epoch(&self, t: Epoch) -> Self {
        let mut s = self.clone();
        s.set_previous_epoch(t);
        s
    }

    /// Copies and returns [RandomWalkModel] with updated initial variance (m²).
    pub fn with_initial_variance(&self, variance: f64) -> Self {
        let mut s = self.clone();
        s.initial_variance = variance;
        s
    }

    /// Presets previous [Epoch]
    pub fn set_previous_epoch(&mut self, t: Epoch) {
        self.record.previous = Some(t);
    }

    /// Presets current [Epoch]
    pub fn set_current_epoch(&mut self, t: Epoch) {
        self.record.current = Some(t);
    }

    /// Updates spectral density (m².s⁻¹).
    /// Beware of units: this is a variance rate, not a sigma.
    pub fn set_qprime(&mut self, qprime: f64) {
        self.qprime = qprime;
    }

    pub fn qprime(&self) -> f64 {
        self.qprime
    }

    /// Latest [EpochRecord]
    pub fn record(&self) -> &EpochRecord {
        &self.record
    }
}

impl StochasticModel for RandomWalkModel {
    fn q(&self) -> f64 {
        self.variance
    }

    fn prepare(&mut self, t: Epoch, _: &Station, _: SV, _: &EpochData) {
        self.variance = match self.record.advance(t) {
            Elapsed::First => self.initial_variance,
            Elapsed::Seconds(dt) => (self.qprime * dt).max(0.0),
            Elapsed::OutOfOrder(dt) => {
                warn!("{}: epoch is {}s in the past - ignored", t, dt);
                0.0
            },
        };
    }
}

#[cfg(test)]
mod test {
    use super::RandomWalkModel;
    use crate::prelude::{
        Duration, Epoch, EpochData, Station, StochasticModel, DEFAULT_RANDOM_WALK_QPRIME, SV,
    };
    use std::str::FromStr;

    #[test]
    fn first_epoch_is_uninformative() {
        let t0 = Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap();
        let (station, sv) = (Station::new("ONSA"), SV::from_str("G01").unwrap());

        let mut model = RandomWalkModel::new(1.0E-3);
        model.prepare(t0, &station, sv, &EpochData::new());

        assert_eq!(model.phi(), 1.0);
        assert_eq!(model.q(), DEFAULT_RANDOM_WALK_QPRIME);

        let mut model = RandomWalkModel::new(1.0E-3).with_initial_variance(1.0E6);
        model.prepare(t0, &station, sv, &EpochData::new());
        assert_eq!(model.q(), 1.0E6);
    }

    #[test]
    fn preset_previous_epoch() {
        let t0 = Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap();
        let t1 = t0 + Duration::from_seconds(60.0);
        let (station, sv) = (Station::new("ONSA"), SV::from_str("G01").unwrap());

        let mut model = RandomWalkModel::new(0.5).with_previous_epoch(t0);
        model.prepare(t1, &station, sv, &EpochData::new());

        assert!((model.q() - 30.0).abs() < 1.0E-9);
        assert_eq!(model.record().previous, Some(t1));
    }
}
