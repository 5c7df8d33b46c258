use crate::prelude::{Epoch, EpochData, Station, SV};

mod ambiguity;
mod entity;
mod iono;
mod process;
mod random_walk;
mod white_noise;

pub use ambiguity::PhaseAmbiguityModel;
pub use entity::{EntityKey, EpochRecord, EpochRegistry};
pub use iono::{InterruptSchedule, IonoRandomWalkModel};
pub use process::{
    EntityRandomWalk, IFCBRandomWalkModel, ISBRandomWalkModel, InterFrequencyCodeBias,
    InterSystemBias, RandomWalkProcess, RecBiasRandomWalkModel, ReceiverBias,
    SatBiasRandomWalkModel, SatelliteBias, TropoGradRandomWalkModel, TropoGradients,
    TropoRandomWalkModel, ZenithWetDelay,
};
pub use random_walk::RandomWalkModel;
pub use white_noise::WhiteNoiseModel;

/// [StochasticModel] describes how one scalar state evolves between two
/// consecutive epochs, in the discrete form `x_k = phi * x_k-1 + w_k`,
/// with `w_k ~ N(0, q)`.
///
/// The estimator calls [StochasticModel::prepare] exactly once per state and per epoch,
/// then reads [StochasticModel::phi] and [StochasticModel::q], which remain
/// identical until the next [StochasticModel::prepare].
///
/// Models are stateful: one instance must serve a single data stream,
/// and epochs must be presented in chronological order for each entity.
/// Default implementations describe a constant state (phi=1, q=0).
pub trait StochasticModel {
    /// State transition coefficient
    fn phi(&self) -> f64 {
        1.0
    }

    /// Process noise variance
    fn q(&self) -> f64 {
        0.0
    }

    /// Update internal state with the context of a new epoch.
    ///
    /// ## Input
    /// - t: [Epoch] of the measurement
    /// - station: [Station] that produced the measurement
    /// - sv: [SV] that was tracked
    /// - data: [EpochData] attached to this measurement
    fn prepare(&mut self, _t: Epoch, _station: &Station, _sv: SV, _data: &EpochData) {}
}

impl<M: StochasticModel + ?Sized> StochasticModel for Box<M> {
    fn phi(&self) -> f64 {
        (**self).phi()
    }

    fn q(&self) -> f64 {
        (**self).q()
    }

    fn prepare(&mut self, t: Epoch, station: &Station, sv: SV, data: &EpochData) {
        (**self).prepare(t, station, sv, data)
    }
}

/// [ConstantModel] describes a constant state: coordinates of a static station
/// for example.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ConstantModel {}

impl StochasticModel for ConstantModel {}

/// Elapsed seconds between two [Epoch]s. Anything negative
/// (out of order epochs) is reported as None.
pub(crate) fn elapsed_seconds(previous: Epoch, current: Epoch) -> Option<f64> {
    let dt = (current - previous).to_seconds();
    if dt < 0.0 {
        None
    } else {
        Some(dt)
    }
}

#[cfg(test)]
mod test {
    use super::{elapsed_seconds, ConstantModel, StochasticModel};
    use crate::prelude::{Duration, Epoch, EpochData, Station, SV};
    use std::str::FromStr;

    #[test]
    fn constant_model() {
        let mut model = ConstantModel::default();
        assert_eq!(model.phi(), 1.0);
        assert_eq!(model.q(), 0.0);

        let t = Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap();
        let sv = SV::from_str("G01").unwrap();

        model.prepare(t, &Station::new("ONSA"), sv, &EpochData::new());

        assert_eq!(model.phi(), 1.0);
        assert_eq!(model.q(), 0.0);
    }

    #[test]
    fn elapsed_time() {
        let t0 = Epoch::from_str("2020-06-25T00:00:00 GPST").unwrap();
        let t1 = t0 + Duration::from_seconds(30.0);

        assert_eq!(elapsed_seconds(t0, t1), Some(30.0));
        assert_eq!(elapsed_seconds(t1, t1), Some(0.0));
        assert_eq!(elapsed_seconds(t1, t0), None);
    }
}
