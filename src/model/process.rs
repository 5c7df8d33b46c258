use std::marker::PhantomData;

use crate::{
    constants::{
        DEFAULT_IFCB_QPRIME, DEFAULT_ISB_QPRIME, DEFAULT_REC_BIAS_QPRIME, DEFAULT_SAT_BIAS_QPRIME,
        DEFAULT_TROPO_GRAD_QPRIME, DEFAULT_TROPO_QPRIME,
    },
    model::{EntityKey, EpochRecord, EpochRegistry, StochasticModel},
    prelude::{Epoch, EpochData, Station, SV},
};

/// [RandomWalkProcess] describes one physical parameter estimated
/// as a random walk, for many entities at once.
pub trait RandomWalkProcess {
    /// Entity this parameter is attached to
    type Key: EntityKey;

    /// Default spectral density (m².s⁻¹)
    const DEFAULT_QPRIME: f64;

    /// Readable name
    const NAME: &'static str;
}

/// Zenith wet delay, per receiver
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZenithWetDelay;

impl RandomWalkProcess for ZenithWetDelay {
    type Key = Station;
    const DEFAULT_QPRIME: f64 = DEFAULT_TROPO_QPRIME;
    const NAME: &'static str = "tropo";
}

/// Tropospheric gradients (north/east), per receiver
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TropoGradients;

impl RandomWalkProcess for TropoGradients {
    type Key = Station;
    const DEFAULT_QPRIME: f64 = DEFAULT_TROPO_GRAD_QPRIME;
    const NAME: &'static str = "tropo-grad";
}

/// Receiver hardware bias
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReceiverBias;

impl RandomWalkProcess for ReceiverBias {
    type Key = Station;
    const DEFAULT_QPRIME: f64 = DEFAULT_REC_BIAS_QPRIME;
    const NAME: &'static str = "rec-bias";
}

/// Satellite hardware bias
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SatelliteBias;

impl RandomWalkProcess for SatelliteBias {
    type Key = SV;
    const DEFAULT_QPRIME: f64 = DEFAULT_SAT_BIAS_QPRIME;
    const NAME: &'static str = "sat-bias";
}

/// Inter system bias (GAL/BDS versus GPS), per receiver
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterSystemBias;

impl RandomWalkProcess for InterSystemBias {
    type Key = Station;
    const DEFAULT_QPRIME: f64 = DEFAULT_ISB_QPRIME;
    const NAME: &'static str = "isb";
}

/// Inter frequency code bias, per receiver and satellite.
/// Mostly used for Glonass FDMA.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterFrequencyCodeBias;

impl RandomWalkProcess for InterFrequencyCodeBias {
    type Key = (Station, SV);
    const DEFAULT_QPRIME: f64 = DEFAULT_IFCB_QPRIME;
    const NAME: &'static str = "ifcb";
}

/// [EntityRandomWalk] is a random walk model that serves
/// one state per entity (receiver, satellite, or both, as defined
/// by the [RandomWalkProcess]), each entity having its own epochs history.
///
/// [StochasticModel::q] returns the variance of the latest prepared entity.
/// The first epoch of an entity does not accumulate any variance.
#[derive(Debug, Clone)]
pub struct EntityRandomWalk<P: RandomWalkProcess> {
    registry: EpochRegistry<P::Key>,
    variance: f64,
    _process: PhantomData<P>,
}

/// Zenith wet delay random walk, per receiver
pub type TropoRandomWalkModel = EntityRandomWalk<ZenithWetDelay>;

/// Tropospheric gradients random walk, per receiver
pub type TropoGradRandomWalkModel = EntityRandomWalk<TropoGradients>;

/// Receiver bias random walk
pub type RecBiasRandomWalkModel = EntityRandomWalk<ReceiverBias>;

/// Satellite bias random walk
pub type SatBiasRandomWalkModel = EntityRandomWalk<SatelliteBias>;

/// Inter system bias random walk, per receiver
pub type ISBRandomWalkModel = EntityRandomWalk<InterSystemBias>;

/// Inter frequency code bias random walk, per receiver and satellite
pub type IFCBRandomWalkModel = EntityRandomWalk<InterFrequencyCodeBias>;

impl<P: RandomWalkProcess> Default for EntityRandomWalk<P> {
    fn default() -> Self {
        Self::new(P::DEFAULT_QPRIME)
    }
}

impl<P: RandomWalkProcess> EntityRandomWalk<P> {
    /// Builds a new [EntityRandomWalk] with given spectral density in m².s⁻¹.
    pub fn new(qprime: f64) -> Self {
        Self {
            registry: EpochRegistry::new(qprime),
            variance: 0.0,
            _process: PhantomData,
        }
    }

    /// Readable name of this model
    pub fn name(&self) -> &'static str {
        P::NAME
    }

    /// Updates spectral density (m².s⁻¹) applied to all entities,
    /// except the ones that have their own.
    pub fn set_qprime(&mut self, qprime: f64) {
        self.registry.set_qprime(qprime);
    }

    /// Defines the spectral density (m².s⁻¹) of one entity.
    pub fn set_qprime_for(&mut self, key: P::Key, qprime: f64) {
        self.registry.set_qprime_for(key, qprime);
    }

    /// Spectral density applied to this entity
    pub fn qprime_of(&self, key: &P::Key) -> f64 {
        self.registry.qprime_of(key)
    }

    /// Presets previous [Epoch] of this entity
    pub fn set_previous_epoch(&mut self, key: P::Key, t: Epoch) {
        self.registry.set_previous_epoch(key, t);
    }

    /// Presets current [Epoch] of this entity
    pub fn set_current_epoch(&mut self, key: P::Key, t: Epoch) {
        self.registry.set_current_epoch(key, t);
    }

    /// [EpochRecord] of this entity
    pub fn record(&self, key: &P::Key) -> Option<&EpochRecord> {
        self.registry.record(key)
    }

    /// Number of entities tracked so far
    pub fn entities(&self) -> usize {
        self.registry.len()
    }

    /// Computes variance of this entity at `t`, which is then exposed by [StochasticModel::q].
    pub fn compute_q(&mut self, key: &P::Key, t: Epoch) {
        self.variance = self.registry.compute_q(key, t);
    }
}

impl<P: RandomWalkProcess> StochasticModel for EntityRandomWalk<P> {
    fn q(&self) -> f64 {
        self.variance
    }

    fn prepare(&mut self, t: Epoch, station: &Station, sv: SV, _: &EpochData) {
        let key = P::Key::from_context(station, sv);
        self.compute_q(&key, t);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_spectral_densities() {
        assert_eq!(TropoRandomWalkModel::default().qprime_of(&Station::new("A")), 5.0E-8);
        assert_eq!(
            TropoGradRandomWalkModel::default().qprime_of(&Station::new("A")),
            5.0E-10
        );
        assert_eq!(RecBiasRandomWalkModel::default().qprime_of(&Station::new("A")), 1.0E-4);
        assert_eq!(ISBRandomWalkModel::default().qprime_of(&Station::new("A")), 9.0E-4);

        let sv = "C05".parse::<SV>().unwrap();
        assert_eq!(SatBiasRandomWalkModel::default().qprime_of(&sv), 3.0E-6);
        assert_eq!(
            IFCBRandomWalkModel::default().qprime_of(&(Station::new("A"), sv)),
            1.0E-4
        );
    }

    #[test]
    fn names() {
        assert_eq!(TropoRandomWalkModel::default().name(), "tropo");
        assert_eq!(IFCBRandomWalkModel::default().name(), "ifcb");
    }
}
