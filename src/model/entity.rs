use std::{collections::HashMap, fmt::Debug, hash::Hash};

use log::{trace, warn};

use crate::{
    model::elapsed_seconds,
    prelude::{Epoch, Station, SV},
};

/// [EntityKey] identifies the state a model applies to,
/// and is deduced from the [StochasticModel::prepare] context.
///
/// [StochasticModel::prepare]: crate::prelude::StochasticModel::prepare
pub trait EntityKey: Debug + Clone + Eq + Hash {
    /// Builds the key from the measurement context
    fn from_context(station: &Station, sv: SV) -> Self;
}

/// Single stream: one global state
impl EntityKey for () {
    fn from_context(_: &Station, _: SV) -> Self {}
}

/// One state per receiver
impl EntityKey for Station {
    fn from_context(station: &Station, _: SV) -> Self {
        station.clone()
    }
}

/// One state per satellite
impl EntityKey for SV {
    fn from_context(_: &Station, sv: SV) -> Self {
        sv
    }
}

/// One state per receiver and satellite
impl EntityKey for (Station, SV) {
    fn from_context(station: &Station, sv: SV) -> Self {
        (station.clone(), sv)
    }
}

/// Outcome of [EpochRecord::advance]
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Elapsed {
    /// Very first epoch for this entity
    First,
    /// Elapsed time since previous epoch, in seconds
    Seconds(f64),
    /// Epoch is older than the previous one
    OutOfOrder(f64),
}

/// [EpochRecord] stores the epochs of the two latest measurements of one entity.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct EpochRecord {
    /// Previous measurement [Epoch]. None until the entity has been observed.
    pub previous: Option<Epoch>,
    /// Current measurement [Epoch]
    pub current: Option<Epoch>,
}

impl EpochRecord {
    /// Moves this record forward to `t`.
    /// Out of order epochs are not accepted as new reference:
    /// `previous` keeps the latest epoch, so the following (ordered) epochs are
    /// not impacted.
    pub(crate) fn advance(&mut self, t: Epoch) -> Elapsed {
        self.current = Some(t);

        match self.previous {
            None => {
                self.previous = Some(t);
                Elapsed::First
            },
            Some(previous) => match elapsed_seconds(previous, t) {
                Some(dt) => {
                    self.previous = Some(t);
                    Elapsed::Seconds(dt)
                },
                None => Elapsed::OutOfOrder((previous - t).to_seconds()),
            },
        }
    }
}

/// [EpochRegistry] keeps one [EpochRecord] per entity, created on first encounter,
/// and turns elapsed time into random walk variance.
#[derive(Debug, Clone)]
pub struct EpochRegistry<K: EntityKey> {
    /// Spectral density, shared by all entities without override
    qprime: f64,
    /// Per entity spectral density
    overrides: HashMap<K, f64>,
    /// Per entity records
    records: HashMap<K, EpochRecord>,
}

impl<K: EntityKey> EpochRegistry<K> {
    /// Builds a new [EpochRegistry] with given spectral density in m².s⁻¹
    pub fn new(qprime: f64) -> Self {
        Self {
            qprime,
            overrides: HashMap::with_capacity(8),
            records: HashMap::with_capacity(16),
        }
    }

    /// Shared spectral density
    pub fn qprime(&self) -> f64 {
        self.qprime
    }

    /// Spectral density applied to this entity
    pub fn qprime_of(&self, key: &K) -> f64 {
        self.overrides.get(key).copied().unwrap_or(self.qprime)
    }

    /// Updates the shared spectral density. Does not modify
    /// the entities that have their own spectral density.
    pub fn set_qprime(&mut self, qprime: f64) {
        self.qprime = qprime;
    }

    /// Defines a spectral density specific to this entity
    pub fn set_qprime_for(&mut self, key: K, qprime: f64) {
        self.overrides.insert(key, qprime);
    }

    /// Presets previous [Epoch] of this entity
    pub fn set_previous_epoch(&mut self, key: K, t: Epoch) {
        self.records.entry(key).or_default().previous = Some(t);
    }

    /// Presets current [Epoch] of this entity
    pub fn set_current_epoch(&mut self, key: K, t: Epoch) {
        self.records.entry(key).or_default().current = Some(t);
    }

    /// [EpochRecord] of this entity, if it was ever encountered
    pub fn record(&self, key: &K) -> Option<&EpochRecord> {
        self.records.get(key)
    }

    /// Number of entities encountered so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Advances the record of this entity without computing any variance.
    pub(crate) fn advance(&mut self, key: &K, t: Epoch) -> Elapsed {
        self.record_mut(key).advance(t)
    }

    /// Moves this entity to `t` and returns the variance accumulated
    /// since its previous epoch. The very first epoch of an entity
    /// does not accumulate any variance.
    pub fn compute_q(&mut self, key: &K, t: Epoch) -> f64 {
        let qprime = self.qprime_of(key);

        match self.advance(key, t) {
            Elapsed::First => 0.0,
            Elapsed::Seconds(dt) => (qprime * dt).max(0.0),
            Elapsed::OutOfOrder(dt) => {
                warn!("{}({:?}): epoch is {}s in the past - ignored", t, key, dt);
                0.0
            },
        }
    }

    fn record_mut(&mut self, key: &K) -> &mut EpochRecord {
        if !self.records.contains_key(key) {
            trace!("{:?}: new entity", key);
        }
        self.records.entry(key.clone()).or_default()
    }
}
