use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    constants::{
        DEFAULT_IONO_INTERRUPT_SAMPLING_S, DEFAULT_IONO_INTERRUPT_SIGMA_M,
        DEFAULT_IONO_INTERRUPT_TOLERANCE_S, DEFAULT_IONO_QPRIME,
    },
    model::{entity::Elapsed, EpochRecord, EpochRegistry, StochasticModel},
    prelude::{Epoch, EpochData, Station, SV},
};

/// [InterruptSchedule] defines periodic instants where the slant ionospheric
/// delays lose their prior knowledge, to follow external corrections that
/// are refreshed periodically (ionosphere maps for example).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterruptSchedule {
    /// Insert interrupts or not
    pub enabled: bool,
    /// Interrupt period (s)
    pub sampling_s: f64,
    /// Detection window around each interrupt (s)
    pub tolerance_s: f64,
    /// Standard deviation (m) injected on each interrupt
    pub sigma_m: f64,
    /// Reference [Epoch] of the schedule.
    /// When not defined, the first [Epoch] encountered is used, which does not
    /// align interrupts with the refresh instants of the external corrections
    /// (even hours for most ionosphere maps). Define it to match them.
    pub initial_epoch: Option<Epoch>,
}

impl Default for InterruptSchedule {
    fn default() -> Self {
        Self {
            enabled: true,
            sampling_s: DEFAULT_IONO_INTERRUPT_SAMPLING_S,
            tolerance_s: DEFAULT_IONO_INTERRUPT_TOLERANCE_S,
            sigma_m: DEFAULT_IONO_INTERRUPT_SIGMA_M,
            initial_epoch: None,
        }
    }
}

impl InterruptSchedule {
    /// Variance (m²) injected on each interrupt
    pub fn variance(&self) -> f64 {
        self.sigma_m * self.sigma_m
    }

    /// True if `t` is within tolerance of an interrupt.
    /// The reference epoch itself is not an interrupt.
    /// With high rate sampling, several epochs may fall within the same window:
    /// [IonoRandomWalkModel] only applies the first one.
    pub fn is_interrupt(&self, t: Epoch) -> bool {
        self.interrupt_index(t).is_some()
    }

    /// Index (counted from the reference epoch) of the interrupt `t` falls on, if any.
    pub fn interrupt_index(&self, t: Epoch) -> Option<i64> {
        let t0 = self.initial_epoch?;

        if !self.enabled || self.sampling_s <= 0.0 {
            return None;
        }

        let dt = (t - t0).to_seconds();
        let n = (dt / self.sampling_s).round();

        if n >= 1.0 && (dt - n * self.sampling_s).abs() <= self.tolerance_s {
            Some(n as i64)
        } else {
            None
        }
    }
}

/// [IonoRandomWalkModel] describes slant ionospheric delays, one per satellite,
/// as random walks. On top of that, an [InterruptSchedule] periodically
/// resets prior knowledge, whatever the elapsed time.
#[derive(Debug, Clone)]
pub struct IonoRandomWalkModel {
    registry: EpochRegistry<SV>,
    schedule: InterruptSchedule,
    /// Latest interrupt applied, per satellite
    interrupts: HashMap<SV, i64>,
    variance: f64,
}

impl Default for IonoRandomWalkModel {
    fn default() -> Self {
        Self::new(DEFAULT_IONO_QPRIME)
    }
}

impl IonoRandomWalkModel {
    /// Builds a new [IonoRandomWalkModel] with given spectral density in m².s⁻¹
    /// and default [InterruptSchedule].
    pub fn new(qprime: f64) -> Self {
        Self {
            registry: EpochRegistry::new(qprime),
            schedule: InterruptSchedule::default(),
            interrupts: HashMap::with_capacity(16),
            variance: 0.0,
        }
    }

    /// Copies and returns [IonoRandomWalkModel] with updated [InterruptSchedule]
    pub fn with_schedule(&self, schedule: InterruptSchedule) -> Self {
        let mut s = self.clone();
        s.schedule = schedule;
        s.interrupts.clear();
        s
    }

    /// Current [InterruptSchedule]
    pub fn schedule(&self) -> &InterruptSchedule {
        &self.schedule
    }

    /// Updates spectral density (m².s⁻¹) applied to all satellites
    /// that do not have their own.
    pub fn set_qprime(&mut self, qprime: f64) {
        self.registry.set_qprime(qprime);
    }

    /// Defines the spectral density (m².s⁻¹) of one satellite.
    pub fn set_qprime_for(&mut self, sv: SV, qprime: f64) {
        self.registry.set_qprime_for(sv, qprime);
    }

    pub fn qprime_of(&self, sv: &SV) -> f64 {
        self.registry.qprime_of(sv)
    }

    /// Enables or disables interrupts
    pub fn set_insert_interrupt(&mut self, insert: bool) {
        self.schedule.enabled = insert;
    }

    /// Defines reference [Epoch] of the interrupts
    pub fn set_initial_epoch(&mut self, t: Epoch) {
        self.schedule.initial_epoch = Some(t);
        self.interrupts.clear();
    }

    /// Updates interrupt period (s)
    pub fn set_sampling(&mut self, sampling_s: f64) {
        self.schedule.sampling_s = sampling_s;
        self.interrupts.clear();
    }

    /// Updates interrupt detection window (s)
    pub fn set_tolerance(&mut self, tolerance_s: f64) {
        self.schedule.tolerance_s = tolerance_s;
    }

    /// Updates standard deviation (m) injected on interrupts
    pub fn set_interrupt_sigma(&mut self, sigma_m: f64) {
        self.schedule.sigma_m = sigma_m;
    }

    /// Presets previous [Epoch] of this satellite
    pub fn set_previous_epoch(&mut self, sv: SV, t: Epoch) {
        self.registry.set_previous_epoch(sv, t);
    }

    /// Presets current [Epoch] of this satellite
    pub fn set_current_epoch(&mut self, sv: SV, t: Epoch) {
        self.registry.set_current_epoch(sv, t);
    }

    /// [EpochRecord] of this satellite
    pub fn record(&self, sv: &SV) -> Option<&EpochRecord> {
        self.registry.record(sv)
    }

    /// Computes variance of this satellite at `t`,
    /// which is then exposed by [StochasticModel::q].
    pub fn compute_q(&mut self, sv: SV, t: Epoch) {
        if self.schedule.enabled && self.schedule.initial_epoch.is_none() {
            debug!("{}: ionosphere interrupts reference", t);
            self.schedule.initial_epoch = Some(t);
        }

        let interrupt = self
            .schedule
            .interrupt_index(t)
            .filter(|n| self.interrupts.get(&sv) != Some(n));

        let Some(n) = interrupt else {
            self.variance = self.registry.compute_q(&sv, t);
            return;
        };

        // next epoch accumulates from here
        self.variance = match self.registry.advance(&sv, t) {
            Elapsed::OutOfOrder(dt) => {
                warn!("{}({}): epoch is {}s in the past - ignored", t, sv, dt);
                0.0
            },
            _ => {
                debug!("{}({}): ionosphere interrupt #{}", t, sv, n);
                self.interrupts.insert(sv, n);
                self.schedule.variance()
            },
        };
    }
}

impl StochasticModel for IonoRandomWalkModel {
    fn q(&self) -> f64 {
        self.variance
    }

    fn prepare(&mut self, t: Epoch, _: &Station, sv: SV, _: &EpochData) {
        self.compute_q(sv, t);
    }
}
