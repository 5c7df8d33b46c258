#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    constants::*,
    prelude::{
        ConstantModel, DataField, Epoch, Error, IFCBRandomWalkModel, ISBRandomWalkModel,
        InterruptSchedule, IonoRandomWalkModel, PhaseAmbiguityModel, RandomWalkModel,
        RecBiasRandomWalkModel, SatBiasRandomWalkModel, StochasticModel,
        TropoGradRandomWalkModel, TropoRandomWalkModel, WhiteNoiseModel,
    },
};

mod kind;
pub use kind::ModelKind;

fn default_random_walk_qprime() -> f64 {
    DEFAULT_RANDOM_WALK_QPRIME
}

fn default_white_noise_sigma() -> f64 {
    DEFAULT_WHITE_NOISE_SIGMA_M
}

fn default_tropo_qprime() -> f64 {
    DEFAULT_TROPO_QPRIME
}

fn default_tropo_grad_qprime() -> f64 {
    DEFAULT_TROPO_GRAD_QPRIME
}

fn default_iono_qprime() -> f64 {
    DEFAULT_IONO_QPRIME
}

fn default_rec_bias_qprime() -> f64 {
    DEFAULT_REC_BIAS_QPRIME
}

fn default_sat_bias_qprime() -> f64 {
    DEFAULT_SAT_BIAS_QPRIME
}

fn default_isb_qprime() -> f64 {
    DEFAULT_ISB_QPRIME
}

fn default_ifcb_qprime() -> f64 {
    DEFAULT_IFCB_QPRIME
}

fn default_ambiguity_sigma() -> f64 {
    DEFAULT_AMBIGUITY_SIGMA_M
}

fn default_watch_sat_arc() -> bool {
    true
}

fn default_iono_interrupts() -> bool {
    true
}

fn default_interrupt_sampling() -> f64 {
    DEFAULT_IONO_INTERRUPT_SAMPLING_S
}

fn default_interrupt_tolerance() -> f64 {
    DEFAULT_IONO_INTERRUPT_TOLERANCE_S
}

fn default_interrupt_sigma() -> f64 {
    DEFAULT_IONO_INTERRUPT_SIGMA_M
}

/// Phase ambiguity settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AmbiguityOpts {
    /// Standard deviation (m) applied on cycle slips
    #[cfg_attr(feature = "serde", serde(default = "default_ambiguity_sigma"))]
    pub sigma: f64,
    /// Monitor the satellite arc counter (true),
    /// or the cycle slip flag (false).
    #[cfg_attr(feature = "serde", serde(default = "default_watch_sat_arc"))]
    pub watch_sat_arc: bool,
    /// Cycle slip flag, used when not monitoring the satellite arc.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cs_flag: DataField,
}

impl Default for AmbiguityOpts {
    fn default() -> Self {
        Self {
            sigma: default_ambiguity_sigma(),
            watch_sat_arc: default_watch_sat_arc(),
            cs_flag: DataField::default(),
        }
    }
}

/// Ionospheric interrupts settings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InterruptOpts {
    /// Insert interrupts
    #[cfg_attr(feature = "serde", serde(default = "default_iono_interrupts"))]
    pub enabled: bool,
    /// Interrupt period (s)
    #[cfg_attr(feature = "serde", serde(default = "default_interrupt_sampling"))]
    pub sampling: f64,
    /// Detection window (s)
    #[cfg_attr(feature = "serde", serde(default = "default_interrupt_tolerance"))]
    pub tolerance: f64,
    /// Standard deviation (m) injected on each interrupt
    #[cfg_attr(feature = "serde", serde(default = "default_interrupt_sigma"))]
    pub sigma: f64,
    /// Reference [Epoch]. The first processed [Epoch] is used when omitted.
    #[cfg_attr(feature = "serde", serde(default))]
    pub initial_epoch: Option<Epoch>,
}

impl Default for InterruptOpts {
    fn default() -> Self {
        Self {
            enabled: default_iono_interrupts(),
            sampling: default_interrupt_sampling(),
            tolerance: default_interrupt_tolerance(),
            sigma: default_interrupt_sigma(),
            initial_epoch: None,
        }
    }
}

impl InterruptOpts {
    /// [InterruptSchedule] described by these settings
    pub fn schedule(&self) -> InterruptSchedule {
        InterruptSchedule {
            enabled: self.enabled,
            sampling_s: self.sampling,
            tolerance_s: self.tolerance,
            sigma_m: self.sigma,
            initial_epoch: self.initial_epoch,
        }
    }
}

/// [Config] gathers the settings of every stochastic model.
/// Spectral densities (qprime) are expressed in m².s⁻¹, sigmas in meters.
/// Time units are always seconds.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Spectral density of the single state [RandomWalkModel]
    #[cfg_attr(feature = "serde", serde(default = "default_random_walk_qprime"))]
    pub random_walk_qprime: f64,
    /// Standard deviation of the [WhiteNoiseModel]
    #[cfg_attr(feature = "serde", serde(default = "default_white_noise_sigma"))]
    pub white_noise_sigma: f64,
    /// Zenith wet delay spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_tropo_qprime"))]
    pub tropo_qprime: f64,
    /// Tropospheric gradients spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_tropo_grad_qprime"))]
    pub tropo_grad_qprime: f64,
    /// Slant ionospheric delay spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_iono_qprime"))]
    pub iono_qprime: f64,
    /// Receiver bias spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_rec_bias_qprime"))]
    pub rec_bias_qprime: f64,
    /// Satellite bias spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_sat_bias_qprime"))]
    pub sat_bias_qprime: f64,
    /// Inter system bias spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_isb_qprime"))]
    pub isb_qprime: f64,
    /// Inter frequency code bias spectral density
    #[cfg_attr(feature = "serde", serde(default = "default_ifcb_qprime"))]
    pub ifcb_qprime: f64,
    /// Phase ambiguity settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub ambiguity: AmbiguityOpts,
    /// Ionospheric interrupts settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub iono_interrupts: InterruptOpts,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            random_walk_qprime: default_random_walk_qprime(),
            white_noise_sigma: default_white_noise_sigma(),
            tropo_qprime: default_tropo_qprime(),
            tropo_grad_qprime: default_tropo_grad_qprime(),
            iono_qprime: default_iono_qprime(),
            rec_bias_qprime: default_rec_bias_qprime(),
            sat_bias_qprime: default_sat_bias_qprime(),
            isb_qprime: default_isb_qprime(),
            ifcb_qprime: default_ifcb_qprime(),
            ambiguity: AmbiguityOpts::default(),
            iono_interrupts: InterruptOpts::default(),
        }
    }
}

fn validate_qprime(qprime: f64) -> Result<(), Error> {
    if qprime.is_finite() && qprime >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSpectralDensity(qprime))
    }
}

fn validate_sigma(sigma: f64) -> Result<(), Error> {
    if sigma.is_finite() && sigma >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSigma(sigma))
    }
}

impl Config {
    /// Returns [Config] for real time processing, where
    /// no ionosphere maps are refreshed: interrupts are disabled.
    /// You can then customize [Self] as you will.
    pub fn real_time_preset() -> Self {
        let mut s = Self::default();
        s.iono_interrupts.enabled = false;
        s
    }

    /// Verifies this [Config] describes physically meaningful models.
    pub fn validate(&self) -> Result<(), Error> {
        for qprime in [
            self.random_walk_qprime,
            self.tropo_qprime,
            self.tropo_grad_qprime,
            self.iono_qprime,
            self.rec_bias_qprime,
            self.sat_bias_qprime,
            self.isb_qprime,
            self.ifcb_qprime,
        ] {
            validate_qprime(qprime)?;
        }

        validate_sigma(self.white_noise_sigma)?;
        validate_sigma(self.ambiguity.sigma)?;

        let interrupts = &self.iono_interrupts;

        if interrupts.enabled {
            validate_sigma(interrupts.sigma)?;

            if !interrupts.sampling.is_finite() || interrupts.sampling <= 0.0 {
                return Err(Error::InvalidInterruptSampling(interrupts.sampling));
            }

            if !interrupts.tolerance.is_finite()
                || interrupts.tolerance < 0.0
                || interrupts.tolerance >= interrupts.sampling / 2.0
            {
                return Err(Error::InvalidInterruptTolerance(interrupts.tolerance));
            }
        }

        Ok(())
    }

    /// Builds the [StochasticModel] of this kind, after validating [Self].
    pub fn build(&self, kind: ModelKind) -> Result<Box<dyn StochasticModel>, Error> {
        self.validate()?;

        let model: Box<dyn StochasticModel> = match kind {
            ModelKind::Constant => Box::new(ConstantModel::default()),
            ModelKind::WhiteNoise => Box::new(self.white_noise_model()),
            ModelKind::RandomWalk => Box::new(self.random_walk_model()),
            ModelKind::PhaseAmbiguity => Box::new(self.ambiguity_model()),
            ModelKind::Tropo => Box::new(self.tropo_model()),
            ModelKind::TropoGrad => Box::new(self.tropo_grad_model()),
            ModelKind::Iono => Box::new(self.iono_model()),
            ModelKind::RecBias => Box::new(self.rec_bias_model()),
            ModelKind::SatBias => Box::new(self.sat_bias_model()),
            ModelKind::ISB => Box::new(self.isb_model()),
            ModelKind::IFCB => Box::new(self.ifcb_model()),
        };

        Ok(model)
    }

    pub fn white_noise_model(&self) -> WhiteNoiseModel {
        WhiteNoiseModel::new(self.white_noise_sigma)
    }

    pub fn random_walk_model(&self) -> RandomWalkModel {
        RandomWalkModel::new(self.random_walk_qprime)
    }

    pub fn ambiguity_model(&self) -> PhaseAmbiguityModel {
        let mut model = PhaseAmbiguityModel::new(self.ambiguity.sigma);
        model.set_watch_sat_arc(self.ambiguity.watch_sat_arc);
        model.set_cs_flag_type(self.ambiguity.cs_flag);
        model
    }

    pub fn tropo_model(&self) -> TropoRandomWalkModel {
        TropoRandomWalkModel::new(self.tropo_qprime)
    }

    pub fn tropo_grad_model(&self) -> TropoGradRandomWalkModel {
        TropoGradRandomWalkModel::new(self.tropo_grad_qprime)
    }

    pub fn iono_model(&self) -> IonoRandomWalkModel {
        IonoRandomWalkModel::new(self.iono_qprime).with_schedule(self.iono_interrupts.schedule())
    }

    pub fn rec_bias_model(&self) -> RecBiasRandomWalkModel {
        RecBiasRandomWalkModel::new(self.rec_bias_qprime)
    }

    pub fn sat_bias_model(&self) -> SatBiasRandomWalkModel {
        SatBiasRandomWalkModel::new(self.sat_bias_qprime)
    }

    pub fn isb_model(&self) -> ISBRandomWalkModel {
        ISBRandomWalkModel::new(self.isb_qprime)
    }

    pub fn ifcb_model(&self) -> IFCBRandomWalkModel {
        IFCBRandomWalkModel::new(self.ifcb_qprime)
    }
}
