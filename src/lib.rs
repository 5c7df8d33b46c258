#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod constants;
mod data;
mod error;
mod model;

#[cfg(test)]
mod tests;

// prelude
pub mod prelude {
    pub use crate::cfg::{AmbiguityOpts, Config, InterruptOpts, ModelKind};
    pub use crate::constants::{
        DEFAULT_AMBIGUITY_SIGMA_M, DEFAULT_IFCB_QPRIME, DEFAULT_IONO_INTERRUPT_SAMPLING_S,
        DEFAULT_IONO_INTERRUPT_SIGMA_M, DEFAULT_IONO_INTERRUPT_TOLERANCE_S, DEFAULT_IONO_QPRIME,
        DEFAULT_ISB_QPRIME, DEFAULT_RANDOM_WALK_QPRIME, DEFAULT_REC_BIAS_QPRIME,
        DEFAULT_SAT_BIAS_QPRIME, DEFAULT_TROPO_GRAD_QPRIME, DEFAULT_TROPO_QPRIME,
        DEFAULT_WHITE_NOISE_SIGMA_M,
    };
    pub use crate::data::{DataField, EpochData, Station};
    pub use crate::error::Error;
    pub use crate::model::{
        ConstantModel, EntityKey, EntityRandomWalk, EpochRecord, EpochRegistry,
        IFCBRandomWalkModel, ISBRandomWalkModel, InterFrequencyCodeBias, InterSystemBias,
        InterruptSchedule, IonoRandomWalkModel, PhaseAmbiguityModel, RandomWalkModel,
        RandomWalkProcess, RecBiasRandomWalkModel, ReceiverBias, SatBiasRandomWalkModel,
        SatelliteBias, StochasticModel, TropoGradRandomWalkModel, TropoGradients,
        TropoRandomWalkModel, WhiteNoiseModel, ZenithWetDelay,
    };
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
}
