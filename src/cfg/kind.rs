use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ModelKind] names every [StochasticModel] this library provides,
/// so the estimator can select one per estimated parameter.
///
/// [StochasticModel]: crate::prelude::StochasticModel
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ModelKind {
    /// Constant state (phi=1, q=0): static coordinates for example.
    #[default]
    Constant,

    /// State without memory: receiver clock offset for example.
    WhiteNoise,

    /// Single state random walk.
    RandomWalk,

    /// Carrier phase ambiguity, reset on cycle slips.
    PhaseAmbiguity,

    /// Zenith wet delay, per receiver.
    Tropo,

    /// Tropospheric gradients, per receiver.
    TropoGrad,

    /// Slant ionospheric delay, per satellite, with periodic interrupts.
    Iono,

    /// Receiver hardware bias.
    RecBias,

    /// Satellite hardware bias.
    SatBias,

    /// Inter system bias, per receiver.
    ISB,

    /// Inter frequency code bias, per receiver and satellite.
    IFCB,
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Constant => write!(fmt, "constant"),
            Self::WhiteNoise => write!(fmt, "white-noise"),
            Self::RandomWalk => write!(fmt, "random-walk"),
            Self::PhaseAmbiguity => write!(fmt, "ambiguity"),
            Self::Tropo => write!(fmt, "tropo"),
            Self::TropoGrad => write!(fmt, "tropo-grad"),
            Self::Iono => write!(fmt, "iono"),
            Self::RecBias => write!(fmt, "rec-bias"),
            Self::SatBias => write!(fmt, "sat-bias"),
            Self::ISB => write!(fmt, "isb"),
            Self::IFCB => write!(fmt, "ifcb"),
        }
    }
}

impl std::str::FromStr for ModelKind {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "constant" => Ok(Self::Constant),
            "white-noise" | "whitenoise" => Ok(Self::WhiteNoise),
            "random-walk" | "randomwalk" => Ok(Self::RandomWalk),
            "ambiguity" | "phase-ambiguity" => Ok(Self::PhaseAmbiguity),
            "tropo" | "ztd" | "zwd" => Ok(Self::Tropo),
            "tropo-grad" | "tropograd" => Ok(Self::TropoGrad),
            "iono" => Ok(Self::Iono),
            "rec-bias" | "recbias" => Ok(Self::RecBias),
            "sat-bias" | "satbias" => Ok(Self::SatBias),
            "isb" => Ok(Self::ISB),
            "ifcb" | "ifb" => Ok(Self::IFCB),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}
