use thiserror::Error;

/// Errors returned while setting up stochastic models.
/// Once built, models never fail: every epoch produces a (Phi, Q) pair.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Spectral densities are variance rates and must be positive finite numbers.
    #[error("invalid spectral density: {0} m².s⁻¹")]
    InvalidSpectralDensity(f64),

    /// Standard deviations must be positive finite numbers.
    #[error("invalid standard deviation: {0} m")]
    InvalidSigma(f64),

    /// Ionosphere interrupts need a strictly positive period.
    #[error("invalid interrupt sampling period: {0} s")]
    InvalidInterruptSampling(f64),

    /// Interrupt tolerance must be positive and smaller than half the sampling period,
    /// otherwise every epoch would be an interrupt.
    #[error("invalid interrupt tolerance: {0} s")]
    InvalidInterruptTolerance(f64),

    #[error("unknown stochastic model \"{0}\"")]
    UnknownModel(String),

    #[error("unknown data field \"{0}\"")]
    UnknownDataField(String),

    #[error("invalid station name")]
    InvalidStation,
}
