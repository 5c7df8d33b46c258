//! Default settings of the stochastic models.
//! Spectral densities are expressed in m².s⁻¹, sigmas in meters.

/// Global random walk spectral density (m².s⁻¹).
/// Deliberately huge: a state left at this default is re-initialized every epoch.
pub const DEFAULT_RANDOM_WALK_QPRIME: f64 = 9.0E10;

/// White noise standard deviation (m)
pub const DEFAULT_WHITE_NOISE_SIGMA_M: f64 = 3.0E5;

/// Phase ambiguity standard deviation (m), applied on cycle slips
pub const DEFAULT_AMBIGUITY_SIGMA_M: f64 = 2.0E4;

/// Zenith wet delay spectral density (m².s⁻¹)
pub const DEFAULT_TROPO_QPRIME: f64 = 5.0E-8;

/// Tropospheric gradients spectral density (m².s⁻¹)
pub const DEFAULT_TROPO_GRAD_QPRIME: f64 = 5.0E-10;

/// Slant ionospheric delay spectral density (m².s⁻¹)
pub const DEFAULT_IONO_QPRIME: f64 = 1.0E-3;

/// Receiver hardware bias spectral density (m².s⁻¹)
pub const DEFAULT_REC_BIAS_QPRIME: f64 = 1.0E-4;

/// Satellite hardware bias spectral density (m².s⁻¹)
pub const DEFAULT_SAT_BIAS_QPRIME: f64 = 3.0E-6;

/// Inter system bias spectral density (m².s⁻¹)
pub const DEFAULT_ISB_QPRIME: f64 = 9.0E-4;

/// Inter frequency code bias spectral density (m².s⁻¹)
pub const DEFAULT_IFCB_QPRIME: f64 = 1.0E-4;

/// Ionosphere interrupt period (s): typical refresh rate of ionosphere maps.
pub const DEFAULT_IONO_INTERRUPT_SAMPLING_S: f64 = 7200.0;

/// Ionosphere interrupt detection window (s)
pub const DEFAULT_IONO_INTERRUPT_TOLERANCE_S: f64 = 0.5;

/// Ionosphere standard deviation (m) injected on interrupts
pub const DEFAULT_IONO_INTERRUPT_SIGMA_M: f64 = 100.0;
