use crate::{constants::DEFAULT_WHITE_NOISE_SIGMA_M, model::StochasticModel};

/// [WhiteNoiseModel] describes a state that carries no memory:
/// it is drawn again from a zero mean distribution every epoch.
/// Typical use is the receiver clock offset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WhiteNoiseModel {
    variance: f64,
}

impl Default for WhiteNoiseModel {
    fn default() -> Self {
        Self::new(DEFAULT_WHITE_NOISE_SIGMA_M)
    }
}

impl WhiteNoiseModel {
    /// Builds a new [WhiteNoiseModel] from standard deviation in meters.
    pub fn new(sigma_m: f64) -> Self {
        Self {
            variance: sigma_m * sigma_m,
        }
    }

    /// Copies and returns [WhiteNoiseModel] with updated standard deviation.
    pub fn with_sigma(&self, sigma_m: f64) -> Self {
        let mut s = *self;
        s.set_sigma(sigma_m);
        s
    }

    /// Updates standard deviation (in meters)
    pub fn set_sigma(&mut self, sigma_m: f64) {
        self.variance = sigma_m * sigma_m;
    }

    /// Variance in m²
    pub fn variance(&self) -> f64 {
        self.variance
    }
}

impl StochasticModel for WhiteNoiseModel {
    fn phi(&self) -> f64 {
        0.0
    }

    fn q(&self) -> f64 {
        self.variance
    }
}
