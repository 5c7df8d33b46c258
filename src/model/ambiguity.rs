use std::collections::HashMap;

use log::debug;

use crate::{
    constants::DEFAULT_AMBIGUITY_SIGMA_M,
    model::StochasticModel,
    prelude::{DataField, Epoch, EpochData, Station, SV},
};

/// [PhaseAmbiguityModel] describes a carrier phase ambiguity.
/// The ambiguity is constant (phi=1, q=0) as long as phase tracking
/// is continuous, and is reset to an uninformative prior (phi=0, q=sigma²)
/// on the epoch a cycle slip happens.
///
/// Cycle slips are either
/// - declared manually with [PhaseAmbiguityModel::set_cs]
/// - or deduced from the [EpochData] in [StochasticModel::prepare]:
///   either from the satellite arc counter (default), or from a cycle slip flag.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseAmbiguityModel {
    /// Variance (m²) applied on cycle slips
    variance: f64,
    /// Current cycle slip status
    cycle_slip: bool,
    /// Satellite arc monitoring (rather than cycle slip flag)
    watch_sat_arc: bool,
    /// Flag used when not monitoring the satellite arc
    cs_flag_type: DataField,
    /// Latest satellite arc per receiver and satellite
    sat_arcs: HashMap<(Station, SV), f64>,
}

impl Default for PhaseAmbiguityModel {
    fn default() -> Self {
        Self::new(DEFAULT_AMBIGUITY_SIGMA_M)
    }
}

impl PhaseAmbiguityModel {
    /// Builds a new [PhaseAmbiguityModel] from standard deviation (m) applied on cycle slips.
    pub fn new(sigma_m: f64) -> Self {
        Self {
            variance: sigma_m * sigma_m,
            cycle_slip: false,
            watch_sat_arc: true,
            cs_flag_type: DataField::CycleSlip,
            sat_arcs: HashMap::with_capacity(32),
        }
    }

    /// Updates standard deviation (m) applied on cycle slips
    pub fn set_sigma(&mut self, sigma_m: f64) {
        self.variance = sigma_m * sigma_m;
    }

    /// Variance (m²) applied on cycle slips
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Declares a cycle slip (or its absence) manually.
    pub fn set_cs(&mut self, cycle_slip: bool) {
        self.cycle_slip = cycle_slip;
    }

    /// Current cycle slip status
    pub fn cycle_slip(&self) -> bool {
        self.cycle_slip
    }

    /// Selects the [DataField] to monitor when not monitoring the satellite arc.
    pub fn set_cs_flag_type(&mut self, field: DataField) {
        self.cs_flag_type = field;
    }

    pub fn cs_flag_type(&self) -> DataField {
        self.cs_flag_type
    }

    /// Selects between satellite arc monitoring (true)
    /// and cycle slip flag monitoring (false).
    pub fn set_watch_sat_arc(&mut self, watch: bool) {
        self.watch_sat_arc = watch;
    }

    pub fn watch_sat_arc(&self) -> bool {
        self.watch_sat_arc
    }

    /// Copies and returns [PhaseAmbiguityModel] monitoring this cycle slip flag.
    pub fn with_cs_flag(&self, field: DataField) -> Self {
        let mut s = self.clone();
        s.set_cs_flag_type(field);
        s.set_watch_sat_arc(false);
        s
    }

    /// Updates the cycle slip status from this [EpochData].
    /// Missing or non finite fields are interpreted as "no cycle slip".
    pub fn check_cs(&mut self, station: &Station, sv: SV, data: &EpochData) {
        self.cycle_slip = if self.watch_sat_arc {
            self.sat_arc_changed(station, sv, data)
        } else {
            data.get(self.cs_flag_type)
                .filter(|flag| flag.is_finite())
                .map(|flag| flag != 0.0)
                .unwrap_or(false)
        };
    }

    fn sat_arc_changed(&mut self, station: &Station, sv: SV, data: &EpochData) -> bool {
        let Some(arc) = data.get(DataField::SatArc).filter(|arc| arc.is_finite()) else {
            return false;
        };

        match self.sat_arcs.insert((station.clone(), sv), arc) {
            Some(previous) => previous != arc,
            None => false,
        }
    }
}

impl StochasticModel for PhaseAmbiguityModel {
    fn phi(&self) -> f64 {
        if self.cycle_slip {
            0.0
        } else {
            1.0
        }
    }

    fn q(&self) -> f64 {
        if self.cycle_slip {
            self.variance
        } else {
            0.0
        }
    }

    fn prepare(&mut self, t: Epoch, station: &Station, sv: SV, data: &EpochData) {
        self.check_cs(station, sv, data);
        if self.cycle_slip {
            debug!("{}({}/{}): cycle slip - ambiguity reset", t, station, sv);
        }
    }
}
