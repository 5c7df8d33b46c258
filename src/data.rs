use std::collections::HashMap;

use crate::prelude::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [Station] identifies the receiver (ground station or rover)
/// that produced the measurements. Two [Station]s are the same entity
/// when they share the same (case insensitive) name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Station {
    name: String,
}

impl Station {
    /// Builds a new [Station] from its name, usually a 4 or 9 character
    /// IGS identifier (like "ONSA" or "ONSA00SWE").
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_uppercase(),
        }
    }

    /// Name of this [Station]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl std::str::FromStr for Station {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidStation);
        }
        Ok(Self::new(trimmed))
    }
}

/// [DataField] identifies one value of the per epoch [EpochData],
/// as produced by upstream preprocessing (cycle slip detectors, arc markers).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataField {
    /// Combined cycle slip flag (any detector)
    #[default]
    CycleSlip,
    /// Cycle slip detected on L1 phase
    CycleSlipL1,
    /// Cycle slip detected on L2 phase
    CycleSlipL2,
    /// Cycle slip detected on L5 phase
    CycleSlipL5,
    /// Cycle slip detected by the geometry free (LI) detector
    CycleSlipGf,
    /// Cycle slip detected by the Melbourne-Wübbena detector
    CycleSlipMw,
    /// Satellite arc counter: increments each time phase tracking was lost
    SatArc,
}

impl DataField {
    /// True if this field is a cycle slip flag
    pub fn is_cycle_slip_flag(&self) -> bool {
        !matches!(self, Self::SatArc)
    }
}

impl std::fmt::Display for DataField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CycleSlip => write!(f, "CSFlag"),
            Self::CycleSlipL1 => write!(f, "CSL1"),
            Self::CycleSlipL2 => write!(f, "CSL2"),
            Self::CycleSlipL5 => write!(f, "CSL5"),
            Self::CycleSlipGf => write!(f, "CSLI"),
            Self::CycleSlipMw => write!(f, "CSMW"),
            Self::SatArc => write!(f, "satArc"),
        }
    }
}

impl std::str::FromStr for DataField {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csflag" | "cs" => Ok(Self::CycleSlip),
            "csl1" => Ok(Self::CycleSlipL1),
            "csl2" => Ok(Self::CycleSlipL2),
            "csl5" => Ok(Self::CycleSlipL5),
            "csli" | "csgf" => Ok(Self::CycleSlipGf),
            "csmw" => Ok(Self::CycleSlipMw),
            "satarc" | "arc" => Ok(Self::SatArc),
            _ => Err(Error::UnknownDataField(s.to_string())),
        }
    }
}

/// [EpochData] gathers the values attached to one tracked signal at one epoch.
/// Models only ever read from it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochData {
    inner: HashMap<DataField, f64>,
}

impl EpochData {
    /// Builds an empty [EpochData]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies and returns [EpochData] with this value attached.
    pub fn with(&self, field: DataField, value: f64) -> Self {
        let mut s = self.clone();
        s.insert(field, value);
        s
    }

    /// Attaches (or replaces) one value
    pub fn insert(&mut self, field: DataField, value: f64) {
        self.inner.insert(field, value);
    }

    /// Value attached to this [DataField], if any
    pub fn get(&self, field: DataField) -> Option<f64> {
        self.inner.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl FromIterator<(DataField, f64)> for EpochData {
    fn from_iter<I: IntoIterator<Item = (DataField, f64)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}
