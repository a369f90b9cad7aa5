//! Static species profile table.
//!
//! Every supported batch type is a [`Species`] variant with one immutable
//! [`SpeciesProfile`]. Keys coming from user input are resolved through
//! [`FromStr`], which is the only place an unknown key can surface, as
//! [`PlannerError::InvalidSpecies`].

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::PlannerError, models::Phase};

/// Storage barrel size in pounds of feed.
pub const BARREL_CAPACITY_LBS: f64 = 300.0;

/// How a batch starts out on the homestead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Bred on site and carried to term
    Mammal,
    /// Delivered as eggs or chicks
    Poultry,
}

impl Category {
    /// Phase covering the input date range.
    pub fn intake_phase(&self) -> Phase {
        match self {
            Category::Mammal => Phase::Breeding,
            Category::Poultry => Phase::Arrival,
        }
    }

    /// Phase between the input range and birth or hatch.
    pub fn development_phase(&self) -> Phase {
        match self {
            Category::Mammal => Phase::Gestation,
            Category::Poultry => Phase::Incubation,
        }
    }

    /// Prompt shown when asking for the batch date range.
    pub fn date_prompt(&self) -> &'static str {
        match self {
            Category::Mammal => "Expected Date Range of Breeding",
            Category::Poultry => "Arrival/Breeding Date Range",
        }
    }
}

/// Husbandry parameters for one species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesProfile {
    /// Days from breeding or lay to birth or hatch. Zero when the animals
    /// arrive already born.
    pub gestation_days: u32,
    /// Weeks from birth, hatch or arrival until harvest.
    pub weeks_to_processing: u32,
    /// Lifetime supplemental feed per animal.
    pub feed_per_animal_lbs: f64,
    pub category: Category,
    /// Caveat worth showing next to the assumptions.
    pub note: Option<&'static str>,
}

static CHICKEN_EGGS: SpeciesProfile = SpeciesProfile {
    gestation_days: 21,
    weeks_to_processing: 8,
    feed_per_animal_lbs: 15.0,
    category: Category::Poultry,
    note: None,
};

static CHICKEN_CHICKS: SpeciesProfile = SpeciesProfile {
    gestation_days: 0,
    weeks_to_processing: 8,
    feed_per_animal_lbs: 15.0,
    category: Category::Poultry,
    note: None,
};

static TURKEY_CHICKS: SpeciesProfile = SpeciesProfile {
    gestation_days: 0,
    weeks_to_processing: 18,
    feed_per_animal_lbs: 75.0,
    category: Category::Poultry,
    note: None,
};

static KUNEKUNE_PIGS: SpeciesProfile = SpeciesProfile {
    gestation_days: 116,
    weeks_to_processing: 52,
    feed_per_animal_lbs: 650.0,
    category: Category::Mammal,
    note: Some("Kunekune feed needs vary based on pasture quality."),
};

/// Type-safe enumeration of supported batch types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Species {
    #[serde(rename = "chicken eggs")]
    ChickenEggs,
    #[serde(rename = "chicken chicks")]
    ChickenChicks,
    #[serde(rename = "turkey chicks")]
    TurkeyChicks,
    #[serde(rename = "kunekune pigs")]
    KunekunePigs,
}

impl Species {
    /// All species in table order.
    pub const ALL: [Species; 4] = [
        Species::ChickenEggs,
        Species::ChickenChicks,
        Species::TurkeyChicks,
        Species::KunekunePigs,
    ];

    /// Canonical lookup key.
    pub fn key(&self) -> &'static str {
        match self {
            Species::ChickenEggs => "chicken eggs",
            Species::ChickenChicks => "chicken chicks",
            Species::TurkeyChicks => "turkey chicks",
            Species::KunekunePigs => "kunekune pigs",
        }
    }

    /// Title-cased name for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Species::ChickenEggs => "Chicken Eggs",
            Species::ChickenChicks => "Chicken Chicks",
            Species::TurkeyChicks => "Turkey Chicks",
            Species::KunekunePigs => "Kunekune Pigs",
        }
    }

    pub fn profile(&self) -> &'static SpeciesProfile {
        match self {
            Species::ChickenEggs => &CHICKEN_EGGS,
            Species::ChickenChicks => &CHICKEN_CHICKS,
            Species::TurkeyChicks => &TURKEY_CHICKS,
            Species::KunekunePigs => &KUNEKUNE_PIGS,
        }
    }

    /// Comma-separated list of the canonical keys.
    pub fn key_list() -> String {
        Self::ALL
            .iter()
            .map(|species| species.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for Species {
    type Err = PlannerError;

    /// Resolve a key case-insensitively, accepting `-` or `_` for spaces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .replace(['-', '_'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");

        Self::ALL
            .into_iter()
            .find(|species| species.key() == normalized)
            .ok_or_else(|| PlannerError::InvalidSpecies { key: s.to_string() })
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
