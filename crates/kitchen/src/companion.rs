//! The virtual pet that lives next to the fridge. Purely cosmetic, never persisted.

use serde::{Deserialize, Serialize};

use fridgekeeper_core::ValueObject;

pub const MAX_VITAL: u8 = 100;

const PET_HAPPINESS: u8 = 5;
const FEED_ENERGY: u8 = 10;
const FEED_HEALTH: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub health: u8,
    pub happiness: u8,
    pub energy: u8,
}

impl ValueObject for Vitals {}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            health: 80,
            happiness: 70,
            energy: 60,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Grumpy,
    Content,
    Happy,
}

impl Mood {
    pub fn from_happiness(happiness: u8) -> Self {
        match happiness {
            0..=30 => Mood::Grumpy,
            70..=u8::MAX => Mood::Happy,
            _ => Mood::Content,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Companion {
    name: String,
    vitals: Vitals,
}

impl Companion {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vitals: Vitals::default(),
        }
    }

    /// Start from explicit vitals; values above the cap are clamped.
    pub fn with_vitals(mut self, vitals: Vitals) -> Self {
        self.vitals = Vitals {
            health: vitals.health.min(MAX_VITAL),
            happiness: vitals.happiness.min(MAX_VITAL),
            energy: vitals.energy.min(MAX_VITAL),
        };
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vitals(&self) -> Vitals {
        self.vitals
    }

    pub fn mood(&self) -> Mood {
        Mood::from_happiness(self.vitals.happiness)
    }

    pub fn pet(&mut self) {
        self.vitals.happiness = bump(self.vitals.happiness, PET_HAPPINESS);
        tracing::debug!(
            companion = %self.name,
            happiness = self.vitals.happiness,
            "companion petted"
        );
    }

    pub fn feed(&mut self) {
        self.vitals.energy = bump(self.vitals.energy, FEED_ENERGY);
        self.vitals.health = bump(self.vitals.health, FEED_HEALTH);
        tracing::debug!(
            companion = %self.name,
            energy = self.vitals.energy,
            health = self.vitals.health,
            "companion fed"
        );
    }
}

fn bump(value: u8, by: u8) -> u8 {
    value.saturating_add(by).min(MAX_VITAL)
}
