//! Data definitions for all RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization. The Catalog provides lookup by id.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Animals (animals.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum AnimalGroup {
    Amphibian,
    Arachnid,
    Bird,
    Fish,
    Insect,
    Mammal,
    Reptile,
}

impl AnimalGroup {
    pub fn display_name(&self) -> &'static str {
        match self {
            AnimalGroup::Amphibian => "Amphibian",
            AnimalGroup::Arachnid => "Arachnid",
            AnimalGroup::Bird => "Bird",
            AnimalGroup::Fish => "Fish",
            AnimalGroup::Insect => "Insect",
            AnimalGroup::Mammal => "Mammal",
            AnimalGroup::Reptile => "Reptile",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Habitat {
    Air,
    Land,
    Sea,
}

impl Habitat {
    pub fn display_name(&self) -> &'static str {
        match self {
            Habitat::Air => "Air",
            Habitat::Land => "Land",
            Habitat::Sea => "Sea",
        }
    }
}

/// A collectible animal. Its level drives puzzle difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnimalDef {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub group: AnimalGroup,
    pub habitat: Habitat,
}

impl AnimalDef {
    /// Relative path of the animal's artwork, e.g. `animals/sea-otter.webp`.
    pub fn image_path(&self) -> String {
        format!("animals/{}.webp", self.name.replace(' ', "-").to_lowercase())
    }
}

// ============================================================================
// Quiz defaults (quiz_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct QuizDefaults {
    pub schema_version: u32,
    /// Name used for the session started at boot
    pub session_name: String,
    /// Fixed seed for reproducible sessions; random when absent
    pub seed: Option<u64>,
}

impl Default for QuizDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            session_name: "player".to_string(),
            seed: None,
        }
    }
}
