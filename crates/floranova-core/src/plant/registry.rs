//! The user's plant collection.

use tracing::{debug, info, warn};

use super::model::{Plant, PlantId};
use crate::error::{FloraError, Result};

/// Owned, insertion-ordered collection of plants.
///
/// Partition membership is the single `is_quarantined` flag of each record,
/// so every plant is in exactly one of [`list_healthy`](Self::list_healthy)
/// and [`list_quarantined`](Self::list_quarantined). Health changes only
/// through [`treat`](Self::treat) or an opaque [`upsert`](Self::upsert).
#[derive(Debug, Clone, Default)]
pub struct PlantRegistry {
    plants: Vec<Plant>,
}

impl PlantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from existing records, later duplicates replacing
    /// earlier ones.
    pub fn from_plants(plants: impl IntoIterator<Item = Plant>) -> Self {
        let mut registry = Self::new();
        for plant in plants {
            registry.upsert(plant);
        }
        registry
    }

    /// Inserts a plant, or replaces the record with the same id in place.
    pub fn upsert(&mut self, plant: Plant) {
        match self.position(plant.id) {
            Some(index) => {
                debug!(plant_id = plant.id, "Replacing plant record");
                self.plants[index] = plant;
            }
            None => {
                debug!(plant_id = plant.id, "Adding plant record");
                self.plants.push(plant);
            }
        }
    }

    /// Applies the treatment transition to the plant with `id`.
    ///
    /// Treating an already healthy plant succeeds and leaves its health
    /// unchanged.
    pub fn treat(&mut self, id: PlantId) -> Result<Plant> {
        let Some(index) = self.position(id) else {
            warn!(plant_id = id, "Treatment requested for unknown plant");
            return Err(FloraError::not_found("plant", id));
        };

        let plant = &mut self.plants[index];
        let was_quarantined = plant.is_quarantined;
        plant.apply_treatment();
        info!(plant_id = id, was_quarantined, "Plant treated");
        Ok(plant.clone())
    }

    /// Plants outside quarantine, in insertion order.
    pub fn list_healthy(&self) -> Vec<&Plant> {
        self.plants.iter().filter(|p| !p.is_quarantined).collect()
    }

    /// Quarantined plants, in insertion order.
    pub fn list_quarantined(&self) -> Vec<&Plant> {
        self.plants.iter().filter(|p| p.is_quarantined).collect()
    }

    pub fn get(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PlantId) -> bool {
        self.position(id).is_some()
    }

    /// All plants in insertion order.
    pub fn all(&self) -> &[Plant] {
        &self.plants
    }

    /// Smallest id greater than every stored id.
    ///
    /// Fails once a stored id is `PlantId::MAX`.
    pub fn next_id(&self) -> Result<PlantId> {
        match self.plants.iter().map(|p| p.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| FloraError::internal("plant id space exhausted")),
        }
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    fn position(&self, id: PlantId) -> Option<usize> {
        self.plants.iter().position(|p| p.id == id)
    }
}
