//! Mock world and claim resolver.

use croft_core::{GridPosition, GrowableCell, GrowableWorld, WorldId};
use croft_index::{ClaimBounds, ClaimResolver};
use indexmap::{IndexMap, IndexSet};

/// Mock implementation of [`GrowableWorld`].
///
/// Cells are planted explicitly; residency is toggled per `(world, x, z)`
/// column (everything is resident by default). Growth effects are
/// recorded for assertion rather than rendered.
#[derive(Debug, Default)]
pub struct MockWorld {
    cells: IndexMap<GridPosition, GrowableCell>,
    unresident: IndexSet<(WorldId, i32, i32)>,
    effects: Vec<GridPosition>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a growable at `pos`.
    pub fn plant(&mut self, pos: GridPosition, stage: u8, max_stage: u8) {
        self.cells.insert(pos, GrowableCell::new(stage, max_stage));
    }

    /// Remove whatever is at `pos` (simulates the crop being broken).
    pub fn destroy(&mut self, pos: &GridPosition) {
        self.cells.swap_remove(pos);
    }

    /// Current cell state, regardless of residency.
    pub fn cell(&self, pos: &GridPosition) -> Option<GrowableCell> {
        self.cells.get(pos).copied()
    }

    /// Mark a column as not loaded; the scheduler must skip it.
    pub fn mark_unresident(&mut self, world: WorldId, x: i32, z: i32) {
        self.unresident.insert((world, x, z));
    }

    /// Load a previously-unresident column again.
    pub fn mark_resident(&mut self, world: WorldId, x: i32, z: i32) {
        self.unresident.swap_remove(&(world, x, z));
    }

    /// Growth effects fired so far, in order.
    pub fn effects(&self) -> &[GridPosition] {
        &self.effects
    }
}

impl GrowableWorld for MockWorld {
    fn is_region_resident(&self, world: WorldId, x: i32, z: i32) -> bool {
        !self.unresident.contains(&(world, x, z))
    }

    fn growable(&self, pos: &GridPosition) -> Option<GrowableCell> {
        self.cells.get(pos).copied()
    }

    fn set_stage(&mut self, pos: &GridPosition, stage: u8) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.stage = stage;
        }
    }

    fn growth_effect(&mut self, pos: &GridPosition) {
        self.effects.push(*pos);
    }
}

/// Mock implementation of [`ClaimResolver`] over a plain map.
#[derive(Debug, Default)]
pub struct MockClaims {
    bounds: IndexMap<croft_core::ClaimId, ClaimBounds>,
}

impl MockClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a claim's footprint.
    pub fn insert(&mut self, claim: croft_core::ClaimId, bounds: ClaimBounds) {
        self.bounds.insert(claim, bounds);
    }
}

impl ClaimResolver for MockClaims {
    fn claim_bounds(&self, claim: croft_core::ClaimId) -> Option<ClaimBounds> {
        self.bounds.get(&claim).copied()
    }
}
