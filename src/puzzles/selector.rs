//! Puzzles domain: choosing the next animal to award.

use bevy::prelude::*;

use crate::content::{AnimalDef, Catalog, Collection};
use crate::puzzles::random::RandomSource;

/// Picks the easiest animal not yet collected.
///
/// Returns `None` once every catalog animal is owned. Animals sharing the
/// lowest remaining level are tie-broken uniformly through `rng`.
pub fn choose_next<'a, R: RandomSource + ?Sized>(
    catalog: &'a Catalog,
    owned: &Collection,
    rng: &mut R,
) -> Option<&'a AnimalDef> {
    let available: Vec<&AnimalDef> = catalog
        .iter()
        .filter(|animal| !owned.contains(&animal.id))
        .collect();

    let min_level = available.iter().map(|animal| animal.level).min()?;
    let candidates: Vec<&AnimalDef> = available
        .into_iter()
        .filter(|animal| animal.level == min_level)
        .collect();

    let index = rng.choose_index(candidates.len()).min(candidates.len() - 1);
    let chosen = candidates[index];
    debug!(
        "Chose '{}' (level {}) from {} candidate(s)",
        chosen.id,
        min_level,
        candidates.len()
    );
    Some(chosen)
}
