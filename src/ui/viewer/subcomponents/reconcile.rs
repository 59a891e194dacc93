// SPDX-License-Identifier: MPL-2.0
//! Removal of selected assets by identity.
//!
//! The selection holds positions, which shift as soon as anything is removed.
//! The assets at the selected positions are snapshotted first, then every
//! asset whose id matches the snapshot is dropped. Stale positions past the
//! end of the collection are ignored.

use std::collections::{BTreeSet, HashSet};

use crate::domain::asset::AssetId;
use crate::media::Asset;

/// Splits `assets` into `(removed, kept)` for the given selection.
///
/// Both halves keep the original relative order.
#[must_use]
pub fn delete(selection: &BTreeSet<usize>, assets: &[Asset]) -> (Vec<Asset>, Vec<Asset>) {
    let removed: Vec<Asset> = selection
        .iter()
        .filter_map(|&index| assets.get(index))
        .cloned()
        .collect();

    let removed_ids: HashSet<AssetId> = removed.iter().map(Asset::id).collect();
    let kept = assets
        .iter()
        .filter(|asset| !removed_ids.contains(&asset.id()))
        .cloned()
        .collect();

    (removed, kept)
}

/// In-place variant used by the viewer. Returns the removed assets.
pub fn delete_in_place(selection: &BTreeSet<usize>, assets: &mut Vec<Asset>) -> Vec<Asset> {
    let (removed, kept) = delete(selection, assets);
    *assets = kept;
    removed
}
