use indexmap::IndexMap;
use tracing::debug;

use crate::wad::Lump;

/// Sub-record lump kinds that can follow a map marker in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLumpKind {
    Things,
    Linedefs,
    Sidedefs,
    Vertexes,
    Sectors,
    Segs,
    Ssectors,
    Nodes,
    Reject,
    Blockmap,
}

/// Distinct mandatory kinds required to confirm a map set
pub const MANDATORY_KINDS: usize = 5;

impl MapLumpKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "THINGS" => Some(MapLumpKind::Things),
            "LINEDEFS" => Some(MapLumpKind::Linedefs),
            "SIDEDEFS" => Some(MapLumpKind::Sidedefs),
            "VERTEXES" => Some(MapLumpKind::Vertexes),
            "SECTORS" => Some(MapLumpKind::Sectors),
            "SEGS" => Some(MapLumpKind::Segs),
            "SSECTORS" => Some(MapLumpKind::Ssectors),
            "NODES" => Some(MapLumpKind::Nodes),
            "REJECT" => Some(MapLumpKind::Reject),
            "BLOCKMAP" => Some(MapLumpKind::Blockmap),
            _ => None,
        }
    }

    pub fn is_mandatory(self) -> bool {
        matches!(
            self,
            MapLumpKind::Things
                | MapLumpKind::Linedefs
                | MapLumpKind::Sidedefs
                | MapLumpKind::Vertexes
                | MapLumpKind::Sectors
        )
    }
}

/// Scan the directory for map sets: a marker lump followed by a run of
/// map sub-records carrying all five mandatory kinds.
///
/// Returns slot -> display name, seeded with the slot itself. The lump
/// that ends a run is re-considered as the next candidate marker, so
/// back-to-back maps are all found.
pub fn detect_maps(lumps: &[Lump]) -> IndexMap<String, String> {
    let mut maps = IndexMap::new();
    let mut i = 0;

    while i < lumps.len() {
        let candidate = lumps[i].name.clone();
        i += 1;

        let mut seen: Vec<MapLumpKind> = Vec::new();
        while i < lumps.len() {
            let Some(kind) = MapLumpKind::from_name(&lumps[i].name) else {
                break;
            };
            i += 1;
            if kind.is_mandatory() && !seen.contains(&kind) {
                seen.push(kind);
            }
        }

        if seen.len() == MANDATORY_KINDS {
            debug!(slot = %candidate, "detected map set");
            maps.insert(candidate.clone(), candidate);
        }
    }

    maps
}
