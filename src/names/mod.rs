pub mod dehacked;
pub mod detect;
pub mod mapinfo;
pub mod normalize;
pub mod umapinfo;

pub use detect::{detect_maps, MapLumpKind, MANDATORY_KINDS};
pub use umapinfo::{extract_level_names, Symbol, Token, Tokenizer};

use std::path::Path;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::wad::{Lump, Wad};

pub const DEHACKED: &str = "DEHACKED";
pub const MAPINFO: &str = "MAPINFO";
pub const UMAPINFO: &str = "UMAPINFO";

/// First occurrence of each name-bearing metadata lump
struct MetadataLumps<'w> {
    dehacked: Option<&'w Lump>,
    mapinfo: Option<&'w Lump>,
    umapinfo: Option<&'w Lump>,
}

fn locate_metadata(lumps: &[Lump]) -> MetadataLumps<'_> {
    let mut found = MetadataLumps {
        dehacked: None,
        mapinfo: None,
        umapinfo: None,
    };
    for lump in lumps {
        let entry = match lump.name.as_str() {
            DEHACKED => &mut found.dehacked,
            MAPINFO => &mut found.mapinfo,
            UMAPINFO => &mut found.umapinfo,
            _ => continue,
        };
        if entry.is_none() {
            *entry = Some(lump);
        }
    }
    found
}

fn apply_format(
    wad: &Wad<'_>,
    lump: Option<&Lump>,
    apply: fn(&str, &mut IndexMap<String, String>),
    maps: &mut IndexMap<String, String>,
) {
    let Some(lump) = lump else {
        return;
    };
    match wad.lump_text(lump) {
        Ok(text) => apply(&text, maps),
        Err(err) => warn!(lump = %lump.name, %err, "skipping unreadable metadata lump"),
    }
}

/// Analyze raw container bytes and return the sorted display names of
/// every playable map.
///
/// Detected slots start out named after themselves. Metadata formats are
/// applied in fixed precedence order, dehacked first and umapinfo last,
/// so the later formats overwrite the earlier ones. A metadata lump
/// whose byte range is corrupt forfeits only that format.
pub fn analyze(data: &[u8]) -> Result<Vec<String>> {
    let wad = Wad::parse(data)?;
    let mut maps = detect_maps(wad.lumps());
    debug!(maps = maps.len(), "map detection finished");

    let metadata = locate_metadata(wad.lumps());
    apply_format(&wad, metadata.dehacked, dehacked::apply_dehacked, &mut maps);
    apply_format(&wad, metadata.mapinfo, mapinfo::apply_mapinfo, &mut maps);
    apply_format(&wad, metadata.umapinfo, umapinfo::apply_umapinfo, &mut maps);

    normalize::normalize(&mut maps);

    let mut names: Vec<String> = maps.into_values().collect();
    names.sort();
    Ok(names)
}

/// Read a container file from disk and analyze it
pub fn analyze_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let data = std::fs::read(path).map_err(|e| Error::Io(e.to_string()))?;
    analyze(&data)
}
