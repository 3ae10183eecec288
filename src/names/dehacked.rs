use indexmap::IndexMap;
use tracing::debug;

/// Marker for level-name string replacements in binary-patch text
const HUSTR_MARKER: &str = "HUSTR_";

/// Apply `HUSTR_<n> = <name>` lines to the detected map slots.
///
/// The suffix after the marker is zero-padded to two digits and prefixed
/// with `MAP` to form the slot key. Lines without `=` and slots not in
/// the detected set are skipped.
pub fn apply_dehacked(text: &str, maps: &mut IndexMap<String, String>) {
    let mut applied = 0usize;

    for line in text.split('\n') {
        if !line.contains(HUSTR_MARKER) {
            continue;
        }
        let Some(eq) = line.find('=') else {
            continue;
        };
        let hustr = line[..eq].trim();
        let name = line[eq + 1..].trim();

        let suffix: String = hustr.chars().skip(HUSTR_MARKER.len()).collect();
        let slot = format!("MAP{suffix:0>2}");

        if let Some(entry) = maps.get_mut(&slot) {
            *entry = name.to_string();
            applied += 1;
        }
    }

    debug!(applied, "applied binary-patch level names");
}
