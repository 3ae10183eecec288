use indexmap::IndexMap;
use tracing::debug;

/// Apply `MAP <slot> <name>` declarations from simple-text metadata.
///
/// Names may be quoted or bare. A bare name is truncated at an opening
/// brace when the brace is past the first character. A quoted name with
/// no closing quote discards the whole declaration. Declarations using
/// `lookup` indirection carry no literal name and are skipped.
pub fn apply_mapinfo(text: &str, maps: &mut IndexMap<String, String>) {
    let mut applied = 0usize;

    for line in text.split('\n') {
        let line = line.trim();
        let Some(head) = line.get(..4) else {
            continue;
        };
        if !head.eq_ignore_ascii_case("MAP ") {
            continue;
        }
        let content = line[4..].trim();
        if content.contains("lookup") {
            continue;
        }
        let Some(space) = content.find(' ') else {
            continue;
        };
        let slot = content[..space].to_uppercase();
        if !maps.contains_key(&slot) {
            continue;
        }
        let rest = content[space + 1..].trim();

        let name = if let Some(stripped) = rest.strip_prefix('"') {
            let Some(end) = stripped.find('"') else {
                // unterminated quote forfeits the declaration
                continue;
            };
            stripped[..end].trim()
        } else {
            match rest.find('{') {
                Some(brace) if brace > 0 => rest[..brace].trim(),
                _ => rest,
            }
        };

        maps.insert(slot, name.to_string());
        applied += 1;
    }

    debug!(applied, "applied simple-text level names");
}
