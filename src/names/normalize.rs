use indexmap::IndexMap;

/// Final display-name cleanup over the resolved slot mapping.
///
/// Strips one layer of surrounding double quotes, then prefixes the slot
/// when the name does not already mention it (case-insensitive). Both
/// steps are idempotent, so re-running changes nothing.
pub fn normalize(maps: &mut IndexMap<String, String>) {
    for (slot, name) in maps.iter_mut() {
        if name.len() >= 2 && name.starts_with('"') && name.ends_with('"') {
            *name = name[1..name.len() - 1].to_string();
        }
        if !name.to_uppercase().contains(&slot.to_uppercase()) {
            *name = format!("{slot}: {name}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn maps(entries: &[(&str, &str)]) -> IndexMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_strips_quotes_and_prefixes_slot() {
        let mut m = maps(&[("MAP01", "\"Entryway\"")]);
        normalize(&mut m);
        assert_eq!(m.get("MAP01"), Some(&"MAP01: Entryway".to_string()));
    }

    #[test]
    fn test_name_containing_slot_not_prefixed() {
        let mut m = maps(&[("MAP01", "MAP01: Entryway")]);
        normalize(&mut m);
        assert_eq!(m.get("MAP01"), Some(&"MAP01: Entryway".to_string()));
    }

    #[test]
    fn test_slot_match_is_case_insensitive() {
        let mut m = maps(&[("E1M1", "Hangar (e1m1)")]);
        normalize(&mut m);
        assert_eq!(m.get("E1M1"), Some(&"Hangar (e1m1)".to_string()));
    }

    #[test]
    fn test_unresolved_name_stays_bare_slot() {
        let mut m = maps(&[("MAP01", "MAP01")]);
        normalize(&mut m);
        assert_eq!(m.get("MAP01"), Some(&"MAP01".to_string()));
    }

    #[test]
    fn test_lone_quote_survives() {
        let mut m = maps(&[("MAP01", "\"")]);
        normalize(&mut m);
        assert_eq!(m.get("MAP01"), Some(&"MAP01: \"".to_string()));
    }

    #[test]
    fn test_idempotent() {
        let mut m = maps(&[("MAP01", "\"Entryway\""), ("MAP02", "Underhalls")]);
        normalize(&mut m);
        let once = m.clone();
        normalize(&mut m);
        assert_eq!(m, once);
    }
}
