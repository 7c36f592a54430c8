use indexmap::IndexMap;
use std::collections::HashSet;

/// Split `kwargs` into the entries named in `keys_to_extract` and the rest.
///
/// Returns `(extracted, remaining)`. Both keep the input order.
pub fn extract_args<V>(
    kwargs: IndexMap<String, V>,
    keys_to_extract: &HashSet<&str>,
) -> (IndexMap<String, V>, IndexMap<String, V>) {
    let mut extracted = IndexMap::new();
    let mut remaining = IndexMap::new();

    for (k, v) in kwargs {
        if keys_to_extract.contains(k.as_str()) {
            extracted.insert(k, v);
        } else {
            remaining.insert(k, v);
        }
    }

    (extracted, remaining)
}
