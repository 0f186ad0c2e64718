//! Column name normalisation

use std::collections::{HashMap, HashSet};

/// Resolve duplicate column names left to right
///
/// The first occurrence keeps its name; later ones become `name_1`, `name_2`
/// and so on. A suffix that is already taken is skipped, so the result is
/// always unique. Empty names become `column_{position}` (1-based) first.
///
/// ```rust
/// use vizspec_sdk::import::dedupe_column_names;
///
/// let names = dedupe_column_names(&["a", "a", "b", "a"]);
/// assert_eq!(names, vec!["a", "a_1", "b", "a_2"]);
/// ```
pub fn dedupe_column_names<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut result = Vec::with_capacity(names.len());

    for (index, name) in names.iter().enumerate() {
        let name = match name.as_ref() {
            "" => format!("column_{}", index + 1),
            other => other.to_string(),
        };

        if taken.insert(name.clone()) {
            result.push(name);
            continue;
        }

        let counter = suffixes.entry(name.clone()).or_insert(0);
        let candidate = loop {
            *counter += 1;
            let candidate = format!("{name}_{counter}");
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        taken.insert(candidate.clone());
        result.push(candidate);
    }

    result
}
