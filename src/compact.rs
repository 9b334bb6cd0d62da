//! Hoisting of shared fields into a template record.

use crate::{Record, Value};

/// Moves fields that every member shares into `template`.
///
/// A field is shared when all members hold it with deep-equal values. Shared
/// fields are inserted into the template and removed from the members,
/// unless the template already holds the key with a different value, in
/// which case the members keep it. With fewer than two members nothing
/// changes.
///
/// Returns the number of fields removed from each member.
///
/// # Examples
///
/// ```rust
/// use hostinfo::{compact, record};
///
/// let mut template = record!({});
/// let mut cpus = vec![
///     record!({ "vendor": "X", "id": 0 }),
///     record!({ "vendor": "X", "id": 1 }),
/// ];
///
/// assert_eq!(compact(&mut template, &mut cpus), 1);
/// assert_eq!(template, record!({ "vendor": "X" }));
/// assert_eq!(cpus, vec![record!({ "id": 0 }), record!({ "id": 1 })]);
/// ```
pub fn compact(template: &mut Record, members: &mut [Record]) -> usize {
    let shared = shared_fields(members);
    let mut removed = 0;

    for (key, value) in shared {
        match template.get(&key) {
            Some(existing) if *existing != value => continue,
            Some(_) => {}
            None => {
                template.insert(key.clone(), value);
            }
        }

        for member in members.iter_mut() {
            member.remove(&key);
        }
        removed += 1;
    }

    removed
}

/// Collects the fields of the first member that every other member holds
/// with an equal value.
fn shared_fields(members: &[Record]) -> Vec<(String, Value)> {
    let [first, rest @ ..] = members else {
        return Vec::new();
    };
    if rest.is_empty() {
        return Vec::new();
    }

    first
        .iter()
        .filter(|(key, value)| rest.iter().all(|m| m.get(key) == Some(*value)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record;

    #[test]
    fn test_shared_fields_move_to_template() {
        let mut template = record!({ "model": 154 });
        let mut cpus = vec![
            record!({ "vendor": "X", "flags": ["a", "b"], "mhz": 400 }),
            record!({ "vendor": "X", "flags": ["a", "b"], "mhz": 800 }),
            record!({ "vendor": "X", "flags": ["a", "b"], "mhz": 400 }),
        ];

        assert_eq!(compact(&mut template, &mut cpus), 2);
        assert_eq!(
            template,
            record!({ "model": 154, "vendor": "X", "flags": ["a", "b"] })
        );
        for cpu in &cpus {
            assert_eq!(cpu.keys().collect::<Vec<_>>(), vec!["mhz"]);
        }
    }

    #[test]
    fn test_conflicting_template_value_is_kept() {
        let mut template = record!({ "vendor": "Y" });
        let mut cpus = vec![record!({ "vendor": "X" }), record!({ "vendor": "X" })];

        assert_eq!(compact(&mut template, &mut cpus), 0);
        assert_eq!(template, record!({ "vendor": "Y" }));
        assert_eq!(cpus[0], record!({ "vendor": "X" }));
    }

    #[test]
    fn test_matching_template_value_still_removes() {
        let mut template = record!({ "vendor": "X" });
        let mut cpus = vec![record!({ "vendor": "X" }), record!({ "vendor": "X" })];

        assert_eq!(compact(&mut template, &mut cpus), 1);
        assert!(cpus.iter().all(Record::is_empty));
    }

    #[test]
    fn test_single_member_is_untouched() {
        let mut template = Record::new();
        let mut cpus = vec![record!({ "vendor": "X" })];

        assert_eq!(compact(&mut template, &mut cpus), 0);
        assert!(template.is_empty());
        assert_eq!(cpus[0].len(), 1);

        assert_eq!(compact(&mut template, &mut []), 0);
    }

    #[test]
    fn test_key_missing_from_one_member() {
        let mut template = Record::new();
        let mut cpus = vec![record!({ "serial": "1" }), record!({})];

        assert_eq!(compact(&mut template, &mut cpus), 0);
        assert_eq!(cpus[0].len(), 1);
    }
}
