//! # Presence Collapsing
//!
//! An optional sub-structure whose every field holds its zero value (`false`, `""`,
//! `0`, empty sequence or mapping) is indistinguishable from an absent one. After a
//! sub-structure is filled from the legacy definition it is run through
//! [`omit_if_default`], which drops it back to `None` in that case.
//!
//! The predicate is generic over `Default + PartialEq`: a type's `Default` impl is
//! its zero value, so any new optional sub-structure gets the same behavior by
//! deriving both traits. The header auth source and the JWT mode deliberately do
//! not go through here.

use tracing::trace;

/// True when `value` equals its type's zero value.
pub fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// True when the optional value is absent or holds only zero values.
pub fn should_omit<T: Default + PartialEq>(value: &Option<T>) -> bool {
    value.as_ref().map_or(true, is_zero)
}

/// Reset `slot` to `None` if it only holds zero values. Returns whether it was dropped.
pub fn omit_if_default<T: Default + PartialEq>(slot: &mut Option<T>) -> bool {
    if slot.is_some() && should_omit(slot) {
        trace!(
            structure = std::any::type_name::<T>(),
            "collapsing all-default optional structure"
        );
        *slot = None;
        return true;
    }

    false
}

/// Populate `slot` in place (allocating it if absent), then collapse it if it ended up all-default.
pub(crate) fn fill_optional<T, F>(slot: &mut Option<T>, fill: F)
where
    T: Default + PartialEq,
    F: FnOnce(&mut T),
{
    fill(slot.get_or_insert_with(T::default));
    omit_if_default(slot);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Probe {
        flag: bool,
        name: String,
        items: Vec<u8>,
    }

    #[test]
    fn test_absent_is_omitted() {
        assert!(should_omit::<Probe>(&None));
    }

    #[test]
    fn test_all_default_is_omitted() {
        assert!(should_omit(&Some(Probe::default())));
    }

    #[test]
    fn test_any_non_default_field_keeps_value() {
        assert!(!should_omit(&Some(Probe { flag: true, ..Default::default() })));
        assert!(!should_omit(&Some(Probe { name: "x".into(), ..Default::default() })));
        assert!(!should_omit(&Some(Probe { items: vec![0], ..Default::default() })));
    }

    #[test]
    fn test_omit_if_default_resets_slot() {
        let mut slot = Some(Probe::default());
        assert!(omit_if_default(&mut slot));
        assert!(slot.is_none());

        let mut absent: Option<Probe> = None;
        assert!(!omit_if_default(&mut absent));
    }

    #[test]
    fn test_fill_optional_reuses_existing_value() {
        let mut slot = Some(Probe { items: vec![1, 2], ..Default::default() });
        fill_optional(&mut slot, |probe| probe.name = "kept".into());

        let probe = slot.unwrap();
        assert_eq!(probe.name, "kept");
        assert_eq!(probe.items, vec![1, 2]);
    }

    #[test]
    fn test_fill_optional_collapses_empty_fill() {
        let mut slot: Option<Probe> = None;
        fill_optional(&mut slot, |probe| probe.flag = false);
        assert!(slot.is_none());
    }

    #[test]
    fn test_is_zero_scalars() {
        assert!(is_zero(&0_i64));
        assert!(is_zero(&0.0_f64));
        assert!(is_zero(&String::new()));
        assert!(!is_zero(&7_u64));
    }
}
