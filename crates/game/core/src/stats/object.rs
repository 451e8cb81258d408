//! Attribute objects: stored values plus derived ("function") attributes.
//!
//! Lookup order for [`Object::get`]:
//! 1. a function attribute registered under the key is evaluated,
//! 2. otherwise the stored value is returned,
//! 3. otherwise the type default.
//!
//! Function attributes are re-evaluated on every read and receive the object
//! by shared reference, so a derivation can read other stored or derived
//! attributes but can never mutate the object. Two function attributes that
//! read each other recurse forever; rule sets must not build such cycles.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use super::Value;

/// Derivation registered for a key.
pub type AttributeFn<N> = Arc<dyn Fn(&Object<N>) -> N + Send + Sync>;

/// Key → value store with derived attributes.
#[derive(Clone)]
pub struct Object<N: Value = i64> {
    stored: BTreeMap<String, N>,
    functions: BTreeMap<String, AttributeFn<N>>,
}

impl<N: Value> Object<N> {
    /// Creates an object with no attributes.
    pub fn new() -> Self {
        Self {
            stored: BTreeMap::new(),
            functions: BTreeMap::new(),
        }
    }

    /// Reads an attribute. Unknown keys yield `N::default()`.
    pub fn get(&self, key: &str) -> N {
        if let Some(function) = self.functions.get(key) {
            return function(self);
        }
        self.stored.get(key).copied().unwrap_or_default()
    }

    /// Stored value only, ignoring any function attribute of the same key.
    pub fn stored(&self, key: &str) -> Option<N> {
        self.stored.get(key).copied()
    }

    /// Overwrites the stored value.
    pub fn set(&mut self, key: impl Into<String>, value: N) {
        self.stored.insert(key.into(), value);
    }

    /// `stored[key] += delta`, starting from the default when absent.
    ///
    /// Returns the new stored value.
    pub fn add(&mut self, key: &str, delta: N) -> N {
        let slot = self.stored.entry(key.to_owned()).or_default();
        *slot = *slot + delta;
        *slot
    }

    /// `stored[key] = clamp(stored[key] + delta, 0, get(cap_key))`.
    ///
    /// Used for healing and damage so that current pools never exceed their
    /// totals nor drop below zero. Returns the new stored value.
    pub fn add_capped(&mut self, key: &str, cap_key: &str, delta: N) -> N {
        let cap = self.get(cap_key);
        let current = self.stored.get(key).copied().unwrap_or_default();
        let next = (current + delta).clamp_between(N::zero(), cap);
        self.stored.insert(key.to_owned(), next);
        next
    }

    /// Registers (or replaces) a derived attribute.
    pub fn bind_function<F>(&mut self, key: impl Into<String>, function: F)
    where
        F: Fn(&Object<N>) -> N + Send + Sync + 'static,
    {
        self.functions.insert(key.into(), Arc::new(function));
    }

    /// Removes a derived attribute, returning whether one was registered.
    pub fn unbind_function(&mut self, key: &str) -> bool {
        self.functions.remove(key).is_some()
    }

    /// Returns true if `key` is derived.
    pub fn has_function(&self, key: &str) -> bool {
        self.functions.contains_key(key)
    }

    /// Keys with a stored or derived value, sorted and without duplicates.
    pub fn attributes(&self) -> Vec<String> {
        self.stored
            .keys()
            .chain(self.functions.keys())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Evaluates every attribute (stored and derived) at once.
    pub fn evaluate(&self) -> BTreeMap<String, N> {
        self.attributes()
            .into_iter()
            .map(|key| {
                let value = self.get(&key);
                (key, value)
            })
            .collect()
    }
}

impl<N: Value> Default for Object<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Value> fmt::Debug for Object<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object")
            .field("stored", &self.stored)
            .field("functions", &self.functions.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn leveled() -> Object<i64> {
        let mut object = Object::new();
        object.set("Experience", 40);
        object.bind_function("Level", |o| o.get("Experience") / 10 + 1);
        object.bind_function("HP/Total", |o| o.get("Level") * 5 + 10);
        object
    }

    #[test]
    fn unknown_keys_read_as_default() {
        let object: Object<i64> = Object::new();
        assert_eq!(object.get("frob"), 0);
        assert_eq!(object.stored("frob"), None);
    }

    #[test]
    fn function_attributes_shadow_stored_values() {
        let mut object = leveled();
        object.set("Level", 99);
        assert_eq!(object.get("Level"), 5);
        assert_eq!(object.stored("Level"), Some(99));
    }

    #[test]
    fn derived_attributes_follow_current_state() {
        let mut object = leveled();
        assert_eq!(object.get("HP/Total"), 35);
        object.add("Experience", 60);
        assert_eq!(object.get("Level"), 11);
        assert_eq!(object.get("HP/Total"), 65);
    }

    #[test]
    fn add_creates_missing_keys() {
        let mut object: Object<i64> = Object::new();
        assert_eq!(object.add("Gold", 3), 3);
        assert_eq!(object.add("Gold", -1), 2);
    }

    #[test]
    fn add_capped_clamps_to_total_and_zero() {
        let mut object = leveled();
        object.set("HP/Current", 30);
        assert_eq!(object.add_capped("HP/Current", "HP/Total", 20), 35);
        assert_eq!(object.add_capped("HP/Current", "HP/Total", -50), 0);
    }

    #[test]
    fn attributes_lists_stored_and_derived_keys_once() {
        let mut object = leveled();
        object.set("Level", 1);
        assert_eq!(object.attributes(), vec!["Experience", "HP/Total", "Level"]);
    }

    #[test]
    fn evaluate_reports_derived_values() {
        let object = leveled();
        let values = object.evaluate();
        assert_eq!(values.get("Level"), Some(&5));
        assert_eq!(values.get("HP/Total"), Some(&35));
    }

    #[test]
    fn unbinding_restores_stored_value() {
        let mut object = leveled();
        object.set("Level", 2);
        assert!(object.unbind_function("Level"));
        assert_eq!(object.get("Level"), 2);
        assert!(!object.has_function("Level"));
    }

    proptest! {
        #[test]
        fn get_after_set_returns_value(key in "[A-Za-z/]{1,12}", value in any::<i64>()) {
            let mut object: Object<i64> = Object::new();
            object.set(key.clone(), value);
            prop_assert_eq!(object.get(&key), value);
        }

        #[test]
        fn healing_never_exceeds_cap(
            total in 0i64..1_000,
            current in 0i64..1_000,
            delta in 1i64..1_000,
        ) {
            let mut object: Object<i64> = Object::new();
            object.set("HP/Total", total);
            object.set("HP/Current", current.min(total));
            object.add_capped("HP/Current", "HP/Total", delta);
            prop_assert!(object.get("HP/Current") <= object.get("HP/Total"));
            prop_assert!(object.get("HP/Current") >= 0);
        }
    }
}
