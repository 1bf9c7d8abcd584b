//! Opaque theme slots passed through to the visual layer.

use std::collections::BTreeMap;

/// Named theme slots (palette colors, fonts) forwarded without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    slots: BTreeMap<String, String>,
}

impl Theme {
    /// Parses `slot=value;slot2=value2` pairs.
    ///
    /// Entries without `=` or with an empty slot name are skipped. Later
    /// entries win over earlier ones with the same slot.
    pub fn parse(spec: &str) -> Self {
        let slots = spec
            .split(';')
            .filter_map(|entry| {
                let (slot, value) = entry.split_once('=')?;
                let slot = slot.trim();
                (!slot.is_empty()).then(|| (slot.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { slots }
    }

    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    pub fn get(&self, slot: &str) -> Option<&str> {
        self.slots.get(slot).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in name order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &str)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
