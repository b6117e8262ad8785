//! Heliport (FARP) family of static objects.

use serde_json::Value;

use super::Unit;
use crate::constants::{DEFAULT_HELIPORT_CALLSIGN, DEFAULT_HELIPORT_FREQUENCY};
use crate::error::{CodecError, Result};
use crate::wire::{self, Record};

/// Concrete members of the FARP family. They differ only in their type tag
/// and shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FarpKind {
    Farp,
    SingleHeliPad,
    InvisibleFarp,
}

impl FarpKind {
    pub const ALL: [FarpKind; 3] = [
        FarpKind::Farp,
        FarpKind::SingleHeliPad,
        FarpKind::InvisibleFarp,
    ];

    /// Name used by authoring code to select a member
    pub fn family_name(self) -> &'static str {
        match self {
            FarpKind::Farp => "FARP",
            FarpKind::SingleHeliPad => "SingleHeliPad",
            FarpKind::InvisibleFarp => "InvisibleFARP",
        }
    }

    /// Value of the unit's `type` field
    pub fn type_name(self) -> &'static str {
        match self {
            FarpKind::Farp => "FARP",
            FarpKind::SingleHeliPad => "SINGLE_HELIPAD",
            FarpKind::InvisibleFarp => "Invisible FARP",
        }
    }

    pub fn shape_name(self) -> &'static str {
        match self {
            FarpKind::Farp => "FARPS",
            FarpKind::SingleHeliPad => "FARP",
            FarpKind::InvisibleFarp => "invisiblefarp",
        }
    }

    pub fn from_family_name(name: &str) -> Option<FarpKind> {
        Self::ALL.into_iter().find(|k| k.family_name() == name)
    }

    /// Recognise a static's type tag as a FARP member
    pub fn from_type_name(type_name: &str) -> Option<FarpKind> {
        Self::ALL.into_iter().find(|k| k.type_name() == type_name)
    }
}

/// Radio settings of a heliport
#[derive(Debug, Clone, PartialEq)]
pub struct HeliportData {
    pub kind: FarpKind,
    /// MHz
    pub frequency: f64,
    pub modulation: i64,
    pub callsign_id: i64,
}

impl HeliportData {
    /// Settings a newly placed heliport starts with
    pub fn new(kind: FarpKind) -> Self {
        Self {
            kind,
            frequency: DEFAULT_HELIPORT_FREQUENCY,
            modulation: 0,
            callsign_id: DEFAULT_HELIPORT_CALLSIGN,
        }
    }

    pub(super) fn read(kind: FarpKind, record: &Record) -> Result<Self> {
        Ok(Self {
            kind,
            frequency: wire::optional_f64(record, "heliport_frequency")?
                .unwrap_or(DEFAULT_HELIPORT_FREQUENCY),
            modulation: wire::optional_i64(record, "heliport_modulation")?.unwrap_or(0),
            callsign_id: wire::optional_i64(record, "heliport_callsign_id")?.unwrap_or(0),
        })
    }

    pub(super) fn write(&self, record: &mut Record) {
        record.insert("heliport_frequency".into(), wire::number(self.frequency));
        record.insert("heliport_modulation".into(), Value::from(self.modulation));
        record.insert("heliport_callsign_id".into(), Value::from(self.callsign_id));
    }
}

/// Builds a FARP member from `(id, name, frequency, modulation, callsign_id)`
pub type FarpConstructor = fn(i64, &str, f64, i64, i64) -> Unit;

fn farp(id: i64, name: &str, frequency: f64, modulation: i64, callsign_id: i64) -> Unit {
    Unit::new_farp(FarpKind::Farp, id, name, frequency, modulation, callsign_id)
}

fn single_heli_pad(id: i64, name: &str, frequency: f64, modulation: i64, callsign_id: i64) -> Unit {
    Unit::new_farp(FarpKind::SingleHeliPad, id, name, frequency, modulation, callsign_id)
}

fn invisible_farp(id: i64, name: &str, frequency: f64, modulation: i64, callsign_id: i64) -> Unit {
    Unit::new_farp(FarpKind::InvisibleFarp, id, name, frequency, modulation, callsign_id)
}

/// Family name to constructor, for authoring code that picks the member by name
pub const FARP_REGISTRY: [(&str, FarpConstructor); 3] = [
    ("FARP", farp),
    ("SingleHeliPad", single_heli_pad),
    ("InvisibleFARP", invisible_farp),
];

pub fn farp_constructor(family: &str) -> Result<FarpConstructor> {
    FARP_REGISTRY
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, constructor)| *constructor)
        .ok_or_else(|| CodecError::unknown_tag("farp family", family))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_matches_family_names() {
        for (name, constructor) in FARP_REGISTRY {
            let unit = constructor(7, "pad", 122.0, 1, 3);
            let heliport = unit.heliport().unwrap();
            assert_eq!(heliport.kind.family_name(), name);
            assert_eq!(unit.type_name, heliport.kind.type_name());
        }
    }

    #[test]
    fn test_constructor_lookup() {
        let constructor = farp_constructor("SingleHeliPad").unwrap();
        let unit = constructor(1, "Pad", 127.5, 0, 1);
        assert_eq!(unit.type_name, "SINGLE_HELIPAD");
        assert_eq!(unit.as_static().unwrap().shape_name.as_deref(), Some("FARP"));
    }

    #[test]
    fn test_unknown_family_is_unknown_tag() {
        assert!(matches!(
            farp_constructor("Carrier"),
            Err(CodecError::UnknownTag { .. })
        ));
    }

    #[test]
    fn test_new_heliport_defaults() {
        let heliport = HeliportData::new(FarpKind::Farp);
        assert_eq!(heliport.frequency, 127.5);
        assert_eq!(heliport.modulation, 0);
        assert_eq!(heliport.callsign_id, 1);
    }

    #[test]
    fn test_kind_lookups() {
        assert_eq!(FarpKind::from_type_name("Invisible FARP"), Some(FarpKind::InvisibleFarp));
        assert_eq!(FarpKind::from_type_name("FARPS"), None);
        assert_eq!(FarpKind::from_family_name("InvisibleFARP"), Some(FarpKind::InvisibleFarp));
        assert_eq!(FarpKind::from_family_name("Invisible FARP"), None);
    }
}
