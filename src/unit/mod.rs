//! Placeable units and their category extensions.
//!
//! A unit is one base record (id, type tag, position, heading, skill, name)
//! plus at most one category extension: vehicle, ship or static. Heliports
//! are statics that also carry [`HeliportData`].
//!
//! Two ways to build a static:
//! - [`Unit::new_static`] derives category, cargo flag, shape, rate and mass
//!   from a [`UnitType`] descriptor.
//! - [`Unit::new_static_raw`] takes only a type tag and leaves those fields at
//!   empty defaults. It is meant to be followed by [`Unit::load_from_wire`];
//!   only after that load do the two paths agree.

mod descriptor;
mod extension;
mod farp;
mod skill;


pub use descriptor::{Capability, StaticProp, UnitType, UnitTypeInfo};
pub use extension::{ShipData, StaticData, UnitExtension, VehicleData};
pub use farp::{FARP_REGISTRY, FarpConstructor, FarpKind, HeliportData, farp_constructor};
pub use skill::Skill;

use bevy_log::debug;
use bevy_math::DVec2;
use serde_json::Value;
use std::fmt;

use crate::constants::{DEFAULT_HELIPORT_FREQUENCY, DEFAULT_VEHICLE_TYPE, HEADING_DECIMALS};
use crate::error::Result;
use crate::wire::{self, Record, WireEnum};

/// Selects which extension a decoded unit gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKind {
    /// Base record only
    Plain,
    Vehicle,
    Ship,
    Static,
    Heliport(FarpKind),
}

impl UnitKind {
    /// Kind for a record found among static objects: FARP tags select the
    /// matching heliport member, anything else is a plain static.
    pub fn for_static_type(type_name: &str) -> UnitKind {
        FarpKind::from_type_name(type_name)
            .map(UnitKind::Heliport)
            .unwrap_or(UnitKind::Static)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitKind::Plain => "Unit",
            UnitKind::Vehicle => "Vehicle",
            UnitKind::Ship => "Ship",
            UnitKind::Static => "Static",
            UnitKind::Heliport(kind) => kind.family_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: i64,
    /// Value of the `type` field
    pub type_name: String,
    pub position: DVec2,
    /// Degrees. Stored as radians on the wire.
    pub heading: f64,
    /// `None` when unset; an unset skill is omitted from the wire record.
    pub skill: Option<Skill>,
    pub name: String,
    pub extension: UnitExtension,
}

impl Unit {
    pub fn new(id: i64, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            id,
            type_name: type_name.into(),
            position: DVec2::ZERO,
            heading: 0.0,
            skill: Some(Skill::Average),
            name: name.into(),
            extension: UnitExtension::None,
        }
    }

    /// Ground vehicle; `type_name` defaults to `"Sandbox"`
    pub fn new_vehicle(id: i64, name: impl Into<String>, type_name: Option<&str>) -> Self {
        Self {
            extension: UnitExtension::Vehicle(VehicleData {
                player_can_drive: false,
            }),
            ..Self::new(id, name, type_name.unwrap_or(DEFAULT_VEHICLE_TYPE))
        }
    }

    pub fn new_ship(id: i64, name: impl Into<String>, unit_type: &dyn UnitType) -> Self {
        Self::ship_from_tag(id, name, unit_type.id())
    }

    fn ship_from_tag(id: i64, name: impl Into<String>, type_name: &str) -> Self {
        Self {
            extension: UnitExtension::Ship(ShipData::default()),
            ..Self::new(id, name, type_name)
        }
    }

    /// Static object with fields derived from its type descriptor
    pub fn new_static(id: i64, name: impl Into<String>, unit_type: &dyn UnitType) -> Self {
        Self {
            skill: None,
            extension: UnitExtension::Static(StaticData::from_capability(unit_type.capability())),
            ..Self::new(id, name, unit_type.id())
        }
    }

    /// Static object from a bare type tag. Category and the optional fields
    /// stay empty until a `load_from_wire` fills them.
    pub fn new_static_raw(id: i64, name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            skill: None,
            extension: UnitExtension::Static(StaticData::default()),
            ..Self::new(id, name, type_name)
        }
    }

    pub fn new_farp(
        kind: FarpKind,
        id: i64,
        name: impl Into<String>,
        frequency: f64,
        modulation: i64,
        callsign_id: i64,
    ) -> Self {
        let data = StaticData {
            category: "Heliports".to_string(),
            can_cargo: false,
            shape_name: Some(kind.shape_name().to_string()),
            rate: None,
            mass: None,
            heliport: Some(HeliportData {
                kind,
                frequency,
                modulation,
                callsign_id,
            }),
        };
        Self {
            skill: None,
            extension: UnitExtension::Static(data),
            ..Self::new(id, name, kind.type_name())
        }
    }

    /// Unit of `kind` with nothing but identity filled in, ready for a load
    fn blank(kind: UnitKind, id: i64, name: &str, type_name: &str) -> Self {
        match kind {
            UnitKind::Plain => Self::new(id, name, type_name),
            UnitKind::Vehicle => Self::new_vehicle(id, name, Some(type_name)),
            UnitKind::Ship => Self::ship_from_tag(id, name, type_name),
            UnitKind::Static => Self::new_static_raw(id, name, type_name),
            UnitKind::Heliport(farp) => Self {
                type_name: type_name.to_string(),
                ..Self::new_farp(farp, id, name, DEFAULT_HELIPORT_FREQUENCY, 0, 0)
            },
        }
    }

    pub fn kind(&self) -> UnitKind {
        match &self.extension {
            UnitExtension::None => UnitKind::Plain,
            UnitExtension::Vehicle(_) => UnitKind::Vehicle,
            UnitExtension::Ship(_) => UnitKind::Ship,
            UnitExtension::Static(data) => match &data.heliport {
                Some(heliport) => UnitKind::Heliport(heliport.kind),
                None => UnitKind::Static,
            },
        }
    }

    pub fn as_vehicle(&self) -> Option<&VehicleData> {
        match &self.extension {
            UnitExtension::Vehicle(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ship(&self) -> Option<&ShipData> {
        match &self.extension {
            UnitExtension::Ship(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_ship_mut(&mut self) -> Option<&mut ShipData> {
        match &mut self.extension {
            UnitExtension::Ship(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_static(&self) -> Option<&StaticData> {
        match &self.extension {
            UnitExtension::Static(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_static_mut(&mut self) -> Option<&mut StaticData> {
        match &mut self.extension {
            UnitExtension::Static(s) => Some(s),
            _ => None,
        }
    }

    pub fn heliport(&self) -> Option<&HeliportData> {
        self.as_static().and_then(|s| s.heliport.as_ref())
    }

    /// Copy of this unit under a new id. Every other field is shared by value.
    pub fn clone_with_id(&self, id: i64) -> Self {
        Self { id, ..self.clone() }
    }

    /// Decode a unit record. Identity (`unitId`, `name`, `type`) is read
    /// first, then the same fields `load_from_wire` reads.
    pub fn from_wire(kind: UnitKind, value: &Value) -> Result<Self> {
        let record = wire::as_record("units", value)?;
        let id = wire::require_i64(record, "unitId")?;
        let name = wire::require_str(record, "name")?;
        let type_name = wire::require_str(record, "type")?;

        let mut unit = Self::blank(kind, id, name, type_name);
        unit.load_from_wire(value)?;

        debug!(
            "Decoded {} {} '{}' ({})",
            kind.display_name(),
            unit.id,
            unit.name,
            unit.type_name
        );
        Ok(unit)
    }

    /// Overwrite position, heading, skill and extension fields from a record.
    /// Identity fields are untouched. On error the unit is left unchanged.
    pub fn load_from_wire(&mut self, value: &Value) -> Result<()> {
        let record = wire::as_record("units", value)?;

        let position = DVec2::new(wire::require_f64(record, "x")?, wire::require_f64(record, "y")?);
        let heading = wire::require_f64(record, "heading")?.to_degrees();
        let skill = read_skill(record)?;
        let extension = self.extension.read(record)?;

        self.position = position;
        self.heading = heading;
        self.skill = skill;
        self.extension = extension;
        Ok(())
    }

    pub fn to_wire(&self) -> Value {
        let mut record = Record::new();
        record.insert("type".into(), Value::from(self.type_name.as_str()));
        record.insert("x".into(), wire::number(self.position.x));
        record.insert("y".into(), wire::number(self.position.y));
        record.insert(
            "heading".into(),
            wire::number(round_to(self.heading.to_radians(), HEADING_DECIMALS)),
        );
        record.insert("unitId".into(), Value::from(self.id));
        record.insert("name".into(), Value::from(self.name.as_str()));
        if let Some(skill) = self.skill {
            record.insert("skill".into(), Value::from(skill.tag()));
        }
        self.extension.write(&mut record);
        Value::Object(record)
    }
}

/// Absent, `null` and empty skill all mean unset
fn read_skill(record: &Record) -> Result<Option<Skill>> {
    match wire::optional_str(record, "skill")? {
        None | Some("") => Ok(None),
        Some(tag) => Skill::from_tag("skill", tag).map(Some),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind().display_name(), self.to_wire())
    }
}

/// Build a FARP member by family name
pub fn create_farp(
    family: &str,
    id: i64,
    name: &str,
    frequency: f64,
    modulation: i64,
    callsign_id: i64,
) -> Result<Unit> {
    let constructor = farp_constructor(family)?;
    Ok(constructor(id, name, frequency, modulation, callsign_id))
}
