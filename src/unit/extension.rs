//! Category-specific fields layered on top of the base unit record.

use serde_json::Value;

use super::descriptor::Capability;
use super::farp::{FarpKind, HeliportData};
use crate::constants::{CARGO_MASS, DEFAULT_SHIP_FREQUENCY};
use crate::error::Result;
use crate::wire::{self, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct VehicleData {
    pub player_can_drive: bool,
}

impl VehicleData {
    fn read(record: &Record) -> Result<Self> {
        Ok(Self {
            player_can_drive: wire::require_bool(record, "playerCanDrive")?,
        })
    }

    fn write(&self, record: &mut Record) {
        record.insert("playerCanDrive".into(), Value::Bool(self.player_can_drive));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShipData {
    /// Radio frequency in Hz
    pub frequency: i64,
}

impl Default for ShipData {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_SHIP_FREQUENCY,
        }
    }
}

impl ShipData {
    /// Set the communications frequency, in Hz
    pub fn set_frequency(&mut self, frequency: i64) {
        self.frequency = frequency;
    }

    /// An absent `frequency` keeps the current value
    fn read(&self, record: &Record) -> Result<Self> {
        Ok(Self {
            frequency: wire::optional_i64(record, "frequency")?.unwrap_or(self.frequency),
        })
    }

    fn write(&self, record: &mut Record) {
        record.insert("frequency".into(), Value::from(self.frequency));
    }
}

/// Static object fields. `shape_name`, `rate` and `mass` are left out of the
/// wire record entirely when unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticData {
    pub category: String,
    pub can_cargo: bool,
    pub shape_name: Option<String>,
    pub rate: Option<i64>,
    pub mass: Option<f64>,
    /// Present for FARP family members
    pub heliport: Option<HeliportData>,
}

impl StaticData {
    /// Derive static fields from a type descriptor's capability
    pub fn from_capability(capability: Capability) -> Self {
        match capability {
            Capability::StaticProp(prop) => Self {
                category: prop.category,
                can_cargo: prop.can_cargo,
                shape_name: prop.shape_name,
                rate: prop.rate,
                mass: prop.can_cargo.then_some(CARGO_MASS),
                heliport: None,
            },
            other => Self {
                category: other.category().to_string(),
                ..Self::default()
            },
        }
    }

    fn read(heliport: Option<FarpKind>, record: &Record) -> Result<Self> {
        Ok(Self {
            category: wire::require_str(record, "category")?.to_string(),
            can_cargo: wire::optional_bool(record, "canCargo")?.unwrap_or(false),
            shape_name: wire::optional_str(record, "shape_name")?.map(str::to_string),
            rate: wire::optional_i64(record, "rate")?,
            mass: wire::optional_f64(record, "mass")?,
            heliport: heliport
                .map(|kind| HeliportData::read(kind, record))
                .transpose()?,
        })
    }

    fn write(&self, record: &mut Record) {
        record.insert("category".into(), Value::from(self.category.as_str()));
        record.insert("canCargo".into(), Value::Bool(self.can_cargo));
        if let Some(shape_name) = &self.shape_name {
            record.insert("shape_name".into(), Value::from(shape_name.as_str()));
        }
        if let Some(rate) = self.rate {
            record.insert("rate".into(), Value::from(rate));
        }
        if let Some(mass) = self.mass {
            record.insert("mass".into(), wire::number(mass));
        }
        if let Some(heliport) = &self.heliport {
            heliport.write(record);
        }
    }
}

/// Category extension of a unit
#[derive(Debug, Clone, PartialEq)]
pub enum UnitExtension {
    None,
    Vehicle(VehicleData),
    Ship(ShipData),
    Static(StaticData),
}

impl UnitExtension {
    /// Decode the extension fields this variant owns into a fresh value
    pub(super) fn read(&self, record: &Record) -> Result<Self> {
        Ok(match self {
            UnitExtension::None => UnitExtension::None,
            UnitExtension::Vehicle(_) => UnitExtension::Vehicle(VehicleData::read(record)?),
            UnitExtension::Ship(ship) => UnitExtension::Ship(ship.read(record)?),
            UnitExtension::Static(data) => UnitExtension::Static(StaticData::read(
                data.heliport.as_ref().map(|h| h.kind),
                record,
            )?),
        })
    }

    pub(super) fn write(&self, record: &mut Record) {
        match self {
            UnitExtension::None => {}
            UnitExtension::Vehicle(vehicle) => vehicle.write(record),
            UnitExtension::Ship(ship) => ship.write(record),
            UnitExtension::Static(data) => data.write(record),
        }
    }
}
