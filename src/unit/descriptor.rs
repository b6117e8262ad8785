//! Unit type descriptors supplied by the host's unit database.

/// Static-object metadata carried by a static prop descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct StaticProp {
    pub category: String,
    pub can_cargo: bool,
    pub shape_name: Option<String>,
    pub rate: Option<i64>,
}

/// What kind of unit a descriptor describes
#[derive(Debug, Clone, PartialEq)]
pub enum Capability {
    StaticProp(StaticProp),
    Plane,
    Helicopter,
    Ship,
    /// Ground vehicle
    Vehicle,
}

impl Capability {
    /// Static category a unit of this capability is filed under
    pub fn category(&self) -> &str {
        match self {
            Capability::StaticProp(prop) => &prop.category,
            Capability::Plane => "Planes",
            Capability::Helicopter => "Helicopters",
            Capability::Ship => "Ships",
            Capability::Vehicle => "Vehicles",
        }
    }
}

/// A unit type from the host database
pub trait UnitType {
    /// Type tag written to the `type` field
    fn id(&self) -> &str;

    fn capability(&self) -> Capability;
}

/// Plain-data descriptor for hosts without their own unit database types
#[derive(Debug, Clone, PartialEq)]
pub struct UnitTypeInfo {
    pub id: String,
    pub capability: Capability,
}

impl UnitTypeInfo {
    pub fn new(id: impl Into<String>, capability: Capability) -> Self {
        Self {
            id: id.into(),
            capability,
        }
    }
}

impl UnitType for UnitTypeInfo {
    fn id(&self) -> &str {
        &self.id
    }

    fn capability(&self) -> Capability {
        self.capability.clone()
    }
}
