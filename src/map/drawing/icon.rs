use serde_json::Value;

use super::DrawingCommon;
use crate::error::Result;
use crate::wire::{self, Record};

/// Map symbol drawn from an icon file
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    pub common: DrawingCommon,
    pub file: String,
    pub scale: f64,
    pub angle: f64,
}

impl Icon {
    pub(super) fn read(common: DrawingCommon, record: &Record) -> Result<Self> {
        Ok(Self {
            common,
            file: wire::require_str(record, "file")?.to_string(),
            scale: wire::require_f64(record, "scale")?,
            angle: wire::require_f64(record, "angle")?,
        })
    }

    pub(super) fn write(&self, record: &mut Record) {
        record.insert("file".into(), Value::from(self.file.as_str()));
        record.insert("scale".into(), wire::number(self.scale));
        record.insert("angle".into(), wire::number(self.angle));
    }
}
