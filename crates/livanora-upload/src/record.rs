//! Impulse documents and the row mapping that builds them

use crate::coerce;
use crate::error::{Result, UploadError};
use crate::input::InputRow;
use serde::{Deserialize, Serialize};

/// Collection the impulse documents live in
pub const IMPULSES_COLLECTION: &str = "impulses";

/// Document stored under `impulses/{impulse_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImpulseRecord {
    pub sequence: i64,
    pub title_short: String,
    pub title_full: String,
    pub hook_text: String,
    pub motivator_text: String,
    pub impulse_long_text: String,
    pub zones_bridge_text: String,
    pub wellbeing_weight: i64,
    pub tags: Vec<String>,
    pub zones: Zones,
    pub zone_details: ZoneDetails,
    pub zone_focus_text: String,
}

/// Which wellbeing zones an impulse is active in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zones {
    pub sleep: bool,
    pub stress: bool,
    pub heart: bool,
    pub inflammation: bool,
    pub movement: bool,
}

/// Per-zone explanation texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDetails {
    pub sleep_text: String,
    pub stress_text: String,
    pub heart_text: String,
    pub inflammation_text: String,
    pub movement_text: String,
}

/// A mapped row: document key plus body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Impulse {
    pub impulse_id: String,
    pub record: ImpulseRecord,
}

impl Impulse {
    /// Map one spreadsheet row
    ///
    /// Fails with a validation error naming the row and column when the
    /// identifier is missing or a numeric or flag cell cannot be coerced.
    pub fn from_row(row: &InputRow) -> Result<Self> {
        let line = row.line;
        let invalid =
            |column: &'static str| move |message: String| UploadError::validation(line, column, message);

        let impulse_id = coerce::document_id(row.impulse_id.as_deref()).map_err(invalid("impulseId"))?;

        let record = ImpulseRecord {
            sequence: coerce::integer(row.sequence.as_deref()).map_err(invalid("sequence"))?,
            title_short: coerce::text(row.title_short.as_deref()),
            title_full: coerce::text(row.title_full.as_deref()),
            hook_text: coerce::single_line(row.hook_text.as_deref()),
            motivator_text: coerce::single_line(row.motivator_text.as_deref()),
            impulse_long_text: coerce::single_line(row.impulse_long_text.as_deref()),
            zones_bridge_text: coerce::text(row.zones_bridge_text.as_deref()),
            wellbeing_weight: coerce::integer(row.wellbeing_weight.as_deref())
                .map_err(invalid("wellbeingWeight"))?,
            tags: coerce::tags(row.tags.as_deref()),
            zones: Zones {
                sleep: coerce::flag(row.sleep_active.as_deref()).map_err(invalid("sleepActive"))?,
                stress: coerce::flag(row.stress_active.as_deref()).map_err(invalid("stressActive"))?,
                heart: coerce::flag(row.heart_active.as_deref()).map_err(invalid("herzActive"))?,
                inflammation: coerce::flag(row.inflammation_active.as_deref())
                    .map_err(invalid("entzuendungActive"))?,
                movement: coerce::flag(row.movement_active.as_deref())
                    .map_err(invalid("bewegungActive"))?,
            },
            zone_details: ZoneDetails {
                sleep_text: coerce::text(row.sleep_detail_text.as_deref()),
                stress_text: coerce::text(row.stress_detail_text.as_deref()),
                heart_text: coerce::text(row.heart_detail_text.as_deref()),
                inflammation_text: coerce::text(row.inflammation_detail_text.as_deref()),
                movement_text: coerce::text(row.movement_detail_text.as_deref()),
            },
            zone_focus_text: coerce::text(row.zone_focus_text.as_deref()),
        };

        Ok(Self { impulse_id, record })
    }
}
