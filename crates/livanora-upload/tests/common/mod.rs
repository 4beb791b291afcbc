//! Shared fixtures for upload integration tests

#![allow(dead_code)]

use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str = "impulseId,sequence,titleShort,titleFull,hookText,motivatorText,impulsLongText,zonesBridgeText,wellbeingWeight,tags,sleepActive,stressActive,herzActive,entzuendungActive,bewegungActive,sleepDetailText,stressDetailText,herzDetailText,entzuendungDetailText,bewegungDetailText,zoneFocusText";

pub const TOKEN: &str = "test-token";

/// One CSV record with multi-line cells, sleep and heart zones active
pub fn impulse_line(id: &str, sequence: &str, weight: &str) -> String {
    format!(
        "{id},{sequence},Titel {id},Voller Titel {id},\"Hook\nzweite Zeile\",Motivator,Lang,\"Brücke\nbleibt\",{weight},\"Morgen, Hydration \",TRUE,false,1,,0,Schlaf gut,,,,,Fokus"
    )
}

/// Write a CSV file with the standard header and the given records
pub fn write_csv(lines: &[String]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp csv");
    writeln!(file, "{}", HEADER).expect("write header");
    for line in lines {
        writeln!(file, "{}", line).expect("write row");
    }
    file.flush().expect("flush csv");
    file
}

/// Firestore request body expected for `impulse_line(id, sequence, weight)`
pub fn expected_body(id: &str, sequence: i64, weight: i64) -> Value {
    json!({
        "fields": {
            "sequence": {"integerValue": sequence.to_string()},
            "title_short": {"stringValue": format!("Titel {}", id)},
            "title_full": {"stringValue": format!("Voller Titel {}", id)},
            "hook_text": {"stringValue": "Hook zweite Zeile"},
            "motivator_text": {"stringValue": "Motivator"},
            "impulse_long_text": {"stringValue": "Lang"},
            "zones_bridge_text": {"stringValue": "Brücke\nbleibt"},
            "wellbeing_weight": {"integerValue": weight.to_string()},
            "tags": {"arrayValue": {"values": [
                {"stringValue": "Morgen"},
                {"stringValue": "Hydration"}
            ]}},
            "zones": {"mapValue": {"fields": {
                "sleep": {"booleanValue": true},
                "stress": {"booleanValue": false},
                "heart": {"booleanValue": true},
                "inflammation": {"booleanValue": false},
                "movement": {"booleanValue": false}
            }}},
            "zone_details": {"mapValue": {"fields": {
                "sleep_text": {"stringValue": "Schlaf gut"},
                "stress_text": {"stringValue": ""},
                "heart_text": {"stringValue": ""},
                "inflammation_text": {"stringValue": ""},
                "movement_text": {"stringValue": ""}
            }}},
            "zone_focus_text": {"stringValue": "Fokus"}
        }
    })
}

/// Request path of a document in the default test database
pub fn document_path(collection: &str, id: &str) -> String {
    format!(
        "/v1/projects/livanora-test/databases/(default)/documents/{}/{}",
        collection, id
    )
}
