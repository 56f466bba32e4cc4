use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use crate::intake::{coerce_has_home, coerce_optional_int, coerce_text, coerce_urgency};
use crate::models::domain::{NewDonor, NewVictim};

/// Request to register a victim
///
/// The body is kept as a raw JSON object so that loosely typed submissions
/// (numbers as strings, `"No"` flags, nulls, missing fields) still go through
/// intake coercion instead of being rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateVictimRequest(pub Map<String, Value>);

impl CreateVictimRequest {
    pub fn into_new_victim(self) -> NewVictim {
        let fields = self.0;
        NewVictim {
            name: coerce_text(fields.get("name")),
            location: coerce_text(fields.get("location")),
            need_type: coerce_text(fields.get("need_type")),
            urgency: coerce_urgency(fields.get("urgency")),
            income: coerce_optional_int(fields.get("income"), 0),
            has_home: coerce_has_home(fields.get("has_home")),
            amount_needed: coerce_optional_int(fields.get("amount_needed"), 0),
        }
    }
}

/// Request to register a donor
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CreateDonorRequest(pub Map<String, Value>);

impl CreateDonorRequest {
    pub fn into_new_donor(self) -> NewDonor {
        let fields = self.0;
        NewDonor {
            name: coerce_text(fields.get("name")),
            location: coerce_text(fields.get("location")),
            resource_type: coerce_text(fields.get("resource_type")),
            donation_amount: coerce_optional_int(fields.get("donation_amount"), 0),
        }
    }
}
