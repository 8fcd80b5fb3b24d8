//! Dataset Models
//!
//! Row types matching the published fish fry dataset.

use serde::{Deserialize, Serialize};

/// A church or nonprofit venue hosting a fish fry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub venue_notes: Option<String>,
}

/// One fish fry offering. Either recurring (every Friday within
/// `start_date..=end_date`) or one-off (`specific_dates` JSON list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishFry {
    pub id: u32,
    pub location_id: u32,
    #[serde(with = "int_bool")]
    pub is_recurring: bool,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// JSON array of ISO dates, serialized as text in the dataset.
    pub specific_dates: Option<String>,
    pub hours_open: Option<String>,
    pub hours_close: Option<String>,
    pub fish_types: Option<String>,
    pub sides: Option<String>,
    pub price_adult: Option<f64>,
    pub price_child: Option<f64>,
    pub price_senior: Option<f64>,
    pub price_family: Option<f64>,
    pub price_notes: Option<String>,
    pub drinks_included: Option<String>,
    pub drinks_purchase: Option<String>,
    #[serde(with = "int_bool")]
    pub dessert_included: bool,
    #[serde(with = "int_bool")]
    pub dine_in: bool,
    #[serde(with = "int_bool")]
    pub carry_out: bool,
    #[serde(with = "int_bool")]
    pub drive_through: bool,
    pub description: Option<String>,
}

impl FishFry {
    /// "4:00–7:00" style hours summary, if either bound is present.
    pub fn hours(&self) -> Option<String> {
        match (&self.hours_open, &self.hours_close) {
            (None, None) => None,
            (open, close) => Some(format!(
                "{}–{}",
                open.as_deref().unwrap_or(""),
                close.as_deref().unwrap_or("")
            )),
        }
    }
}

/// A location joined with its fish fry row (one entry per fish fry).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationWithFishFry {
    pub location: Location,
    pub fish_fry: FishFry,
}

impl LocationWithFishFry {
    pub fn id(&self) -> u32 {
        self.location.id
    }

    pub fn name(&self) -> &str {
        &self.location.name
    }
}

/// The dataset stores booleans as 0/1 integers.
mod int_bool {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(u8::from(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        Ok(u8::deserialize(deserializer)? != 0)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// A joined row with sensible defaults for unit tests.
    pub fn make_entry(location_id: u32, fish_fry_id: u32, name: &str) -> LocationWithFishFry {
        LocationWithFishFry {
            location: Location {
                id: location_id,
                name: name.to_string(),
                address: None,
                city: None,
                state: "WI".to_string(),
                phone: None,
                website: None,
                venue_notes: None,
            },
            fish_fry: FishFry {
                id: fish_fry_id,
                location_id,
                is_recurring: true,
                start_date: Some("2026-02-20".to_string()),
                end_date: Some("2026-04-03".to_string()),
                specific_dates: None,
                hours_open: Some("4:00 PM".to_string()),
                hours_close: Some("7:00 PM".to_string()),
                fish_types: None,
                sides: None,
                price_adult: None,
                price_child: None,
                price_senior: None,
                price_family: None,
                price_notes: None,
                drinks_included: None,
                drinks_purchase: None,
                dessert_included: false,
                dine_in: false,
                carry_out: false,
                drive_through: false,
                description: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_bool_round_trip() {
        let json = r#"{"id":1,"location_id":1,"is_recurring":1,"start_date":null,"end_date":null,
            "specific_dates":null,"hours_open":null,"hours_close":null,"fish_types":null,"sides":null,
            "price_adult":null,"price_child":null,"price_senior":null,"price_family":null,"price_notes":null,
            "drinks_included":null,"drinks_purchase":null,"dessert_included":0,
            "dine_in":1,"carry_out":0,"drive_through":0,"description":null}"#;
        let ff: FishFry = serde_json::from_str(json).expect("should decode");
        assert!(ff.is_recurring);
        assert!(ff.dine_in);
        assert!(!ff.carry_out);

        let back = serde_json::to_string(&ff).expect("should encode");
        assert!(back.contains("\"dine_in\":1"));
        assert!(back.contains("\"carry_out\":0"));
    }

    #[test]
    fn test_hours_summary() {
        let mut entry = test_support::make_entry(1, 1, "St. Test");
        assert_eq!(entry.fish_fry.hours().as_deref(), Some("4:00 PM–7:00 PM"));

        entry.fish_fry.hours_open = None;
        entry.fish_fry.hours_close = None;
        assert_eq!(entry.fish_fry.hours(), None);
    }
}
