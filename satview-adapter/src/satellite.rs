use serde::{Deserialize, Deserializer, Serialize};

use satview::{Column, ComparatorTable, Row};

pub const OBJECT_TYPES: [&str; 4] = ["PAYLOAD", "ROCKET BODY", "DEBRIS", "UNKNOWN"];

pub const ORBIT_CODES: [&str; 19] = [
    "LEO", "LEO1", "LEO2", "LEO3", "LEO4", "MEO", "GEO", "HEO", "IGO", "EGO", "NSO", "GTO", "GHO",
    "HAO", "MGO", "LMO", "UFO", "ESO", "UNKNOWN",
];

/// Field names as they appear in the catalog payload and in sort requests.
pub mod fields {
    pub const NORAD_CAT_ID: &str = "noradCatId";
    pub const INTL_DES: &str = "intlDes";
    pub const NAME: &str = "name";
    pub const LAUNCH_DATE: &str = "launchDate";
    pub const DECAY_DATE: &str = "decayDate";
    pub const OBJECT_TYPE: &str = "objectType";
    pub const LAUNCH_SITE_CODE: &str = "launchSiteCode";
    pub const COUNTRY_CODE: &str = "countryCode";
    pub const ORBIT_CODE: &str = "orbitCode";

    /// Every attribute requested from the catalog API, in request order.
    pub const ALL: [&str; 9] = [
        NORAD_CAT_ID,
        INTL_DES,
        NAME,
        LAUNCH_DATE,
        DECAY_DATE,
        OBJECT_TYPE,
        LAUNCH_SITE_CODE,
        COUNTRY_CODE,
        ORBIT_CODE,
    ];
}

/// A tracked object from the satellite catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Satellite {
    #[serde(deserialize_with = "string_or_number")]
    pub norad_cat_id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub intl_des: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub launch_date: String,
    pub decay_date: Option<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub object_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub launch_site_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub country_code: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub orbit_code: String,
}

impl Satellite {
    pub fn new(norad_cat_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            norad_cat_id: norad_cat_id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_object_type(mut self, object_type: impl Into<String>) -> Self {
        self.object_type = object_type.into();
        self
    }

    pub fn with_orbit_code(mut self, orbit_code: impl Into<String>) -> Self {
        self.orbit_code = orbit_code.into();
        self
    }

    pub fn with_launch_date(mut self, launch_date: impl Into<String>) -> Self {
        self.launch_date = launch_date.into();
        self
    }

    pub fn with_country_code(mut self, country_code: impl Into<String>) -> Self {
        self.country_code = country_code.into();
        self
    }

    /// CSS-style badge class for the object type, used by shells that colour-code rows.
    pub fn object_type_class(&self) -> &'static str {
        match self.object_type.as_str() {
            "PAYLOAD" => "object-type-payload",
            "ROCKET BODY" => "object-type-rocket",
            "DEBRIS" => "object-type-debris",
            _ => "object-type-unknown",
        }
    }
}

impl Row for Satellite {
    type Key = String;

    fn key(&self) -> &String {
        &self.norad_cat_id
    }
}

/// Ordering rules for every catalog field. The NORAD id is numeric, the rest is text.
pub fn comparators() -> ComparatorTable<Satellite> {
    use fields::*;
    ComparatorTable::new()
        .with_numeric(NORAD_CAT_ID, |s: &Satellite| s.norad_cat_id.as_str())
        .with_text(INTL_DES, |s: &Satellite| s.intl_des.as_str())
        .with_text(NAME, |s: &Satellite| s.name.as_str())
        .with_text(LAUNCH_DATE, |s: &Satellite| s.launch_date.as_str())
        .with_text(DECAY_DATE, |s: &Satellite| {
            s.decay_date.as_deref().unwrap_or_default()
        })
        .with_text(OBJECT_TYPE, |s: &Satellite| s.object_type.as_str())
        .with_text(LAUNCH_SITE_CODE, |s: &Satellite| {
            s.launch_site_code.as_str()
        })
        .with_text(COUNTRY_CODE, |s: &Satellite| s.country_code.as_str())
        .with_text(ORBIT_CODE, |s: &Satellite| s.orbit_code.as_str())
}

/// The catalog table layout: name, NORAD id and launch date are sortable.
pub fn default_columns() -> Vec<Column> {
    use fields::*;
    vec![
        Column::new(NAME, "Name", 300).sortable(),
        Column::new(NORAD_CAT_ID, "NORAD ID", 120).sortable(),
        Column::new(ORBIT_CODE, "Orbit Code", 120),
        Column::new(OBJECT_TYPE, "Object Type", 140),
        Column::new(COUNTRY_CODE, "Country", 100),
        Column::new(LAUNCH_DATE, "Launch Date", 120).sortable(),
    ]
}

fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Option::<Raw>::deserialize(d)? {
        Some(Raw::Text(s)) => s,
        Some(Raw::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
