// crates/thaiaddr-core/src/raw.rs
//! Shared raw input: one flat administrative record as it arrives from a feed.
//!
//! The canonical key spelling is camelCase (`provinceCode`, `subdistrictNameTh`,
//! `postalCode`, ...). Feeds exported from SQL dumps usually use snake_case;
//! those spellings are mapped onto the same typed fields through serde
//! aliases, so no key inspection happens at runtime.
use serde::{Deserialize, Deserializer, Serialize};

/// A single flat feed row carrying all three administrative levels.
///
/// Every field is optional. The index builder never validates presence:
/// a missing code means the row contributes nothing at that level, and a
/// missing name becomes an empty string downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRaw {
    #[serde(default, alias = "province_code", deserialize_with = "de_opt_code")]
    pub province_code: Option<u32>,
    #[serde(default, alias = "province_name_th")]
    pub province_name_th: Option<String>,
    #[serde(default, alias = "province_name_en")]
    pub province_name_en: Option<String>,

    #[serde(default, alias = "district_code", deserialize_with = "de_opt_code")]
    pub district_code: Option<u32>,
    #[serde(default, alias = "district_name_th")]
    pub district_name_th: Option<String>,
    #[serde(default, alias = "district_name_en")]
    pub district_name_en: Option<String>,

    #[serde(
        default,
        alias = "subdistrict_code",
        alias = "sub_district_code",
        alias = "subDistrictCode",
        deserialize_with = "de_opt_code"
    )]
    pub subdistrict_code: Option<u32>,
    #[serde(
        default,
        alias = "subdistrict_name_th",
        alias = "sub_district_name_th",
        alias = "subDistrictNameTh"
    )]
    pub subdistrict_name_th: Option<String>,
    #[serde(
        default,
        alias = "subdistrict_name_en",
        alias = "sub_district_name_en",
        alias = "subDistrictNameEn"
    )]
    pub subdistrict_name_en: Option<String>,

    #[serde(
        default,
        alias = "postal_code",
        alias = "zip_code",
        alias = "zipCode",
        alias = "postal",
        deserialize_with = "de_opt_postal"
    )]
    pub postal_code: Option<String>,
}

pub type RecordsRaw = Vec<RecordRaw>;

/// Feeds are inconsistent about numeric columns: the same column may hold
/// `10110`, `"10110"` or `null` depending on the exporter.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

fn de_opt_code<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let code = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Unsigned(n)) => u32::try_from(n).ok(),
        Some(Scalar::Float(f)) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => {
            Some(f as u32)
        }
        Some(Scalar::Text(s)) => s.trim().parse().ok(),
        Some(Scalar::Signed(_)) | Some(Scalar::Float(_)) | None => None,
    };
    Ok(code)
}

fn de_opt_postal<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let postal = match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Unsigned(n)) => Some(n.to_string()),
        Some(Scalar::Signed(n)) => Some(n.to_string()),
        Some(Scalar::Float(f)) if f.fract() == 0.0 => Some(format!("{f:.0}")),
        Some(Scalar::Text(s)) => {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_owned())
        }
        Some(Scalar::Float(_)) | None => None,
    };
    Ok(postal)
}
