use crate::errors::QuizError;
use crate::map::models::GeoPoint;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeritageSite {
    pub name: String,
    pub location: GeoPoint,
    /// Image file name, relative to the front end's image directory.
    pub image_ref: String,
}

/// One entry of a catalog file, as it is stored on disk.
#[derive(Debug, Deserialize)]
pub struct SiteRecord {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub url: String,
}

impl TryFrom<SiteRecord> for HeritageSite {
    type Error = QuizError;

    fn try_from(record: SiteRecord) -> Result<Self, Self::Error> {
        Ok(HeritageSite {
            location: GeoPoint::new(record.latitude, record.longitude)?,
            name: record.name,
            image_ref: record.url,
        })
    }
}
