use serde::{Deserialize, Serialize};

/// Camera metadata nested inside a photo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Camera {
    pub(crate) name: String,
}

/// One photo record as returned by the listing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Photo {
    pub(crate) img_src: String,
    pub(crate) earth_date: String,
    pub(crate) sol: i64,
    pub(crate) camera: Camera,
}

impl Photo {
    pub(crate) fn caption(&self) -> String {
        format!(
            "Taken on {} (sol {}) by {}",
            self.earth_date, self.sol, self.camera.name
        )
    }

    pub(crate) fn alt_text(&self) -> String {
        format!("Mars rover photo from the {} camera", self.camera.name)
    }
}

/// Response envelope. Elements stay untyped so one malformed record
/// cannot poison the whole batch.
#[derive(Debug, Deserialize)]
pub(crate) struct PhotosPayload {
    pub(crate) photos: Vec<serde_json::Value>,
}
