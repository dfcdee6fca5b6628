use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub name: String,
    pub status: bool,
    #[serde(rename = "usage")]
    pub usage_kwh: f32,
}

impl DeviceRecord {
    pub fn new(name: impl Into<String>, status: bool, usage_kwh: f32) -> Self {
        Self {
            name: name.into(),
            status,
            usage_kwh,
        }
    }
}
