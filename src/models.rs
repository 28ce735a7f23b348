use {
    chrono::Utc,
    mongodb::bson::DateTime as BsonDateTime,
    serde::{Deserialize, Serialize},
};

pub const SAMPLE_DEVICE: &str = "sensor-001";
pub const SAMPLE_TEMP: i32 = 26;

/// A single sensor measurement as stored in the `readings` collection.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reading {
    pub device: String,
    pub temp: i32,
    pub ts: BsonDateTime,
}

impl Reading {
    /// Creates a reading stamped with the current time.
    pub fn new(device: impl Into<String>, temp: i32) -> Self {
        Self {
            device: device.into(),
            temp,
            ts: BsonDateTime::from_millis(Utc::now().timestamp_millis()),
        }
    }
}
