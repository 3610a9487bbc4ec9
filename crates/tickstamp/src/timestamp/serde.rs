use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Timestamp;

// Serialized as the native integer so stored values stay sortable and
// interchangeable with raw `u64` columns.
impl Serialize for Timestamp {
    fn serialize<S>(&self, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw().serialize(s)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(d).map(Self::from_raw)
    }
}
