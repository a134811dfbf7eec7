use serde::{Deserialize, Serialize};

// Registro persistido: identificador asignado por el store más los campos del tipo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub data: T,
}

impl<T> VehicleRecord<T> {
    pub fn new(id: impl Into<String>, data: T) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}
