//! Status endpoints exposed by the upstream API.

use strum_macros::{Display, EnumIter};

use crate::config::{FIELD_OFFICES_PATH, INVASIONS_PATH};

/// One of the two polled status endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Endpoint {
    /// `GET /api/invasions`
    #[strum(serialize = "invasions")]
    Invasions,
    /// `GET /api/fieldoffices`
    #[strum(serialize = "field offices")]
    FieldOffices,
}

impl Endpoint {
    /// Absolute path of the endpoint on the API host.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Invasions => INVASIONS_PATH,
            Endpoint::FieldOffices => FIELD_OFFICES_PATH,
        }
    }
}
