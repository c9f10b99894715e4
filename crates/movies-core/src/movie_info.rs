use crate::record::Record;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A movie in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfo {
    /// Store-assigned id, `None` until persisted.
    #[serde(default, alias = "movieInfoId", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub year: i32,
    pub cast: Vec<String>,
    #[serde(default)]
    pub release_date: Option<Date>,
}

impl Record for MovieInfo {
    type Index = i32;

    const COLLECTION: &'static str = "movieInfo";
    const INDEX_FIELD: &'static str = "year";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn index(&self) -> &i32 {
        &self.year
    }
}
