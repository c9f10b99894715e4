use jiff::civil::Date;
use movies_core::MovieInfo;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

pub const NAME_BLANK: &str = "Movie name must not be empty";
pub const YEAR_MISSING: &str = "Movie year can't be empty";
pub const YEAR_NOT_POSITIVE: &str = "Movie year must be positive";
pub const CAST_EMPTY: &str = "Movie cast can't be empty";
pub const CAST_NAME_BLANK: &str = "Cast name can't be blank";

/// An unvalidated movie-info payload as sent by clients.
///
/// Every field is optional so that a request with several problems can be
/// reported in one response instead of failing on the first missing field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInfoDraft {
    /// Ignored; ids are always assigned by the store.
    #[serde(default, alias = "movieInfoId")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub cast: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub release_date: Option<Date>,
}

/// One or more field constraint violations.
///
/// Messages are kept sorted so the rendered form is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    messages: Vec<String>,
}

impl ValidationError {
    pub fn new(messages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        messages.sort();
        Self { messages }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.messages.join(", "))
    }
}

impl std::error::Error for ValidationError {}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl MovieInfoDraft {
    /// Checks every field constraint and builds an unpersisted [`MovieInfo`].
    ///
    /// All violations are collected; the returned record never carries an id.
    pub fn validate(self) -> Result<MovieInfo, ValidationError> {
        let mut violations = Vec::new();

        let name = self.name.filter(|name| !is_blank(name));
        if name.is_none() {
            violations.push(NAME_BLANK);
        }

        match self.year {
            None => violations.push(YEAR_MISSING),
            Some(year) if year <= 0 => violations.push(YEAR_NOT_POSITIVE),
            Some(_) => {}
        }

        let cast = self.cast.unwrap_or_default();
        if cast.is_empty() {
            violations.push(CAST_EMPTY);
        }
        if cast
            .iter()
            .any(|member| member.as_deref().map_or(true, is_blank))
        {
            violations.push(CAST_NAME_BLANK);
        }

        match (name, self.year) {
            (Some(name), Some(year)) if violations.is_empty() => Ok(MovieInfo {
                id: None,
                name,
                year,
                cast: cast.into_iter().flatten().collect(),
                release_date: self.release_date,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}
