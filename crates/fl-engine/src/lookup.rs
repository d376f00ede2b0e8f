//! Remote lookups the engine can use but never depends on.
//!
//! Both lookups are cosmetic or optional: a failure means "no data" and the
//! game carries on.

use thiserror::Error;

use crate::sync::StatsSnapshot;

/// Why a remote lookup produced nothing.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The remote could not be reached.
    #[error("lookup unavailable: {0}")]
    Unavailable(String),

    /// The remote has no record for the request.
    #[error("not found: {0}")]
    NotFound(String),

    /// The remote answered with something unreadable.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Thumbnail lookup by wiki page title.
pub trait ImageLookup {
    /// Thumbnail URL for `title`, or `None` if the page has none.
    fn thumbnail(&self, title: &str) -> Result<Option<String>, LookupError>;
}

/// Player statistics lookup.
pub trait StatsSource {
    /// Latest skill levels and collection-log score for `player`.
    fn fetch(&self, player: &str) -> Result<StatsSnapshot, LookupError>;
}

/// An image lookup that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLookup;

impl ImageLookup for NoLookup {
    fn thumbnail(&self, _title: &str) -> Result<Option<String>, LookupError> {
        Ok(None)
    }
}

impl<F> ImageLookup for F
where
    F: Fn(&str) -> Result<Option<String>, LookupError>,
{
    fn thumbnail(&self, title: &str) -> Result<Option<String>, LookupError> {
        self(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_lookup_finds_nothing() {
        assert_eq!(NoLookup.thumbnail("Zulrah").unwrap(), None);
    }

    #[test]
    fn closures_are_lookups() {
        let lookup = |title: &str| Ok::<_, LookupError>(Some(format!("https://img/{title}.png")));
        assert_eq!(
            lookup.thumbnail("Barrows").unwrap().as_deref(),
            Some("https://img/Barrows.png")
        );
    }
}
