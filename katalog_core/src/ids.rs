use std::{fmt::Display, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};


/// Identifier of a category, assigned by the database on insertion.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub(crate) i64);

impl CategoryId {
    #[inline]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    #[inline]
    pub fn into_inner(self) -> i64 {
        self.0
    }
}

impl FromStr for CategoryId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner_id = <i64 as FromStr>::from_str(s)?;

        Ok(Self(inner_id))
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}



#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let id = CategoryId::from_str("42").unwrap();

        assert_eq!(id.into_inner(), 42);
        assert_eq!(id.to_string(), "42");

        assert!(CategoryId::from_str("forty-two").is_err());
        assert!(CategoryId::from_str("").is_err());
    }

    #[test]
    fn serializes_transparently() {
        let serialized = serde_json::to_string(&CategoryId::new(7)).unwrap();
        assert_eq!(serialized, "7");
    }
}
