//! Card faces for the memory board.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, Result};

/// Index of a symbol within a [`SymbolSet`].
///
/// The board stores these, not glyphs; two cards match when their ids are
/// equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u16);

impl SymbolId {
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Distinct, renderable symbols, addressed by [`SymbolId`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SymbolSet {
    glyphs: Vec<String>,
}

impl SymbolSet {
    /// Build a set, rejecting duplicate glyphs.
    pub fn new<S: Into<String>>(glyphs: impl IntoIterator<Item = S>) -> Result<Self> {
        let glyphs: Vec<String> = glyphs.into_iter().map(Into::into).collect();
        for (i, glyph) in glyphs.iter().enumerate() {
            if glyphs[..i].contains(glyph) {
                return Err(ConfigError::DuplicateSymbol(glyph.clone()));
            }
        }
        Ok(Self { glyphs })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The first `count` symbol ids, or an error if the set is too small.
    pub fn take(&self, count: usize) -> Result<Vec<SymbolId>> {
        if count == 0 {
            return Err(ConfigError::EmptyPairSet);
        }
        if count > self.glyphs.len() {
            return Err(ConfigError::NotEnoughSymbols {
                needed: count,
                available: self.glyphs.len(),
            });
        }
        Ok((0..count as u16).map(SymbolId).collect())
    }

    #[must_use]
    pub fn glyph(&self, id: SymbolId) -> Option<&str> {
        self.glyphs.get(id.index()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take() {
        let set = SymbolSet::new(["a", "b", "c"]).unwrap();
        assert_eq!(set.take(2).unwrap(), vec![SymbolId(0), SymbolId(1)]);
        assert!(matches!(set.take(0), Err(ConfigError::EmptyPairSet)));
        assert!(matches!(
            set.take(4),
            Err(ConfigError::NotEnoughSymbols { needed: 4, available: 3 })
        ));
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = SymbolSet::new(["x", "y", "x"]).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSymbol(ref g) if g == "x"));
    }

    #[test]
    fn test_glyph_lookup() {
        let set = SymbolSet::new(["🎯", "🚀"]).unwrap();
        assert_eq!(set.glyph(SymbolId(1)), Some("🚀"));
        assert_eq!(set.glyph(SymbolId(2)), None);
        assert_eq!(format!("{}", SymbolId(1)), "Symbol(1)");
    }
}
