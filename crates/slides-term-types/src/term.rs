use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Range;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::morpheme::{LinguSeq, Morpheme};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    #[error("a term needs at least one morpheme")]
    Empty,
}

/// A candidate technical term: a non-empty morpheme sequence plus the
/// fontsize it was observed at and whether it was derived for recall.
///
/// Equality and hashing follow the canonical string, so fontsize and the
/// augmented flag never split one term into two.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTerm")]
pub struct Term {
    morphemes: Vec<Morpheme>,
    pub fontsize: f64,
    pub augmented: bool,
}

#[derive(Deserialize)]
struct RawTerm {
    morphemes: Vec<Morpheme>,
    #[serde(default)]
    fontsize: f64,
    #[serde(default)]
    augmented: bool,
}

impl TryFrom<RawTerm> for Term {
    type Error = TermError;

    fn try_from(raw: RawTerm) -> Result<Self, Self::Error> {
        Term::new(raw.morphemes, raw.fontsize, raw.augmented)
    }
}

impl Term {
    pub fn new(morphemes: Vec<Morpheme>, fontsize: f64, augmented: bool) -> Result<Self, TermError> {
        if morphemes.is_empty() {
            return Err(TermError::Empty);
        }
        Ok(Self {
            morphemes,
            fontsize,
            augmented,
        })
    }

    pub fn morphemes(&self) -> &[Morpheme] {
        &self.morphemes
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Canonical key used by every frequency table.
    pub fn key(&self) -> String {
        self.view().key()
    }

    pub fn linguistic_sequence(&self) -> LinguSeq {
        LinguSeq::from_morphemes(&self.morphemes)
    }

    pub fn view(&self) -> TermRef<'_> {
        TermRef {
            morphemes: &self.morphemes,
            fontsize: self.fontsize,
            augmented: self.augmented,
        }
    }

    /// Borrow the morphemes in `range`; `None` for an empty or out-of-bounds range.
    pub fn sub_term(&self, range: Range<usize>) -> Option<TermRef<'_>> {
        self.view().sub_term(range)
    }

    /// Build a new term from `range`, inheriting fontsize and the augmented flag.
    pub fn slice(&self, range: Range<usize>) -> Option<Term> {
        self.sub_term(range).map(|sub| sub.to_term())
    }

    /// Copy of this term carrying a different augmented flag.
    pub fn with_augmented(&self, augmented: bool) -> Term {
        Term {
            morphemes: self.morphemes.clone(),
            fontsize: self.fontsize,
            augmented,
        }
    }

    pub fn into_morphemes(self) -> Vec<Morpheme> {
        self.morphemes
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Term {}

impl Hash for Term {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Borrowed, non-empty view of a contiguous run of a term's morphemes.
#[derive(Clone, Copy, Debug)]
pub struct TermRef<'a> {
    pub morphemes: &'a [Morpheme],
    pub fontsize: f64,
    pub augmented: bool,
}

impl<'a> TermRef<'a> {
    pub fn key(&self) -> String {
        let cap = self.morphemes.iter().map(|m| m.surface_form.len()).sum();
        let mut out = String::with_capacity(cap);
        for morpheme in self.morphemes {
            out.push_str(&morpheme.surface_form);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.morphemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.morphemes.is_empty()
    }

    pub fn linguistic_sequence(&self) -> LinguSeq {
        LinguSeq::from_morphemes(self.morphemes)
    }

    pub fn sub_term(&self, range: Range<usize>) -> Option<TermRef<'a>> {
        if range.start >= range.end || range.end > self.morphemes.len() {
            return None;
        }
        Some(TermRef {
            morphemes: &self.morphemes[range],
            fontsize: self.fontsize,
            augmented: self.augmented,
        })
    }

    pub fn to_term(&self) -> Term {
        Term {
            morphemes: self.morphemes.to_vec(),
            fontsize: self.fontsize,
            augmented: self.augmented,
        }
    }
}

impl fmt::Display for TermRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for morpheme in self.morphemes {
            f.write_str(&morpheme.surface_form)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(surfaces: &[&str]) -> Term {
        Term::new(
            surfaces.iter().map(|s| Morpheme::new(*s, "NOUN")).collect(),
            12.0,
            false,
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_morpheme_sequence() {
        assert_eq!(Term::new(Vec::new(), 10.0, false).unwrap_err(), TermError::Empty);
        let raw = r#"{"morphemes":[],"fontsize":10.0,"augmented":false}"#;
        assert!(serde_json::from_str::<Term>(raw).is_err());
    }

    #[test]
    fn equality_follows_canonical_string() {
        let a = term(&["data", "base"]);
        let b = Term::new(vec![Morpheme::new("database", "NOUN")], 30.0, true).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.key(), "database");
    }

    #[test]
    fn sub_terms_borrow_and_inherit_metadata() {
        let t = term(&["A", "B", "C"]);
        let sub = t.sub_term(1..3).unwrap();
        assert_eq!(sub.key(), "BC");
        assert_eq!(sub.fontsize, 12.0);
        assert!(t.sub_term(2..2).is_none());
        assert!(t.sub_term(1..4).is_none());
        assert_eq!(t.slice(0..1).unwrap().to_string(), "A");
    }

    #[test]
    fn deserializes_with_defaults() {
        let raw = r#"{"morphemes":[{"surface_form":"graph","pos":"NOUN"}]}"#;
        let t: Term = serde_json::from_str(raw).unwrap();
        assert_eq!(t.fontsize, 0.0);
        assert!(!t.augmented);
        assert_eq!(t.len(), 1);
    }
}
