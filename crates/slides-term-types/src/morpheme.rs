use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A tagged token produced by an external morphological tagger.
///
/// `pos`, `category`, and `subcategory` are the attributes every classifier
/// reads. Japanese (IPADic) morphemes fill all three; English (Universal
/// Dependencies) morphemes use `category` for the fine-grained tag and
/// `subcategory` for the entity type. Any further tagger attributes
/// (conjugation, reading, lemma, ...) are kept verbatim in `extra`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    pub surface_form: String,
    pub pos: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub subcategory: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Morpheme {
    pub fn new(surface_form: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            surface_form: surface_form.into(),
            pos: pos.into(),
            category: String::new(),
            subcategory: String::new(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
    }

    /// Attach an additional tagger attribute, e.g. `reading` or `lemma`.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Grammatical signature used to group structurally similar terms.
    pub fn lingu_tag(&self) -> LinguTag {
        LinguTag {
            pos: self.pos.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
        }
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.surface_form)
    }
}

/// Part-of-speech signature of a single morpheme.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinguTag {
    pub pos: String,
    pub category: String,
    pub subcategory: String,
}

impl fmt::Display for LinguTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.pos, self.category, self.subcategory)
    }
}

/// Linguistic sequence: a term with surface forms abstracted away.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LinguSeq(pub Vec<LinguTag>);

impl LinguSeq {
    pub fn from_morphemes(morphemes: &[Morpheme]) -> Self {
        Self(morphemes.iter().map(Morpheme::lingu_tag).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for LinguSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, tag) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}
