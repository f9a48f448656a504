//! Per-language lexical predicates over a single morpheme.
//!
//! Japanese morphemes carry IPADic attributes (`pos`/`category`/`subcategory`
//! such as `名詞`/`固有名詞`/`人名`); English morphemes carry Universal
//! Dependencies tags in `pos`, the fine-grained tag in `category`, and the
//! entity type in `subcategory`. Every predicate is total and side-effect free.

use slides_term_types::Morpheme;

/// Capabilities shared by every language classifier.
pub trait MorphemeClassifier {
    /// A morpheme that joins a modifier to its head (`の`, `of`).
    fn is_modifier_joint(&self, morpheme: &Morpheme) -> bool;

    fn is_connector_symbol(&self, morpheme: &Morpheme) -> bool;

    fn is_numeral(&self, morpheme: &Morpheme) -> bool;

    /// Names of people or places.
    fn is_region_or_person(&self, morpheme: &Morpheme) -> bool;

    /// Filler that carries no meaning in a term (punctuation, brackets, ...).
    fn is_meaningless(&self, morpheme: &Morpheme) -> bool;
}

const JA_CONNECTOR_SYMBOLS: &[&str] = &["・", "＝", "-", "‐", "－", "／", "/"];
const JA_MEANINGLESS_SYMBOLS: &[&str] = &["句点", "読点", "括弧開", "括弧閉", "空白"];

#[derive(Clone, Copy, Debug, Default)]
pub struct JapaneseClassifier;

impl JapaneseClassifier {
    pub fn is_modifying_particle(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "助詞" && morpheme.category == "連体化"
    }

    pub fn is_particle(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "助詞"
    }

    pub fn is_auxiliary_verb(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "助動詞"
    }

    pub fn is_prefix(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "接頭詞"
    }

    pub fn is_suffix(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "名詞" && morpheme.category == "接尾"
    }
}

impl MorphemeClassifier for JapaneseClassifier {
    fn is_modifier_joint(&self, morpheme: &Morpheme) -> bool {
        self.is_modifying_particle(morpheme)
    }

    fn is_connector_symbol(&self, morpheme: &Morpheme) -> bool {
        JA_CONNECTOR_SYMBOLS.contains(&morpheme.surface_form.as_str())
    }

    fn is_numeral(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "名詞" && morpheme.category == "数"
    }

    fn is_region_or_person(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "名詞"
            && morpheme.category == "固有名詞"
            && matches!(morpheme.subcategory.as_str(), "人名" | "地域")
    }

    fn is_meaningless(&self, morpheme: &Morpheme) -> bool {
        (morpheme.pos == "記号" && JA_MEANINGLESS_SYMBOLS.contains(&morpheme.category.as_str()))
            || (morpheme.pos == "名詞" && morpheme.category == "非自立")
    }
}

const EN_CONNECTOR_SYMBOLS: &[&str] = &["-", "/", "&"];

#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishClassifier;

impl EnglishClassifier {
    pub fn is_adposition(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "ADP"
    }

    pub fn is_coordinating_conjunction(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "CCONJ"
    }
}

impl MorphemeClassifier for EnglishClassifier {
    fn is_modifier_joint(&self, morpheme: &Morpheme) -> bool {
        self.is_adposition(morpheme)
    }

    fn is_connector_symbol(&self, morpheme: &Morpheme) -> bool {
        EN_CONNECTOR_SYMBOLS.contains(&morpheme.surface_form.as_str())
    }

    fn is_numeral(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "NUM"
    }

    fn is_region_or_person(&self, morpheme: &Morpheme) -> bool {
        morpheme.pos == "PROPN"
            && matches!(morpheme.subcategory.as_str(), "PERSON" | "GPE" | "LOC" | "NORP")
    }

    fn is_meaningless(&self, morpheme: &Morpheme) -> bool {
        match morpheme.pos.as_str() {
            "PUNCT" | "SPACE" => true,
            "SYM" => !self.is_connector_symbol(morpheme),
            _ => false,
        }
    }
}
