use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::term::Term;

/// Candidate terms extracted from one page, in reading order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageCandidates {
    pub page_num: u32,
    pub candidates: Vec<Term>,
}

/// Candidate terms of one source document.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DocumentCandidates {
    pub path: String,
    pub pages: Vec<PageCandidates>,
}

impl DocumentCandidates {
    pub fn candidates(&self) -> impl Iterator<Item = &Term> + '_ {
        self.pages.iter().flat_map(|page| page.candidates.iter())
    }
}

/// A named corpus of documents sharing a subject area.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DomainCandidates {
    pub domain: String,
    pub documents: Vec<DocumentCandidates>,
}

impl DomainCandidates {
    pub fn num_documents(&self) -> usize {
        self.documents.len()
    }

    /// Every candidate in document, page, then reading order.
    pub fn candidates(&self) -> impl Iterator<Item = &Term> + '_ {
        self.documents.iter().flat_map(DocumentCandidates::candidates)
    }

    /// Distinct candidate strings of this domain, first occurrence wins.
    ///
    /// With `ignore_augmented` set, augmented variants are left out so they
    /// never qualify as counting targets.
    pub fn candidate_dict(&self, ignore_augmented: bool) -> DomainCandidateDict<'_> {
        let mut dict = DomainCandidateDict {
            domain: &self.domain,
            terms: Vec::new(),
            index: HashMap::new(),
        };
        for candidate in self.candidates() {
            if ignore_augmented && candidate.augmented {
                continue;
            }
            let key = candidate.key();
            if !dict.index.contains_key(&key) {
                dict.index.insert(key, dict.terms.len());
                dict.terms.push(candidate);
            }
        }
        dict
    }
}

/// Read-only membership view: "is this string a real candidate term here".
#[derive(Clone, Debug)]
pub struct DomainCandidateDict<'a> {
    domain: &'a str,
    terms: Vec<&'a Term>,
    index: HashMap<String, usize>,
}

impl<'a> DomainCandidateDict<'a> {
    pub fn domain(&self) -> &'a str {
        self.domain
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Representative term for `key` (its first occurrence in the domain).
    pub fn get(&self, key: &str) -> Option<&'a Term> {
        self.index.get(key).map(|&idx| self.terms[idx])
    }

    /// Representatives in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Term> + '_ {
        self.terms.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morpheme::Morpheme;

    fn term(surfaces: &[&str], fontsize: f64, augmented: bool) -> Term {
        Term::new(
            surfaces.iter().map(|s| Morpheme::new(*s, "NOUN")).collect(),
            fontsize,
            augmented,
        )
        .unwrap()
    }

    fn domain() -> DomainCandidates {
        DomainCandidates {
            domain: "ml".into(),
            documents: vec![
                DocumentCandidates {
                    path: "a.pdf".into(),
                    pages: vec![PageCandidates {
                        page_num: 1,
                        candidates: vec![
                            term(&["neural", "network"], 20.0, false),
                            term(&["network"], 12.0, true),
                        ],
                    }],
                },
                DocumentCandidates {
                    path: "b.pdf".into(),
                    pages: vec![PageCandidates {
                        page_num: 3,
                        candidates: vec![
                            term(&["neural", "network"], 30.0, false),
                            term(&["graph"], 10.0, false),
                        ],
                    }],
                },
            ],
        }
    }

    #[test]
    fn dict_keeps_first_occurrence_and_order() {
        let domain = domain();
        let dict = domain.candidate_dict(true);
        assert_eq!(dict.domain(), "ml");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.get("neuralnetwork").unwrap().fontsize, 20.0);
        let keys: Vec<String> = dict.iter().map(Term::key).collect();
        assert_eq!(keys, vec!["neuralnetwork", "graph"]);
    }

    #[test]
    fn dict_honors_augmented_flag() {
        let domain = domain();
        assert!(!domain.candidate_dict(true).contains("network"));
        assert!(domain.candidate_dict(false).contains("network"));
    }

    #[test]
    fn parses_boundary_shape() {
        let raw = r#"{
            "domain": "ml",
            "documents": [{
                "path": "a.pdf",
                "pages": [{
                    "page_num": 1,
                    "candidates": [{
                        "morphemes": [{"surface_form": "graph", "pos": "NOUN"}],
                        "fontsize": 18.0,
                        "augmented": false
                    }]
                }]
            }]
        }"#;
        let domain: DomainCandidates = serde_json::from_str(raw).unwrap();
        assert_eq!(domain.num_documents(), 1);
        assert_eq!(domain.candidates().count(), 1);
    }
}
