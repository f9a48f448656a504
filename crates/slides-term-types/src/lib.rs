//! Shared types for slide-deck technical term extraction.
//!
//! The goal is to give every layer (candidate refinement, occurrence analysis,
//! ranking) one vocabulary: a [`Morpheme`] is a tagged token, a [`Term`] is a
//! non-empty morpheme sequence, and candidate terms are grouped into pages,
//! documents, and domains. Rankings and accepted-term dictionaries close the
//! pipeline.
//!
//! The canonical identity of a term is the concatenation of its morpheme
//! surface forms. Every frequency table in the workspace is keyed by that
//! string, and two terms with the same string are the same term regardless of
//! fontsize or the augmented flag.
//!
//! Use [`TermRef`] to look at a contiguous slice of a term without copying
//! morphemes, and [`extended_log10`] wherever a score may hit a non-positive
//! log argument.
//!
//! ```rust
//! use slides_term_types::{Morpheme, Term, extended_log10, SCORE_FLOOR};
//!
//! let term = Term::new(
//!     vec![Morpheme::new("machine", "NOUN"), Morpheme::new("learning", "NOUN")],
//!     24.0,
//!     false,
//! )
//! .unwrap();
//! assert_eq!(term.to_string(), "machinelearning");
//! assert_eq!(term.sub_term(1..2).unwrap().key(), "learning");
//! assert_eq!(extended_log10(0.0), SCORE_FLOOR);
//! ```

mod container;
mod morpheme;
mod ranking;
mod term;

pub use container::{DocumentCandidates, DomainCandidateDict, DomainCandidates, PageCandidates};
pub use morpheme::{LinguSeq, LinguTag, Morpheme};
pub use ranking::{
    DomainTermRanking, DomainTermScoreDict, SCORE_FLOOR, ScoredTerm, extended_log10,
};
pub use term::{Term, TermError, TermRef};
