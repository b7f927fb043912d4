use crate::corpus::Corpus;
use crate::tokenizer::tokenize;
use crate::{DocKey, Term, TermCount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// term -> occurrences within one document
pub type TermCounts = BTreeMap<Term, TermCount>;
/// document -> occurrences of one term
pub type Postings = BTreeMap<DocKey, TermCount>;

/// Per-document term counts. One entry per corpus document, counts always > 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForwardIndex {
    docs: BTreeMap<DocKey, TermCounts>,
}

impl ForwardIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, doc: &str) -> Option<&TermCounts> { self.docs.get(doc) }

    /// Occurrences of `term` in `doc`, 0 when either is absent.
    pub fn count(&self, doc: &str, term: &str) -> TermCount {
        self.docs.get(doc).and_then(|counts| counts.get(term)).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DocKey, &TermCounts)> { self.docs.iter() }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

/// Per-term postings, the reversed view of a [`ForwardIndex`].
///
/// Every stored term has at least one posting, so its document frequency is
/// the length of its postings map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvertedIndex {
    terms: BTreeMap<Term, Postings>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn postings(&self, term: &str) -> Option<&Postings> { self.terms.get(term) }

    /// Occurrences of `term` in `doc`, 0 when either is absent.
    pub fn count(&self, term: &str, doc: &str) -> TermCount {
        self.terms.get(term).and_then(|postings| postings.get(doc)).copied().unwrap_or(0)
    }

    pub fn contains_term(&self, term: &str) -> bool { self.terms.contains_key(term) }

    /// Indexed terms in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> { self.terms.keys().map(String::as_str) }

    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Postings)> { self.terms.iter() }

    /// Number of distinct terms.
    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }
}

fn count_terms(text: &str) -> TermCounts {
    let mut tf_counts = TermCounts::new();
    for term in tokenize(text) {
        *tf_counts.entry(term).or_insert(0) += 1;
    }
    tf_counts
}

/// Count term occurrences per document. Document text must already be
/// normalized; tokens are matched exactly, the empty token included.
pub fn build_forward_index(corpus: &Corpus) -> ForwardIndex {
    let docs: BTreeMap<DocKey, TermCounts> = corpus
        .iter()
        .map(|(key, doc)| (key.to_string(), count_terms(&doc.text)))
        .collect();
    tracing::debug!(num_docs = docs.len(), "built forward index");
    ForwardIndex { docs }
}

/// Same result as [`build_forward_index`], with documents counted on the rayon pool.
#[cfg(feature = "parallel")]
pub fn build_forward_index_parallel(corpus: &Corpus) -> ForwardIndex {
    use rayon::prelude::*;

    let documents: Vec<_> = corpus.iter().collect();
    let docs: BTreeMap<DocKey, TermCounts> = documents
        .par_iter()
        .map(|(key, doc)| (key.to_string(), count_terms(&doc.text)))
        .collect();
    tracing::debug!(num_docs = docs.len(), "built forward index in parallel");
    ForwardIndex { docs }
}

/// Reverse a forward index into term-keyed postings.
pub fn build_inverted_index(forward: &ForwardIndex) -> InvertedIndex {
    let mut terms: BTreeMap<Term, Postings> = BTreeMap::new();
    for (doc_key, tf_counts) in forward.iter() {
        for (term, &count) in tf_counts {
            terms.entry(term.clone()).or_default().insert(doc_key.clone(), count);
        }
    }
    tracing::debug!(num_terms = terms.len(), "built inverted index");
    InvertedIndex { terms }
}
