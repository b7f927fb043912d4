use crate::boolean::{retrieve_and, retrieve_or};
use crate::corpus::Corpus;
use crate::error::Result;
use crate::index::{build_forward_index, build_inverted_index, ForwardIndex, InvertedIndex};
use crate::scoring::{document_frequency, inverse_document_frequency, term_frequency, tfidf, vectorize};
use crate::similarity::cosine_similarity;
use crate::TermCount;
use std::fmt;

/// A normalized corpus together with the indexes built from it.
///
/// Nothing is mutable after [`RetrievalSession::build`]; a changed corpus
/// means building a new session.
pub struct RetrievalSession {
    corpus: Corpus,
    forward: ForwardIndex,
    inverted: InvertedIndex,
}

impl RetrievalSession {
    /// Normalize `corpus` and build both indexes over it.
    pub fn build(corpus: Corpus) -> Self {
        let corpus = corpus.normalize();
        let forward = build_forward_index(&corpus);
        let inverted = build_inverted_index(&forward);
        tracing::info!(num_docs = corpus.len(), num_terms = inverted.len(), "built retrieval session");
        Self { corpus, forward, inverted }
    }

    /// Like [`RetrievalSession::build`], counting documents on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(corpus: Corpus) -> Self {
        let corpus = corpus.normalize();
        let forward = crate::index::build_forward_index_parallel(&corpus);
        let inverted = build_inverted_index(&forward);
        tracing::info!(num_docs = corpus.len(), num_terms = inverted.len(), "built retrieval session");
        Self { corpus, forward, inverted }
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn forward(&self) -> &ForwardIndex { &self.forward }

    pub fn inverted(&self) -> &InvertedIndex { &self.inverted }

    pub fn total_docs(&self) -> usize { self.corpus.len() }

    /// Every indexed term, sorted.
    pub fn vocabulary(&self) -> Vec<&str> { self.inverted.terms().collect() }

    pub fn retrieve_and(&self, term_a: &str, term_b: &str) -> Result<Vec<&str>> {
        retrieve_and(&self.inverted, term_a, term_b)
    }

    pub fn retrieve_or(&self, term_a: &str, term_b: &str) -> Result<Vec<&str>> {
        retrieve_or(&self.inverted, term_a, term_b)
    }

    pub fn term_frequency(&self, term: &str, doc: &str) -> TermCount {
        term_frequency(&self.inverted, term, doc)
    }

    pub fn document_frequency(&self, term: &str) -> TermCount {
        document_frequency(&self.inverted, term)
    }

    pub fn inverse_document_frequency(&self, term: &str) -> Result<f64> {
        inverse_document_frequency(&self.inverted, term, self.total_docs())
    }

    pub fn tfidf(&self, term: &str, doc: &str) -> Result<f64> {
        tfidf(&self.inverted, term, doc, self.total_docs())
    }

    pub fn document_vector<S: AsRef<str>>(&self, doc: &str, vocabulary: &[S]) -> Result<Vec<f64>> {
        vectorize(&self.inverted, doc, vocabulary, self.total_docs())
    }

    /// Cosine similarity of two documents' TF-IDF vectors over `vocabulary`.
    pub fn document_similarity<S: AsRef<str>>(&self, doc_a: &str, doc_b: &str, vocabulary: &[S]) -> Result<f64> {
        let v1 = self.document_vector(doc_a, vocabulary)?;
        let v2 = self.document_vector(doc_b, vocabulary)?;
        cosine_similarity(&v1, &v2)
    }
}

impl fmt::Debug for RetrievalSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetrievalSession")
            .field("num_docs", &self.corpus.len())
            .field("num_terms", &self.inverted.len())
            .finish()
    }
}
