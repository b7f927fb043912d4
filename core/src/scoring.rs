//! TF, DF, IDF and TF-IDF over an [`InvertedIndex`].
//!
//! TF and DF are lenient: an unknown term or document counts as zero. IDF is
//! not, because `ln(N / 0)` has no value and silently substituting one would
//! hide a vocabulary that does not match the corpus.

use crate::error::{Error, Result};
use crate::index::InvertedIndex;
use crate::TermCount;

/// Occurrences of `term` in `doc`, 0 when either is unknown.
pub fn term_frequency(index: &InvertedIndex, term: &str, doc: &str) -> TermCount {
    index.count(term, doc)
}

fn saturating_count(n: usize) -> TermCount {
    TermCount::try_from(n).unwrap_or(TermCount::MAX)
}

/// Number of distinct documents containing `term`, 0 when it is unknown.
/// Saturates at `TermCount::MAX`.
pub fn document_frequency(index: &InvertedIndex, term: &str) -> TermCount {
    index.postings(term).map_or(0, |postings| saturating_count(postings.len()))
}

/// `ln(total_docs / df)`.
///
/// Fails with [`Error::DivisionByZero`] when the term occurs nowhere, and with
/// [`Error::UndefinedLogarithm`] when `total_docs` is zero.
pub fn inverse_document_frequency(index: &InvertedIndex, term: &str, total_docs: usize) -> Result<f64> {
    let df = document_frequency(index, term);
    if df == 0 {
        return Err(Error::zero_document_frequency(term));
    }
    if total_docs == 0 {
        return Err(Error::UndefinedLogarithm { term: term.to_string() });
    }
    Ok((total_docs as f64 / df as f64).ln())
}

/// `tf * idf`. The IDF failure applies even when `tf` is zero.
pub fn tfidf(index: &InvertedIndex, term: &str, doc: &str, total_docs: usize) -> Result<f64> {
    let tf = term_frequency(index, term, doc);
    let idf = inverse_document_frequency(index, term, total_docs)?;
    Ok(tf as f64 * idf)
}

/// TF-IDF weights of `doc` for each vocabulary term, in vocabulary order.
pub fn vectorize<S: AsRef<str>>(
    index: &InvertedIndex,
    doc: &str,
    vocabulary: &[S],
    total_docs: usize,
) -> Result<Vec<f64>> {
    vocabulary
        .iter()
        .map(|term| tfidf(index, term.as_ref(), doc, total_docs))
        .collect()
}
