//! Two-term boolean set retrieval over an [`InvertedIndex`].
//!
//! Lookups here are strict: a term without postings is an error, unlike the
//! scoring functions which treat it as zero.

use crate::error::{Error, Result};
use crate::index::{InvertedIndex, Postings};

fn required_postings<'a>(index: &'a InvertedIndex, term: &str) -> Result<&'a Postings> {
    index.postings(term).ok_or_else(|| Error::term_not_found(term))
}

/// Documents containing both terms, in `term_a`'s postings order.
pub fn retrieve_and<'a>(index: &'a InvertedIndex, term_a: &str, term_b: &str) -> Result<Vec<&'a str>> {
    let postings_a = required_postings(index, term_a)?;
    let postings_b = required_postings(index, term_b)?;
    let docs: Vec<&str> = postings_a
        .keys()
        .filter(|doc| postings_b.contains_key(*doc))
        .map(String::as_str)
        .collect();
    tracing::trace!(term_a, term_b, hits = docs.len(), "and query");
    Ok(docs)
}

/// Documents containing either term: `term_a`'s documents first, then the
/// documents of `term_b` not already listed.
pub fn retrieve_or<'a>(index: &'a InvertedIndex, term_a: &str, term_b: &str) -> Result<Vec<&'a str>> {
    let postings_a = required_postings(index, term_a)?;
    let postings_b = required_postings(index, term_b)?;
    let mut docs: Vec<&str> = postings_a.keys().map(String::as_str).collect();
    for doc in postings_b.keys() {
        if !docs.contains(&doc.as_str()) {
            docs.push(doc);
        }
    }
    tracing::trace!(term_a, term_b, hits = docs.len(), "or query");
    Ok(docs)
}
