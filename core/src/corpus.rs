use crate::tokenizer::normalize;
use crate::DocKey;
use std::collections::BTreeMap;

/// A document's text. Its key lives only in the owning [`Corpus`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw text until [`Corpus::normalize`] runs, normalized text afterwards.
    pub text: String,
}

/// A keyed document collection. Iterates in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: BTreeMap<DocKey, Document>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace a document.
    pub fn insert(&mut self, key: impl Into<DocKey>, text: impl Into<String>) {
        self.documents.insert(key.into(), Document { text: text.into() });
    }

    /// Replace every document's text with its normalized form.
    pub fn normalize(mut self) -> Self {
        for doc in self.documents.values_mut() {
            doc.text = normalize(&doc.text);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Document> { self.documents.get(key) }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.documents.iter().map(|(key, doc)| (key.as_str(), doc))
    }
}

impl<K, V> FromIterator<(K, V)> for Corpus
where
    K: Into<DocKey>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        for (key, text) in iter {
            corpus.insert(key, text);
        }
        corpus
    }
}
