//! In-memory text retrieval core.
//!
//! Documents are normalized and tokenized, counted into a forward index, and
//! reversed into an inverted index. On top of the inverted index sit two-term
//! boolean retrieval, TF-IDF scoring, and cosine similarity between TF-IDF
//! vectors.
//!
//! ```
//! use retrieval_core::{Corpus, RetrievalSession};
//!
//! let corpus: Corpus = [("d1", "The cat sat."), ("d2", "The dog sat.")].into_iter().collect();
//! let session = RetrievalSession::build(corpus);
//! assert_eq!(session.retrieve_and("the", "sat").unwrap(), vec!["d1", "d2"]);
//! assert_eq!(session.document_frequency("cat"), 1);
//! ```

pub mod boolean;
pub mod corpus;
pub mod error;
pub mod index;
pub mod scoring;
pub mod session;
pub mod similarity;
pub mod tokenizer;

pub type DocKey = String;
pub type Term = String;
pub type TermCount = u32;

pub use boolean::{retrieve_and, retrieve_or};
pub use corpus::{Corpus, Document};
pub use error::{Error, Result, ZeroDivisor};
#[cfg(feature = "parallel")]
pub use index::build_forward_index_parallel;
pub use index::{build_forward_index, build_inverted_index, ForwardIndex, InvertedIndex, Postings, TermCounts};
pub use scoring::{document_frequency, inverse_document_frequency, term_frequency, tfidf, vectorize};
pub use session::RetrievalSession;
pub use similarity::{cosine_similarity, dot_product, vector_length};
pub use tokenizer::{normalize, tokenize};
