// Core algorithm exports
pub mod ranker;
pub mod similarity;
pub mod text;
pub mod tfidf;

pub use ranker::{Ranker, RankError, resolve_top_n, DEFAULT_TOP_N};
pub use similarity::{cosine_similarity, round_score};
pub use text::{join_terms, is_blank, Tokenizer};
pub use tfidf::{TfidfVectorizer, TermVector};
