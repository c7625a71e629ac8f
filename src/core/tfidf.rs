use std::collections::{BTreeMap, HashMap, HashSet};
use crate::core::text::Tokenizer;
use crate::core::ranker::RankError;

/// Sparse TF-IDF row: `(column, weight)` pairs sorted by column, zeros omitted
pub type TermVector = Vec<(usize, f64)>;

/// TF-IDF vectorizer fitted over a whole corpus at once
///
/// Weighting:
/// ```text
/// tf(t, d)  = raw count of t in d
/// idf(t)    = ln((1 + N) / (1 + df(t))) + 1
/// row(d)    = L2-normalize(tf(., d) * idf(.))
/// ```
///
/// Construct one per ranking call. The fitted state is owned by the
/// instance and never shared between calls.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    tokenizer: Tokenizer,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the vocabulary and IDF weights on `documents`, then return one
    /// normalized row per document in input order
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<TermVector>, RankError> {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| self.tokenizer.tokenize(doc.as_ref()))
            .collect();

        self.fit_tokens(&tokenized);

        let rows: Vec<TermVector> = tokenized
            .iter()
            .map(|tokens| self.weigh(tokens))
            .collect::<Result<_, _>>()?;

        tracing::debug!(
            "Vectorized {} documents over {} terms",
            rows.len(),
            self.vocabulary.len()
        );

        Ok(rows)
    }

    /// Term to column index, sorted lexicographically
    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    /// IDF weight per column
    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    fn fit_tokens(&mut self, tokenized: &[Vec<String>]) {
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in tokenized {
            let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms: Vec<&str> = doc_freq.keys().copied().collect();
        terms.sort_unstable();

        let n_docs = tokenized.len() as f64;
        self.idf = terms
            .iter()
            .map(|term| {
                let df = doc_freq[term] as f64;
                ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
            })
            .collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.to_string(), idx))
            .collect();
    }

    fn weigh(&self, tokens: &[String]) -> Result<TermVector, RankError> {
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in tokens {
            // Every token was seen during fitting
            if let Some(&col) = self.vocabulary.get(token) {
                *counts.entry(col).or_insert(0.0) += 1.0;
            }
        }

        let mut row: TermVector = counts
            .into_iter()
            .map(|(col, tf)| (col, tf * self.idf[col]))
            .collect();

        let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if !norm.is_finite() {
            return Err(RankError::ScoringFailure(format!(
                "non-finite vector norm ({norm})"
            )));
        }
        if norm > 0.0 {
            row.iter_mut().for_each(|(_, v)| *v /= norm);
        }

        Ok(row)
    }
}
