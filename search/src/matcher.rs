//! Weighted fuzzy matching over searchable records.

use crate::config::SearchConfig;
use crate::results::MatchResult;
use komi_core::types::{CaseMatching, FieldWeights, SearchableRecord};
use nucleo::pattern::{AtomKind, CaseMatching as NucleoCaseMatching, Normalization, Pattern};
use nucleo::{Config as NucleoConfig, Matcher, Utf32Str};
use std::sync::Arc;

/// Scores records against a query, one field at a time.
///
/// A field's similarity is its nucleo score divided by the score the query
/// earns against itself, so a verbatim occurrence rates 1.0 and typos or
/// gaps rate lower. Fields whose dissimilarity exceeds the threshold are
/// ignored; a record's score is its best `similarity * weight`.
pub struct FuzzyMatcher {
    matcher: Matcher,
    buf: Vec<char>,
    case_matching: NucleoCaseMatching,
    normalization: Normalization,
    weights: FieldWeights,
    threshold: f32,
}

impl FuzzyMatcher {
    pub fn new(config: &SearchConfig) -> Self {
        let case_matching = match config.case_matching {
            CaseMatching::Sensitive => NucleoCaseMatching::Respect,
            CaseMatching::Insensitive => NucleoCaseMatching::Ignore,
            CaseMatching::Smart => NucleoCaseMatching::Smart,
        };

        let normalization = if config.unicode_normalization {
            Normalization::Smart
        } else {
            Normalization::Never
        };

        Self {
            matcher: Matcher::new(NucleoConfig::DEFAULT),
            buf: Vec::new(),
            case_matching,
            normalization,
            weights: config.weights.clone(),
            threshold: config.threshold.clamp(0.0, 1.0),
        }
    }

    /// Returns matches ordered by descending score. Equal scores keep the
    /// order of `records`. An empty query matches nothing.
    pub fn match_records(
        &mut self,
        query: &str,
        records: &[Arc<SearchableRecord>],
    ) -> Vec<MatchResult> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(query, self.case_matching, self.normalization, AtomKind::Fuzzy);

        let perfect = pattern
            .score(Utf32Str::new(query, &mut self.buf), &mut self.matcher)
            .unwrap_or(0);
        if perfect == 0 {
            return Vec::new();
        }

        let mut results: Vec<MatchResult> = Vec::new();
        for record in records {
            let tags = record.tags.join(" ");
            let fields = [
                (record.title.as_str(), self.weights.title),
                (record.author.as_deref().unwrap_or_default(), self.weights.author),
                (tags.as_str(), self.weights.tags),
                (record.description.as_deref().unwrap_or_default(), self.weights.description),
            ];

            let mut best: Option<f32> = None;
            for (text, weight) in fields {
                if text.is_empty() || weight <= 0.0 {
                    continue;
                }
                let haystack = Utf32Str::new(text, &mut self.buf);
                let Some(score) = pattern.score(haystack, &mut self.matcher) else {
                    continue;
                };

                let similarity = (score as f32 / perfect as f32).min(1.0);
                if 1.0 - similarity > self.threshold {
                    continue;
                }

                let weighted = similarity * weight;
                best = Some(best.map_or(weighted, |b| b.max(weighted)));
            }

            if let Some(score) = best {
                results.push(MatchResult {
                    record: Arc::clone(record),
                    score,
                });
            }
        }

        // Stable: ties keep catalog order.
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }
}
