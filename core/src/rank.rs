use crate::scorer::ScoredTerm;
use std::cmp::Ordering;

/// Sort by descending score, then descending term, and keep the first `top_k`.
pub fn rank(mut scored: Vec<ScoredTerm>, top_k: Option<usize>) -> Vec<ScoredTerm> {
    scored.sort_by(compare);
    if let Some(k) = top_k {
        scored.truncate(k);
    }
    scored
}

fn compare(a: &ScoredTerm, b: &ScoredTerm) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| b.term.cmp(&a.term))
}
