use crate::tokenizer::SkillSet;

/// Jaccard index over the distinct tokens of two skill sets.
///
/// Returns `|a ∩ b| / |a ∪ b|`, always in `[0, 1]`, and 0.0 when both sets are
/// empty so that two blank skills fields never rank as a perfect match.
pub fn jaccard(a: &SkillSet, b: &SkillSet) -> f64 {
    let union = a.unique().union(b.unique()).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.unique().intersection(b.unique()).count();
    intersection as f64 / union as f64
}
