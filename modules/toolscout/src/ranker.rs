use std::cmp::Reverse;
use std::collections::HashSet;

use toolscout_common::AiTool;

/// De-duplicate by slug (earliest discovery wins), order by votes descending
/// with discovery order as the tie-break, and keep the first `limit`.
pub fn rank(mut candidates: Vec<(usize, AiTool)>, limit: usize) -> Vec<AiTool> {
    candidates.sort_by_key(|(order, _)| *order);

    let mut seen = HashSet::new();
    let mut unique: Vec<(usize, AiTool)> = candidates
        .into_iter()
        .filter(|(_, tool)| seen.insert(tool.slug.clone()))
        .collect();

    unique.sort_by_key(|(order, tool)| (Reverse(tool.rank_score()), *order));
    unique.into_iter().take(limit).map(|(_, tool)| tool).collect()
}
