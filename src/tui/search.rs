// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Palette filtering: ranked fuzzy matching over catalog table names.

use crate::catalog::Catalog;

/// Catalog indices matching `query`, best first; every index when empty.
pub(crate) fn ranked_palette_indices(catalog: &Catalog, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return (0..catalog.len()).collect();
    }

    let mut matches = catalog
        .tables()
        .iter()
        .enumerate()
        .filter_map(|(index, table)| {
            let haystack = table.name().to_lowercase();
            palette_score(&needle, &haystack).map(|score| (score, index))
        })
        .collect::<Vec<_>>();

    matches.sort_by(|(score_a, index_a), (score_b, index_b)| {
        score_b.cmp(score_a).then_with(|| index_a.cmp(index_b))
    });
    matches.into_iter().map(|(_, index)| index).collect()
}

/// Substring hits rank above fuzzy hits; fuzzy hits below a floor are out.
fn palette_score(needle: &str, haystack: &str) -> Option<i64> {
    if let Some(first) = haystack.find(needle) {
        let mut score = 200_000i64.saturating_sub((first as i64) * 1000);
        if first == 0 {
            score += 5_000;
        }
        return Some(score);
    }

    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), haystack.chars());
    let score = (ratio * 1000.0).round() as i64;
    (score >= 45_000).then_some(score)
}
