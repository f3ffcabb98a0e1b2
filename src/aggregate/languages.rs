use std::collections::HashMap;

use crate::models::LanguageStat;

/// How many languages survive into the final ranking.
pub const TOP_LANGUAGES: usize = 8;

/// Accumulated language usage across a profile. `repos` counts how many
/// repositories name the language as primary; `bytes` sums the byte
/// breakdowns of the sampled repositories. Both only ever grow.
#[derive(Debug, Clone, Default)]
pub struct LanguageTally {
    entries: HashMap<String, LanguageEntry>,
}

#[derive(Debug, Clone, Copy, Default)]
struct LanguageEntry {
    repos: u32,
    bytes: u64,
}

impl LanguageTally {
    pub fn record_repo(&mut self, language: &str) {
        self.entries.entry(language.to_string()).or_default().repos += 1;
    }

    pub fn add_bytes(&mut self, breakdown: &HashMap<String, u64>) {
        for (language, bytes) in breakdown {
            self.entries.entry(language.clone()).or_default().bytes += bytes;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ranked by bytes, then repo count, then name so equal entries always
    /// come out in the same order regardless of map iteration.
    pub fn into_ranked(self, limit: usize) -> Vec<LanguageStat> {
        let mut stats: Vec<LanguageStat> = self
            .entries
            .into_iter()
            .map(|(language, entry)| LanguageStat {
                language,
                repos: entry.repos,
                bytes: entry.bytes,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.bytes
                .cmp(&a.bytes)
                .then(b.repos.cmp(&a.repos))
                .then(a.language.cmp(&b.language))
        });
        stats.truncate(limit);
        stats
    }
}
