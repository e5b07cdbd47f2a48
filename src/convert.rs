//! Longest-match-first text rewriting.
//!
//! The converter holds a ranked copy of the dictionary's mapping pairs,
//! sorted by descending key length. Multi-character terms are always applied
//! before any shorter mapping that matches one of their substrings, so a
//! term like 数据库 converts as a unit before 数据 or 库 could garble it.
//! The ranked copy is rebuilt lazily whenever the store's version changes.

use std::cmp::Reverse;

use crate::dict::DictStore;

/// One would-be substitution reported by [`Converter::preview`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewMatch {
    pub simplified: String,
    pub traditional: String,
    /// Occurrences in the original (unrewritten) input.
    pub count: usize,
}

/// Character-level statistics for a block of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStats {
    pub total_chars: usize,
    /// Scalar values in the CJK Unified Ideographs block.
    pub chinese_chars: usize,
    /// Sum of `simplified length × occurrences` over preview matches.
    pub convertible_chars: usize,
    /// Number of distinct mappings that match the text.
    pub mapping_hits: usize,
}

/// True for scalar values in the CJK Unified Ideographs block
/// (U+4E00..=U+9FFF).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Validate a term mapping pair.
///
/// Both sides must be non-empty, differ from each other, contain at least
/// one CJK ideograph, and be at most 50 characters. Shared by
/// [`DictStore::add_mapping`](crate::dict::DictStore::add_mapping) and any
/// caller wanting to pre-check pairs.
pub fn validate_mapping(simplified: &str, traditional: &str) -> bool {
    if simplified.is_empty() || traditional.is_empty() {
        return false;
    }
    if simplified == traditional {
        return false;
    }
    if !simplified.chars().any(is_cjk) || !traditional.chars().any(is_cjk) {
        return false;
    }
    simplified.chars().count() <= 50 && traditional.chars().count() <= 50
}

/// Contiguous runs of CJK ideographs in `text`, as byte-offset spans.
pub fn chinese_runs(text: &str) -> Vec<(usize, usize, &str)> {
    let mut runs = Vec::new();
    let mut start = None;
    for (idx, c) in text.char_indices() {
        if is_cjk(c) {
            start.get_or_insert(idx);
        } else if let Some(s) = start.take() {
            runs.push((s, idx, &text[s..idx]));
        }
    }
    if let Some(s) = start {
        runs.push((s, text.len(), &text[s..]));
    }
    runs
}

/// Simplified→traditional rewriter over a [`DictStore`]'s mapping set.
#[derive(Debug)]
pub struct Converter {
    /// Mapping pairs sorted by descending key char count; equal lengths keep
    /// dictionary insertion order (the sort is stable).
    ranked: Vec<(String, String)>,
    cached_version: Option<u64>,
}

impl Converter {
    pub fn new(store: &DictStore) -> Self {
        let mut converter = Self {
            ranked: Vec::new(),
            cached_version: None,
        };
        converter.refresh(store);
        converter
    }

    fn refresh(&mut self, store: &DictStore) {
        let mut pairs: Vec<(String, String)> = store
            .merged_pairs()
            .map(|(s, t)| (s.to_owned(), t.to_owned()))
            .collect();
        pairs.sort_by_key(|(simplified, _)| Reverse(simplified.chars().count()));
        self.ranked = pairs;
        self.cached_version = Some(store.version());
    }

    fn refresh_if_stale(&mut self, store: &DictStore) {
        if self.cached_version != Some(store.version()) {
            self.refresh(store);
        }
    }

    /// Rewrite all simplified occurrences in `text`, longest keys first.
    ///
    /// Returns the rewritten text and the total number of replaced
    /// occurrences. Each pair is applied to the working text produced by the
    /// pairs before it, so counts reflect what was actually substituted.
    pub fn convert(&mut self, store: &DictStore, text: &str) -> (String, usize) {
        if text.is_empty() {
            return (String::new(), 0);
        }
        self.refresh_if_stale(store);

        let mut converted = text.to_owned();
        let mut total = 0;
        for (simplified, traditional) in &self.ranked {
            if converted.contains(simplified.as_str()) {
                total += converted.matches(simplified.as_str()).count();
                converted = converted.replace(simplified.as_str(), traditional);
            }
        }
        (converted, total)
    }

    /// Report the substitutions `convert` would make, without rewriting.
    ///
    /// Counts are taken against the original input only. When mapping keys
    /// overlap (one key is a substring of another), the preview total can
    /// exceed what `convert` replaces; apply-mode counts are authoritative.
    pub fn preview(&mut self, store: &DictStore, text: &str) -> Vec<PreviewMatch> {
        if text.is_empty() {
            return Vec::new();
        }
        self.refresh_if_stale(store);

        let mut matches = Vec::new();
        for (simplified, traditional) in &self.ranked {
            let count = text.matches(simplified.as_str()).count();
            if count > 0 {
                matches.push(PreviewMatch {
                    simplified: simplified.clone(),
                    traditional: traditional.clone(),
                    count,
                });
            }
        }
        matches
    }

    /// Character statistics plus preview-derived conversion estimates.
    pub fn statistics(&mut self, store: &DictStore, text: &str) -> TextStats {
        let matches = self.preview(store, text);
        TextStats {
            total_chars: text.chars().count(),
            chinese_chars: text.chars().filter(|&c| is_cjk(c)).count(),
            convertible_chars: matches
                .iter()
                .map(|m| m.simplified.chars().count() * m.count)
                .sum(),
            mapping_hits: matches.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::DictStore;

    fn empty_store() -> DictStore {
        DictStore::with_builtin(&[])
    }

    #[test]
    fn test_convert_empty_input() {
        let store = empty_store();
        let mut converter = Converter::new(&store);
        assert_eq!(converter.convert(&store, ""), (String::new(), 0));
    }

    #[test]
    fn test_convert_non_cjk_text_unchanged() {
        let store = DictStore::new();
        let mut converter = Converter::new(&store);
        let text = "fn main() { println!(\"hello\"); }";
        assert_eq!(converter.convert(&store, text), (text.to_owned(), 0));
    }

    #[test]
    fn test_longest_match_precedence() {
        let mut store = empty_store();
        assert!(store.add_mapping("数据库", "資料庫"));
        assert!(store.add_mapping("数据", "數據"));
        let mut converter = Converter::new(&store);

        let (converted, count) = converter.convert(&store, "数据库连接");
        assert_eq!(converted, "資料庫连接");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_convert_counts_all_occurrences() {
        let mut store = empty_store();
        store.add_mapping("测试", "測試");
        let mut converter = Converter::new(&store);

        let (converted, count) = converter.convert(&store, "测试，再测试");
        assert_eq!(converted, "測試，再測試");
        assert_eq!(count, 2);
    }

    #[test]
    fn test_convert_is_idempotent() {
        let store = DictStore::new();
        let mut converter = Converter::new(&store);

        let (first, count) = converter.convert(&store, "这是一个软件测试");
        assert!(count > 0);
        let (second, recount) = converter.convert(&store, &first);
        assert_eq!(second, first);
        assert_eq!(recount, 0);
    }

    #[test]
    fn test_cache_refreshes_after_store_mutation() {
        let mut store = empty_store();
        let mut converter = Converter::new(&store);
        assert_eq!(converter.convert(&store, "新词").1, 0);

        store.add_mapping("新词", "新詞");
        let (converted, count) = converter.convert(&store, "新词");
        assert_eq!(converted, "新詞");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_preview_reports_without_rewriting() {
        let mut store = empty_store();
        store.add_mapping("简体", "簡體");
        let mut converter = Converter::new(&store);

        let matches = converter.preview(&store, "简体中文，简体字");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].simplified, "简体");
        assert_eq!(matches[0].traditional, "簡體");
        assert_eq!(matches[0].count, 2);
    }

    #[test]
    fn test_preview_matches_convert_for_disjoint_keys() {
        let mut store = empty_store();
        store.add_mapping("左边", "左邊");
        store.add_mapping("右图", "右圖");
        let mut converter = Converter::new(&store);

        let text = "左边和右图";
        let preview_total: usize = converter.preview(&store, text).iter().map(|m| m.count).sum();
        let (_, applied) = converter.convert(&store, text);
        assert_eq!(preview_total, applied);
    }

    // Overlapping keys: preview counts against the original text, so the
    // shorter key is reported even though convert consumes it inside the
    // longer match. Apply-mode counts are the authoritative ones.
    #[test]
    fn test_preview_overcounts_overlapping_keys() {
        let mut store = empty_store();
        store.add_mapping("数据库", "資料庫");
        store.add_mapping("数据", "數據");
        let mut converter = Converter::new(&store);

        let text = "数据库";
        let preview_total: usize = converter.preview(&store, text).iter().map(|m| m.count).sum();
        let (_, applied) = converter.convert(&store, text);
        assert_eq!(preview_total, 2);
        assert_eq!(applied, 1);
    }

    #[test]
    fn test_custom_override_wins_over_builtin() {
        let mut store = DictStore::with_builtin(&[("软件", "軟體")]);
        store.add_mapping("软件", "軟件");
        let mut converter = Converter::new(&store);

        let (converted, _) = converter.convert(&store, "软件");
        assert_eq!(converted, "軟件");
    }

    #[test]
    fn test_statistics() {
        let mut store = empty_store();
        store.add_mapping("软件", "軟體");
        let mut converter = Converter::new(&store);

        let stats = converter.statistics(&store, "abc 软件软件");
        assert_eq!(stats.total_chars, 8);
        assert_eq!(stats.chinese_chars, 4);
        assert_eq!(stats.convertible_chars, 4);
        assert_eq!(stats.mapping_hits, 1);
    }

    #[test]
    fn test_validate_mapping_rules() {
        assert!(validate_mapping("测试", "測試"));
        assert!(!validate_mapping("", "測試"));
        assert!(!validate_mapping("测试", ""));
        assert!(!validate_mapping("相同", "相同"));
        assert!(!validate_mapping("abc", "測試"));
        assert!(!validate_mapping("测试", "abc"));
        let long = "试".repeat(51);
        assert!(!validate_mapping(&long, "測試"));
        assert!(!validate_mapping("测试", &long));
    }

    #[test]
    fn test_chinese_runs() {
        let runs = chinese_runs("ab中文cd再见");
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].2, "中文");
        assert_eq!(runs[1].2, "再见");

        assert!(chinese_runs("plain ascii").is_empty());
    }
}
