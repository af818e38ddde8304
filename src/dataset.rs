//! Shape-specialized keyed datasets for extracted wiki facts.
//!
//! Each dataset maps a stable string key (a registry entry's canonical name)
//! to values of one declared shape. Scalar and list shapes overwrite on
//! re-insertion; the pair multimap only ever appends. Storage is a plain hash
//! map; keys are sorted at serialization time, so insertion order never
//! affects output.

use rustc_hash::FxHashMap;
use std::fmt::Display;

/// Read-back surface every dataset shape exposes to the table writer.
pub trait Dataset {
    /// Fully rendered rows, one per key, key first, keys sorted
    /// lexicographically ascending. Value rendering is shape-specific; the
    /// writer never inspects shapes.
    fn records(&self) -> Vec<Vec<String>>;

    /// Number of keys present.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sorted_keys<V>(entries: &FxHashMap<String, V>) -> Vec<&String> {
    let mut keys: Vec<&String> = entries.keys().collect();
    keys.sort_unstable();
    keys
}

/// Key → single string value. Re-insertion overwrites.
#[derive(Debug, Default)]
pub struct StringDataset {
    entries: FxHashMap<String, String>,
}

impl StringDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl Dataset for StringDataset {
    fn records(&self) -> Vec<Vec<String>> {
        sorted_keys(&self.entries)
            .into_iter()
            .map(|key| vec![key.clone(), self.entries[key].clone()])
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Key → single integer value. Re-insertion overwrites.
///
/// Values serialize as base-10 with no leading zeros or grouping.
#[derive(Debug, Default)]
pub struct NumberDataset {
    entries: FxHashMap<String, i64>,
}

impl NumberDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, value: i64) {
        self.entries.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }
}

impl Dataset for NumberDataset {
    fn records(&self) -> Vec<Vec<String>> {
        let mut buf = itoa::Buffer::new();
        sorted_keys(&self.entries)
            .into_iter()
            .map(|key| vec![key.clone(), buf.format(self.entries[key]).to_string()])
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Key → ordered sequence of strings. Re-insertion overwrites the whole
/// sequence; element order is the caller's and is never re-sorted here.
#[derive(Debug, Default)]
pub struct StringListDataset {
    entries: FxHashMap<String, Vec<String>>,
}

impl StringListDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), values);
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl Dataset for StringListDataset {
    fn records(&self) -> Vec<Vec<String>> {
        sorted_keys(&self.entries)
            .into_iter()
            .map(|key| {
                let mut record = Vec::with_capacity(self.entries[key].len() + 1);
                record.push(key.clone());
                record.extend(self.entries[key].iter().cloned());
                record
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Key → multiset of (A, B) pairs. `put_new` always appends; duplicate pairs
/// are retained (one per enchantment level, for example). Pairs are sorted by
/// (A, then B) only when rendering records; stored order is untouched.
#[derive(Debug)]
pub struct PairMapDataset<A, B> {
    entries: FxHashMap<String, Vec<(A, B)>>,
}

impl<A, B> Default for PairMapDataset<A, B> {
    fn default() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }
}

impl<A, B> PairMapDataset<A, B> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_new(&mut self, key: impl Into<String>, a: A, b: B) {
        self.entries.entry(key.into()).or_default().push((a, b));
    }

    pub fn get(&self, key: &str) -> Option<&[(A, B)]> {
        self.entries.get(key).map(Vec::as_slice)
    }
}

impl<A, B> Dataset for PairMapDataset<A, B>
where
    A: Ord + Clone + Display,
    B: Ord + Clone + Display,
{
    fn records(&self) -> Vec<Vec<String>> {
        sorted_keys(&self.entries)
            .into_iter()
            .map(|key| {
                let mut pairs = self.entries[key].clone();
                pairs.sort();

                let mut record = Vec::with_capacity(pairs.len() * 2 + 1);
                record.push(key.clone());
                for (a, b) in &pairs {
                    record.push(a.to_string());
                    record.push(b.to_string());
                }
                record
            })
            .collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_put_overwrites() {
        let mut data = StringDataset::new();
        data.put("sharpness", "COMMON");
        data.put("sharpness", "RARE");

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("sharpness"), Some("RARE"));
        assert_eq!(data.records(), vec![vec!["sharpness", "RARE"]]);
    }

    #[test]
    fn number_put_overwrites() {
        let mut data = NumberDataset::new();
        data.put("sharpness", 1);
        data.put("sharpness", 5);

        assert_eq!(data.get("sharpness"), Some(5));
        assert_eq!(data.records(), vec![vec!["sharpness", "5"]]);
    }

    #[test]
    fn number_renders_negative_base_10() {
        let mut data = NumberDataset::new();
        data.put("offset", -42);
        assert_eq!(data.records(), vec![vec!["offset", "-42"]]);
    }

    #[test]
    fn keys_sort_lexicographically_regardless_of_insertion_order() {
        let mut data = NumberDataset::new();
        data.put("z", 1);
        data.put("a", 2);
        data.put("m", 3);

        let keys: Vec<String> = data.records().into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(keys, vec!["a", "m", "z"]);
    }

    #[test]
    fn absent_keys_produce_no_rows() {
        let data = StringDataset::new();
        assert!(data.is_empty());
        assert!(data.records().is_empty());
    }

    #[test]
    fn list_preserves_caller_order() {
        let mut data = StringListDataset::new();
        data.put("e", vec!["b".to_string(), "a".to_string()]);

        assert_eq!(data.records(), vec![vec!["e", "b", "a"]]);
    }

    #[test]
    fn list_put_overwrites_whole_sequence() {
        let mut data = StringListDataset::new();
        data.put("e", vec!["x".to_string(), "y".to_string(), "z".to_string()]);
        data.put("e", vec!["only".to_string()]);

        assert_eq!(data.get("e"), Some(&["only".to_string()][..]));
        assert_eq!(data.records(), vec![vec!["e", "only"]]);
    }

    #[test]
    fn empty_list_still_produces_a_row() {
        let mut data = StringListDataset::new();
        data.put("bare", Vec::new());

        assert_eq!(data.records(), vec![vec!["bare"]]);
    }

    #[test]
    fn pair_put_new_accumulates() {
        let mut data: PairMapDataset<i64, i64> = PairMapDataset::new();
        data.put_new("sharpness", 1, 11);
        data.put_new("sharpness", 11, 21);
        data.put_new("sharpness", 21, 31);

        assert_eq!(data.len(), 1);
        assert_eq!(data.get("sharpness").unwrap().len(), 3);
    }

    #[test]
    fn pair_duplicates_are_retained() {
        let mut data: PairMapDataset<i64, i64> = PairMapDataset::new();
        data.put_new("mending", 25, 75);
        data.put_new("mending", 25, 75);

        assert_eq!(data.get("mending").unwrap().len(), 2);
        assert_eq!(
            data.records(),
            vec![vec!["mending", "25", "75", "25", "75"]]
        );
    }

    #[test]
    fn pairs_render_sorted_by_a_then_b() {
        let mut data: PairMapDataset<i64, i64> = PairMapDataset::new();
        data.put_new("fortune", 15, 61);
        data.put_new("fortune", 5, 55);
        data.put_new("fortune", 15, 20);

        assert_eq!(
            data.records(),
            vec![vec!["fortune", "5", "55", "15", "20", "15", "61"]]
        );
        // Stored order stays as inserted
        assert_eq!(data.get("fortune").unwrap()[0], (15, 61));
    }

    #[test]
    fn pair_keys_sort_lexicographically() {
        let mut data: PairMapDataset<i64, i64> = PairMapDataset::new();
        data.put_new("unbreaking", 5, 55);
        data.put_new("aqua_affinity", 1, 41);

        let keys: Vec<String> = data.records().into_iter().map(|r| r[0].clone()).collect();
        assert_eq!(keys, vec!["aqua_affinity", "unbreaking"]);
    }

    #[test]
    fn string_pairs_work_too() {
        let mut data: PairMapDataset<String, String> = PairMapDataset::new();
        data.put_new("biome", "b".to_string(), "2".to_string());
        data.put_new("biome", "a".to_string(), "1".to_string());

        assert_eq!(data.records(), vec![vec!["biome", "a", "1", "b", "2"]]);
    }
}
