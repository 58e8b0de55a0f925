// crates/engine/src/stats.rs
use hashbrown::HashMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Grouping key for files whose name has no extension.
pub const NO_EXT: &str = "no_ext";

/// Grouping key for `path`: the suffix from the last `.` of the file name,
/// dot included, or [`NO_EXT`].
///
/// Leading dots do not start an extension (`.gitignore` has none), while a
/// trailing dot does (`notes.` is keyed `"."`).
#[must_use]
pub fn extension_key(path: &Path) -> String {
    path.extension().map_or_else(
        || NO_EXT.to_string(),
        |ext| format!(".{}", ext.to_string_lossy()),
    )
}

/// Line counts for one scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub extension: String,
    pub non_empty_lines: usize,
    pub empty_lines: usize,
}

impl FileRecord {
    #[must_use]
    pub fn new(path: PathBuf, non_empty_lines: usize, empty_lines: usize) -> Self {
        let extension = extension_key(&path);
        Self {
            path,
            extension,
            non_empty_lines,
            empty_lines,
        }
    }

    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.non_empty_lines + self.empty_lines
    }
}

/// Per-extension counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtensionStats {
    pub extension: String,
    pub files: usize,
    pub empty_lines: usize,
    #[serde(rename = "lines")]
    pub non_empty_lines: usize,
}

impl ExtensionStats {
    fn new(extension: &str) -> Self {
        Self {
            extension: extension.to_string(),
            ..Self::default()
        }
    }

    fn absorb(&mut self, other: &Self) {
        self.files += other.files;
        self.empty_lines += other.empty_lines;
        self.non_empty_lines += other.non_empty_lines;
    }
}

/// Folds [`FileRecord`]s into per-extension counters.
///
/// Every operation is a plain sum, so the order records arrive in (and the
/// way partial aggregators are merged) never changes the result.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    by_ext: HashMap<String, ExtensionStats>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, record: &FileRecord) {
        let entry = self
            .by_ext
            .entry_ref(record.extension.as_str())
            .or_insert_with(|| ExtensionStats::new(&record.extension));
        entry.files += 1;
        entry.empty_lines += record.empty_lines;
        entry.non_empty_lines += record.non_empty_lines;
    }

    /// Entry-wise sum of two aggregators.
    pub fn merge(&mut self, other: Self) {
        for (ext, stats) in other.by_ext {
            self.by_ext
                .entry(ext)
                .and_modify(|mine| mine.absorb(&stats))
                .or_insert(stats);
        }
    }

    #[must_use]
    pub fn finish(self) -> Summary {
        Summary {
            by_ext: self.by_ext,
        }
    }
}

impl<'a> Extend<&'a FileRecord> for Aggregator {
    fn extend<I: IntoIterator<Item = &'a FileRecord>>(&mut self, iter: I) {
        for record in iter {
            self.add(record);
        }
    }
}

impl<'a> FromIterator<&'a FileRecord> for Aggregator {
    fn from_iter<I: IntoIterator<Item = &'a FileRecord>>(iter: I) -> Self {
        let mut agg = Self::new();
        agg.extend(iter);
        agg
    }
}

/// Final result of a scan. Totals are always derived from the per-extension entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    by_ext: HashMap<String, ExtensionStats>,
}

impl Summary {
    #[must_use]
    pub fn get(&self, extension: &str) -> Option<&ExtensionStats> {
        self.by_ext.get(extension)
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &ExtensionStats> {
        self.by_ext.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_ext.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_ext.is_empty()
    }

    #[must_use]
    pub fn total_files(&self) -> usize {
        self.iter().map(|s| s.files).sum()
    }

    #[must_use]
    pub fn total_empty_lines(&self) -> usize {
        self.iter().map(|s| s.empty_lines).sum()
    }

    #[must_use]
    pub fn total_non_empty_lines(&self) -> usize {
        self.iter().map(|s| s.non_empty_lines).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(name: &str, non_empty: usize, empty: usize) -> FileRecord {
        FileRecord::new(PathBuf::from(name), non_empty, empty)
    }

    #[test]
    fn test_extension_key() {
        assert_eq!(extension_key(Path::new("src/main.rs")), ".rs");
        assert_eq!(extension_key(Path::new("archive.tar.gz")), ".gz");
        assert_eq!(extension_key(Path::new("README")), NO_EXT);
        assert_eq!(extension_key(Path::new("dir.d/Makefile")), NO_EXT);
        assert_eq!(extension_key(Path::new(".gitignore")), NO_EXT);
        assert_eq!(extension_key(Path::new("notes.")), ".");
    }

    #[test]
    fn test_no_extension_never_empty_key() {
        let agg: Aggregator = [record("LICENSE", 3, 0)].iter().collect();
        let summary = agg.finish();
        assert!(summary.get("").is_none());
        assert_eq!(summary.get(NO_EXT).unwrap().files, 1);
    }

    #[test]
    fn test_add_accumulates_each_record_once() {
        let records = [
            record("a.py", 3, 1),
            record("b.py", 5, 0),
            record("README", 2, 0),
        ];
        let summary = records.iter().collect::<Aggregator>().finish();

        let py = summary.get(".py").unwrap();
        assert_eq!((py.files, py.empty_lines, py.non_empty_lines), (2, 1, 8));
        let none = summary.get(NO_EXT).unwrap();
        assert_eq!((none.files, none.empty_lines, none.non_empty_lines), (1, 0, 2));

        assert_eq!(summary.len(), 2);
        assert_eq!(summary.total_files(), 3);
        assert_eq!(summary.total_empty_lines(), 1);
        assert_eq!(summary.total_non_empty_lines(), 10);
    }

    #[test]
    fn test_line_totals_match_records() {
        let records = [record("x.rs", 10, 4), record("y.rs", 0, 0), record("z.rs", 1, 7)];
        let summary = records.iter().collect::<Aggregator>().finish();
        let rs = summary.get(".rs").unwrap();
        let raw: usize = records.iter().map(FileRecord::total_lines).sum();
        assert_eq!(rs.files, records.len());
        assert_eq!(rs.empty_lines + rs.non_empty_lines, raw);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Aggregator::new().finish();
        assert!(summary.is_empty());
        assert_eq!(summary.total_files(), 0);
    }

    fn arb_record() -> impl Strategy<Value = FileRecord> {
        let names = prop::sample::select(vec!["a.rs", "b.py", "Makefile", "c.rs", "d.md", ".env"]);
        (names, 0usize..500, 0usize..100).prop_map(|(n, ne, e)| record(n, ne, e))
    }

    proptest! {
        #[test]
        fn prop_fold_order_does_not_matter(
            (records, shuffled) in prop::collection::vec(arb_record(), 0..40)
                .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
        ) {
            let forward = records.iter().collect::<Aggregator>().finish();
            let permuted = shuffled.iter().collect::<Aggregator>().finish();
            prop_assert_eq!(forward, permuted);
        }

        #[test]
        fn prop_merge_matches_single_fold(
            records in prop::collection::vec(arb_record(), 0..40),
            split in 0usize..40,
        ) {
            let split = split.min(records.len());
            let (left, right) = records.split_at(split);

            let whole = records.iter().collect::<Aggregator>().finish();

            let mut lr: Aggregator = left.iter().collect();
            lr.merge(right.iter().collect());
            let mut rl: Aggregator = right.iter().collect();
            rl.merge(left.iter().collect());

            prop_assert_eq!(&lr.finish(), &whole);
            prop_assert_eq!(&rl.finish(), &whole);
        }

        #[test]
        fn prop_file_count_matches_record_count(
            records in prop::collection::vec(arb_record(), 0..40)
        ) {
            let summary = records.iter().collect::<Aggregator>().finish();
            prop_assert_eq!(summary.total_files(), records.len());
            let raw: usize = records.iter().map(FileRecord::total_lines).sum();
            prop_assert_eq!(summary.total_empty_lines() + summary.total_non_empty_lines(), raw);
        }
    }
}
