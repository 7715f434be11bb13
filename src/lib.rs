#![doc = include_str!("../README.md")]
#![deny(missing_docs)]

use biometrics::Counter;

///////////////////////////////////////////// constants ////////////////////////////////////////////

const DELIMITER: char = ':';

/// The embedded analytics glossary, one "term: translation" pair per line, English on the left and
/// Vietnamese on the right.
pub const ANALYTICS_GLOSSARY: &str = "
Predictive analytics: Phân tích dự đoán
Cohort analysis: Phân tích nhóm
A/B testing results: Kết quả A/B testing
Machine learning insights: Thông tin từ học máy
Custom analytics: Phân tích tùy chỉnh
";

///////////////////////////////////////////// counters /////////////////////////////////////////////

static LINES_SCANNED: Counter = Counter::new("biglot.extract.lines_scanned");
static ENTRIES_EXTRACTED: Counter = Counter::new("biglot.extract.entries");
static LINES_SKIPPED: Counter = Counter::new("biglot.extract.lines_skipped");

/// Register all biglot counters with the provided collector.
pub fn register_counters(collector: &biometrics::Collector) {
    collector.register_counter(&LINES_SCANNED);
    collector.register_counter(&ENTRIES_EXTRACTED);
    collector.register_counter(&LINES_SKIPPED);
}

/////////////////////////////////////////////// Entry //////////////////////////////////////////////

/// One parsed glossary entry:  the text before the first delimiter and the text after it, both
/// trimmed of surrounding whitespace.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    /// Parse one line into an entry.  Returns None when the line contains no delimiter; such
    /// lines are ordinary and contribute nothing to the glossary.
    ///
    /// # Examples
    /// ```
    /// # use biglot::Entry;
    /// let entry = Entry::parse("Cohort analysis: Phân tích nhóm").unwrap();
    /// assert_eq!("Cohort analysis", entry.key());
    /// assert_eq!("Phân tích nhóm", entry.value());
    /// ```
    pub fn parse(line: &str) -> Option<Self> {
        let (key, value) = line.split_once(DELIMITER)?;
        Some(Self {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
        })
    }

    /// The text before the first delimiter.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The text after the first delimiter.  Delimiters after the first are kept verbatim.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decompose the entry into its (key, value) pair.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

////////////////////////////////////////////// extract /////////////////////////////////////////////

/// Split source into parallel key and value sequences, in line order.
///
/// The text is trimmed as a whole before being split into lines.  Lines without a delimiter are
/// skipped and do not shift the alignment of the entries around them.  The returned sequences
/// always have equal length.
pub fn extract(source: &str) -> (Vec<String>, Vec<String>) {
    let mut keys = vec![];
    let mut values = vec![];
    for line in source.trim().split('\n') {
        LINES_SCANNED.click();
        if let Some(entry) = Entry::parse(line) {
            ENTRIES_EXTRACTED.click();
            let (key, value) = entry.into_parts();
            keys.push(key);
            values.push(value);
        } else {
            LINES_SKIPPED.click();
        }
    }
    (keys, values)
}

////////////////////////////////////////////// render //////////////////////////////////////////////

/// Render the keys and values as two newline-joined blocks separated by one blank line.
///
/// Empty sequences render as empty blocks, so two empty sequences render as "\n\n".
pub fn render<S: AsRef<str>>(keys: &[S], values: &[S]) -> String {
    let keys = keys
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    let values = values
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    format!("{}\n\n{}", keys, values)
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////
