use crate::types::{letter_index, ALPHABET_LEN};

/// A zero-copy view over one column of a normalized text: every `stride`-th
/// letter starting at `column`
#[derive(Debug, Clone, Copy)]
pub struct ColumnStream<'a> {
    pub column: usize,
    stride: usize,
    letters: &'a [u8],
}

impl<'a> ColumnStream<'a> {
    /// Create a new column view; a zero stride is treated as 1
    pub fn new(letters: &'a [u8], column: usize, stride: usize) -> Self {
        Self {
            column,
            stride: stride.max(1),
            letters,
        }
    }

    /// Number of letters in this column
    pub fn len(&self) -> usize {
        if self.column >= self.letters.len() {
            0
        } else {
            (self.letters.len() - self.column - 1) / self.stride + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate the column's letters in text order
    pub fn iter(&self) -> impl Iterator<Item = u8> + 'a {
        let start = self.column.min(self.letters.len());
        self.letters[start..].iter().step_by(self.stride).copied()
    }

    /// Letter counts for this column
    pub fn histogram(&self) -> [u32; ALPHABET_LEN] {
        letter_histogram(self.iter())
    }

    /// Collect the column into an owned string
    pub fn to_text(&self) -> String {
        self.iter().map(char::from).collect()
    }
}

/// Text reduced to the cipher alphabet: uppercased, then anything outside A-Z dropped
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedText {
    letters: String,
}

impl NormalizedText {
    /// Normalize arbitrary input
    pub fn new(raw: &str) -> Self {
        let letters = raw
            .chars()
            .flat_map(char::to_uppercase)
            .filter(|c| c.is_ascii_uppercase())
            .collect();
        Self { letters }
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.letters
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.letters.as_bytes()
    }

    pub fn into_string(self) -> String {
        self.letters
    }

    /// Split into exactly `key_length` interleaved column views
    pub fn columns(&self, key_length: usize) -> Vec<ColumnStream<'_>> {
        let key_length = key_length.max(1);
        (0..key_length)
            .map(|column| ColumnStream::new(self.as_bytes(), column, key_length))
            .collect()
    }

    /// Letter counts over the whole text
    pub fn histogram(&self) -> [u32; ALPHABET_LEN] {
        letter_histogram(self.as_bytes().iter().copied())
    }
}

impl std::fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.letters)
    }
}

/// Normalize arbitrary input to the cipher alphabet
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText::new(raw)
}

/// Count uppercase letters; other bytes are ignored
pub fn letter_histogram<I>(letters: I) -> [u32; ALPHABET_LEN]
where
    I: IntoIterator<Item = u8>,
{
    let mut histogram = [0u32; ALPHABET_LEN];
    for index in letters.into_iter().filter_map(letter_index) {
        histogram[index] += 1;
    }
    histogram
}
