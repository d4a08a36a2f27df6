use tracing::debug;

use super::Dictionary;
use crate::error::{Error, Result};
use crate::key::{Key, RecordType};
use crate::record::Record;

impl Dictionary {
    /// Builds a dictionary from seed text.
    ///
    /// # Errors
    ///
    /// See [`load_seed`](Self::load_seed).
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::{Dictionary, Key, RecordType};
    ///
    /// let seed = "cat\n A small feline.\ncat\n/chat\ncat\n-meow.wav\n";
    /// let dictionary = Dictionary::from_seed(seed).unwrap();
    ///
    /// assert_eq!(dictionary.len(), 3);
    /// let sound = dictionary.get(&Key::typed("cat", RecordType::Sound)).unwrap();
    /// assert_eq!(sound.data(), "meow.wav");
    /// ```
    pub fn from_seed(text: &str) -> Result<Self> {
        let mut dictionary = Dictionary::new();
        dictionary.load_seed(text)?;
        Ok(dictionary)
    }

    /// Adds the records described by seed text and returns how many were added.
    ///
    /// Seed text alternates label lines and data lines. Blank lines are skipped
    /// where a label is expected; the line after a label is always its data.
    /// Each data line is classified with [`RecordType::classify`]; a leading
    /// type marker is dropped and the rest trimmed to form the payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] when a pair repeats a key already in the
    /// dictionary, and [`Error::MalformedSeed`] when the text ends after a
    /// label or a data line is blank. Pairs before the failing one stay
    /// inserted.
    pub fn load_seed(&mut self, text: &str) -> Result<usize> {
        let mut lines = text.lines().enumerate().map(|(index, line)| (index + 1, line));
        let mut loaded = 0;
        while let Some((number, label)) = lines.next() {
            if label.trim().is_empty() {
                continue;
            }
            let Some((data_number, data_line)) = lines.next() else {
                return Err(Error::MalformedSeed { line: number });
            };
            if data_line.trim().is_empty() {
                debug!(line = data_number, "blank seed data line");
                return Err(Error::MalformedSeed { line: data_number });
            }
            let (kind, data) = split_data_line(data_line);
            self.put(Record::new(Key::typed(label.trim(), kind), data))?;
            loaded += 1;
        }
        debug!(loaded, total = self.len(), "loaded seed records");
        Ok(loaded)
    }
}

/// Classifies a seed data line and extracts its payload.
fn split_data_line(line: &str) -> (RecordType, &str) {
    let kind = RecordType::classify(line);
    let mut chars = line.chars();
    let payload = match chars.next().and_then(RecordType::from_marker) {
        Some(_) => chars.as_str(),
        None => line,
    };
    (kind, payload.trim())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn marker_is_stripped_and_payload_trimmed() {
        assert_eq!(split_data_line("+ theme.mid "), (RecordType::Music, "theme.mid"));
        assert_eq!(split_data_line("*hello.wav"), (RecordType::Voice, "hello.wav"));
        assert_eq!(split_data_line("  A small feline. "), (RecordType::Definition, "A small feline."));
        assert_eq!(split_data_line("pics/cat.gif"), (RecordType::Animation, "pics/cat.gif"));
    }

    #[test]
    fn dangling_label_is_malformed() {
        let mut dictionary = Dictionary::new();
        let result = dictionary.load_seed("dog\nA loyal animal.\n\nfox\n");
        assert_eq!(result, Err(Error::MalformedSeed { line: 4 }));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn blank_data_line_is_malformed() {
        let mut dictionary = Dictionary::new();
        let result = dictionary.load_seed("cat\n\ndog\nA loyal animal.\n");
        assert_eq!(result, Err(Error::MalformedSeed { line: 2 }));
        assert!(dictionary.is_empty());
        assert_eq!(dictionary.get(&Key::typed("cat", RecordType::Definition)), None);
    }

    #[test]
    fn blank_lines_between_pairs_are_skipped() {
        let dictionary = Dictionary::from_seed("\ncat\nA small feline.\n\n\ndog\nA loyal animal.\n\n").unwrap();
        assert_eq!(dictionary.len(), 2);
        let dog = dictionary.get(&Key::typed("dog", RecordType::Definition)).unwrap();
        assert_eq!(dog.data(), "A loyal animal.");
    }

    #[test]
    fn duplicate_pair_is_rejected() {
        let result = Dictionary::from_seed("Dog\nA loyal animal.\ndog\nAnother.\n");
        assert_eq!(result.unwrap_err(), Error::DuplicateKey);
    }

    #[test]
    fn labels_are_trimmed_and_lowercased() {
        let dictionary = Dictionary::from_seed("  Owl \nhttp://owls.example/owl.html\n").unwrap();
        let record = dictionary.get(&Key::typed("owl", RecordType::WebPage)).unwrap();
        assert_eq!(record.data(), "http://owls.example/owl.html");
    }
}
