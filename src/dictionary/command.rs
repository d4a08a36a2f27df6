use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use tracing::debug;

use super::Dictionary;
use crate::error::{Error, Result};
use crate::key::{Key, RecordType};
use crate::record::Record;

/// One line of the interactive dictionary language.
///
/// | Line                        | Command                          |
/// |-----------------------------|----------------------------------|
/// | `define <word>`             | lookup, [`RecordType::Definition`] |
/// | `translate <word>`          | lookup, [`RecordType::Translation`] |
/// | `sound`/`play`/`say <word>` | lookup, sound / music / voice    |
/// | `show`/`animate <word>`     | lookup, image / animation        |
/// | `browse <word>`             | lookup, [`RecordType::WebPage`]  |
/// | `add <word> <type> <data>`  | [`Command::Add`]                 |
/// | `delete <word> <type>`      | [`Command::Delete`]              |
/// | `list <prefix>`             | [`Command::List`]                |
/// | `first`, `last`, `exit`     | the unit variants                |
///
/// # Examples
///
/// ```
/// use lexi_tree::{Command, RecordType};
///
/// let command: Command = "play Anthem".parse().unwrap();
/// assert_eq!(
///     command,
///     Command::Lookup { label: "anthem".into(), kind: RecordType::Music }
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Fetch the record of one well-known type for a word.
    Lookup { label: String, kind: RecordType },
    /// Insert a record; `data` is the rest of the line.
    Add { label: String, kind: u32, data: String },
    /// Remove the record for `(label, kind)`.
    Delete { label: String, kind: u32 },
    /// List labels starting with `prefix`.
    List { prefix: String },
    /// Show the record with the smallest key.
    First,
    /// Show the record with the largest key.
    Last,
    /// End the session.
    Exit,
}

/// The outcome of [`Dictionary::execute`].
///
/// Replies own their data so the dictionary can be borrowed again
/// immediately. `Display` renders the interpreter's message for each case.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A lookup hit. For media types the payload is a path or URL that the
    /// caller plays, shows or opens.
    Found(Record),
    /// A lookup miss.
    Missing { label: String, kind: RecordType },
    /// `add` inserted a record under this key.
    Added(Key),
    /// `add` found a record under this key and left it in place.
    AlreadyPresent(Key),
    /// `delete` removed the record under this key.
    Removed(Key),
    /// `delete` found no record under this key.
    NotPresent(Key),
    /// Labels matching a `list` prefix, in key order.
    Labels(Vec<String>),
    /// No label starts with this prefix.
    NoMatches(String),
    /// The smallest or largest record.
    Endpoint(Record),
    /// `first` or `last` on an empty dictionary.
    Empty,
    /// The session should end.
    Exit,
}

impl Command {
    /// Parses one command line. The verb is case-sensitive; words are
    /// lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCommand`] for an unknown verb, missing
    /// arguments or a type that is not a non-negative integer.
    pub fn parse(line: &str) -> Result<Self> {
        let mut rest = line;
        let verb = next_word(&mut rest).ok_or_else(|| Error::invalid_command("empty line"))?;

        let command = match verb {
            "first" => Command::First,
            "last" => Command::Last,
            "exit" => Command::Exit,
            "list" => Command::List {
                prefix: required(next_word(&mut rest), verb)?.to_lowercase(),
            },
            "add" => {
                let label = required(next_word(&mut rest), verb)?.to_lowercase();
                let kind = parse_kind(required(next_word(&mut rest), verb)?)?;
                // The payload keeps its inner spacing; one separator is dropped.
                let data = rest.strip_prefix(char::is_whitespace).unwrap_or(rest).trim_end_matches(['\r', '\n']);
                if data.trim().is_empty() {
                    return Err(Error::invalid_command("add needs data after the type"));
                }
                Command::Add {
                    label,
                    kind,
                    data: data.to_string(),
                }
            }
            "delete" => Command::Delete {
                label: required(next_word(&mut rest), verb)?.to_lowercase(),
                kind: parse_kind(required(next_word(&mut rest), verb)?)?,
            },
            _ => {
                let kind = lookup_kind(verb).ok_or_else(|| Error::invalid_command(verb))?;
                Command::Lookup {
                    label: required(next_word(&mut rest), verb)?.to_lowercase(),
                    kind,
                }
            }
        };
        debug!(?command, "parsed command");
        Ok(command)
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        Command::parse(line)
    }
}

fn lookup_kind(verb: &str) -> Option<RecordType> {
    let kind = match verb {
        "define" => RecordType::Definition,
        "translate" => RecordType::Translation,
        "sound" => RecordType::Sound,
        "play" => RecordType::Music,
        "say" => RecordType::Voice,
        "show" => RecordType::Image,
        "animate" => RecordType::Animation,
        "browse" => RecordType::WebPage,
        _ => return None,
    };
    Some(kind)
}

/// Splits the next whitespace-delimited word off the front of `rest`.
fn next_word<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let end = trimmed.find(char::is_whitespace).unwrap_or(trimmed.len());
    let (word, tail) = trimmed.split_at(end);
    *rest = tail;
    Some(word)
}

fn required<'a>(word: Option<&'a str>, verb: &str) -> Result<&'a str> {
    word.ok_or_else(|| Error::invalid_command(alloc::format!("{verb} is missing an argument")))
}

fn parse_kind(word: &str) -> Result<u32> {
    word.parse().map_err(|_| Error::invalid_command(alloc::format!("type must be an integer, got {word}")))
}

impl Dictionary {
    /// Applies `command`.
    ///
    /// Failures of the underlying operation become replies, never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::{Command, Dictionary};
    ///
    /// let mut dictionary = Dictionary::new();
    /// let reply = dictionary.execute("add owl 1 A nocturnal bird.".parse().unwrap());
    /// assert_eq!(reply.to_string(), "A record with key (owl, 1) was added");
    ///
    /// let reply = dictionary.execute(Command::First);
    /// assert_eq!(reply.to_string(), "owl,1,A nocturnal bird.");
    /// ```
    pub fn execute(&mut self, command: Command) -> Reply {
        match command {
            Command::Lookup { label, kind } => match self.get(&Key::typed(&label, kind)) {
                Some(record) => Reply::Found(record.clone()),
                None => Reply::Missing { label, kind },
            },
            Command::Add { label, kind, data } => {
                let key = Key::new(&label, kind);
                match self.put(Record::new(key.clone(), data)) {
                    Ok(()) => Reply::Added(key),
                    Err(error) => {
                        debug!(%error, %key, "add rejected");
                        Reply::AlreadyPresent(key)
                    }
                }
            }
            Command::Delete { label, kind } => {
                let key = Key::new(&label, kind);
                match self.remove(&key) {
                    Ok(_) => Reply::Removed(key),
                    Err(error) => {
                        debug!(%error, %key, "delete rejected");
                        Reply::NotPresent(key)
                    }
                }
            }
            Command::List { prefix } => {
                let labels: Vec<String> =
                    self.prefix_scan(&prefix).into_iter().map(|record| record.key().label().to_string()).collect();
                if labels.is_empty() {
                    Reply::NoMatches(prefix)
                } else {
                    Reply::Labels(labels)
                }
            }
            Command::First => self.smallest().cloned().map_or(Reply::Empty, Reply::Endpoint),
            Command::Last => self.largest().cloned().map_or(Reply::Empty, Reply::Endpoint),
            Command::Exit => Reply::Exit,
        }
    }

    /// Parses and applies one command line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCommand`] if the line does not parse.
    pub fn run(&mut self, line: &str) -> Result<Reply> {
        Command::parse(line).map(|command| self.execute(command))
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Found(record) => f.write_str(record.data()),
            Reply::Missing { label, kind } => match kind {
                RecordType::Definition => write!(f, "The word {label} is not in the ordered dictionary"),
                RecordType::Translation => write!(f, "There is no translation for the word {label}"),
                RecordType::Sound => write!(f, "There is no sound file for {label}"),
                RecordType::Music => write!(f, "There is no music file for {label}"),
                RecordType::Voice => write!(f, "There is no voice file for {label}"),
                RecordType::Image => write!(f, "There is no image file for {label}"),
                RecordType::Animation => write!(f, "There is no animated image file for {label}"),
                RecordType::WebPage => write!(f, "There is no webpage called {label}"),
            },
            Reply::Added(key) => write!(f, "A record with key {key} was added"),
            Reply::AlreadyPresent(key) => {
                write!(f, "A record with the given key {key} is already in the ordered dictionary")
            }
            Reply::Removed(_) => f.write_str("Record removed successfully"),
            Reply::NotPresent(key) => write!(f, "No record in the ordered dictionary has key {key}"),
            Reply::Labels(labels) => f.write_str(&labels.join("\n")),
            Reply::NoMatches(prefix) => {
                write!(f, "No label attributes in the ordered dictionary start with prefix {prefix}")
            }
            Reply::Endpoint(record) => {
                let key = record.key();
                write!(f, "{},{},{}", key.label(), key.kind(), record.data())
            }
            Reply::Empty => f.write_str("Dictionary is empty."),
            Reply::Exit => f.write_str("Exiting program."),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn parses_every_verb() {
        assert_eq!(Command::parse("first"), Ok(Command::First));
        assert_eq!(Command::parse("  last  "), Ok(Command::Last));
        assert_eq!(Command::parse("exit"), Ok(Command::Exit));
        assert_eq!(
            Command::parse("list CA"),
            Ok(Command::List {
                prefix: "ca".to_string()
            })
        );
        assert_eq!(
            Command::parse("delete Cat 3"),
            Ok(Command::Delete {
                label: "cat".to_string(),
                kind: 3
            })
        );
        assert_eq!(
            Command::parse("add cat 1 A   small feline."),
            Ok(Command::Add {
                label: "cat".to_string(),
                kind: 1,
                data: "A   small feline.".to_string()
            })
        );
        for (verb, kind) in [("show", RecordType::Image), ("browse", RecordType::WebPage), ("say", RecordType::Voice)] {
            assert_eq!(
                Command::parse(&alloc::format!("{verb} cat")),
                Ok(Command::Lookup {
                    label: "cat".to_string(),
                    kind
                })
            );
        }
    }

    #[test]
    fn add_keeps_payload_spacing() {
        assert_eq!(
            Command::parse("add cat 1 two  spaces\there\n"),
            Ok(Command::Add {
                label: "cat".to_string(),
                kind: 1,
                data: "two  spaces\there".to_string()
            })
        );
        assert_eq!(
            Command::parse("  add   Owl\t8 http://owls.example/"),
            Ok(Command::Add {
                label: "owl".to_string(),
                kind: 8,
                data: "http://owls.example/".to_string()
            })
        );
        assert!(matches!(Command::parse("add cat 1    "), Err(Error::InvalidCommand(_))));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "fly cat", "define", "delete cat", "delete cat one", "add cat 1", "add cat -1 x", "list"] {
            assert!(
                matches!(Command::parse(line), Err(Error::InvalidCommand(_))),
                "expected {line:?} to be rejected"
            );
        }
    }

    #[test]
    fn session_replays_interpreter_messages() {
        let mut dictionary = Dictionary::from_seed("cat\n A small feline.\ncat\n*meow.wav\ncar\n A vehicle.\n").unwrap();
        let mut transcript = Vec::new();
        for line in [
            "define cat",
            "say CAT",
            "translate cat",
            "browse cat",
            "add cat 1 duplicate",
            "list ca",
            "list z",
            "delete cat 5",
            "delete cat 5",
            "first",
            "last",
        ] {
            transcript.push(dictionary.run(line).unwrap().to_string());
        }
        assert_eq!(
            transcript,
            vec![
                "A small feline.",
                "meow.wav",
                "There is no translation for the word cat",
                "There is no webpage called cat",
                "A record with the given key (cat, 1) is already in the ordered dictionary",
                "car\ncat\ncat",
                "No label attributes in the ordered dictionary start with prefix z",
                "Record removed successfully",
                "No record in the ordered dictionary has key (cat, 5)",
                "car,1,A vehicle.",
                "cat,1,A small feline.",
            ]
        );
    }

    #[test]
    fn endpoints_of_empty_dictionary() {
        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.execute(Command::First), Reply::Empty);
        assert_eq!(dictionary.execute(Command::Last).to_string(), "Dictionary is empty.");
        assert_eq!(
            dictionary.execute(Command::Delete {
                label: "cat".to_string(),
                kind: 1
            }),
            Reply::NotPresent(Key::new("cat", 1))
        );
    }
}
