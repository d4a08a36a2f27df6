use alloc::string::String;
use core::fmt;

/// A dictionary key: a lowercase label plus a numeric type tag.
///
/// Keys order by label first (byte-wise string order) and by type second, so
/// all records sharing a label sit next to each other in the dictionary.
///
/// # Examples
///
/// ```
/// use lexi_tree::Key;
///
/// let cat = Key::new("Cat", 1);
/// assert_eq!(cat.label(), "cat");
/// assert_eq!(cat, Key::new("cat", 1));
///
/// assert!(Key::new("cat", 1) < Key::new("cat", 2));
/// assert!(Key::new("cat", 9) < Key::new("dog", 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Key {
    // Field order drives the derived ordering.
    label: String,
    kind: u32,
}

impl Key {
    /// Creates a key, lowercasing `label`.
    #[must_use]
    pub fn new(label: &str, kind: u32) -> Self {
        Key {
            label: label.to_lowercase(),
            kind,
        }
    }

    /// Creates a key tagged with a well-known [`RecordType`].
    #[must_use]
    pub fn typed(label: &str, kind: RecordType) -> Self {
        Self::new(label, kind.tag())
    }

    /// Returns the lowercase label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the type tag.
    #[must_use]
    pub const fn kind(&self) -> u32 {
        self.kind
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.label, self.kind)
    }
}

/// The type tags the command interpreter and seed loader assign.
///
/// The tree itself treats tags as opaque integers; this is naming policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum RecordType {
    /// Inline definition text.
    Definition = 1,
    /// Inline translation text.
    Translation = 2,
    /// Path to a sound effect.
    Sound = 3,
    /// Path to a music file.
    Music = 4,
    /// Path to a voice recording.
    Voice = 5,
    /// Path to a still image.
    Image = 6,
    /// Path to an animated image.
    Animation = 7,
    /// Web page location.
    WebPage = 8,
}

impl RecordType {
    /// Every type, in tag order.
    pub const ALL: [RecordType; 8] = [
        RecordType::Definition,
        RecordType::Translation,
        RecordType::Sound,
        RecordType::Music,
        RecordType::Voice,
        RecordType::Image,
        RecordType::Animation,
        RecordType::WebPage,
    ];

    /// Returns the numeric tag.
    #[must_use]
    pub const fn tag(self) -> u32 {
        self as u32
    }

    /// Looks up the type for a numeric tag.
    #[must_use]
    pub fn from_tag(tag: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    /// Classifies a seed data line.
    ///
    /// A leading marker wins (`-` sound, `+` music, `*` voice, `/`
    /// translation), then the file suffix (`.gif`, `.jpg`, `.html`); anything
    /// else is a definition.
    ///
    /// # Examples
    ///
    /// ```
    /// use lexi_tree::RecordType;
    ///
    /// assert_eq!(RecordType::classify("-meow.wav"), RecordType::Sound);
    /// assert_eq!(RecordType::classify("/chat"), RecordType::Translation);
    /// assert_eq!(RecordType::classify("cat.jpg"), RecordType::Image);
    /// assert_eq!(RecordType::classify("A small feline."), RecordType::Definition);
    /// ```
    #[must_use]
    pub fn classify(line: &str) -> Self {
        if let Some(kind) = line.chars().next().and_then(Self::from_marker) {
            return kind;
        }
        if line.ends_with(".gif") {
            RecordType::Animation
        } else if line.ends_with(".jpg") {
            RecordType::Image
        } else if line.ends_with(".html") {
            RecordType::WebPage
        } else {
            RecordType::Definition
        }
    }

    /// Returns the type whose seed lines start with `marker`.
    pub(crate) const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '-' => Some(RecordType::Sound),
            '+' => Some(RecordType::Music),
            '*' => Some(RecordType::Voice),
            '/' => Some(RecordType::Translation),
            _ => None,
        }
    }
}

impl From<RecordType> for u32 {
    fn from(kind: RecordType) -> u32 {
        kind.tag()
    }
}
