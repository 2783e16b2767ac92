use mime_guess::MimeGuess;

use crate::entry::Entry;

/// Broad media category of an entry, as implied by its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

pub struct MimeResolver;

impl MimeResolver {
    /// Guesses the MIME type for an entry name.
    /// Extension-based only; the entry's contents are never read.
    pub fn guess_mime_type(name: &str) -> String {
        let guess = MimeGuess::from_path(name);
        guess.first_or_octet_stream().to_string()
    }

    pub fn media_kind(name: &str) -> MediaKind {
        match MimeGuess::from_path(name).first() {
            Some(mime) if mime.type_() == mime_guess::mime::IMAGE => MediaKind::Image,
            Some(mime) if mime.type_() == mime_guess::mime::VIDEO => MediaKind::Video,
            _ => MediaKind::Other,
        }
    }

    pub fn media_kind_of(entry: &dyn Entry) -> MediaKind {
        Self::media_kind(entry.name())
    }
}
