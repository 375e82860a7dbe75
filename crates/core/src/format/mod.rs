//! Parsing of the common Unix `ar` container format.
//!
//! An archive is a `!<arch>\n` magic followed by a sequence of members, each
//! introduced by a fixed 60-byte header. Member data regions are 2-byte
//! aligned; an odd-sized member is followed by one pad byte that is not part
//! of its content. Names longer than the 16-byte header field use the BSD
//! extended convention: a `#1/<N>` marker in the name field means the real
//! name is stored as the first `N` bytes of the data region, NUL-padded.
//!
//! Parsing is a pure, single-pass walk over a byte slice. [`parse`] validates
//! the magic eagerly and returns a lazy [`Members`] iterator, so header
//! corruption deep inside an archive surfaces only when iteration reaches it.

use std::collections::HashMap;

use thiserror::Error;

/// Magic signature every archive must start with.
pub const MAGIC: &[u8; 8] = b"!<arch>\n";

/// Suffix that identifies relocatable object members. Anything else in the
/// container (symbol tables, string tables) is skipped.
pub const OBJECT_SUFFIX: &str = ".o";

pub(crate) const HEADER_LEN: usize = 60;
pub(crate) const NAME_LEN: usize = 16;
pub(crate) const SIZE_OFFSET: usize = 48;
pub(crate) const SIZE_LEN: usize = 10;

/// Errors produced while walking an archive's bytes.
///
/// All offsets are absolute byte positions in the input, so a corrupt input
/// can be diagnosed with a hex dump.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// The input does not begin with the `!<arch>\n` signature.
    #[error("missing `!<arch>` magic at the start of the archive")]
    BadMagic,
    /// A member header or data region extends past the end of the input.
    #[error("archive truncated at byte offset {offset}")]
    Truncated { offset: usize },
    /// The decimal size field of a member header did not parse.
    #[error("invalid member size field {field:?} at byte offset {offset}")]
    BadSize { offset: usize, field: String },
}

/// One object member extracted from an archive.
///
/// `name` is the resolved on-disk member filename, already disambiguated if
/// the same name occurred more than once in the source archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub content: Vec<u8>,
}

/// Validate the archive magic and return a lazy member iterator.
///
/// The iterator yields only object members (names ending in `.o`); other
/// members still advance the read position correctly. Duplicate names within
/// this archive are renamed `foo_dup2.o`, `foo_dup3.o`, ... so that no member
/// silently shadows another.
pub fn parse(bytes: &[u8]) -> Result<Members<'_>, FormatError> {
    if bytes.len() < MAGIC.len() || &bytes[..MAGIC.len()] != MAGIC {
        return Err(FormatError::BadMagic);
    }
    Ok(Members { bytes, pos: MAGIC.len(), name_counts: HashMap::new(), failed: false })
}

/// Lazy iterator over an archive's object members.
///
/// Single pass, not restartable. After yielding an error the iterator is
/// exhausted; a corrupt header leaves no way to find the next one.
pub struct Members<'a> {
    bytes: &'a [u8],
    pos: usize,
    name_counts: HashMap<String, u32>,
    failed: bool,
}

impl<'a> Members<'a> {
    /// Resolve the member name and locate its content region.
    ///
    /// Returns `(name, content_start, content_len)` relative to the whole
    /// input. An empty name means the member has no usable filename and is
    /// skipped by the caller.
    fn resolve_name(
        &self,
        name_field: &[u8],
        data_start: usize,
        declared_size: usize,
    ) -> Result<(String, usize, usize), FormatError> {
        let raw = String::from_utf8_lossy(name_field);
        if let Some(digits) = raw.strip_prefix("#1/") {
            // BSD extended name: the first N data bytes are the filename.
            let Ok(name_len) = digits.trim_end().parse::<usize>() else {
                // Unparseable marker; treat as unnamed so the member is
                // skipped while the cursor still advances.
                return Ok((String::new(), data_start, declared_size));
            };
            if name_len > declared_size || data_start + name_len > self.bytes.len() {
                return Err(FormatError::Truncated { offset: data_start });
            }
            let name_bytes = &self.bytes[data_start..data_start + name_len];
            let name =
                String::from_utf8_lossy(name_bytes).trim_end_matches('\0').to_string();
            Ok((name, data_start + name_len, declared_size - name_len))
        } else {
            let name = raw.trim_end().trim_end_matches('/').to_string();
            Ok((name, data_start, declared_size))
        }
    }

    /// Rename repeat occurrences of `name` within this archive.
    ///
    /// Occurrence k (k >= 2) of `foo.o` becomes `foo_dup<k>.o`, keeping every
    /// member extractable instead of letting later ones overwrite earlier
    /// ones as `ar x` would.
    fn disambiguate(&mut self, name: String) -> String {
        let count = self.name_counts.entry(name.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            name
        } else {
            let stem = name.strip_suffix(OBJECT_SUFFIX).unwrap_or(&name);
            format!("{stem}_dup{count}{OBJECT_SUFFIX}")
        }
    }
}

impl<'a> Iterator for Members<'a> {
    type Item = Result<Member, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if self.pos >= self.bytes.len() {
                return None;
            }
            if self.pos + HEADER_LEN > self.bytes.len() {
                self.failed = true;
                return Some(Err(FormatError::Truncated { offset: self.pos }));
            }

            let header = &self.bytes[self.pos..self.pos + HEADER_LEN];
            let name_field = &header[..NAME_LEN];
            let size_field = &header[SIZE_OFFSET..SIZE_OFFSET + SIZE_LEN];
            let size_text = String::from_utf8_lossy(size_field).trim_end().to_string();
            let Ok(declared_size) = size_text.parse::<usize>() else {
                self.failed = true;
                return Some(Err(FormatError::BadSize {
                    offset: self.pos,
                    field: size_text,
                }));
            };

            let data_start = self.pos + HEADER_LEN;
            if data_start + declared_size > self.bytes.len() {
                self.failed = true;
                return Some(Err(FormatError::Truncated { offset: data_start }));
            }

            let resolved = match self.resolve_name(name_field, data_start, declared_size) {
                Ok(resolved) => resolved,
                Err(err) => {
                    self.failed = true;
                    return Some(Err(err));
                }
            };
            let (name, content_start, content_len) = resolved;

            // Advance past the data region and the alignment pad byte, which
            // is present whenever the declared size is odd (except at EOF).
            let mut next_pos = data_start + declared_size;
            if next_pos % 2 == 1 && next_pos < self.bytes.len() {
                next_pos += 1;
            }
            self.pos = next_pos;

            // Symbol tables, string tables, and unnamed members are not
            // object code; skip them but keep walking.
            if name.is_empty() || !name.ends_with(OBJECT_SUFFIX) {
                continue;
            }

            let name = self.disambiguate(name);
            let content = self.bytes[content_start..content_start + content_len].to_vec();
            return Some(Ok(Member { name, content }));
        }
    }
}
