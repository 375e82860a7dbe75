//! Writing the merged output archive.
//!
//! The writer emits the same container format the parser reads, so the
//! round-trip property (assemble then parse yields the same members) is
//! testable without external tools. Members are sorted by name with byte-wise
//! `Ord`, making output membership a pure function of the retained set,
//! independent of processing order.

use crate::format::{Member, HEADER_LEN, MAGIC, NAME_LEN, SIZE_LEN, SIZE_OFFSET};

/// Build the bytes of an archive containing exactly `members`.
///
/// Every retained member is written even if nothing references it; consumers
/// rely on force-loading self-registering object files. Provenance metadata
/// is never consulted. An empty member set produces a valid empty archive
/// (just the magic).
pub fn assemble(mut members: Vec<Member>) -> Vec<u8> {
    members.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));

    let mut out = Vec::with_capacity(
        MAGIC.len() + members.iter().map(|m| HEADER_LEN + m.content.len() + 1).sum::<usize>(),
    );
    out.extend_from_slice(MAGIC);
    for member in &members {
        write_member(&mut out, &member.name, &member.content);
    }
    out
}

/// Append one member record: header, optional embedded name, content, pad.
fn write_member(out: &mut Vec<u8>, name: &str, content: &[u8]) {
    if name.len() <= NAME_LEN && !name.contains(' ') {
        write_header(out, name, content.len());
        out.extend_from_slice(content);
    } else {
        // BSD extended name: `#1/<N>` in the name field, the NUL-padded name
        // as the first N bytes of the data region. Pad to a 4-byte multiple
        // so the content stays aligned.
        let padded_len = (name.len() + 3) & !3;
        write_header(out, &format!("#1/{padded_len}"), padded_len + content.len());
        out.extend_from_slice(name.as_bytes());
        out.resize(out.len() + (padded_len - name.len()), 0);
        out.extend_from_slice(content);
    }
    // Records are 2-byte aligned; the pad byte is not member content.
    if out.len() % 2 == 1 {
        out.push(b'\n');
    }
}

/// Append a 60-byte member header with the given name field and size.
fn write_header(out: &mut Vec<u8>, name_field: &str, size: usize) {
    push_field(out, name_field, NAME_LEN);
    push_field(out, "0", 12); // mtime
    push_field(out, "0", 6); // uid
    push_field(out, "0", 6); // gid
    push_field(out, "644", 8); // mode
    push_field(out, &size.to_string(), SIZE_LEN);
    out.extend_from_slice(b"`\n");
    debug_assert_eq!(SIZE_OFFSET + SIZE_LEN + 2, HEADER_LEN);
}

/// Append `text` left-aligned and space-padded to exactly `width` bytes.
fn push_field(out: &mut Vec<u8>, text: &str, width: usize) {
    debug_assert!(text.len() <= width, "field {text:?} overflows {width} bytes");
    out.extend_from_slice(text.as_bytes());
    out.resize(out.len() + (width - text.len()), b' ');
}
