//! Content-addressed deduplication of archive members.
//!
//! Members are duplicates iff their content bytes are bit-identical; names
//! play no part. The first occurrence in processing order wins and is never
//! overwritten, which together with a fixed archive order makes the retained
//! set exactly reproducible.

use std::collections::HashSet;
use std::fmt;

use sha2::{Digest, Sha256};

use crate::format::Member;

/// Content hash of one member, used purely for equality testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// SHA-256 over the raw content bytes.
    pub fn of(bytes: &[u8]) -> Self {
        let digest = Sha256::digest(bytes);
        Self(digest.into())
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// The set of retained members, built incrementally with first-write-wins
/// semantics keyed by content fingerprint.
#[derive(Debug, Default)]
pub struct DedupSet {
    members: Vec<Member>,
    seen: HashSet<Fingerprint>,
    discarded: usize,
}

impl DedupSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retain `member` unless its content was already seen.
    ///
    /// Returns `true` if the member was retained. Discarded duplicates are
    /// dropped immediately; they are bit-identical to a retained member and
    /// contribute no new code.
    pub fn insert(&mut self, member: Member) -> bool {
        let fingerprint = Fingerprint::of(&member.content);
        if self.seen.insert(fingerprint) {
            self.members.push(member);
            true
        } else {
            self.discarded += 1;
            false
        }
    }

    /// Number of retained members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of duplicates discarded so far.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Hand the retained members over in insertion order.
    pub fn into_members(self) -> Vec<Member> {
        self.members
    }
}
