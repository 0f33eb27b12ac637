//! Snapshot boundary — the serde seam with the persistence layer.
//!
//! The API layer delivers "all members + their relationships" for one
//! family as a JSON array; this module parses it into [`Member`]s and
//! checks the one input contract the graph relies on (member IDs
//! unique). Everything past this boundary degrades instead of
//! erroring.

use crate::model::Member;
use crate::{Error, Result};

use hashbrown::HashSet;

/// Parse a member snapshot from JSON.
pub fn from_json(input: &str) -> Result<Vec<Member>> {
    let members: Vec<Member> = serde_json::from_str(input)?;
    validate(&members)?;
    Ok(members)
}

/// Serialize a member snapshot back to JSON, e.g. for fixtures or a
/// client-side cache.
pub fn to_json(members: &[Member]) -> Result<String> {
    Ok(serde_json::to_string_pretty(members)?)
}

/// Check the snapshot's input contract: member IDs are unique.
pub fn validate(members: &[Member]) -> Result<()> {
    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.id) {
            return Err(Error::DuplicateMember(member.id));
        }
    }
    Ok(())
}
