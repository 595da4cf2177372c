//! Pure new-liker set difference.
//!
//! "New" likers of a recipient are the users who like the recipient but whom
//! the recipient has **not** reciprocated with an active like — a pass or no
//! decision at all both count as "not reciprocated".
//!
//! The difference is computed over two independently fetched collections; no
//! storage-side join is assumed. A lookup set is built from the outbound
//! likes (`O(|L_out|)`) and the inbound likes are filtered against it
//! (`O(|L_in|)` lookups), so the whole pass is `O(|L_out| + |L_in|)`.

use std::collections::HashSet;

use explore_types::{Decision, UserId};

/// Compute the new likers of a recipient.
///
/// - `outbound`: decisions made *by* the recipient (only `liked = true` rows
///   reciprocate; passes are ignored)
/// - `inbound`: decisions targeting the recipient (only `liked = true` rows
///   are likers)
///
/// Returns the inbound likers' actor IDs minus the reciprocated set, in
/// inbound order. No timestamps: the result is a bare ID list by design.
#[must_use]
pub fn new_likers(outbound: &[Decision], inbound: &[Decision]) -> Vec<UserId> {
    let reciprocated: HashSet<UserId> = outbound
        .iter()
        .filter(|d| d.liked)
        .map(|d| d.recipient)
        .collect();

    inbound
        .iter()
        .filter(|d| d.liked && !reciprocated.contains(&d.actor))
        .map(|d| d.actor)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
