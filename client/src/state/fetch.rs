//! Fetch generations for list stores.
//!
//! A list response is only trusted when it answers the newest fetch and no
//! local mutation landed while it was in flight. Otherwise an older response
//! could overwrite a project created a moment ago, or clear `loading` while a
//! newer request is still pending.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

/// Identifies one list request issued by a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    mutations: u64,
}

/// What a store should do with a list response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Newest request and nothing changed locally: replace the items.
    Apply,
    /// A newer request is pending; drop this response and keep loading.
    Superseded,
    /// Local mutations raced the request; drop the items and fetch again.
    Stale,
}

/// Per-store counters for issued fetches and applied mutations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchTracker {
    seq: u64,
    mutations: u64,
}

impl FetchTracker {
    /// Start a new request; any earlier ticket becomes superseded.
    pub fn begin(&mut self) -> FetchTicket {
        self.seq += 1;
        FetchTicket { seq: self.seq, mutations: self.mutations }
    }

    pub fn record_mutation(&mut self) {
        self.mutations += 1;
    }

    #[must_use]
    pub fn classify(&self, ticket: FetchTicket) -> FetchOutcome {
        if ticket.seq != self.seq {
            FetchOutcome::Superseded
        } else if ticket.mutations != self.mutations {
            FetchOutcome::Stale
        } else {
            FetchOutcome::Apply
        }
    }
}
