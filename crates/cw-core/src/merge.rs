//! Reconcile freshly fetched events with the local store

use tracing::info;

use crate::event::{Event, EventSet};
use crate::store::EventStore;
use crate::Result;

/// Result of one merge pass
#[derive(Debug, Clone)]
pub struct MergeOutcome {
    /// Stored events followed by newly stored upstream events
    pub events: EventSet,
    /// Number of rows written during this pass
    pub inserted: usize,
}

/// Persist upstream events whose titles are not stored yet and return the
/// union of stored and upstream events.
///
/// Stored variants win over same-titled upstream ones. Each insert commits on
/// its own, so an error midway leaves the earlier inserts in place.
pub fn merge_events<I>(store: &EventStore, upstream: I) -> Result<MergeOutcome>
where
    I: IntoIterator<Item = Event>,
{
    let upstream: EventSet = upstream.into_iter().collect();
    let stored = store.load_all()?;

    let mut inserted = 0;
    for event in upstream.difference(&stored) {
        store.insert(event)?;
        inserted += 1;
    }

    info!(
        "Merged {} stored and {} upstream events ({} new)",
        stored.len(),
        upstream.len(),
        inserted
    );

    Ok(MergeOutcome {
        events: stored.union(upstream),
        inserted,
    })
}
