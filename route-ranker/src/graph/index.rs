//! Dense station indexing.

use std::collections::HashMap;

use crate::domain::{RouteRecord, StationId};

/// Bijection between station ids and dense indices `0..len()`.
///
/// Indices are handed out in first-seen order while scanning each record's
/// origin and then its destination, so the same record order always gives
/// the same mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationIndex {
    by_id: HashMap<StationId, usize>,
    stations: Vec<StationId>,
}

impl StationIndex {
    /// Index every station mentioned in `records`.
    pub fn from_records(records: &[RouteRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            index.insert(record.origin());
            index.insert(record.destination());
        }
        index
    }

    /// Returns the index of `station`, assigning the next free one if new.
    pub fn insert(&mut self, station: StationId) -> usize {
        if let Some(&idx) = self.by_id.get(&station) {
            return idx;
        }
        let idx = self.stations.len();
        self.by_id.insert(station, idx);
        self.stations.push(station);
        idx
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn index_of(&self, station: StationId) -> Option<usize> {
        self.by_id.get(&station).copied()
    }

    pub fn station(&self, idx: usize) -> Option<StationId> {
        self.stations.get(idx).copied()
    }

    /// Stations in assignment order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    /// Translate a path of indices back to station ids.
    ///
    /// Returns `None` if any index is outside the mapping.
    pub fn resolve(&self, path: &[usize]) -> Option<Vec<StationId>> {
        path.iter().map(|&idx| self.station(idx)).collect()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::RouteId;
    use proptest::prelude::*;

    fn records_strategy() -> impl Strategy<Value = Vec<RouteRecord>> {
        proptest::collection::vec((0u64..20, 0u64..20), 0..40).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(from, to)| {
                    RouteRecord::new(
                        RouteId::from(0),
                        StationId::from(from),
                        StationId::from(to),
                        0.0,
                        0,
                    )
                    .unwrap()
                })
                .collect()
        })
    }

    proptest! {
        /// Re-indexing the same records gives the same mapping
        #[test]
        fn deterministic(records in records_strategy()) {
            prop_assert_eq!(
                StationIndex::from_records(&records),
                StationIndex::from_records(&records)
            );
        }

        /// Every mentioned station has an index, and indices are 0..len
        #[test]
        fn dense_and_complete(records in records_strategy()) {
            let index = StationIndex::from_records(&records);

            for record in &records {
                prop_assert!(index.index_of(record.origin()).is_some());
                prop_assert!(index.index_of(record.destination()).is_some());
            }
            for (idx, &station) in index.stations().iter().enumerate() {
                prop_assert_eq!(index.index_of(station), Some(idx));
                prop_assert_eq!(index.station(idx), Some(station));
            }
        }
    }
}
