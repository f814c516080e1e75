use super::{Annotation, RequestSequence};
use crate::search::{Business, SearchResult};

/// outcome of offering a completed search to the aggregator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetResultsOutcome {
    /// the results replaced the stored collection
    Applied,
    /// a newer search was already applied, the results were dropped
    Stale { applied: RequestSequence },
}

/// holds the businesses of the most recent search along with the map
/// annotations derived from them.
///
/// mutation requires `&mut self`. callers sharing an aggregator between
/// threads must synchronize access themselves.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    businesses: SearchResult,
    annotations: Vec<Annotation>,
    applied: Option<RequestSequence>,
}

impl ResultAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// replaces the stored businesses unless results from a newer search
    /// were already applied. annotations are re-derived 1:1 in the same
    /// order. a sequence equal to the applied one is accepted.
    pub fn set_results(
        &mut self,
        sequence: RequestSequence,
        results: SearchResult,
    ) -> SetResultsOutcome {
        if let Some(applied) = self.applied {
            if sequence < applied {
                log::debug!(
                    "discarding results of search {sequence}, search {applied} already applied"
                );
                return SetResultsOutcome::Stale { applied };
            }
        }
        self.annotations = results.iter().map(Annotation::from).collect();
        self.businesses = results;
        self.applied = Some(sequence);
        SetResultsOutcome::Applied
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    pub fn get(&self, index: usize) -> Option<&Business> {
        self.businesses.get(index)
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn applied_sequence(&self) -> Option<RequestSequence> {
        self.applied
    }

    /// finds the first stored business located exactly at (latitude,
    /// longitude). coordinates are compared without tolerance, which holds
    /// because annotations copy the stored values.
    pub fn find_by_coordinate(&self, latitude: f64, longitude: f64) -> Option<&Business> {
        self.businesses.iter().find(|b| {
            b.coordinates.latitude == latitude && b.coordinates.longitude == longitude
        })
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }
}
