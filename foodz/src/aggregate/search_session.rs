use std::fmt::Display;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use super::{MapRegion, ResultAggregator, SetResultsOutcome};
use crate::search::{BusinessSearch, Coordinates, SearchError, SearchQuery, SearchResult};

/// start-order number of one fetch. later fetches get larger numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestSequence(pub u64);

impl Display for RequestSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// a single device location report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LocationFix> for Coordinates {
    fn from(value: LocationFix) -> Self {
        Coordinates::new(value.latitude, value.longitude)
    }
}

/// when a location fix triggers a search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// search once on the first fix, then ignore further fixes
    #[default]
    FirstFix,
    /// search again on every fix
    EveryFix,
}

/// the single message a fetch delivers when it finishes
#[derive(Debug)]
pub struct SearchCompletion {
    pub sequence: RequestSequence,
    pub query: SearchQuery,
    pub outcome: Result<SearchResult, SearchError>,
}

impl SearchCompletion {
    /// hands a successful outcome to the aggregator. failed searches leave
    /// the aggregator untouched and return the error to the caller.
    pub fn apply_to(
        self,
        aggregator: &mut ResultAggregator,
    ) -> Result<SetResultsOutcome, SearchError> {
        let results = self.outcome?;
        Ok(aggregator.set_results(self.sequence, results))
    }
}

/// connects location fixes to searches. each search runs on its own tokio
/// task and posts exactly one [`SearchCompletion`] to the receiver returned
/// by [`SearchSession::new`]. the owner of that receiver applies the
/// completions on its own execution context.
pub struct SearchSession<S: BusinessSearch> {
    search: Arc<S>,
    policy: FetchPolicy,
    next_sequence: u64,
    listening: bool,
    user_location: Option<Coordinates>,
    completions: UnboundedSender<SearchCompletion>,
}

impl<S: BusinessSearch> SearchSession<S> {
    pub fn new(search: Arc<S>, policy: FetchPolicy) -> (Self, UnboundedReceiver<SearchCompletion>) {
        let (completions, rx) = mpsc::unbounded_channel();
        let session = Self {
            search,
            policy,
            next_sequence: 0,
            listening: true,
            user_location: None,
            completions,
        };
        (session, rx)
    }

    /// records a location fix and starts a search there if the policy
    /// allows it. must be called from within a tokio runtime.
    ///
    /// # Returns
    ///
    /// * the sequence of the started search, or None when the fix was ignored
    pub fn on_fix(&mut self, fix: LocationFix) -> Option<RequestSequence> {
        if !self.listening {
            log::debug!("ignoring location fix {fix:?}, session no longer listening");
            return None;
        }
        if self.policy == FetchPolicy::FirstFix {
            self.listening = false;
        }
        let coordinates = Coordinates::from(fix);
        self.user_location = Some(coordinates);
        Some(self.fetch_at(coordinates))
    }

    /// starts a search at the given coordinates regardless of policy.
    /// must be called from within a tokio runtime.
    pub fn fetch_at(&mut self, coordinates: Coordinates) -> RequestSequence {
        self.next_sequence += 1;
        let sequence = RequestSequence(self.next_sequence);
        let query = SearchQuery::new(coordinates.latitude, coordinates.longitude);
        let search = self.search.clone();
        let completions = self.completions.clone();
        log::info!(
            "starting search {sequence} at ({}, {})",
            coordinates.latitude,
            coordinates.longitude
        );
        let search_query = query.clone();
        tokio::spawn(async move {
            // the search runs on its own task so a panicking back end still
            // produces a completion
            let search_task = tokio::spawn(async move { search.search(&search_query).await });
            let outcome = match search_task.await {
                Ok(outcome) => outcome,
                Err(e) => Err(SearchError::TokioError(format!(
                    "search {sequence} did not finish: {e}"
                ))),
            };
            if let Err(e) = &outcome {
                log::warn!("search {sequence} failed: {e}");
            }
            let completion = SearchCompletion {
                sequence,
                query,
                outcome,
            };
            if completions.send(completion).is_err() {
                log::debug!("search {sequence} finished after its receiver was dropped");
            }
        });
        sequence
    }

    pub fn user_location(&self) -> Option<Coordinates> {
        self.user_location
    }

    pub fn map_region(&self) -> Option<MapRegion> {
        self.user_location.map(MapRegion::around)
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }
}
