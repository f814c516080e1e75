mod annotation;
mod map_region;
mod result_aggregator;
mod search_session;

pub use annotation::Annotation;
pub use map_region::MapRegion;
pub use result_aggregator::{ResultAggregator, SetResultsOutcome};
pub use search_session::{
    FetchPolicy, LocationFix, RequestSequence, SearchCompletion, SearchSession,
};
