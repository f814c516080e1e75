use std::io::IsTerminal;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

use super::{render_detail, render_row, FoodzAppConfig, FoodzAppError};
use crate::aggregate::{
    LocationFix, ResultAggregator, SearchCompletion, SearchSession, SetResultsOutcome,
};
use crate::detail::BusinessDetail;
use crate::presentation::BusinessRow;
use crate::search::constants::{DEFAULT_LATITUDE, DEFAULT_LONGITUDE};
use crate::search::{BusinessSearch, Coordinates};

/// command line tool for finding nearby pizza, mexican, chinese and burger
/// places with the Yelp Fusion API
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct FoodzCliArguments {
    /// select the foodz operation to run
    #[command(subcommand)]
    pub op: FoodzOperation,
}

#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct LocationArgs {
    /// latitude of the search location, defaults to Times Square
    #[arg(long, allow_hyphen_values = true)]
    pub latitude: Option<f64>,
    /// longitude of the search location, defaults to Times Square
    #[arg(long, allow_hyphen_values = true)]
    pub longitude: Option<f64>,
    /// path to a toml or json file with foodz parameters
    #[arg(short, long)]
    pub config_file: Option<String>,
}

impl LocationArgs {
    pub fn fix(&self) -> LocationFix {
        LocationFix {
            latitude: self.latitude.unwrap_or(DEFAULT_LATITUDE),
            longitude: self.longitude.unwrap_or(DEFAULT_LONGITUDE),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum FoodzOperation {
    /// searches around a location and prints one row per business,
    /// nearest first
    Search {
        #[command(flatten)]
        location: LocationArgs,
        /// print the rows as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// searches around a location and prints the detail view of one
    /// business from the results
    Detail {
        #[command(flatten)]
        location: LocationArgs,
        /// Yelp id of the business
        #[arg(short, long)]
        business_id: String,
    },
}

impl FoodzOperation {
    pub fn run(&self) -> Result<(), FoodzAppError> {
        match self {
            FoodzOperation::Search { location, json } => {
                let (aggregator, _) = search_once(location)?;
                let rows = aggregator
                    .businesses()
                    .iter()
                    .map(BusinessRow::from)
                    .collect::<Vec<_>>();
                if *json {
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                } else {
                    let color = std::io::stdout().is_terminal();
                    for row in rows.iter() {
                        println!("{}", render_row(row, color));
                    }
                }
                Ok(())
            }
            FoodzOperation::Detail {
                location,
                business_id,
            } => {
                let (aggregator, user_location) = search_once(location)?;
                let business = aggregator
                    .find_by_id(business_id)
                    .ok_or_else(|| FoodzAppError::BusinessNotFound(business_id.clone()))?;
                println!("{}", render_detail(&BusinessDetail::new(business, user_location)));
                Ok(())
            }
        }
    }
}

/// feeds a single fix through a search session and applies the completion
fn search_once(
    location: &LocationArgs,
) -> Result<(ResultAggregator, Option<Coordinates>), FoodzAppError> {
    let conf = FoodzAppConfig::load(location.config_file.as_deref())?;
    let client = conf.client_config().build()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| {
            FoodzAppError::TokioError(format!("failure creating async rust tokio runtime: {e}"))
        })?;

    runtime.block_on(async {
        let (mut session, completions) = SearchSession::new(Arc::new(client), conf.fetch_policy);
        session.on_fix(location.fix());
        apply_first_completion(session, completions).await
    })
}

/// waits for the first completion of a session and applies it to a fresh
/// aggregator. the session is dropped first, so the started searches hold
/// the only senders and a search that never reports yields
/// [`FoodzAppError::NoCompletion`] instead of waiting forever.
async fn apply_first_completion<S: BusinessSearch>(
    session: SearchSession<S>,
    mut completions: UnboundedReceiver<SearchCompletion>,
) -> Result<(ResultAggregator, Option<Coordinates>), FoodzAppError> {
    let user_location = session.user_location();
    drop(session);
    let completion = completions
        .recv()
        .await
        .ok_or(FoodzAppError::NoCompletion)?;

    let mut aggregator = ResultAggregator::new();
    let sequence = completion.sequence;
    if let SetResultsOutcome::Stale { applied } = completion.apply_to(&mut aggregator)? {
        log::warn!("results of search {sequence} superseded by search {applied}");
    }
    log::info!("search {sequence} found {} businesses", aggregator.len());
    Ok((aggregator, user_location))
}

#[cfg(test)]
mod test {
    use super::{apply_first_completion, FoodzCliArguments, FoodzOperation};
    use crate::aggregate::{FetchPolicy, LocationFix, SearchSession};
    use crate::app::FoodzAppError;
    use crate::search::{
        Business, BusinessSearch, Category, Coordinates, SearchError, SearchQuery, SearchResult,
    };
    use clap::Parser;
    use std::future::Future;
    use std::sync::Arc;
    use std::time::Duration;

    /// answers every search with one business at the query location
    struct FixedSearch;

    impl BusinessSearch for FixedSearch {
        fn search(
            &self,
            query: &SearchQuery,
        ) -> impl Future<Output = Result<SearchResult, SearchError>> + Send {
            let business = Business {
                id: String::from("corner-slice"),
                name: String::from("Corner Slice"),
                price: Some(String::from("$")),
                categories: vec![Category {
                    alias: String::from("pizza"),
                    title: String::from("Pizza"),
                }],
                coordinates: Coordinates::new(query.latitude, query.longitude),
                distance_meters: 12.0,
                image_url: String::new(),
                phone: String::new(),
                detail_url: None,
            };
            async move { Ok(vec![business]) }
        }
    }

    #[tokio::test]
    async fn test_apply_first_completion() {
        let (mut session, completions) =
            SearchSession::new(Arc::new(FixedSearch), FetchPolicy::FirstFix);
        session.on_fix(LocationFix {
            latitude: 40.7,
            longitude: -73.9,
        });
        let (aggregator, user_location) = apply_first_completion(session, completions)
            .await
            .unwrap();
        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.businesses()[0].id, "corner-slice");
        assert_eq!(user_location, Some(Coordinates::new(40.7, -73.9)));
    }

    #[tokio::test]
    async fn test_no_search_started_is_no_completion() {
        let (session, completions) =
            SearchSession::new(Arc::new(FixedSearch), FetchPolicy::FirstFix);
        let result = tokio::time::timeout(
            Duration::from_secs(2),
            apply_first_completion(session, completions),
        )
        .await
        .expect("waiting for a completion should end once the session is dropped");
        assert!(matches!(result, Err(FoodzAppError::NoCompletion)));
    }

    #[test]
    fn test_parse_search_defaults() {
        let args = FoodzCliArguments::parse_from(["foodz", "search"]);
        match args.op {
            FoodzOperation::Search { location, json } => {
                let fix = location.fix();
                assert_eq!(fix.latitude, 40.758896);
                assert_eq!(fix.longitude, -73.985130);
                assert!(!json);
                assert_eq!(location.config_file, None);
            }
            _ => panic!("expected search operation"),
        }
    }

    #[test]
    fn test_parse_detail() {
        let args = FoodzCliArguments::parse_from([
            "foodz",
            "detail",
            "--latitude",
            "37.7749",
            "--longitude",
            "-122.4194",
            "--business-id",
            "tartine-bakery-san-francisco",
            "-c",
            "foodz.toml",
        ]);
        match args.op {
            FoodzOperation::Detail {
                location,
                business_id,
            } => {
                assert_eq!(business_id, "tartine-bakery-san-francisco");
                assert_eq!(location.fix().longitude, -122.4194);
                assert_eq!(location.config_file.as_deref(), Some("foodz.toml"));
            }
            _ => panic!("expected detail operation"),
        }
    }
}
