//! Autocomplete endpoint

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    Json,
};
use recfilter_common::logging::LOG_TARGET;
use recfilter_common::ArtistId;
use tracing::warn;

use crate::autocomplete::{autocomplete, Match};
use crate::{ApiResult, AppState};

/// Last value of `q`, or empty when absent
///
/// Raw pairs are taken so a repeated `q` does not fail the request.
fn last_query(params: &[(String, String)]) -> String {
    params
        .iter()
        .rev()
        .find(|(key, _)| key == "q")
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// GET /autocomplete/:artist_id?q=...
///
/// Returns `[{ "value": title, "label": title }, ...]` for every song of the
/// artist whose title contains `q`. Unknown or undecodable artist ids yield
/// `[]`.
pub async fn autocomplete_songs(
    State(state): State<AppState>,
    artist_id: Result<Path<String>, PathRejection>,
    Query(params): Query<Vec<(String, String)>>,
) -> ApiResult<Json<Vec<Match>>> {
    let artist_id = match artist_id {
        Ok(Path(id)) => ArtistId::from(id),
        Err(rejection) => {
            warn!(target: LOG_TARGET, "Unresolvable artist ID ({}), no matches", rejection);
            return Ok(Json(Vec::new()));
        }
    };
    let q = last_query(&params);

    let matches = autocomplete(state.catalog.as_ref(), &artist_id, &q).await?;

    Ok(Json(matches))
}
