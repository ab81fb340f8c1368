mod config;
mod dynamodb_awards;
mod model;

use anyhow::{Context, Result};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use config::{check_env_vars, get_verbose, load_aws_config};
use dynamodb_awards::query_awards;
use model::response::{ErrorResponse, MessageResponse, MoviesResponse};
use serde::Serialize;

use lambda_http::{
    http::StatusCode,
    run, service_fn,
    tracing::{self, subscriber::EnvFilter, trace},
    Body, Error, Request, RequestExt, Response,
};

/// Strict base-10 parsing. Trailing garbage ("123abc") rejects the id.
fn parse_movie_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Pulls `awardBody` and `movieId` out of the request path. The award body
/// must be non-empty and the movie id must be a whole base-10 integer.
fn extract_lookup_params(event: &Request) -> Option<(i64, String)> {
    let path_parameters = event.path_parameters();

    let award_body = path_parameters
        .first("awardBody")
        .filter(|val| !val.is_empty())?;
    let movie_id = path_parameters.first("movieId").and_then(parse_movie_id)?;

    Some((movie_id, award_body.to_string()))
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>> {
    let body = serde_json::to_string(body).context("should be able to serialize response body")?;

    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .context("failed to render response")
}

#[tracing::instrument(skip(dynamodb_client))]
async fn lookup_awards(
    dynamodb_client: &DynamoDbClient,
    movie_id: i64,
    award_body: &str,
) -> Result<Response<Body>> {
    let movies = query_awards(dynamodb_client, movie_id, award_body).await?;

    if movies.is_empty() {
        tracing::trace!(movie_id = ?movie_id, award_body = ?award_body, "no award records found");
        return json_response(
            StatusCode::NOT_FOUND,
            &MessageResponse {
                message: "No movies found",
            },
        );
    }

    tracing::trace!(movie_id = ?movie_id, award_body = ?award_body, count = movies.len(), "found award records");

    json_response(StatusCode::OK, &MoviesResponse { movies })
}

async fn handler(dynamodb_client: &DynamoDbClient, event: Request) -> Result<Response<Body>> {
    let verbose = get_verbose();
    verbose.then(|| trace!(event = ?event, "event info"));

    let Some((movie_id, award_body)) = extract_lookup_params(&event) else {
        return json_response(
            StatusCode::BAD_REQUEST,
            &MessageResponse {
                message: "AwardBody or movieId",
            },
        );
    };

    match lookup_awards(dynamodb_client, movie_id, &award_body).await {
        Ok(response) => Ok(response),
        Err(e) => {
            tracing::error!(movie_id = ?movie_id, award_body = ?award_body, error = ?e, "failed to look up movie awards");
            json_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                &ErrorResponse {
                    error: "Internal server error",
                },
            )
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::subscriber::fmt()
        .with_line_number(true)
        .json()
        .with_env_filter(EnvFilter::from_default_env())
        .with_current_span(true) // Include current span in formatted events
        .with_span_list(false) // Disable nesting all spans
        .flatten_event(true) // Flattens event fields
        .init();

    tracing::trace!("starting lambda handler");

    check_env_vars()?;

    tracing::trace!("environment variables are set correctly");

    let shared_config = &load_aws_config().await;
    let shared_dynamodb_client = &DynamoDbClient::new(shared_config);

    let func =
        service_fn(
            move |event: Request| async move { handler(shared_dynamodb_client, event).await },
        );
    run(func).await
}
