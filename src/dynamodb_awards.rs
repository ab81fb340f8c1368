use anyhow::{Context, Result};
use aws_sdk_dynamodb::{types::AttributeValue, Client};
use lambda_http::tracing::{self};

use crate::{config::MOVIE_AWARDS_TABLE_NAME, model::award::AwardRecord};

/// Queries the movie awards table for every award the given movie received
/// from the given award body.
#[tracing::instrument(skip(dynamodb_client))]
pub async fn query_awards(
    dynamodb_client: &Client,
    movie_id: i64,
    award_body: &str,
) -> Result<Vec<AwardRecord>> {
    let table_name = &*MOVIE_AWARDS_TABLE_NAME;

    tracing::trace!(movie_id = ?movie_id, award_body = ?award_body, "querying movie awards");

    let query_output = dynamodb_client
        .query()
        .table_name(table_name)
        .key_condition_expression("movieId = :m AND awardBody = :a")
        .expression_attribute_values(":m", AttributeValue::N(movie_id.to_string()))
        .expression_attribute_values(":a", AttributeValue::S(award_body.to_string()))
        .send()
        .await
        .context("failed to query the movie awards table")?;

    let items = query_output.items.unwrap_or_default();

    tracing::trace!(movie_id = ?movie_id, award_body = ?award_body, count = items.len(), "got query result");

    let awards = serde_dynamo::from_items(items)
        .context("should be able to deserialize award records")?;

    Ok(awards)
}
