use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A single record from the movie awards table. The table is keyed by
/// `movieId` (partition key) and `awardBody` (sort key); every other
/// attribute is award metadata that we pass through to the caller as-is.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRecord {
    pub movie_id: i64,
    pub award_body: String,
    #[serde(flatten)]
    pub details: HashMap<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::types::AttributeValue;
    use serde_json::json;

    #[test]
    fn test_award_record_from_item() {
        let mut item: HashMap<String, AttributeValue> = HashMap::new();
        item.insert("movieId".to_string(), AttributeValue::N("1234".to_string()));
        item.insert("awardBody".to_string(), AttributeValue::S("Oscar".to_string()));
        item.insert(
            "category".to_string(),
            AttributeValue::S("Best Picture".to_string()),
        );
        item.insert("year".to_string(), AttributeValue::N("2020".to_string()));

        let record: AwardRecord = serde_dynamo::from_item(item).unwrap();

        assert_eq!(record.movie_id, 1234);
        assert_eq!(record.award_body, "Oscar");
        assert_eq!(record.details.get("category"), Some(&json!("Best Picture")));
        assert_eq!(record.details.get("year"), Some(&json!(2020)));
    }

    #[test]
    fn test_award_record_wire_shape() {
        let record: AwardRecord = serde_dynamo::from_item(HashMap::from([
            ("movieId".to_string(), AttributeValue::N("1234".to_string())),
            ("awardBody".to_string(), AttributeValue::S("Oscar".to_string())),
            (
                "category".to_string(),
                AttributeValue::S("Best Picture".to_string()),
            ),
        ]))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "movieId": 1234,
                "awardBody": "Oscar",
                "category": "Best Picture",
            })
        );
    }
}
