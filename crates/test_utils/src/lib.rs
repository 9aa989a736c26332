use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::error::ProvisionedThroughputExceededException;
use aws_smithy_mocks::{mock, mock_client, Rule};
use chrono::{DateTime, TimeZone, Utc};
use model::ExponentEvent;
use model::env::EXPONENT_TABLE_NAME;
use serde_json::Value;
use std::env;

/// Test table name
pub const TEST_TABLE: &str = "exponent_table";

/// Message carried by the throttling error from `put_item_throttled_rule`
pub const THROTTLED_MESSAGE: &str = "Rate of requests exceeds the allowed throughput";

/// Setup default environment variables used in testing
pub fn setup_default_env() {
    unsafe {
        env::set_var(EXPONENT_TABLE_NAME, TEST_TABLE);
    }
}

/// Build an event from a JSON object literal
pub fn event_from_json(value: Value) -> ExponentEvent {
    serde_json::from_value(value).expect("Test event should be a valid ExponentEvent")
}

/// Fri, 05 Jan 2024 09:05:03 +0000
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 5, 9, 5, 3)
        .single()
        .expect("Fixed instant should be valid")
}

/// A `put_item` rule which always succeeds
pub fn put_item_ok_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .output(|| PutItemOutput::builder().build())
        .repeatedly()
        .build()
}

/// A `put_item` rule which always fails with a throttling error
pub fn put_item_throttled_rule() -> Rule {
    mock!(aws_sdk_dynamodb::Client::put_item)
        .match_requests(|_| true)
        .sequence()
        .error(|| {
            PutItemError::ProvisionedThroughputExceededException(
                ProvisionedThroughputExceededException::builder()
                    .message(THROTTLED_MESSAGE)
                    .build(),
            )
        })
        .repeatedly()
        .build()
}

/// A mock DynamoDB client answering with the given rule
pub fn mock_dynamodb_client(rule: &Rule) -> aws_sdk_dynamodb::Client {
    mock_client!(aws_sdk_dynamodb, [rule])
}
