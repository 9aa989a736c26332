use async_trait::async_trait;
use aws_sdk_dynamodb::config::http::HttpResponse;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::operation::put_item::{PutItemError, PutItemOutput};
use aws_sdk_dynamodb::types::AttributeValue;
use lambda_runtime::tracing;
use model::record::ExponentRecord;
use std::collections::HashMap;
use store::StoreErrorReason::{BackendFailure, BadRecord};
use store::StoreOperation::PutRecord;
use store::{RecordStore, StoreError};

/// Writes records to a single DynamoDB table keyed by `ID`.
pub struct DynamoDbRecordStore {
    table_name: String,
    dynamodb_client: aws_sdk_dynamodb::Client,
}

impl DynamoDbRecordStore {
    pub fn new(dynamodb_client: aws_sdk_dynamodb::Client, table_name: impl Into<String>) -> Self {
        DynamoDbRecordStore {
            table_name: table_name.into(),
            dynamodb_client,
        }
    }

    async fn put_item(
        &self,
        item: HashMap<String, AttributeValue>,
    ) -> Result<PutItemOutput, SdkError<PutItemError, HttpResponse>> {
        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
    }
}

#[async_trait]
impl RecordStore for DynamoDbRecordStore {
    async fn put_record(&self, record: ExponentRecord) -> Result<(), StoreError> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(&record)
            .map_err(|err| StoreError::new(record.id.clone(), PutRecord, BadRecord(err.to_string())))?;

        tracing::debug!(table = %self.table_name, id = %record.id, "Putting record");

        self.put_item(item).await.map_err(|err| {
            // The plain SdkError display drops the service message
            let description: String = DisplayErrorContext(&err).to_string();

            StoreError::new(record.id.clone(), PutRecord, BackendFailure(description.into()))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::DynamoDbRecordStore;
    use aws_sdk_dynamodb::operation::put_item::PutItemOutput;
    use aws_sdk_dynamodb::types::AttributeValue;
    use aws_smithy_mocks::{mock, Rule};
    use model::record::{ExponentRecord, ID, LATEST_GREETING_TIME};
    use store::{RecordStore, StoreErrorReason, StoreOperation};
    use test_utils::{
        mock_dynamodb_client, put_item_throttled_rule, TEST_TABLE, THROTTLED_MESSAGE,
    };

    fn record() -> ExponentRecord {
        ExponentRecord::new(
            "1024.0".to_string(),
            "Fri, 05 Jan 2024 09:05:03 +0000".to_string(),
        )
    }

    #[tokio::test]
    async fn put_record_writes_string_attributes_to_table() {
        let put_item_rule: Rule = mock!(aws_sdk_dynamodb::Client::put_item)
            .match_requests(|input| {
                let item = input.item().expect("Item should be set");

                input.table_name() == Some(TEST_TABLE)
                    && item.len() == 2
                    && item.get(ID) == Some(&AttributeValue::S("1024.0".to_string()))
                    && item.get(LATEST_GREETING_TIME)
                        == Some(&AttributeValue::S(
                            "Fri, 05 Jan 2024 09:05:03 +0000".to_string(),
                        ))
            })
            .sequence()
            .output(|| PutItemOutput::builder().build())
            .repeatedly()
            .build();

        let store: DynamoDbRecordStore =
            DynamoDbRecordStore::new(mock_dynamodb_client(&put_item_rule), TEST_TABLE);

        store
            .put_record(record())
            .await
            .expect("Put should succeed against the mock");

        assert_eq!(1, put_item_rule.num_calls());
    }

    #[tokio::test]
    async fn put_record_reports_backend_failure() {
        let put_item_rule: Rule = put_item_throttled_rule();
        let store: DynamoDbRecordStore =
            DynamoDbRecordStore::new(mock_dynamodb_client(&put_item_rule), TEST_TABLE);

        let err = store
            .put_record(record())
            .await
            .expect_err("Throttled put should fail");

        assert_eq!("1024.0", err.record_id);
        assert_eq!(StoreOperation::PutRecord, err.operation);
        assert!(matches!(err.reason, StoreErrorReason::BackendFailure(_)));
        assert!(err.to_string().contains(THROTTLED_MESSAGE));
    }
}
