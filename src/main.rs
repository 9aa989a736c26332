use crate::config::Config;
use aws_config::BehaviorVersion;
use handler::clock::SystemClock;
use handler::handler_fn;
use lambda_runtime::{service_fn, tracing};
use model::Error;
use std::sync::Arc;
use store::RecordStore;
use store_dynamodb::DynamoDbRecordStore;

mod config;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    let config: Config = Config::from_env();

    tracing::info!(table = %config.table_name, "Starting exponent handler");

    // Shared by every invocation in this process
    let dynamodb_client: aws_sdk_dynamodb::Client =
        aws_sdk_dynamodb::Client::new(&aws_config::load_defaults(BehaviorVersion::latest()).await);
    let store: Arc<dyn RecordStore> =
        Arc::new(DynamoDbRecordStore::new(dynamodb_client, config.table_name));

    lambda_runtime::run(service_fn(handler_fn(store, Arc::new(SystemClock)))).await
}
