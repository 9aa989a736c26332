use crate::calculation::{power, result_text};
use crate::clock::{format_timestamp, Clock};
use crate::coerce::{coerce_integer, BASE, EXPONENT};
use crate::error::HandlerError;
use lambda_runtime::tracing::{Instrument, Span};
use lambda_runtime::{tracing, LambdaEvent};
use model::record::ExponentRecord;
use model::response::{CalculationBody, HandlerResponse, STATUS_OK};
use model::{Error, ExponentEvent};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use store::RecordStore;

pub mod calculation;
pub mod clock;
pub mod coerce;
pub mod error;

pub type ExponentLambdaEvent = LambdaEvent<ExponentEvent>;

pub type HandlerFuture = Pin<Box<dyn Future<Output = Result<HandlerResponse, Error>> + Send>>;

/// Creates a handler function designed for use with `lambda_runtime::service_fn`.
///
/// The store and clock are built once per process and shared by every
/// invocation. Failures are reported through the response status code, so
/// the returned future only errors if the response can't be serialized.
///
/// ```ignore
/// use handler::clock::SystemClock;
/// use handler::handler_fn;
/// use lambda_runtime::service_fn;
/// use std::sync::Arc;
/// use store_in_memory::InMemoryRecordStore;
///
/// #[tokio::main]
/// async fn main() -> Result<(), model::Error> {
///     let store = Arc::new(InMemoryRecordStore::default());
///
///     lambda_runtime::run(service_fn(handler_fn(store, Arc::new(SystemClock)))).await
/// }
/// ```
pub fn handler_fn(
    store: Arc<dyn RecordStore>,
    clock: Arc<dyn Clock>,
) -> impl Fn(ExponentLambdaEvent) -> HandlerFuture {
    move |event: ExponentLambdaEvent| -> HandlerFuture {
        let store: Arc<dyn RecordStore> = store.clone();
        let clock: Arc<dyn Clock> = clock.clone();

        let request_id: &str = event.context.request_id.as_str();
        let span: Span = tracing::span!(tracing::Level::INFO, "Exponent", request_id);

        Box::pin(
            async move { handle(&event.payload, store.as_ref(), clock.as_ref()).await }
                .instrument(span),
        )
    }
}

/// Validate the event, compute `base ^ exponent` and store the result.
pub async fn handle(
    event: &ExponentEvent,
    store: &dyn RecordStore,
    clock: &dyn Clock,
) -> Result<HandlerResponse, Error> {
    tracing::info!("Handling exponent event");

    let response: HandlerResponse = match calculate(event, store, clock).await {
        Ok(result) => {
            tracing::info!(result, "Calculation successful");

            HandlerResponse::new(STATUS_OK, &CalculationBody::new(result))?
        }
        Err(err) => {
            match &err {
                HandlerError::Storage(_) => tracing::error!("Failed to store result: {err}"),
                _ => tracing::warn!("Rejected exponent event: {err}"),
            }

            HandlerResponse::new(err.status_code(), &err.body())?
        }
    };

    Ok(response)
}

async fn calculate(
    event: &ExponentEvent,
    store: &dyn RecordStore,
    clock: &dyn Clock,
) -> Result<f64, HandlerError> {
    let (base, exponent) = event.inputs().ok_or(HandlerError::MissingInput)?;

    let base: f64 = coerce_integer(BASE, base)?;
    let exponent: f64 = coerce_integer(EXPONENT, exponent)?;
    let result: f64 = power(base, exponent)?;

    let record: ExponentRecord =
        ExponentRecord::new(result_text(result), format_timestamp(clock.now()));

    tracing::debug!(?record, "Storing result");

    store.put_record(record).await?;

    Ok(result)
}
