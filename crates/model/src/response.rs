use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

/// Response returned to the invoking environment.
/// `body` always holds JSON text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    pub fn new(status_code: u16, body: &impl Serialize) -> Result<Self, serde_json::Error> {
        Ok(HandlerResponse {
            status_code,
            body: serde_json::to_string(body)?,
        })
    }

    /// Parse the body back into JSON.
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Body of a successful calculation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CalculationBody {
    pub result: f64,
    pub message: String,
}

pub const SUCCESS_MESSAGE: &str = "Calculation successful.";

impl CalculationBody {
    pub fn new(result: f64) -> Self {
        CalculationBody {
            result,
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}
