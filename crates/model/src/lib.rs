use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod env;
pub mod record;
pub mod response;

pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// The payload delivered to the handler.
/// Both inputs are left untyped until they are coerced to integers.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExponentEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent: Option<Value>,
}

impl ExponentEvent {
    pub fn new(base: impl Into<Value>, exponent: impl Into<Value>) -> Self {
        ExponentEvent {
            base: Some(base.into()),
            exponent: Some(exponent.into()),
        }
    }

    /// Returns both inputs, or `None` if either is missing.
    /// An explicit JSON `null` counts as missing.
    pub fn inputs(&self) -> Option<(&Value, &Value)> {
        Some((present(&self.base)?, present(&self.exponent)?))
    }
}

fn present(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| !value.is_null())
}

#[cfg(test)]
mod tests {
    use super::ExponentEvent;
    use serde_json::json;

    #[test]
    fn event_ignores_unknown_fields() {
        let event: ExponentEvent =
            serde_json::from_value(json!({"base": 2, "exponent": "3", "extra": true}))
                .expect("Event should deserialize");

        assert_eq!(ExponentEvent::new(2, "3"), event);
    }

    #[test]
    fn null_inputs_count_as_missing() {
        let event: ExponentEvent = serde_json::from_value(json!({"base": null, "exponent": 1}))
            .expect("Event should deserialize");

        assert!(event.inputs().is_none());
        assert!(ExponentEvent::default().inputs().is_none());
        assert!(ExponentEvent::new(0, 0).inputs().is_some());
    }
}
