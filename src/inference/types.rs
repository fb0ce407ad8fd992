use serde::Serialize;
use serde_json::{Map, Value};

/// JSON object sent as the request body, e.g. `{"inputs": "..."}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn inputs(text: impl Into<String>) -> Self {
        Self::new().with("inputs", text.into())
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_inputs_payload_serializes_as_object() {
        let payload = Payload::inputs("hello");

        assert_eq!(serde_json::to_value(&payload).unwrap(), json!({"inputs": "hello"}));
    }

    #[test]
    fn test_with_adds_extra_keys() {
        let payload = Payload::inputs("hello")
            .with("parameters", json!({"max_new_tokens": 20}))
            .with("options", json!({"wait_for_model": true}));

        assert_eq!(payload.as_map().len(), 3);
        assert_eq!(payload.as_map()["parameters"]["max_new_tokens"], json!(20));
    }

    #[test]
    fn test_from_map() {
        let value = json!({"inputs": "hi", "parameters": {"top_k": 5}});
        let Value::Object(map) = value.clone() else {
            panic!("fixture is an object");
        };

        let payload = Payload::from(map);
        assert_eq!(serde_json::to_value(payload).unwrap(), value);
    }
}
