use serde::{de::DeserializeOwned, Serialize};
use taskboard_core::{BoardError, BoardResult};

/// JSON text codec for stored values.
pub struct JsonCodec;

impl JsonCodec {
    pub fn encode<T: Serialize + ?Sized>(value: &T) -> BoardResult<String> {
        serde_json::to_string(value).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    pub fn decode<T: DeserializeOwned>(text: &str) -> BoardResult<T> {
        serde_json::from_str(text).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        value: i32,
    }

    #[test]
    fn test_encode_is_compact() {
        let text = JsonCodec::encode(&Entry {
            name: "milk".to_string(),
            value: 2,
        })
        .unwrap();
        assert_eq!(text, r#"{"name":"milk","value":2}"#);
    }

    #[test]
    fn test_decode_errors_are_serialization_errors() {
        let result = JsonCodec::decode::<Entry>("{\"name\": 3}");
        assert!(matches!(result, Err(BoardError::Serialization(_))));

        let result = JsonCodec::decode::<Vec<Entry>>("not json");
        assert!(matches!(result, Err(BoardError::Serialization(_))));
    }
}
