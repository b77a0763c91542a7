//! Transaction tags: ordered name/value metadata pairs.

use serde::{Deserialize, Serialize};

use permaweave_core::{b64url_decode, b64url_encode, CoreError};

/// A name/value tag, stored base64url as the wire format requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, base64url.
    pub name: String,
    /// Tag value, base64url.
    pub value: String,
}

impl Tag {
    /// Create a tag from plain name/value strings, encoding both.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: b64url_encode(name.as_bytes()),
            value: b64url_encode(value.as_bytes()),
        }
    }

    /// The raw name bytes, decoded back out of the wire encoding.
    pub fn decoded_name(&self) -> Result<Vec<u8>, CoreError> {
        b64url_decode(&self.name)
    }

    /// The raw value bytes, decoded back out of the wire encoding.
    pub fn decoded_value(&self) -> Result<Vec<u8>, CoreError> {
        b64url_decode(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_encodes_on_construction() {
        let tag = Tag::new("Content-Type", "text/html");
        assert_eq!(tag.name, "Q29udGVudC1UeXBl");
        assert_eq!(tag.decoded_name().unwrap(), b"Content-Type");
        assert_eq!(tag.decoded_value().unwrap(), b"text/html");
    }

    #[test]
    fn test_tag_wire_shape() {
        let tag = Tag::new("a", "b");
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, r#"{"name":"YQ","value":"Yg"}"#);
    }
}
