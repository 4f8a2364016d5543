// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Messages exchanged between the worker and its pages

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::uri::ResourceUri;

/// Worker → page: please load `uri` and answer with `token`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRequest {
    pub uri: ResourceUri,
    pub token: String,
}

/// Page → worker: the bytes for a pending token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceReply {
    pub token: String,
    #[serde(with = "base64_bytes")]
    pub data: Bytes,
    /// Bundled-extension resources are cacheable; workspace resources are not
    pub is_extension_resource: bool,
}

impl ResourceRequest {
    /// Encode as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ResourceReply {
    /// Create a reply
    pub fn new(token: impl Into<String>, data: impl Into<Bytes>, is_extension_resource: bool) -> Self {
        Self {
            token: token.into(),
            data: data.into(),
            is_extension_resource,
        }
    }

    /// Encode as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

mod base64_bytes {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(data: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(data))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD
            .decode(encoded.as_bytes())
            .map(Bytes::from)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_wire_fields() {
        let reply = ResourceReply::new("tok-1", vec![0u8, 159, 146, 150], true);
        let json: serde_json::Value = serde_json::from_str(&reply.to_json().unwrap()).unwrap();

        assert_eq!(json["token"], "tok-1");
        assert_eq!(json["data"], "AJ+Slg==");
        assert_eq!(json["isExtensionResource"], true);
    }

    #[test]
    fn test_reply_from_page_json() {
        let reply = ResourceReply::from_json(
            r#"{"token":"abc","data":"aGVsbG8=","isExtensionResource":false}"#,
        )
        .unwrap();

        assert_eq!(reply.token, "abc");
        assert_eq!(&reply.data[..], b"hello");
        assert!(!reply.is_extension_resource);
    }

    #[test]
    fn test_reply_rejects_bad_payload() {
        let err = ResourceReply::from_json(
            r#"{"token":"abc","data":"not base64!","isExtensionResource":false}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_request_wire_fields() {
        let request = ResourceRequest {
            uri: ResourceUri::parse("file:///ext/icon.png").unwrap(),
            token: "tok-2".to_string(),
        };
        let json: serde_json::Value = serde_json::from_str(&request.to_json().unwrap()).unwrap();

        assert_eq!(json["token"], "tok-2");
        assert_eq!(json["uri"]["scheme"], "file");
        assert_eq!(json["uri"]["path"], "/ext/icon.png");

        let back = ResourceRequest::from_json(&request.to_json().unwrap()).unwrap();
        assert_eq!(back, request);
    }
}
