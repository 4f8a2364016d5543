// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Resource URIs carried inside intercepted requests
//!
//! A relayed request looks like `https://host/vscode-resources/fetch?<uri>`
//! where `<uri>` is the percent-encoded URI of the actual resource. On the
//! wire a [`ResourceUri`] travels as its components
//! (`scheme`, `authority`, `path`, `query`, `fragment`) with decoded values.

use std::fmt;
use std::path::PathBuf;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

const PATH_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const QUERY_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>');

/// Structured identifier of the resource a page actually wants
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "UriComponents", try_from = "UriComponents")]
pub struct ResourceUri {
    url: Url,
}

/// Wire form of a [`ResourceUri`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UriComponents {
    pub scheme: String,
    #[serde(default)]
    pub authority: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub fragment: String,
}

impl ResourceUri {
    /// Parse an already decoded URI string
    ///
    /// A bare absolute path such as `/home/me/logo.png` has no scheme and is
    /// read as a `file:` URI.
    pub fn parse(input: &str) -> Result<Self> {
        let url = match Url::parse(input) {
            Err(url::ParseError::RelativeUrlWithoutBase) if input.starts_with('/') => {
                Url::parse(&format!("file://{}", input))
            }
            parsed => parsed,
        }
        .map_err(|e| Error::invalid_resource(input, e.to_string()))?;
        Ok(Self { url })
    }

    /// Decode the nested URI from a raw (percent-encoded) query string
    pub fn from_query(query: &str) -> Result<Self> {
        if query.is_empty() {
            return Err(Error::invalid_resource(query, "empty query string"));
        }
        let decoded = percent_decode_str(query)
            .decode_utf8()
            .map_err(|e| Error::invalid_resource(query, e.to_string()))?;
        Self::parse(&decoded)
    }

    /// Wrap an existing URL
    pub fn from_url(url: Url) -> Self {
        Self { url }
    }

    /// Build a `file:` URI for an absolute path
    pub fn from_file_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        Url::from_file_path(path)
            .map(Self::from_url)
            .map_err(|_| Error::invalid_resource(path.display().to_string(), "not an absolute path"))
    }

    /// URI scheme, e.g. `file`
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Host and port, empty when there is none
    pub fn authority(&self) -> String {
        match (self.url.host_str(), self.url.port()) {
            (Some(host), Some(port)) => format!("{}:{}", host, port),
            (Some(host), None) => host.to_string(),
            _ => String::new(),
        }
    }

    /// Decoded path component
    pub fn path(&self) -> String {
        decode(self.url.path())
    }

    /// Decoded query component, empty when absent
    pub fn query(&self) -> String {
        self.url.query().map(decode).unwrap_or_default()
    }

    /// Decoded fragment component, empty when absent
    pub fn fragment(&self) -> String {
        self.url.fragment().map(decode).unwrap_or_default()
    }

    /// Lower-cased extension of the last path segment, including the dot
    ///
    /// `/a/b.PNG` yields `.png`; dot-files like `/a/.bashrc` have none.
    pub fn extension(&self) -> Option<String> {
        let path = self.path();
        let basename = path.rsplit('/').next().unwrap_or("");
        match basename.rfind('.') {
            Some(idx) if idx > 0 => Some(basename[idx..].to_lowercase()),
            _ => None,
        }
    }

    /// Local filesystem path for `file:` URIs
    pub fn file_path(&self) -> Option<PathBuf> {
        if self.url.scheme() != "file" {
            return None;
        }
        self.url.to_file_path().ok()
    }

    /// Underlying URL
    pub fn as_url(&self) -> &Url {
        &self.url
    }

    /// Encode as the query string of an intercepted request
    pub fn to_query(&self) -> String {
        utf8_percent_encode(self.url.as_str(), percent_encoding::NON_ALPHANUMERIC).to_string()
    }
}

impl fmt::Display for ResourceUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url.as_str())
    }
}

impl From<ResourceUri> for UriComponents {
    fn from(uri: ResourceUri) -> Self {
        UriComponents {
            scheme: uri.scheme().to_string(),
            authority: uri.authority(),
            path: uri.path(),
            query: uri.query(),
            fragment: uri.fragment(),
        }
    }
}

impl TryFrom<UriComponents> for ResourceUri {
    type Error = Error;

    fn try_from(parts: UriComponents) -> Result<Self> {
        if parts.scheme.is_empty() {
            return Err(Error::invalid_resource(parts.path, "missing scheme"));
        }

        let mut out = format!("{}:", parts.scheme);
        if !parts.authority.is_empty() || parts.path.starts_with('/') {
            out.push_str("//");
            out.push_str(&parts.authority);
        }
        out.extend(utf8_percent_encode(&parts.path, PATH_SET));
        if !parts.query.is_empty() {
            out.push('?');
            out.extend(utf8_percent_encode(&parts.query, QUERY_SET));
        }
        if !parts.fragment.is_empty() {
            out.push('#');
            out.extend(utf8_percent_encode(&parts.fragment, QUERY_SET));
        }

        Self::parse(&out)
    }
}

fn decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_encoded_query() {
        let uri = ResourceUri::from_query("file%3A%2F%2F%2Fhome%2Fme%2Fext%2Flogo.png").unwrap();

        assert_eq!(uri.scheme(), "file");
        assert_eq!(uri.authority(), "");
        assert_eq!(uri.path(), "/home/me/ext/logo.png");
        assert_eq!(uri.extension().as_deref(), Some(".png"));
    }

    #[test]
    fn test_from_plain_query() {
        let uri = ResourceUri::from_query("vscode-remote://host:8080/media/clip.MP4").unwrap();

        assert_eq!(uri.scheme(), "vscode-remote");
        assert_eq!(uri.authority(), "host:8080");
        assert_eq!(uri.extension().as_deref(), Some(".mp4"));
    }

    #[test]
    fn test_bare_path_is_file_uri() {
        let uri = ResourceUri::from_query("%2Fhome%2Fme%2Flogo.png").unwrap();

        assert_eq!(uri.scheme(), "file");
        assert_eq!(uri.authority(), "");
        assert_eq!(uri.path(), "/home/me/logo.png");
        assert_eq!(uri.to_string(), "file:///home/me/logo.png");
    }

    #[test]
    fn test_relative_path_rejected() {
        assert!(matches!(
            ResourceUri::parse("media/logo.png"),
            Err(Error::InvalidResource { .. })
        ));
    }

    #[test]
    fn test_empty_query_rejected() {
        assert!(matches!(
            ResourceUri::from_query(""),
            Err(Error::InvalidResource { .. })
        ));
    }

    #[test]
    fn test_extension_edge_cases() {
        let dotfile = ResourceUri::parse("file:///home/me/.bashrc").unwrap();
        assert_eq!(dotfile.extension(), None);

        let none = ResourceUri::parse("file:///home/me/Makefile").unwrap();
        assert_eq!(none.extension(), None);

        let double = ResourceUri::parse("file:///home/me/archive.tar.gz").unwrap();
        assert_eq!(double.extension().as_deref(), Some(".gz"));
    }

    #[test]
    fn test_decoded_path_with_spaces() {
        let uri = ResourceUri::parse("file:///home/me/my%20icon.svg").unwrap();
        assert_eq!(uri.path(), "/home/me/my icon.svg");
    }

    #[test]
    fn test_components_json() {
        let uri = ResourceUri::parse("file:///home/me/my%20icon.svg").unwrap();
        let json = serde_json::to_value(&uri).unwrap();

        assert_eq!(json["scheme"], "file");
        assert_eq!(json["authority"], "");
        assert_eq!(json["path"], "/home/me/my icon.svg");

        let back: ResourceUri = serde_json::from_value(json).unwrap();
        assert_eq!(back, uri);
    }

    #[test]
    fn test_query_encoding_survives_decoding() {
        let uri = ResourceUri::parse("file:///home/me/a%20b.png").unwrap();
        let query = uri.to_query();

        assert!(!query.contains('/'));
        let decoded = ResourceUri::from_query(&query).unwrap();
        assert_eq!(decoded.path(), "/home/me/a b.png");
    }

    #[test]
    fn test_file_path() {
        let uri = ResourceUri::parse("https://example.com/a.png").unwrap();
        assert!(uri.file_path().is_none());
    }
}
