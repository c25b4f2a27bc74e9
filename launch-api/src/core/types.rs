//! Request, response and asset types for the upload pipeline

use base64::Engine;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/upload`
///
/// Every field is optional on the wire so that a missing field becomes a
/// 400 from validation rather than a body rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    /// Base64 data URI of the token logo
    pub token_logo: Option<String>,
    pub token_name: Option<String>,
    pub token_symbol: Option<String>,
    /// Token mint address
    pub mint: Option<String>,
    /// Submitting wallet address
    pub user_wallet: Option<String>,
}

/// An upload request with every required field present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpload {
    pub token_logo: String,
    pub token_name: String,
    pub token_symbol: String,
    pub mint: String,
    pub user_wallet: String,
}

/// Successful response of `POST /api/upload`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub metadata_url: String,
    /// Base64 legacy transaction, signatures left empty
    pub pool_tx: String,
}

/// Error body shared by every failure status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Metadata JSON referenced by the on-chain token metadata URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub image: String,
}

/// An object written to storage and its public location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredAsset {
    pub key: String,
    pub content_type: String,
    pub url: String,
}

/// Arguments handed to the pool transaction builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePoolParams {
    pub config: String,
    pub base_mint: String,
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub payer: String,
    pub pool_creator: String,
}

/// A decoded `data:<content-type>;base64,<payload>` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl DataUri {
    /// Parse a data URI. Returns `None` for anything that is not a
    /// base64 data URI with a `type/subtype` content type.
    pub fn parse(input: &str) -> Option<Self> {
        let rest = input.strip_prefix("data:")?;
        let (content_type, payload) = rest.split_once(";base64,")?;

        let valid_type = !content_type.is_empty()
            && content_type
                .chars()
                .all(|c| c.is_ascii_alphabetic() || matches!(c, '-' | '+' | '/'));
        if !valid_type || payload.is_empty() {
            return None;
        }
        match content_type.split_once('/') {
            Some((_, subtype)) if !subtype.is_empty() => {}
            _ => return None,
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .ok()?;

        Some(Self {
            content_type: content_type.to_string(),
            bytes,
        })
    }

    /// File extension derived from the content type subtype
    /// (`image/png` -> `png`)
    pub fn extension(&self) -> &str {
        self.content_type
            .split('/')
            .nth(1)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png_data_uri() {
        let uri = DataUri::parse("data:image/png;base64,AAAA").unwrap();
        assert_eq!(uri.content_type, "image/png");
        assert_eq!(uri.bytes, vec![0, 0, 0]);
        assert_eq!(uri.extension(), "png");
    }

    #[test]
    fn test_parse_keeps_full_subtype() {
        let uri = DataUri::parse("data:image/svg+xml;base64,PHN2Zz4=").unwrap();
        assert_eq!(uri.extension(), "svg+xml");
        assert_eq!(uri.bytes, b"<svg>".to_vec());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(DataUri::parse("AAAA").is_none());
        assert!(DataUri::parse("data:image/png,AAAA").is_none());
        assert!(DataUri::parse("data:;base64,AAAA").is_none());
        assert!(DataUri::parse("data:image/png;base64,").is_none());
        assert!(DataUri::parse("data:image png;base64,AAAA").is_none());
        assert!(DataUri::parse("data:image;base64,AAAA").is_none());
        assert!(DataUri::parse("data:image/png;base64,%%%").is_none());
    }

    #[test]
    fn test_upload_request_uses_camel_case() {
        let request: UploadRequest = serde_json::from_str(
            r#"{"tokenLogo":"data:image/png;base64,AAAA","tokenName":"Foo","tokenSymbol":"FOO","mint":"Mint111","userWallet":"Wallet111"}"#,
        )
        .unwrap();

        assert_eq!(request.token_name.as_deref(), Some("Foo"));
        assert_eq!(request.user_wallet.as_deref(), Some("Wallet111"));
    }
}
