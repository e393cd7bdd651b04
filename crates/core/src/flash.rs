//! One-shot status messages carried across a redirect.
//!
//! A flash is serialized as `hex(level ":" message) "." hex(hmac)` where the
//! HMAC-SHA256 key is the application secret, so a client cannot forge
//! messages into the page.

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Error,
    Info,
}

impl FlashLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashLevel::Success => "success",
            FlashLevel::Error => "error",
            FlashLevel::Info => "info",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(FlashLevel::Success),
            "error" => Some(FlashLevel::Error),
            "info" => Some(FlashLevel::Info),
            _ => None,
        }
    }
}

/// A user-visible status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Info,
            message: message.into(),
        }
    }
}

/// Serialize and sign a flash for storage in a cookie.
pub fn encode(secret: &str, flash: &Flash) -> String {
    let payload = hex::encode(format!("{}:{}", flash.level.as_str(), flash.message));
    let signature = hex::encode(mac(secret, &payload).finalize().into_bytes());
    format!("{payload}.{signature}")
}

/// Verify and deserialize a cookie value produced by [`encode`].
///
/// Returns `None` for anything tampered with, truncated or signed with a
/// different secret.
pub fn decode(secret: &str, value: &str) -> Option<Flash> {
    let (payload, signature) = value.split_once('.')?;
    let signature = hex::decode(signature)?;
    mac(secret, payload).verify_slice(&signature).ok()?;

    let text = String::from_utf8(hex::decode(payload)?).ok()?;
    let (level, message) = text.split_once(':')?;
    Some(Flash {
        level: FlashLevel::parse(level)?,
        message: message.to_string(),
    })
}

fn mac(secret: &str, payload: &str) -> HmacSha256 {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());
    mac
}

// ---------------------------------------------------------------------------
// hex encoding helper (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string; `None` on odd length or non-hex characters.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 || !s.is_ascii() {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
            .collect()
    }
}
