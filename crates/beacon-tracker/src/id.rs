//! Client identifiers: random UUIDs or UUID-formatted MD5 digests.

use beacon_core::errors::IdError;
use beacon_core::Value;
use md5::{Digest, Md5};
use uuid::Uuid;

/// A random v4 UUID without a basis; otherwise the MD5 digest of `basis`
/// laid out as a hyphenated UUID, so the same basis always yields the same id.
pub fn generate_id(basis: Option<&str>) -> String {
    match basis {
        None => Uuid::new_v4().to_string(),
        Some(text) => {
            let digest = Md5::digest(text.as_bytes());
            let mut bytes = [0u8; 16];
            bytes.copy_from_slice(&digest);
            Uuid::from_bytes(bytes).to_string()
        }
    }
}

/// `generate_id` for a dynamically typed basis. Only text is hashed.
pub fn generate_id_from(basis: Option<&Value>) -> Result<String, IdError> {
    match basis {
        None => Ok(generate_id(None)),
        Some(Value::Text(text)) => Ok(generate_id(Some(text.as_str()))),
        Some(other) => Err(IdError::UnsupportedBasis {
            found: other.kind(),
        }),
    }
}
