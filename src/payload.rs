use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::crc::{CrcError, calculate_crc8};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PayloadKind {
    #[strum(to_string = "bytes")]
    Bytes,
    #[strum(to_string = "text")]
    Text,
}

/// Input whose type is only known at runtime (ex. read from a config file).
/// Only byte sequences can be checksummed. Text is rejected instead of being
/// silently encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    Bytes(Vec<u8>),
    Text(String),
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Bytes(_) => PayloadKind::Bytes,
            Payload::Text(_) => PayloadKind::Text,
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], CrcError> {
        match self {
            Payload::Bytes(buf) => Ok(buf),
            Payload::Text(_) => Err(CrcError::InvalidInputKind { kind: self.kind() }),
        }
    }
}

pub fn calculate_crc8_payload(
    payload: &Payload,
    start_value: u8,
    first_call: bool,
) -> Result<u8, CrcError> {
    Ok(calculate_crc8(payload.as_bytes()?, start_value, first_call))
}

impl From<Vec<u8>> for Payload {
    fn from(buf: Vec<u8>) -> Self {
        Payload::Bytes(buf)
    }
}

impl From<&[u8]> for Payload {
    fn from(buf: &[u8]) -> Self {
        Payload::Bytes(buf.to_vec())
    }
}

impl From<Bytes> for Payload {
    fn from(buf: Bytes) -> Self {
        Payload::Bytes(buf.into())
    }
}

impl From<BytesMut> for Payload {
    fn from(buf: BytesMut) -> Self {
        Payload::Bytes(buf.into())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crc::{CHECK, INITIAL_VALUE};
    use hex_literal::hex;

    #[test]
    fn test_bytes_payload() {
        let payload = Payload::from(&b"123456789"[..]);
        assert_eq!(payload.kind(), PayloadKind::Bytes);
        assert_eq!(
            calculate_crc8_payload(&payload, INITIAL_VALUE, true).unwrap(),
            CHECK
        );
    }

    #[test]
    fn test_bytes_and_bytes_mut_agree() {
        let frozen = Payload::from(Bytes::copy_from_slice(&hex!("F2 01 83")));
        let growable = Payload::from(BytesMut::from(&hex!("F2 01 83")[..]));
        assert_eq!(frozen, growable);
        assert_eq!(
            calculate_crc8_payload(&frozen, INITIAL_VALUE, true).unwrap(),
            0x37
        );
        assert_eq!(
            calculate_crc8_payload(&growable, INITIAL_VALUE, true).unwrap(),
            0x37
        );
    }

    #[test]
    fn test_text_rejected() {
        let payload = Payload::from("123456789");
        assert_eq!(payload.kind(), PayloadKind::Text);
        match calculate_crc8_payload(&payload, INITIAL_VALUE, true) {
            Err(CrcError::InvalidInputKind { kind }) => assert_eq!(kind, PayloadKind::Text),
            _ => panic!("Expected InvalidInputKind error"),
        }
    }

    #[test]
    fn test_error_message() {
        let err = Payload::from(String::from("abc")).as_bytes().unwrap_err();
        assert_eq!(err.to_string(), "expected a byte sequence, got text");
    }

    #[test]
    fn test_deserialize() {
        let bytes: Payload = ron::from_str("[0x92, 0x6B, 0x55]").unwrap();
        assert_eq!(bytes, Payload::Bytes(hex!("92 6B 55").to_vec()));

        let text: Payload = ron::from_str(r#""hello""#).unwrap();
        assert_eq!(text, Payload::Text("hello".to_string()));
    }
}
