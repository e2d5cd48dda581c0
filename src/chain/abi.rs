//! Minimal ABI calldata codec
//!
//! Encodes call arguments and decodes return data for the handful of
//! contract methods the page uses. Function selectors are the first four
//! bytes of the keccak-256 hash of the canonical signature.

use alloy_primitives::{keccak256, Address, U256};
use thiserror::Error;

/// Width of an ABI word in bytes
pub const WORD: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AbiError {
    #[error("return data too short: word {0} past end of {1} bytes")]
    ShortData(usize, usize),

    #[error("data offset out of range: {0}")]
    BadOffset(usize),

    #[error("declared length out of range: {0}")]
    BadLength(usize),

    #[error("value does not fit the target type")]
    ValueOutOfRange,

    #[error("string data is not valid UTF-8")]
    NonUtf8String,
}

/// Compute the 4-byte function selector for a canonical signature,
/// e.g. `"adopt(string)"`.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// A single argument value for [`encode_call`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AbiValue {
    Uint(U256),
    Uint8(u8),
    Address(Address),
    Str(String),
}

/// ABI-encode a function call: selector followed by the head words, with
/// dynamic data (strings) appended after the head and referenced by offset.
pub fn encode_call(signature: &str, args: &[AbiValue]) -> Vec<u8> {
    let head_len = args.len() * WORD;
    let mut head = Vec::with_capacity(head_len);
    let mut tail: Vec<u8> = Vec::new();

    for arg in args {
        match arg {
            AbiValue::Uint(value) => head.extend_from_slice(&value.to_be_bytes::<WORD>()),
            AbiValue::Uint8(value) => {
                head.extend_from_slice(&U256::from(*value).to_be_bytes::<WORD>())
            }
            AbiValue::Address(address) => {
                let mut word = [0u8; WORD];
                word[12..].copy_from_slice(address.as_slice());
                head.extend_from_slice(&word);
            }
            AbiValue::Str(text) => {
                // Offset is relative to the start of the head
                let offset = head_len + tail.len();
                head.extend_from_slice(&U256::from(offset).to_be_bytes::<WORD>());
                tail.extend_from_slice(&U256::from(text.len()).to_be_bytes::<WORD>());
                tail.extend_from_slice(text.as_bytes());
                let padding = (WORD - text.len() % WORD) % WORD;
                tail.extend(std::iter::repeat(0u8).take(padding));
            }
        }
    }

    let mut out = Vec::with_capacity(4 + head.len() + tail.len());
    out.extend_from_slice(&selector(signature));
    out.extend_from_slice(&head);
    out.extend_from_slice(&tail);
    out
}

/// Word-indexed view over ABI return data
#[derive(Debug)]
pub struct WordReader<'a> {
    data: &'a [u8],
}

impl<'a> WordReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    fn word(&self, index: usize) -> Result<&'a [u8], AbiError> {
        let start = index * WORD;
        let end = start + WORD;
        if end > self.data.len() {
            return Err(AbiError::ShortData(index, self.data.len()));
        }
        Ok(&self.data[start..end])
    }

    pub fn u256_at(&self, index: usize) -> Result<U256, AbiError> {
        let word = self.word(index)?;
        Ok(U256::from_be_slice(word))
    }

    /// Read a word that must fit in `usize` (offsets and lengths)
    pub fn usize_at(&self, index: usize) -> Result<usize, AbiError> {
        let value = self.u256_at(index)?;
        usize::try_from(value).map_err(|_| AbiError::ValueOutOfRange)
    }

    /// Read a `uint8` word, rejecting values past 255
    pub fn u8_at(&self, index: usize) -> Result<u8, AbiError> {
        let value = self.u256_at(index)?;
        u8::try_from(value).map_err(|_| AbiError::ValueOutOfRange)
    }

    /// Read a `uint64`-ranged word (timestamps)
    pub fn u64_at(&self, index: usize) -> Result<u64, AbiError> {
        let value = self.u256_at(index)?;
        u64::try_from(value).map_err(|_| AbiError::ValueOutOfRange)
    }

    /// Read an address from the low 20 bytes of a word
    pub fn address_at(&self, index: usize) -> Result<Address, AbiError> {
        let word = self.word(index)?;
        Ok(Address::from_slice(&word[12..]))
    }

    /// Sub-reader starting at a byte offset into this reader's data
    pub fn tail(&self, offset: usize) -> Result<WordReader<'a>, AbiError> {
        if offset > self.data.len() {
            return Err(AbiError::BadOffset(offset));
        }
        Ok(WordReader::new(&self.data[offset..]))
    }

    /// Read length-prefixed bytes at a byte offset into this reader's data
    pub fn bytes_at(&self, offset: usize) -> Result<&'a [u8], AbiError> {
        let tail = self.tail(offset)?;
        let length = tail.usize_at(0)?;
        let start = WORD;
        let end = start.checked_add(length).ok_or(AbiError::BadLength(length))?;
        if end > tail.data.len() {
            return Err(AbiError::BadLength(length));
        }
        Ok(&tail.data[start..end])
    }

    /// Read a length-prefixed UTF-8 string at a byte offset
    pub fn string_at(&self, offset: usize) -> Result<String, AbiError> {
        let bytes = self.bytes_at(offset)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| AbiError::NonUtf8String)
    }
}

/// Decode a `uint256[]` return value (offset word, length word, items)
pub fn decode_u256_array(data: &[u8]) -> Result<Vec<U256>, AbiError> {
    let reader = WordReader::new(data);
    let offset = reader.usize_at(0)?;
    let array = reader.tail(offset)?;
    let length = array.usize_at(0)?;
    // Hostile length words must fail cleanly, never overflow
    let needed = length
        .checked_mul(WORD)
        .and_then(|bytes| bytes.checked_add(WORD));
    if needed.map(|bytes| bytes > array.data.len()).unwrap_or(true) {
        return Err(AbiError::BadLength(length));
    }
    (0..length).map(|i| array.u256_at(1 + i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_of(value: u64) -> [u8; WORD] {
        U256::from(value).to_be_bytes::<WORD>()
    }

    #[test]
    fn test_selectors_match_contract_abi() {
        assert_eq!(selector("adopt(string)"), [0x56, 0x6f, 0xc1, 0x23]);
        assert_eq!(selector("getAllWaves()"), [0xbd, 0x43, 0xa9, 0x08]);
        assert_eq!(selector("tokensOfOwner(address)"), [0x84, 0x62, 0x15, 0x1c]);
        assert_eq!(selector("getPony(uint256)"), [0x36, 0x91, 0x7d, 0xfa]);
        assert_eq!(
            selector("createPromoPony(uint8,uint8,uint8,address)"),
            [0xb7, 0xe2, 0xad, 0xeb]
        );
        // Known selector from the ERC-20 ABI, as a codec sanity check
        assert_eq!(selector("transfer(address,uint256)"), [0xa9, 0x05, 0x9c, 0xbb]);
    }

    #[test]
    fn test_encode_string_argument() {
        let calldata = encode_call("adopt(string)", &[AbiValue::Str("Pony Fren".to_string())]);

        let mut expected = Vec::new();
        expected.extend_from_slice(&[0x56, 0x6f, 0xc1, 0x23]);
        expected.extend_from_slice(&word_of(0x20)); // offset to string data
        expected.extend_from_slice(&word_of(9)); // length
        expected.extend_from_slice(b"Pony Fren");
        expected.extend_from_slice(&[0u8; 23]); // padding to a full word
        assert_eq!(calldata, expected);
    }

    #[test]
    fn test_encode_static_arguments() {
        let to: Address = "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B"
            .parse()
            .unwrap();
        let calldata = encode_call(
            "createPromoPony(uint8,uint8,uint8,address)",
            &[
                AbiValue::Uint8(255),
                AbiValue::Uint8(0),
                AbiValue::Uint8(128),
                AbiValue::Address(to),
            ],
        );

        assert_eq!(calldata.len(), 4 + 4 * WORD);
        assert_eq!(&calldata[..4], &[0xb7, 0xe2, 0xad, 0xeb]);
        assert_eq!(&calldata[4..36], &word_of(255));
        assert_eq!(&calldata[36..68], &word_of(0));
        assert_eq!(&calldata[68..100], &word_of(128));
        assert_eq!(&calldata[100..112], &[0u8; 12]);
        assert_eq!(&calldata[112..132], to.as_slice());
    }

    #[test]
    fn test_decode_u256_array() {
        let mut data = Vec::new();
        data.extend_from_slice(&word_of(0x20)); // offset
        data.extend_from_slice(&word_of(2)); // length
        data.extend_from_slice(&word_of(7));
        data.extend_from_slice(&word_of(9));

        let ids = decode_u256_array(&data).unwrap();
        assert_eq!(ids, vec![U256::from(7), U256::from(9)]);
    }

    #[test]
    fn test_decode_empty_u256_array() {
        let mut data = Vec::new();
        data.extend_from_slice(&word_of(0x20));
        data.extend_from_slice(&word_of(0));

        assert_eq!(decode_u256_array(&data).unwrap(), Vec::<U256>::new());
    }

    #[test]
    fn test_decode_array_with_truncated_items() {
        let mut data = Vec::new();
        data.extend_from_slice(&word_of(0x20));
        data.extend_from_slice(&word_of(5)); // claims 5 items, provides none

        assert_eq!(decode_u256_array(&data), Err(AbiError::BadLength(5)));
    }

    #[test]
    fn test_decode_array_with_hostile_length_word() {
        // A length that passes the multiply but would overflow the
        // byte-count addition must error, not panic
        let length = usize::MAX / WORD;
        let mut data = Vec::new();
        data.extend_from_slice(&word_of(0x20));
        data.extend_from_slice(&U256::from(length).to_be_bytes::<WORD>());

        assert_eq!(decode_u256_array(&data), Err(AbiError::BadLength(length)));
    }

    #[test]
    fn test_u8_rejects_oversized_word() {
        let data = word_of(256);
        let reader = WordReader::new(&data);
        assert_eq!(reader.u8_at(0), Err(AbiError::ValueOutOfRange));
        assert_eq!(WordReader::new(&word_of(255)).u8_at(0), Ok(255));
    }

    #[test]
    fn test_short_data_is_reported() {
        let data = [0u8; 16];
        let reader = WordReader::new(&data);
        assert_eq!(reader.u256_at(0), Err(AbiError::ShortData(0, 16)));
    }

    #[test]
    fn test_string_at_rejects_bad_offset_and_bytes() {
        let mut data = Vec::new();
        data.extend_from_slice(&word_of(3));
        data.extend_from_slice(&[0xff, 0xfe, 0xfd]);
        data.extend_from_slice(&[0u8; 29]);

        let reader = WordReader::new(&data);
        assert_eq!(reader.string_at(0), Err(AbiError::NonUtf8String));
        assert_eq!(
            reader.tail(9999).unwrap_err(),
            AbiError::BadOffset(9999)
        );
    }

    #[test]
    fn test_address_round_trip() {
        let address: Address = "0x20f229B5c27e8e164ffe54a6f9b03c56f5F4828B"
            .parse()
            .unwrap();
        let calldata = encode_call("tokensOfOwner(address)", &[AbiValue::Address(address)]);
        let reader = WordReader::new(&calldata[4..]);
        assert_eq!(reader.address_at(0).unwrap(), address);
    }
}
