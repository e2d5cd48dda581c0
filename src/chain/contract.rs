//! Typed client for the pony contract
//!
//! Wraps the fixed contract address behind the handful of read and write
//! calls the page uses. Reads go through `eth_call`, writes submit an
//! `eth_sendTransaction` signed by the connected account.

use alloy_primitives::{hex, Address, U256};

use crate::chain::abi::{self, AbiError, AbiValue, WORD};
use crate::chain::error::ChainError;
use crate::services::ethereum;
use crate::utils::constants::CONTRACT_ADDRESS;

/// One collectible, as stored by the contract
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pony {
    pub id: U256,
    pub name: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pony {
    /// CSS color for the trait swatch
    pub fn css_color(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// One entry of the contract's adoption feed
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wave {
    pub adopter: String,
    pub message: String,
    pub timestamp: u64,
}

/// Contract handle bound to the connected account. Recreated whenever the
/// account changes; holds no state of its own.
#[derive(Clone, Debug)]
pub struct PonyContract {
    address: Address,
    from: Address,
}

impl PonyContract {
    pub fn new(from: &str) -> Result<Self, ChainError> {
        Ok(Self {
            address: CONTRACT_ADDRESS.parse::<Address>()?,
            from: from.parse::<Address>()?,
        })
    }

    /// Token IDs owned by the connected account
    pub async fn tokens_of_owner(&self) -> Result<Vec<U256>, ChainError> {
        let calldata = abi::encode_call(
            "tokensOfOwner(address)",
            &[AbiValue::Address(self.from)],
        );
        let raw = self.read(calldata).await?;
        Ok(abi::decode_u256_array(&raw)?)
    }

    /// Trait data for a single token
    pub async fn get_pony(&self, id: U256) -> Result<Pony, ChainError> {
        let calldata = abi::encode_call("getPony(uint256)", &[AbiValue::Uint(id)]);
        let raw = self.read(calldata).await?;
        Ok(decode_pony(id, &raw)?)
    }

    /// The contract's adoption feed, oldest first
    pub async fn get_all_waves(&self) -> Result<Vec<Wave>, ChainError> {
        let calldata = abi::encode_call("getAllWaves()", &[]);
        let raw = self.read(calldata).await?;
        Ok(decode_waves(&raw)?)
    }

    /// Mint a new pony with the given name. Returns the transaction hash;
    /// confirmation is not tracked here.
    pub async fn adopt(&self, name: &str) -> Result<String, ChainError> {
        let calldata = abi::encode_call("adopt(string)", &[AbiValue::Str(name.to_string())]);
        self.write(calldata).await
    }

    /// Mint a promotional pony with explicit gene values for `to`
    pub async fn create_promo_pony(
        &self,
        red: u8,
        green: u8,
        blue: u8,
        to: &str,
    ) -> Result<String, ChainError> {
        let to = to.parse::<Address>()?;
        let calldata = abi::encode_call(
            "createPromoPony(uint8,uint8,uint8,address)",
            &[
                AbiValue::Uint8(red),
                AbiValue::Uint8(green),
                AbiValue::Uint8(blue),
                AbiValue::Address(to),
            ],
        );
        self.write(calldata).await
    }

    async fn read(&self, calldata: Vec<u8>) -> Result<Vec<u8>, ChainError> {
        let result = ethereum::eth_call(&self.address.to_string(), &to_hex(&calldata)).await?;
        from_hex(&result)
    }

    async fn write(&self, calldata: Vec<u8>) -> Result<String, ChainError> {
        ethereum::send_transaction(
            &self.from.to_string(),
            &self.address.to_string(),
            &to_hex(&calldata),
        )
        .await
    }
}

/// Decode a `getPony` return: `(string name, uint8 red, uint8 green, uint8 blue)`
fn decode_pony(id: U256, data: &[u8]) -> Result<Pony, AbiError> {
    let reader = abi::WordReader::new(data);
    let name_offset = reader.usize_at(0)?;
    let red = reader.u8_at(1)?;
    let green = reader.u8_at(2)?;
    let blue = reader.u8_at(3)?;
    let name = reader.string_at(name_offset)?;
    Ok(Pony {
        id,
        name,
        red,
        green,
        blue,
    })
}

/// Decode a `getAllWaves` return: an array of
/// `(address waver, string message, uint256 timestamp)` tuples.
fn decode_waves(data: &[u8]) -> Result<Vec<Wave>, AbiError> {
    let reader = abi::WordReader::new(data);
    let array = reader.tail(reader.usize_at(0)?)?;
    let length = array.usize_at(0)?;

    // Element offsets are relative to the data area after the length word
    let elements = array.tail(WORD)?;
    let mut waves = Vec::with_capacity(length.min(1024));
    for index in 0..length {
        let element = elements.tail(elements.usize_at(index)?)?;
        let adopter = element.address_at(0)?;
        let message_offset = element.usize_at(1)?;
        let timestamp = element.u64_at(2)?;
        waves.push(Wave {
            adopter: adopter.to_string(),
            message: element.string_at(message_offset)?,
            timestamp,
        });
    }
    Ok(waves)
}

fn to_hex(calldata: &[u8]) -> String {
    format!("0x{}", hex::encode(calldata))
}

fn from_hex(result: &str) -> Result<Vec<u8>, ChainError> {
    Ok(hex::decode(result)?)
}
