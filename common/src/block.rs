use std::fmt;

use primitive_types::U256;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::{BIG_BLOCK_GAS_LIMIT, GAS_LIMIT_TOLERANCE, SMALL_BLOCK_GAS_LIMIT};

// Block tags recognized by the upstream node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    Latest,
    Earliest,
    Safe,
    Finalized,
}

impl BlockTag {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "latest" => Some(Self::Latest),
            "earliest" => Some(Self::Earliest),
            "safe" => Some(Self::Safe),
            "finalized" => Some(Self::Finalized),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::Earliest => "earliest",
            Self::Safe => "safe",
            Self::Finalized => "finalized",
        }
    }
}

impl fmt::Display for BlockTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Accepted shapes for a caller-supplied block identifier
// Callers must hand over the specific value, the SDK never
// probes nested payloads for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockInput {
    Tag(BlockTag),
    Number(u64),
    Big(U256),
    Text(String),
}

impl From<BlockTag> for BlockInput {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl From<u64> for BlockInput {
    fn from(number: u64) -> Self {
        Self::Number(number)
    }
}

impl From<U256> for BlockInput {
    fn from(number: U256) -> Self {
        Self::Big(number)
    }
}

impl From<&str> for BlockInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for BlockInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

// Canonical block reference stored by a request
// Raw caller input is discarded once normalized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReference {
    Tag(BlockTag),
    // Canonical lowercase 0x-prefixed hex string
    Number(String),
}

impl BlockReference {
    // Single normalization entry point, infallible and deterministic.
    // Numbers are rendered as lowercase 0x-prefixed hex without leading
    // zeros (0x0 for zero). Text that is not a recognized tag is stored
    // verbatim, the upstream node rejects malformed values itself.
    pub fn normalize<I: Into<BlockInput>>(input: I) -> Self {
        match input.into() {
            BlockInput::Tag(tag) => Self::Tag(tag),
            BlockInput::Number(number) => Self::Number(format!("0x{:x}", number)),
            BlockInput::Big(number) => Self::Number(format!("0x{:x}", number)),
            BlockInput::Text(text) => match BlockTag::parse(&text) {
                Some(tag) => Self::Tag(tag),
                None => Self::Number(text),
            },
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Tag(tag) => tag.as_str(),
            Self::Number(text) => text,
        }
    }
}

impl fmt::Display for BlockReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// On the wire a block reference is a plain string parameter
impl Serialize for BlockReference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockReference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::normalize(text))
    }
}

// Coarse size category of a block, derived from its gas limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockSize {
    Big,
    Small,
    Unknown,
}

// Accepted shapes for an upstream-reported gas limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GasLimit {
    Int(u64),
    Big(U256),
    Text(String),
}

impl From<u64> for GasLimit {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<U256> for GasLimit {
    fn from(value: U256) -> Self {
        Self::Big(value)
    }
}

impl From<&str> for GasLimit {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for GasLimit {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl GasLimit {
    // Numeric magnitude of the reported value
    // Hex-prefixed text is parsed base 16, other text base 10
    // Values above u64::MAX saturate, they stay classifiable
    fn magnitude(&self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Big(value) => {
                if *value > U256::from(u64::MAX) {
                    Some(u64::MAX)
                } else {
                    Some(value.as_u64())
                }
            }
            Self::Text(text) => {
                if let Some(digits) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
                    u64::from_str_radix(digits, 16).ok()
                } else {
                    text.parse::<u64>().ok()
                }
            }
        }
    }
}

impl BlockSize {
    // Nearest-tier classification with a tolerance band around each
    // nominal gas limit. Values outside both bands fall back to a
    // midpoint comparison so every parseable value lands on a tier.
    // Exactly at the midpoint the strict comparison picks Small.
    pub fn classify(gas_limit: Option<GasLimit>) -> Self {
        let value = match gas_limit.as_ref().and_then(GasLimit::magnitude) {
            Some(value) => value,
            None => return Self::Unknown,
        };

        if value.abs_diff(BIG_BLOCK_GAS_LIMIT) <= GAS_LIMIT_TOLERANCE {
            Self::Big
        } else if value.abs_diff(SMALL_BLOCK_GAS_LIMIT) <= GAS_LIMIT_TOLERANCE {
            Self::Small
        } else if value > (SMALL_BLOCK_GAS_LIMIT + BIG_BLOCK_GAS_LIMIT) / 2 {
            Self::Big
        } else {
            Self::Small
        }
    }
}
