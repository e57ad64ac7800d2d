use thiserror::Error;

// Expected digit count of a transaction hash, without the 0x prefix
const TRANSACTION_HASH_DIGITS: usize = 64;

#[derive(Debug, Clone, Error)]
pub enum ValidationError {
    #[error("Hex string must start with '0x': {0}")]
    MissingPrefix(String),
    #[error("Invalid hex character '{0}' in: {1}")]
    InvalidCharacter(char, String),
    #[error("Transaction hash must be 0x followed by 64 hex characters: {0} (length: {1})")]
    InvalidHashLength(String, usize),
}

// Validate that a string is 0x-prefixed and hex digits only
pub fn validate_hex_format(value: &str) -> Result<(), ValidationError> {
    let digits = match value.strip_prefix("0x") {
        Some(digits) => digits,
        None => return Err(ValidationError::MissingPrefix(value.to_owned())),
    };

    for character in digits.chars() {
        if !character.is_ascii_hexdigit() {
            return Err(ValidationError::InvalidCharacter(
                character,
                value.to_owned(),
            ));
        }
    }

    Ok(())
}

// Validate the literal shape of a transaction hash: 0x followed by
// exactly 64 hex characters. Purely syntactic, no network access.
pub fn validate_transaction_hash(hash: &str) -> Result<(), ValidationError> {
    validate_hex_format(hash)?;

    let digits = hash.len() - 2;
    if digits != TRANSACTION_HASH_DIGITS {
        return Err(ValidationError::InvalidHashLength(hash.to_owned(), digits));
    }

    Ok(())
}

pub fn is_valid_transaction_hash(hash: &str) -> bool {
    validate_transaction_hash(hash).is_ok()
}
