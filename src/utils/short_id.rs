use uuid::Uuid;

// ============================================================================
// Short Identifier Generation
// ============================================================================
//
// Identifiers are stored in VARCHAR(15) primary key columns, so a full UUID
// string is too long. We keep 88 random bits of a v4 UUID and render them in
// base62, which always fits in 15 characters.
//
// ============================================================================

/// Maximum length of a generated identifier
pub const MAX_ID_LEN: usize = 15;

const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Source of unique identifiers for orders and order items
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Default generator backed by random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortIdGenerator;

impl ShortIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for ShortIdGenerator {
    fn generate(&self) -> String {
        let raw = Uuid::new_v4().as_u128();
        // Bytes 0..6 and 11..16 carry no version/variant bits
        let high = raw >> 80;
        let low = raw & ((1u128 << 40) - 1);
        encode_base62((high << 40) | low)
    }
}

fn encode_base62(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::with_capacity(MAX_ID_LEN);
    while value > 0 {
        digits.push(ALPHABET[(value % 62) as usize]);
        value /= 62;
    }
    digits.reverse();

    // Alphabet is ASCII
    digits.into_iter().map(char::from).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================
