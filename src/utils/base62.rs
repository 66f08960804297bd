//! Base62 encoding over the alphabet `0-9A-Za-z`.

/// The 62 symbols, in digit order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

pub const BASE: u64 = 62;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Base62Error {
    #[error("Invalid base62 character: '{0}'")]
    InvalidCharacter(char),

    #[error("Base62 value overflows u64")]
    Overflow,
}

/// Encodes a non-negative integer. `0` encodes as `"0"`.
pub fn encode(mut number: u64) -> String {
    if number == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    let mut digits = Vec::new();
    while number > 0 {
        digits.push(ALPHABET[(number % BASE) as usize]);
        number /= BASE;
    }
    digits.reverse();

    digits.into_iter().map(char::from).collect()
}

/// Decodes a base62 string back into an integer.
///
/// # Errors
///
/// Returns [`Base62Error::InvalidCharacter`] for symbols outside the alphabet
/// and [`Base62Error::Overflow`] when the value does not fit in a `u64`.
pub fn decode(value: &str) -> Result<u64, Base62Error> {
    value.chars().try_fold(0u64, |acc, ch| {
        let digit = digit_value(ch).ok_or(Base62Error::InvalidCharacter(ch))?;
        acc.checked_mul(BASE)
            .and_then(|v| v.checked_add(digit))
            .ok_or(Base62Error::Overflow)
    })
}

/// Returns true if every character of `value` belongs to the alphabet.
pub fn is_base62(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphanumeric())
}

fn digit_value(ch: char) -> Option<u64> {
    let value = match ch {
        '0'..='9' => ch as u64 - '0' as u64,
        'A'..='Z' => ch as u64 - 'A' as u64 + 10,
        'a'..='z' => ch as u64 - 'a' as u64 + 36,
        _ => return None,
    };
    Some(value)
}
