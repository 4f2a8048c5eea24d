//! Parser for the `n` then `n` integers input format.

use log::debug;

use crate::buffer::SortBuffer;
use crate::error::InputError;

/// Parse `text` into a buffer of at most `capacity` values.
///
/// Tokens are separated by any whitespace, so line breaks carry no meaning.
/// Values fill the buffer back to front: the first value read lands in slot
/// `n - 1`. Tokens after the `n`th value are ignored.
pub fn parse_input(text: &str, capacity: usize) -> Result<SortBuffer, InputError> {
    let mut tokens = text.split_ascii_whitespace();

    let count_token = tokens.next().ok_or(InputError::MissingCount)?;
    let count: i64 = count_token
        .parse()
        .map_err(|_| InputError::InvalidCount(count_token.to_owned()))?;
    let n = usize::try_from(count).map_err(|_| {
        if count < 0 {
            InputError::NegativeCount(count)
        } else {
            InputError::CapacityExceeded {
                requested: usize::MAX,
                capacity,
            }
        }
    })?;

    let mut buffer = SortBuffer::with_capacity(capacity);
    buffer.claim(n)?;
    for index in 0..n {
        let token = tokens
            .next()
            .ok_or(InputError::MissingValue { index, expected: n })?;
        let value = token.parse().map_err(|_| InputError::InvalidValue {
            index,
            token: token.to_owned(),
        })?;
        buffer.push(value);
    }
    // Read order is front to back; storage order is back to front.
    buffer.as_mut_slice().reverse();

    let extra = tokens.count();
    if extra > 0 {
        debug!("ignoring {extra} token(s) after {n} values");
    }
    Ok(buffer)
}
