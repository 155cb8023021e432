use super::error::WalkError;

const FIRST_LETTER: char = 'a';
const LAST_LETTER: char = 'z';

/// Hands out single-letter type variables `a`, `b`, ... `z`.
///
/// Each walk owns its own generator. There is no wraparound: asking for a
/// letter after `z` has been issued fails with [`WalkError::LettersExhausted`].
#[derive(Debug, Clone)]
pub struct LetterGenerator {
    cursor: Option<char>,
}

impl Default for LetterGenerator {
    fn default() -> Self {
        Self {
            cursor: Some(FIRST_LETTER),
        }
    }
}

impl LetterGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_letter(&mut self) -> Result<String, WalkError> {
        let letter = self.cursor.ok_or(WalkError::LettersExhausted)?;
        self.cursor = if letter == LAST_LETTER {
            None
        } else {
            char::from_u32(letter as u32 + 1)
        };
        Ok(letter.to_string())
    }

    /// The letter the next call will return, if any remain
    pub fn peek(&self) -> Option<char> {
        self.cursor
    }
}
