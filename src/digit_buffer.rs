// Copyright (C) 2026 The rphony Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// A phone number in progress: an owned, cleaned character sequence plus a
/// cursor that advances as prefixes are consumed.
///
/// Calling-code extraction and national-number extraction compose on the same
/// buffer: after a successful resolution the buffer holds the unconsumed
/// remainder. Advancing the cursor never reallocates or shifts bytes.
///
/// Contents are ASCII after cleaning (decimal digits, plus keypad letters in
/// vanity flows), so byte offsets are always char boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer {
    number: String,
    offset: usize,
}

impl DigitBuffer {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            offset: 0,
        }
    }

    /// Returns the first `n` characters of the remainder without consuming
    /// them, or `None` if fewer than `n` characters remain.
    pub fn peek(&self, n: usize) -> Option<&str> {
        self.number.get(self.offset..self.offset.checked_add(n)?)
    }

    /// Removes and returns the first `n` characters; the buffer is left
    /// holding only the remainder. `None` if fewer than `n` remain, in which
    /// case the buffer is untouched.
    pub fn remove_prefix(&mut self, n: usize) -> Option<&str> {
        let end = self.offset.checked_add(n)?;
        if end > self.number.len() {
            return None;
        }
        let start = self.offset;
        self.offset = end;
        Some(&self.number[start..end])
    }

    /// The unconsumed remainder.
    pub fn as_str(&self) -> &str {
        &self.number[self.offset..]
    }

    pub fn len(&self) -> usize {
        self.number.len() - self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.number.len()
    }
}

impl From<String> for DigitBuffer {
    fn from(number: String) -> Self {
        Self::new(number)
    }
}

#[cfg(test)]
mod tests {
    use super::DigitBuffer;

    #[test]
    fn remove_prefix_advances_without_copying() {
        let mut buffer = DigitBuffer::new("44207123456");
        assert_eq!(buffer.peek(2), Some("44"));
        // peeking commits nothing
        assert_eq!(buffer.as_str(), "44207123456");

        assert_eq!(buffer.remove_prefix(2), Some("44"));
        assert_eq!(buffer.as_str(), "207123456");
        assert_eq!(buffer.len(), 9);

        assert_eq!(buffer.remove_prefix(9), Some("207123456"));
        assert!(buffer.is_empty());
    }

    #[test]
    fn out_of_range_requests_leave_the_buffer_untouched() {
        let mut buffer = DigitBuffer::new("123");
        assert_eq!(buffer.peek(4), None);
        assert_eq!(buffer.remove_prefix(4), None);
        assert_eq!(buffer.as_str(), "123");
        assert_eq!(buffer.remove_prefix(usize::MAX), None);
    }
}
