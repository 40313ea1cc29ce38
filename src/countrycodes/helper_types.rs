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

use regex::Regex;

use crate::regex_util::RegexFullMatch;

use super::enums::FormatStyle;

/// Options carried through `CountryCodes::format` to the country handler.
/// Countries may recognize further conventions on top of these (for example
/// a style that reattaches the calling code).
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormatOptions {
    pub style: FormatStyle,
    /// Separator between number groups; `None` leaves the choice to the
    /// country.
    pub spaces: Option<char>,
}

impl FormatOptions {
    pub fn with_style(style: FormatStyle) -> Self {
        Self {
            style,
            spaces: None,
        }
    }
}

/// A code expectation: either an exact string or a pattern the code must
/// fully match. Since calling codes are 1-3 digits, a pattern that merely
/// searched for a substring would make `4` accept both `44` and `41`, so
/// pattern hints are anchored to the whole code.
#[derive(Debug, Clone)]
pub enum CodeHint {
    Exact(String),
    Pattern(Regex),
}

impl CodeHint {
    pub fn matches(&self, code: &str) -> bool {
        match self {
            CodeHint::Exact(expected) => expected == code,
            CodeHint::Pattern(pattern) => pattern.full_match(code),
        }
    }
}

impl From<&str> for CodeHint {
    fn from(code: &str) -> Self {
        CodeHint::Exact(code.to_owned())
    }
}

impl From<String> for CodeHint {
    fn from(code: String) -> Self {
        CodeHint::Exact(code)
    }
}

impl From<Regex> for CodeHint {
    fn from(pattern: Regex) -> Self {
        CodeHint::Pattern(pattern)
    }
}

/// Hints narrowing a plausibility check. The `cc` hint is consumed by the
/// dispatch engine; the whole struct is forwarded to the country handler,
/// which typically checks `ndc` against its national destination codes.
#[derive(Debug, Default, Clone)]
pub struct PlausibilityHints {
    pub cc: Option<CodeHint>,
    pub ndc: Option<CodeHint>,
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::CodeHint;

    #[test]
    fn exact_hint_is_string_equality() {
        let hint = CodeHint::from("41");
        assert!(hint.matches("41"));
        assert!(!hint.matches("1"));
        assert!(!hint.matches("411"));
    }

    #[test]
    fn pattern_hint_must_match_the_whole_code() {
        let hint = CodeHint::from(Regex::new("4[14]").unwrap());
        assert!(hint.matches("41"));
        assert!(hint.matches("44"));
        assert!(!hint.matches("441"));

        let substring = CodeHint::from(Regex::new("4").unwrap());
        assert!(!substring.matches("44"));
    }
}
