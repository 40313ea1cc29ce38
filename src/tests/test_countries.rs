//! Fixture country handlers with deliberately small rule sets. They cover
//! just enough of a real numbering plan to exercise every dispatch path:
//! a NANP-like plan with vanity numbers, two European plans whose codes
//! share a first digit, and a handler that always fails.

use crate::{Country, CountryError, FormatOptions, FormatStyle, PlausibilityHints};

/// Maps a keypad letter to its digit, as printed on a standard telephone
/// keypad.
fn keypad_digit(letter: char) -> Option<char> {
    Some(match letter.to_ascii_uppercase() {
        'A'..='C' => '2',
        'D'..='F' => '3',
        'G'..='I' => '4',
        'J'..='L' => '5',
        'M'..='O' => '6',
        'P'..='S' => '7',
        'T'..='V' => '8',
        'W'..='Z' => '9',
        _ => return None,
    })
}

fn split_groups(national: &str, widths: &[usize]) -> Result<Vec<String>, CountryError> {
    if national.len() != widths.iter().sum::<usize>() {
        return Err(CountryError::new(format!(
            "expected {} digits, got {}",
            widths.iter().sum::<usize>(),
            national.len()
        )));
    }
    let mut parts = Vec::with_capacity(widths.len());
    let mut rest = national;
    for width in widths {
        let (part, tail) = rest.split_at(*width);
        parts.push(part.to_owned());
        rest = tail;
    }
    Ok(parts)
}

fn join(parts: &[String], separator: char) -> String {
    parts.join(&separator.to_string())
}

/// Calling code 1. Ten-digit numbers split 3-3-4; toll-free prefixes are
/// service numbers; letters decode via the keypad.
pub struct NanpFixture;

impl Country for NanpFixture {
    fn normalize(&self, national: &str) -> Result<String, CountryError> {
        if national.is_empty() {
            return Err(CountryError::new("empty national number"));
        }
        Ok(national.to_owned())
    }

    fn split(&self, national: &str) -> Result<Vec<String>, CountryError> {
        split_groups(national, &[3, 3, 4])
    }

    fn format(&self, national: &str, options: &FormatOptions) -> Result<String, CountryError> {
        let parts = self.split(national)?;
        let separator = options.spaces.unwrap_or(' ');
        Ok(match options.style {
            FormatStyle::International => join(&parts, separator),
            FormatStyle::National => format!(
                "({}) {}{}{}",
                parts[0], parts[1], separator, parts[2]
            ),
            FormatStyle::Local => join(&parts[1..], separator),
        })
    }

    fn is_plausible(
        &self,
        national: &str,
        hints: &PlausibilityHints,
    ) -> Result<bool, CountryError> {
        if national.len() != 10 {
            return Ok(false);
        }
        if let Some(ndc) = &hints.ndc {
            if !ndc.matches(&national[..3]) {
                return Ok(false);
            }
        }
        Ok(!national.starts_with('0') && !national.starts_with('1'))
    }

    fn is_vanity(&self, national: &str) -> Result<bool, CountryError> {
        Ok(national.chars().any(|c| c.is_ascii_alphabetic()))
    }

    fn vanity_to_number(&self, national: &str) -> Result<String, CountryError> {
        national
            .chars()
            .map(|c| {
                if c.is_ascii_digit() {
                    Some(c)
                } else {
                    keypad_digit(c)
                }
            })
            .collect::<Option<String>>()
            .ok_or_else(|| CountryError::new("number contains non-keypad characters"))
    }

    fn is_service(&self, national: &str) -> Result<bool, CountryError> {
        Ok(["800", "844", "855", "866", "877", "888"]
            .iter()
            .any(|prefix| national.starts_with(prefix)))
    }

    fn is_mobile(&self, _national: &str) -> Result<bool, CountryError> {
        // The NANP does not distinguish mobile numbers by prefix.
        Ok(false)
    }

    fn is_landline(&self, national: &str) -> Result<bool, CountryError> {
        Ok(!self.is_service(national)?)
    }
}

/// Calling code 41. Nine-digit numbers split 2-3-2-2; a national prefix `0`
/// is dropped during normalization; mobile numbers start with 7.
pub struct HelvetiaFixture;

impl Country for HelvetiaFixture {
    fn normalize(&self, national: &str) -> Result<String, CountryError> {
        Ok(national.strip_prefix('0').unwrap_or(national).to_owned())
    }

    fn split(&self, national: &str) -> Result<Vec<String>, CountryError> {
        split_groups(national, &[2, 3, 2, 2])
    }

    fn format(&self, national: &str, options: &FormatOptions) -> Result<String, CountryError> {
        let parts = self.split(national)?;
        let separator = options.spaces.unwrap_or(' ');
        Ok(match options.style {
            FormatStyle::International => join(&parts, separator),
            FormatStyle::National => format!("0{}", join(&parts, separator)),
            FormatStyle::Local => join(&parts[1..], separator),
        })
    }

    fn is_plausible(
        &self,
        national: &str,
        hints: &PlausibilityHints,
    ) -> Result<bool, CountryError> {
        if national.len() != 9 {
            return Ok(false);
        }
        if let Some(ndc) = &hints.ndc {
            if !ndc.matches(&national[..2]) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_vanity(&self, _national: &str) -> Result<bool, CountryError> {
        Ok(false)
    }

    fn vanity_to_number(&self, _national: &str) -> Result<String, CountryError> {
        Err(CountryError::new("no vanity numbering plan"))
    }

    fn is_service(&self, national: &str) -> Result<bool, CountryError> {
        Ok(national.starts_with("800"))
    }

    fn is_mobile(&self, national: &str) -> Result<bool, CountryError> {
        Ok(national.starts_with('7'))
    }

    fn is_landline(&self, national: &str) -> Result<bool, CountryError> {
        Ok(!self.is_mobile(national)? && !self.is_service(national)?)
    }
}

/// Calling code 44. Ten-digit numbers split 2-4-4; mobile numbers start
/// with 7.
pub struct AlbionFixture;

impl Country for AlbionFixture {
    fn normalize(&self, national: &str) -> Result<String, CountryError> {
        Ok(national.strip_prefix('0').unwrap_or(national).to_owned())
    }

    fn split(&self, national: &str) -> Result<Vec<String>, CountryError> {
        split_groups(national, &[2, 4, 4])
    }

    fn format(&self, national: &str, options: &FormatOptions) -> Result<String, CountryError> {
        let parts = self.split(national)?;
        let separator = options.spaces.unwrap_or(' ');
        Ok(match options.style {
            FormatStyle::International => join(&parts, separator),
            FormatStyle::National => format!("(0{}) {}", parts[0], join(&parts[1..], separator)),
            FormatStyle::Local => join(&parts[1..], separator),
        })
    }

    fn is_plausible(
        &self,
        national: &str,
        hints: &PlausibilityHints,
    ) -> Result<bool, CountryError> {
        if national.len() != 10 {
            return Ok(false);
        }
        if let Some(ndc) = &hints.ndc {
            if !ndc.matches(&national[..2]) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_vanity(&self, _national: &str) -> Result<bool, CountryError> {
        Ok(false)
    }

    fn vanity_to_number(&self, _national: &str) -> Result<String, CountryError> {
        Err(CountryError::new("no vanity numbering plan"))
    }

    fn is_service(&self, national: &str) -> Result<bool, CountryError> {
        Ok(national.starts_with("80"))
    }

    fn is_mobile(&self, national: &str) -> Result<bool, CountryError> {
        Ok(national.starts_with('7'))
    }

    fn is_landline(&self, national: &str) -> Result<bool, CountryError> {
        Ok(!self.is_mobile(national)? && !self.is_service(national)?)
    }
}

/// Calling code 832. Every delegate call fails; used to verify error
/// propagation and the plausibility check's catch-everything contract.
pub struct FlakyFixture;

impl FlakyFixture {
    fn failure<T>() -> Result<T, CountryError> {
        Err(CountryError::new("the rules for this plan are broken"))
    }
}

impl Country for FlakyFixture {
    fn normalize(&self, _national: &str) -> Result<String, CountryError> {
        Self::failure()
    }

    fn split(&self, _national: &str) -> Result<Vec<String>, CountryError> {
        Self::failure()
    }

    fn format(&self, _national: &str, _options: &FormatOptions) -> Result<String, CountryError> {
        Self::failure()
    }

    fn is_plausible(
        &self,
        _national: &str,
        _hints: &PlausibilityHints,
    ) -> Result<bool, CountryError> {
        Self::failure()
    }

    fn is_vanity(&self, _national: &str) -> Result<bool, CountryError> {
        Self::failure()
    }

    fn vanity_to_number(&self, _national: &str) -> Result<String, CountryError> {
        Self::failure()
    }

    fn is_service(&self, _national: &str) -> Result<bool, CountryError> {
        Self::failure()
    }

    fn is_mobile(&self, _national: &str) -> Result<bool, CountryError> {
        Self::failure()
    }

    fn is_landline(&self, _national: &str) -> Result<bool, CountryError> {
        Self::failure()
    }
}
