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

use std::{borrow::Cow, sync::Arc};

use dashmap::DashMap;
use log::{trace, warn};
use regex::Regex;

use crate::{
    countrycodes::{
        errors::DispatchError,
        helper_constants::{
            BASIC_CLEANING_PATTERN, MAX_LENGTH_COUNTRY_CODE, MAX_PLAUSIBLE_LENGTH,
            MIN_PLAUSIBLE_LENGTH, VANITY_CLEANING_PATTERN,
        },
        FormatOptions, PlausibilityHints,
    },
    digit_buffer::DigitBuffer,
    interfaces::Country,
    macros::{delegate_national_predicate, owned_from_cow_or},
    string_util::countrify,
};

// Helper type for Result
pub type Result<T> = std::result::Result<T, DispatchError>;

/// The country-code dispatch engine: a registry mapping calling codes to
/// country handlers, plus the orchestration every public operation funnels
/// through (clean the raw input, resolve the calling code, delegate to the
/// matched country, reassemble).
///
/// Calling codes are globally prefix-free, so scanning lengths 1 to 3 and
/// testing for an exact match yields at most one hit, and the first length
/// that hits is the unique resolution. Prefix-freeness is an external
/// invariant of the ITU numbering plan; when it is violated, or the registry
/// is incomplete, resolution fails with an explicit error instead of picking
/// a handler arbitrarily.
pub struct CountryCodes {
    /// Two-level mapping: code length (index + 1) to code string to handler.
    countries_by_length: [DashMap<String, Arc<dyn Country>>; MAX_LENGTH_COUNTRY_CODE],

    basic_cleaning_pattern: Regex,
    vanity_cleaning_pattern: Regex,
}

impl CountryCodes {
    /// Builds an empty registry. Most callers want the shared
    /// `COUNTRY_CODES` instance; tests construct isolated registries.
    pub fn new() -> Self {
        Self {
            countries_by_length: [DashMap::new(), DashMap::new(), DashMap::new()],
            basic_cleaning_pattern: Regex::new(BASIC_CLEANING_PATTERN)
                .expect("Invalid constant pattern!"),
            vanity_cleaning_pattern: Regex::new(VANITY_CLEANING_PATTERN)
                .expect("Invalid constant pattern!"),
        }
    }

    /// Registers `country` under the given calling code. Re-registering a
    /// code silently replaces the previous handler. Codes that are not 1-3
    /// ASCII digits can never be resolved out of a digit stream, so they are
    /// rejected instead of becoming dead registry entries.
    pub fn add(&self, code: &str, country: Arc<dyn Country>) {
        if code.is_empty()
            || code.len() > MAX_LENGTH_COUNTRY_CODE
            || !code.bytes().all(|byte| byte.is_ascii_digit())
        {
            warn!("Ignoring registration under invalid calling code {:?}", code);
            return;
        }
        self.countries_by_length[code.len() - 1].insert(code.to_owned(), country);
    }

    /// Exact lookup by code length, then code string.
    pub fn lookup(&self, code: &str) -> Option<Arc<dyn Country>> {
        if code.is_empty() || code.len() > MAX_LENGTH_COUNTRY_CODE {
            return None;
        }
        self.countries_by_length[code.len() - 1]
            .get(code)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// All registered calling codes, shortest first, each length bucket in
    /// lexicographic order.
    pub fn supported_calling_codes(&self) -> Vec<String> {
        let mut codes = Vec::new();
        for table in &self.countries_by_length {
            let mut bucket: Vec<String> = table.iter().map(|entry| entry.key().clone()).collect();
            bucket.sort_unstable();
            codes.extend(bucket);
        }
        codes
    }

    /// Resolves the calling code at the front of the buffer.
    ///
    /// Scans code lengths 1 to 3 ascending; each candidate prefix is peeked
    /// without committing, and the removal is committed only on the first
    /// match, leaving the buffer holding the national remainder.
    pub fn resolve_prefix(
        &self,
        number: &mut DigitBuffer,
    ) -> Result<(Arc<dyn Country>, String)> {
        for length in 1..=MAX_LENGTH_COUNTRY_CODE {
            let Some(candidate) = number.peek(length) else {
                break;
            };
            let Some(country) = self.countries_by_length[length - 1]
                .get(candidate)
                .map(|entry| Arc::clone(entry.value()))
            else {
                continue;
            };
            let code = candidate.to_owned();
            // peek already verified the length
            let _ = number.remove_prefix(length);
            trace!("resolved calling code {} leaving remainder {:?}", code, number.as_str());
            return Ok((country, code));
        }
        Err(DispatchError::UnresolvedCode(number.as_str().to_owned()))
    }

    /// Cleans the number of all non-digit characters, initial zeros or `(0`.
    /// A `Cow::Borrowed` result means no substitution occurred.
    pub fn clean<'a>(&self, number: &'a str) -> Cow<'a, str> {
        self.basic_cleaning_pattern.replace_all(number, "")
    }

    /// Cleaning variant for vanity flows; keypad letters survive.
    pub fn clean_vanity<'a>(&self, number: &'a str) -> Cow<'a, str> {
        self.vanity_cleaning_pattern.replace_all(number, "")
    }

    /// Normalizes the number and reattaches its calling code, yielding the
    /// canonical international representation.
    pub fn normalize(&self, raw: &str) -> Result<String> {
        let (country, cc, remainder) = self.resolved(raw)?;
        let national = country.normalize(remainder.as_str())?;
        Ok(countrify(&national, &cc))
    }

    /// Normalize with an explicitly supplied calling code. The raw input is
    /// handed to the country without cleaning; it is taken to already be a
    /// national number.
    pub fn normalize_with_cc(&self, raw: &str, cc: &str) -> Result<String> {
        let Some(country) = self.lookup(cc) else {
            warn!("Unknown calling code provided: {:?}", cc);
            return Err(DispatchError::UnknownCode(cc.to_owned()));
        };
        let national = country.normalize(raw)?;
        Ok(countrify(&national, cc))
    }

    /// Splits the number into the country's own part breakdown. The country
    /// and calling code are not part of the result; operations that need
    /// them resolve internally.
    pub fn split(&self, raw: &str) -> Result<Vec<String>> {
        let (country, _, remainder) = self.resolved(raw)?;
        Ok(country.split(remainder.as_str())?)
    }

    /// Formats the number according to the country's conventions. The
    /// calling code is not reattached; countries may recognize an option
    /// that does.
    pub fn format(&self, raw: &str, options: &FormatOptions) -> Result<String> {
        let (country, _, remainder) = self.resolved(raw)?;
        trace!("formatting national remainder in {} style", options.style);
        Ok(country.format(remainder.as_str(), options)?)
    }

    pub fn formatted(&self, raw: &str, options: &FormatOptions) -> Result<String> {
        self.format(raw, options)
    }

    /// The handler responsible for the number. The national remainder stays
    /// internal.
    pub fn country_for(&self, raw: &str) -> Result<Arc<dyn Country>> {
        let (country, _, _) = self.resolved(raw)?;
        Ok(country)
    }

    delegate_national_predicate!(
        /// Whether the number is a service number, as judged by its country.
        is_service
    );

    delegate_national_predicate!(
        /// Whether the number is a mobile number, as judged by its country.
        is_mobile
    );

    delegate_national_predicate!(
        /// Whether the number is a landline number, as judged by its country.
        is_landline
    );

    /// Whether the number encodes keypad letters.
    pub fn is_vanity(&self, raw: &str) -> Result<bool> {
        let (country, _, remainder) = self.resolved_vanity(raw)?;
        Ok(country.is_vanity(remainder.as_str())?)
    }

    /// Decodes a vanity number into plain digits, calling code included.
    pub fn vanity_to_number(&self, raw: &str) -> Result<String> {
        let (country, cc, remainder) = self.resolved_vanity(raw)?;
        let national = country.vanity_to_number(remainder.as_str())?;
        Ok(countrify(&national, &cc))
    }

    /// Best-effort plausibility check. Error-free by contract: every failure
    /// along the way, from an unresolvable calling code to a failing country
    /// handler, folds to `false`.
    pub fn is_plausible(&self, raw: &str, hints: &PlausibilityHints) -> bool {
        self.plausibility(raw, hints).unwrap_or(false)
    }

    fn plausibility(&self, raw: &str, hints: &PlausibilityHints) -> Result<bool> {
        let cleaned = owned_from_cow_or!(self.clean(raw), raw.to_owned());
        if !(MIN_PLAUSIBLE_LENGTH..=MAX_PLAUSIBLE_LENGTH).contains(&cleaned.len()) {
            return Ok(false);
        }

        let mut number = DigitBuffer::new(cleaned);
        let (country, cc) = self.resolve_prefix(&mut number)?;

        if let Some(expected) = &hints.cc {
            if !expected.matches(&cc) {
                return Ok(false);
            }
        }

        Ok(country.is_plausible(number.as_str(), hints)?)
    }

    /// Clean the raw input, then resolve; the returned buffer holds the
    /// national remainder. Every digit-based operation reuses this.
    fn resolved(&self, raw: &str) -> Result<(Arc<dyn Country>, String, DigitBuffer)> {
        let cleaned = owned_from_cow_or!(self.clean(raw), raw.to_owned());
        let mut number = DigitBuffer::new(cleaned);
        let (country, cc) = self.resolve_prefix(&mut number)?;
        Ok((country, cc, number))
    }

    fn resolved_vanity(&self, raw: &str) -> Result<(Arc<dyn Country>, String, DigitBuffer)> {
        let cleaned = owned_from_cow_or!(self.clean_vanity(raw), raw.to_owned());
        let mut number = DigitBuffer::new(cleaned);
        let (country, cc) = self.resolve_prefix(&mut number)?;
        Ok((country, cc, number))
    }
}

impl Default for CountryCodes {
    fn default() -> Self {
        Self::new()
    }
}
