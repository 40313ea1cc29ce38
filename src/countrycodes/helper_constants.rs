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

/// The maximum length of the country calling code.
pub const MAX_LENGTH_COUNTRY_CODE: usize = 3;

// Plausibility window for a cleaned number, calling code included. The upper
// bound follows ITU E.164; anything shorter than 4 digits cannot carry a
// calling code plus a meaningful national number.
pub const MIN_PLAUSIBLE_LENGTH: usize = 4;
pub const MAX_PLAUSIBLE_LENGTH: usize = 15;

// Cleaning removes, in one combined pass:
//  * 0 or 00 at the very beginning (national/international call prefix;
//    we can't know which country the caller dialed from, so the intl'
//    prefix itself is all we can strip),
//  * (0) anywhere,
//  * non-digits.
pub const BASIC_CLEANING_PATTERN: &str = r"^00?|\(0|[^0-9]";

// Same pass, but keypad letters survive so vanity numbers stay decodable.
pub const VANITY_CLEANING_PATTERN: &str = r"^00?|\(0|[^0-9A-Za-z]";
