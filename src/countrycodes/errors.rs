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

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum DispatchError {
    /// No registered calling code matches the first 1-3 digits of the
    /// cleaned input. Carries the unconsumed digits.
    #[error("No registered calling code matches the start of {0:?}")]
    UnresolvedCode(String),

    /// An explicitly supplied calling code is not registered.
    #[error("Unknown calling code provided: {0:?}")]
    UnknownCode(String),

    /// A country handler failed; propagated unchanged by every operation
    /// except the plausibility check.
    #[error("{0}")]
    Country(#[from] CountryError),
}

/// The failure type country handlers raise. Handlers are external to this
/// crate, so the payload is a plain message rather than a closed taxonomy.
#[derive(Debug, PartialEq, Error)]
#[error("Country handler failed: {0}")]
pub struct CountryError(pub String);

impl CountryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
