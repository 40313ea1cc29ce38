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

/// Prepends the calling code to the front of the number.
///
/// The prepend is unconditional: there is no check whether `number` already
/// starts with `cc`, so applying it twice double-prepends. Callers are
/// expected to pass a national remainder, never an already-countrified
/// number.
pub fn countrify(number: &str, cc: &str) -> String {
    fast_cat::concat_str!(cc, number)
}
