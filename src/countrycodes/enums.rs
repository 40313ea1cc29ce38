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

use strum::{Display, EnumIter};

/// The formatting styles countries are asked to render.
///
/// The concrete rendering is country-defined; the engine only carries the
/// request through. For the Google Switzerland office number:
/// - **International**: `44 668 18 00` (calling code not reattached by the
///   engine; countries may render it when asked)
/// - **National**: `044 668 18 00`
/// - **Local**: `668 18 00`
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum FormatStyle {
    #[default]
    International,
    National,
    Local,
}
