mod helper_constants;
pub mod errors;
pub mod enums;
pub mod countrycodes;
mod helper_types;

use std::sync::LazyLock;

pub use enums::FormatStyle;
pub use helper_types::{CodeHint, FormatOptions, PlausibilityHints};

use crate::countrycodes::countrycodes::CountryCodes;

/// The process-wide registry. Populated by `add` calls during startup and
/// read-only afterwards; the concurrent tables make a late registration safe
/// as well.
pub static COUNTRY_CODES: LazyLock<CountryCodes> = LazyLock::new(|| {
    CountryCodes::new()
});
