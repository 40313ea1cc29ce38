mod interfaces;
mod countrycodes;
pub(crate) mod digit_buffer;
pub(crate) mod regex_util;
pub(crate) mod string_util;

/// I decided to create this module because there are many
/// boilerplate places in the code that can be replaced with macros,
/// the name of which will describe what is happening more
/// clearly than a few lines of code.
mod macros;

#[cfg(test)]
mod tests;

pub use countrycodes::countrycodes::CountryCodes;
pub use countrycodes::errors::{CountryError, DispatchError};
pub use countrycodes::{CodeHint, FormatOptions, FormatStyle, PlausibilityHints, COUNTRY_CODES};
pub use digit_buffer::DigitBuffer;
pub use interfaces::Country;
pub use string_util::countrify;
