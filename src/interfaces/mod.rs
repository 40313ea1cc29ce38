use crate::countrycodes::errors::CountryError;
use crate::countrycodes::{FormatOptions, PlausibilityHints};

/// One telephone-numbering-plan authority, identified by the calling code(s)
/// it is registered under.
///
/// Every method receives the national remainder: the digits left after the
/// dispatch engine has cleaned the raw input and consumed the calling code.
/// Handlers are long-lived; they are registered once and shared out of the
/// registry as `Arc<dyn Country>`.
pub trait Country: Send + Sync {
    /// Normalizes the national remainder into its canonical national form.
    /// The engine reattaches the calling code to the result.
    fn normalize(&self, national: &str) -> Result<String, CountryError>;

    /// Splits the national remainder into its ordered number parts
    /// (national destination code, local groups).
    fn split(&self, national: &str) -> Result<Vec<String>, CountryError>;

    /// Formats the national remainder. Semantics of the options, including
    /// whether the calling code is reattached, are country-defined.
    fn format(&self, national: &str, options: &FormatOptions) -> Result<String, CountryError>;

    /// Best-effort plausibility judgement for the national remainder. The
    /// `cc` hint has already been checked by the engine; the remaining hints
    /// are country-defined.
    fn is_plausible(&self, national: &str, hints: &PlausibilityHints)
        -> Result<bool, CountryError>;

    /// Whether the national remainder encodes keypad letters.
    fn is_vanity(&self, national: &str) -> Result<bool, CountryError>;

    /// Decodes keypad letters in the national remainder to pure digits.
    fn vanity_to_number(&self, national: &str) -> Result<String, CountryError>;

    fn is_service(&self, national: &str) -> Result<bool, CountryError>;
    fn is_mobile(&self, national: &str) -> Result<bool, CountryError>;
    fn is_landline(&self, national: &str) -> Result<bool, CountryError>;
}
