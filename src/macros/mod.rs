// std::borrow::Cow
// std::option::Option

/// This macro extracts owned value from cow
/// but if cow is borrowed it returns default given value
///
/// it's helpful when function returns `Cow<'_, T>` as result,
/// where `Cow::Borrowed` option marks that value was not modified
/// and we can use owned original instead of copying it.
macro_rules! owned_from_cow_or {
    ($getcow:expr, $default:expr) => {{
        if let std::borrow::Cow::Owned(s) = $getcow {
            s
        } else {
            $default
        }
    }};
}

pub(crate) use owned_from_cow_or;

/// Generates a public predicate on `CountryCodes` that cleans the raw input,
/// resolves the country by calling code and delegates the predicate of the
/// same name on the national remainder.
///
/// The service/mobile/landline operations differ only in the method they
/// delegate to.
macro_rules! delegate_national_predicate {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub fn $name(&self, raw: &str) -> Result<bool> {
            let (country, _, remainder) = self.resolved(raw)?;
            Ok(country.$name(remainder.as_str())?)
        }
    };
}

pub(crate) use delegate_national_predicate;
