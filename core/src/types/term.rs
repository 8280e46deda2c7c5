use nutype::nutype;

pub const MAX_TERM_LENGTH: usize = 100;

/// A recent-search entry: trimmed, non-empty query text.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_TERM_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct SearchTerm(String);
