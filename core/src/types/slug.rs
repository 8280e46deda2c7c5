use nutype::nutype;

/// URL path segment identifying a comic or chapter, e.g. `doc-bo-tieu-dao`.
#[nutype(
    new_unchecked,
    sanitize(trim, lowercase),
    validate(not_empty, predicate = |s: &str| s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
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
pub struct Slug(String);
