//! String predicates for the scripted field rules.

/// True when the value is non-empty after trimming surrounding whitespace.
///
/// # Example
///
/// ```
/// use formwell::predicate::trimmed_not_empty;
///
/// assert!(trimmed_not_empty("Jane"));
/// assert!(!trimmed_not_empty(""));
/// assert!(!trimmed_not_empty("   "));
/// ```
#[inline]
pub fn trimmed_not_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Character rule for the full-name field: letters, whitespace, hyphens,
/// apostrophes, and dots.
///
/// # Example
///
/// ```
/// use formwell::predicate::full_name_chars;
///
/// assert!(full_name_chars("Jean-Luc O'Brien Jr."));
/// assert!(!full_name_chars("John123"));
/// ```
#[inline]
pub fn full_name_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '-' | '\'' | '.'))
}

/// Character rule for the plot/house number: letters, digits, whitespace,
/// slash, comma, and hyphen.
#[inline]
pub fn plot_number_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '/' | ',' | '-'))
}

/// Character rule for the street name: letters, digits, whitespace, dot,
/// comma, apostrophe, and hyphen.
#[inline]
pub fn street_name_chars(value: &str) -> bool {
    value.chars().all(|c| {
        c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, '.' | ',' | '\'' | '-')
    })
}

/// Character rule shared by the district and state fields: letters,
/// whitespace, dot, and hyphen.
#[inline]
pub fn region_chars(value: &str) -> bool {
    value
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || matches!(c, '.' | '-'))
}

/// Shape check for an email address: no whitespace, exactly one `@` with a
/// non-empty local part, and a dot strictly inside the domain part.
///
/// # Example
///
/// ```
/// use formwell::predicate::email_shape;
///
/// assert!(email_shape("a@b.c"));
/// assert!(!email_shape("a@b"));        // no dot in the domain
/// assert!(!email_shape("a@.c"));       // dot at the domain edge
/// assert!(!email_shape("a b@c.d"));    // whitespace
/// assert!(!email_shape("a@b@c.d"));    // second @
/// ```
pub fn email_shape(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The dot must have at least one character on each side.
    domain.len() >= 3 && domain.as_bytes()[1..domain.len() - 1].contains(&b'.')
}

/// True when the value is exactly `n` ASCII digits.
///
/// # Example
///
/// ```
/// use formwell::predicate::exact_digits;
///
/// assert!(exact_digits("1234567890", 10));
/// assert!(!exact_digits("123456789", 10));
/// assert!(!exact_digits("12345678o0", 10));
/// ```
#[inline]
pub fn exact_digits(value: &str, n: usize) -> bool {
    value.len() == n && value.bytes().all(|b| b.is_ascii_digit())
}

/// True when the trimmed value is at least `min` characters long.
///
/// Used by the compact variant's free-text delivery address, which asks for
/// a complete address rather than constraining its characters.
#[inline]
pub fn address_min_len(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}
