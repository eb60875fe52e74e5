//! Field predicates
//!
//! A field predicate is the boolean rule deciding whether one control's
//! current value is acceptable. Predicates here are pure functions over
//! string slices: they never touch the form, so each rule is testable in
//! isolation and the validator stays a thin walk over the field list.
//!
//! Values are trimmed of surrounding whitespace before emptiness and length
//! checks, but character-class checks see the raw value.

pub mod date;
pub mod string;

pub use date::{month_is_past, parse_year_month};
pub use string::{
    address_min_len, email_shape, exact_digits, full_name_chars, plot_number_chars, region_chars,
    street_name_chars, trimmed_not_empty,
};
