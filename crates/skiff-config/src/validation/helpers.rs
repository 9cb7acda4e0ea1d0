//! Checks shared by the section validators.

use std::fmt::Display;
use std::ops::RangeInclusive;

/// Record `name` as invalid unless `value` lies in `range`.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

/// Record `name` as invalid unless the command template starts with a program.
pub(crate) fn check_command(errors: &mut Vec<String>, name: &str, argv: &[String]) {
    if argv.first().map_or(true, |p| p.trim().is_empty()) {
        errors.push(format!("{name} must name a program"));
    }
}
