//! Accessors for `<select>` elements.
//!
//! A reference may designate several `<select>` elements: every accessor applies to each
//! of them in document order, and getters return one entry per element.

use std::any::type_name;
use std::str::FromStr;

use tracing::debug;
use wasm_bindgen::JsCast as _;
use web_sys::Document;
use web_sys::HtmlSelectElement;

use crate::error::NodeToolsError;
use crate::reference::ElementRef;
use crate::reference::resolve_elements;
use crate::report::OrReport as _;
use crate::report::Reporter;

/// The index of the option to select. Anything that is not a number clears the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectIndex(i32);

impl SelectIndex {
    pub const CLEAR: Self = Self(-1);

    pub fn get(self) -> i32 {
        self.0
    }

    /// Reads the leading integer of `index`, the way `parseInt(index)` does:
    /// `"2"`, `" 2"`, `"2nd"` and `"0x2"` are 2, `""` and `"second"` clear the selection.
    pub fn parse(index: &str) -> Self {
        let index = index.trim_start();
        let (negative, index) = match index.as_bytes().first() {
            Some(b'-') => (true, &index[1..]),
            Some(b'+') => (false, &index[1..]),
            _ => (false, index),
        };
        let (radix, digits) = match index.get(..2) {
            Some("0x" | "0X") => (16, &index[2..]),
            _ => (10, index),
        };
        let digits = digits
            .chars()
            .map_while(|digit| digit.to_digit(radix))
            .map(|digit| digit as i32)
            .collect::<Vec<_>>();
        if digits.is_empty() {
            return Self::CLEAR;
        }
        let radix = radix as i32;
        let value = digits.into_iter().fold(0i32, |value, digit| {
            value.saturating_mul(radix).saturating_add(digit)
        });
        Self(if negative { -value } else { value })
    }
}

impl Default for SelectIndex {
    fn default() -> Self {
        Self::CLEAR
    }
}

impl From<i32> for SelectIndex {
    fn from(index: i32) -> Self {
        Self(index)
    }
}

impl From<Option<i32>> for SelectIndex {
    fn from(index: Option<i32>) -> Self {
        index.map(Self).unwrap_or_default()
    }
}

impl From<&str> for SelectIndex {
    fn from(index: &str) -> Self {
        Self::parse(index)
    }
}

impl From<Option<&str>> for SelectIndex {
    fn from(index: Option<&str>) -> Self {
        index.map(Self::parse).unwrap_or_default()
    }
}

/// The value of the selected option of each `<select>`, `None` when nothing is selected.
pub fn get_select_value(
    document: &Document,
    reporter: &dyn Reporter,
    reference: &ElementRef,
) -> Vec<Option<String>> {
    selects(document, reporter, reference)
        .iter()
        .map(|select| (select.selected_index() >= 0).then(|| select.value()))
        .collect()
}

/// Like [get_select_value], parsing each value as a `T`.
///
/// Values that don't parse are reported and read as `None`.
pub fn get_select_value_as<T: FromStr>(
    document: &Document,
    reporter: &dyn Reporter,
    reference: &ElementRef,
) -> Vec<Option<T>> {
    get_select_value(document, reporter, reference)
        .into_iter()
        .map(|value| {
            let value = value?;
            value
                .parse()
                .map_err(|_| NodeToolsError::InvalidValue {
                    value,
                    expected: type_name::<T>(),
                })
                .or_report(reporter)
        })
        .collect()
}

/// The index of the selected option of each `<select>`, `-1` when nothing is selected.
pub fn get_select_index(
    document: &Document,
    reporter: &dyn Reporter,
    reference: &ElementRef,
) -> Vec<i32> {
    selects(document, reporter, reference)
        .iter()
        .map(HtmlSelectElement::selected_index)
        .collect()
}

/// Selects the option at `index` in each `<select>`.
pub fn set_select_index(
    document: &Document,
    reporter: &dyn Reporter,
    reference: &ElementRef,
    index: impl Into<SelectIndex>,
) {
    let index = index.into().get();
    for select in selects(document, reporter, reference) {
        select.set_selected_index(index);
    }
    debug!(%reference, index, "Set select index");
}

/// The `<select>` elements designated by the reference. Other elements are reported.
fn selects(
    document: &Document,
    reporter: &dyn Reporter,
    reference: &ElementRef,
) -> Vec<HtmlSelectElement> {
    let Some(elements) = resolve_elements(document, reference).or_report(reporter) else {
        return vec![];
    };
    elements
        .into_iter()
        .filter_map(|element| {
            element
                .dyn_into::<HtmlSelectElement>()
                .map_err(|element| NodeToolsError::NotASelect {
                    reference: ElementRef::Element(element).to_string(),
                })
                .or_report(reporter)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::SelectIndex;

    #[test]
    fn parse() {
        assert_eq!(2, SelectIndex::parse("2").get());
        assert_eq!(2, SelectIndex::parse("  2").get());
        assert_eq!(2, SelectIndex::parse("2nd").get());
        assert_eq!(12, SelectIndex::parse("+12").get());
        assert_eq!(-3, SelectIndex::parse("-3").get());
        assert_eq!(i32::MAX, SelectIndex::parse("99999999999").get());
    }

    #[test]
    fn parse_hex_prefix() {
        assert_eq!(2, SelectIndex::parse("0x2").get());
        assert_eq!(16, SelectIndex::parse("0X10").get());
        assert_eq!(-10, SelectIndex::parse(" -0xa").get());
        assert_eq!(0, SelectIndex::parse("0b1").get());
        assert_eq!(SelectIndex::CLEAR, SelectIndex::parse("0x"));
        assert_eq!(SelectIndex::CLEAR, SelectIndex::parse("0xg"));
    }

    #[test]
    fn parse_not_a_number() {
        for index in ["", " ", "-", "second", "NaN", "x1"] {
            assert_eq!(SelectIndex::CLEAR, SelectIndex::parse(index), "{index:?}");
        }
    }

    #[test]
    fn conversions() {
        assert_eq!(SelectIndex::CLEAR, SelectIndex::default());
        assert_eq!(SelectIndex::CLEAR, SelectIndex::from(None::<i32>));
        assert_eq!(SelectIndex::CLEAR, SelectIndex::from(None::<&str>));
        assert_eq!(4, SelectIndex::from(Some(4)).get());
        assert_eq!(4, SelectIndex::from(Some("4")).get());
        assert_eq!(5, SelectIndex::from(5).get());
    }
}
