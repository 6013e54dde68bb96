//! Form field descriptors for the create/edit dialog.

/// Which other resource a reference field points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Users,
    Tables,
}

/// Input widget and parsing rule of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Password,
    Email,
    Integer,
    Decimal,
    /// Closed list of values rendered as a dropdown
    Choice(&'static [&'static str]),
    /// `<input type="date">`, stored as an ISO timestamp
    Date,
    /// Id of another record, chosen from a dropdown
    Reference(Lookup),
}

impl FieldKind {
    /// HTML `type` attribute for plain inputs
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Password => "password",
            FieldKind::Email => "email",
            FieldKind::Integer | FieldKind::Decimal => "number",
            FieldKind::Date => "date",
            _ => "text",
        }
    }
}

/// One editable field bound to a record through plain accessors
pub struct Field<R> {
    /// Wire name, also used as the input id
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Current value as the input shows it
    pub read: fn(&R) -> String,
    /// Store the raw input value into the record
    pub write: fn(&mut R, &str),
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Field<R> {}

/// Dropdown entry for a `Reference` field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

/// Lenient integer parse: blank or garbage becomes 0
pub fn parse_int<T: std::str::FromStr + Default>(raw: &str) -> T {
    raw.trim().parse().unwrap_or_default()
}

/// Lenient decimal parse: blank, garbage or non-finite becomes 0.0
pub fn parse_decimal(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Display a number in an input, leaving zero blank so the placeholder shows
pub fn show_number<T: PartialEq + Default + ToString>(value: T) -> String {
    if value == T::default() {
        String::new()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_parsers() {
        assert_eq!(parse_int::<i32>(" 42 "), 42);
        assert_eq!(parse_int::<i32>(""), 0);
        assert_eq!(parse_int::<u32>("-3"), 0);
        assert_eq!(parse_decimal("12,5"), 12.5);
        assert_eq!(parse_decimal("abc"), 0.0);
        assert_eq!(parse_decimal("inf"), 0.0);
    }

    #[test]
    fn test_show_number_blanks_zero() {
        assert_eq!(show_number(0), "");
        assert_eq!(show_number(7), "7");
        assert_eq!(show_number(2.5), "2.5");
    }

    #[test]
    fn test_input_types() {
        assert_eq!(FieldKind::Decimal.input_type(), "number");
        assert_eq!(FieldKind::Choice(&["a"]).input_type(), "text");
        assert_eq!(FieldKind::Date.input_type(), "date");
    }
}
