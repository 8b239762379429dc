//! Rows of the order export.

/// Columns of the order export that the conversion reads.
///
/// Columns are matched by header name, so their position in the file does not
/// matter and any other columns are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderColumn {
    FirstName,
    LastName,
    Company,
    Street,
    PostalCode,
    City,
    Country,
}

impl OrderColumn {
    /// All required columns, in record field order.
    pub const fn all() -> &'static [OrderColumn] {
        &[
            Self::FirstName,
            Self::LastName,
            Self::Company,
            Self::Street,
            Self::PostalCode,
            Self::City,
            Self::Country,
        ]
    }

    /// Header name as written by the shop export.
    pub const fn header(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Company => "Company",
            Self::Street => "Street",
            Self::PostalCode => "Postal/Zip Code",
            Self::City => "City",
            Self::Country => "Country",
        }
    }
}

impl std::fmt::Display for OrderColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.header())
    }
}

/// One order row as read from the export.
///
/// `company` may be blank. `street` is free text with the house number at
/// either end, and `country` is the display name (e.g. "Germany"), not a code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOrderRecord {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub street: String,
    pub postal_code: String,
    pub city: String,
    pub country: String,
}

impl RawOrderRecord {
    /// Recipient display name: first and last name joined by a single space.
    pub fn recipient_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
