//! Carrier country rules.

/// Where a country's address line puts the house number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NumberPosition {
    /// House number before the street name ("42 Main Street").
    Front,
    /// House number after the street name ("Hauptstrasse 5").
    #[default]
    End,
    /// No known convention. Splitting treats this like [`NumberPosition::End`].
    Unknown,
}

impl NumberPosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::End => "end",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NumberPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Carrier code and house number convention for one destination country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryRule {
    /// Three-letter code expected by the carrier import, empty when unmapped.
    pub carrier_code: &'static str,
    pub number_position: NumberPosition,
}

impl CountryRule {
    /// Rule applied to country names the registry does not know.
    ///
    /// The carrier code stays blank in the output and the street is split
    /// with the European convention.
    pub const UNKNOWN: CountryRule = CountryRule {
        carrier_code: "",
        number_position: NumberPosition::End,
    };

    pub const fn new(carrier_code: &'static str, number_position: NumberPosition) -> Self {
        Self {
            carrier_code,
            number_position,
        }
    }

    /// Returns true if the rule carries a carrier code.
    pub fn is_mapped(&self) -> bool {
        !self.carrier_code.is_empty()
    }
}

impl Default for CountryRule {
    fn default() -> Self {
        Self::UNKNOWN
    }
}
