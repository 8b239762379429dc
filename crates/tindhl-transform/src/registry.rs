//! Carrier country registry.
//!
//! The carrier import expects ISO alpha-3 codes. Only the countries the shop
//! actually ships to are listed; anything else gets [`CountryRule::UNKNOWN`].

use std::collections::HashMap;
use std::sync::LazyLock;

use tindhl_model::CountryRule;
use tindhl_model::NumberPosition::{End, Front};

/// Known destinations in display order.
static COUNTRY_RULES: &[(&str, CountryRule)] = &[
    ("United States of America", CountryRule::new("USA", Front)),
    ("Austria", CountryRule::new("AUT", End)),
    ("Belgium", CountryRule::new("BEL", End)),
    ("Bulgaria", CountryRule::new("BGR", End)),
    ("Croatia", CountryRule::new("HRV", End)),
    ("Cyprus", CountryRule::new("CYP", End)),
    ("Czech Republic", CountryRule::new("CZE", End)),
    ("Denmark", CountryRule::new("DNK", End)),
    ("Estonia", CountryRule::new("EST", End)),
    ("Finland", CountryRule::new("FIN", End)),
    ("France", CountryRule::new("FRA", End)),
    ("Germany", CountryRule::new("DEU", End)),
    ("Greece", CountryRule::new("GRC", End)),
    ("Hungary", CountryRule::new("HUN", End)),
    ("Ireland", CountryRule::new("IRL", End)),
    ("Italy", CountryRule::new("ITA", End)),
    ("Latvia", CountryRule::new("LVA", End)),
    ("Lithuania", CountryRule::new("LTU", End)),
    ("Luxembourg", CountryRule::new("LUX", End)),
    ("Malta", CountryRule::new("MLT", End)),
    ("Netherlands", CountryRule::new("NLD", End)),
    ("Poland", CountryRule::new("POL", End)),
    ("Portugal", CountryRule::new("PRT", End)),
    ("Romania", CountryRule::new("ROU", End)),
    ("Slovakia", CountryRule::new("SVK", End)),
    ("Slovenia", CountryRule::new("SVN", End)),
    ("Spain", CountryRule::new("ESP", End)),
    ("Sweden", CountryRule::new("SWE", End)),
];

static REGISTRY: LazyLock<CountryRegistry> =
    LazyLock::new(|| CountryRegistry::from_rules(COUNTRY_RULES));

/// Lookup table from country display name to [`CountryRule`].
///
/// Names are matched exactly and case-sensitively, as they appear in the
/// order export.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    rules: &'static [(&'static str, CountryRule)],
    by_name: HashMap<&'static str, CountryRule>,
}

impl CountryRegistry {
    /// The registry of all destinations the carrier import supports.
    pub fn global() -> &'static CountryRegistry {
        &REGISTRY
    }

    fn from_rules(rules: &'static [(&'static str, CountryRule)]) -> Self {
        let by_name = rules.iter().map(|(name, rule)| (*name, *rule)).collect();
        Self { rules, by_name }
    }

    /// Rule for a country display name.
    ///
    /// Unknown names are not an error: they yield [`CountryRule::UNKNOWN`],
    /// which leaves the carrier code blank and splits the street with the
    /// house number at the end.
    pub fn lookup(&self, country_name: &str) -> CountryRule {
        self.by_name
            .get(country_name)
            .copied()
            .unwrap_or(CountryRule::UNKNOWN)
    }

    pub fn contains(&self, country_name: &str) -> bool {
        self.by_name.contains_key(country_name)
    }

    /// All known rules in display order.
    pub fn rules(&self) -> impl Iterator<Item = (&'static str, CountryRule)> + '_ {
        self.rules.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Shorthand for `CountryRegistry::global().lookup(country_name)`.
pub fn lookup_country(country_name: &str) -> CountryRule {
    CountryRegistry::global().lookup(country_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_and_codes_are_unique() {
        let names: HashSet<_> = COUNTRY_RULES.iter().map(|(name, _)| *name).collect();
        let codes: HashSet<_> = COUNTRY_RULES.iter().map(|(_, r)| r.carrier_code).collect();
        assert_eq!(names.len(), COUNTRY_RULES.len());
        assert_eq!(codes.len(), COUNTRY_RULES.len());
        assert_eq!(CountryRegistry::global().len(), 28);
    }

    #[test]
    fn codes_are_three_uppercase_letters() {
        for (name, rule) in COUNTRY_RULES {
            assert_eq!(rule.carrier_code.len(), 3, "{name}");
            assert!(
                rule.carrier_code.chars().all(|c| c.is_ascii_uppercase()),
                "{name}"
            );
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup_country("Germany").carrier_code, "DEU");
        assert_eq!(lookup_country("germany"), CountryRule::UNKNOWN);
        assert_eq!(lookup_country("Germany "), CountryRule::UNKNOWN);
    }
}
