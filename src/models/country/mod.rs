// Country module
// Read-only country reference data used by filters and the event form

use serde::{Deserialize, Serialize};

const EMBEDDED_COUNTRIES: &str = include_str!("../../../assets/countries.json");

/// Geographic grouping used by the country picker tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Region {
    Africa,
    America,
    Asia,
    Europe,
    Oceania,
    #[default]
    #[serde(other)]
    Unclassified,
}

impl Region {
    pub fn label(&self) -> &'static str {
        match self {
            Region::Africa => "Africa",
            Region::America => "America",
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::Unclassified => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub major: bool,
}

/// Tabs shown across the top of the country picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionTab {
    All,
    Major,
    Region(Region),
}

impl RegionTab {
    pub const TABS: [RegionTab; 7] = [
        RegionTab::All,
        RegionTab::Major,
        RegionTab::Region(Region::Africa),
        RegionTab::Region(Region::America),
        RegionTab::Region(Region::Asia),
        RegionTab::Region(Region::Europe),
        RegionTab::Region(Region::Oceania),
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RegionTab::All => "All",
            RegionTab::Major => "Major",
            RegionTab::Region(region) => region.label(),
        }
    }

    pub fn includes(&self, country: &Country) -> bool {
        match self {
            RegionTab::All => true,
            RegionTab::Major => country.major,
            RegionTab::Region(region) => country.region == *region,
        }
    }
}

/// The full reference list, in dataset order
#[derive(Debug, Clone, Default)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// Parse the list shipped with the binary
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(EMBEDDED_COUNTRIES)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let countries: Vec<Country> = serde_json::from_str(json)?;
        Ok(Self::new(countries))
    }

    pub fn all(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn in_tab(&self, tab: RegionTab) -> Vec<&Country> {
        self.countries.iter().filter(|c| tab.includes(c)).collect()
    }

    /// Type-ahead lookup: case-insensitive substring match on the name.
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&Country> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.countries.iter().collect();
        }
        self.countries
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.name == name)
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> CountryCatalog {
        CountryCatalog::from_json(
            r#"[
                {"name": "United States", "code": "US", "region": "America", "major": true},
                {"name": "Kenya", "code": "KE", "region": "Africa", "major": false},
                {"name": "United Kingdom", "code": "GB", "region": "Europe", "major": true},
                {"name": "Worldwide", "code": "WW", "region": "", "major": false}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_embedded_dataset_loads() {
        let catalog = CountryCatalog::embedded().unwrap();
        assert!(catalog.len() > 50);
        assert!(catalog.find_by_code("US").is_some());

        let mut codes: Vec<&str> = catalog.all().iter().map(|c| c.code.as_str()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), catalog.len(), "country codes must be unique");
    }

    #[test]
    fn test_unknown_region_is_unclassified() {
        let catalog = sample();
        assert_eq!(catalog.find_by_code("WW").unwrap().region, Region::Unclassified);
    }

    #[test]
    fn test_region_tabs() {
        let catalog = sample();
        assert_eq!(catalog.in_tab(RegionTab::All).len(), 4);

        let major: Vec<&str> = catalog
            .in_tab(RegionTab::Major)
            .iter()
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(major, vec!["US", "GB"]);

        let africa = catalog.in_tab(RegionTab::Region(Region::Africa));
        assert_eq!(africa.len(), 1);
        assert_eq!(africa[0].name, "Kenya");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = sample();
        let names: Vec<&str> = catalog.search("UNITED").iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["United States", "United Kingdom"]);

        assert_eq!(catalog.search("nya").len(), 1);
        assert_eq!(catalog.search("").len(), 4);
        assert!(catalog.search("atlantis").is_empty());
    }

    #[test]
    fn test_find_by_name_is_exact() {
        let catalog = sample();
        assert!(catalog.find_by_name("Kenya").is_some());
        assert!(catalog.find_by_name("kenya").is_none());
    }
}
