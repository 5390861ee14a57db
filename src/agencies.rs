use std::collections::HashMap;

/// Agency display names keyed by `agencyId`.
///
/// Passed into whatever renders agency names; unknown ids fall through
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgencyDirectory {
    names: HashMap<String, String>,
}

impl AgencyDirectory {
    pub fn new(names: HashMap<String, String>) -> Self {
        Self { names }
    }

    pub fn display_name<'a>(&'a self, agency_id: &'a str) -> &'a str {
        self.names
            .get(agency_id)
            .map(String::as_str)
            .unwrap_or(agency_id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for AgencyDirectory {
    fn default() -> Self {
        let names = [
            ("makelaarsland", "Makelaarsland"),
            ("bnv", "BNV Makelaars"),
            ("keizerskroon", "Keizerskroon Makelaars"),
            ("housingnet", "HousingNet"),
            ("newcurb", "NEWCURB Makelaars"),
            ("amstelland", "Amstelland Makelaars"),
            ("parkerwilliams", "Parker & Williams"),
            ("hoekstra", "Hoekstra en van Eck"),
            ("stadenland", "Stad en Land Makelaars"),
            ("saen", "Saen Garantiemakelaars"),
            ("brantjes", "Brantjes Makelaars"),
            ("relomakelaars", "Relo Makelaars"),
            ("homeoforange", "Home of Orange"),
        ]
        .into_iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect();

        Self { names }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_resolve() {
        let directory = AgencyDirectory::default();
        assert_eq!(directory.len(), 13);
        assert_eq!(directory.display_name("parkerwilliams"), "Parker & Williams");
        assert_eq!(directory.display_name("bnv"), "BNV Makelaars");
    }

    #[test]
    fn unknown_ids_pass_through() {
        let directory = AgencyDirectory::default();
        assert_eq!(directory.display_name("funda-direct"), "funda-direct");
    }

    #[test]
    fn injected_table_replaces_builtin() {
        let directory = AgencyDirectory::new(HashMap::from([(
            "a1".to_string(),
            "Agency One".to_string(),
        )]));
        assert_eq!(directory.display_name("a1"), "Agency One");
        assert_eq!(directory.display_name("bnv"), "bnv");
    }
}
