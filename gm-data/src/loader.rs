//! CSV loading for the [`Registry`].
//!
//! Each loader parses a header-carrying CSV document and appends the rows.
//! Location rows are validated strictly since the map depends on them; blank
//! search-index and fact rows are skipped.

use crate::models::Fact;
use crate::Registry;
use anyhow::{bail, Context};
use gm_core::record::Location;

fn reader(csv_data: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes())
}

impl Registry {
    /// Load locations from CSV.
    ///
    /// Expected format (with headers): `ID,NAME,LATITUDE,LONGITUDE`
    ///
    /// Names must be unique (case-insensitive) and coordinates must lie on
    /// the globe.
    pub fn load_locations(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        for (row, result) in rdr.records().enumerate() {
            let r = result.with_context(|| format!("location row {}", row + 1))?;
            let id: u32 = r
                .get(0)
                .unwrap_or("")
                .trim()
                .parse()
                .with_context(|| format!("location row {}: bad ID", row + 1))?;
            let name = r.get(1).unwrap_or("").trim();
            let latitude: f64 = r
                .get(2)
                .unwrap_or("")
                .trim()
                .parse()
                .with_context(|| format!("location {:?}: bad latitude", name))?;
            let longitude: f64 = r
                .get(3)
                .unwrap_or("")
                .trim()
                .parse()
                .with_context(|| format!("location {:?}: bad longitude", name))?;

            if name.is_empty() {
                bail!("location row {}: empty name", row + 1);
            }
            if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
                bail!(
                    "location {:?}: coordinates ({}, {}) out of range",
                    name,
                    latitude,
                    longitude
                );
            }
            if self.locations.iter().any(|l| l.name.eq_ignore_ascii_case(name)) {
                bail!("duplicate location name {:?}", name);
            }

            self.locations.push(Location {
                id,
                name: name.to_string(),
                latitude,
                longitude,
            });
            count += 1;
        }
        log::info!("[GM] loader: Loaded {} locations", count);
        Ok(())
    }

    /// Load autocomplete names from CSV.
    ///
    /// Expected format (with headers): `ID,NAME`. Repeated names are kept once.
    pub fn load_search_index(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result.context("search index row")?;
            let name = r.get(1).unwrap_or("").trim();
            if name.is_empty() || self.search_index.iter().any(|n| n == name) {
                skipped += 1;
                continue;
            }
            self.search_index.push(name.to_string());
            count += 1;
        }
        log::info!("[GM] loader: Loaded {} search names, skipped {}", count, skipped);
        Ok(())
    }

    /// Load facts from CSV.
    ///
    /// Expected format (with headers): `ID,FACT`. Facts containing commas
    /// must be quoted.
    pub fn load_facts(&mut self, csv_data: &str) -> anyhow::Result<()> {
        let mut rdr = reader(csv_data);
        let mut count = 0u32;
        let mut skipped = 0u32;
        for result in rdr.records() {
            let r = result.context("fact row")?;
            let text = r.get(1).unwrap_or("").trim();
            if text.is_empty() {
                skipped += 1;
                continue;
            }
            let id = r.get(0).and_then(|s| s.trim().parse().ok()).unwrap_or(0);
            self.facts.push(Fact {
                id,
                text: text.to_string(),
            });
            count += 1;
        }
        log::info!("[GM] loader: Loaded {} facts, skipped {} blank", count, skipped);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Registry;

    #[test]
    fn load_locations_from_csv() {
        let mut registry = Registry::new();
        let csv = "\
ID,NAME,LATITUDE,LONGITUDE
2,Rishikesh,30.0869,78.2676
6,Varanasi,25.3176,82.9739
";
        registry.load_locations(csv).unwrap();
        let locations = registry.locations();
        assert_eq!(locations.len(), 2);
        assert_eq!(locations[0].id, 2);
        assert_eq!(locations[1].name, "Varanasi");
        assert!((locations[1].longitude - 82.9739).abs() < 1e-9);
    }

    #[test]
    fn load_locations_rejects_duplicates() {
        let mut registry = Registry::new();
        let csv = "\
ID,NAME,LATITUDE,LONGITUDE
1,Patna,25.5941,85.1376
2,PATNA,25.6,85.1
";
        let err = registry.load_locations(csv).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{}", err);
    }

    #[test]
    fn load_locations_rejects_bad_coordinates() {
        let mut registry = Registry::new();
        let csv = "\
ID,NAME,LATITUDE,LONGITUDE
1,Nowhere,95.0,85.0
";
        assert!(registry.load_locations(csv).is_err());

        let mut registry = Registry::new();
        let csv = "\
ID,NAME,LATITUDE,LONGITUDE
1,Patna,north,85.0
";
        let err = registry.load_locations(csv).unwrap_err();
        assert!(err.to_string().contains("latitude"), "{}", err);
    }

    #[test]
    fn load_search_index_skips_blank_and_repeated_names() {
        let mut registry = Registry::new();
        let csv = "\
ID,NAME
1,Rishikesh
2,
3,Varanasi
4,Rishikesh
";
        registry.load_search_index(csv).unwrap();
        assert_eq!(registry.search_index(), ["Rishikesh", "Varanasi"]);
    }

    #[test]
    fn load_facts_keeps_quoted_commas() {
        let mut registry = Registry::new();
        let csv = "\
ID,FACT
1,\"About 2,525 km long.\"
2,
3,Plain fact
";
        registry.load_facts(csv).unwrap();
        assert_eq!(registry.facts().len(), 2);
        assert_eq!(registry.facts()[0].text, "About 2,525 km long.");
        assert_eq!(registry.facts()[1].id, 3);
    }
}
