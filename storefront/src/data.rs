//! Catalog snapshot loading.
//!
//! The snapshot is fetched once per page view and held immutably for
//! that view. A failed fetch surfaces as an error page with a manual
//! "try again" action; nothing is retried automatically.

use roam_data::{AgencyRecord, PackageRecord, SiteConfig, StoreClient, StoreError};
use roam_travel::catalog::{Agency, AgencyDirectory, TravelPackage};

/// Everything the customer-facing pages render from.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    pub packages: Vec<TravelPackage>,
    pub agencies: AgencyDirectory,
    pub config: SiteConfig,
    pub tags: Vec<String>,
}

impl CatalogSnapshot {
    /// Find a package by id.
    pub fn package(&self, id: &str) -> Option<&TravelPackage> {
        self.packages.iter().find(|p| p.id.as_str() == id)
    }
}

/// Load the full snapshot from the hosted store.
pub fn load_catalog(client: &StoreClient) -> Result<CatalogSnapshot, StoreError> {
    let config = client.fetch_config()?;
    let package_records = client.fetch_package_records()?;
    let agency_records = client.fetch_agency_records()?;
    let tags = client.fetch_tags()?;

    Ok(assemble(package_records, agency_records, config, tags))
}

/// Assemble a snapshot from fetched rows. Embedded agency sub-records
/// fill gaps in the agency table so a package card can always resolve
/// its operator when the row carried one.
pub fn assemble(
    package_records: Vec<PackageRecord>,
    agency_records: Vec<AgencyRecord>,
    config: SiteConfig,
    tags: Vec<String>,
) -> CatalogSnapshot {
    let mut agencies: Vec<Agency> = agency_records
        .into_iter()
        .map(AgencyRecord::into_agency)
        .collect();

    let mut packages = Vec::with_capacity(package_records.len());
    for record in package_records {
        let (package, embedded) = record.into_parts(config.currency);
        if let Some(agency) = embedded {
            if !agencies.iter().any(|a| a.id == agency.id) {
                agencies.push(agency);
            }
        }
        packages.push(package);
    }

    CatalogSnapshot {
        packages,
        agencies: AgencyDirectory::from_agencies(agencies),
        config,
        tags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package_record(json: &str) -> PackageRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_assemble_merges_embedded_agencies() {
        let records = vec![
            package_record(
                r#"{"id": "pkg-1", "title": "Spiti", "price": 100,
                    "agency": {"id": "agc-1", "name": "Summit Treks", "rating": 4.5}}"#,
            ),
            package_record(r#"{"id": "pkg-2", "title": "Goa", "price": 50}"#),
        ];
        let table_agency: AgencyRecord = serde_json::from_str(
            r#"{"id": "agc-2", "name": "Coast Holidays", "rating": 4.0}"#,
        )
        .unwrap();

        let snapshot = assemble(records, vec![table_agency], SiteConfig::default(), vec![]);
        assert_eq!(snapshot.packages.len(), 2);
        assert_eq!(snapshot.agencies.len(), 2);

        let pkg = snapshot.package("pkg-1").unwrap();
        let agency = snapshot.agencies.resolve(pkg.agency_id.as_ref()).unwrap();
        assert_eq!(agency.name, "Summit Treks");
    }

    #[test]
    fn test_table_agency_wins_over_embedded_duplicate() {
        let records = vec![package_record(
            r#"{"id": "pkg-1", "title": "Spiti", "price": 100,
                "agency": {"id": "agc-1", "name": "Stale Name", "rating": 1.0}}"#,
        )];
        let fresh: AgencyRecord =
            serde_json::from_str(r#"{"id": "agc-1", "name": "Summit Treks", "rating": 4.5}"#)
                .unwrap();

        let snapshot = assemble(records, vec![fresh], SiteConfig::default(), vec![]);
        assert_eq!(snapshot.agencies.len(), 1);
        let pkg = snapshot.package("pkg-1").unwrap();
        assert_eq!(
            snapshot.agencies.resolve(pkg.agency_id.as_ref()).unwrap().name,
            "Summit Treks"
        );
    }
}
