mod support;

use career_core::{Catalog, SKILL_VOCABULARY};
use support::{ids, sample_catalog};

#[test]
fn lookups_return_none_for_unknown_ids() {
    let catalog = sample_catalog();
    assert_eq!(catalog.job("nurse").map(|j| j.name.as_str()), Some("Nurse"));
    assert!(catalog.job("astronaut").is_none());
    assert!(catalog.sector("space").is_none());

    let nurse = catalog.job("nurse").unwrap();
    assert_eq!(catalog.sector_of(nurse).map(|s| s.id.as_str()), Some("health"));
}

#[test]
fn ids_resolve_in_dataset_order_and_skip_unknown() {
    let catalog = sample_catalog();
    let stored = vec!["pharmacist", "ghost", "web-dev"];
    assert_eq!(
        ids(&catalog.jobs_by_ids(&stored)),
        vec!["web-dev", "pharmacist"]
    );
    assert!(catalog.jobs_by_ids::<String>(&[]).is_empty());
}

#[test]
fn sector_listing_and_vocabulary() {
    let catalog = sample_catalog();
    assert_eq!(ids(&catalog.jobs_in_sector("health")), vec!["nurse", "pharmacist"]);
    assert_eq!(catalog.skill_vocabulary().len(), SKILL_VOCABULARY.len());
    assert!(catalog.skill_vocabulary().contains(&"Machine Learning"));
}

#[test]
fn empty_catalog_is_valid() {
    let catalog = Catalog::default();
    assert!(catalog.jobs().is_empty());
    assert!(catalog.jobs_in_sector("tech").is_empty());
}
