//! Dataset Loading
//!
//! One-shot fetch and decode of the static dataset at startup. The
//! dataset is read-only for the lifetime of the session; a failure here
//! surfaces as a single page-level error banner, with no retry.

use std::collections::HashMap;

use gloo_net::http::Request;
use serde::Deserialize;
use thiserror::Error;

use crate::models::{FishFry, Location, LocationWithFishFry};

const DATASET_URL: &str = "/fish_fry.json";

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to fetch dataset: {0}")]
    Fetch(#[from] gloo_net::Error),
    #[error("dataset request failed with HTTP {0}")]
    Status(u16),
}

#[derive(Debug, Deserialize)]
struct RawDataset {
    locations: Vec<Location>,
    fish_fries: Vec<FishFry>,
}

/// Fetches the dataset and joins fish fries to their locations,
/// ordered by location name.
pub async fn load_dataset() -> Result<Vec<LocationWithFishFry>, DataError> {
    let response = Request::get(DATASET_URL).send().await?;
    if !response.ok() {
        return Err(DataError::Status(response.status()));
    }
    let raw: RawDataset = response.json().await?;
    Ok(join_dataset(raw.locations, raw.fish_fries))
}

/// Inner join on `location_id`, one output row per fish fry. Fish fries
/// referencing an unknown location are dropped.
fn join_dataset(locations: Vec<Location>, fish_fries: Vec<FishFry>) -> Vec<LocationWithFishFry> {
    let by_id: HashMap<u32, Location> =
        locations.into_iter().map(|location| (location.id, location)).collect();

    let mut rows: Vec<LocationWithFishFry> = fish_fries
        .into_iter()
        .filter_map(|fish_fry| {
            by_id.get(&fish_fry.location_id).map(|location| LocationWithFishFry {
                location: location.clone(),
                fish_fry,
            })
        })
        .collect();
    rows.sort_by(|a, b| a.name().cmp(b.name()));
    rows
}

/// Lookup from fish fry id to its joined row. First row wins on
/// duplicate ids.
pub fn fish_fry_index(entries: &[LocationWithFishFry]) -> HashMap<u32, LocationWithFishFry> {
    let mut index = HashMap::new();
    for entry in entries {
        index.entry(entry.fish_fry.id).or_insert_with(|| entry.clone());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::make_entry;

    fn parts(entries: Vec<LocationWithFishFry>) -> (Vec<Location>, Vec<FishFry>) {
        let locations = entries.iter().map(|e| e.location.clone()).collect();
        let fish_fries = entries.into_iter().map(|e| e.fish_fry).collect();
        (locations, fish_fries)
    }

    #[test]
    fn test_join_orders_by_name() {
        let (locations, fish_fries) = parts(vec![
            make_entry(1, 10, "St. Zeno"),
            make_entry(2, 20, "St. Agnes"),
        ]);
        let rows = join_dataset(locations, fish_fries);
        let names: Vec<&str> = rows.iter().map(|row| row.name()).collect();
        assert_eq!(names, ["St. Agnes", "St. Zeno"]);
    }

    #[test]
    fn test_join_drops_orphan_fish_fries() {
        let (locations, mut fish_fries) = parts(vec![make_entry(1, 10, "St. Agnes")]);
        let mut orphan = make_entry(2, 20, "unused").fish_fry;
        orphan.location_id = 99;
        fish_fries.push(orphan);

        let rows = join_dataset(locations, fish_fries);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].fish_fry.id, 10);
    }

    #[test]
    fn test_fish_fry_index_keys_by_fish_fry_id() {
        let entries = vec![make_entry(1, 10, "St. Agnes"), make_entry(2, 20, "St. Zeno")];
        let index = fish_fry_index(&entries);
        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&20).map(|entry| entry.id()), Some(2));
        assert!(!index.contains_key(&2));
    }
}
