//! Browse Filtering & Sorting
//!
//! Pure predicate composition over the in-memory dataset. All filter
//! groups AND together; the service-mode checkboxes OR within their
//! group, and an empty group is unrestricted.

use crate::dates::fish_fry_on_date;
use crate::geo::{coords_for, distance_mi};
use crate::models::LocationWithFishFry;
use crate::storage::Favorites;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrowseFilters {
    /// Case-insensitive substring over name, city, fish types, and sides.
    pub query: String,
    pub dine_in: bool,
    pub carry_out: bool,
    pub drive_through: bool,
    /// ISO date; restricts to fish fries on for that date.
    pub date: Option<String>,
    pub favorites_only: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Name,
    Distance,
}

fn matches_query(entry: &LocationWithFishFry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        entry.location.name,
        entry.location.city.as_deref().unwrap_or(""),
        entry.fish_fry.fish_types.as_deref().unwrap_or(""),
        entry.fish_fry.sides.as_deref().unwrap_or(""),
    )
    .to_lowercase();
    haystack.contains(&query.to_lowercase())
}

fn matches_service_modes(entry: &LocationWithFishFry, filters: &BrowseFilters) -> bool {
    if !filters.dine_in && !filters.carry_out && !filters.drive_through {
        return true;
    }
    (filters.dine_in && entry.fish_fry.dine_in)
        || (filters.carry_out && entry.fish_fry.carry_out)
        || (filters.drive_through && entry.fish_fry.drive_through)
}

/// Distance in miles from `origin` to the entry's location, when both
/// an origin and a coordinate for the location are known.
pub fn distance_from(entry: &LocationWithFishFry, origin: Option<(f64, f64)>) -> Option<f64> {
    let (lat, lon) = origin?;
    let (loc_lat, loc_lon) = coords_for(entry.id())?;
    Some(distance_mi(lat, lon, loc_lat, loc_lon))
}

/// Applies every filter group and sorts the survivors. Name sort is the
/// stable default; distance sort puts entries without a coordinate last.
pub fn filter_and_sort(
    entries: &[LocationWithFishFry],
    filters: &BrowseFilters,
    favorites: &Favorites,
    sort: SortMode,
    origin: Option<(f64, f64)>,
) -> Vec<LocationWithFishFry> {
    let mut result: Vec<LocationWithFishFry> = entries
        .iter()
        .filter(|entry| matches_query(entry, &filters.query))
        .filter(|entry| matches_service_modes(entry, filters))
        .filter(|entry| match &filters.date {
            Some(date) => fish_fry_on_date(&entry.fish_fry, date),
            None => true,
        })
        .filter(|entry| !filters.favorites_only || favorites.contains(entry.id()))
        .cloned()
        .collect();

    match sort {
        SortMode::Name => result.sort_by(|a, b| a.name().cmp(b.name())),
        SortMode::Distance => result.sort_by(|a, b| {
            let da = distance_from(a, origin).unwrap_or(f64::INFINITY);
            let db = distance_from(b, origin).unwrap_or(f64::INFINITY);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_support::make_entry;
    use crate::models::LocationWithFishFry;

    fn dataset() -> Vec<LocationWithFishFry> {
        let mut a = make_entry(1, 10, "St. Alban");
        a.location.city = Some("Milwaukee".to_string());
        a.fish_fry.dine_in = true;
        a.fish_fry.fish_types = Some("Cod, perch".to_string());

        let mut b = make_entry(2, 20, "St. Brigid");
        b.location.city = Some("Wauwatosa".to_string());
        b.fish_fry.carry_out = true;
        b.fish_fry.sides = Some("Potato pancakes".to_string());

        let mut c = make_entry(3, 30, "Holy Cross");
        c.fish_fry.is_recurring = false;
        c.fish_fry.specific_dates = Some(r#"["2026-02-27"]"#.to_string());

        vec![a, b, c]
    }

    fn all(entries: &[LocationWithFishFry], filters: &BrowseFilters) -> Vec<String> {
        filter_and_sort(entries, filters, &Favorites::default(), SortMode::Name, None)
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    #[test]
    fn test_no_filters_passes_everything_name_sorted() {
        let names = all(&dataset(), &BrowseFilters::default());
        assert_eq!(names, ["Holy Cross", "St. Alban", "St. Brigid"]);
    }

    #[test]
    fn test_lone_dine_in_filter_selects_only_dine_in_rows() {
        let filters = BrowseFilters { dine_in: true, ..Default::default() };
        assert_eq!(all(&dataset(), &filters), ["St. Alban"]);
    }

    #[test]
    fn test_service_modes_or_within_group() {
        let filters = BrowseFilters { dine_in: true, carry_out: true, ..Default::default() };
        assert_eq!(all(&dataset(), &filters), ["St. Alban", "St. Brigid"]);
    }

    #[test]
    fn test_query_matches_across_fields_case_insensitively() {
        let entries = dataset();

        let by_city = BrowseFilters { query: "WAUWATOSA".to_string(), ..Default::default() };
        assert_eq!(all(&entries, &by_city), ["St. Brigid"]);

        let by_fish = BrowseFilters { query: "perch".to_string(), ..Default::default() };
        assert_eq!(all(&entries, &by_fish), ["St. Alban"]);

        let by_sides = BrowseFilters { query: "pancake".to_string(), ..Default::default() };
        assert_eq!(all(&entries, &by_sides), ["St. Brigid"]);
    }

    #[test]
    fn test_date_filter_applies_membership() {
        let entries = dataset();

        // Recurring entries cover the whole season; the one-off only Feb 27.
        let feb27 = BrowseFilters { date: Some("2026-02-27".to_string()), ..Default::default() };
        assert_eq!(all(&entries, &feb27), ["Holy Cross", "St. Alban", "St. Brigid"]);

        let mar6 = BrowseFilters { date: Some("2026-03-06".to_string()), ..Default::default() };
        assert_eq!(all(&entries, &mar6), ["St. Alban", "St. Brigid"]);
    }

    #[test]
    fn test_favorites_only_intersects() {
        let entries = dataset();
        let mut favorites = Favorites::default();
        favorites.toggle(2);

        let filters = BrowseFilters { favorites_only: true, ..Default::default() };
        let names: Vec<String> =
            filter_and_sort(&entries, &filters, &favorites, SortMode::Name, None)
                .iter()
                .map(|entry| entry.name().to_string())
                .collect();
        assert_eq!(names, ["St. Brigid"]);
    }

    #[test]
    fn test_filters_and_together() {
        let entries = dataset();
        let filters = BrowseFilters {
            query: "st.".to_string(),
            dine_in: true,
            ..Default::default()
        };
        assert_eq!(all(&entries, &filters), ["St. Alban"]);
    }

    #[test]
    fn test_distance_sort_puts_unlocated_entries_last() {
        // Ids 1 and 2 have coordinates; id 99 does not.
        let mut entries = dataset();
        entries[2].location.id = 99;

        let origin = Some((42.69, -87.81)); // near St. Lucy, south end
        let sorted = filter_and_sort(
            &entries,
            &BrowseFilters::default(),
            &Favorites::default(),
            SortMode::Distance,
            origin,
        );
        assert_eq!(sorted.last().map(|entry| entry.id()), Some(99));
        let d0 = distance_from(&sorted[0], origin).expect("has coords");
        let d1 = distance_from(&sorted[1], origin).expect("has coords");
        assert!(d0 <= d1);
    }

    #[test]
    fn test_distance_sort_without_origin_keeps_everything() {
        let sorted = filter_and_sort(
            &dataset(),
            &BrowseFilters::default(),
            &Favorites::default(),
            SortMode::Distance,
            None,
        );
        assert_eq!(sorted.len(), 3);
    }
}
