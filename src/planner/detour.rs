//! Detour suggestions between two cities
//!
//! An approximate filter: a city passes when going through it costs at most
//! a fraction of the direct distance. It does not prove the city lies
//! geographically between start and end.

use tracing::trace;

use crate::config::DetourConfig;
use crate::models::{City, Suggestion};

/// Extra distance of travelling `start -> city -> end` instead of
/// `start -> end`
#[must_use]
pub fn detour_cost(start: &City, end: &City, city: &City) -> f64 {
    start.distance_to(city) + city.distance_to(end) - start.distance_to(end)
}

/// Heuristic distance of `city` from the direct path.
///
/// Zero for cities close to either endpoint; otherwise the same quantity as
/// [`detour_cost`], in absolute value. This is not a perpendicular distance.
#[must_use]
pub fn path_deviation(config: &DetourConfig, start: &City, end: &City, city: &City) -> f64 {
    let start_to_city = start.distance_to(city);
    let start_to_end = start.distance_to(end);

    if start_to_city < start_to_end * config.near_endpoint_ratio
        || start_to_city > start_to_end * config.far_endpoint_ratio
    {
        return 0.0;
    }

    (start_to_city + city.distance_to(end) - start_to_end).abs()
}

/// Rank every candidate other than `start` and `end` by detour cost and keep
/// the best `config.max_suggestions` that pass both thresholds.
///
/// Equal detour costs keep candidate order.
#[must_use]
pub fn suggest<'a, I>(config: &DetourConfig, start: &City, end: &City, candidates: I) -> Vec<Suggestion>
where
    I: IntoIterator<Item = &'a City>,
{
    let direct = start.distance_to(end);
    let max_detour = direct * config.max_detour_ratio;
    let max_deviation = direct * config.max_deviation_ratio;

    let mut accepted: Vec<Suggestion> = candidates
        .into_iter()
        .filter(|city| *city != start && *city != end)
        .filter_map(|city| {
            let detour_km = detour_cost(start, end, city);
            let deviation = path_deviation(config, start, end, city);
            trace!(
                "{}: detour {:.1} km, deviation {:.1} km",
                city.name, detour_km, deviation
            );
            (detour_km <= max_detour && deviation <= max_deviation).then(|| Suggestion {
                city: city.clone(),
                detour_km,
            })
        })
        .collect();

    accepted.sort_by(|a, b| a.detour_km.total_cmp(&b.detour_km));
    accepted.truncate(config.max_suggestions);
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> (City, City) {
        (City::new("South", 0.0, 0.0), City::new("North", 10.0, 0.0))
    }

    #[test]
    fn test_midpoint_city_is_suggested() {
        let (start, end) = endpoints();
        let mid = City::new("Middle", 5.0, 0.0);
        let config = DetourConfig::default();

        let result = suggest(&config, &start, &end, [&start, &mid, &end]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].city, mid);
        assert!(result[0].detour_km.abs() < 1e-6);
    }

    #[test]
    fn test_far_off_axis_city_is_excluded() {
        let (start, end) = endpoints();
        // roughly ten times the direct distance away
        let far = City::new("Far", 5.0, 100.0);
        let config = DetourConfig::default();

        assert!(start.distance_to(&far) > 9.0 * start.distance_to(&end));
        assert!(suggest(&config, &start, &end, [&far]).is_empty());
    }

    #[test]
    fn test_start_and_end_are_never_suggested() {
        let (start, end) = endpoints();
        let renamed_start = City::new("SOUTH", 5.0, 0.0);
        let config = DetourConfig::default();

        assert!(suggest(&config, &start, &end, [&renamed_start, &end]).is_empty());
    }

    #[test]
    fn test_sorted_by_detour_and_truncated() {
        let (start, end) = endpoints();
        let candidates = vec![
            City::new("Wide", 5.0, 1.5),
            City::new("OnLine", 5.0, 0.0),
            City::new("Slight", 5.0, 0.5),
            City::new("Medium", 5.0, 1.0),
        ];
        let config = DetourConfig::default();

        let result = suggest(&config, &start, &end, &candidates);
        let names: Vec<&str> = result.iter().map(|s| s.city.name.as_str()).collect();
        assert_eq!(names, vec!["OnLine", "Slight", "Medium"]);
        assert!(result.windows(2).all(|w| w[0].detour_km <= w[1].detour_km));
    }

    #[test]
    fn test_near_endpoint_has_zero_deviation() {
        let (start, end) = endpoints();
        let config = DetourConfig::default();
        let near_start = City::new("NearStart", 0.5, 0.3);
        let middle = City::new("Middle", 5.0, 1.0);

        assert_eq!(path_deviation(&config, &start, &end, &near_start), 0.0);
        let deviation = path_deviation(&config, &start, &end, &middle);
        assert!((deviation - detour_cost(&start, &end, &middle)).abs() < 1e-9);
    }

    #[test]
    fn test_near_end_has_zero_deviation() {
        let (start, end) = endpoints();
        let config = DetourConfig::default();
        let near_end = City::new("NearEnd", 9.5, 0.5);

        // Past 90% of the direct distance, off the axis
        assert!(start.distance_to(&near_end) > 0.9 * start.distance_to(&end));
        assert!(start.distance_to(&near_end) < start.distance_to(&end));
        assert_eq!(path_deviation(&config, &start, &end, &near_end), 0.0);
        assert!(detour_cost(&start, &end, &near_end) > 0.0);
    }

    #[test]
    fn test_max_suggestions_is_configurable() {
        let (start, end) = endpoints();
        let candidates = vec![
            City::new("One", 3.0, 0.0),
            City::new("Two", 5.0, 0.0),
            City::new("Three", 7.0, 0.0),
        ];
        let config = DetourConfig {
            max_suggestions: 1,
            ..DetourConfig::default()
        };

        assert_eq!(suggest(&config, &start, &end, &candidates).len(), 1);
    }
}
