//! Plain-text summaries of a marker run.
//!
//! Formatting lives here so the builder stays free of presentation; callers
//! decide whether the string goes to a log, a terminal, or a test assertion.

use crate::domain::{Marker, MarkerSet, RadiusBucket};

/// Number of markers per radius bucket, indexed by `RadiusBucket::index`.
///
/// Markers whose radius is not one of the bucket constants are not counted.
pub fn bucket_histogram(markers: &[Marker]) -> [usize; 4] {
    let mut counts = [0usize; 4];
    for bucket in markers.iter().filter_map(|m| bucket_of_radius(m.radius)) {
        counts[bucket.index()] += 1;
    }
    counts
}

fn bucket_of_radius(radius: f64) -> Option<RadiusBucket> {
    RadiusBucket::ALL.into_iter().find(|b| b.value() == radius)
}

/// Format the run summary: counts, unique keys, and the radius histogram.
pub fn format_summary(set: &MarkerSet) -> String {
    let mut out = String::new();

    out.push_str(&format!("Total Rows Seen:          {}\n", set.rows_seen));
    out.push_str(&format!("Markers Created:          {}\n", set.markers.len()));
    out.push_str(&format!("Unique Sources Found:     {}\n", set.tallies.sources.len()));
    out.push_str(&format!("Unique Project Types:     {}\n", set.tallies.project_types.len()));
    out.push_str(&format!("Unique Countries Found:   {}\n", set.tallies.countries.len()));

    out.push_str("\nRadius buckets:\n");
    let counts = bucket_histogram(&set.markers);
    for bucket in RadiusBucket::ALL {
        out.push_str(&format!(
            "  {:<12} r={:>5.2}  n={}\n",
            bucket.display_name(),
            bucket.value(),
            counts[bucket.index()]
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tallies;

    fn marker(id: &str, radius: f64) -> Marker {
        Marker {
            lat: 0.0,
            lon: 0.0,
            radius,
            project_id: id.to_string(),
            project_type: None,
        }
    }

    #[test]
    fn histogram_counts_each_bucket() {
        let markers = vec![
            marker("A", 10.0),
            marker("B", 16.67),
            marker("C", 16.67),
            marker("D", 40.0),
        ];
        assert_eq!(bucket_histogram(&markers), [1, 2, 0, 1]);
        assert_eq!(bucket_histogram(&[]), [0, 0, 0, 0]);
        assert_eq!(bucket_histogram(&[marker("E", 12.0)]), [0, 0, 0, 0]);
    }

    #[test]
    fn summary_lists_counts_and_buckets() {
        let mut tallies = Tallies::default();
        tallies.sources.insert("Verra".to_string(), 3);
        tallies.sources.insert("GoldStandard".to_string(), 1);
        tallies.countries.insert("Peru".to_string(), 4);

        let set = MarkerSet {
            rows_seen: 4,
            markers: vec![marker("A", 23.33), marker("B", 10.0)],
            tallies,
        };

        let text = format_summary(&set);
        assert!(text.contains("Total Rows Seen:          4"));
        assert!(text.contains("Markers Created:          2"));
        assert!(text.contains("Unique Sources Found:     2"));
        assert!(text.contains("Unique Project Types:     0"));
        assert!(text.contains("Unique Countries Found:   1"));
        assert!(text.contains("large        r=23.33  n=1"));
        assert!(text.contains("extra-large  r=40.00  n=0"));
    }
}
