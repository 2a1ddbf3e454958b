//! Grouped temperature statistics

use std::collections::BTreeMap;

use crate::types::{DailyTempStats, TempObservation};

/// Accumulator for min/avg/max over the non-null temperatures of one date
/// group.
#[derive(Debug, Clone, Default)]
pub struct TempAccumulator {
    observations: Vec<f64>,
}

impl TempAccumulator {
    pub fn add(&mut self, value: f64) {
        self.observations.push(value);
    }

    pub fn count(&self) -> usize {
        self.observations.len()
    }

    /// (min, avg, max) over the accumulated values, `None` when nothing was
    /// added.
    pub fn summary(&self) -> Option<(f64, f64, f64)> {
        if self.observations.is_empty() {
            return None;
        }

        let min = self
            .observations
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .observations
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = self.observations.iter().sum();

        Some((min, sum / self.observations.len() as f64, max))
    }
}

/// Group temperature observations by exact date string and compute min/avg/max
/// per date.
///
/// Null temperatures are skipped; a date whose rows are all null produces no
/// output row. Output is ordered by date ascending.
pub fn daily_temperature_stats(rows: &[TempObservation]) -> Vec<DailyTempStats> {
    let mut groups: BTreeMap<&str, TempAccumulator> = BTreeMap::new();

    for row in rows {
        let acc = groups.entry(row.date.as_str()).or_default();
        if let Some(tobs) = row.tobs {
            acc.add(tobs);
        }
    }

    groups
        .into_iter()
        .filter_map(|(date, acc)| {
            acc.summary().map(|(min, avg, max)| DailyTempStats {
                date: date.to_string(),
                min,
                avg,
                max,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(date: &str, tobs: Option<f64>) -> TempObservation {
        TempObservation {
            date: date.to_string(),
            tobs,
        }
    }

    #[test]
    fn accumulator_min_avg_max() {
        let mut acc = TempAccumulator::default();
        acc.add(10.0);
        acc.add(5.0);
        acc.add(15.0);
        assert_eq!(acc.summary(), Some((5.0, 10.0, 15.0)));
        assert_eq!(acc.count(), 3);
    }

    #[test]
    fn accumulator_empty() {
        let acc = TempAccumulator::default();
        assert_eq!(acc.summary(), None);
    }

    #[test]
    fn groups_by_date() {
        let rows = [
            obs("2017-01-01", Some(60.0)),
            obs("2017-01-01", Some(70.0)),
            obs("2017-01-02", Some(65.0)),
        ];

        let stats = daily_temperature_stats(&rows);
        assert_eq!(
            stats,
            vec![
                DailyTempStats {
                    date: "2017-01-01".to_string(),
                    min: 60.0,
                    avg: 65.0,
                    max: 70.0,
                },
                DailyTempStats {
                    date: "2017-01-02".to_string(),
                    min: 65.0,
                    avg: 65.0,
                    max: 65.0,
                },
            ]
        );
    }

    #[test]
    fn null_temperatures_are_skipped_within_a_group() {
        let rows = [
            obs("2017-01-01", Some(60.0)),
            obs("2017-01-01", None),
            obs("2017-01-01", Some(70.0)),
        ];

        let stats = daily_temperature_stats(&rows);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].avg, 65.0);
    }

    #[test]
    fn all_null_group_is_dropped() {
        let rows = [
            obs("2017-01-01", None),
            obs("2017-01-02", Some(62.0)),
        ];

        let stats = daily_temperature_stats(&rows);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].date, "2017-01-02");
    }

    #[test]
    fn output_is_sorted_by_date() {
        let rows = [
            obs("2017-03-01", Some(1.0)),
            obs("2017-01-01", Some(2.0)),
            obs("2017-02-01", Some(3.0)),
        ];

        let dates: Vec<_> = daily_temperature_stats(&rows)
            .into_iter()
            .map(|s| s.date)
            .collect();
        assert_eq!(dates, vec!["2017-01-01", "2017-02-01", "2017-03-01"]);
    }
}
