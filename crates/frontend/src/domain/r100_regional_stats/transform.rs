//! Period-specific views of the statistics tree.
//!
//! Authentic figures exist only for the baseline period (the most recent
//! published data). Every other period is SYNTHETIC: the baseline tree is
//! rescaled with factors derived from a fixed pseudo-random function of the
//! period key, so the same period always renders the same numbers without
//! storing any history. The page labels these periods as estimates.

use super::model::{CellValue, StatNode};

/// Most recent period with authentic data.
pub const BASELINE_YEAR: i32 = 2025;
pub const BASELINE_MONTH: u32 = 8;

pub fn is_baseline(year: i32, month: u32, yearly: bool) -> bool {
    year == BASELINE_YEAR && (yearly || month == BASELINE_MONTH)
}

/// Deterministic noise in [0, 1). Same seed, same value, across calls and
/// restarts. Not an entropy source.
fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    x - x.floor()
}

/// Tree to display for the given period: the base tree itself for the
/// baseline, a rescaled copy otherwise.
pub fn period_view(base: &[StatNode], year: i32, month: u32, yearly: bool) -> Vec<StatNode> {
    if is_baseline(year, month, yearly) {
        return base.to_vec();
    }
    transform(base, year, month, yearly)
}

/// Rescale a tree for a (year, month) key. Shape, ids and names are
/// preserved exactly; numeric values get a node-level factor in
/// [0.85, 1.15) combined with a per-value factor in [0.9, 1.1), then
/// rounding. Text values pass through. Children recurse with the same
/// period key.
pub fn transform(items: &[StatNode], year: i32, month: u32, yearly: bool) -> Vec<StatNode> {
    let period_seed = year as f64 * 100.0 + if yearly { 0.0 } else { month as f64 };

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item_seed = period_seed + idx as f64 * 17.0;
            let node_factor = 0.85 + seeded_random(item_seed) * 0.3;

            let values = item
                .values
                .iter()
                .enumerate()
                .map(|(v_idx, value)| match value {
                    CellValue::Number(v) => {
                        let value_seed = item_seed + v_idx as f64 * 7.0;
                        let value_factor = 0.9 + seeded_random(value_seed) * 0.2;
                        CellValue::Number((v * node_factor * value_factor).round())
                    }
                    CellValue::Text(t) => CellValue::Text(t.clone()),
                })
                .collect();

            StatNode {
                id: item.id.clone(),
                name: item.name.clone(),
                values,
                children: transform(&item.children, year, month, yearly),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Vec<StatNode> {
        vec![
            StatNode {
                id: "common".to_string(),
                name: "공용관리비".to_string(),
                values: vec![
                    CellValue::Number(1099.0),
                    CellValue::Number(1294.0),
                    CellValue::Text("-".to_string()),
                ],
                children: vec![StatNode {
                    id: "labor".to_string(),
                    name: "인건비".to_string(),
                    values: vec![CellValue::Number(642.0), CellValue::Number(771.0)],
                    children: Vec::new(),
                }],
            },
            StatNode {
                id: "fund".to_string(),
                name: "장기수선충당금".to_string(),
                values: vec![CellValue::Number(232.0), CellValue::Number(301.0)],
                children: Vec::new(),
            },
        ]
    }

    fn numeric_values(nodes: &[StatNode]) -> Vec<f64> {
        let mut out = Vec::new();
        for node in nodes {
            for value in &node.values {
                if let CellValue::Number(v) = value {
                    out.push(*v);
                }
            }
            out.extend(numeric_values(&node.children));
        }
        out
    }

    #[test]
    fn test_transform_is_deterministic() {
        assert_eq!(
            transform(&base(), 2024, 5, false),
            transform(&base(), 2024, 5, false)
        );
        assert_eq!(
            transform(&base(), 2023, 1, true),
            transform(&base(), 2023, 1, true)
        );
    }

    #[test]
    fn test_baseline_period_returns_base_unchanged() {
        assert_eq!(period_view(&base(), 2025, 8, false), base());
        // yearly baseline ignores the month
        assert_eq!(period_view(&base(), 2025, 3, true), base());
        // a non-baseline month of the baseline year is still synthetic
        assert_ne!(period_view(&base(), 2025, 7, false), base());
    }

    #[test]
    fn test_different_periods_differ() {
        assert_ne!(
            transform(&base(), 2024, 5, false),
            transform(&base(), 2024, 6, false)
        );
        assert_ne!(
            transform(&base(), 2024, 5, false),
            transform(&base(), 2023, 5, false)
        );
    }

    #[test]
    fn test_shape_ids_and_names_preserved() {
        let transformed = transform(&base(), 2024, 11, false);
        assert_eq!(transformed.len(), 2);
        assert_eq!(transformed[0].id, "common");
        assert_eq!(transformed[0].name, "공용관리비");
        assert_eq!(transformed[0].children.len(), 1);
        assert_eq!(transformed[0].children[0].id, "labor");
        assert!(transformed[1].children.is_empty());
    }

    #[test]
    fn test_text_values_pass_through() {
        let transformed = transform(&base(), 2024, 2, false);
        assert_eq!(transformed[0].values[2], CellValue::Text("-".to_string()));
    }

    #[test]
    fn test_scaled_values_stay_within_factor_bounds() {
        for (year, month, yearly) in [(2023, 1, false), (2024, 6, false), (2023, 1, true)] {
            let original = numeric_values(&base());
            let scaled = numeric_values(&transform(&base(), year, month, yearly));
            assert_eq!(original.len(), scaled.len());
            for (orig, new) in original.iter().zip(scaled.iter()) {
                let ratio = new / orig;
                // 0.85×0.9 .. 1.15×1.1, with slack for the final rounding
                assert!(ratio > 0.75, "ratio {} below bound", ratio);
                assert!(ratio < 1.28, "ratio {} above bound", ratio);
                assert_eq!(new.fract(), 0.0, "scaled values are rounded");
            }
        }
    }
}
