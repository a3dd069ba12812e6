//! Baseline figures of the 관리비 지역별 평균 table (원/㎡, 주거전용면적
//! 기준). These are the authentic numbers of the baseline period; other
//! periods are derived from them, see `transform`.

use super::model::{CellValue, StatNode};

pub const REGIONS: &[&str] = &["전국", "서울", "부산", "대구", "인천", "광주", "대전"];

fn node(id: &str, name: &str, values: &[f64], children: Vec<StatNode>) -> StatNode {
    StatNode {
        id: id.to_string(),
        name: name.to_string(),
        values: values.iter().copied().map(CellValue::Number).collect(),
        children,
    }
}

/// Monthly averages of the baseline month.
pub fn base_monthly() -> Vec<StatNode> {
    vec![
        node(
            "mgmt-common",
            "공용관리비",
            &[1099.0, 1294.0, 1021.0, 987.0, 1065.0, 948.0, 1003.0],
            vec![
                node(
                    "mgmt-labor",
                    "인건비",
                    &[642.0, 771.0, 598.0, 577.0, 623.0, 552.0, 588.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-office",
                    "제사무비",
                    &[64.0, 72.0, 60.0, 58.0, 62.0, 55.0, 59.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-tax",
                    "제세공과금",
                    &[33.0, 41.0, 30.0, 29.0, 32.0, 27.0, 30.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-clean",
                    "청소비",
                    &[182.0, 214.0, 168.0, 161.0, 176.0, 153.0, 166.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-guard",
                    "경비비",
                    &[74.0, 88.0, 69.0, 66.0, 72.0, 63.0, 68.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-repair",
                    "수선유지비",
                    &[104.0, 108.0, 96.0, 96.0, 100.0, 98.0, 92.0],
                    Vec::new(),
                ),
            ],
        ),
        node(
            "use-individual",
            "개별사용료",
            &[873.0, 1012.0, 801.0, 778.0, 842.0, 741.0, 790.0],
            vec![
                node(
                    "use-heat",
                    "난방비",
                    &[151.0, 196.0, 122.0, 118.0, 149.0, 104.0, 120.0],
                    Vec::new(),
                ),
                node(
                    "use-hotwater",
                    "급탕비",
                    &[78.0, 101.0, 63.0, 61.0, 77.0, 54.0, 62.0],
                    Vec::new(),
                ),
                node(
                    "use-electric",
                    "전기료",
                    &[381.0, 418.0, 362.0, 351.0, 370.0, 338.0, 352.0],
                    Vec::new(),
                ),
                node(
                    "use-water",
                    "수도료",
                    &[165.0, 187.0, 152.0, 148.0, 158.0, 141.0, 150.0],
                    Vec::new(),
                ),
            ],
        ),
        node(
            "ltrepair-fund",
            "장기수선충당금",
            &[232.0, 301.0, 204.0, 196.0, 221.0, 182.0, 199.0],
            Vec::new(),
        ),
    ]
}

/// Yearly averages of the baseline year.
pub fn base_yearly() -> Vec<StatNode> {
    vec![
        node(
            "mgmt-common",
            "공용관리비",
            &[13021.0, 15342.0, 12088.0, 11697.0, 12633.0, 11214.0, 11893.0],
            vec![
                node(
                    "mgmt-labor",
                    "인건비",
                    &[7589.0, 9124.0, 7081.0, 6835.0, 7374.0, 6531.0, 6962.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-office",
                    "제사무비",
                    &[757.0, 851.0, 712.0, 689.0, 734.0, 651.0, 698.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-tax",
                    "제세공과금",
                    &[388.0, 486.0, 357.0, 344.0, 379.0, 318.0, 356.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-clean",
                    "청소비",
                    &[2153.0, 2531.0, 1989.0, 1906.0, 2083.0, 1811.0, 1965.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-guard",
                    "경비비",
                    &[876.0, 1041.0, 817.0, 781.0, 852.0, 745.0, 805.0],
                    Vec::new(),
                ),
                node(
                    "mgmt-repair",
                    "수선유지비",
                    &[1231.0, 1278.0, 1136.0, 1136.0, 1184.0, 1160.0, 1089.0],
                    Vec::new(),
                ),
            ],
        ),
        node(
            "use-individual",
            "개별사용료",
            &[10333.0, 11978.0, 9481.0, 9209.0, 9966.0, 8771.0, 9351.0],
            vec![
                node(
                    "use-heat",
                    "난방비",
                    &[1787.0, 2320.0, 1444.0, 1397.0, 1764.0, 1231.0, 1420.0],
                    Vec::new(),
                ),
                node(
                    "use-hotwater",
                    "급탕비",
                    &[923.0, 1195.0, 746.0, 722.0, 911.0, 639.0, 734.0],
                    Vec::new(),
                ),
                node(
                    "use-electric",
                    "전기료",
                    &[4510.0, 4948.0, 4285.0, 4155.0, 4380.0, 4001.0, 4166.0],
                    Vec::new(),
                ),
                node(
                    "use-water",
                    "수도료",
                    &[1953.0, 2214.0, 1799.0, 1752.0, 1870.0, 1669.0, 1776.0],
                    Vec::new(),
                ),
            ],
        ),
        node(
            "ltrepair-fund",
            "장기수선충당금",
            &[2746.0, 3563.0, 2415.0, 2320.0, 2616.0, 2154.0, 2356.0],
            Vec::new(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column_counts_match(nodes: &[StatNode]) -> bool {
        nodes.iter().all(|node| {
            node.values.len() == REGIONS.len() && column_counts_match(&node.children)
        })
    }

    #[test]
    fn test_every_row_has_one_value_per_region() {
        assert!(column_counts_match(&base_monthly()));
        assert!(column_counts_match(&base_yearly()));
    }

    #[test]
    fn test_monthly_and_yearly_share_structure() {
        fn shape(nodes: &[StatNode]) -> Vec<(String, usize)> {
            nodes
                .iter()
                .flat_map(|n| {
                    let mut v = vec![(n.id.clone(), n.children.len())];
                    v.extend(shape(&n.children));
                    v
                })
                .collect()
        }
        assert_eq!(shape(&base_monthly()), shape(&base_yearly()));
    }
}
