//! Dashboard analytics. Only the interview total is computed; the remaining figures are
//! fixed showcase numbers.

use serde::Serialize;

use super::domain::Interview;

#[derive(Debug, Clone, Serialize)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<&'static str>,
    pub change_from_last_month_pct: i8,
}

impl KpiCard {
    pub fn display_value(&self) -> String {
        match self.unit {
            Some(unit) => format!("{}{}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyInterviews {
    pub month: &'static str,
    pub interviews: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct DepartmentShare {
    pub department: &'static str,
    pub interviews: u32,
    pub share_pct: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardAnalytics {
    pub kpis: Vec<KpiCard>,
    pub monthly_interviews: Vec<MonthlyInterviews>,
    pub interviews_by_department: Vec<DepartmentShare>,
}

impl DashboardAnalytics {
    pub fn snapshot(interviews: &[Interview]) -> Self {
        Self {
            kpis: kpi_cards(interviews.len()),
            monthly_interviews: monthly_interviews(),
            interviews_by_department: department_shares(),
        }
    }

    pub fn kpi(&self, label: &str) -> Option<&KpiCard> {
        self.kpis.iter().find(|card| card.label == label)
    }
}

fn kpi_cards(total_interviews: usize) -> Vec<KpiCard> {
    vec![
        KpiCard {
            label: "Total Interviews",
            value: u32::try_from(total_interviews).unwrap_or(u32::MAX),
            unit: None,
            change_from_last_month_pct: 12,
        },
        KpiCard {
            label: "Candidates",
            value: 247,
            unit: None,
            change_from_last_month_pct: 5,
        },
        KpiCard {
            label: "Completion Rate",
            value: 86,
            unit: Some("%"),
            change_from_last_month_pct: 2,
        },
        KpiCard {
            label: "Hiring Rate",
            value: 32,
            unit: Some("%"),
            change_from_last_month_pct: 8,
        },
    ]
}

fn monthly_interviews() -> Vec<MonthlyInterviews> {
    [
        ("Jan", 20),
        ("Feb", 25),
        ("Mar", 30),
        ("Apr", 35),
        ("May", 28),
        ("Jun", 32),
    ]
    .into_iter()
    .map(|(month, interviews)| MonthlyInterviews { month, interviews })
    .collect()
}

fn department_shares() -> Vec<DepartmentShare> {
    let series = [
        ("Engineering", 45u32),
        ("Marketing", 28),
        ("Sales", 20),
        ("HR", 15),
        ("Finance", 12),
    ];
    let total: u32 = series.iter().map(|(_, interviews)| interviews).sum();

    series
        .into_iter()
        .map(|(department, interviews)| DepartmentShare {
            department,
            interviews,
            share_pct: ((interviews as f64 / total as f64) * 100.0).round() as u8,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::interviews::fixtures::CatalogFixtures;

    #[test]
    fn total_interviews_tracks_catalog_size() {
        let fixtures = CatalogFixtures::standard();
        let analytics = DashboardAnalytics::snapshot(&fixtures.interviews);
        let total = analytics.kpi("Total Interviews").expect("total card");
        assert_eq!(total.value, 4);
        assert_eq!(total.display_value(), "4");

        let completion = analytics.kpi("Completion Rate").expect("completion card");
        assert_eq!(completion.display_value(), "86%");
    }

    #[test]
    fn department_shares_are_rounded_percentages() {
        let analytics = DashboardAnalytics::snapshot(&[]);
        let shares: Vec<_> = analytics
            .interviews_by_department
            .iter()
            .map(|share| (share.department, share.share_pct))
            .collect();
        assert_eq!(
            shares,
            vec![
                ("Engineering", 38),
                ("Marketing", 23),
                ("Sales", 17),
                ("HR", 13),
                ("Finance", 10),
            ]
        );
        assert_eq!(analytics.monthly_interviews.len(), 6);
        assert_eq!(analytics.monthly_interviews[3].interviews, 35);
    }
}
