//! Program timeline: templated milestones at years 1, 5, and 10

use super::TEMPERATURE_PER_STRENGTH;
use crate::assumptions::{JOBS_PER_BILLION, TEMPERATURE_BASELINE};
use crate::policy::PolicyInputs;
use crate::projection::BudgetSummary;
use serde::{Deserialize, Serialize};

/// One milestone entry in the program timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub title: String,
    pub impacts: Vec<String>,
    pub challenges: Vec<String>,
    pub achievements: Vec<String>,
}

/// Year-by-year narrative for the projection horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    pub year_one: Milestone,
    pub year_five: Milestone,
    pub year_ten: Milestone,
}

impl Timeline {
    /// Generate the three milestones for a projection
    pub fn generate(inputs: &PolicyInputs, budget: &BudgetSummary, start_year: u16) -> Self {
        let strength = inputs.strength();
        let spend = budget.spend;

        Self {
            year_one: year_one(inputs, spend, strength, start_year),
            year_five: year_five(inputs, spend, strength, start_year),
            year_ten: year_ten(inputs, spend, strength, start_year),
        }
    }
}

fn year_one(inputs: &PolicyInputs, spend: f64, strength: f64, start_year: u16) -> Milestone {
    let mut impacts = vec![
        format!(
            "Infrastructure Development: Initial deployment of {} begins across major cities.",
            if inputs.ev_adoption > 0.0 {
                "EV charging stations"
            } else {
                "green infrastructure"
            }
        ),
        format!(
            "Policy Rollout: {} drive early adoption.",
            if inputs.renewable_energy > 30.0 {
                "Aggressive renewable energy subsidies"
            } else {
                "Renewable energy incentives"
            }
        ),
        format!(
            "Public Awareness: Nationwide campaigns educate citizens about climate \
             policies, reaching {:.0} million people.",
            strength * 5.0
        ),
    ];

    if inputs.tree_plantation > 20.0 {
        impacts.push(format!(
            "Green Initiatives: {:.0} million trees planted, creating visible changes in \
             urban landscapes.",
            inputs.tree_plantation * 10.0
        ));
    }

    impacts.push(format!(
        "Economic Impact: {:.1}M green jobs created in construction, installation, and \
         planning sectors.",
        spend * 0.2 * JOBS_PER_BILLION
    ));
    impacts.push(format!(
        "Early Results: Air quality monitoring shows {:.1}% improvement in major \
         metropolitan areas.",
        strength * 0.05
    ));

    Milestone {
        title: format!(
            "Year 1 ({}): Foundation & Implementation",
            start_year + 1
        ),
        impacts,
        challenges: vec![
            "Initial resistance from traditional industries requiring transition support"
                .to_string(),
            "Supply chain adjustments needed for new green technologies".to_string(),
            "Public adaptation period to new transportation and energy systems".to_string(),
        ],
        achievements: vec![
            format!("${:.1}B allocated and actively deployed", spend * 0.2),
            if inputs.ev_adoption > 20.0 {
                "EV sales surge 40% above projections".to_string()
            } else {
                "Green technology adoption exceeds expectations".to_string()
            },
            "Cross-sector partnerships established for sustainable development".to_string(),
        ],
    }
}

fn year_five(inputs: &PolicyInputs, spend: f64, strength: f64, start_year: u16) -> Milestone {
    let mut impacts = vec![
        format!(
            "Environmental Progress: CO\u{2082} emissions reduced by {:.1}%, exceeding \
             initial targets.",
            inputs.co2_reduction * 0.5
        ),
        if inputs.renewable_energy > 50.0 {
            "Energy Revolution: Renewable energy now powers majority of grid.".to_string()
        } else {
            format!(
                "Energy Revolution: {:.0}% renewable energy integration achieved.",
                inputs.renewable_energy * 0.5
            )
        },
        format!(
            "Urban Transformation: {}, reducing urban noise pollution by 30%.",
            if inputs.ev_adoption > 40.0 {
                "EVs dominate city streets"
            } else {
                "Significant EV presence in urban areas"
            }
        ),
        format!(
            "Green Economy: {:.1}M employed in renewable sectors, representing 8% of \
             workforce.",
            spend * 0.6 * JOBS_PER_BILLION
        ),
    ];

    if inputs.tree_plantation > 30.0 {
        impacts.push(format!(
            "Ecosystem Recovery: {:.0} million trees matured, urban temperatures drop \
             {:.1}\u{b0}C.",
            inputs.tree_plantation * 50.0,
            inputs.tree_plantation * 0.15
        ));
    }

    impacts.push(format!(
        "Health Benefits: Respiratory disease rates decline {:.0}% in high-density areas.",
        strength * 0.2
    ));
    impacts.push(
        "Global Leadership: Nation recognized as climate action leader, influencing \
         international policy adoption."
            .to_string(),
    );

    Milestone {
        title: format!(
            "Year 5 ({}): Acceleration & Transformation",
            start_year + 5
        ),
        impacts,
        challenges: vec![
            "Managing rapid industrial transition and worker retraining programs".to_string(),
            "Balancing economic growth with environmental sustainability".to_string(),
            "Addressing regional disparities in policy implementation".to_string(),
        ],
        achievements: vec![
            format!(
                "Temperature rise limited to {:.2}\u{b0}C above pre-industrial levels",
                TEMPERATURE_BASELINE - strength * TEMPERATURE_PER_STRENGTH * 0.5
            ),
            "Carbon neutrality timeline accelerated by 5 years".to_string(),
            if inputs.public_transport > 40.0 {
                "Public transit ridership doubles, traffic congestion eliminated in major \
                 cities"
                    .to_string()
            } else {
                "Significant public transport improvements".to_string()
            },
        ],
    }
}

fn year_ten(inputs: &PolicyInputs, spend: f64, strength: f64, start_year: u16) -> Milestone {
    let mut impacts = vec![
        format!(
            "Climate Stabilization: Global temperature increase held to {:.2}\u{b0}C, \
             preventing worst-case scenarios.",
            TEMPERATURE_BASELINE - strength * TEMPERATURE_PER_STRENGTH
        ),
        if inputs.ev_adoption > 60.0 {
            "Complete Transformation: 85% of vehicles fully electric, fossil fuel \
             infrastructure largely decommissioned."
                .to_string()
        } else {
            format!(
                "Complete Transformation: {:.0}% EV adoption rate, fossil fuel \
                 infrastructure largely decommissioned.",
                inputs.ev_adoption * 0.85
            )
        },
        if inputs.renewable_energy > 60.0 {
            "Energy Independence: Nation achieves 100% renewable energy grid.".to_string()
        } else {
            format!(
                "Energy Independence: {:.0}% renewable energy capacity.",
                inputs.renewable_energy * 0.9
            )
        },
        format!(
            "Ecosystem Revival: Biodiversity indices show {:.0}% improvement, endangered \
             species populations recovering.",
            strength * 0.4
        ),
        format!(
            "Economic Success: Green economy generates ${:.1}B annually, {:.1}M permanent \
             jobs established.",
            spend * 4.0,
            spend * JOBS_PER_BILLION
        ),
        if strength > 60.0 {
            "Air Quality Victory: Air pollution reduced to pre-industrial levels in most \
             regions."
                .to_string()
        } else {
            format!(
                "Air Quality Victory: {:.0}% reduction in harmful particulates.",
                strength * 0.6
            )
        },
        format!(
            "Global Influence: Climate policies adopted worldwide, preventing {:.0} \
             gigatons of global emissions.",
            strength * 0.15
        ),
    ];

    if inputs.tree_plantation > 50.0 {
        impacts.push(format!(
            "Forest Coverage: {:.0} million trees create vast carbon sinks, sequestering \
             {:.0} megatons CO\u{2082} annually.",
            inputs.tree_plantation * 100.0,
            inputs.tree_plantation * 50.0
        ));
    }

    Milestone {
        title: format!("Year 10 ({}): Maturity & Global Impact", start_year + 10),
        impacts,
        challenges: vec![
            "Maintaining momentum and preventing policy rollback".to_string(),
            "Adapting to unforeseen climate impacts already in motion".to_string(),
            "Supporting developing nations in climate transition".to_string(),
        ],
        achievements: vec![
            if strength > 60.0 {
                "Climate crisis averted, sustainable future secured".to_string()
            } else {
                "Significant progress toward climate stability".to_string()
            },
            "Next-generation growing up in cleaner, healthier environment".to_string(),
            "Proof that economic prosperity and environmental protection align".to_string(),
            if inputs.industrial_controls > 50.0 {
                "Industrial sector achieves carbon-negative status".to_string()
            } else {
                "Industries operating sustainably".to_string()
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::PolicyCosts;
    use crate::policy::Lever;

    fn timeline_for(inputs: &PolicyInputs) -> Timeline {
        let budget = BudgetSummary::new(inputs, &PolicyCosts::default_pricing(), 100.0);
        Timeline::generate(inputs, &budget, 2026)
    }

    #[test]
    fn test_milestone_year_labels() {
        let timeline = timeline_for(&PolicyInputs::default());

        assert!(timeline.year_one.title.contains("(2027)"));
        assert!(timeline.year_five.title.contains("(2031)"));
        assert!(timeline.year_ten.title.contains("(2036)"));
    }

    #[test]
    fn test_tree_lines_gated_by_threshold() {
        let mut low = PolicyInputs::default();
        low.set(Lever::TreePlantation, 10.0);
        let timeline = timeline_for(&low);
        assert_eq!(timeline.year_one.impacts.len(), 5);
        assert!(!timeline
            .year_one
            .impacts
            .iter()
            .any(|line| line.starts_with("Green Initiatives")));

        let mut high = PolicyInputs::default();
        high.set(Lever::TreePlantation, 60.0);
        let timeline = timeline_for(&high);
        assert_eq!(timeline.year_one.impacts.len(), 6);
        assert!(timeline
            .year_one
            .impacts
            .iter()
            .any(|line| line.contains("600 million trees planted")));
        assert!(timeline
            .year_ten
            .impacts
            .iter()
            .any(|line| line.starts_with("Forest Coverage")));
    }

    #[test]
    fn test_each_milestone_has_three_challenges() {
        let timeline = timeline_for(&PolicyInputs::uniform(70.0));

        assert_eq!(timeline.year_one.challenges.len(), 3);
        assert_eq!(timeline.year_five.challenges.len(), 3);
        assert_eq!(timeline.year_ten.challenges.len(), 3);
    }

    #[test]
    fn test_high_strength_switches_templates() {
        let timeline = timeline_for(&PolicyInputs::uniform(80.0));

        assert!(timeline
            .year_ten
            .achievements
            .contains(&"Climate crisis averted, sustainable future secured".to_string()));
        assert!(timeline
            .year_ten
            .impacts
            .iter()
            .any(|line| line.contains("pre-industrial levels in most regions")));
    }
}
