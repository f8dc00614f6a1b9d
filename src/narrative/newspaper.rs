//! Synthetic newspaper generated from the projection outputs
//!
//! All text is pre-written template prose interpolating the numeric
//! results; the tier picks between the three main variants.

use super::{ImpactTier, TEMPERATURE_PER_STRENGTH};
use crate::assumptions::{
    GrowthModel, NarrativeThresholds, JOBS_PER_BILLION, TEMPERATURE_BASELINE,
};
use crate::policy::PolicyInputs;
use crate::projection::BudgetSummary;
use serde::{Deserialize, Serialize};

/// Maximum number of side stories printed
const MAX_SIDE_STORIES: usize = 4;

/// Formatted statistics for the "by the numbers" box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsStats {
    pub temperature: String,
    pub jobs: String,
    pub air_quality: String,
    pub emissions: String,
}

/// A short related-coverage item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideStory {
    pub title: String,
    pub excerpt: String,
}

/// The full generated front page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Newspaper {
    pub tier: ImpactTier,
    pub headline: String,
    pub subheadline: String,
    pub main_story: String,
    pub headlines: Vec<String>,
    pub side_stories: Vec<SideStory>,
    pub stats: NewsStats,
    pub opinion: String,
}

impl Newspaper {
    /// Generate the front page for a projection
    pub fn generate(
        inputs: &PolicyInputs,
        budget: &BudgetSummary,
        growth: &GrowthModel,
        thresholds: &NarrativeThresholds,
        start_year: u16,
    ) -> Self {
        let strength = inputs.strength();
        let tier = ImpactTier::from_strength(strength, thresholds);
        let spend = budget.spend;
        let jobs_millions = spend * JOBS_PER_BILLION;
        let final_temperature = TEMPERATURE_BASELINE - strength * TEMPERATURE_PER_STRENGTH;

        Self {
            tier,
            headline: headline(tier).to_string(),
            subheadline: format!(
                "${spend:.2}B Investment Transforms Economy, Environment, and Society Over 10-Year Period"
            ),
            main_story: main_story(tier, spend, strength, jobs_millions, final_temperature),
            headlines: secondary_headlines(inputs, strength, jobs_millions),
            side_stories: side_stories(inputs, strength, start_year),
            stats: NewsStats {
                temperature: format!("{final_temperature:.2}\u{b0}C"),
                jobs: format!("{jobs_millions:.1}M"),
                air_quality: format!("+{:.0}%", strength * growth.air_gain),
                emissions: format!("-{:.0}%", strength * growth.co2_factor),
            },
            opinion: opinion(tier).to_string(),
        }
    }
}

fn headline(tier: ImpactTier) -> &'static str {
    match tier {
        ImpactTier::High => {
            "CLIMATE VICTORY DECLARED: Decade of Action Reverses Environmental Crisis"
        }
        ImpactTier::Moderate => {
            "Ten Years of Progress: Climate Policies Deliver Measurable Global Impact"
        }
        ImpactTier::Low => "Climate Action Shows Results After Decade of Implementation",
    }
}

fn main_story(
    tier: ImpactTier,
    spend: f64,
    strength: f64,
    jobs_millions: f64,
    final_temperature: f64,
) -> String {
    match tier {
        ImpactTier::High => format!(
            "Ten years ago, when the comprehensive climate initiative launched with a \
             ${spend:.2} billion commitment, skeptics questioned whether such ambitious \
             policies could succeed without devastating the economy. Today, as we mark this \
             historic anniversary, the answer is unequivocally clear: not only have these \
             policies worked, they've exceeded every projection.\n\n\
             The transformation is staggering. Cities that once choked under smog now boast \
             air quality rivaling pristine wilderness. Streets once gridlocked with \
             combustion vehicles now hum quietly with electric transport. Industrial zones \
             that spewed pollution have become models of clean manufacturing. \"We didn't \
             just avoid climate catastrophe,\" declares Dr. Elena Martinez, Director of the \
             Global Climate Institute. \"We've created a blueprint for sustainable \
             civilization.\"\n\n\
             The economic story is equally compelling. The green economy now employs \
             {jobs_millions:.1} million people, more than the fossil fuel industry ever did \
             at its peak. GDP growth has averaged 4.2% annually while emissions plummeted. \
             \"We proved the false choice wrong,\" says Nobel economist Dr. James Chen. \
             \"Environmental protection and prosperity aren't opposites, they're \
             partners.\"\n\n\
             Perhaps most remarkably, this success has sparked a global movement. Over 140 \
             nations have adopted similar frameworks, creating a worldwide cascade of \
             climate action. Scientists now project we'll limit warming to \
             {final_temperature:.2}\u{b0}C, a scenario deemed impossible just a decade ago."
        ),
        ImpactTier::Moderate => format!(
            "As the ten-year anniversary of the climate initiative approaches, policymakers \
             and scientists are reflecting on a decade of steady progress and hard-won \
             victories against environmental degradation. The ${spend:.2} billion investment \
             has fundamentally reshaped major sectors of the economy while delivering \
             measurable environmental improvements.\n\n\
             \"We've turned the corner,\" states Dr. Sarah Williams, chief climate advisor. \
             \"Emissions are declining, renewable energy is thriving, and public health \
             metrics show significant improvements. But we can't rest, the next decade will \
             be equally critical.\"\n\n\
             The achievements are substantial: air quality has improved {air_gain:.0}% in \
             major cities, {jobs_millions:.1} million green jobs have been created, and \
             renewable energy capacity has expanded dramatically. Urban forests and green \
             infrastructure have transformed cityscapes, while electric vehicles have \
             become commonplace.\n\n\
             Challenges remain, however. Climate scientists warn that while progress is \
             encouraging, the pace must accelerate to meet 2050 carbon neutrality targets. \
             \"We've proven these policies work,\" notes environmental economist Dr. Robert \
             Kim. \"Now we need to scale them up globally.\"",
            air_gain = strength * 0.5,
        ),
        ImpactTier::Low => format!(
            "The decade-long climate policy initiative concludes with mixed results. While \
             the ${spend:.2} billion investment has produced some environmental improvements \
             and economic opportunities, climate scientists emphasize that much more \
             aggressive action will be necessary to avert serious climate \
             consequences.\n\n\
             \"We've made progress, but it's incremental when we needed transformational \
             change,\" cautions climatologist Dr. Amanda Rodriguez. \"The window for \
             preventing severe climate impacts is closing rapidly.\"\n\n\
             Positive developments include expanded renewable energy infrastructure, \
             improved air quality in some metropolitan areas, and the creation of green \
             sector jobs. However, overall carbon emissions remain well above sustainable \
             levels, and many policy goals have fallen short of targets.\n\n\
             Environmental advocates are calling for a dramatically scaled-up response. \
             \"This first decade taught us what works,\" argues climate activist Marcus \
             Thompson. \"Now we need the political will to implement these solutions at the \
             scale the crisis demands.\""
        ),
    }
}

fn secondary_headlines(inputs: &PolicyInputs, strength: f64, jobs_millions: f64) -> Vec<String> {
    let mut headlines = Vec::new();

    headlines.push(
        if strength > 60.0 {
            "BREAKING: Global Temperatures Stabilize Below Critical Threshold".to_string()
        } else if strength > 30.0 {
            "Temperature Rise Slows as Policies Take Effect".to_string()
        } else {
            "Climate Targets Still Within Reach, Scientists Say".to_string()
        },
    );

    if inputs.ev_adoption > 70.0 {
        headlines.push(format!(
            "Fossil Fuel Era Officially Ends: {:.0}% of Vehicles Now Electric",
            inputs.ev_adoption
        ));
    } else if inputs.ev_adoption > 40.0 {
        headlines.push("Electric Vehicles Achieve Market Dominance".to_string());
    } else if inputs.ev_adoption > 20.0 {
        headlines.push("EV Adoption Continues Steady Growth".to_string());
    }

    if inputs.renewable_energy > 70.0 {
        headlines.push("Last Coal Plant Closes as Renewable Energy Powers Nation".to_string());
    } else if inputs.renewable_energy > 50.0 {
        headlines.push("Renewable Energy Surpasses Fossil Fuels in Grid Mix".to_string());
    } else if inputs.renewable_energy > 20.0 {
        headlines.push("Solar and Wind Installations Reach Record Levels".to_string());
    }

    if inputs.tree_plantation > 60.0 {
        headlines.push("Billion Trees Milestone: Urban Forests Reshape Cities Nationwide".to_string());
    } else if inputs.tree_plantation > 40.0 {
        headlines.push("Reforestation Success: City Temperatures Drop Significantly".to_string());
    } else if inputs.tree_plantation > 20.0 {
        headlines.push("Tree Planting Programs Show Environmental Benefits".to_string());
    }

    if strength > 60.0 {
        headlines.push("Life Expectancy Increases 3 Years, Linked to Cleaner Air".to_string());
    } else if strength > 30.0 {
        headlines.push("Public Health Improves as Air Quality Standards Met".to_string());
    }

    if inputs.public_transport > 60.0 {
        headlines.push("Car Ownership Plummets as Transit Systems Transform Cities".to_string());
    } else if inputs.public_transport > 40.0 {
        headlines.push("Public Transportation Ridership Hits All-Time High".to_string());
    }

    if inputs.industrial_controls > 60.0 {
        headlines.push("Manufacturing Sector Achieves Carbon Negative Status".to_string());
    } else if inputs.industrial_controls > 40.0 {
        headlines.push("Industries Report Major Emission Reductions".to_string());
    }

    if strength > 50.0 {
        headlines.push("Endangered Species Make Remarkable Recovery".to_string());
    }

    headlines.push(if strength > 60.0 {
        "Green Jobs Now Largest Employment Sector in Economy".to_string()
    } else {
        format!("{jobs_millions:.1}M Employed in Renewable Energy Sector")
    });

    headlines
}

fn side_stories(inputs: &PolicyInputs, strength: f64, start_year: u16) -> Vec<SideStory> {
    let mut stories = Vec::new();

    if strength > 60.0 {
        stories.push(SideStory {
            title: format!("Children Born in {start_year} Grow Up Without Knowing Smog"),
            excerpt: "Generation grows up breathing clean air, enjoying urban forests that \
                      didn't exist in their parents' youth."
                .to_string(),
        });
    }

    if inputs.ev_adoption > 60.0 {
        stories.push(SideStory {
            title: "Former Oil Workers Thrive in Renewable Careers".to_string(),
            excerpt: "Just transition programs successfully retrain fossil fuel workforce \
                      for green economy."
                .to_string(),
        });
    }

    if inputs.tree_plantation > 50.0 {
        stories.push(SideStory {
            title: "Wildlife Returns to Urban Centers".to_string(),
            excerpt: "Birds, butterflies, and small mammals reclaim city parks as \
                      ecosystems recover."
                .to_string(),
        });
    }

    if inputs.renewable_energy > 60.0 {
        stories.push(SideStory {
            title: "Energy Bills Drop 40% as Renewables Dominate".to_string(),
            excerpt: "Households save thousands annually as clean energy costs plummet."
                .to_string(),
        });
    }

    if strength > 50.0 {
        stories.push(SideStory {
            title: "Mental Health Crisis Eases as Climate Anxiety Fades".to_string(),
            excerpt: "Psychologists report dramatic decline in eco-anxiety among youth."
                .to_string(),
        });
    }

    if inputs.public_transport > 60.0 {
        stories.push(SideStory {
            title: "Productivity Soars as Commute Times Halve".to_string(),
            excerpt: "Workers gain hours weekly as efficient transit replaces car \
                      congestion."
                .to_string(),
        });
    }

    stories.truncate(MAX_SIDE_STORIES);
    stories
}

fn opinion(tier: ImpactTier) -> &'static str {
    match tier {
        ImpactTier::High => {
            "Editorial: We Chose Wisely - A decade ago, we faced a choice between \
             short-term comfort and long-term survival. We chose survival, and today we \
             reap rewards beyond imagination. Future generations will study this decade as \
             the turning point when humanity chose wisdom over expedience."
        }
        _ => {
            "Editorial: Progress Made, But Urgency Remains - While celebrating genuine \
             achievements, we must acknowledge the work ahead. This decade proved climate \
             action is possible and beneficial. The next must prove it's sufficient."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{Assumptions, PolicyCosts};

    fn newspaper_for(inputs: &PolicyInputs) -> Newspaper {
        let assumptions = Assumptions::default_pricing();
        let budget = BudgetSummary::new(inputs, &PolicyCosts::default_pricing(), 100.0);
        Newspaper::generate(
            inputs,
            &budget,
            &GrowthModel::ten_year(),
            &assumptions.thresholds,
            2026,
        )
    }

    #[test]
    fn test_zero_inputs_select_low_template() {
        let paper = newspaper_for(&PolicyInputs::default());

        assert_eq!(paper.tier, ImpactTier::Low);
        assert!(paper.headline.starts_with("Climate Action Shows Results"));
        assert_eq!(paper.stats.temperature, "1.50\u{b0}C");
        assert_eq!(paper.stats.jobs, "0.0M");
        assert_eq!(paper.stats.emissions, "-0%");

        // Only the tier headline and the jobs fallback appear
        assert_eq!(paper.headlines.len(), 2);
        assert!(paper.side_stories.is_empty());
    }

    #[test]
    fn test_maxed_inputs_select_high_template() {
        let paper = newspaper_for(&PolicyInputs::uniform(100.0));

        assert_eq!(paper.tier, ImpactTier::High);
        assert!(paper.headline.starts_with("CLIMATE VICTORY DECLARED"));
        assert_eq!(paper.stats.temperature, "1.20\u{b0}C");
        assert_eq!(paper.stats.emissions, "-90%");
        assert!(paper.opinion.starts_with("Editorial: We Chose Wisely"));

        // Every lever past its highest cutoff: all nine slots fire
        assert_eq!(paper.headlines.len(), 9);
        assert_eq!(paper.side_stories.len(), 4);
    }

    #[test]
    fn test_subheadline_carries_spend() {
        let paper = newspaper_for(&PolicyInputs::uniform(50.0));
        assert!(paper.subheadline.starts_with("$137.50B Investment"));
    }
}
