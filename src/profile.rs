// src/profile.rs
// Renders a PersonalityProfile as one pipe-separated summary line for
// tooltips, legends and card headers. A missing sub-group emits nothing;
// a missing label inside a present sub-group renders "-".

use crate::models::PersonalityProfile;

pub fn format_personality_profile(profile: Option<&PersonalityProfile>) -> String {
    let profile = match profile {
        Some(p) => p,
        None => return String::new(),
    };

    let mut items: Vec<String> = Vec::new();

    if let Some(cognitive) = &profile.cognitive_style {
        items.push(format!(
            "Thinking: {}",
            cognitive.thinking_mode.as_deref().unwrap_or("-")
        ));
        if let Some(openness) = cognitive.openness {
            items.push(format!("Openness: {}", percent(openness)));
        }
    }

    if let Some(social) = &profile.social_tendency {
        if let Some(conformity) = social.conformity {
            items.push(format!("Conformity: {}", percent(conformity)));
        }
        if let Some(trust) = social.trust_level {
            items.push(format!("Trust: {}", percent(trust)));
        }
    }

    if let Some(emotional) = &profile.emotional_profile {
        if let Some(stability) = emotional.stability {
            items.push(format!("Stability: {}", percent(stability)));
        }
    }

    if let Some(values) = &profile.value_stance {
        items.push(format!(
            "Risk: {}",
            values.risk_attitude.as_deref().unwrap_or("-")
        ));
    }

    items.join(" | ")
}

fn percent(value: f64) -> String {
    format!("{:.0}%", value * 100.0)
}
