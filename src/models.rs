// src/models.rs
// Data Model - Raw experiment exports & the normalized ViewModel
// Wire field names match the original JSON exports exactly
// (camelCase config keys, snake_case response keys).

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// --- RAW INPUT: experiment_config.json ---

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigDocument {
    pub name: Option<String>,
    #[serde(default)]
    pub agents: Vec<ConfigAgent>,
    pub news: Option<Value>,
    #[serde(rename = "experimentMetadata")]
    pub experiment_metadata: Option<Value>,
    #[serde(rename = "networkConfig")]
    pub network_config: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigAgent {
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub personality: String,
    #[serde(rename = "personalityProfile")]
    pub personality_profile: Option<PersonalityProfile>,
}

// The cognitive modeling block. Every sub-group is optional: exports from
// older experiment runs only carry some of them, and absence must never
// break the display.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalityProfile {
    pub cognitive_style: Option<CognitiveStyle>,
    pub social_tendency: Option<SocialTendency>,
    pub emotional_profile: Option<EmotionalProfile>,
    pub value_stance: Option<ValueStance>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CognitiveStyle {
    pub thinking_mode: Option<String>,
    pub openness: Option<f64>, // 0.0 - 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialTendency {
    pub conformity: Option<f64>,  // 0.0 - 1.0, susceptibility to influence
    pub trust_level: Option<f64>, // 0.0 - 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmotionalProfile {
    pub stability: Option<f64>, // 0.0 - 1.0
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValueStance {
    pub risk_attitude: Option<String>,
}

// --- RAW INPUT: llm_responses.json ---

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResponseDocument {
    pub experiment_info: Option<RawExperimentInfo>,
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawExperimentInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<String>,
}

// One LLM response at one round. Duplicates and gaps per (agent, round)
// are tolerated, never enforced away.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub agent_name: String,
    #[serde(default)]
    pub round: u32,
    pub attitude_score: f64, // 0 - 100
    pub change_reason: Option<String>,
    pub response_to_others: Option<String>,
}

// --- NORMALIZED OUTPUT: the ViewModel the dashboard consumes ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: usize, // stable index, assigned at load time
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub personality: String,
    pub profile: Option<PersonalityProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperimentInfo {
    pub name: String,
    pub description: String,
    pub created_at: String,
}

// One step in an agent's chronological attitude trajectory.
// `from` is None only for the agent's first recorded response,
// regardless of which round that was.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeReason {
    pub round: u32,
    pub from: Option<f64>,
    pub to: f64,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewModel {
    pub experiment_info: ExperimentInfo,
    pub news: Option<Value>,
    pub metadata: Value,       // experimentMetadata pass-through, {} when absent
    #[serde(rename = "networkConfig")]
    pub network_config: Value, // pass-through, {} when absent

    pub agents: Vec<AgentRecord>,

    // Indexed by round 0..=max_round; each bucket stable-sorted by agent id.
    pub responses: Vec<Vec<ResponseRecord>>,

    // Per-agent score series, length max_round + 1, position = round.
    // None marks a missing (agent, round) record - the chart renders a gap,
    // so it must never be coerced to 0 or dropped.
    pub attitude_scores: HashMap<String, Vec<Option<f64>>>,

    pub change_reasons: HashMap<String, Vec<ChangeReason>>,

    #[serde(rename = "maxRound")]
    pub max_round: u32,
}
