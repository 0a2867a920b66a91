// src/loader.rs
// Data Loader / Normalizer
// Fetches the two experiment exports and reshapes them into the ViewModel:
// - experiment_config.json: agent cognitive modeling info
// - llm_responses.json: LLM responses and attitude trajectories
// Loading never fails: any transport or parse error falls back to sample data.

use crate::models::{
    AgentRecord, ChangeReason, ConfigDocument, ExperimentInfo, PersonalityProfile,
    ResponseDocument, ResponseRecord, ViewModel,
};
use chrono::Utc;
use std::collections::HashMap;
use std::error::Error;

pub const DEFAULT_EXPERIMENT_NAME: &str = "Social Influence Experiment";
const EMPTY_REASON: &str = "n/a";

// Main Entry Point. Sources can be HTTP(S) URLs or local file paths.
pub async fn load_experiment_data(config_source: &str, responses_source: &str) -> ViewModel {
    match fetch_documents(config_source, responses_source).await {
        Ok((config, responses)) => process_data(&config, &responses),
        Err(e) => {
            println!("⚠️ LOADER: Failed to load experiment data: {}. Serving sample data.", e);
            sample_data()
        }
    }
}

async fn fetch_documents(
    config_source: &str,
    responses_source: &str,
) -> Result<(ConfigDocument, ResponseDocument), Box<dyn Error>> {
    // Both retrievals in flight at once; either failure discards both.
    let (config_bytes, response_bytes) =
        tokio::join!(fetch_bytes(config_source), fetch_bytes(responses_source));

    let config: ConfigDocument = serde_json::from_slice(&config_bytes?)?;
    let responses: ResponseDocument = serde_json::from_slice(&response_bytes?)?;
    Ok((config, responses))
}

async fn fetch_bytes(source: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let res = reqwest::get(source).await?.error_for_status()?;
        Ok(res.bytes().await?.to_vec())
    } else {
        Ok(tokio::fs::read(source).await?)
    }
}

// Pure transform of the two parsed exports into the display format.
pub fn process_data(config: &ConfigDocument, responses: &ResponseDocument) -> ViewModel {
    let records = &responses.responses;

    // 1. Agents from the config list, id = position
    let agents: Vec<AgentRecord> = config
        .agents
        .iter()
        .enumerate()
        .map(|(idx, a)| AgentRecord {
            id: idx,
            name: a.name.clone(),
            age: a.age,
            occupation: a.occupation.clone(),
            personality: a.personality.clone(),
            profile: a.personality_profile.clone(),
        })
        .collect();

    // 2. Name -> id map for sorting. A name missing from the config maps
    // to id 0, which files that record ahead of everything but agent 0.
    // The original exporter behaved this way; kept on purpose (see DESIGN.md).
    let name_to_id: HashMap<&str, usize> =
        agents.iter().map(|a| (a.name.as_str(), a.id)).collect();
    let mapped_id = |name: &str| *name_to_id.get(name).unwrap_or(&0);

    // 3. An empty response list still yields one round, round 0
    let max_round = records.iter().map(|r| r.round).max().unwrap_or(0);

    // 4. Responses grouped per round. The sort must be stable: records with
    // equal mapped ids (e.g. two unknown names) keep their original order.
    let mut by_round: Vec<Vec<ResponseRecord>> = Vec::with_capacity(max_round as usize + 1);
    for round in 0..=max_round {
        let mut bucket: Vec<ResponseRecord> = records
            .iter()
            .filter(|r| r.round == round)
            .cloned()
            .collect();
        bucket.sort_by_key(|r| mapped_id(&r.agent_name));
        by_round.push(bucket);
    }

    // 5. Attitude time series with explicit gaps. First matching record in
    // original order wins; a missing (agent, round) pair stays None so the
    // chart can render the gap. Linear search is fine at this scale.
    let mut attitude_scores: HashMap<String, Vec<Option<f64>>> = HashMap::new();
    for agent in &agents {
        let mut series = Vec::with_capacity(max_round as usize + 1);
        for round in 0..=max_round {
            let record = records
                .iter()
                .find(|r| r.agent_name == agent.name && r.round == round);
            series.push(record.map(|r| r.attitude_score));
        }
        attitude_scores.insert(agent.name.clone(), series);
    }

    // 6. Change reasons chained chronologically. `from` comes from the
    // previous record the agent actually produced ("first seen" gets None),
    // not from round - 1.
    let mut change_reasons: HashMap<String, Vec<ChangeReason>> = HashMap::new();
    for agent in &agents {
        let mut own: Vec<&ResponseRecord> = records
            .iter()
            .filter(|r| r.agent_name == agent.name)
            .collect();
        own.sort_by_key(|r| r.round);

        let mut chain = Vec::with_capacity(own.len());
        let mut previous: Option<f64> = None;
        for r in own {
            chain.push(ChangeReason {
                round: r.round,
                from: previous,
                to: r.attitude_score,
                reason: r
                    .change_reason
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| EMPTY_REASON.to_string()),
            });
            previous = Some(r.attitude_score);
        }
        change_reasons.insert(agent.name.clone(), chain);
    }

    // 7. Experiment info precedence: config name -> response file -> default
    let raw_info = responses.experiment_info.as_ref();
    let experiment_info = ExperimentInfo {
        name: config
            .name
            .clone()
            .filter(|s| !s.is_empty())
            .or_else(|| raw_info.and_then(|i| i.name.clone()).filter(|s| !s.is_empty()))
            .unwrap_or_else(|| DEFAULT_EXPERIMENT_NAME.to_string()),
        description: raw_info
            .and_then(|i| i.description.clone())
            .unwrap_or_default(),
        created_at: raw_info
            .and_then(|i| i.created_at.clone())
            .unwrap_or_else(|| Utc::now().to_rfc3339()),
    };

    ViewModel {
        experiment_info,
        news: config.news.clone(),
        metadata: config
            .experiment_metadata
            .clone()
            .unwrap_or_else(|| serde_json::json!({})),
        network_config: config
            .network_config
            .clone()
            .unwrap_or_else(|| serde_json::json!({})),
        agents,
        responses: by_round,
        attitude_scores,
        change_reasons,
        max_round,
    }
}

// Fixed fallback so the presentation layer never needs null checks on the
// top-level shape: one synthetic agent, one round, one response row.
pub fn sample_data() -> ViewModel {
    let agent_name = "Sample Agent".to_string();

    let agent = AgentRecord {
        id: 0,
        name: agent_name.clone(),
        age: 30,
        occupation: "Tester".to_string(),
        personality: "balanced".to_string(),
        profile: Some(PersonalityProfile::default()),
    };

    let record = ResponseRecord {
        agent_name: agent_name.clone(),
        round: 0,
        attitude_score: 50.0,
        change_reason: Some("sample".to_string()),
        response_to_others: Some("sample response".to_string()),
    };

    let mut attitude_scores = HashMap::new();
    attitude_scores.insert(agent_name.clone(), vec![Some(50.0)]);

    let mut change_reasons = HashMap::new();
    change_reasons.insert(
        agent_name.clone(),
        vec![ChangeReason {
            round: 0,
            from: None,
            to: 50.0,
            reason: "sample data".to_string(),
        }],
    );

    ViewModel {
        experiment_info: ExperimentInfo {
            name: format!("{} (sample data)", DEFAULT_EXPERIMENT_NAME),
            description: "Place experiment_config.json and llm_responses.json in the data folder"
                .to_string(),
            created_at: Utc::now().to_rfc3339(),
        },
        news: None,
        metadata: serde_json::json!({}),
        network_config: serde_json::json!({}),
        agents: vec![agent],
        responses: vec![vec![record]],
        attitude_scores,
        change_reasons,
        max_round: 0,
    }
}
