// src/reporter.rs
// CSV & JSON Export of the normalized experiment, plus the startup summary.

use crate::models::ViewModel;
use crate::profile::format_personality_profile;
use csv::Writer;
use std::error::Error;
use std::fs::File;

pub struct Reporter;

impl Reporter {
    pub fn export_csv(filename: &str, data: &ViewModel) -> Result<(), Box<dyn Error>> {
        let mut wtr = Writer::from_path(filename)?;

        wtr.write_record(&[
            "round",
            "agent_name",
            "attitude_score",
            "change_reason",
            "response_to_others",
        ])?;

        for (round, bucket) in data.responses.iter().enumerate() {
            for record in bucket {
                wtr.write_record(&[
                    round.to_string(),
                    record.agent_name.clone(),
                    record.attitude_score.to_string(),
                    record.change_reason.clone().unwrap_or_default(),
                    record.response_to_others.clone().unwrap_or_default(),
                ])?;
            }
        }

        wtr.flush()?;
        println!("✅ CSV exported to: {}", filename);
        Ok(())
    }

    pub fn export_json(filename: &str, data: &ViewModel) -> Result<(), Box<dyn Error>> {
        let mut agent_summaries = Vec::new();

        for agent in &data.agents {
            let scores = data
                .attitude_scores
                .get(&agent.name)
                .cloned()
                .unwrap_or_default();
            let recorded_changes = data
                .change_reasons
                .get(&agent.name)
                .map(|chain| chain.len())
                .unwrap_or(0);

            agent_summaries.push(serde_json::json!({
                "id": agent.id,
                "name": agent.name,
                "age": agent.age,
                "occupation": agent.occupation,
                "personality": agent.personality,
                "profile_summary": format_personality_profile(agent.profile.as_ref()),
                "attitude_scores": scores,
                "recorded_changes": recorded_changes,
            }));
        }

        let output = serde_json::json!({
            "experiment": data.experiment_info,
            "total_agents": data.agents.len(),
            "total_rounds": data.max_round + 1,
            "agents": agent_summaries,
            "export_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let mut file = File::create(filename)?;
        use std::io::Write;
        file.write_all(serde_json::to_string_pretty(&output)?.as_bytes())?;

        println!("✅ JSON summary exported to: {}", filename);
        Ok(())
    }

    pub fn print_summary(data: &ViewModel) {
        println!("\n📊 EXPERIMENT SUMMARY");
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("Experiment: {}", data.experiment_info.name);
        println!("Total Agents: {}", data.agents.len());
        println!("Rounds: {}", data.max_round + 1);

        let total_records: usize = data.responses.iter().map(|bucket| bucket.len()).sum();
        println!("Response Records: {}", total_records);

        println!("\n📈 Attitude Drift (first → last recorded):");
        for agent in &data.agents {
            match data.change_reasons.get(&agent.name) {
                Some(chain) if !chain.is_empty() => {
                    let first = &chain[0];
                    let last = &chain[chain.len() - 1];
                    println!("  {}: {:.0} → {:.0}", agent.name, first.to, last.to);
                }
                _ => println!("  {}: no recorded responses", agent.name),
            }
        }

        println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");
    }
}
