// src/main.rs
// BELIEF DYNAMICS CORE - DASHBOARD API SERVER
// Normalizes the recorded social-influence experiment exports and serves
// them to the dashboard frontend (Chart.js + D3) via REST (Actix-Web)

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

// Modules
mod api; // API module handling requests
mod loader; // Fetch + normalize the two experiment exports
mod models;
mod network; // The three display topologies
mod profile; // PersonalityProfile summary formatting
mod reporter; // CSV/JSON export & console summary

use models::ViewModel;
use network::NetworkBundle;
use reporter::Reporter;

// Shared State for the Server. Built ONCE before the server starts -
// there is no ambient singleton; every handler receives it explicitly.
pub struct AppState {
    pub experiment: ViewModel,
    pub network: NetworkBundle,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("🚀 Belief Dynamics API Server Starting...");

    // 1. Resolve the data sources (local paths by default, URLs work too)
    let config_source = std::env::var("EXPERIMENT_CONFIG")
        .unwrap_or_else(|_| "data/experiment_config.json".to_string());
    let responses_source = std::env::var("LLM_RESPONSES")
        .unwrap_or_else(|_| "data/llm_responses.json".to_string());

    // 2. Load & Normalize (falls back to sample data on any failure)
    let experiment = loader::load_experiment_data(&config_source, &responses_source).await;
    Reporter::print_summary(&experiment);

    // 3. Derive the display topologies from the agent list
    let network = network::generate_network_data(&experiment.agents, &experiment.network_config);

    // 4. Create Shared State
    let app_state = web::Data::new(AppState { experiment, network });

    println!("🌍 Server running at http://127.0.0.1:8080");

    // 5. Start HTTP Server
    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .app_data(app_state.clone())
            .route("/api/experiment", web::get().to(api::get_experiment))
            .route("/api/network", web::get().to(api::get_network))
            .route("/api/rounds/{round}", web::get().to(api::get_round))
            .route("/api/agents/{name}/reasons", web::get().to(api::get_agent_reasons))
            .route("/api/export", web::post().to(api::export_experiment))
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
