// src/api.rs
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::models::{ChangeReason, ResponseRecord};
use crate::profile::format_personality_profile;
use crate::reporter::Reporter;
use crate::AppState;

// GET /api/experiment
// The whole normalized ViewModel, exactly as the charts consume it.
pub async fn get_experiment(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.experiment)
}

// GET /api/network
pub async fn get_network(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(&data.network)
}

// GET /api/rounds/{round}
pub async fn get_round(data: web::Data<AppState>, path: web::Path<usize>) -> impl Responder {
    let round = path.into_inner();

    // Out-of-range rounds come back as an empty list, matching the
    // frontend's `DATA.responses[round] || []` access
    let bucket: &[ResponseRecord] = data
        .experiment
        .responses
        .get(round)
        .map(|bucket| bucket.as_slice())
        .unwrap_or(&[]);

    HttpResponse::Ok().json(bucket)
}

#[derive(Serialize, Deserialize)]
pub struct AgentReasonsResponse {
    pub agent_name: String,
    pub occupation: String,
    pub profile_summary: String,
    pub reasons: Vec<ChangeReason>,
}

// GET /api/agents/{name}/reasons
pub async fn get_agent_reasons(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let name = path.into_inner();

    let agent = match data.experiment.agents.iter().find(|a| a.name == name) {
        Some(agent) => agent,
        None => return HttpResponse::NotFound().body("Agent not found"),
    };

    let reasons = data
        .experiment
        .change_reasons
        .get(&agent.name)
        .cloned()
        .unwrap_or_default();

    HttpResponse::Ok().json(AgentReasonsResponse {
        agent_name: agent.name.clone(),
        occupation: agent.occupation.clone(),
        profile_summary: format_personality_profile(agent.profile.as_ref()),
        reasons,
    })
}

#[derive(Deserialize)]
pub struct ExportRequest {
    pub prefix: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct ExportResponse {
    pub csv_file: String,
    pub json_file: String,
}

// POST /api/export
pub async fn export_experiment(
    data: web::Data<AppState>,
    req: web::Json<ExportRequest>,
) -> impl Responder {
    let prefix = req.prefix.clone().unwrap_or_else(|| "experiment".to_string());
    let csv_file = format!("{}_responses.csv", prefix);
    let json_file = format!("{}_agents.json", prefix);

    if let Err(e) = Reporter::export_csv(&csv_file, &data.experiment) {
        println!("❌ API Error: CSV export failed: {}", e);
        return HttpResponse::InternalServerError().body("Failed to export CSV");
    }
    if let Err(e) = Reporter::export_json(&json_file, &data.experiment) {
        println!("❌ API Error: JSON export failed: {}", e);
        return HttpResponse::InternalServerError().body("Failed to export JSON");
    }

    HttpResponse::Ok().json(ExportResponse { csv_file, json_file })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewModel;
    use crate::network::NetworkBundle;
    use crate::{loader, network};
    use actix_web::{test, App};

    fn sample_state() -> web::Data<AppState> {
        let experiment = loader::sample_data();
        let network = network::generate_network_data(&experiment.agents, &experiment.network_config);
        web::Data::new(AppState { experiment, network })
    }

    #[actix_web::test]
    async fn experiment_endpoint_serves_the_view_model() {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .route("/api/experiment", web::get().to(get_experiment)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/experiment").to_request();
        let body: ViewModel = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.agents.len(), 1);
        assert_eq!(body.max_round, 0);
    }

    #[actix_web::test]
    async fn network_endpoint_serves_all_three_variants() {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .route("/api/network", web::get().to(get_network)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/network").to_request();
        let body: NetworkBundle = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.full.nodes.len(), 1);
        assert_eq!(body.sparse.nodes.len(), 1);
        assert!(body.sparse.links.is_empty());
    }

    #[actix_web::test]
    async fn out_of_range_round_is_an_empty_list() {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .route("/api/rounds/{round}", web::get().to(get_round)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/rounds/99").to_request();
        let body: Vec<ResponseRecord> = test::call_and_read_body_json(&app, req).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn agent_reasons_include_profile_summary() {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .route("/api/agents/{name}/reasons", web::get().to(get_agent_reasons)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/agents/Sample%20Agent/reasons")
            .to_request();
        let body: AgentReasonsResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.agent_name, "Sample Agent");
        assert_eq!(body.reasons.len(), 1);
        assert_eq!(body.reasons[0].from, None);
    }

    #[actix_web::test]
    async fn unknown_agent_is_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(sample_state())
                .route("/api/agents/{name}/reasons", web::get().to(get_agent_reasons)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/agents/Nobody/reasons")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), actix_web::http::StatusCode::NOT_FOUND);
    }
}
