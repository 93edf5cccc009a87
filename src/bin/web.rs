//! HTTP front for the scheduler: a UI posts participants and config, gets fixtures back.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080). Log level via RUST_LOG.

use actix_web::{
    get, post,
    web::{self, Json},
    App, HttpResponse, HttpServer, Responder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tournament_scheduler::{
    generate_schedule, generate_schedule_with_rng, participants_from_csv, schedule_to_csv,
    MatchRecord, Participant, ScheduleConfig, ScheduleError,
};

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct ScheduleRequest {
    participants: Vec<Participant>,
    config: ScheduleConfig,
    /// Seed for the group shuffle; omit for random groups.
    #[serde(default)]
    seed: Option<u64>,
}

/// Validate the config at the boundary, then run the pure scheduler.
fn build_schedule(request: ScheduleRequest) -> Result<Vec<MatchRecord>, ScheduleError> {
    let config = request.config.validate()?;
    let matches = match request.seed {
        Some(seed) => generate_schedule_with_rng(
            &request.participants,
            &config,
            &mut StdRng::seed_from_u64(seed),
        ),
        None => generate_schedule(&request.participants, &config),
    };
    Ok(matches)
}

fn bad_request(e: ScheduleError) -> HttpResponse {
    log::warn!("Rejected request: {}", e);
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "tournament-scheduler",
    })
}

/// Generate (or regenerate with a modified config) a schedule as JSON.
///
/// `homeParticipant`/`awayParticipant` are either a resolved participant object
/// (`{"id": "...", "label": "..."}`) or a bare placeholder string such as
/// `"Winner Semifinal 1"` or `"tbd"`.
#[post("/api/schedule")]
async fn api_generate_schedule(body: Json<ScheduleRequest>) -> HttpResponse {
    match build_schedule(body.into_inner()) {
        Ok(matches) => HttpResponse::Ok().json(matches),
        Err(e) => bad_request(e),
    }
}

/// Same as `/api/schedule`, exported as CSV.
#[post("/api/schedule/csv")]
async fn api_export_schedule(body: Json<ScheduleRequest>) -> HttpResponse {
    match build_schedule(body.into_inner()).and_then(|matches| schedule_to_csv(&matches)) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(csv),
        Err(e) => bad_request(e),
    }
}

/// Parse an `id,label` CSV upload into participants.
#[post("/api/participants/csv")]
async fn api_import_participants(body: String) -> HttpResponse {
    match participants_from_csv(body.as_bytes()) {
        Ok(participants) => HttpResponse::Ok().json(participants),
        Err(e) => bad_request(e),
    }
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_health)
        .service(api_generate_schedule)
        .service(api_export_schedule)
        .service(api_import_participants);
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| App::new().configure(configure))
        .bind(bind)?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn request_body(game_mode: &str, match_minutes: u32) -> Value {
        json!({
            "participants": [
                { "id": "a", "label": "A" },
                { "id": "b", "label": "B" },
                { "id": "c", "label": "C" },
                { "id": "d", "label": "D" }
            ],
            "config": {
                "gameMode": game_mode,
                "venueTopology": "sequential",
                "matchDurationMinutes": match_minutes,
                "breakDurationMinutes": 2,
                "startTimestamp": "2024-01-01T10:00:00Z"
            },
            "seed": 7
        })
    }

    #[actix_web::test]
    async fn schedule_endpoint_returns_matches() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/schedule")
            .set_json(request_body("round_robin", 10))
            .to_request();
        let body: Vec<Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 6);
        assert_eq!(body[0]["slot"], 1);
        assert_eq!(body[0]["stage"], "Round 1");
        assert_eq!(body[1]["scheduledAt"], "2024-01-01T10:12:00Z");
    }

    #[actix_web::test]
    async fn schedule_endpoint_rejects_zero_duration() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/schedule")
            .set_json(request_body("round_robin", 0))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn schedule_endpoint_rejects_overlong_slots() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/schedule")
            .set_json(request_body("round_robin", u32::MAX))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn csv_export_has_header_and_rows() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/schedule/csv")
            .set_json(request_body("groups_with_finals", 10))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("slot,round,scheduled_at,stage,group,home,away"));
        // 2 groups of 2: 2 group matches, 2 semis, third place, final
        assert_eq!(lines.count(), 6);
    }

    #[actix_web::test]
    async fn participants_import_parses_rows() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/api/participants/csv")
            .set_payload("id,label\nt1,Tigers\n,Lions\n")
            .to_request();
        let body: Vec<Participant> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.len(), 2);
        assert_eq!(body[0], Participant::new("t1", "Tigers"));
        assert_eq!(body[1].label, "Lions");
        assert!(!body[1].id.is_empty());
    }
}
