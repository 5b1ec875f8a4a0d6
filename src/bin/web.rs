//! Single binary web server: JSON API over the standings and draw engine.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::NaiveDate;
use padel_circuit_web::{
    division_selection, division_slots, division_standings, draw_full_round_for,
    draw_single_match_for, import, DivisionConfig, DivisionId, DivisionScope, DrawOutcome,
    Enrollment, LeagueError, MatchRecord, MemoryStore, PlayerId, StageId,
};
use serde::Deserialize;
use std::sync::RwLock;

/// In-memory league data shared by all requests.
type AppState = Data<RwLock<MemoryStore>>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segments: stage id and division id (e.g. /api/stages/{stage}/divisions/{division})
#[derive(Deserialize)]
struct DivisionPath {
    stage: StageId,
    division: DivisionId,
}

impl DivisionPath {
    fn scope(&self) -> DivisionScope {
        DivisionScope::new(self.stage, self.division)
    }
}

#[derive(Deserialize)]
struct DrawBody {
    date: NaiveDate,
    available_player_ids: Vec<PlayerId>,
}

fn error_response(e: &LeagueError) -> HttpResponse {
    let body = serde_json::json!({ "error": e.to_string() });
    match e {
        LeagueError::DivisionNotFound { .. } => HttpResponse::NotFound().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

fn not_found(scope: DivisionScope) -> HttpResponse {
    error_response(&LeagueError::DivisionNotFound {
        stage_id: scope.stage_id,
        division_id: scope.division_id,
    })
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "padel-circuit-web",
    })
}

/// Store the division's slot configuration (missing fields take the defaults).
#[put("/api/stages/{stage}/divisions/{division}/config")]
async fn api_set_config(state: AppState, path: Path<DivisionPath>, body: Json<DivisionConfig>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.set_config(path.scope(), body.into_inner());
    HttpResponse::Ok().json(serde_json::json!({ "ok": true }))
}

/// Add enrollments for the division. Stage/division in the body are overridden by the path.
#[post("/api/stages/{stage}/divisions/{division}/enrollments")]
async fn api_add_enrollments(state: AppState, path: Path<DivisionPath>, body: Json<Vec<Enrollment>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    let enrollments: Vec<Enrollment> = body
        .into_inner()
        .into_iter()
        .map(|e| Enrollment {
            stage_id: scope.stage_id,
            division_id: scope.division_id,
            ..e
        })
        .collect();
    let count = enrollments.len();
    g.upsert_enrollments(enrollments);
    HttpResponse::Ok().json(serde_json::json!({ "imported": count }))
}

/// Import enrollments from a CSV body.
#[post("/api/stages/{stage}/divisions/{division}/enrollments/import")]
async fn api_import_enrollments(state: AppState, path: Path<DivisionPath>, body: String) -> HttpResponse {
    let scope = path.scope();
    let enrollments = match import::read_enrollments(body.as_bytes()) {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };
    let enrollments: Vec<Enrollment> = enrollments
        .into_iter()
        .filter(|e| e.stage_id == scope.stage_id && e.division_id == scope.division_id)
        .collect();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let count = enrollments.len();
    g.upsert_enrollments(enrollments);
    HttpResponse::Ok().json(serde_json::json!({ "imported": count }))
}

/// Add or replace match records for the division.
#[post("/api/stages/{stage}/divisions/{division}/matches")]
async fn api_add_matches(state: AppState, path: Path<DivisionPath>, body: Json<Vec<MatchRecord>>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    let matches: Vec<MatchRecord> = body
        .into_inner()
        .into_iter()
        .map(|m| MatchRecord {
            stage_id: scope.stage_id,
            division_id: scope.division_id,
            ..m
        })
        .collect();
    let count = matches.len();
    g.upsert_matches(matches);
    HttpResponse::Ok().json(serde_json::json!({ "imported": count }))
}

/// Import match results from a CSV body.
#[post("/api/stages/{stage}/divisions/{division}/matches/import")]
async fn api_import_matches(state: AppState, path: Path<DivisionPath>, body: String) -> HttpResponse {
    let scope = path.scope();
    let matches = match import::read_matches(body.as_bytes()) {
        Ok(rows) => rows,
        Err(e) => return error_response(&e),
    };
    let matches: Vec<MatchRecord> = matches
        .into_iter()
        .filter(|m| m.stage_id == scope.stage_id && m.division_id == scope.division_id)
        .collect();
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let count = matches.len();
    g.upsert_matches(matches);
    HttpResponse::Ok().json(serde_json::json!({ "imported": count }))
}

/// Current standings table (404 if the division is unknown).
#[get("/api/stages/{stage}/divisions/{division}/standings")]
async fn api_standings(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    if !g.knows(scope) {
        return not_found(scope);
    }
    HttpResponse::Ok().json(division_standings(&*g, scope))
}

/// Promotion/relegation/playoff slot counts.
#[get("/api/stages/{stage}/divisions/{division}/slots")]
async fn api_slots(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    if !g.knows(scope) {
        return not_found(scope);
    }
    HttpResponse::Ok().json(division_slots(&*g, scope))
}

/// Who goes up, down, or into the playoff zone.
#[get("/api/stages/{stage}/divisions/{division}/promotion")]
async fn api_promotion(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    if !g.knows(scope) {
        return not_found(scope);
    }
    let (_, selection) = division_selection(&*g, scope);
    HttpResponse::Ok().json(selection)
}

fn draw_response(result: Result<DrawOutcome, LeagueError>) -> HttpResponse {
    match result {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(e) => error_response(&e),
    }
}

/// Draw a full round for a date. Pairs and matches are stored on success.
#[post("/api/stages/{stage}/divisions/{division}/draws/full-round")]
async fn api_draw_full_round(state: AppState, path: Path<DivisionPath>, body: Json<DrawBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    if !g.knows(scope) {
        return not_found(scope);
    }
    let DrawBody {
        date,
        available_player_ids,
    } = body.into_inner();
    let mut rng = rand::thread_rng();
    draw_response(draw_full_round_for(&mut *g, scope, date, available_player_ids, &mut rng))
}

/// Draw a single match (needs 4 eligible players).
#[post("/api/stages/{stage}/divisions/{division}/draws/single-match")]
async fn api_draw_single_match(state: AppState, path: Path<DivisionPath>, body: Json<DrawBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let scope = path.scope();
    if !g.knows(scope) {
        return not_found(scope);
    }
    let DrawBody {
        date,
        available_player_ids,
    } = body.into_inner();
    let mut rng = rand::thread_rng();
    draw_response(draw_single_match_for(&mut *g, scope, date, available_player_ids, &mut rng))
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

    let state = Data::new(RwLock::new(MemoryStore::new()));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_set_config)
            .service(api_add_enrollments)
            .service(api_import_enrollments)
            .service(api_add_matches)
            .service(api_import_matches)
            .service(api_standings)
            .service(api_slots)
            .service(api_promotion)
            .service(api_draw_full_round)
            .service(api_draw_single_match)
    })
    .bind(bind)?
    .run()
    .await
}
