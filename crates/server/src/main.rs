// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use profit_master_api::{
    ApiError, AuditTimelineResponse, AuthenticatedActor, FreezeRequest, FreezeResponse,
    ProfitMasterRevertRequest, ProfitMasterRevertResponse, ProfitMasterStatusResponse,
    ProfitMasterUpdateRequest, ProfitMasterUpdateResponse, Role, StageProfitShareEditRequest,
    StageProfitShareEditResponse, StagedProfitShareEdit, apply_master_update, freeze_profit_year,
    get_audit_timeline, get_master_update_status, revert_master_update, stage_profit_share_edit,
};
use profit_master_audit::Cause;
use profit_master_persistence::{Persistence, PersistenceError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Profit Master Server - HTTP server for the year-end master update
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes the place of `--database`.
    #[arg(long, conflicts_with = "database")]
    mysql_url: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
///
/// Persistence and the staged profit share edit each sit behind their own
/// Mutex. Handlers that need both lock persistence first.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
    /// Candidates staged for the next master update.
    staging: Arc<Mutex<StagedProfitShareEdit>>,
}

/// Wraps an API request with the actor and cause performing it.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorRequest<T> {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The cause ID for this action.
    cause_id: String,
    /// The cause description.
    cause_description: String,
    /// The wrapped request.
    #[serde(flatten)]
    request: T,
}

/// Query parameters for read endpoints scoped to a profit year.
#[derive(Debug, Deserialize)]
struct ProfitYearQuery {
    /// The profit year.
    profit_year: u16,
    /// The actor ID performing this read.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidPrecondition { .. } => StatusCode::CONFLICT,
            ApiError::NothingToRevert { .. } | ApiError::ResourceNotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Resolves the actor named in a request.
///
/// Identity is established upstream; the server only checks that the
/// claimed role exists.
fn authenticate(actor_id: &str, actor_role: &str) -> Result<AuthenticatedActor, HttpError> {
    if actor_id.trim().is_empty() {
        return Err(HttpError::from(ApiError::AuthenticationFailed {
            reason: String::from("actor_id must not be empty"),
        }));
    }
    let role: Role = Role::from_str(actor_role).map_err(ApiError::from)?;
    Ok(AuthenticatedActor::new(actor_id.to_string(), role))
}

/// Handler for POST `/profit_share_edit` endpoint.
///
/// Stages the candidate records of a profit year.
async fn handle_stage_profit_share_edit(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ActorRequest<StageProfitShareEditRequest>>,
) -> Result<Json<StageProfitShareEditResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        profit_year = req.request.profit_year,
        candidates = req.request.candidates.len(),
        "Handling stage_profit_share_edit request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;

    let mut staging = app_state.staging.lock().await;
    let response: StageProfitShareEditResponse =
        stage_profit_share_edit(&mut staging, req.request, &actor)?;
    drop(staging);

    Ok(Json(response))
}

/// Handler for POST `/frozen` endpoint.
///
/// Freezes demographics for a profit year.
async fn handle_freeze(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ActorRequest<FreezeRequest>>,
) -> Result<Json<FreezeResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        profit_year = req.request.profit_year,
        "Handling freeze request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: FreezeResponse = freeze_profit_year(
        &mut persistence,
        &req.request,
        &actor,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/profit_master/update` endpoint.
///
/// Applies the master update using the staged profit share edit.
async fn handle_apply_master_update(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ActorRequest<ProfitMasterUpdateRequest>>,
) -> Result<Json<ProfitMasterUpdateResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        profit_year = req.request.profit_year,
        "Handling apply_master_update request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let staging = app_state.staging.lock().await;
    let result: Result<ProfitMasterUpdateResponse, ApiError> = apply_master_update(
        &mut persistence,
        &*staging,
        &req.request,
        &actor,
        cause,
        OffsetDateTime::now_utc(),
    );
    drop(staging);
    drop(persistence);

    let response: ProfitMasterUpdateResponse = result.inspect_err(|err| {
        warn!(error = %err, profit_year = req.request.profit_year, "Master update rejected");
    })?;

    Ok(Json(response))
}

/// Handler for POST `/profit_master/revert` endpoint.
///
/// Reverts the master update of a profit year.
async fn handle_revert_master_update(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ActorRequest<ProfitMasterRevertRequest>>,
) -> Result<Json<ProfitMasterRevertResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        profit_year = req.request.profit_year,
        "Handling revert_master_update request"
    );

    let actor: AuthenticatedActor = authenticate(&req.actor_id, &req.actor_role)?;
    let cause: Cause = Cause::new(req.cause_id, req.cause_description);

    let mut persistence = app_state.persistence.lock().await;
    let response: ProfitMasterRevertResponse = revert_master_update(
        &mut persistence,
        &req.request,
        &actor,
        cause,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/profit_master/status` endpoint.
///
/// Returns the recorded run of a profit year.
async fn handle_get_status(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ProfitYearQuery>,
) -> Result<Json<ProfitMasterStatusResponse>, HttpError> {
    info!(
        profit_year = params.profit_year,
        "Handling get_master_update_status request"
    );

    let actor: AuthenticatedActor = authenticate(&params.actor_id, &params.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: ProfitMasterStatusResponse =
        get_master_update_status(&mut persistence, params.profit_year, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/profit_master/audit` endpoint.
///
/// Returns the audit timeline of a profit year.
async fn handle_get_audit_timeline(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<ProfitYearQuery>,
) -> Result<Json<AuditTimelineResponse>, HttpError> {
    info!(
        profit_year = params.profit_year,
        "Handling get_audit_timeline request"
    );

    let actor: AuthenticatedActor = authenticate(&params.actor_id, &params.actor_role)?;

    let mut persistence = app_state.persistence.lock().await;
    let response: AuditTimelineResponse =
        get_audit_timeline(&mut persistence, params.profit_year, &actor)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/profit_share_edit", post(handle_stage_profit_share_edit))
        .route("/frozen", post(handle_freeze))
        .route("/profit_master/update", post(handle_apply_master_update))
        .route("/profit_master/revert", post(handle_revert_master_update))
        .route("/profit_master/status", get(handle_get_status))
        .route("/profit_master/audit", get(handle_get_audit_timeline))
        .with_state(app_state)
}

/// Opens the persistence backend selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, PersistenceError> {
    if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Profit Master Server");

    let persistence: Persistence = open_persistence(&args)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        staging: Arc::new(Mutex::new(StagedProfitShareEdit::new())),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use profit_master_domain::{
        CandidateRecord, CommentTypeId, Money, ProfitCodeId, ProfitYear, Ssn,
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    const ETVA_SSNS: [i32; 2] = [200_000_001, 200_000_002];

    /// The only profit year the wall clock allows to be updated.
    fn updatable_profit_year() -> u16 {
        u16::try_from(OffsetDateTime::now_utc().year() - 1).expect("year fits in u16")
    }

    fn create_test_app_state() -> AppState {
        let persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            staging: Arc::new(Mutex::new(StagedProfitShareEdit::new())),
        }
    }

    fn create_test_candidates() -> Vec<CandidateRecord> {
        let mut candidates: Vec<CandidateRecord> = (1..=3)
            .map(|n| CandidateRecord {
                ssn: Ssn::new(100_000_000 + n).unwrap(),
                is_employee: true,
                badge_number: Some(700_000),
                name: format!("Employee {n}"),
                profit_code: ProfitCodeId::INCOMING_CONTRIBUTIONS,
                contribution: Money::from_cents(125_000),
                earnings: Money::from_cents(900),
                forfeiture: Money::ZERO,
                zero_contribution_reason: None,
                comment_type: None,
                remark: None,
                year_extension: 0,
            })
            .collect();
        for ssn in ETVA_SSNS {
            candidates.push(CandidateRecord {
                ssn: Ssn::new(ssn).unwrap(),
                is_employee: true,
                badge_number: Some(700_100),
                name: format!("Employee {ssn}"),
                profit_code: ProfitCodeId::INCOMING_100_PERCENT_VESTED_EARNINGS,
                contribution: Money::ZERO,
                earnings: Money::from_cents(4_000),
                forfeiture: Money::ZERO,
                zero_contribution_reason: None,
                comment_type: Some(CommentTypeId::ONE_HUNDRED_PERCENT_EARNINGS),
                remark: Some(String::from("100% Earnings")),
                year_extension: 0,
            });
        }
        candidates
    }

    fn with_actor(role: &str, mut body: Value) -> Value {
        let fields = body.as_object_mut().expect("request body is an object");
        fields.insert(String::from("actor_id"), json!(format!("{role}-1")));
        fields.insert(String::from("actor_role"), json!(role));
        fields.insert(String::from("cause_id"), json!("test-cause"));
        fields.insert(String::from("cause_description"), json!("Year-end close"));
        body
    }

    fn create_update_body(profit_year: u16) -> Value {
        json!({
            "profit_year": profit_year,
            "contribution_percent": "15",
            "incoming_forfeit_percent": "1.25",
            "earnings_percent": "5",
            "secondary_earnings_percent": "0",
            "max_allowed_contribution": "57000.00"
        })
    }

    async fn send(app: &Router, request: Request<Body>) -> (HttpStatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status: HttpStatusCode = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn post_json(app: &Router, uri: &str, body: &Value) -> (HttpStatusCode, Value) {
        send(
            app,
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
    }

    async fn get_uri(app: &Router, uri: &str) -> (HttpStatusCode, Value) {
        send(
            app,
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Stages candidates, freezes the updatable year and seeds ETVA balances.
    async fn prepare_year_end(app_state: &AppState, app: &Router) -> u16 {
        let profit_year: u16 = updatable_profit_year();

        let (status, _) = post_json(
            app,
            "/profit_share_edit",
            &with_actor(
                "finance_manager",
                json!({
                    "profit_year": profit_year,
                    "candidates": serde_json::to_value(create_test_candidates()).unwrap(),
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let (status, _) = post_json(
            app,
            "/frozen",
            &with_actor(
                "finance_manager",
                json!({
                    "profit_year": profit_year,
                    "as_of": "2025-01-03T00:00:00Z",
                }),
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);

        let mut persistence = app_state.persistence.lock().await;
        for ssn in ETVA_SSNS {
            for year in [profit_year, profit_year + 1] {
                persistence
                    .insert_running_balance(
                        Ssn::new(ssn).unwrap(),
                        ProfitYear::new(year),
                        Money::from_cents(50_000),
                    )
                    .unwrap();
            }
        }
        drop(persistence);

        profit_year
    }

    #[tokio::test]
    async fn test_apply_master_update_succeeds() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;

        let (status, body) = post_json(
            &app,
            "/profit_master/update",
            &with_actor("finance_manager", create_update_body(profit_year)),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: ProfitMasterUpdateResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transactions_created, 5);
        assert_eq!(response.employees_affected, 5);
        assert_eq!(response.balance_rows_affected, 4);
        assert_eq!(response.updated_by, "finance_manager-1");

        let mut persistence = app_state.persistence.lock().await;
        let etva: Option<Money> = persistence
            .get_running_balance(
                Ssn::new(ETVA_SSNS[0]).unwrap(),
                ProfitYear::new(profit_year + 1),
            )
            .unwrap();
        drop(persistence);
        assert_eq!(etva, Some(Money::from_cents(54_000)));
    }

    #[tokio::test]
    async fn test_status_after_update() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;
        post_json(
            &app,
            "/profit_master/update",
            &with_actor("administrator", create_update_body(profit_year)),
        )
        .await;

        let (status, body) = get_uri(
            &app,
            &format!(
                "/profit_master/status?profit_year={profit_year}&actor_id=aud-1&actor_role=auditor"
            ),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: ProfitMasterStatusResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.profit_year, profit_year);
        assert_eq!(response.transactions_created, 5);
        assert_eq!(response.updated_by, "administrator-1");
    }

    #[tokio::test]
    async fn test_status_for_year_never_run_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, body) = get_uri(
            &app,
            "/profit_master/status?profit_year=2024&actor_id=aud-1&actor_role=auditor",
        )
        .await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
        assert_eq!(body["error"], json!(true));
    }

    #[tokio::test]
    async fn test_auditor_cannot_apply() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;

        let (status, _) = post_json(
            &app,
            "/profit_master/update",
            &with_actor("auditor", create_update_body(profit_year)),
        )
        .await;

        assert_eq!(status, HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_role_is_unauthenticated() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = post_json(
            &app,
            "/profit_master/update",
            &with_actor("payroll_clerk", create_update_body(updatable_profit_year())),
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_apply_without_freeze_is_conflict() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = updatable_profit_year();
        app_state
            .staging
            .lock()
            .await
            .stage(ProfitYear::new(profit_year), create_test_candidates());

        let (status, body) = post_json(
            &app,
            "/profit_master/update",
            &with_actor("finance_manager", create_update_body(profit_year)),
        )
        .await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        assert!(
            body["message"]
                .as_str()
                .unwrap()
                .contains("frozen_snapshot_required")
        );
    }

    #[tokio::test]
    async fn test_second_apply_is_conflict() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;
        let body: Value = with_actor("finance_manager", create_update_body(profit_year));
        post_json(&app, "/profit_master/update", &body).await;

        let (status, response) = post_json(&app, "/profit_master/update", &body).await;

        assert_eq!(status, HttpStatusCode::CONFLICT);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("single_run_per_year")
        );
    }

    #[tokio::test]
    async fn test_invalid_percentage_is_bad_request() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;
        let mut body: Value = create_update_body(profit_year);
        body["earnings_percent"] = json!("100.5");

        let (status, response) = post_json(
            &app,
            "/profit_master/update",
            &with_actor("finance_manager", body),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .contains("earnings_percent")
        );
    }

    #[tokio::test]
    async fn test_revert_without_apply_is_not_found() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = post_json(
            &app,
            "/profit_master/revert",
            &with_actor(
                "finance_manager",
                json!({ "profit_year": updatable_profit_year() }),
            ),
        )
        .await;

        assert_eq!(status, HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_apply_then_revert_round_trip() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state.clone());
        let profit_year: u16 = prepare_year_end(&app_state, &app).await;
        post_json(
            &app,
            "/profit_master/update",
            &with_actor("finance_manager", create_update_body(profit_year)),
        )
        .await;

        let (status, body) = post_json(
            &app,
            "/profit_master/revert",
            &with_actor("finance_manager", json!({ "profit_year": profit_year })),
        )
        .await;

        assert_eq!(status, HttpStatusCode::OK);
        let response: ProfitMasterRevertResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.transactions_removed, 5);
        assert_eq!(response.balance_rows_affected, 2);

        let mut persistence = app_state.persistence.lock().await;
        let etva: Option<Money> = persistence
            .get_running_balance(
                Ssn::new(ETVA_SSNS[1]).unwrap(),
                ProfitYear::new(profit_year + 1),
            )
            .unwrap();
        drop(persistence);
        assert_eq!(etva, Some(Money::from_cents(50_000)));

        let (status, body) = get_uri(
            &app,
            &format!(
                "/profit_master/audit?profit_year={profit_year}&actor_id=aud-1&actor_role=auditor"
            ),
        )
        .await;
        assert_eq!(status, HttpStatusCode::OK);
        let timeline: AuditTimelineResponse = serde_json::from_value(body).unwrap();
        assert_eq!(timeline.events.len(), 2);
        assert_eq!(timeline.events[1].action, "RevertMasterUpdate");
    }

    #[tokio::test]
    async fn test_freeze_of_old_year_is_bad_request() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = post_json(
            &app,
            "/frozen",
            &with_actor(
                "administrator",
                json!({
                    "profit_year": updatable_profit_year() - 1,
                    "as_of": "2020-01-03T00:00:00Z",
                }),
            ),
        )
        .await;

        assert_eq!(status, HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_empty_actor_id_is_unauthenticated() {
        let app: Router = build_router(create_test_app_state());

        let (status, _) = get_uri(
            &app,
            "/profit_master/status?profit_year=2024&actor_id=&actor_role=auditor",
        )
        .await;

        assert_eq!(status, HttpStatusCode::UNAUTHORIZED);
    }
}
