use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::aggregate::ReportModel;
use crate::analysis::{analyze as run_analysis, Schedule};
use crate::classifier::MemberClassification;
use crate::registry::RegionKind;
use crate::report::Summary;

use super::state::AppState;

/// Batches of at least this size are classified on the rayon pool.
const PARALLEL_THRESHOLD: usize = 2_000;

fn schedule_for(batch_len: usize) -> Schedule {
    if batch_len >= PARALLEL_THRESHOLD {
        Schedule::Parallel
    } else {
        Schedule::Sequential
    }
}

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

// ─── POST /api/analyze ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub members: Vec<String>,
    /// Drop repeated members before analysis.
    #[serde(default)]
    pub dedup: bool,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub report: ReportModel,
    pub summary: Summary,
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let start = Instant::now();

    let members = if req.dedup {
        crate::input::dedup_preserving_order(req.members)
    } else {
        req.members
    };
    let member_count = members.len();
    let schedule = schedule_for(member_count);

    // CPU-bound; runs on the blocking pool.
    let report = tokio::task::spawn_blocking(move || {
        run_analysis(&state.classifier, &members, schedule)
    })
    .await
    .map_err(|e| {
        error!(error = %e, "analysis task failed");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
    })?;
    let summary = Summary::from_report(&report);

    info!(
        members = member_count,
        ?schedule,
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "POST /api/analyze"
    );

    Ok(Json(AnalyzeResponse { report, summary }))
}

// ─── POST /api/classify ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct ClassifyRequest {
    pub member: Option<String>,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub member: String,
    pub classification: MemberClassification,
}

pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let raw = req
        .member
        .ok_or_else(|| api_error(StatusCode::BAD_REQUEST, "Missing 'member' field"))?;

    let (member, classification) = state.classifier.classify_raw(&raw);
    info!(%member, %classification, "POST /api/classify");

    Ok(Json(ClassifyResponse {
        member,
        classification,
    }))
}

// ─── GET /api/regions ────────────────────────────────────────────

#[derive(Serialize)]
pub struct RegionInfo {
    pub name: String,
    pub kind: RegionKind,
    pub cities: Vec<String>,
    pub aliases: Vec<String>,
}

#[derive(Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<RegionInfo>,
    pub foreign_cities: Vec<String>,
}

pub async fn regions(State(state): State<Arc<AppState>>) -> Json<RegionsResponse> {
    let registry = state.classifier.registry();
    Json(RegionsResponse {
        regions: registry
            .regions()
            .iter()
            .map(|r| RegionInfo {
                name: r.name.clone(),
                kind: r.kind,
                cities: r.cities.clone(),
                aliases: r.aliases.clone(),
            })
            .collect(),
        foreign_cities: state.classifier.foreign().cities().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use crate::config::AtlasConfig;
    use crate::server::build_router;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router() -> axum::Router {
        build_router(AtlasConfig::default().build_classifier().unwrap())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        let req = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let resp = router().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_analyze_endpoint() {
        let (status, body) = post_json(
            "/api/analyze",
            json!({ "members": ["马哥-北京-张三", "002-广州-李四", "纽约-Tom", "某某"] }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total"], 4);
        assert_eq!(body["report"]["admin"][0], "马哥-北京-张三");
        assert_eq!(body["report"]["regions"][0]["name"], "广东");
        assert_eq!(body["report"]["regions"][0]["cities"][0]["name"], "广州");
        assert_eq!(body["report"]["foreign"][0], "纽约-Tom");
        assert_eq!(body["report"]["unknown"][0], "某某");
    }

    #[tokio::test]
    async fn test_analyze_empty_and_dedup() {
        let (status, body) = post_json("/api/analyze", json!({ "members": [] })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total"], 0);

        let (_, body) = post_json(
            "/api/analyze",
            json!({ "members": ["某某", "某某"], "dedup": true }),
        )
        .await;
        assert_eq!(body["summary"]["unknown"], 1);
    }

    #[tokio::test]
    async fn test_analyze_large_batch() {
        let members: Vec<String> = (0..super::PARALLEL_THRESHOLD)
            .map(|i| match i % 4 {
                0 => format!("{:04}-广州-甲", i),
                1 => format!("{:04}-沪-乙", i),
                2 => format!("马哥-{}", i),
                _ => format!("路人{}", i),
            })
            .collect();
        let (status, body) = post_json("/api/analyze", json!({ "members": members })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["summary"]["total"], 2_000);
        assert_eq!(body["summary"]["admin"], 500);
        assert_eq!(body["summary"]["located"], 1_000);
        assert_eq!(body["summary"]["unknown"], 500);
        assert_eq!(body["report"]["admin"][0], "马哥-2");
        assert_eq!(body["report"]["unknown"][0], "路人3");
    }

    #[test]
    fn test_parallel_threshold_is_inclusive() {
        use super::{schedule_for, PARALLEL_THRESHOLD};
        use crate::analysis::Schedule;

        assert_eq!(schedule_for(0), Schedule::Sequential);
        assert_eq!(schedule_for(PARALLEL_THRESHOLD - 1), Schedule::Sequential);
        assert_eq!(schedule_for(PARALLEL_THRESHOLD), Schedule::Parallel);
        assert_eq!(schedule_for(PARALLEL_THRESHOLD + 1), Schedule::Parallel);
    }

    #[tokio::test]
    async fn test_classify_endpoint() {
        let (status, body) = post_json("/api/classify", json!({ "member": " 007-沪-王五 " })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["member"], "007-沪-王五");
        assert_eq!(body["classification"]["category"], "located");
        assert_eq!(body["classification"]["region"], "上海");
        assert_eq!(body["classification"]["city"], "unspecified-city");
    }

    #[tokio::test]
    async fn test_classify_missing_member() {
        let (status, body) = post_json("/api/classify", json!({})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 400);
    }

    #[tokio::test]
    async fn test_regions_endpoint() {
        let req = Request::get("/api/regions").body(Body::empty()).unwrap();
        let resp = router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["regions"].as_array().unwrap().len(), 34);
        assert_eq!(body["regions"][0]["name"], "北京");
        assert_eq!(body["regions"][0]["kind"], "municipality");
        assert_eq!(body["foreign_cities"][0], "多伦多");
    }
}
