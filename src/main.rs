use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use chrono::{Local, NaiveDate};
use clap::{ArgGroup, Args, Parser, Subcommand};
use forecast_fit::assessment::catalog::LIKERT_OPTIONS;
use forecast_fit::assessment::{
    AnswerSet, AssessmentCatalog, QuestionKind, ReadinessReport, ResultsRecord, ScoringConfig,
    ScoringEngine, TechnicalRule,
};
use forecast_fit::config::AppConfig;
use forecast_fit::error::AppError;
use forecast_fit::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    catalog: Arc<AssessmentCatalog>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Forecasting Readiness Assessor",
    about = "Score career-readiness assessments for forecasting and demand planning roles",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with assessments from the command line
    Assessment {
        #[command(subcommand)]
        command: AssessmentCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum AssessmentCommand {
    /// Score an answer set and print the results
    Score(ScoreArgs),
    /// Print the questionnaire catalog
    Catalog,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["answers", "answers_csv"])))]
struct ScoreArgs {
    /// JSON answers file ({"question_id": "value", ...})
    #[arg(long)]
    answers: Option<PathBuf>,
    /// CSV answers file with question_id and value columns
    #[arg(long)]
    answers_csv: Option<PathBuf>,
    /// Seed the jitter source for reproducible output
    #[arg(long)]
    seed: Option<u64>,
    /// Grade technical answers against each question's answer key instead of
    /// the legacy fixed-index rule
    #[arg(long)]
    answer_key: bool,
    /// Include the skills-gap and career-match report
    #[arg(long)]
    report: bool,
    /// Report date (YYYY-MM-DD, defaults to today)
    #[arg(long, value_parser = parse_date)]
    taken_on: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
struct ScoreRequest {
    answers: BTreeMap<String, String>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    technical_rule: Option<TechnicalRule>,
    #[serde(default)]
    include_report: bool,
    #[serde(default)]
    taken_on: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ScoreResponse {
    results: ResultsRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<ReadinessReport>,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Assessment {
            command: AssessmentCommand::Score(args),
        } => run_score(args),
        Command::Assessment {
            command: AssessmentCommand::Catalog,
        } => {
            render_catalog(&AssessmentCatalog::standard());
            Ok(())
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/assessment/catalog", get(catalog_endpoint))
        .route("/api/v1/assessment/score", post(score_endpoint))
        .with_state(state)
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        catalog: Arc::new(AssessmentCatalog::standard()),
    };

    let app = app_router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "assessment service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        answers_csv,
        seed,
        answer_key,
        report,
        taken_on,
    } = args;

    let answer_set = match (answers, answers_csv) {
        (Some(path), _) => AnswerSet::from_json_path(path)?,
        (None, Some(path)) => AnswerSet::from_csv_path(path)?,
        // clap's arg group guarantees one of the two inputs.
        (None, None) => unreachable!("answers input is required"),
    };

    let rule = if answer_key {
        TechnicalRule::AnswerKey
    } else {
        TechnicalRule::FixedIndex
    };
    let catalog = AssessmentCatalog::standard();
    let engine = ScoringEngine::new(&catalog, ScoringConfig::default().with_technical_rule(rule));

    let results = match seed {
        Some(seed) => engine.score_seeded(&answer_set, seed),
        None => engine.score(&answer_set),
    };

    let readiness_report = report.then(|| {
        let generated_on = taken_on.unwrap_or_else(|| Local::now().date_naive());
        ReadinessReport::generate(&results, generated_on)
    });

    render_results(&results, rule, readiness_report.as_ref());
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn catalog_endpoint(State(state): State<AppState>) -> Json<CatalogView> {
    Json(CatalogView(state.catalog.clone()))
}

/// Serializes the shared catalog straight from the `Arc`, so responding
/// never deep-clones the section and question vectors.
struct CatalogView(Arc<AssessmentCatalog>);

impl Serialize for CatalogView {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

async fn score_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreResponse>, AppError> {
    let Json(payload) = payload?;
    let ScoreRequest {
        answers,
        seed,
        technical_rule,
        include_report,
        taken_on,
    } = payload;

    let answer_set = AnswerSet::from(answers);
    let config = ScoringConfig::default().with_technical_rule(technical_rule.unwrap_or_default());
    let engine = ScoringEngine::new(&state.catalog, config);

    let results = match seed {
        Some(seed) => engine.score_seeded(&answer_set, seed),
        None => engine.score(&answer_set),
    };

    let report = include_report.then(|| {
        let generated_on = taken_on.unwrap_or_else(|| Local::now().date_naive());
        ReadinessReport::generate(&results, generated_on)
    });

    Ok(Json(ScoreResponse { results, report }))
}

fn render_catalog(catalog: &AssessmentCatalog) {
    println!("Forecasting & Demand Planning Readiness Assessment");
    println!("{} questions across {} sections", catalog.total_questions(), catalog.sections().len());

    for (index, section) in catalog.sections().iter().enumerate() {
        println!("\nSection {}: {}", index + 1, section.title);
        println!("{}", section.description);
        for question in &section.questions {
            println!("- [{}] ({}) {}", question.id, question.kind.label(), question.text);
            match question.kind {
                QuestionKind::Likert => {
                    for option in LIKERT_OPTIONS {
                        println!("    {}. {}", option.value, option.label);
                    }
                }
                QuestionKind::MultipleChoice => {
                    if let Some(options) = &question.options {
                        for (option_index, option) in options.iter().enumerate() {
                            println!("    {option_index}. {option}");
                        }
                    }
                }
                QuestionKind::Scale => {
                    if let (Some(min), Some(max)) = (question.min, question.max) {
                        println!("    scale {min}-{max}");
                    }
                }
            }
        }
    }
}

fn render_results(results: &ResultsRecord, rule: TechnicalRule, report: Option<&ReadinessReport>) {
    println!("Assessment results ({} scoring)", rule.label());
    println!("Psychological fit:    {}%", results.psychological_fit);
    println!("Technical readiness:  {}%", results.technical_readiness);
    println!("Overall score:        {}%", results.overall_score);
    println!(
        "Recommendation:       {} ({}% confidence)",
        results.recommendation.label(),
        results.confidence_score
    );

    println!("\nWISCAR breakdown");
    println!("- Will:                 {}%", results.wiscar.will);
    println!("- Interest:             {}%", results.wiscar.interest);
    println!("- Skill:                {}%", results.wiscar.skill);
    println!("- Cognitive:            {}%", results.wiscar.cognitive);
    println!("- Ability to learn:     {}%", results.wiscar.ability_to_learn);
    println!("- Real-world alignment: {}%", results.wiscar.real_world_alignment);

    if let Some(report) = report {
        println!("\nSkills gap (as of {})", report.generated_on);
        for entry in &report.skill_gaps {
            let status = if entry.is_met() {
                "met".to_string()
            } else {
                format!("{} gap", entry.gap)
            };
            println!(
                "- {}: current {}%, required {}% ({})",
                entry.skill, entry.current, entry.required, status
            );
        }

        println!("\nCareer matches");
        for entry in &report.career_matches {
            println!(
                "- {} ({}% match): {}",
                entry.title, entry.match_score, entry.description
            );
        }

        println!("\n{}", results.recommendation.headline());
        for step in &report.next_steps {
            println!("- {step}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::util::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: recorder.handle(),
            catalog: Arc::new(AssessmentCatalog::standard()),
        }
    }

    fn score_request(pairs: &[(&str, &str)]) -> ScoreRequest {
        ScoreRequest {
            answers: pairs
                .iter()
                .map(|(id, value)| (id.to_string(), value.to_string()))
                .collect(),
            seed: Some(7),
            technical_rule: None,
            include_report: false,
            taken_on: None,
        }
    }

    #[tokio::test]
    async fn health_route_responds_ok() {
        let app = app_router(test_state(true));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn readiness_reports_unavailable_until_flagged() {
        let state = test_state(false);
        let response = readiness_endpoint(State(state.clone())).await.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = readiness_endpoint(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn catalog_endpoint_returns_every_section() {
        let Json(catalog) = catalog_endpoint(State(test_state(true))).await;
        assert_eq!(catalog.0.sections().len(), 3);
        assert_eq!(catalog.0.total_questions(), 11);
    }

    #[test]
    fn catalog_view_serializes_like_the_catalog() {
        let catalog = Arc::new(AssessmentCatalog::standard());
        let view = CatalogView(catalog.clone());

        let from_view = serde_json::to_value(&view).expect("view serializes");
        let from_catalog = serde_json::to_value(catalog.as_ref()).expect("catalog serializes");
        assert_eq!(from_view, from_catalog);
    }

    #[tokio::test]
    async fn score_endpoint_applies_the_default_rule() {
        let request = score_request(&[("excel1", "1"), ("forecasting1", "1"), ("logic1", "1")]);

        let Json(body) = score_endpoint(State(test_state(true)), Ok(Json(request)))
            .await
            .expect("well-formed request scores");

        assert_eq!(body.results.technical_readiness, 100);
        assert_eq!(body.results.overall_score, 50);
        assert!(body.report.is_none());
    }

    #[tokio::test]
    async fn score_endpoint_can_switch_rules_and_include_the_report() {
        let mut request = score_request(&[("excel1", "2"), ("forecasting1", "2"), ("logic1", "2")]);
        request.technical_rule = Some(TechnicalRule::AnswerKey);
        request.include_report = true;
        request.taken_on = NaiveDate::from_ymd_opt(2026, 8, 23);

        let Json(body) = score_endpoint(State(test_state(true)), Ok(Json(request)))
            .await
            .expect("well-formed request scores");

        // Only logic1's answer key is index 2, so one of three is correct.
        assert_eq!(body.results.technical_readiness, 33);
        let report = body.report.expect("report included");
        assert_eq!(report.skill_gaps.len(), 5);
        assert_eq!(
            report.generated_on,
            NaiveDate::from_ymd_opt(2026, 8, 23).expect("valid date")
        );
    }

    #[tokio::test]
    async fn seeded_score_requests_are_reproducible() {
        let request = score_request(&[("interest1", "4"), ("excel1", "1")]);
        let repeat = score_request(&[("interest1", "4"), ("excel1", "1")]);

        let Json(first) = score_endpoint(State(test_state(true)), Ok(Json(request)))
            .await
            .expect("well-formed request scores");
        let Json(second) = score_endpoint(State(test_state(true)), Ok(Json(repeat)))
            .await
            .expect("well-formed request scores");

        assert_eq!(first.results, second.results);
    }

    #[tokio::test]
    async fn malformed_score_body_gets_a_bad_request_from_the_app_error() {
        let app = app_router(test_state(true));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/assessment/score")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from("{\"answers\": not-json"))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("error body is JSON");
        let message = body["error"].as_str().expect("error field present");
        assert!(message.starts_with("invalid request body"), "got {message}");
    }
}
