use std::path::PathBuf;

use actix_web::middleware::Logger;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};
use clap::Parser;
use log::info;
use serde::Deserialize;

use rs_namegen_core::io::resolve_corpus_path;
use rs_namegen_core::{Generator, RngSource, SamplerConfig, ZeroContextFallback};

/// Names returned when the request does not say how many.
const DEFAULT_BATCH: usize = 10;

/// Largest batch a single request may ask for.
const MAX_BATCH: usize = 1000;

/// HTTP front end for the name generator
#[derive(Parser, Debug)]
#[command(name = "namegen-server", version, about)]
struct Args {
	/// Training corpus, one word per line (default: words.txt beside the executable)
	#[arg(long, env = "NAMEGEN_WORDS")]
	words: Option<PathBuf>,

	#[arg(long, default_value = "127.0.0.1")]
	host: String,

	#[arg(long, default_value_t = 5000)]
	port: u16,

	/// Enable verbose logging
	#[arg(short, long)]
	verbose: bool,
}

/// Query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	seed: Option<u64>,
}

/// Read-only state shared by every worker.
///
/// The model never changes after startup, so no lock is needed; each
/// request brings its own random source.
struct SharedData {
	generator: Generator,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Returns `count` names, one per line. With `seed`, the same request
/// always returns the same names.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<SharedData>, query: web::Query<GenerateParams>) -> impl Responder {
	let count = query.count.unwrap_or(DEFAULT_BATCH);
	if count > MAX_BATCH {
		return HttpResponse::BadRequest().body(format!("count must be at most {MAX_BATCH}"));
	}

	let names = match query.seed {
		Some(seed) => data.generator.generate_batch(count, &mut RngSource::seeded(seed)),
		None => data.generator.generate_batch(count, &mut RngSource::thread_local()),
	};
	HttpResponse::Ok().body(names.join("\n"))
}

/// HTTP GET endpoint `/v1/model`
///
/// Returns a JSON summary of the trained model.
#[get("/v1/model")]
async fn get_model(data: web::Data<SharedData>) -> impl Responder {
	HttpResponse::Ok().json(data.generator.model().summary())
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_generated).service(get_model);
}

/// Main entry point for the server.
///
/// Trains the model once, shares it read-only, and starts an Actix-web
/// HTTP server. Exits with an error if the corpus cannot be opened.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	let default_level = if args.verbose { "debug" } else { "info" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

	let corpus_path = resolve_corpus_path(args.words.as_deref());
	let generator = Generator::from_file(&corpus_path, ZeroContextFallback::default(), SamplerConfig::default())?;
	info!(
		"Trained on {} words from {}, listening on {}:{}",
		generator.model().accepted_words(),
		corpus_path.display(),
		args.host,
		args.port
	);

	let shared_data = web::Data::new(SharedData { generator });
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(shared_data.clone())
			.configure(routes)
	})
	.bind((args.host.as_str(), args.port))?
	.run()
	.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;
	use rs_namegen_core::ModelSummary;

	fn shared_data() -> web::Data<SharedData> {
		let generator = Generator::from_words(
			["ann", "anna", "ant", "o'hara"],
			ZeroContextFallback::default(),
			SamplerConfig::default(),
		);
		web::Data::new(SharedData { generator })
	}

	#[actix_web::test]
	async fn generate_returns_requested_count() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/generate?count=3").to_request();
		let body = test::call_and_read_body(&app, req).await;

		let text = String::from_utf8(body.to_vec()).unwrap();
		assert_eq!(text.lines().count(), 3);
		assert!(text.lines().all(|name| name.len() >= 6));
	}

	#[actix_web::test]
	async fn seeded_requests_repeat() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		let uri = "/v1/generate?count=5&seed=42";
		let first = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
		let second = test::call_and_read_body(&app, test::TestRequest::get().uri(uri).to_request()).await;
		assert_eq!(first, second);
	}

	#[actix_web::test]
	async fn oversized_or_malformed_requests_are_rejected() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/generate?count=5000").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

		let req = test::TestRequest::get().uri("/v1/generate?count=many").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn model_summary_is_json() {
		let app = test::init_service(App::new().app_data(shared_data()).configure(routes)).await;
		let req = test::TestRequest::get().uri("/v1/model").to_request();
		let summary: ModelSummary = test::call_and_read_body_json(&app, req).await;

		assert_eq!(summary.accepted_words, 3);
		assert_eq!(summary.skipped_lines, 1);
		assert_eq!(summary.fallback, ZeroContextFallback::StartingLetters);
	}
}
