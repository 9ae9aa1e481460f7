use std::net::SocketAddr;

use axum::{Json, Router, routing::post};
use base64::Engine;
use image::ImageEncoder;
use image::codecs::png::PngEncoder;
use serde::{Deserialize, Serialize};
use tower_http::services::ServeDir;

use lifesim::config::Params;
use lifesim::render;

#[derive(Deserialize)]
struct SimulateRequest {
    seed: Option<u64>,
    width: Option<usize>,
    height: Option<usize>,
    generations: Option<u64>,
    cadence: Option<u32>,
    cell_size: Option<usize>,
}

#[derive(Serialize)]
struct SimulateResponse {
    frames: Vec<Frame>,
    timings: Vec<TimingEntry>,
    width: usize,
    height: usize,
}

#[derive(Serialize)]
struct Frame {
    generation: usize,
    population: usize,
    data_url: String,
}

#[derive(Serialize)]
struct TimingEntry {
    name: String,
    ms: f64,
}

fn encode_png(rgba: &[u8], w: usize, h: usize) -> String {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder
        .write_image(rgba, w as u32, h as u32, image::ExtendedColorType::Rgba8)
        .expect("PNG encode failed");
    let b64 = base64::engine::general_purpose::STANDARD.encode(&buf);
    format!("data:image/png;base64,{}", b64)
}

async fn simulate_handler(Json(req): Json<SimulateRequest>) -> Json<SimulateResponse> {
    let seed = req.seed.unwrap_or(42);
    let generations = req.generations.unwrap_or(10);

    let defaults = Params::default();
    let width = req.width.unwrap_or(defaults.width);
    let height = req.height.unwrap_or(defaults.height);
    let cadence = req.cadence.unwrap_or(defaults.cadence);
    let cell_size = req.cell_size.unwrap_or(defaults.cell_size);

    let response = tokio::task::spawn_blocking(move || {
        let params = Params {
            width,
            height,
            cadence,
            cell_size,
        };
        let (run, timings) = lifesim::simulate(seed, &params, generations);

        let frames = run
            .frames
            .iter()
            .enumerate()
            .map(|(generation, grid)| Frame {
                generation,
                population: grid.population(),
                data_url: encode_png(
                    &render::render_frame(grid, cell_size),
                    grid.w * cell_size,
                    grid.h * cell_size,
                ),
            })
            .collect();

        let timing_entries = timings
            .iter()
            .map(|t| TimingEntry {
                name: t.name.to_string(),
                ms: t.ms,
            })
            .collect();

        SimulateResponse {
            frames,
            timings: timing_entries,
            width,
            height,
        }
    })
    .await
    .unwrap();

    Json(response)
}

#[tokio::main]
async fn main() {
    let frontend = ServeDir::new("frontend");

    let app = Router::new()
        .route("/api/simulate", post(simulate_handler))
        .fallback_service(frontend);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    eprintln!("lifesim server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
