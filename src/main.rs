use std::path::PathBuf;

use lifesim::config::Params;
use lifesim::render;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let seed: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(42);
    let width: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(50);
    let height: usize = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(50);
    let generations: u64 = args.get(4).and_then(|s| s.parse().ok()).unwrap_or(10);
    let out_dir: PathBuf = args
        .get(5)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("artifacts"));

    std::fs::create_dir_all(&out_dir).expect("failed to create output directory");

    let params = Params {
        width,
        height,
        ..Params::default()
    };

    eprintln!(
        "Simulating {}x{} torus for {} generations with seed={}, cadence={}",
        width, height, generations, seed, params.cadence
    );

    let (run, timings) = lifesim::simulate(seed, &params, generations);

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    for (generation, frame) in run.frames.iter().enumerate() {
        let rgba = render::render_frame(frame, params.cell_size);
        let path = out_dir.join(format!("gen_{:04}.png", generation));
        image::save_buffer(
            &path,
            &rgba,
            (frame.w * params.cell_size) as u32,
            (frame.h * params.cell_size) as u32,
            image::ColorType::Rgba8,
        )
        .expect("failed to save image");
        eprintln!("Saved {} (population {})", path.display(), frame.population());
    }

    eprintln!("\nDone.");
}
