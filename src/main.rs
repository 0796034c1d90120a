// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use detection_utils::plot_functions::plot_curve::plot_curve;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::default()
        .parse_env(env_logger::Env::default().filter_or("DETECTION_UTILS_LOG", "info"))
        .init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "pr_curve_render {}\nUsage: {} <input_file.csv>",
            detection_utils::crate_version(),
            args[0]
        );
        std::process::exit(1);
    }
    let input_file = &args[1];
    let input_path = Path::new(input_file);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    let output_file = format!("{}_curve.png", root_name);
    plot_curve(input_path, &output_file)?;
    println!("Rendered {}", output_file);

    Ok(())
}
