//! Command-line interface for hue_palette
//!
//! Basic CLI tool for extracting a color palette from an image file

use hue_palette::{
    extract_palette_from_image, render, ExtractionConfig, OutputSpace, Palette,
};
use std::{path::{Path, PathBuf}, process, str::FromStr};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = ExtractionConfig::default();
    let mut swatch_path: Option<PathBuf> = None;
    let mut image_path_arg: Option<String> = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--colors" => {
                config.palette.max_colors = parse_value(&args, &mut i, "--colors");
            }
            "--separation" => {
                config.palette.hue_separation = parse_value(&args, &mut i, "--separation");
            }
            "--sq" => {
                config.palette.saturation_quantile = parse_value(&args, &mut i, "--sq");
            }
            "--vq" => {
                config.palette.value_quantile = parse_value(&args, &mut i, "--vq");
            }
            "--space" => {
                let raw: String = parse_value(&args, &mut i, "--space");
                config.output_space = match OutputSpace::from_str(&raw) {
                    Ok(space) => space,
                    Err(error) => {
                        eprintln!("Error: {}", error);
                        process::exit(1);
                    }
                };
            }
            "--config" => {
                let raw: String = parse_value(&args, &mut i, "--config");
                config = match ExtractionConfig::from_json_file(Path::new(&raw)) {
                    Ok(config) => config,
                    Err(error) => {
                        eprintln!("Error: failed to load config {}: {}", raw, error);
                        process::exit(1);
                    }
                };
            }
            "--swatch" => {
                let raw: String = parse_value(&args, &mut i, "--swatch");
                swatch_path = Some(PathBuf::from(raw));
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let image_path = Path::new(&image_path_str);

    if !image_path.exists() {
        eprintln!("Error: File '{}' does not exist", image_path.display());
        process::exit(1);
    }

    match extract_palette_from_image(image_path, &config.palette) {
        Ok(palette) => {
            print_result(&palette, config.output_space);

            if let Some(path) = swatch_path {
                match render::save_swatch_sheet(&palette, 200, &path) {
                    Ok(()) => eprintln!("Swatch sheet saved to {}", path.display()),
                    Err(error) => eprintln!("Warning: Failed to save swatch sheet: {}", error),
                }
            }
        }
        Err(error) => {
            eprintln!("Extraction failed: {}", error);
            if error.is_recoverable() {
                eprintln!("Suggestion: {}", error.user_message());
            }
            process::exit(1);
        }
    }
}

fn parse_value<T: FromStr>(args: &[String], i: &mut usize, option: &str) -> T {
    *i += 1;
    let Some(raw) = args.get(*i) else {
        eprintln!("Error: {} requires a value", option);
        process::exit(1);
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Error: invalid value '{}' for {}", raw, option);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract a dominant-hue color palette from an image file.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --colors N       Maximum number of palette colors (default: 6)");
    eprintln!("  --separation N   Minimum hue distance between chosen colors (default: 10)");
    eprintln!("  --sq Q           Saturation quantile in [0,1] (default: 0.5)");
    eprintln!("  --vq Q           Value quantile in [0,1] (default: 0.5)");
    eprintln!("  --space SPACE    Output space: rgb, bgr, hsv, or hex (default: hex)");
    eprintln!("  --config FILE    Load all settings from a JSON config file");
    eprintln!("  --swatch FILE    Also render the palette as a swatch sheet image");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --colors 9 --space rgb photo.jpg", program_name);
    eprintln!("  {} --swatch palette.png photo.jpg", program_name);
}

fn print_result(palette: &Palette, space: OutputSpace) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(&palette.colors(space)) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Palette Summary ({} colors):", palette.len());
    for entry in palette {
        eprintln!(
            "  {}  hue={:<3} sat={:<3} val={:<3}",
            entry.hex, entry.hue, entry.saturation, entry.value
        );
    }
}
