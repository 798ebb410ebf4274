use std::io::Write;

use tracing::info;
use tracing_subscriber::EnvFilter;

use sheetnorm::{NormalizeParams, normalize_sheets};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Resolve the effective parameters: a config file wins over the flags
pub fn resolve_params(args: &CliArgs) -> Result<NormalizeParams, AppError> {
    if let Some(config) = &args.config {
        if !config.is_file() {
            return Err(AppError::ConfigNotFound {
                path: config.clone(),
            });
        }
        info!("Loading parameters from {:?}", config);
        return Ok(NormalizeParams::from_json_file(config)?);
    }

    Ok(NormalizeParams {
        inputs: args.inputs.clone(),
        output_dir: args.output_dir.clone(),
        frame_size: args.frame_size,
        grid_size: args.grid_size,
        filter: args.filter,
    })
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        init_logging();
    }
    run_with_output(&args, &mut std::io::stdout().lock())
}

/// Run the batch, writing one confirmation line per sheet as it is written
pub fn run_with_output<W: Write>(
    args: &CliArgs,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    let params = resolve_params(args)?;
    info!("Output directory: {:?}", params.output_dir);

    let mut write_error = None;
    let result = normalize_sheets(&params, |sheet| {
        if write_error.is_none() {
            write_error = writeln!(out, "{sheet}").err();
        }
    });
    out.flush()?;

    let report = result?;
    if let Some(e) = write_error {
        return Err(e.into());
    }
    info!("Processed: {}", report.sheets.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;
    use sheetnorm::ResampleFilter;

    #[test]
    fn flags_become_params() {
        let args = CliArgs::try_parse_from(["sheetnorm", "x/a.png", "--grid-size", "2"]).unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.inputs, vec![PathBuf::from("x/a.png")]);
        assert_eq!(params.target_size(), (80, 80));
    }

    #[test]
    fn config_file_replaces_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("sheets.json");
        std::fs::write(
            &config,
            r#"{ "inputs": ["one.png"], "grid_size": 8, "filter": "nearest" }"#,
        )
        .unwrap();

        let args = CliArgs::try_parse_from([
            "sheetnorm",
            "--frame-size",
            "99",
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.inputs, vec![PathBuf::from("one.png")]);
        assert_eq!(params.target_size(), (320, 320));
        assert_eq!(params.filter, ResampleFilter::Nearest);
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("bad.json");
        std::fs::write(&config, "{ not json").unwrap();
        let args =
            CliArgs::try_parse_from(["sheetnorm", "--config", config.to_str().unwrap()]).unwrap();
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::Normalize(sheetnorm::Error::Config(_)))
        ));
    }

    #[test]
    fn missing_config_is_reported() {
        let args = CliArgs::try_parse_from(["sheetnorm", "--config", "no/such/file.json"]).unwrap();
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::ConfigNotFound { .. })
        ));
    }

    fn bird_batch(dir: &std::path::Path, present: &[u32]) -> Vec<PathBuf> {
        let assets = dir.join("assets");
        std::fs::create_dir_all(&assets).unwrap();
        (1..=3)
            .map(|i| {
                let path = assets.join(format!("bird{i}.png"));
                if present.contains(&i) {
                    image::RgbImage::from_pixel(48, 48, image::Rgb([90, 60, 30]))
                        .save(&path)
                        .unwrap();
                }
                path
            })
            .collect()
    }

    fn args_for(inputs: &[PathBuf], out_dir: &std::path::Path) -> CliArgs {
        let mut argv: Vec<String> = vec!["sheetnorm".to_string()];
        argv.extend(inputs.iter().map(|p| p.display().to_string()));
        argv.push("--output-dir".to_string());
        argv.push(out_dir.display().to_string());
        CliArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn prints_one_line_per_sheet() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = bird_batch(dir.path(), &[1, 2, 3]);
        let out_dir = dir.path().join("normalized_sheets");

        let mut out = Vec::new();
        run_with_output(&args_for(&inputs, &out_dir), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, input) in lines.iter().zip(&inputs) {
            let dest = out_dir.join(input.file_name().unwrap());
            assert_eq!(
                *line,
                format!(
                    "✅ Resized {} -> {} (160x160)",
                    input.display(),
                    dest.display()
                )
            );
            assert!(dest.is_file());
        }
    }

    #[test]
    fn stops_printing_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = bird_batch(dir.path(), &[1, 3]);
        let out_dir = dir.path().join("normalized_sheets");

        let mut out = Vec::new();
        let result = run_with_output(&args_for(&inputs, &out_dir), &mut out);

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.contains("bird1.png"));
        assert!(!out_dir.join("bird3.png").exists());
    }
}
