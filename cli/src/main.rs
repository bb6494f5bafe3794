use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use log::{error, info};
use svg2vd::{convert_dir, convert_file, drawable_name, BatchReport, Settings};

/// Convert SVG files into Android vector drawables
#[derive(Parser, Debug)]
#[command(name = "svg2vd", version, author, about, long_about = None)]
struct Opt {
    /// An SVG file, or a directory of SVG files
    #[arg(default_value = "brand_svgs", value_hint = ValueHint::AnyPath)]
    input: PathBuf,
    /// Output directory. When converting a single file this may also be the
    /// path of the `.xml` file to write.
    #[arg(short, long, default_value = "app/src/main/res/drawable", value_hint = ValueHint::AnyPath)]
    out: PathBuf,
    /// Prefix for generated drawable names [default: logo_]
    #[arg(long)]
    prefix: Option<String>,
    /// Fill for shapes without a usable fill [default: #FFFFFF]
    #[arg(long)]
    default_fill: Option<String>,
    /// Indent the generated XML
    #[arg(long)]
    pretty: bool,
    /// Load settings from a JSON file. Flags take precedence over it.
    #[arg(long, value_hint = ValueHint::FilePath)]
    settings: Option<PathBuf>,
    /// Write the effective settings as JSON to this file and exit
    #[arg(long, value_hint = ValueHint::FilePath)]
    export: Option<PathBuf>,
    /// Log every converted shape
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let opt = Opt::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if opt.verbose { "debug" } else { "info" }),
    )
    .init();

    match run(opt) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file converted
fn run(opt: Opt) -> Result<bool> {
    let settings = settings(&opt)?;

    if let Some(export) = &opt.export {
        let json = serde_json::to_string_pretty(&settings)?;
        fs::write(export, json)
            .with_context(|| format!("could not export settings to {}", export.display()))?;
        info!("Exported settings to {}", export.display());
        return Ok(true);
    }

    settings.validate()?;

    let report = if opt.input.is_dir() {
        convert_dir(&opt.input, &opt.out, &settings)?
    } else {
        convert_single(&opt.input, &opt.out, &settings)?
    };

    println!("\n{report}");
    println!("Conversion process completed.");
    Ok(report.is_success())
}

/// Settings file (if any) with command line overrides applied
fn settings(opt: &Opt) -> Result<Settings> {
    let mut settings = match &opt.settings {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("could not read settings from {}", path.display()))?;
            serde_json::from_str(&json)
                .with_context(|| format!("could not parse settings in {}", path.display()))?
        }
        None => Settings::default(),
    };

    if let Some(prefix) = &opt.prefix {
        settings.batch.prefix = prefix.clone();
    }
    if let Some(fill) = &opt.default_fill {
        settings.conversion.default_fill = fill.clone();
    }
    if opt.pretty {
        settings.postprocess.pretty = true;
    }
    Ok(settings)
}

fn convert_single(src: &Path, out: &Path, settings: &Settings) -> Result<BatchReport> {
    let dst = single_destination(src, out, settings)?;
    let file_name = src
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| src.display().to_string());

    info!("Converting {file_name} to {}", dst.display());
    let mut report = BatchReport::default();
    report.record(file_name, convert_file(src, &dst, settings));
    Ok(report)
}

/// `out` itself when it names an `.xml` file, otherwise the derived drawable
/// name inside the `out` directory
fn single_destination(src: &Path, out: &Path, settings: &Settings) -> Result<PathBuf> {
    if out.extension().is_some_and(|ext| ext == "xml") {
        return Ok(out.to_path_buf());
    }

    fs::create_dir_all(out).with_context(|| format!("could not create {}", out.display()))?;
    let stem = src
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    let name = drawable_name(&stem, &settings.batch.prefix);
    Ok(out.join(format!("{name}.xml")))
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Opt::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_original_layout() {
        let opt = Opt::parse_from(["svg2vd"]);
        assert_eq!(opt.input, PathBuf::from("brand_svgs"));
        assert_eq!(opt.out, PathBuf::from("app/src/main/res/drawable"));
        assert_eq!(settings(&opt).unwrap(), Settings::default());
    }

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r##"{"conversion":{"default_fill":"#111111"},"batch":{"prefix":"brand_"}}"##,
        )
        .unwrap();

        let opt = Opt::parse_from([
            "svg2vd",
            "--settings",
            path.to_str().unwrap(),
            "--prefix",
            "ic_",
            "--pretty",
        ]);
        let settings = settings(&opt).unwrap();
        assert_eq!(settings.conversion.default_fill, "#111111");
        assert_eq!(settings.batch.prefix, "ic_");
        assert!(settings.postprocess.pretty);
    }

    #[test]
    fn single_file_destination() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::default();

        let explicit = dir.path().join("custom.xml");
        assert_eq!(
            single_destination(Path::new("Rolex-Crown.svg"), &explicit, &settings).unwrap(),
            explicit
        );

        let out = dir.path().join("drawable");
        assert_eq!(
            single_destination(Path::new("Rolex-Crown.svg"), &out, &settings).unwrap(),
            out.join("logo_rolex_crown.xml")
        );
        assert!(out.is_dir());
    }
}
