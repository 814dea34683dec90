use std::io::Write;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::info;

use qrtag_core::{format_index, Color, Config, FontSource, LabelSizing};
use qrtag_encode::Generator;

#[derive(Parser)]
#[command(name = "qrtag")]
#[command(version)]
#[command(propagate_version = true)]
#[command(about = "Generate labeled QR codes from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a single labeled QR code.
    Generate {
        #[arg(help = "Payload of the QR code, usually a URL")]
        url: String,
        #[arg(short, long, help = "Caption printed below the code, at most 5 characters")]
        label: String,
        #[arg(short, long, help = "Index printed next to the caption, at most 9999")]
        index: u32,
        #[arg(
            short,
            long,
            help = "Output file or stdout if unspecified",
            long_help = "Output file or stdout if unspecified. The output must have the .png extension."
        )]
        output: Option<PathBuf>,
        #[command(flatten)]
        style: Style,
    },
    /// Generate one labeled QR code per index in a range.
    Batch {
        #[arg(
            short,
            long,
            help = "Payload template, '{index}' is replaced by the zero-padded index"
        )]
        url_template: String,
        #[arg(short, long, help = "Caption printed below every code, at most 5 characters")]
        label: String,
        #[arg(long, default_value_t = 1)]
        from: u32,
        #[arg(long)]
        to: u32,
        #[arg(short, long, help = "Directory receiving <label>_<index>.png files")]
        out_dir: PathBuf,
        #[command(flatten)]
        style: Style,
    },
}

#[derive(Args)]
struct Style {
    #[arg(short, long, default_value_t = 1, help = "Divide the image size by this factor")]
    magnitude: u32,
    #[arg(long, default_value_t = Color::BLACK, help = "Color of modules and text, as #rrggbb[aa]")]
    foreground: Color,
    #[arg(long, default_value_t = Color::WHITE, help = "Color of the empty space, as #rrggbb[aa]")]
    background: Color,
    #[arg(long, help = "TrueType font for the labels instead of the bundled one")]
    font: Option<PathBuf>,
    #[arg(long, help = "Size label rasters to their text instead of the fixed layout width")]
    measure_labels: bool,
}

impl Style {
    fn config(&self) -> Result<Config> {
        let sizing = if self.measure_labels {
            LabelSizing::Measured
        } else {
            LabelSizing::Fixed
        };
        let font = match &self.font {
            Some(path) => FontSource::File(path.clone()),
            None => FontSource::Embedded,
        };
        Ok(Config::new()
            .with_magnitude(self.magnitude)?
            .with_colors(self.foreground, self.background)
            .with_label_sizing(sizing)
            .with_font(font))
    }
}

fn check_png_extension(path: &Path) -> Result<()> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("png") => Ok(()),
        Some(invalid) => Err(anyhow::Error::msg(format!(
            "invalid output extension '{}'",
            invalid
        ))),
        None => Err(anyhow::Error::msg("requested output has no extension")),
    }
}

fn expand_template(template: &str, index: u32) -> Result<String> {
    Ok(template.replace("{index}", &format_index(index)?))
}

/// Generate one code per index of `indices` into `out_dir`, returning the written paths.
fn generate_batch(
    generator: &Generator,
    url_template: &str,
    label: &str,
    indices: RangeInclusive<u32>,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut written = Vec::new();
    for index in indices {
        let url = expand_template(url_template, index)?;
        let png = generator
            .generate(&url, label, index)
            .with_context(|| format!("failed to generate code {} for {}", index, url))?;
        let path = out_dir.join(format!("{}_{}.png", label, format_index(index)?));
        std::fs::write(&path, png)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!("generated {} for {}", path.display(), url);
        written.push(path);
    }
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate {
            url,
            label,
            index,
            output,
            style,
        } => {
            // Before doing anything, make sure the requested output is valid.
            if let Some(path) = &output {
                check_png_extension(path)?;
            }
            let generator = Generator::new(style.config()?)?;
            let png = generator.generate(&url, &label, index)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, png)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!("wrote {}", path.display());
                }
                None => std::io::stdout().lock().write_all(&png)?,
            }
        }
        Command::Batch {
            url_template,
            label,
            from,
            to,
            out_dir,
            style,
        } => {
            let generator = Generator::new(style.config()?)?;
            generate_batch(&generator, &url_template, &label, from..=to, &out_dir)?;
        }
    }
    Ok(())
}
