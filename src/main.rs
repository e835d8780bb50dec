use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use gray_pipeline::image_pipeline::{
    ConversionConfig, GrayscaleMethod, GrayscalePipeline, TiffCompression,
};
use gray_pipeline::logger;

use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert images to grayscale", long_about = None)]
struct Cli {
    /// Luma weighting for colour input
    #[arg(long, value_enum, default_value_t = Method::Rec601, global = true)]
    method: Method,

    /// Quality for JPEG output (1-100)
    #[arg(long, default_value_t = 90, global = true)]
    jpeg_quality: u8,

    /// Compression for TIFF output
    #[arg(long, value_enum, default_value_t = Compression::None, global = true)]
    tiff_compression: Compression,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert one image; the output format follows the output extension
    Convert { input: PathBuf, output: PathBuf },
    /// Convert every png/jpg/jpeg/bmp file in a directory
    Batch {
        input_dir: PathBuf,
        output_dir: PathBuf,
        /// Record failing files and keep going instead of aborting
        #[arg(long)]
        continue_on_error: bool,
    },
    /// Write an image as a binary PGM
    Pgm { input: PathBuf, output: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Method {
    Rec601,
    Rec709,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Compression {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<Method> for GrayscaleMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Rec601 => GrayscaleMethod::Rec601,
            Method::Rec709 => GrayscaleMethod::Rec709,
        }
    }
}

impl From<Compression> for TiffCompression {
    fn from(compression: Compression) -> Self {
        match compression {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::DeflateFast => TiffCompression::DeflateFast,
            Compression::DeflateBalanced => TiffCompression::DeflateBalanced,
            Compression::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    let continue_on_error = matches!(cli.command, Command::Batch { continue_on_error: true, .. });
    let config = ConversionConfig::builder()
        .method(cli.method.into())
        .jpeg_quality(cli.jpeg_quality)
        .tiff_compression(cli.tiff_compression.into())
        .continue_on_error(continue_on_error)
        .build();
    let pipeline = GrayscalePipeline::new(config);

    info!("Method: {:?}", pipeline.config().method);

    match cli.command {
        Command::Convert { input, output } => {
            pipeline
                .convert_file(&input, &output)
                .with_context(|| format!("converting {}", input.display()))?;
            info!("Wrote {}", output.display());
        }
        Command::Batch { input_dir, output_dir, .. } => {
            let report = pipeline
                .batch_convert_directory(&input_dir, &output_dir)
                .with_context(|| format!("converting directory {}", input_dir.display()))?;
            report.log_summary();
            if !report.is_success() {
                anyhow::bail!("{} file(s) failed to convert", report.failed.len());
            }
        }
        Command::Pgm { input, output } => {
            pipeline
                .save_as_pgm(&input, &output)
                .with_context(|| format!("exporting {} as PGM", input.display()))?;
            info!("Wrote {}", output.display());
        }
    }

    Ok(())
}
