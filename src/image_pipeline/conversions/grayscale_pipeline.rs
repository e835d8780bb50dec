use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, info, instrument, warn};

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    common::timing::PipelineTimings,
    conversions::batch::{BatchFailure, BatchReport, is_supported_input},
    conversions::types::ConversionConfig,
    decode::{ImageReader, StandardImageReader},
    encode::{GrayImageWriter, OutputFormat, StandardGrayWriter},
    grayscale::{GrayImageData, to_grayscale},
};

pub struct GrayscalePipeline<R: ImageReader, W: GrayImageWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl GrayscalePipeline<StandardImageReader, StandardGrayWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardImageReader,
            writer: StandardGrayWriter,
            config,
        }
    }
}

impl Default for GrayscalePipeline<StandardImageReader, StandardGrayWriter> {
    fn default() -> Self {
        Self::new(ConversionConfig::default())
    }
}

impl<R: ImageReader, W: GrayImageWriter> GrayscalePipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        Ok(())
    }

    fn decode_gray(&self, input_data: &[u8], timings: &mut PipelineTimings) -> Result<GrayImageData> {
        let decoded = {
            let _span = tracing::info_span!("decode").entered();
            timings.time("decode", || self.reader.read_image(input_data))?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = decoded.width,
                height = decoded.height
            ).entered();
            self.validate_dimensions(decoded.width, decoded.height)?;
        }

        let _span = tracing::info_span!("grayscale", method = ?self.config.method).entered();
        timings.time("grayscale", || to_grayscale(&decoded, self.config.method))
    }

    /// Decodes `input_data`, converts it to grayscale and encodes it as
    /// `format` into `output`.
    pub fn convert(&self, input_data: &[u8], format: OutputFormat, output: &mut dyn Write) -> Result<()> {
        self.convert_with_timings(input_data, format, output)?;
        Ok(())
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert_with_timings(
        &self,
        input_data: &[u8],
        format: OutputFormat,
        output: &mut dyn Write,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();

        let gray = self.decode_gray(input_data, &mut timings)?;

        {
            let _span = tracing::info_span!("encode").entered();
            timings.time("encode", || self.writer.write_gray(&gray, format, output, &self.config))?;
        }

        debug!(
            "Conversion complete: {}x{} in {:.3}ms",
            gray.width,
            gray.height,
            timings.total_duration().as_secs_f64() * 1000.0
        );
        Ok(timings)
    }

    /// Converts one file, choosing the output format from `output_path`'s
    /// extension.
    ///
    /// A missing or unreadable input is a `DecodeError`. Nothing is created
    /// at `output_path` unless the whole conversion succeeds.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let output_path = output_path.as_ref();
        let format = OutputFormat::from_path(output_path)?;
        self.convert_path(input_path.as_ref(), output_path, format)?;
        Ok(())
    }

    /// Writes the input as a binary PGM regardless of the output extension.
    #[instrument(skip(self, input_path, output_path))]
    pub fn save_as_pgm<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        self.convert_path(input_path.as_ref(), output_path.as_ref(), OutputFormat::Pgm)?;
        Ok(())
    }

    fn convert_path(
        &self,
        input_path: &Path,
        output_path: &Path,
        format: OutputFormat,
    ) -> Result<PipelineTimings> {
        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            fs::read(input_path).map_err(|e| {
                ConversionError::DecodeError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut encoded = Vec::new();
        let mut timings = self.convert_with_timings(&input_data, format, &mut encoded)?;

        {
            let _span = tracing::info_span!("write_output_file").entered();
            timings.time("write_output_file", || write_atomically(output_path, &encoded)).map_err(|e| {
                ConversionError::OutputWriteError(format!("{}: {}", output_path.display(), e))
            })?;
        }

        Ok(timings)
    }

    /// Converts every supported image directly inside `input_dir` into
    /// `output_dir`, naming each output `<prefix><original name>`.
    ///
    /// `output_dir` and its parents are created when missing. Entries are
    /// visited in directory-listing order. Unless `continue_on_error` is set,
    /// the first failing file aborts the batch.
    #[instrument(skip(self, input_dir, output_dir))]
    pub fn batch_convert_directory<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_dir: P,
        output_dir: Q,
    ) -> Result<BatchReport> {
        let input_dir = input_dir.as_ref();
        let output_dir = output_dir.as_ref();

        info!(
            input_dir = %input_dir.display(),
            output_dir = %output_dir.display(),
            "Starting batch conversion"
        );

        fs::create_dir_all(output_dir).map_err(|e| {
            ConversionError::OutputWriteError(format!("{}: {}", output_dir.display(), e))
        })?;

        // Snapshot the listing so outputs written into `input_dir` are not picked up.
        let entries = fs::read_dir(input_dir)
            .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
            .map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_dir.display(), e))
            })?;

        let mut report = BatchReport::default();

        for entry in entries {
            let file_name = entry.file_name();
            let input_path = entry.path();

            if !is_supported_input(&file_name.to_string_lossy()) || !input_path.is_file() {
                debug!(entry = %input_path.display(), "Skipping entry");
                report.skipped.push(input_path);
                continue;
            }

            let mut output_name = OsString::from(&self.config.output_prefix);
            output_name.push(&file_name);
            let output_path = output_dir.join(output_name);

            let result = OutputFormat::from_path(&output_path)
                .and_then(|format| self.convert_path(&input_path, &output_path, format));

            match result {
                Ok(timings) => {
                    report.timings.merge(&timings);
                    report.converted.push((input_path, output_path));
                }
                Err(e) if self.config.continue_on_error => {
                    warn!(input = %input_path.display(), "Conversion failed, continuing: {}", e);
                    report.failed.push(BatchFailure {
                        input: input_path,
                        error: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            converted = report.converted.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "Batch conversion complete"
        );
        Ok(report)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}

/// Writes `data` to a temporary file beside `path` and renames it into place.
fn write_atomically(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(data)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
