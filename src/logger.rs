//! A logger that appends scalars, images and histograms to a fresh event file
//! in a log directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use ndarray::{ArrayBase, Data, Dimension};

use crate::config::LoggerConfig;
use crate::error::{Error, Result};
use crate::image::{encode_all, EncodedImage, Pixel};
use crate::proto::tensorboard as pb;
use crate::summary::SummaryBuilder;
use crate::writer::TensorboardWriter;

/// One logged measurement.
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    Scalar {
        tag: String,
        step: i64,
        value: f32,
    },
    /// Images stored under `"{tag}/{index}"`, in order.
    ImageSet {
        tag: String,
        step: i64,
        images: Vec<EncodedImage>,
    },
    Histogram {
        tag: String,
        step: i64,
        values: Vec<f64>,
        bins: usize,
    },
}

impl Record {
    /// Encodes every image up front; fails if any array is not an image.
    pub fn images<S, D>(tag: &str, images: &[ArrayBase<S, D>], step: i64) -> Result<Self>
    where
        S: Data,
        S::Elem: Pixel,
        D: Dimension,
    {
        Ok(Record::ImageSet {
            tag: tag.to_string(),
            step,
            images: encode_all(images)?,
        })
    }

    pub fn tag(&self) -> &str {
        match self {
            Record::Scalar { tag, .. }
            | Record::ImageSet { tag, .. }
            | Record::Histogram { tag, .. } => tag.as_str(),
        }
    }

    pub fn step(&self) -> i64 {
        match *self {
            Record::Scalar { step, .. }
            | Record::ImageSet { step, .. }
            | Record::Histogram { step, .. } => step,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Record::Scalar { .. } => "scalar",
            Record::ImageSet { .. } => "images",
            Record::Histogram { .. } => "histogram",
        }
    }

    pub fn into_summary(self) -> Result<pb::Summary> {
        let builder = SummaryBuilder::new();
        let builder = match self {
            Record::Scalar { tag, value, .. } => builder.scalar(&tag, value),
            Record::ImageSet { tag, images, .. } => builder.encoded_images(&tag, images),
            Record::Histogram {
                tag, values, bins, ..
            } => builder.histogram(&tag, bins, &values)?,
        };
        Ok(builder.build())
    }
}

pub struct Logger {
    writer: TensorboardWriter<BufWriter<File>>,
    path: PathBuf,
    config: LoggerConfig,
}

impl Logger {
    /// Creates `log_dir` if needed and starts a new event file in it.
    pub fn new<P: AsRef<Path>>(log_dir: P) -> Result<Self> {
        Self::with_config(log_dir, LoggerConfig::default(), None)
    }

    /// Like [`new`][Self::new], also recording a serialized `GraphDef`.
    pub fn with_graph<P: AsRef<Path>>(log_dir: P, graph_def: Vec<u8>) -> Result<Self> {
        Self::with_config(log_dir, LoggerConfig::default(), Some(graph_def))
    }

    pub fn with_config<P: AsRef<Path>>(
        log_dir: P,
        config: LoggerConfig,
        graph_def: Option<Vec<u8>>,
    ) -> Result<Self> {
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir).map_err(|source| Error::Open {
            path: log_dir.to_path_buf(),
            source,
        })?;
        let (path, file) = create_event_file(log_dir, &config.filename_suffix)?;
        tracing::debug!(path = %path.display(), "created event file");

        let mut writer = TensorboardWriter::new(BufWriter::new(file));
        write_header(&mut writer, graph_def).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;

        Ok(Logger {
            writer,
            path,
            config,
        })
    }

    /// Path of the event file this logger appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn log_scalar(&mut self, tag: &str, value: f32, step: i64) -> Result<()> {
        self.log(Record::Scalar {
            tag: tag.to_string(),
            step,
            value,
        })
    }

    /// Logs a batch of images as one event, each under `"{tag}/{index}"`.
    ///
    /// Each array is `height x width` or `height x width x channels` with 1
    /// to 4 channels. Nothing is written if any image is malformed.
    pub fn log_images<S, D>(
        &mut self,
        tag: &str,
        images: &[ArrayBase<S, D>],
        step: i64,
    ) -> Result<()>
    where
        S: Data,
        S::Elem: Pixel,
        D: Dimension,
    {
        let record = Record::images(tag, images, step)?;
        self.log(record)
    }

    /// Logs a histogram using [`LoggerConfig::default_bins`] buckets.
    pub fn log_histogram(&mut self, tag: &str, values: &[f64], step: i64) -> Result<()> {
        let bins = self.config.default_bins;
        self.log_histogram_with_bins(tag, values, step, bins)
    }

    pub fn log_histogram_with_bins(
        &mut self,
        tag: &str,
        values: &[f64],
        step: i64,
        bins: usize,
    ) -> Result<()> {
        self.log(Record::Histogram {
            tag: tag.to_string(),
            step,
            values: values.to_vec(),
            bins,
        })
    }

    pub fn log(&mut self, record: Record) -> Result<()> {
        let step = record.step();
        tracing::debug!(tag = record.tag(), step, kind = record.kind(), "logging record");
        let summary = record.into_summary()?;
        self.add_summary(summary, step)
    }

    /// Appends a pre-built summary, e.g. from [`SummaryBuilder`], at `step`.
    pub fn add_summary(&mut self, summary: pb::Summary, step: i64) -> Result<()> {
        self.writer.write_summary(SystemTime::now(), step, summary)?;
        if self.config.flush_every_write {
            self.flush()?;
        }
        Ok(())
    }

    /// Pushes buffered events to the file. Dropping the logger also flushes,
    /// but ignores errors.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn write_header<W: io::Write>(
    writer: &mut TensorboardWriter<W>,
    graph_def: Option<Vec<u8>>,
) -> io::Result<()> {
    writer.write_file_version()?;
    if let Some(graph_def) = graph_def {
        writer.write_graph(graph_def)?;
    }
    writer.flush()
}

fn event_file_base(now: SystemTime, host: &str) -> io::Result<String> {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(io::Error::other)?
        .as_secs();
    Ok(format!("events.out.tfevents.{:010}.{}", secs, host))
}

fn create_event_file(log_dir: &Path, suffix: &str) -> Result<(PathBuf, File)> {
    let host = match hostname::get() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read hostname");
            "localhost".to_string()
        }
    };
    let base = event_file_base(SystemTime::now(), &host).map_err(|source| Error::Open {
        path: log_dir.to_path_buf(),
        source,
    })?;

    // Two loggers started within the same second would otherwise share a name.
    let mut attempt = 0u32;
    loop {
        let name = if attempt == 0 {
            format!("{}{}", base, suffix)
        } else {
            format!("{}.{}{}", base, attempt, suffix)
        };
        let path = log_dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => return Ok((path, file)),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => return Err(Error::Open { path, source }),
        }
    }
}
