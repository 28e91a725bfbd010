use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to open event file under {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid image shape {shape:?}: {reason}")]
    ImageShape {
        shape: Vec<usize>,
        reason: &'static str,
    },
    #[error(transparent)]
    PngEncoding(#[from] png::EncodingError),
    #[error("cannot build a histogram from zero samples")]
    EmptyHistogram,
    #[error("histogram bucket count must be positive")]
    InvalidBins,
    #[error("histogram range [{min}, {max}] is not finite")]
    NonFiniteRange { min: f64, max: f64 },
    #[error("too many bins ({bins}) for the histogram data range")]
    TooManyBins { bins: usize },
    #[error("record {what} checksum mismatch")]
    Checksum { what: &'static str },
    #[error("event file ends in the middle of a record")]
    Truncated,
    #[error(transparent)]
    Decode(#[from] prost::DecodeError),
}

impl Error {
    pub(crate) fn image_shape(shape: &[usize], reason: &'static str) -> Self {
        Self::ImageShape {
            shape: shape.to_vec(),
            reason,
        }
    }
}
