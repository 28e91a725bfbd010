pub mod proto {
    pub mod tensorboard {
        include!("tensorboard.pb.rs");
    }
}

pub mod config;
pub mod error;
pub mod histogram;
pub mod image;
pub mod logger;
pub mod masked_crc;
pub mod reader;
pub mod summary;
pub mod tf_record;
pub mod writer;

pub use config::LoggerConfig;
pub use error::{Error, Result};
pub use logger::{Logger, Record};
