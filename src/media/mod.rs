pub mod client;
pub mod config;
pub mod model;

pub use client::MediaClient;
pub use config::MediaHostConfig;
pub use model::{AssetRecord, AssetUploadRequest, DeletionOutcome, OverwritePolicy};
