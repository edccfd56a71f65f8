//! Fine-tuning launcher for a pretrained YOLO detection checkpoint.
//!
//! All training logic lives in the Ultralytics `yolo` CLI. This module only
//! fixes the hyperparameters, checks the dataset config and runs the tool in
//! the foreground. Named checkpoints missing locally are fetched by `yolo`.

use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::process::Command;
use tracing::{info, warn};

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("training exited with {0}")]
    Failed(ExitStatus),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingConfig {
    pub executable: String,
    pub checkpoint: String,
    pub data: String,
    pub imgsz: u32,
    pub batch: u32,
    pub epochs: u32,
    pub workers: u32,
    pub device: String,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            executable: "yolo".to_string(),
            checkpoint: "yolo11m.pt".to_string(),
            data: "dataset_custom.yaml".to_string(),
            imgsz: 640,
            batch: 8,
            epochs: 2,
            workers: 1,
            device: "cpu".to_string(),
        }
    }
}

impl TrainingConfig {
    /// Fixed hyperparameters; only the tool location comes from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            executable: settings.yolo_bin.clone(),
            ..Self::default()
        }
    }

    pub fn args(&self) -> Vec<String> {
        vec![
            "detect".to_string(),
            "train".to_string(),
            format!("model={}", self.checkpoint),
            format!("data={}", self.data),
            format!("imgsz={}", self.imgsz),
            format!("batch={}", self.batch),
            format!("epochs={}", self.epochs),
            format!("workers={}", self.workers),
            format!("device={}", self.device),
        ]
    }

    /// The dataset config must exist; the checkpoint may be downloaded by `yolo`.
    pub fn check_inputs(&self, dir: &Path) -> Result<(), TrainingError> {
        let data = dir.join(&self.data);
        if !data.is_file() {
            return Err(TrainingError::MissingFile(data));
        }
        if !dir.join(&self.checkpoint).is_file() {
            warn!(checkpoint = %self.checkpoint, "checkpoint not found locally; yolo will try to download it");
        }
        Ok(())
    }

    /// Run to completion with inherited stdio.
    pub async fn run(&self, dir: &Path) -> Result<(), TrainingError> {
        self.check_inputs(dir)?;

        info!(
            program = %self.executable,
            checkpoint = %self.checkpoint,
            data = %self.data,
            epochs = self.epochs,
            "starting training"
        );
        let status = Command::new(&self.executable)
            .args(self.args())
            .current_dir(dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| TrainingError::Spawn {
                program: self.executable.clone(),
                source,
            })?;

        if !status.success() {
            return Err(TrainingError::Failed(status));
        }
        info!("training finished");
        Ok(())
    }
}
