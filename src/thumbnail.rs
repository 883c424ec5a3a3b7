use std::{path::PathBuf, process::Command};

use getset::Getters;
use log::{debug, info};

use crate::schema::Perfnum;

/// Arguments for generating the thumbnail of a regular performance.
#[derive(Clone, PartialEq, Eq, Debug, Getters)]
#[getset(get = "pub")]
pub struct ThumbnailRequest {
    stage: String,
    date: String,
    perfnum: Perfnum,
}

impl ThumbnailRequest {
    pub fn new(stage: String, date: String, perfnum: Perfnum) -> Self {
        Self {
            stage,
            date,
            perfnum,
        }
    }

    /// Positional arguments: stage, date, two-digit performance number.
    pub fn args(&self) -> [String; 3] {
        [
            self.stage.clone(),
            self.date.clone(),
            self.perfnum.to_string(),
        ]
    }
}

pub trait Thumbnailer {
    /// Generates the thumbnail.  The outcome is not reported back;
    /// a failed generation is noticed and redone by hand.
    fn generate(&self, request: &ThumbnailRequest);
}

/// Runs the `thumbnail` executable and waits for it.
#[derive(Debug)]
pub struct ExternalThumbnailer {
    program: PathBuf,
}

impl ExternalThumbnailer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Thumbnailer for ExternalThumbnailer {
    fn generate(&self, request: &ThumbnailRequest) {
        let args = request.args();
        info!("thumbnail {}", args.join(" "));
        let status = Command::new(&self.program).args(&args).status();
        debug!("{:?} finished: {status:?}", self.program);
    }
}
