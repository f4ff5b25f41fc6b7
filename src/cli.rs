// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::analysis::{Draft, SubmissionController, SubmissionStatus, ValidationResult};
use crate::core::{ClientConfig, FsOps};
use crate::error::AnalysisError;

#[derive(Parser)]
#[command(name = "hr-suite")]
#[command(about = "Resume screening and employee feedback analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// TOML config file (defaults to ./hr_suite.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a PDF resume against a job description
    Screen {
        /// Resume to upload
        #[arg(long)]
        file: PathBuf,

        #[command(flatten)]
        job: JobDescriptionArgs,
    },
    /// Analyze employee feedback or exit interview comments
    Sentiment {
        #[command(flatten)]
        feedback: FeedbackArgs,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct JobDescriptionArgs {
    #[arg(long)]
    pub job_description: Option<String>,

    #[arg(long)]
    pub job_description_file: Option<PathBuf>,

    /// Use the built-in sample job description
    #[arg(long)]
    pub sample_job_description: bool,
}

#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct FeedbackArgs {
    #[arg(long)]
    pub feedback: Option<String>,

    #[arg(long)]
    pub feedback_file: Option<PathBuf>,

    /// Use the built-in sample feedback
    #[arg(long)]
    pub sample_feedback: bool,
}

/// Run one subcommand. Returns whether the analysis succeeded.
pub async fn handle_command(command: Command, config: &ClientConfig) -> Result<bool> {
    let (mut screening, mut sentiment) =
        crate::build_controllers(config).context("Failed to set up analysis client")?;

    match command {
        Command::Screen { file, job } => {
            let document = FsOps::read_document(&file).await?;
            if let Err(e) = screening.select_file(document) {
                return Ok(report_rejection(&screening, e));
            }

            if let Some(text) = job.job_description {
                screening.set_job_description(text);
            } else if let Some(path) = job.job_description_file {
                screening.set_job_description(FsOps::read_text(&path).await?);
            } else {
                screening.load_sample_job_description();
            }

            run(&mut screening).await
        }
        Command::Sentiment { feedback } => {
            if let Some(text) = feedback.feedback {
                sentiment.set_feedback(text);
            } else if let Some(path) = feedback.feedback_file {
                sentiment.set_feedback(FsOps::read_text(&path).await?);
            } else {
                sentiment.load_sample_feedback();
            }

            run(&mut sentiment).await
        }
    }
}

async fn run<D: Draft>(controller: &mut SubmissionController<D>) -> Result<bool> {
    if let ValidationResult::Invalid { reason } = controller.validation() {
        eprintln!("{}", reason);
        return Ok(false);
    }

    info!("Submitting {} analysis", controller.kind());
    let submitted = controller.submit_and_wait().await.map(|_| ());
    if let Err(e) = submitted {
        return Ok(report_rejection(controller, e));
    }

    match (controller.status(), controller.rendered()) {
        (SubmissionStatus::Success, Some(model)) => {
            print!("{}", model);
            Ok(true)
        }
        _ => {
            eprintln!(
                "{}",
                controller.alert().unwrap_or("Analysis failed. Please try again.")
            );
            Ok(false)
        }
    }
}

fn report_rejection<D: Draft>(controller: &SubmissionController<D>, error: AnalysisError) -> bool {
    eprintln!("{}", error.user_message(controller.kind()));
    false
}
