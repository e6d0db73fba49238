//! Generative content commands

use crate::config::CliConfigLoader;
use anyhow::{anyhow, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;
use vedanco_core::genai::{
    decode_data_uri, AspectRatio, Attachment, GeminiClient, GenerativeService, ImageSize,
    VideoResolution,
};

#[derive(Subcommand, Debug)]
pub enum GenAiCommand {
    /// Analyze a prompt, optionally about a media file
    Analyze {
        prompt: String,

        /// Image or video to analyze
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Generate a 16:9 image
    Image {
        prompt: String,

        /// 1K, 2K or 4K
        #[arg(long, default_value = "1K")]
        size: ImageSize,

        #[arg(long, default_value = "vedanco-image.png")]
        out: PathBuf,
    },

    /// Edit an existing image
    Edit {
        file: PathBuf,

        prompt: String,

        #[arg(long, default_value = "vedanco-edit.png")]
        out: PathBuf,
    },

    /// Generate a video
    Video {
        prompt: String,

        /// 16:9 or 9:16
        #[arg(long, default_value = "16:9")]
        aspect: AspectRatio,

        /// 720p or 1080p
        #[arg(long, default_value = "720p")]
        resolution: VideoResolution,

        #[arg(long, default_value = "vedanco-video.mp4")]
        out: PathBuf,
    },
}

/// Run a generative content command
pub async fn genai_command(config_loader: CliConfigLoader, command: GenAiCommand) -> Result<()> {
    let config = config_loader.load().await?;
    let client = GeminiClient::new(&config.genai);

    match command {
        GenAiCommand::Analyze { prompt, file } => {
            let attachment = match file {
                Some(path) => Some(read_attachment(&path).await?),
                None => None,
            };
            let text = with_spinner("Analyzing...", client.analyze_content(&prompt, attachment)).await?;
            println!("{}", text);
        }
        GenAiCommand::Image { prompt, size, out } => {
            let uri = with_spinner("Generating image...", client.generate_image(&prompt, size)).await?;
            write_data_uri(&uri, &out).await?;
        }
        GenAiCommand::Edit { file, prompt, out } => {
            let image = read_attachment(&file).await?;
            let uri = with_spinner("Editing image...", client.edit_image(image, &prompt)).await?;
            if uri.is_empty() {
                println!("{}", "The model returned no image.".yellow());
            } else {
                write_data_uri(&uri, &out).await?;
            }
        }
        GenAiCommand::Video {
            prompt,
            aspect,
            resolution,
            out,
        } => {
            let video = with_spinner(
                "Generating video, this can take a few minutes...",
                client.generate_video(&prompt, aspect, resolution),
            )
            .await?;
            tokio::fs::write(&out, &video.bytes)
                .await
                .with_context(|| format!("Failed to write {}", out.display()))?;
            println!("{} {}", "Saved".green().bold(), out.display());
        }
    }

    Ok(())
}

async fn with_spinner<T>(
    message: &'static str,
    work: impl Future<Output = vedanco_core::Result<T>>,
) -> Result<T> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg} [{elapsed}]")?);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = work.await;
    spinner.finish_and_clear();
    Ok(result?)
}

async fn read_attachment(path: &Path) -> Result<Attachment> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(Attachment::from_file(path, data))
}

async fn write_data_uri(uri: &str, out: &Path) -> Result<()> {
    let bytes = decode_data_uri(uri).ok_or_else(|| anyhow!("Malformed image data"))?;
    tokio::fs::write(out, bytes)
        .await
        .with_context(|| format!("Failed to write {}", out.display()))?;
    println!("{} {}", "Saved".green().bold(), out.display());
    Ok(())
}
