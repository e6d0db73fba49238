//! Contact form command

use crate::config::CliConfigLoader;
use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use console::Term;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use vedanco_core::contact::{ContactController, ContactForm, HttpFormTransport, Subject, OFFICES};
use vedanco_core::FormStatus;

/// Contact form fields; anything left out is prompted for on a terminal
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// One of the subject options, e.g. "Business Partnership"
    #[arg(long)]
    pub subject: Option<String>,

    #[arg(long)]
    pub message: Option<String>,

    /// Never prompt, submit what was given
    #[arg(long)]
    pub no_input: bool,
}

/// Fill in and submit the contact form
pub async fn contact_command(config_loader: CliConfigLoader, args: ContactArgs) -> Result<()> {
    let config = config_loader.load().await?;
    let interactive = !args.no_input && Term::stdout().is_term();

    let mut controller = ContactController::new(&config.contact, Box::new(HttpFormTransport::new()));
    *controller.form_mut() = collect_form(args, interactive)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Sending...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = controller.submit().await;
    spinner.finish_and_clear();

    match (result, controller.status()) {
        (Ok(()), FormStatus::Success) => {
            println!("{}", "Message Sent!".green().bold());
            println!("Thank you for contacting Vedanco Group. We will be in touch shortly.");
            Ok(())
        }
        (Err(e), _) => bail!("{}", e),
        (Ok(()), status) => bail!("Unexpected form status: {:?}", status),
    }
}

fn collect_form(args: ContactArgs, interactive: bool) -> Result<ContactForm> {
    let mut form = ContactForm {
        first_name: args.first_name.unwrap_or_default(),
        last_name: args.last_name.unwrap_or_default(),
        email: args.email.unwrap_or_default(),
        phone: args.phone.unwrap_or_default(),
        subject: args
            .subject
            .as_deref()
            .map(str::parse::<Subject>)
            .transpose()
            .map_err(anyhow::Error::msg)?
            .unwrap_or_default(),
        message: args.message.unwrap_or_default(),
    };

    if !interactive {
        return Ok(form);
    }

    if let Some(office) = OFFICES.iter().find(|office| office.active) {
        println!(
            "{} {}, {}",
            "Headquarters:".bold(),
            office.city,
            office.country
        );
    }

    let theme = ColorfulTheme::default();
    prompt_if_empty(&theme, &mut form.first_name, "First Name *")?;
    prompt_if_empty(&theme, &mut form.last_name, "Last Name")?;
    prompt_if_empty(&theme, &mut form.email, "Email *")?;
    prompt_if_empty(&theme, &mut form.phone, "Phone")?;

    let labels: Vec<_> = Subject::ALL.iter().map(Subject::label).collect();
    let default = Subject::ALL
        .iter()
        .position(|s| *s == form.subject)
        .unwrap_or(0);
    let picked = Select::with_theme(&theme)
        .with_prompt("Subject")
        .items(&labels)
        .default(default)
        .interact()
        .context("Failed to read subject")?;
    form.subject = Subject::ALL[picked];

    prompt_if_empty(&theme, &mut form.message, "Message *")?;
    Ok(form)
}

fn prompt_if_empty(theme: &ColorfulTheme, value: &mut String, prompt: &str) -> Result<()> {
    if !value.is_empty() {
        return Ok(());
    }
    *value = Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read {}", prompt))?;
    Ok(())
}
