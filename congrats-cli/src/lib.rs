use clap::Parser;
use congrats::{LLM, Recipient, congratulation, gemini::Gemini, style_example};

use crate::cli::Cli;

mod cli;
mod output;

pub async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();

    log::info!("Initializing model {}...", args.gemini_model);
    let llm = match Gemini::new(args.gemini_api_key.as_str(), args.gemini_model.as_str()) {
        Ok(llm) => llm,
        Err(err) => {
            log::error!("Failed to initialize the model:\n{err}");
            return Ok(());
        }
    };
    log::info!("Model ready.");

    if let Err(err) = generate(&args, &llm).await {
        log::error!("Failed to generate the congratulation:\n{err}");
    }

    Ok(())
}

async fn generate(args: &Cli, llm: &impl LLM) -> anyhow::Result<()> {
    log::info!("Sampling style {:?}...", args.style);
    let style_text = style_example(&args.style, llm).await?;
    log::info!("Style example:\n{style_text}");

    log::info!("Generating the congratulation...");
    let recipient = Recipient::new(args.name.clone(), args.age, args.interests.clone());
    let text = congratulation(&recipient, &style_text, llm).await?;

    output::save_text(&args.output, &text)?;
    log::info!("Congratulation saved to {}", args.output.display());
    log::info!("Done.");

    Ok(())
}
