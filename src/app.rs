use crate::cli::Cli;
use clap::Parser;
use env_logger::Env;
use mimevert::convert::Invoker;
use mimevert::mime;

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    let explicit = cli.target_mime.as_deref().filter(|m| !m.is_empty());
    let target = mime::resolve(cli.target_mime.as_deref(), &cli.output_file)?;
    if explicit.is_none() {
        log::info!("Inferred target MIME type: {}", target.mime_type);
    }

    let result = Invoker::new(&cli.unoconv_path).convert(&cli.input_file, &target, &cli.output_file)?;
    if !result.stderr_text.is_empty() {
        log::debug!("Converter stderr: {}", result.stderr_text.trim_end());
    }

    println!(
        "File successfully converted to {}",
        cli.output_file.display()
    );
    Ok(())
}
