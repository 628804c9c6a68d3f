use clap::Parser;
use craftmac_cli::commands;
use craftmac_core::{MacroConfig, MacroConfigExt, SkillTable};
use std::path::PathBuf;

fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = MacroConfig::load();
    cli.apply_overrides(&mut config);

    if cli.save_config {
        config.clone().store().map_err(|e| e.to_string())?;
    }

    let table = SkillTable::standard();
    match &cli.file {
        Some(path) if cli.stdout => commands::convert_to_stdout(path, &table, &config),
        Some(path) => commands::convert_in_place(path, &table, &config),
        None => commands::convert_stdio(&table, &config),
    }
}

#[derive(Parser)]
#[command(version, about = "Convert a crafting rotation into game macro pages")]
struct Cli {
    /// Rotation file to rewrite in place; stdin/stdout when omitted
    file: Option<PathBuf>,

    /// Print the result instead of rewriting the file
    #[arg(long)]
    stdout: bool,

    /// Keep the wait annotation on the final macro line
    #[arg(long)]
    wait_last_line: bool,

    /// Disable unambiguous-prefix completion of skill names
    #[arg(long)]
    no_autocomplete: bool,

    /// Lines per macro page, page boundary marker included
    #[arg(long)]
    page_size: Option<usize>,

    /// Sound effect number for completion cues
    #[arg(long)]
    sound_effect: Option<u8>,

    /// Append a "Macro done" cue after the last page
    #[arg(long)]
    last_page_chime: bool,

    /// Persist the effective settings as the new defaults
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut MacroConfig) {
        if self.wait_last_line {
            config.wait_last_line = true;
        }
        if self.no_autocomplete {
            config.autocomplete = false;
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(se) = self.sound_effect {
            config.sound_effect = se;
        }
        if self.last_page_chime {
            config.sound_effect_on_last_page = true;
        }
    }
}
