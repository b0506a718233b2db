use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;

use colordinate::cli::{CliArgs, CliCommand};
use colordinate::host::{Extractor, HighlightTable};
use colordinate::scheme;
use colordinate::{ColordinateConfig, Session};

fn main() -> Result<()> {
    colordinate::tracing::init();

    let args = CliArgs::parse();
    let config = ColordinateConfig::load();
    run(args.command, &config)
}

fn run(command: CliCommand, config: &ColordinateConfig) -> Result<()> {
    match command {
        CliCommand::Check { document } => {
            let model = scheme::parse(&read(&document)?)
                .with_context(|| format!("{} is not a valid document", document.display()))?;
            println!("{}: {} groups", document.display(), model.len());
        }
        CliCommand::Fmt { document, write } => {
            let model = scheme::parse(&read(&document)?)
                .with_context(|| format!("{} is not a valid document", document.display()))?;
            let text = scheme::to_document(&model);
            if write {
                fs::write(&document, text)
                    .with_context(|| format!("Failed to write {}", document.display()))?;
            } else {
                print!("{}", text);
            }
        }
        CliCommand::Script { document } => {
            let model = scheme::parse(&read(&document)?)
                .with_context(|| format!("{} is not a valid document", document.display()))?;
            println!("{}", scheme::to_script(&model));
        }
        CliCommand::Extract { snapshot } => {
            let mut table = HighlightTable::from_snapshot_json(&read(&snapshot)?)
                .with_context(|| format!("{} is not a highlight snapshot", snapshot.display()))?;
            let model = Extractor::with_mode(config.render_mode).extract(&mut table)?;
            print!("{}", scheme::to_document(&model));
        }
        CliCommand::Save {
            document,
            name,
            force,
        } => {
            let session = Session::new(read(&document)?);
            let content = session
                .colorscheme(&name)
                .with_context(|| format!("{} is not a valid document", document.display()))?;
            let target = config.scheme_path(&name);
            if target.exists() && !force {
                bail!(
                    "{} already exists; pass --force to overwrite it",
                    target.display()
                );
            }
            if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(&target, content)
                .with_context(|| format!("Failed to write {}", target.display()))?;
            tracing::info!("Saved colorscheme to {}", target.display());
            println!("{}", target.display());
        }
        CliCommand::Jump { document, group } => {
            let session = Session::new(read(&document)?);
            match session.jump(&group)? {
                Some(line) => println!("{}", line + 1),
                None => bail!("group {} not found in {}", group, document.display()),
            }
        }
    }
    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
