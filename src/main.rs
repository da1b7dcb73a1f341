use clap::Parser;
use effectgraph_installer::domain::ports::ConfigProvider;
use effectgraph_installer::utils::{logger, validation::Validate};
use effectgraph_installer::{
    resolve_target, CliConfig, InstallOutcome, InstallReport, Installer, InstallerError,
    LocalStorage,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.json);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        fail(&e);
    }

    let target = match resolve_target(config.target_dir()) {
        Ok(target) => target,
        Err(e) => fail(&e),
    };
    tracing::debug!("Resolved target: {}", target.display());

    let json = config.report_json();
    let installer = Installer::new(LocalStorage::new(&target), config);

    match installer.run() {
        Ok(InstallOutcome::Listed(entries)) => {
            if json {
                let listing: Vec<_> = entries
                    .iter()
                    .map(|e| {
                        serde_json::json!({ "path": e.path, "size": e.data.len(), "dir": e.is_dir })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&listing)?);
            } else {
                for entry in &entries {
                    println!("{:>8}  {}", entry.data.len(), entry.path.display());
                }
            }
        }
        Ok(InstallOutcome::Installed(report)) => print_report(&report, json)?,
        Err(e) => fail(&e),
    }

    Ok(())
}

fn print_report(report: &InstallReport, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("Done. Files extracted to {}", report.target.display());
        println!("Next: {}", report.next_step);
    }
    Ok(())
}

fn fail(e: &InstallerError) -> ! {
    tracing::debug!("{} (category: {:?})", e, e.category());
    eprintln!("{}", e.user_friendly_message());
    eprintln!("{}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
