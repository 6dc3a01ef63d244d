use crate::cli::LintArgs;
use crate::config::Config;
use crate::output;
use crate::plugin::DangerPep8;
use crate::provider;
use crate::report::Report;
use crate::runner::ShellRunner;
use tracing::{debug, error, info};

pub fn execute(args: LintArgs) -> anyhow::Result<()> {
    debug!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(base_dir) = args.base_dir {
        config.base_dir = base_dir;
    }
    if let Some(flake8_config) = args.flake8_config {
        config.config_file = Some(flake8_config);
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(provider) = args.provider {
        config.provider = provider;
    }
    if let Some(report_dir) = args.report_dir {
        config.report.dir = report_dir;
    }
    if args.inline {
        config.inline = true;
    }

    config.validate()?;

    let runner = ShellRunner;
    let resolver = provider::create_resolver(&config);
    let plugin = DangerPep8::new(&config, &runner, resolver.as_deref());

    let mut report = Report::default();
    plugin.lint(&mut report, config.inline);

    output::write_report(&config.report.dir, &config.base_dir, &report)?;
    super::print_report(&report);

    if report.is_empty() {
        info!("No PEP 8 issues to report");
    } else if args.fail_on_issues {
        error!("Exiting with error: PEP 8 issues were reported");
        std::process::exit(1);
    }

    Ok(())
}
