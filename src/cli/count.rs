use crate::cli::CountArgs;
use crate::config::Config;
use crate::output;
use crate::plugin::DangerPep8;
use crate::report::Report;
use crate::runner::ShellRunner;
use tracing::{debug, error, info};

pub fn execute(args: CountArgs) -> anyhow::Result<()> {
    debug!("Loading config from {:?}", args.config);
    let mut config = Config::load_or_default(&args.config)?;

    // Apply CLI overrides
    if let Some(base_dir) = args.base_dir {
        config.base_dir = base_dir;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    if let Some(report_dir) = args.report_dir {
        config.report.dir = report_dir;
    }

    config.validate()?;

    let runner = ShellRunner;
    let plugin = DangerPep8::new(&config, &runner, None);

    let mut report = Report::default();
    plugin.count_errors(&mut report);

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
