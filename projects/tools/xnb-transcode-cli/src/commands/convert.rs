use crate::batch::{run_batch, BatchResult, LoggingObserver, RunOutcome};
use crate::config::{RunConfig, DEFAULT_EXTENSION, DEFAULT_INPUT};
use crate::error::CliError;
use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;
use xnb_transcode_file_formats_api::ContainerReader;
use xnb_transcode_png::PngEncoder;
use xnb_transcode_xnb::XnbHandler;

#[derive(FromArgs, Debug)]
/// Convert every XNB texture under a directory to PNG
#[argh(subcommand, name = "convert")]
pub struct ConvertCmd {
    /// input directory path [default: Content]
    #[argh(option, default = "PathBuf::from(DEFAULT_INPUT)")]
    pub input: PathBuf,

    /// output directory path, created on first write [default: the input directory]
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// extension of the files to convert [default: xnb]
    #[argh(option, default = "String::from(DEFAULT_EXTENSION)")]
    pub extension: String,

    /// exit with a non-zero status when any file fails
    #[argh(switch)]
    pub strict: bool,

    /// convert files on all cores
    #[argh(switch)]
    pub parallel: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

impl From<ConvertCmd> for RunConfig {
    fn from(cmd: ConvertCmd) -> Self {
        let mut config = RunConfig::new(cmd.input)
            .with_extension(&cmd.extension)
            .with_parallel(cmd.parallel)
            .with_strict(cmd.strict);
        if let Some(output) = cmd.output {
            config = config.with_output(output);
        }
        config
    }
}

pub fn handle_convert_command(cmd: ConvertCmd) -> Result<i32, CliError> {
    let config = RunConfig::from(cmd);
    let readers: [&dyn ContainerReader; 1] = [&XnbHandler];

    let start = Instant::now();
    let outcome = run_batch(&config, &readers, &PngEncoder, &mut LoggingObserver);

    // Aborts are already logged by `run_batch`.
    if let RunOutcome::Completed(result) = &outcome {
        print!("{}", format_summary(result));
        println!("Conversion completed in {:.2?}", start.elapsed());
    }

    Ok(outcome.exit_code(config.strict))
}

/// Renders the counts followed by one line per failed file.
pub fn format_summary(result: &BatchResult) -> String {
    let mut summary = format!(
        "{} converted, {} failed, {} total\n",
        result.succeeded,
        result.failed(),
        result.total
    );

    if result.has_failures() {
        summary.push_str("Failures:\n");
        for failure in &result.failures {
            summary.push_str(&format!(
                "  [{}] {}: {}\n",
                failure.stage,
                failure.path.display(),
                failure.message
            ));
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FileFailure;
    use crate::exit_codes;
    use xnb_transcode_file_formats_api::pipeline::FailureStage;

    #[test]
    fn summary_without_failures() {
        let result = BatchResult {
            succeeded: 4,
            failures: Vec::new(),
            total: 4,
        };
        assert_eq!(format_summary(&result), "4 converted, 0 failed, 4 total\n");
    }

    #[test]
    fn summary_lists_failures() {
        let result = BatchResult {
            succeeded: 1,
            failures: vec![FileFailure {
                path: PathBuf::from("b/y.xnb"),
                stage: FailureStage::Read,
                message: "Invalid XNB magic".into(),
            }],
            total: 2,
        };

        assert_eq!(
            format_summary(&result),
            "1 converted, 1 failed, 2 total\nFailures:\n  [read] b/y.xnb: Invalid XNB magic\n"
        );
    }

    #[test]
    fn config_from_command() {
        let cmd = ConvertCmd {
            input: PathBuf::from("in"),
            output: None,
            extension: ".XNB".into(),
            strict: true,
            parallel: true,
            verbose: false,
        };

        let config = RunConfig::from(cmd);
        assert_eq!(config.output_root, PathBuf::from("in"));
        assert_eq!(config.extension, "XNB");
        assert!(config.strict);
        assert!(config.parallel);
    }

    #[test]
    fn aborted_run_creates_no_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out");
        let cmd = ConvertCmd {
            input: dir.path().join("missing"),
            output: Some(output.clone()),
            extension: "xnb".into(),
            strict: false,
            parallel: false,
            verbose: false,
        };

        assert_eq!(handle_convert_command(cmd).unwrap(), exit_codes::ABORTED);
        assert!(!output.exists());
    }
}
