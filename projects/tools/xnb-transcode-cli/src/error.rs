use thiserror::Error;
use xnb_transcode_file_formats_api::DecodeError;

/// Failures a subcommand reports instead of an exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
