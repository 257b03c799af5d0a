//! Command-line argument parsing.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the version and exit
    Version,
    /// Print usage and exit
    Help,
    /// Remove the stored session and exit
    Logout,
    /// Run the terminal client (default)
    Run { api_url: Option<String> },
}

/// Parse command-line arguments, including the program name.
///
/// Informational flags win over `--api-url` wherever they appear.
///
/// ```
/// use paydesk::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["paydesk".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--logout" => return CliCommand::Logout,
            "--api-url" => api_url = args.next(),
            other => {
                if let Some(url) = other.strip_prefix("--api-url=") {
                    api_url = Some(url.to_string());
                }
            }
        }
    }
    CliCommand::Run { api_url }
}

pub const USAGE: &str = "\
Usage: paydesk [OPTIONS]

Options:
  --api-url <URL>  Backend base URL (default http://localhost:8080/api/v1)
  --logout         Remove the saved session and exit
  -V, --version    Print version
  -h, --help       Print this help

Environment:
  PAYDESK_API_URL  Backend base URL
  PAYDESK_HOME     Directory for session and log files (default ~/.paydesk)
  PAYDESK_LOG      Log filter, e.g. debug or paydesk=trace";
