//! Command line surface of the `waymark` binary.
//!
//! Arguments are parsed by hand into a [`CliConfig`]; [`run`] executes it and
//! writes everything meant for the user to the given writer.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};

use waymark_foundation::{Error, ErrorContext, ErrorKind, Result};
use waymark_parser::{CollisionPolicy, Diagnostics, DirectoryWalker, ParseConfig, ParseOutput};

use crate::export::{Exporter, MessagePackExporter};
use crate::report::Report;

/// Default snapshot file written by `--export`.
pub const DEFAULT_OUTPUT: &str = "world.msgpack";

/// What the binary was asked to do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Walk a tree, print warnings and the report.
    Validate,
    /// Validate, then write the snapshot.
    Export,
    /// Print usage.
    #[default]
    Help,
    /// Print the version.
    Version,
}

/// CLI configuration parsed from arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Selected command.
    pub command: Command,
    /// Root of the map tree.
    pub path: Option<PathBuf>,
    /// Snapshot file for `--export`.
    pub output: PathBuf,
    /// Map file name override.
    pub map_file: Option<String>,
    /// Make id collisions fatal.
    pub strict_ids: bool,
    /// Suppress warnings.
    pub quiet: bool,
    /// Debug logging.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            command: Command::default(),
            path: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            map_file: None,
            strict_ids: false,
            quiet: false,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Parses `args`, whose first element is the program name.
    ///
    /// # Errors
    ///
    /// Returns a usage error for unknown options, missing values, or
    /// conflicting commands.
    pub fn parse_args(args: &[String]) -> Result<Self> {
        let mut config = Self::default();
        let mut command = None;
        let mut help = false;
        let mut version = false;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => help = true,
                "-V" | "--version" => version = true,
                "-q" | "--quiet" => config.quiet = true,
                "-v" | "--verbose" => config.verbose = true,
                "--strict-ids" => config.strict_ids = true,
                flag @ ("--validate" | "--export") => {
                    let wanted = if flag == "--validate" {
                        Command::Validate
                    } else {
                        Command::Export
                    };
                    if command.is_some_and(|c| c != wanted) {
                        return Err(usage("--validate and --export are mutually exclusive"));
                    }
                    command = Some(wanted);
                    config.path = Some(PathBuf::from(value(args, &mut i, flag)?));
                }
                "--output" => config.output = PathBuf::from(value(args, &mut i, "--output")?),
                "--map-file" => {
                    config.map_file = Some(value(args, &mut i, "--map-file")?.to_owned());
                }
                arg if arg.starts_with('-') => {
                    return Err(usage(format!("unknown option: {arg}")));
                }
                arg => return Err(usage(format!("unexpected argument: {arg}"))),
            }
            i += 1;
        }

        config.command = if help {
            Command::Help
        } else if version {
            Command::Version
        } else {
            command.unwrap_or(Command::Help)
        };
        Ok(config)
    }

    /// Builds the parser configuration these flags select.
    #[must_use]
    pub fn parse_config(&self) -> ParseConfig {
        let mut config = ParseConfig::new();
        if let Some(name) = &self.map_file {
            config = config.with_map_file(name.clone());
        }
        if self.strict_ids {
            config = config.with_collisions(CollisionPolicy::Fail);
        }
        config
    }
}

fn usage(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::Usage(message.into()))
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| usage(format!("{flag} requires a value")))
}

/// Finds the directory a path argument refers to.
///
/// The path is used as given if it is a directory, otherwise it is looked up
/// next to the running executable.
///
/// # Errors
///
/// Returns [`ErrorKind::PathNotFound`] if neither is a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf> {
    let exe_dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    resolve_root_in(path, exe_dir.as_deref())
}

fn resolve_root_in(path: &Path, exe_dir: Option<&Path>) -> Result<PathBuf> {
    if path.is_dir() {
        return Ok(path.to_path_buf());
    }
    if path.is_relative() {
        if let Some(candidate) = exe_dir.map(|dir| dir.join(path)).filter(|c| c.is_dir()) {
            tracing::debug!(path = %candidate.display(), "resolved path next to executable");
            return Ok(candidate);
        }
    }
    Err(Error::new(ErrorKind::PathNotFound(path.display().to_string())))
}

/// Executes a parsed command, writing user-facing output to `out`.
///
/// Warnings are written before the fatal error is returned, so the ones
/// raised ahead of an abort are not lost.
///
/// # Errors
///
/// Returns the first fatal error of the run, or an I/O error if `out` fails.
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let emit = |e: std::io::Error| Error::io("output", e);

    match config.command {
        Command::Help => return write!(out, "{}", help_text()).map_err(emit),
        Command::Version => {
            return writeln!(out, "waymark {}", env!("CARGO_PKG_VERSION")).map_err(emit);
        }
        Command::Validate | Command::Export => {}
    }

    let path = config
        .path
        .as_deref()
        .ok_or_else(|| usage("a map tree path is required"))?;
    let root = resolve_root(path)?;
    let mut diagnostics = Diagnostics::new();
    let walked =
        DirectoryWalker::new(config.parse_config()).walk_collecting(&root, &mut diagnostics);

    if !config.quiet && !diagnostics.is_empty() {
        for diagnostic in &diagnostics {
            writeln!(out, "{diagnostic}").map_err(emit)?;
        }
        writeln!(out).map_err(emit)?;
    }
    let output = ParseOutput {
        world: walked?,
        diagnostics,
    };
    writeln!(out, "{}", Report::from_output(&output)).map_err(emit)?;

    if config.command == Command::Export {
        let mut exporter = MessagePackExporter::new(&config.output);
        exporter.export(&output.world)?;
        writeln!(out, "exported to {}", exporter.path().display()).map_err(emit)?;
    }
    Ok(())
}

/// Renders a fatal error the way the binary prints it.
#[must_use]
pub fn render_error(err: &Error) -> String {
    match &err.context {
        Some(context) if *context != ErrorContext::default() => {
            format!("Fatal: {err}\n{context}")
        }
        _ => format!("Fatal: {err}"),
    }
}

/// Usage text.
#[must_use]
pub fn help_text() -> String {
    format!(
        "\x1b[1mWaymark\x1b[0m {version} - Game world map parser

\x1b[1mUSAGE:\x1b[0m
    waymark --validate <PATH> [OPTIONS]
    waymark --export <PATH> [--output FILE] [OPTIONS]

\x1b[1mCOMMANDS:\x1b[0m
    --validate <PATH>   Parse the map tree, print warnings and counts
    --export <PATH>     Validate, then write a MessagePack snapshot

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    --output FILE       Snapshot file for --export (default: {output})
    --map-file NAME     Map file inside each area directory (default: map.ht.md)
    --strict-ids        Treat id collisions as fatal
    -q, --quiet         Do not print warnings
    -v, --verbose       Enable debug logging

\x1b[1mENVIRONMENT:\x1b[0m
    WAYMARK_LOG         Log filter directives, e.g. waymark_parser=trace

\x1b[1mEXAMPLES:\x1b[0m
    waymark --validate maps           Check the tree under ./maps
    waymark --export maps -q          Export without printing warnings
",
        version = env!("CARGO_PKG_VERSION"),
        output = DEFAULT_OUTPUT,
    )
}
