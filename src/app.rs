use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::PASSWORD_ENV;
use crate::file::{delete_file, find_eligible_files, get_file_info_list, get_output_path, validate_path};
use crate::processor::{Job, process_batch, process_file};
use crate::secret::Password;
use crate::types::{Processing, ProcessorMode};
use crate::ui::progress::Spinner;
use crate::ui::prompt::{check_password, choose_file, confirm_overwrite, confirm_removal, get_password, get_processing_mode};

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file into `<input>.encrypted`.
    Encrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to the input with `.encrypted` appended).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for if neither given nor set in the environment).
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Replace the output file if it exists.
        #[arg(short, long)]
        force: bool,
    },

    /// Decrypt a file produced by `encrypt`.
    Decrypt {
        /// Input file path.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (defaults to the input without `.encrypted`).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Password (prompted for if neither given nor set in the environment).
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Replace the output file if it exists.
        #[arg(short, long)]
        force: bool,
    },

    /// Process several files concurrently with one password.
    Batch {
        /// Operation to perform on every input.
        #[arg(value_enum)]
        operation: Operation,

        /// Input files; outputs use the default naming.
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Password (prompted for if neither given nor set in the environment).
        #[arg(short, long, env = PASSWORD_ENV, hide_env_values = true)]
        password: Option<String>,

        /// Replace output files that exist.
        #[arg(short, long)]
        force: bool,
    },

    /// Start interactive mode.
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl From<Operation> for ProcessorMode {
    fn from(operation: Operation) -> Self {
        match operation {
            Operation::Encrypt => Self::Encrypt,
            Operation::Decrypt => Self::Decrypt,
        }
    }
}

#[derive(Parser)]
#[command(name = "seal3d", version, about = "Password-protect files with AES-256-GCM. Run without arguments for interactive mode.")]
pub struct App {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl App {
    pub fn init() -> Result<Self> {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_file(true).with_line_number(true).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Encrypt { input, output, password, force }) => Self::run_mode(input, output, password, ProcessorMode::Encrypt, force).await,
            Some(Commands::Decrypt { input, output, password, force }) => Self::run_mode(input, output, password, ProcessorMode::Decrypt, force).await,
            Some(Commands::Batch { operation, inputs, password, force }) => Self::run_batch(operation.into(), inputs, password, force).await,
            Some(Commands::Interactive) | None => Self::run_interactive().await,
        }
    }

    async fn run_mode(input: PathBuf, output: Option<PathBuf>, password: Option<String>, mode: ProcessorMode, force: bool) -> Result<()> {
        validate_path(&input, true).with_context(|| format!("source validation failed: {}", input.display()))?;

        let output = output.unwrap_or_else(|| get_output_path(&input, mode));
        if !force {
            validate_path(&output, false).context("use --force to replace it")?;
        }

        let password = Self::resolve_password(password, mode)?;
        Self::process(mode, &input, &output, password, force).await?;

        crate::ui::show_success(mode, &input, &output);
        Ok(())
    }

    async fn run_batch(mode: ProcessorMode, inputs: Vec<PathBuf>, password: Option<String>, force: bool) -> Result<()> {
        let jobs: Vec<Job> = inputs
            .into_iter()
            .map(|input| {
                let output = get_output_path(&input, mode);
                Job { input, output }
            })
            .collect();

        let mut outputs = HashSet::with_capacity(jobs.len());
        if let Some(job) = jobs.iter().find(|job| !outputs.insert(job.output.as_path())) {
            bail!("two inputs would write the same output: {}", job.output.display());
        }

        let password = Arc::new(Self::resolve_password(password, mode)?);
        let total = jobs.len();
        debug!(total, %mode, "starting batch");

        let spinner = Spinner::new(&format!("{} {total} file(s)", Processing::from(mode)));
        let results = process_batch(mode, jobs, password, force).await;
        spinner.finish();

        let mut failed = 0usize;
        for outcome in &results {
            match &outcome.result {
                Ok(_) => crate::ui::show_success(mode, &outcome.job.input, &outcome.job.output),
                Err(err) => {
                    failed += 1;
                    crate::ui::show_failure(&outcome.job.input, err);
                }
            }
        }

        if failed > 0 {
            bail!("{failed} of {total} file(s) failed");
        }

        Ok(())
    }

    async fn run_interactive() -> Result<()> {
        crate::ui::clear_screen()?;
        crate::ui::print_banner();

        let mode = get_processing_mode()?;

        let files = find_eligible_files(Path::new("."), mode)?;
        if files.is_empty() {
            bail!("no eligible files found for {mode} operation");
        }

        crate::ui::show_file_info(&get_file_info_list(&files)?);

        let input = choose_file(&files)?;
        validate_path(&input, true).with_context(|| format!("source validation failed: {}", input.display()))?;

        let output = get_output_path(&input, mode);
        let overwrite = validate_path(&output, false).is_err();
        if overwrite && !confirm_overwrite(&output)? {
            bail!("operation canceled by user");
        }

        let password = get_password(mode)?;
        Self::process(mode, &input, &output, password, overwrite).await?;

        crate::ui::show_success(mode, &input, &output);

        let label = match mode {
            ProcessorMode::Encrypt => "original",
            ProcessorMode::Decrypt => "encrypted",
        };

        if confirm_removal(&input, label)? {
            delete_file(&input).await?;
            crate::ui::show_source_deleted(&input);
        }

        Ok(())
    }

    async fn process(mode: ProcessorMode, input: &Path, output: &Path, password: Password, overwrite: bool) -> Result<()> {
        let spinner = Spinner::new(&Processing::from(mode).to_string());
        let result = process_file(mode, input, output, Arc::new(password), overwrite).await;
        spinner.finish();

        result.map(|_| ()).with_context(|| format!("{} failed: {}", mode, input.display()))
    }

    fn resolve_password(password: Option<String>, mode: ProcessorMode) -> Result<Password> {
        match password {
            Some(password) => {
                check_password(&password)?;
                Ok(Password::from_string(password))
            }
            None => get_password(mode),
        }
    }
}
