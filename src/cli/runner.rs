//! CLI runner - opens handles, sequences the pipeline, owns the exit code

use crate::cli::commands::Cli;
use crate::error::{Error, Result};
use crate::infer::InferenceOptions;
use crate::pipeline;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;

// ============================================================================
// Handles
// ============================================================================

/// Input handle: an opened file or pass-through stdin
enum Input {
    Stdin(io::Stdin),
    File(File),
}

impl Input {
    fn open(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => File::open(path)
                .map(Input::File)
                .map_err(|source| Error::file_open(path.display().to_string(), source)),
            None => Ok(Input::Stdin(io::stdin())),
        }
    }

    /// Read handles carry no buffered state; dropping them is the close
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}

/// Output handle: a buffered file or pass-through stdout
enum Output {
    Stdout(io::Stdout),
    File(BufWriter<File>),
}

impl Output {
    fn create(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => File::create(path)
                .map(|file| Output::File(BufWriter::new(file)))
                .map_err(|source| Error::file_open(path.display().to_string(), source)),
            None => Ok(Output::Stdout(io::stdout())),
        }
    }

    /// Flush buffered bytes to the destination; a flush failure is this
    /// handle's close failure
    fn close(&mut self) -> Result<()> {
        self.flush()
            .map_err(|source| Error::file_close("output", source))
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(stdout) => stdout.write(buf),
            Output::File(writer) => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(stdout) => stdout.flush(),
            Output::File(writer) => writer.flush(),
        }
    }
}

// ============================================================================
// Runner
// ============================================================================

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the conversion, returning the process exit code
    ///
    /// Errors are reported once to the output destination with a stage
    /// prefix, not to a separate stream. A close failure after a successful
    /// conversion still turns the exit code nonzero.
    pub fn run(self) -> i32 {
        // Malformed type-override tokens fail here, before any file opens
        let options = match self.build_options() {
            Ok(options) => options,
            Err(e) => {
                println!("Error parsing flags: {e}");
                return 1;
            }
        };

        let mut input = match Input::open(self.cli.input.as_deref()) {
            Ok(input) => input,
            Err(e) => {
                println!("Error opening input file: {e}");
                return 1;
            }
        };

        let mut output = match Output::create(self.cli.output.as_deref()) {
            Ok(output) => output,
            Err(e) => {
                println!("Error creating output file: {e}");
                return 1;
            }
        };

        let mut exit_code = 0;

        if let Err(e) = pipeline::run(&mut input, &mut output, self.cli.pretty, &options) {
            let _ = writeln!(output, "Error: {e}");
            exit_code = 1;
        }

        if let Err(e) = output.close() {
            // The destination may no longer accept the report; the exit
            // code still records the failure
            let _ = writeln!(output, "Error closing output file: {e}");
            exit_code = 1;
        }

        if let Err(e) = input.close() {
            let _ = writeln!(output, "Error closing input file: {e}");
            exit_code = 1;
        }

        exit_code
    }

    /// Build inference options from the include and types flags
    fn build_options(&self) -> Result<InferenceOptions> {
        let mut options = InferenceOptions::new();

        if let Some(include) = self.cli.include.as_deref() {
            options = options.with_include_list(include);
        }
        if let Some(types) = self.cli.types.as_deref() {
            options = options.with_type_list(types)?;
        }

        Ok(options)
    }
}
