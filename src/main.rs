use std::fs::File;
use std::io::{self, Write};

use clap::Parser;
use log::error;

use ruMOTIF::params::Parameters;

/// Duplicates log records to stderr and the `--logfile` target, the two
/// handlers the original tool attaches.
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn init_logging(params: &Parameters) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(params.verbosity.level_filter());

    if let Some(path) = &params.logfile {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(Tee { file })));
    }

    builder.init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let params = Parameters::parse();
    init_logging(&params)?;

    // Record the failure before surfacing it to the caller.
    if let Err(e) = ruMOTIF::run(&params) {
        error!("{e:#}");
        return Err(e);
    }
    Ok(())
}
