/// Print level settable with `-v` and `-q` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PrintLevel {
    QuietQuiet,
    Quiet,
    Normal,
    Verbose,
    VerboseVerbose,
}

impl PrintLevel {
    /// Combine the number of `-v` and `-q` flags
    pub fn from_counts(verbose: u8, quiet: u8) -> Self {
        let level = verbose.clamp(0, 2) as i8 - quiet.clamp(0, 2) as i8;
        level.into()
    }
}

impl From<i8> for PrintLevel {
    fn from(value: i8) -> Self {
        match value {
            ..=-2 => Self::QuietQuiet,
            -1 => Self::Quiet,
            0 => Self::Normal,
            1 => Self::Verbose,
            2.. => Self::VerboseVerbose,
        }
    }
}

impl From<PrintLevel> for log::LevelFilter {
    fn from(value: PrintLevel) -> Self {
        match value {
            PrintLevel::QuietQuiet => log::LevelFilter::Off,
            PrintLevel::Quiet => log::LevelFilter::Error,
            PrintLevel::Normal => log::LevelFilter::Info,
            PrintLevel::Verbose => log::LevelFilter::Debug,
            PrintLevel::VerboseVerbose => log::LevelFilter::Trace,
        }
    }
}
