/// How the formatter renders the split line sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Reconstruct the input line for line.
    #[default]
    Plain,
    /// Number every split line, the trailing artifact included.
    Numbered,
    /// Number non-empty lines only; empty lines are dropped.
    NonBlank,
}

impl Mode {
    /// `number` wins over `blank` when both are set.
    pub const fn from_flags(number: bool, blank: bool) -> Self {
        if number {
            Mode::Numbered
        } else if blank {
            Mode::NonBlank
        } else {
            Mode::Plain
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Plain => "plain",
            Mode::Numbered => "number",
            Mode::NonBlank => "blank",
        }
    }
}
