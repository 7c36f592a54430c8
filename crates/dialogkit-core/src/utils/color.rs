//! ANSI color helpers for plain terminal output

use crate::utils::input::EnvConfigReader;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermColor {
    Header,
    OkBlue,
    OkGreen,
    Warning,
    Fail,
    EndC,
    Bold,
    Underline,
}

impl TermColor {
    pub fn code(&self) -> &'static str {
        match self {
            TermColor::Header => "\x1b[95m",
            TermColor::OkBlue => "\x1b[94m",
            TermColor::OkGreen => "\x1b[92m",
            TermColor::Warning => "\x1b[93m",
            TermColor::Fail => "\x1b[91m",
            TermColor::EndC => "\x1b[0m",
            TermColor::Bold => "\x1b[1m",
            TermColor::Underline => "\x1b[4m",
        }
    }
}

pub fn wrap_with_color(text: &str, color: TermColor) -> String {
    format!("{}{}{}", color.code(), text, TermColor::EndC.code())
}

fn colorize_stream(stream: atty::Stream) -> bool {
    atty::is(stream) && !EnvConfigReader::read_no_color()
}

/// Colors are skipped when stdout is not a terminal or NO_COLOR is set
pub fn should_colorize() -> bool {
    colorize_stream(atty::Stream::Stdout)
}

/// Same check for log output, which goes to stderr
pub fn should_colorize_stderr() -> bool {
    colorize_stream(atty::Stream::Stderr)
}

pub fn print_color(text: &str, color: TermColor) {
    if should_colorize() {
        println!("{}", wrap_with_color(text, color));
    } else {
        println!("{}", text);
    }
}
