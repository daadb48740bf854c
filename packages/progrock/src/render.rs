use std::time::{Duration, Instant};

use crate::{ProgressState, RenderOptions};

/// A placeholder in the format template of [`RenderOptions`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// `:bar` - the bar itself
    Bar,
    /// `:progress` - the current step
    Progress,
    /// `:total` - the total steps
    Total,
    /// `:percent` - the percentage done
    Percent,
    /// `:elapsed` - the elapsed time in minutes and seconds
    Elapsed,
    /// `:remaining` - the estimated remaining time in minutes and seconds
    Remaining,
}

impl Token {
    /// All tokens, in the order they are substituted
    pub const ALL: [Token; 6] = [
        Token::Bar,
        Token::Progress,
        Token::Total,
        Token::Percent,
        Token::Elapsed,
        Token::Remaining,
    ];

    /// The literal text of the token in a template
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Bar => ":bar",
            Token::Progress => ":progress",
            Token::Total => ":total",
            Token::Percent => ":percent",
            Token::Elapsed => ":elapsed",
            Token::Remaining => ":remaining",
        }
    }

    /// The text this token is replaced with
    pub fn substitute(self, state: &ProgressState, options: &RenderOptions, now: Instant) -> String {
        match self {
            Token::Bar => bar_text(state, options),
            Token::Progress => {
                let width = state.total().to_string().len();
                align_right(&state.progress().to_string(), width)
            }
            Token::Total => state.total().to_string(),
            Token::Percent => align_right(&state.percent().to_string(), 3),
            Token::Elapsed => interval_str(Some(state.elapsed_at(now))),
            Token::Remaining => interval_str(state.remaining_at(now)),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substitute every token in the template. Text that is not a token is kept
pub(crate) fn render(state: &ProgressState, options: &RenderOptions, now: Instant) -> String {
    let mut out = options.format_str().to_string();
    for token in Token::ALL {
        let pattern = token.as_str();
        if !out.contains(pattern) {
            continue;
        }
        out = out.replace(pattern, &token.substitute(state, options, now));
    }
    out
}

fn bar_text(state: &ProgressState, options: &RenderOptions) -> String {
    let length = options.length().max(0);
    let completed = if state.total() > 0 {
        let ratio = state.progress() as f64 / state.total() as f64;
        ((ratio * length as f64) as i64).clamp(0, length)
    } else {
        0
    };
    let mut out = String::with_capacity(length as usize);
    out.extend(std::iter::repeat_n(options.complete_char(), completed as usize));
    out.extend(std::iter::repeat_n(
        options.incomplete_char(),
        (length - completed) as usize,
    ));
    out
}

/// Pad `text` with spaces on the left to `width`. Wider text is kept as is
fn align_right(text: &str, width: usize) -> String {
    format!("{text:>width$}")
}

/// Format as `MM:SS`, or `--:--` if `None`
fn interval_str(interval: Option<Duration>) -> String {
    match interval {
        None => "--:--".to_string(),
        Some(interval) => {
            let millis = interval.as_millis();
            let seconds = (millis / 1000) % 60;
            let minutes = millis / 60000;
            format!("{minutes:02}:{seconds:02}")
        }
    }
}
