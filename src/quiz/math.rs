//! Math markup rendering for terminal display.
//!
//! Rendering is a collaborator of the card presenter: given a fragment of
//! TeX, produce the text that ends up on screen. [`RawMarkup`] leaves the
//! markup untouched; [`UnicodeMath`] approximates common notation with
//! Unicode symbols, superscripts and inline fractions.

use tracing::instrument;

/// Renders math markup into displayable text.
pub trait MathRenderer: std::fmt::Debug + Send + Sync {
    /// Renders a fragment of math markup.
    fn render(&self, markup: &str) -> String;
}

/// Leaves markup as written, minus display delimiters.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawMarkup;

impl MathRenderer for RawMarkup {
    #[instrument(skip(self))]
    fn render(&self, markup: &str) -> String {
        strip_delimiters(markup).to_string()
    }
}

/// Approximates TeX with Unicode.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeMath;

impl MathRenderer for UnicodeMath {
    #[instrument(skip(self))]
    fn render(&self, markup: &str) -> String {
        let chars: Vec<char> = strip_delimiters(markup).chars().collect();
        let mut parser = Parser { chars, pos: 0 };
        let out = parser.sequence(None);
        collapse_spaces(&out)
    }
}

/// Strips one layer of `$$..$$`, `$..$`, `\(..\)` or `\[..\]`.
fn strip_delimiters(markup: &str) -> &str {
    let trimmed = markup.trim();
    for (open, close) in [("$$", "$$"), ("\\[", "\\]"), ("\\(", "\\)"), ("$", "$")] {
        if trimmed.len() >= open.len() + close.len()
            && let Some(inner) = trimmed
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
        {
            return inner.trim();
        }
    }
    trimmed
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn command_symbol(name: &str) -> Option<&'static str> {
    let symbol = match name {
        "cdot" => "·",
        "times" => "×",
        "div" => "÷",
        "pm" => "±",
        "mp" => "∓",
        "neq" | "ne" => "≠",
        "leq" | "le" => "≤",
        "geq" | "ge" => "≥",
        "approx" => "≈",
        "to" | "rightarrow" => "→",
        "Rightarrow" | "implies" => "⇒",
        "infty" => "∞",
        "pi" => "π",
        "theta" => "θ",
        "alpha" => "α",
        "beta" => "β",
        "lambda" => "λ",
        "Delta" => "Δ",
        "partial" => "∂",
        "prime" => "′",
        "int" => "∫",
        "sum" => "∑",
        "lim" => "lim",
        "sin" => "sin",
        "cos" => "cos",
        "tan" => "tan",
        "sec" => "sec",
        "csc" => "csc",
        "cot" => "cot",
        "arcsin" => "arcsin",
        "arccos" => "arccos",
        "arctan" => "arctan",
        "ln" => "ln",
        "log" => "log",
        "exp" => "exp",
        "quad" | "qquad" => "  ",
        "left" | "right" | "displaystyle" => "",
        _ => return None,
    };
    Some(symbol)
}

fn superscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        '+' => '⁺',
        '-' => '⁻',
        'n' => 'ⁿ',
        'x' => 'ˣ',
        '(' => '⁽',
        ')' => '⁾',
        _ => return None,
    })
}

fn subscript(c: char) -> Option<char> {
    Some(match c {
        '0' => '₀',
        '1' => '₁',
        '2' => '₂',
        '3' => '₃',
        '4' => '₄',
        '5' => '₅',
        '6' => '₆',
        '7' => '₇',
        '8' => '₈',
        '9' => '₉',
        '+' => '₊',
        '-' => '₋',
        _ => return None,
    })
}

/// Needs parentheses when shown inline as a fraction part.
fn needs_grouping(s: &str) -> bool {
    s.chars().count() > 1 && s.chars().any(|c| "+-·×/ ".contains(c))
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    /// Renders until `end` (exclusive, consumed) or end of input.
    fn sequence(&mut self, end: Option<char>) -> String {
        let mut out = String::new();
        while let Some(c) = self.peek() {
            if Some(c) == end {
                self.pos += 1;
                break;
            }
            match c {
                '\\' => {
                    self.pos += 1;
                    out.push_str(&self.command());
                }
                '{' => {
                    self.pos += 1;
                    out.push_str(&self.sequence(Some('}')));
                }
                '^' => {
                    self.pos += 1;
                    let arg = self.argument();
                    out.push_str(&scripted(&arg, superscript, '^'));
                }
                '_' => {
                    self.pos += 1;
                    let arg = self.argument();
                    out.push_str(&scripted(&arg, subscript, '_'));
                }
                '$' => {
                    self.pos += 1;
                }
                _ => {
                    self.pos += 1;
                    out.push(c);
                }
            }
        }
        out
    }

    /// A single-char or braced argument, rendered.
    fn argument(&mut self) -> String {
        match self.bump() {
            Some('{') => self.sequence(Some('}')),
            Some('\\') => self.command(),
            Some(c) => c.to_string(),
            None => String::new(),
        }
    }

    fn command(&mut self) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            self.pos += 1;
        }
        if self.pos == start {
            // Escaped symbol or spacing command such as `\,` or `\{`.
            return match self.bump() {
                Some(',') | Some(';') | Some(':') | Some('!') | Some(' ') => " ".to_string(),
                Some(c) => c.to_string(),
                None => String::new(),
            };
        }
        let name: String = self.chars[start..self.pos].iter().collect();
        match name.as_str() {
            "frac" | "dfrac" | "tfrac" => {
                let num = self.argument();
                let den = self.argument();
                format!("{}/{}", group(&num), group(&den))
            }
            "sqrt" => {
                let arg = self.argument();
                if arg.chars().count() == 1 {
                    format!("√{}", arg)
                } else {
                    format!("√({})", arg)
                }
            }
            "text" | "mathrm" | "operatorname" | "mathbf" => self.argument(),
            other => match command_symbol(other) {
                Some(symbol)
                    if symbol.chars().all(|c| c.is_ascii_alphabetic())
                        && self.peek().is_some_and(|c| c.is_alphanumeric() || c == '\\') =>
                {
                    format!("{} ", symbol)
                }
                Some(symbol) => symbol.to_string(),
                None => other.to_string(),
            },
        }
    }
}

fn group(s: &str) -> String {
    let s = s.trim();
    if needs_grouping(s) {
        format!("({})", s)
    } else {
        s.to_string()
    }
}

fn scripted(arg: &str, map: fn(char) -> Option<char>, marker: char) -> String {
    let arg = arg.trim();
    match arg.chars().map(map).collect::<Option<String>>() {
        Some(s) if !s.is_empty() => s,
        _ if arg.chars().count() == 1 => format!("{}{}", marker, arg),
        _ => format!("{}({})", marker, arg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("$$x$$"), "x");
        assert_eq!(strip_delimiters("$x$"), "x");
        assert_eq!(strip_delimiters("\\(x\\)"), "x");
        assert_eq!(strip_delimiters("\\[ x \\]"), "x");
        assert_eq!(strip_delimiters("x"), "x");
    }

    #[test]
    fn test_raw_markup_keeps_commands() {
        assert_eq!(RawMarkup.render("$$\\frac{d}{dx} x^2$$"), "\\frac{d}{dx} x^2");
    }

    #[test]
    fn test_power_rule() {
        assert_eq!(UnicodeMath.render("\\frac{d}{dx} x^2 = 2x"), "d/dx x² = 2x");
    }

    #[test]
    fn test_grouped_fraction() {
        assert_eq!(UnicodeMath.render("\\frac{1}{x+1}"), "1/(x+1)");
    }

    #[test]
    fn test_unmappable_superscript() {
        assert_eq!(UnicodeMath.render("e^{ab}"), "e^(ab)");
        assert_eq!(UnicodeMath.render("e^{2x}"), "e²ˣ");
    }

    #[test]
    fn test_trig_and_symbols() {
        assert_eq!(UnicodeMath.render("(\\sin x)' = \\cos x"), "(sin x)' = cos x");
        assert_eq!(UnicodeMath.render("a \\cdot b"), "a · b");
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(UnicodeMath.render("\\sqrt{x}"), "√x");
        assert_eq!(UnicodeMath.render("\\sqrt{x+1}"), "√(x+1)");
    }

    #[test]
    fn test_subscript() {
        assert_eq!(UnicodeMath.render("\\log_2 x"), "log₂ x");
        assert_eq!(UnicodeMath.render("\\sin\\theta"), "sin θ");
    }
}
