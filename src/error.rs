use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    LexicalError,
    SyntaxError,
    UndefinedVariable,
    DuplicateDeclaration,
    UseBeforeInit,
    DivisionByZero,
    NumericOverflow,
    /// Writing a `print` result to the output sink failed.
    Output,
}

impl ErrorKind {
    fn title(self) -> &'static str {
        match self {
            ErrorKind::LexicalError => "Lexical Error",
            ErrorKind::SyntaxError => "Syntax Error",
            ErrorKind::UndefinedVariable
            | ErrorKind::DuplicateDeclaration
            | ErrorKind::UseBeforeInit => "Name Error",
            ErrorKind::DivisionByZero | ErrorKind::NumericOverflow => "Arithmetic Error",
            ErrorKind::Output => "Output Error",
        }
    }

    fn color(self) -> Color {
        match self {
            ErrorKind::LexicalError => Color::Red,
            ErrorKind::SyntaxError => Color::Yellow,
            ErrorKind::UndefinedVariable
            | ErrorKind::DuplicateDeclaration
            | ErrorKind::UseBeforeInit => Color::Blue,
            ErrorKind::DivisionByZero | ErrorKind::NumericOverflow => Color::Magenta,
            ErrorKind::Output => Color::Red,
        }
    }
}

/// A fatal diagnostic. Nothing in the crate recovers from one; it travels
/// up to the driver, which reports it and stops.
#[derive(Debug, Clone)]
pub struct LangError {
    pub kind: ErrorKind,
    pub span: Span,
    /// 1-based line shown in the one-line form.
    pub line: usize,
    pub message: String,
    pub help: Option<String>,
}

impl LangError {
    pub fn new(kind: ErrorKind, span: Span, line: usize, message: String) -> Self {
        Self {
            kind,
            span,
            line,
            message,
            help: None,
        }
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn lexical(span: Span, line: usize, message: String) -> Self {
        Self::new(ErrorKind::LexicalError, span, line, message)
    }

    pub fn syntax(span: Span, line: usize, message: &str) -> Self {
        Self::new(ErrorKind::SyntaxError, span, line, message.to_string())
    }

    pub fn undefined_variable(span: Span, line: usize, name: &str) -> Self {
        Self::new(
            ErrorKind::UndefinedVariable,
            span,
            line,
            format!("Undefined variable '{}'", name),
        )
        .with_help("Variables must be declared with 'int' before they are used.")
    }

    pub fn use_before_init(span: Span, line: usize, name: &str) -> Self {
        Self::new(
            ErrorKind::UseBeforeInit,
            span,
            line,
            format!("Variable '{}' used before initialization", name),
        )
    }

    pub fn duplicate_declaration(span: Span, line: usize, name: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateDeclaration,
            span,
            line,
            format!("Variable '{}' already declared", name),
        )
        .with_help("Variables are write-once; pick a new name instead.")
    }

    pub fn division_by_zero(span: Span, line: usize) -> Self {
        Self::new(
            ErrorKind::DivisionByZero,
            span,
            line,
            "Division by zero".to_string(),
        )
    }

    pub fn numeric_overflow(span: Span, line: usize, message: String) -> Self {
        Self::new(ErrorKind::NumericOverflow, span, line, message)
    }

    pub fn output(span: Span, line: usize, err: std::io::Error) -> Self {
        Self::new(
            ErrorKind::Output,
            span,
            line,
            format!("Failed to write output: {}", err),
        )
    }

    /// Renders a labelled source snippet to stderr.
    pub fn report(&self, source: &str, filename: Option<&str>) {
        let filename = filename.unwrap_or("<repl>");
        let color = self.kind.color();

        // ariadne wants a non-empty label range inside the source
        let end = self.span.end.min(source.len());
        let start = self.span.start.min(end);
        let range = if start == end && start > 0 {
            start - 1..end
        } else {
            start..end
        };

        let mut builder = Report::build(ReportKind::Error, filename, range.start)
            .with_message(format!("{}: {}", self.kind.title().fg(color), self.message))
            .with_label(
                Label::new((filename, range))
                    .with_message(&self.message)
                    .with_color(color),
            );

        if let Some(ref help_text) = self.help {
            builder = builder.with_note(format!("{}: {}", "help".fg(Color::Cyan), help_text));
        }

        if let Err(e) = builder
            .finish()
            .eprint((filename, Source::from(source)))
        {
            let _ = writeln!(io::stderr(), "{} (failed to render report: {})", self, e);
        }
    }
}

impl fmt::Display for LangError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error at line {}: {}", self.line, self.message)
    }
}

impl std::error::Error for LangError {}
