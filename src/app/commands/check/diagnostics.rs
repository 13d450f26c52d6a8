#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// What the finding is about: a file path or a configuration field.
    pub subject: String,
    pub message: String,
}

/// Collected findings, reported all at once so a single run surfaces every
/// problem.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_error(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.errors.push(Diagnostic { subject: subject.into(), message: message.into() });
    }

    pub fn push_warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic { subject: subject.into(), message: message.into() });
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn emit(&self) {
        for diagnostic in &self.errors {
            eprintln!("[ERROR] {}: {}", diagnostic.subject, diagnostic.message);
        }
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.subject, diagnostic.message);
        }
    }
}
