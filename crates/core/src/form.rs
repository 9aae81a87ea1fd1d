//! Waitlist email form: format validation and submit states.
//!
//! Pure state machine, no I/O. On a valid submission the form moves to a
//! static confirmation state; nothing is sent anywhere.

/// Minimal email format check: non-empty local part, one `@`, non-empty
/// domain containing an interior dot, no whitespace anywhere.
pub fn is_valid_email(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Editing,
    Submitted,
}

/// The "join the waitlist" overlay form.
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    email: String,
    phase: FormPhase,
    show_error: bool,
}

impl WaitlistForm {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            phase: FormPhase::Closed,
            show_error: false,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn has_error(&self) -> bool {
        self.show_error
    }

    pub fn open(&mut self) {
        if self.phase == FormPhase::Closed {
            self.phase = FormPhase::Editing;
        }
    }

    /// Close the overlay, discarding any unsubmitted input.
    pub fn close(&mut self) {
        self.email.clear();
        self.show_error = false;
        self.phase = FormPhase::Closed;
    }

    pub fn input_char(&mut self, ch: char) {
        if self.phase != FormPhase::Editing || ch.is_control() {
            return;
        }
        self.email.push(ch);
        self.show_error = false;
    }

    pub fn backspace(&mut self) {
        if self.phase != FormPhase::Editing {
            return;
        }
        self.email.pop();
        self.show_error = false;
    }

    /// Attempt submission. Invalid input keeps the form editable with a
    /// visible error; valid input reaches the confirmation state.
    pub fn submit(&mut self) -> bool {
        if self.phase != FormPhase::Editing {
            return false;
        }
        if is_valid_email(&self.email) {
            self.phase = FormPhase::Submitted;
            self.show_error = false;
            true
        } else {
            self.show_error = true;
            false
        }
    }
}

impl Default for WaitlistForm {
    fn default() -> Self {
        Self::new()
    }
}
