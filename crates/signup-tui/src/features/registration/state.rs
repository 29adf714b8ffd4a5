//! Signup form state.

/// Email input plus the activity selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    /// Index into the current activity options.
    pub selected: usize,
}

impl SignupForm {
    /// Selected option name, if the options are non-empty.
    pub fn selected_activity<'a>(&self, options: &'a [String]) -> Option<&'a str> {
        options.get(self.selected).map(String::as_str)
    }

    pub fn select_next(&mut self, option_count: usize) {
        if option_count > 0 {
            self.selected = (self.selected + 1) % option_count;
        }
    }

    pub fn select_prev(&mut self, option_count: usize) {
        if option_count > 0 {
            self.selected = (self.selected + option_count - 1) % option_count;
        }
    }

    /// Re-points the selector after the options were rebuilt.
    ///
    /// Keeps the previously selected name when it still exists.
    pub fn retain_selection(&mut self, previous: Option<&str>, options: &[String]) {
        self.selected = previous
            .and_then(|name| options.iter().position(|option| option == name))
            .unwrap_or(0);
    }

    /// Resets both fields, like a submitted HTML form.
    pub fn reset(&mut self) {
        self.email.clear();
        self.selected = 0;
    }
}
