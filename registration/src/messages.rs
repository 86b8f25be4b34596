//! User-facing texts of the registration form.

pub const TITLE: &str = "Student Registration";

/// Shown in place of the form after a successful submission.
pub const SUCCESS: &str = "Congratulations! You have successfully signed up.\nSilicon Valley Liberia will be in touch soon.";

/// Banner shown above the form after any failed submission.
pub const SUBMISSION_FAILED: &str =
    "There was an error processing your request. Please try again later.";

pub const SUBMITTING: &str = "Submitting...";
