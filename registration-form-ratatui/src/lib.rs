//! # registration-form-ratatui
//!
//! Terminal form for student registration.
//!
//! All fields are displayed at once in a scrollable form. Users navigate
//! between fields with Tab/Shift+Tab or the arrow keys and submit with F10,
//! Ctrl+Enter, or Enter on the submit button. Fields show their validation
//! error once touched; a failed submission shows a banner and keeps the input.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use registration::{HttpSubmitter, RegistrationConfig};
//! use registration_form_ratatui::{FormView, run};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let submitter = HttpSubmitter::new(&RegistrationConfig::production()?)?;
//!     let mut view = FormView::new();
//!     run(&mut view, &submitter).await?;
//!     Ok(())
//! }
//! ```

mod app;
mod draw;
mod field;
mod theme;
mod view;

pub use app::{RatatuiFormError, run};
pub use draw::draw;
pub use theme::Theme;
pub use view::{FormView, ViewAction};
