use std::path::PathBuf;

use anyhow::Result;
use derive_more::Display;
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text};
use log::info;
use signup_form::config::FormConfig;
use signup_form::models::{Field, SignupForm};
use signup_form::presentation::{FieldState, FormView, PresentationSink, VisibilityToggle};
use signup_form::services::{FormCoordinator, SubmitError, Submitter};
use signup_form::utils::constants::DEFAULT_CONFIG_FILE;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A text menu
trait Menu {
    /// Runs one iteration of the menu. Returns None when the menu
    /// wants to stop, Some(()) to run again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs the menu until it exits, reporting errors without stopping,
    /// unless the terminal itself is gone.
    fn enter_loop(&mut self) {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                eprintln!("Error: {error}");
                if is_fatal(&error) {
                    break;
                }
            }
        }
    }
}

/// Errors no further prompt can recover from: no terminal, Ctrl-C, or a
/// broken input stream.
fn is_fatal(error: &anyhow::Error) -> bool {
    matches!(
        error.downcast_ref::<InquireError>(),
        Some(InquireError::NotTTY | InquireError::OperationInterrupted | InquireError::IO(_))
    )
}

/// Renders verdicts on the terminal as they come, and keeps them for display
struct TerminalView {
    view: FormView,
}

impl PresentationSink for TerminalView {
    fn mark_invalid(&mut self, field: Field, message: &str) {
        println!("  [!] {field}: {message}");
        self.view.mark_invalid(field, message);
    }

    fn mark_valid(&mut self, field: Field) {
        println!("  [ok] {field}");
        self.view.mark_valid(field);
    }
}

/// Hands the accepted form over. Here, that only means announcing it.
struct ConsoleSubmitter;

impl Submitter for ConsoleSubmitter {
    fn submit_form(&mut self, form: &SignupForm) -> Result<(), SubmitError> {
        info!("Registration accepted for {}", form.email.trim());
        println!(
            "\n[*] Welcome, {}! Your account request has been sent.",
            form.username.trim()
        );
        Ok(())
    }
}

struct App {
    coordinator: FormCoordinator,
    form: SignupForm,
    view: TerminalView,
    toggle: VisibilityToggle,
}

impl App {
    fn new(coordinator: FormCoordinator) -> Self {
        App {
            coordinator,
            form: SignupForm::default(),
            view: TerminalView {
                view: FormView::new(),
            },
            toggle: VisibilityToggle::new(),
        }
    }

    fn start(&mut self) {
        println!("Sign up: fill every field, then submit.");
        self.enter_loop();
    }

    fn prompt(&self, field: Field) -> Result<String> {
        let label = format!("{field}:");
        let value = match field {
            Field::Password => Password::new(&label)
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()?,
            Field::ConfirmPassword => {
                let mode = if self.toggle.is_obscured() {
                    PasswordDisplayMode::Masked
                } else {
                    PasswordDisplayMode::Full
                };
                Password::new(&label)
                    .without_confirmation()
                    .with_display_mode(mode)
                    .prompt()?
            }
            _ => Text::new(&label)
                .with_initial_value(self.form.get(field))
                .prompt()?,
        };
        Ok(value)
    }

    fn show(&self) {
        for field in Field::iter() {
            let raw = self.form.get(field);
            let obscured = match field {
                Field::ConfirmPassword => self.toggle.is_obscured(),
                _ => field.is_secret(),
            };
            let shown = if obscured {
                "*".repeat(raw.chars().count())
            } else {
                raw.to_owned()
            };
            let state = match self.view.view.state(field) {
                FieldState::Untouched => String::new(),
                FieldState::Success => "[ok]".to_owned(),
                FieldState::Error(message) => format!("[!] {message}"),
            };
            println!("{:>18}: {shown:<30} {state}", field.to_string());
        }
        println!("{:>18}: {}", "Confirm input", self.toggle.input_type());
    }
}

impl Menu for App {
    fn enter(&mut self) -> Result<MenuExit> {
        #[derive(EnumIter, Display)]
        enum Choice {
            #[display("Fill a field")]
            Fill,
            #[display("Show / hide the password confirmation")]
            ToggleVisibility,
            #[display("Review the form")]
            Review,
            #[display("Submit")]
            Submit,
            #[display("Quit")]
            Exit,
        }

        let Some(choice) =
            Select::new("What do you want to do?", Choice::iter().collect()).prompt_skippable()?
        else {
            return Ok(MENU_EXIT);
        };

        match choice {
            Choice::Fill => {
                let field = Select::new("Which field?", Field::iter().collect()).prompt()?;
                let value = self.prompt(field)?;
                self.form.set(field, value);
                // Leaving the input validates it
                self.coordinator.blur(field, &self.form, &mut self.view);
            }

            Choice::ToggleVisibility => {
                self.toggle.toggle();
                println!("Password confirmation is now shown as {}", self.toggle.input_type());
            }

            Choice::Review => self.show(),

            Choice::Submit => {
                let result =
                    self.coordinator
                        .submit(&self.form, &mut self.view, &mut ConsoleSubmitter)?;
                if result.all_valid() {
                    return Ok(MENU_EXIT);
                }
                println!("[!] Please correct the fields above before submitting again.");
            }

            Choice::Exit => return Ok(MENU_EXIT),
        }
        Ok(MENU_LOOP)
    }
}

fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let loaded = FormConfig::open(&config_path)?;
    let config = loaded.clone().unwrap_or_default();

    simple_logging::log_to_file(&config.log_file, config.log_level)?;
    match loaded {
        Some(_) => info!("Starting signup form with {}", config_path.display()),
        None => info!("Config file {} not found, using defaults", config_path.display()),
    }

    App::new(FormCoordinator::new(&config)).start();
    Ok(())
}
