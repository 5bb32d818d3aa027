use std::fmt;

use super::api::{RegisterResponse, RegistrationApi, RegistrationPayload, SubmitError};
use super::context::AuthContext;
use super::i18n::{EnglishTranslator, Translator, CREATE_ACCOUNT_KEY};
use super::validation::{validate_all, FieldErrors, FormField};

pub const SUCCESS_MESSAGE: &str = "You have successfully logged in.";
pub const LOADING_LABEL: &str = "Loading...";

// =============================================================================
// STATE
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

impl RegistrationFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::FirstName => self.first_name = value,
            FormField::LastName => self.last_name = value,
            FormField::Email => self.email = value,
            FormField::Password => self.password = value,
        }
    }

    fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RegistrationFormState {
    pub fields: RegistrationFields,
    pub errors: FieldErrors,
    /// Form-level error from the last failed submission.
    pub form_error: Option<String>,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed, nothing was sent.
    Invalid,
    Registered,
    Failed(String),
}

// =============================================================================
// FORM
// =============================================================================

#[derive(Debug, Default)]
pub struct RegistrationForm {
    state: RegistrationFormState,
}

impl RegistrationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RegistrationFormState {
        &self.state
    }

    pub fn value(&self, field: FormField) -> &str {
        self.state.fields.get(field)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.state.errors
    }

    pub fn form_error(&self) -> Option<&str> {
        self.state.form_error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.state.fields.set(field, value.into());
    }

    /// Recompute every error from scratch. Returns true when all fields pass.
    pub fn validate(&mut self) -> bool {
        let fields = &self.state.fields;
        let errors = validate_all(|field| fields.get(field));

        self.state.errors = errors;
        self.state.form_error = None;
        self.state.errors.is_empty()
    }

    /// Validate and enter the loading state. `None` means nothing may be sent.
    pub fn begin_submit(&mut self) -> Option<RegistrationPayload> {
        if !self.validate() {
            tracing::debug!(
                "Registration blocked by {} invalid field(s)",
                self.state.errors.len()
            );
            return None;
        }

        self.state.loading = true;
        Some(self.state.fields.to_payload())
    }

    /// Apply the backend's answer and leave the loading state.
    pub fn finish_submit<C>(
        &mut self,
        result: Result<RegisterResponse, SubmitError>,
        auth: &mut C,
    ) -> SubmitOutcome
    where
        C: AuthContext + ?Sized,
    {
        self.state.loading = false;

        let outcome = result.and_then(|response| {
            match (response.is_success(), response.token()) {
                (true, Some(token)) => Ok(token.to_string()),
                _ => Err(SubmitError::Rejected {
                    message: response.message.clone(),
                }),
            }
        });

        match outcome {
            Ok(token) => {
                auth.login(token);
                auth.set_message(SUCCESS_MESSAGE.to_string());
                self.state.errors = FieldErrors::new();
                self.state.form_error = None;
                tracing::info!("Registration succeeded");
                SubmitOutcome::Registered
            }
            Err(err) => {
                tracing::warn!("Registration failed: {}", err);
                let message = err.user_message();
                self.state.errors = FieldErrors::new();
                self.state.form_error = Some(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Full submission: validate, send once, apply the answer.
    pub async fn submit<A, C>(&mut self, api: &A, auth: &mut C) -> SubmitOutcome
    where
        A: RegistrationApi + ?Sized,
        C: AuthContext + ?Sized,
    {
        let Some(payload) = self.begin_submit() else {
            return SubmitOutcome::Invalid;
        };

        tracing::debug!("Submitting registration");
        let result = api.register(&payload).await;
        self.finish_submit(result, auth)
    }

    /// Render with the built-in English labels.
    pub fn view(&self) -> FormView {
        self.view_with(&EnglishTranslator)
    }

    pub fn view_with<T>(&self, translator: &T) -> FormView
    where
        T: Translator + ?Sized,
    {
        if self.state.loading {
            return FormView::Loading;
        }

        let fields = FormField::ALL
            .iter()
            .map(|&field| FieldView {
                field,
                label: translator.translate(field.translation_key()),
                input_type: field.input_type(),
                value: self.value(field).to_string(),
                error: self.state.errors.message(field),
            })
            .collect();

        FormView::Form {
            form_error: self.state.form_error.clone(),
            fields,
            submit_label: translator.translate(CREATE_ACCOUNT_KEY),
        }
    }
}

// =============================================================================
// VIEW
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: String,
    pub input_type: &'static str,
    pub value: String,
    pub error: Option<String>,
}

/// What the form shows: either the loading indicator alone or every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView {
    Loading,
    Form {
        form_error: Option<String>,
        fields: Vec<FieldView>,
        submit_label: String,
    },
}

impl fmt::Display for FormView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormView::Loading => writeln!(f, "{}", LOADING_LABEL),
            FormView::Form {
                form_error,
                fields,
                submit_label,
            } => {
                if let Some(message) = form_error {
                    writeln!(f, "! {}", message)?;
                }
                for field in fields {
                    let shown = if field.input_type == "password" {
                        "*".repeat(field.value.chars().count())
                    } else {
                        field.value.clone()
                    };
                    writeln!(f, "{}: {}", field.label, shown)?;
                    if let Some(message) = &field.error {
                        writeln!(f, "  ! {}", message)?;
                    }
                }
                writeln!(f, "[ {} ]", submit_label)
            }
        }
    }
}
