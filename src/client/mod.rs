//! Headless registration form: field rules, submission flow and the
//! injected auth context it reports to.

pub mod api;
pub mod context;
pub mod form;
pub mod i18n;
pub mod validation;

pub use api::{HttpRegistrationApi, RegisterResponse, RegistrationApi, RegistrationPayload, SubmitError};
pub use context::{AuthContext, SessionContext};
pub use i18n::{Catalog, EnglishTranslator, Translator};
pub use form::{FieldView, FormView, RegistrationForm, RegistrationFormState, SubmitOutcome};
pub use validation::{FieldErrors, FormField, ValidationError};
