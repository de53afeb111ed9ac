//! Sign-in page state: which of the login, registration and password reset
//! forms is shown, and where to go once authentication completes.

pub mod forms;
pub mod redirect;
pub mod view;

pub use forms::{FieldError, FieldRestrictions, FormDescription, FormField};
pub use redirect::{is_same_origin, resolve_redirect};
pub use view::{AccessMode, AccessOptions, AccessView, AuthProvider, FormKind, ThirdPartyAuth};
