pub mod access;
pub mod paging;

pub use access::{
    is_same_origin, resolve_redirect, AccessMode, AccessOptions, AccessView, AuthProvider,
    FieldError, FieldRestrictions, FormDescription, FormField, FormKind, ThirdPartyAuth,
};
pub use paging::{
    FieldMetadata, FieldRegistry, PagingCollection, PagingEvent, QueryOptions, SortDirection,
};
