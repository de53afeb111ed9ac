use crate::error::CampusError;

pub type CampusResult<T> = Result<T, CampusError>;
