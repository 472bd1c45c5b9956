use crate::application::dto::{UsesRequest, UsesResponse};
use crate::shared::Result;

/// UsesQueryPort - Inbound port for the "which formulae use X?" query
///
/// Targets that do not resolve are reported inside the response, not as an
/// `Err`. An `Err` means the query could not run at all (unreadable index,
/// invalid input).
pub trait UsesQueryPort {
    fn find_uses(&self, request: UsesRequest) -> Result<UsesResponse>;
}
