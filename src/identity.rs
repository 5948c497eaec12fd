//! Stub identity resolution.
//!
//! There is no authentication collaborator yet, so requests that don't name
//! an owner get a fixed placeholder identity. Swapping this for a real auth
//! extractor should not require touching any handler logic.

use uuid::Uuid;

/// Placeholder owner applied when a create request names no owner.
pub const ANONYMOUS_OWNER: Uuid = Uuid::from_u128(0x60d0_fe4f_1a2e_7631_3b1f_501e_0000_0000);

/// Resolve the effective owner for a write: the requested identity if one
/// was supplied, the anonymous placeholder otherwise.
pub fn resolve_owner(requested: Option<Uuid>) -> Uuid {
    requested.unwrap_or(ANONYMOUS_OWNER)
}
