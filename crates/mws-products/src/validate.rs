//! Argument validation.
//!
//! Every check runs before any signing or network work, and all of them are
//! pure functions of their input.

use mws_core::{IdType, ItemCondition};

use crate::error::{ProductsError, ProductsResult};

/// Maximum number of identifiers per `GetMatchingProductForId` call.
pub const MAX_ID_LIST_LEN: usize = 5;

/// Maximum number of ASINs per batch ASIN lookup.
pub const MAX_ASIN_LIST_LEN: usize = 20;

/// Check that `id_type` is one of the accepted product identifier types.
pub fn validate_id_type(id_type: &str) -> ProductsResult<IdType> {
    Ok(id_type.parse::<IdType>()?)
}

/// Check that `condition` is one of the accepted item conditions.
///
/// The empty string is rejected; callers with an optional condition skip
/// this check instead.
pub fn validate_item_condition(condition: &str) -> ProductsResult<ItemCondition> {
    Ok(condition.parse::<ItemCondition>()?)
}

/// Check that `list` holds at most `max_len` entries. Empty lists pass.
pub fn validate_list_len<T>(list: &[T], max_len: usize) -> ProductsResult<()> {
    if list.len() > max_len {
        return Err(ProductsError::InvalidArgument(format!(
            "list has {} entries, maximum is {max_len}",
            list.len()
        )));
    }
    Ok(())
}
