//! This module defines the common functionality for paging the sales listing.

use crate::Error;

/// The fixed number of sale records returned per listing page.
pub const PAGE_SIZE: u64 = 10;

/// The page number used when a request does not specify one.
pub const DEFAULT_PAGE: u64 = 1;

/// Parse a raw `page` query parameter into a 1-based page number.
///
/// # Errors
/// Returns [Error::InvalidParameter] if `raw` is not an integer of at least 1.
pub fn parse_page(raw: &str) -> Result<u64, Error> {
    let page: u64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::InvalidParameter(format!("page must be a number, got \"{raw}\"")))?;

    if page < 1 {
        return Err(Error::InvalidParameter(
            "page must be at least 1, got 0".to_string(),
        ));
    }

    Ok(page)
}

/// The offset into the listing at which the 1-based `page` starts.
pub fn page_offset(page: u64) -> u64 {
    (page - 1) * PAGE_SIZE
}
