use crate::error::IngestResult;
use crate::record::Page;

/// Something that can hand out one page of records per call.
///
/// There is no cursor: every call asks for "another page" and the source
/// decides what that means. Implementations report transport problems as
/// [`IngestError::FetchFailed`](crate::IngestError::FetchFailed) and bad bodies
/// as [`IngestError::DecodeFailed`](crate::IngestError::DecodeFailed).
pub trait RecordSource {
    /// Fetch and decode the next page.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a valid page.
    fn fetch_page(&self) -> IngestResult<Page>;
}

impl<S: RecordSource + ?Sized> RecordSource for &S {
    fn fetch_page(&self) -> IngestResult<Page> {
        (**self).fetch_page()
    }
}
