//! The load, order, paginate and map pipeline shared by list queries.

use ds_shared::{apply_order, paginate, ErrorDetail, PageRequest, PaginatedResponse, Sortable};

/// Turn a fully loaded collection into one page of response DTOs
///
/// An empty collection short-circuits to `empty` before any ordering or
/// pagination runs. The page size reported on success is always the
/// effective page size.
pub fn list_page<T, R, F>(
    records: Vec<T>,
    request: &PageRequest,
    empty: impl Into<ErrorDetail>,
    map: F,
) -> PaginatedResponse<Vec<R>>
where
    T: Sortable,
    F: FnMut(T) -> R,
{
    if records.is_empty() {
        return PaginatedResponse::fail(empty);
    }

    let ordered = apply_order(records, request.order());
    match paginate(ordered, request) {
        Ok(page) => {
            let page = page.map(map);
            PaginatedResponse::success(page.items, page.total_records, page.page_number, page.page_size)
        }
        Err(error) => PaginatedResponse::fail(error),
    }
}
