use crate::compat::{String, ToString};
use crate::navigator::Navigator;
use crate::search_params::SearchParams;

/// Name of the query parameter that carries the active pool identifier
pub const POOL_ID_PARAM: &str = "poolId";

/// Accessor for the `poolId` query parameter
pub const POOL_ID: QueryParam = QueryParam::new(POOL_ID_PARAM);

/// Reads, sets and clears one named query parameter of the current address.
///
/// Each call parses the current query fresh and keeps nothing between calls.
/// The path is never touched. `set` and `clear` push exactly one new history
/// entry; the pushed address carries no fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParam {
    name: &'static str,
}

impl QueryParam {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Value of the parameter, or `None` when it is not in the address.
    pub fn get<N: Navigator + ?Sized>(&self, navigator: &N) -> Option<String> {
        let location = navigator.current();
        let params = SearchParams::parse(location.query().unwrap_or_default());
        let value = params.get(self.name).map(ToString::to_string);
        tracing::trace!(param = self.name, present = value.is_some(), "query param read");
        value
    }

    /// Insert or overwrite the parameter. Any string is accepted as-is.
    pub fn set<N: Navigator + ?Sized>(&self, navigator: &mut N, value: &str) {
        let location = navigator.current();
        let mut params = SearchParams::parse(location.query().unwrap_or_default());
        params.set(self.name, value);
        navigator.push(location.with_query(Some(params.to_string())));
    }

    /// Remove the parameter.
    ///
    /// When nothing else remains the new address is the bare path with no `?`.
    /// When the parameter was not present, the current query is kept verbatim.
    pub fn clear<N: Navigator + ?Sized>(&self, navigator: &mut N) {
        let location = navigator.current();
        let mut params = SearchParams::parse(location.query().unwrap_or_default());

        let query = if !params.delete(self.name) {
            location.query().map(ToString::to_string)
        } else if params.is_empty() {
            None
        } else {
            Some(params.to_string())
        };
        navigator.push(location.with_query(query));
    }
}

/// The pool identifier stored in the current address, if any.
pub fn get_pool_id<N: Navigator + ?Sized>(navigator: &N) -> Option<String> {
    POOL_ID.get(navigator)
}

/// Store `pool_id` in the current address.
pub fn set_pool_id<N: Navigator + ?Sized>(navigator: &mut N, pool_id: &str) {
    POOL_ID.set(navigator, pool_id);
}

/// Remove the pool identifier from the current address.
pub fn clear_pool_id<N: Navigator + ?Sized>(navigator: &mut N) {
    POOL_ID.clear(navigator);
}
