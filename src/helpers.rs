/// Prune fragment (#hash) from an address
/// Returns (`address_without_fragment`, `fragment_without_hash`)
/// Optimization: Uses SIMD-accelerated memchr for fast '#' search
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split an address without fragment into (`path`, `query_without_question_mark`).
/// Only the first '?' separates; later ones belong to the query.
pub fn split_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Split an address into (`path`, `query`, `fragment`), none of them carrying
/// their leading delimiter.
pub fn split_address(input: &str) -> (&str, Option<&str>, Option<&str>) {
    let (rest, fragment) = prune_fragment(input);
    let (path, query) = split_query(rest);
    (path, query, fragment)
}
