use serde::Serialize;

/*----- */
// Market
/*----- */
// Static per-venue market record. `id` is the venue instrument id, distinct
// from the library's unified `symbol`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Market {
    pub id: &'static str,
    pub symbol: &'static str,
    pub base: &'static str,
    pub quote: &'static str,
    pub base_id: &'static str,
    pub quote_id: &'static str,
}
