//! Ranking alternative routes.

use super::Route;

/// Sort routes cheapest-first.
///
/// Only the total price is considered. The sort is stable, so routes of
/// equal price keep their relative input order.
pub fn rank_routes(mut routes: Vec<Route>) -> Vec<Route> {
    routes.sort_by(Route::price_cmp);
    routes
}
