// Engine module - Core catalog logic (filtering, ordering, pagination, favorites)
// This layer sits between catalog entries (types) and CLI presentation.
// Everything here is synchronous and total: no I/O, no errors.

pub mod facets;
pub mod favorites;
pub mod filter;
mod item;
pub mod pagination;
pub mod sort;
pub mod view;

pub use facets::{FacetOptions, distinct_values, domain_tree, facet_options};
pub use favorites::FavoriteSet;
pub use filter::{FilterSelection, SearchQuery};
pub use item::CatalogItem;
pub use pagination::Pagination;
pub use sort::{SortKey, relative_age};
pub use view::{CatalogView, ViewState};
