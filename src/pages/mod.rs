// Page controllers: thin state holders over the shared search filters.

pub mod home;
pub mod grid;
pub mod blog;

pub use blog::BlogIndex;
pub use grid::ProductGrid;
pub use home::HomePage;
