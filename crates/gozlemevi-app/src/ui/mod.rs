pub mod cards;
pub mod form;
pub mod gallery;
pub mod nav;
pub mod sky;
pub mod stats;
pub mod theme;

pub use form::WishForm;
pub use nav::View;
pub use theme::GozlemeviTheme;
