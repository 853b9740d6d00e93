pub mod style;
pub mod table;

pub use style::{refresh_style, style, UiStyle};
pub use table::{Table, TableColumn, TableRenderer};
