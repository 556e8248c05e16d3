/// Route module for file-based routing
///
/// Contains the pure inference steps applied to each discovered view file:
/// - `url`: file location → URL pattern
/// - `name`: URL pattern → URL name

pub mod name;
pub mod url;

// Re-export commonly used functions
pub use name::{get_url_name, INDEX_NAME};
pub use url::{get_url, is_index};
