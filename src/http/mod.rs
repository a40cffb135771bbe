//! HTTP protocol layer.
//!
//! Response construction, MIME detection, and the fixed development
//! header policy, decoupled from the filesystem logic.

pub mod headers;
pub mod mime;
pub mod response;

pub use headers::apply_dev_headers;
pub use response::{
    build_404_response, build_405_response, build_file_response, build_listing_response,
    build_options_response, build_redirect_response,
};
