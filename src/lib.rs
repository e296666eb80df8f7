pub mod api;
pub mod dates;
pub mod fetch;
pub mod interp;
pub mod output;
pub mod quantiles;
pub mod scaling;
pub mod submission;
