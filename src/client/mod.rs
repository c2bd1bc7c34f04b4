pub mod api;
pub mod command;
pub mod state;
pub mod view;

pub use api::{ClientError, HttpMovieApi, MovieApi};
pub use state::{Filter, ViewState};
