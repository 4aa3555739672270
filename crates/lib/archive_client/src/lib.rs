//! # archive_client
//!
//! Client side of Chat Archive: the [`ArchiveApi`] backends and the
//! UI-independent session controller that drives them.

pub mod api;
pub mod controller;
pub mod download;
pub mod error;
pub mod http;
pub mod notice;
pub mod session;
pub mod stub;

pub use api::{ArchiveApi, IngestInput, Upload};
pub use controller::Controller;
pub use error::{ClientError, Result};
pub use http::HttpApi;
pub use notice::{Level, Notice};
pub use session::{Controls, Session, Speaker, Turn, TurnStatus};
pub use stub::StubApi;
