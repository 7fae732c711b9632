#![doc = include_str!("../README.md")]

pub mod logging;
pub mod page;
pub mod script;

pub use ajaxful_rating_core::{
    CurrentUser, DimensionConfig, Environment, ForgeryProtection, HttpMethod, MemoryRateable,
    MessageKey, Rate, RateRoutes, Rateable, RatingError, RatingOptions, RemoteOptions, RouteTable,
    Translate, UserId, Viewer,
};
pub use ajaxful_rating_css::{CssBuilder, CssValue};
pub use ajaxful_rating_i18n::Catalog;
pub use ajaxful_rating_stars::StarsBuilder;
pub use page::Page;

/// Re-export of the `tracing` facade used by every crate of the workspace.
pub use tracing as log;

/// Everything needed to render widgets on a page.
pub mod prelude {
    pub use crate::{
        Catalog, CssBuilder, DimensionConfig, Environment, ForgeryProtection, HttpMethod,
        MemoryRateable, Page, Rateable, RatingError, RatingOptions, RouteTable, UserId, Viewer,
    };
}
