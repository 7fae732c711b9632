//! Star list rendering for `ajaxful-rating`.
//!
//! [`StarsBuilder`] turns a [`Rateable`](ajaxful_rating_core::Rateable), a
//! viewer and [`RatingOptions`](ajaxful_rating_core::RatingOptions) into markup:
//!
//! ```html
//! <div class="ajaxful-rating-wrapper" id="ajaxful_rating_no-small_article_1">
//!   <ul class="ajaxful-rating max-5-stars">
//!     <li class="show-value" style="width: 60%" title="Currently rated 3 of 5">Currently rated 3 of 5</li>
//!     <li><a class="stars-1-5" href="/articles/1/rate?show_user_rating=false&amp;small=false&amp;stars=1" ...>1</a></li>
//!     ...
//!   </ul>
//! </div>
//! ```
//!
//! Stars are stacked: star `i` is `i/max` wide and lower stars sit above higher
//! ones, so hovering anywhere up to star `i` targets star `i`.

mod builder;

pub use builder::StarsBuilder;
