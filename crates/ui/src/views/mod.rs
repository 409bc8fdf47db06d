mod end_of_feed;
mod feed;
mod reel_card;
mod reels;
pub(crate) mod scripts;
mod start;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use end_of_feed::EndOfFeed;
pub use feed::FeedView;
pub use reel_card::ReelCard;
pub use reels::ReelsView;
pub use start::{StartView, SUGGESTIONS};
pub use state::ViewError;
