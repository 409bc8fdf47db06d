mod feed_controller;

pub use feed_controller::FeedController;
