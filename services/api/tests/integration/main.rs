mod feed_test;
mod follow_test;
mod helpers;
mod tweet_test;
