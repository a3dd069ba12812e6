pub mod b001_bid_notice;
