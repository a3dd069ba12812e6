pub mod b001_bid_notice;
pub mod r100_regional_stats;
