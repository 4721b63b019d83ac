pub mod quiz_review;
